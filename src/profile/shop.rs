//! Purchase and equip rules for the shop screen.

use super::types::PlayerProfile;
use crate::config::{ShopCatalog, SkinCategory};

/// What happened when the player picked a shop item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShopOutcome {
    /// Coins were deducted, the item unlocked and equipped.
    Purchased { price: u64 },
    /// Item was already owned; it is now equipped.
    Equipped,
    /// Item is locked and the balance is below its price. Nothing changed.
    InsufficientCoins { price: u64, balance: u64 },
    /// Id is not in the catalog. Nothing changed.
    UnknownItem,
}

/// Buy a locked item or equip an owned one.
pub fn buy_or_equip(
    profile: &mut PlayerProfile,
    catalog: &ShopCatalog,
    category: SkinCategory,
    id: &str,
) -> ShopOutcome {
    let Some(item) = catalog.find(category, id) else {
        return ShopOutcome::UnknownItem;
    };

    if profile.is_unlocked(category, &item.id) {
        profile.set_equipped(category, &item.id);
        return ShopOutcome::Equipped;
    }

    if profile.coins < item.price {
        return ShopOutcome::InsufficientCoins {
            price: item.price,
            balance: profile.coins,
        };
    }

    profile.coins -= item.price;
    profile.unlock(category, &item.id);
    profile.set_equipped(category, &item.id);
    ShopOutcome::Purchased { price: item.price }
}
