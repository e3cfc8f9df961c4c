//! Player profile and shop economy.

pub mod shop;
pub mod types;

pub use shop::{buy_or_equip, ShopOutcome};
pub use types::PlayerProfile;
