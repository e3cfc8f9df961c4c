//! Static shop catalog: purchasable bird skins and obstacle styles.

use crate::core::constants::DEFAULT_ITEM_ID;
use serde::{Deserialize, Serialize};

/// Palette tag a renderer maps to a concrete color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    Primary,
    Accent,
    Gold,
    Silver,
    Sky,
}

/// Which profile slot an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkinCategory {
    Birds,
    Obstacles,
}

impl SkinCategory {
    pub const ALL: [SkinCategory; 2] = [SkinCategory::Birds, SkinCategory::Obstacles];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Birds => "Bird Skins",
            Self::Obstacles => "Obstacle Styles",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopItem {
    pub id: String,
    pub name: String,
    pub price: u64,
    pub color: ColorTag,
}

impl ShopItem {
    pub fn new(id: &str, name: &str, price: u64, color: ColorTag) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            price,
            color,
        }
    }

    pub fn is_default(&self) -> bool {
        self.id == DEFAULT_ITEM_ID
    }
}

/// Ordered item lists per category. Each list always starts with a
/// zero-price `default` item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopCatalog {
    pub birds: Vec<ShopItem>,
    pub obstacles: Vec<ShopItem>,
}

impl Default for ShopCatalog {
    fn default() -> Self {
        Self::new(
            vec![
                ShopItem::new("default", "Default", 0, ColorTag::Gold),
                ShopItem::new("golden", "Golden", 100, ColorTag::Gold),
                ShopItem::new("rainbow", "Rainbow", 500, ColorTag::Accent),
                ShopItem::new("robot", "Robot", 999, ColorTag::Silver),
            ],
            vec![
                ShopItem::new("default", "Default", 0, ColorTag::Primary),
                ShopItem::new("crystal", "Crystal", 150, ColorTag::Sky),
                ShopItem::new("neon", "Neon", 300, ColorTag::Accent),
                ShopItem::new("gold", "Gold", 750, ColorTag::Gold),
            ],
        )
    }
}

impl ShopCatalog {
    /// Build a catalog, inserting (or repricing to zero) the `default` item of
    /// each list and moving it to the front.
    pub fn new(birds: Vec<ShopItem>, obstacles: Vec<ShopItem>) -> Self {
        Self {
            birds: with_default_first(birds, ColorTag::Gold),
            obstacles: with_default_first(obstacles, ColorTag::Primary),
        }
    }

    pub fn items(&self, category: SkinCategory) -> &[ShopItem] {
        match category {
            SkinCategory::Birds => &self.birds,
            SkinCategory::Obstacles => &self.obstacles,
        }
    }

    pub fn find(&self, category: SkinCategory, id: &str) -> Option<&ShopItem> {
        self.items(category).iter().find(|item| item.id == id)
    }

    /// Position of an item inside its category list.
    pub fn index_of(&self, category: SkinCategory, id: &str) -> Option<usize> {
        self.items(category).iter().position(|item| item.id == id)
    }

    /// Item to render for an equipped id; unknown ids render as the default.
    pub fn resolve(&self, category: SkinCategory, id: &str) -> &ShopItem {
        self.find(category, id)
            .unwrap_or_else(|| &self.items(category)[0])
    }

    pub fn bird_skin(&self, id: &str) -> &ShopItem {
        self.resolve(SkinCategory::Birds, id)
    }

    pub fn obstacle_skin(&self, id: &str) -> &ShopItem {
        self.resolve(SkinCategory::Obstacles, id)
    }
}

fn with_default_first(items: Vec<ShopItem>, default_color: ColorTag) -> Vec<ShopItem> {
    let (mut defaults, rest): (Vec<ShopItem>, Vec<ShopItem>) =
        items.into_iter().partition(ShopItem::is_default);
    let mut default_item = defaults
        .drain(..)
        .next()
        .unwrap_or_else(|| ShopItem::new(DEFAULT_ITEM_ID, "Default", 0, default_color));
    default_item.price = 0;

    let mut out = Vec::with_capacity(rest.len() + 1);
    out.push(default_item);
    for item in rest {
        if !out.iter().any(|existing| existing.id == item.id) {
            out.push(item);
        }
    }
    out
}
