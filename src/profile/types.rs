//! Durable player progression.

use crate::config::SkinCategory;
use crate::core::constants::DEFAULT_ITEM_ID;
use serde::{Deserialize, Serialize};

/// Coins, best score and cosmetic unlocks. Owned by the host; the core only
/// mutates it through purchases, equips and game-over settlement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerProfile {
    pub coins: u64,
    pub high_score: u32,
    pub bird_skin: String,
    pub obstacle_skin: String,
    pub unlocked_birds: Vec<String>,
    pub unlocked_obstacles: Vec<String>,
}

impl Default for PlayerProfile {
    fn default() -> Self {
        Self {
            coins: 0,
            high_score: 0,
            bird_skin: DEFAULT_ITEM_ID.to_string(),
            obstacle_skin: DEFAULT_ITEM_ID.to_string(),
            unlocked_birds: vec![DEFAULT_ITEM_ID.to_string()],
            unlocked_obstacles: vec![DEFAULT_ITEM_ID.to_string()],
        }
    }
}

impl PlayerProfile {
    pub fn unlocked(&self, category: SkinCategory) -> &[String] {
        match category {
            SkinCategory::Birds => &self.unlocked_birds,
            SkinCategory::Obstacles => &self.unlocked_obstacles,
        }
    }

    fn unlocked_mut(&mut self, category: SkinCategory) -> &mut Vec<String> {
        match category {
            SkinCategory::Birds => &mut self.unlocked_birds,
            SkinCategory::Obstacles => &mut self.unlocked_obstacles,
        }
    }

    pub fn is_unlocked(&self, category: SkinCategory, id: &str) -> bool {
        self.unlocked(category).iter().any(|owned| owned == id)
    }

    pub fn equipped(&self, category: SkinCategory) -> &str {
        match category {
            SkinCategory::Birds => &self.bird_skin,
            SkinCategory::Obstacles => &self.obstacle_skin,
        }
    }

    pub fn set_equipped(&mut self, category: SkinCategory, id: &str) {
        let slot = match category {
            SkinCategory::Birds => &mut self.bird_skin,
            SkinCategory::Obstacles => &mut self.obstacle_skin,
        };
        *slot = id.to_string();
    }

    /// Add an id to the unlocked set. Returns false if it was already there.
    pub fn unlock(&mut self, category: SkinCategory, id: &str) -> bool {
        if self.is_unlocked(category, id) {
            return false;
        }
        self.unlocked_mut(category).push(id.to_string());
        true
    }

    /// Fold a finished session into the profile: add the coins it earned and
    /// raise the high score if it was beaten. Returns true on a new record.
    pub fn settle_session(&mut self, score: u32, coins_earned: u64) -> bool {
        self.coins = self.coins.saturating_add(coins_earned);
        if score > self.high_score {
            self.high_score = score;
            true
        } else {
            false
        }
    }

    /// Repair a profile read from disk: the default ids are always owned,
    /// duplicates are dropped, and an equipped id that is not owned is reset.
    pub fn normalize(&mut self) {
        for category in SkinCategory::ALL {
            let list = self.unlocked_mut(category);
            let mut seen: Vec<String> = Vec::with_capacity(list.len() + 1);
            seen.push(DEFAULT_ITEM_ID.to_string());
            for id in list.drain(..) {
                if !seen.contains(&id) {
                    seen.push(id);
                }
            }
            *list = seen;

            let equipped = self.equipped(category).to_string();
            if !self.is_unlocked(category, &equipped) {
                self.set_equipped(category, DEFAULT_ITEM_ID);
            }
        }
    }
}
