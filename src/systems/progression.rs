//! Gems and unlock levels. Lives for the whole process, across play sessions.

use tracing::{debug, info};

use crate::config::SimConfig;
use crate::systems::tiers::UnlockLevel;

#[derive(Clone, Copy, Debug, Default)]
pub struct Progression {
    gems: f64,
    level: UnlockLevel,
}

/// What the menu should display for the next upgrade.
#[derive(Clone, Debug, PartialEq)]
pub struct UpgradeOffer {
    pub title: String,
    pub description: String,
    pub cost: f64,
    /// Strictly more gems than the cost.
    pub affordable: bool,
}

impl Progression {
    pub fn gems(&self) -> f64 {
        self.gems
    }

    pub fn level(&self) -> UnlockLevel {
        self.level
    }

    pub fn is_unlocked(&self, level: UnlockLevel) -> bool {
        self.level >= level
    }

    /// Credit an end-of-game reward. Negative amounts are ignored.
    pub fn award(&mut self, amount: f64) {
        if amount.is_finite() && amount > 0.0 {
            self.gems += amount;
        }
    }

    /// Spend gems on the next tier. Requires `gems > cost`; equal is not enough.
    pub fn upgrade(&mut self, cfg: &SimConfig) -> Option<UnlockLevel> {
        let next = self.level.next()?;
        let cost = cfg.upgrade_cost(self.level)?;
        if self.gems > cost {
            self.gems -= cost;
            self.level = next;
            info!(level = ?next, cost, gems = self.gems, "unlocked tier");
            Some(next)
        } else {
            debug!(gems = self.gems, cost, "upgrade not affordable");
            None
        }
    }

    /// Back to zero gems and the first tier.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn offer(&self, cfg: &SimConfig) -> Option<UpgradeOffer> {
        let up = cfg.tier(self.level).upgrade.as_ref()?;
        Some(UpgradeOffer {
            title: up.title.clone(),
            description: format!("{} ({}/{} gems)", up.description, self.gems as i64, up.cost as i64),
            cost: up.cost,
            affordable: self.gems > up.cost,
        })
    }
}
