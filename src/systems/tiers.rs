//! Unlock tiers as data.
//!
//! One table row per level says which controls are shown, which buttons
//! fire on their own, how effort starts out split, which graphs are drawn,
//! and what the next upgrade costs. The update loop is the same for every
//! tier; only this data changes.

use serde::Deserialize;

use crate::widgets::Activity;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnlockLevel {
    #[default]
    NormalBunnies = 0,
    SmarterBunnies = 1,
    BunnyAutonomy = 2,
    SentientBunnies = 3,
}

impl UnlockLevel {
    pub const ALL: [UnlockLevel; 4] = [
        UnlockLevel::NormalBunnies,
        UnlockLevel::SmarterBunnies,
        UnlockLevel::BunnyAutonomy,
        UnlockLevel::SentientBunnies,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn next(self) -> Option<UnlockLevel> {
        Self::ALL.get(self.index() + 1).copied()
    }
}

/// Tracked quantities, in graph order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Series {
    Population = 0,
    Carrots = 1,
    Productivity = 2,
    Civilization = 3,
}

impl Series {
    pub const ALL: [Series; 4] =
        [Series::Population, Series::Carrots, Series::Productivity, Series::Civilization];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Offer shown in the main menu for moving past this tier.
#[derive(Clone, Debug, Deserialize)]
pub struct UpgradeSpec {
    pub title: String,
    pub description: String,
    pub cost: f64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct TierSpec {
    pub level: UnlockLevel,
    /// Charging buttons shown, by [`Activity`] index.
    pub buttons: [bool; 3],
    /// Sliders shown, by [`Activity`] index.
    pub sliders: [bool; 3],
    pub auto_fire: [bool; 3],
    /// Starting allocation weights.
    pub weights: [f64; 3],
    /// Graphs shown, by [`Series`] index.
    pub graphs: [bool; 4],
    #[serde(default)]
    pub upgrade: Option<UpgradeSpec>,
}

impl TierSpec {
    pub fn shows_button(&self, activity: Activity) -> bool {
        self.buttons[activity.index()]
    }

    pub fn shows_slider(&self, activity: Activity) -> bool {
        self.sliders[activity.index()]
    }

    pub fn fires_automatically(&self, activity: Activity) -> bool {
        self.auto_fire[activity.index()]
    }

    pub fn shows_graph(&self, series: Series) -> bool {
        self.graphs[series.index()]
    }
}
