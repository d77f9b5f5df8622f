//! Tuning constants and the tier table, loaded from JSON.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;

use crate::graph::BucketPolicy;
use crate::systems::tiers::{TierSpec, UnlockLevel};

pub const BUILTIN_SIM_CONFIG: &str = include_str!("data/sim_config.json");

#[derive(Clone, Copy, Debug, Deserialize)]
pub struct Tuning {
    /// Host seconds → game seconds.
    pub time_scale: f64,
    pub years_per_second: f64,
    pub max_age: f64,
    pub win_civilization: f64,
    pub sun_rotation_speed: f64,
    pub planet_rotation_speed: f64,
    pub carrot_fill_rate: f64,
    pub mining_divisor: f64,
    pub research_divisor: f64,
    pub mining_gain: f64,
    /// 1.0 gives the civilization-only research variant.
    pub research_productivity_multiplier: f64,
    pub research_civilization_multiplier: f64,
    pub reward_scale: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    #[inline]
    pub fn clamp(&self, x: f64) -> f64 {
        crate::mechanics::clamp_finite(x, self.min, self.max)
    }
}

#[derive(Clone, Copy, Debug, Deserialize)]
pub struct Limits {
    pub population: Range,
    pub carrots: Range,
    pub productivity: Range,
    pub civilization: Range,
}

#[derive(Clone, Copy, Debug, Deserialize)]
pub struct Initial {
    pub population: f64,
    pub carrots: f64,
    pub productivity: f64,
    pub civilization: f64,
}

#[derive(Clone, Copy, Debug, Deserialize)]
pub struct GraphConfig {
    pub granularity: u32,
    pub max_value: f64,
    pub log_scale: bool,
    #[serde(default)]
    pub policy: BucketPolicy,
}

#[derive(Clone, Debug, Deserialize)]
pub struct SimConfig {
    pub tuning: Tuning,
    pub initial: Initial,
    pub limits: Limits,
    pub graph: GraphConfig,
    pub tiers: Vec<TierSpec>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse simulation config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read simulation config from {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid simulation config: {0}")]
    Invalid(String),
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::builtin()
    }
}

impl SimConfig {
    pub fn builtin() -> Self {
        Self::from_json_str(BUILTIN_SIM_CONFIG).expect("builtin simulation config should parse")
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&contents)?;
        tracing::info!(path = %path.display(), "loaded simulation config");
        Ok(config)
    }

    pub fn tier(&self, level: UnlockLevel) -> &TierSpec {
        &self.tiers[level.index()]
    }

    /// Gem cost to move past `level`; `None` at the top tier.
    pub fn upgrade_cost(&self, level: UnlockLevel) -> Option<f64> {
        self.tier(level).upgrade.as_ref().map(|u| u.cost)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: String| Err(ConfigError::Invalid(msg));

        let t = &self.tuning;
        for (name, v) in [
            ("time_scale", t.time_scale),
            ("years_per_second", t.years_per_second),
            ("max_age", t.max_age),
            ("win_civilization", t.win_civilization),
            ("mining_divisor", t.mining_divisor),
            ("research_divisor", t.research_divisor),
        ] {
            if !(v.is_finite() && v > 0.0) {
                return invalid(format!("tuning.{name} must be positive, got {v}"));
            }
        }

        for (name, r) in [
            ("population", self.limits.population),
            ("carrots", self.limits.carrots),
            ("productivity", self.limits.productivity),
            ("civilization", self.limits.civilization),
        ] {
            if !(r.min > 0.0 && r.min < r.max) {
                return invalid(format!("limits.{name} must satisfy 0 < min < max"));
            }
        }

        // productivity may start below its floor; it is only clamped once mined
        let i = &self.initial;
        for (name, v, r) in [
            ("population", i.population, self.limits.population),
            ("civilization", i.civilization, self.limits.civilization),
        ] {
            if !(r.min..=r.max).contains(&v) {
                return invalid(format!("initial.{name} {v} outside [{}, {}]", r.min, r.max));
            }
        }
        if !(i.carrots >= self.limits.carrots.min) {
            return invalid(format!("initial.carrots {} below {}", i.carrots, self.limits.carrots.min));
        }
        if !(i.productivity.is_finite() && i.productivity > 0.0) {
            return invalid(format!("initial.productivity must be positive, got {}", i.productivity));
        }

        if self.graph.max_value <= 1.0 {
            return invalid("graph.max_value must exceed 1".into());
        }

        if self.tiers.len() != UnlockLevel::ALL.len() {
            return invalid(format!(
                "expected {} tiers, found {}",
                UnlockLevel::ALL.len(),
                self.tiers.len()
            ));
        }

        let mut last_cost = f64::NEG_INFINITY;
        for (tier, level) in self.tiers.iter().zip(UnlockLevel::ALL) {
            if tier.level != level {
                return invalid(format!("tier {:?} listed where {:?} belongs", tier.level, level));
            }
            if tier.weights.iter().any(|w| !(0.0..=1.0).contains(w)) {
                return invalid(format!("{level:?}: weights must lie in [0,1]"));
            }
            let sum: f64 = tier.weights.iter().sum();
            if (sum - 1.0).abs() > 1e-6 {
                return invalid(format!("{level:?}: weights sum to {sum}, not 1"));
            }
            let shown = tier.sliders.iter().filter(|s| **s).count();
            let hidden_weight: f64 = (0..3).filter(|&i| !tier.sliders[i]).map(|i| tier.weights[i]).sum();
            if shown == 2 && hidden_weight > 0.0 {
                return invalid(format!("{level:?}: hidden slider carries weight beside two visible ones"));
            }
            match (&tier.upgrade, level.next()) {
                (Some(up), Some(_)) => {
                    if up.cost <= last_cost || up.cost < 0.0 {
                        return invalid(format!("{level:?}: upgrade costs must strictly increase"));
                    }
                    last_cost = up.cost;
                }
                (None, Some(_)) => return invalid(format!("{level:?}: missing upgrade offer")),
                (Some(_), None) => return invalid("top tier cannot offer an upgrade".into()),
                (None, None) => {}
            }
        }
        Ok(())
    }
}
