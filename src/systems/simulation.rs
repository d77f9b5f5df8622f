//! The numeric world and its per-tick update.
//!
//! Each tick: age → button charge (with auto-fire) → consumption →
//! reproduction → graph samples → end conditions. Population, carrots,
//! productivity and civilization are clamped to their configured ranges
//! wherever they are deposited into.

use crate::config::{Limits, SimConfig, Tuning};
use crate::graph::TimeGraph;
use crate::mechanics::{cap, clamp_finite, compound, fill_rate, harvest_reward, reproduction_factor};
use crate::systems::tiers::{Series, TierSpec, UnlockLevel};
use crate::widgets::{Activity, ChargingButton, SliderGroup};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldState {
    /// Years since the game started, in [0, max_age].
    pub age: f64,
    pub population: f64,
    /// May go negative while bunnies starve; deposits clamp it back.
    pub carrots: f64,
    pub productivity: f64,
    pub civilization: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EndCondition {
    Win,
    Harvest { reward: f64 },
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TickReport {
    /// Buttons that auto-fired this tick, by [`Activity`] index.
    pub fired: [bool; 3],
    pub end: Option<EndCondition>,
}

#[derive(Clone, Debug)]
pub struct Simulation {
    tuning: Tuning,
    limits: Limits,
    tier: TierSpec,
    world: WorldState,
    buttons: [ChargingButton; 3],
    sliders: SliderGroup,
    graphs: [TimeGraph; 4],
}

impl Simulation {
    /// Fresh world for a new game at `level`.
    pub fn new(cfg: &SimConfig, level: UnlockLevel) -> Self {
        let init = cfg.initial;
        let world = WorldState {
            age: 0.0,
            population: init.population,
            carrots: init.carrots,
            productivity: init.productivity,
            civilization: init.civilization,
        };
        Self::with_world(cfg, level, world)
    }

    pub fn with_world(cfg: &SimConfig, level: UnlockLevel, world: WorldState) -> Self {
        let tier = cfg.tier(level).clone();
        let buttons = Activity::ALL.map(|a| {
            let mut b = ChargingButton::new(a);
            b.visible = tier.shows_button(a);
            b.auto_fire = tier.fires_automatically(a);
            b
        });
        let sliders = SliderGroup::new(tier.weights, tier.sliders);
        let g = cfg.graph;
        let graphs = Series::ALL.map(|s| {
            let initial = match s {
                Series::Population => world.population,
                Series::Carrots => world.carrots,
                Series::Productivity => world.productivity,
                Series::Civilization => world.civilization,
            };
            TimeGraph::new(initial, g.max_value, g.log_scale, g.granularity).with_policy(g.policy)
        });

        let mut sim = Self { tuning: cfg.tuning, limits: cfg.limits, tier, world, buttons, sliders, graphs };
        sim.refresh_fill_rates();
        sim
    }

    pub fn world(&self) -> &WorldState {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut WorldState {
        &mut self.world
    }

    pub fn tier(&self) -> &TierSpec {
        &self.tier
    }

    pub fn button(&self, activity: Activity) -> &ChargingButton {
        &self.buttons[activity.index()]
    }

    pub fn button_mut(&mut self, activity: Activity) -> &mut ChargingButton {
        &mut self.buttons[activity.index()]
    }

    pub fn sliders(&self) -> &SliderGroup {
        &self.sliders
    }

    pub fn sliders_mut(&mut self) -> &mut SliderGroup {
        &mut self.sliders
    }

    pub fn graph(&self, series: Series) -> &TimeGraph {
        &self.graphs[series.index()]
    }

    /// Integer bunnies for the status line.
    pub fn population_count(&self) -> u64 {
        self.world.population.round() as u64
    }

    /// Whole years left before the countdown ends.
    pub fn years_remaining(&self) -> u64 {
        (self.tuning.max_age - self.world.age).max(0.0).round() as u64
    }

    /// Fraction of the countdown elapsed, the graphs' x axis.
    pub fn normalized_time(&self) -> f64 {
        self.world.age / self.tuning.max_age
    }

    /// Advance the world by `dt` game seconds.
    pub fn tick(&mut self, dt: f64) -> TickReport {
        let mut report = TickReport::default();
        if dt > 0.0 {
            self.advance(dt, &mut report);
        }
        report.end = self.end_condition();
        report
    }

    fn advance(&mut self, dt: f64, report: &mut TickReport) {
        let t = self.tuning;

        self.world.age = clamp_finite(self.world.age + dt * t.years_per_second, 0.0, t.max_age);

        for activity in Activity::ALL {
            self.refresh_fill_rates();
            let weight = self.sliders.value(activity);
            let button = &mut self.buttons[activity.index()];
            button.advance(dt, weight);
            if button.should_auto_fire() {
                report.fired[activity.index()] = self.press(activity);
            }
        }

        // bunnies eat carrots
        let w = &mut self.world;
        w.carrots -= dt * w.population;

        let factor = reproduction_factor(w.carrots, w.population);
        w.population = self.limits.population.clamp(compound(w.population, factor, dt));

        self.record();
    }

    fn refresh_fill_rates(&mut self) {
        let t = self.tuning;
        let w = self.world;
        self.buttons[Activity::Carrots.index()].fill_rate = t.carrot_fill_rate;
        self.buttons[Activity::Mining.index()].fill_rate =
            fill_rate(w.population, w.productivity, t.mining_divisor);
        self.buttons[Activity::Research.index()].fill_rate =
            fill_rate(w.population, w.civilization, t.research_divisor);
    }

    fn record(&mut self) {
        let time = self.normalized_time();
        let w = self.world;
        for (series, value) in [
            (Series::Population, w.population),
            (Series::Carrots, w.carrots),
            (Series::Productivity, w.productivity),
            (Series::Civilization, w.civilization),
        ] {
            self.graphs[series.index()].add_sample(time, value);
        }
    }

    /// Tap a button. Only a visible, fully charged button fires; its effect
    /// is applied immediately and the charge drops to 0.
    pub fn press(&mut self, activity: Activity) -> bool {
        let button = &mut self.buttons[activity.index()];
        if !button.visible || !button.press() {
            return false;
        }

        let t = self.tuning;
        let l = self.limits;
        let w = &mut self.world;
        match activity {
            Activity::Carrots => {
                w.carrots = l.carrots.clamp(w.carrots + w.productivity);
            }
            Activity::Mining => {
                w.productivity = l.productivity.clamp(w.productivity + t.mining_gain * w.civilization);
            }
            Activity::Research => {
                w.productivity = cap(w.productivity * t.research_productivity_multiplier, l.productivity.max);
                w.civilization = l.civilization.clamp(w.civilization * t.research_civilization_multiplier);
            }
        }
        true
    }

    /// Win beats harvest when both hold on the same tick.
    pub fn end_condition(&self) -> Option<EndCondition> {
        let t = self.tuning;
        if self.world.civilization >= t.win_civilization {
            Some(EndCondition::Win)
        } else if self.world.age >= t.max_age {
            Some(EndCondition::Harvest { reward: harvest_reward(self.world.population, t.reward_scale) })
        } else {
            None
        }
    }
}
