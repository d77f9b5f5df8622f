// src/autoplay.rs
#![cfg(feature = "autoplay")]

//! Headless scripted player.
//!
//! Drives a [`Session`] the way a host would: only through pointer events
//! and frame updates. Full buttons that do not auto-fire get tapped, sliders
//! get nudged at random, upgrades are bought whenever affordable. Seeded, so
//! runs are reproducible.

use bevy_prng::WyRand;
use rand_core::SeedableRng;
use tracing::debug;

use crate::mechanics::stoch;
use crate::session::{GameMode, Session};
use crate::systems::simulation::EndCondition;
use crate::systems::tiers::UnlockLevel;
use crate::widgets::{Activity, ElementId, MenuAction, PointerPos};

#[derive(Clone, Copy, Debug)]
pub struct AutoplayConfig {
    /// Host seconds per frame.
    pub frame_dt: f64,
    /// Chance per frame of nudging one visible slider.
    pub drag_chance: f64,
    /// Std-dev of a nudge, in slider track units.
    pub drag_jitter: f64,
    pub buy_upgrades: bool,
    pub max_frames_per_round: usize,
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        Self {
            frame_dt: 1.0 / 60.0,
            drag_chance: 0.05,
            drag_jitter: 0.1,
            buy_upgrades: true,
            max_frames_per_round: 100_000,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoundReport {
    pub level: UnlockLevel,
    pub end: EndCondition,
    pub frames: usize,
    pub final_population: f64,
    pub gems_after: f64,
}

pub struct Autopilot {
    rng: WyRand,
    cfg: AutoplayConfig,
}

impl Autopilot {
    pub fn new(cfg: AutoplayConfig, seed: u64) -> Self {
        Self { rng: WyRand::from_seed(seed.to_le_bytes()), cfg }
    }

    /// Buy what is affordable, play one game to its end, acknowledge it.
    /// `None` if the session is not in the menu or the round never ends.
    pub fn play_round(&mut self, session: &mut Session) -> Option<RoundReport> {
        if session.mode() != GameMode::MainMenu {
            return None;
        }
        if self.cfg.buy_upgrades {
            while session.upgrade_offer().is_some_and(|o| o.affordable) {
                tap(session, ElementId::Menu(MenuAction::Upgrade));
            }
        }

        tap(session, ElementId::Menu(MenuAction::Start));
        let level = session.progression().level();

        for frame in 1..=self.cfg.max_frames_per_round {
            self.play_frame(session);
            if let GameMode::GameOver(end) = session.mode() {
                let final_population = session.simulation().map_or(0.0, |s| s.world().population);
                let ack = match end {
                    EndCondition::Win => MenuAction::AcknowledgeWin,
                    EndCondition::Harvest { .. } => MenuAction::AcknowledgeHarvest,
                };
                tap(session, ElementId::Menu(ack));
                let report = RoundReport {
                    level,
                    end,
                    frames: frame,
                    final_population,
                    gems_after: session.progression().gems(),
                };
                debug!(?report, "round finished");
                return Some(report);
            }
        }
        None
    }

    /// One frame of input followed by one update.
    pub fn play_frame(&mut self, session: &mut Session) {
        if session.mode() == GameMode::PlayingGame {
            self.tap_ready_buttons(session);
            if stoch::bernoulli(&mut self.rng, self.cfg.drag_chance) {
                self.nudge_slider(session);
            }
        }
        session.update(self.cfg.frame_dt);
    }

    fn tap_ready_buttons(&mut self, session: &mut Session) {
        let Some(sim) = session.simulation() else {
            return;
        };
        let ready: Vec<Activity> = Activity::ALL
            .into_iter()
            .filter(|&a| {
                let b = sim.button(a);
                b.visible && !b.auto_fire && b.is_ready()
            })
            .collect();
        for activity in ready {
            tap(session, ElementId::Button(activity));
        }
    }

    fn nudge_slider(&mut self, session: &mut Session) {
        let Some(sim) = session.simulation() else {
            return;
        };
        let sliders = sim.sliders();
        let visible: Vec<Activity> = Activity::ALL.into_iter().filter(|&a| sliders.is_visible(a)).collect();
        if visible.len() < 2 {
            return;
        }
        let activity = visible[stoch::pick(&mut self.rng, visible.len())];
        let start = sliders.value(activity);
        let delta = stoch::gaussian01(&mut self.rng) * self.cfg.drag_jitter;

        session.pointer_down(Some(ElementId::Slider(activity)), PointerPos::new(start, 0.0));
        session.pointer_dragged(PointerPos::new(start + delta, 0.0));
        session.pointer_up(PointerPos::new(start + delta, 0.0));
    }
}

fn tap(session: &mut Session, id: ElementId) {
    let pos = PointerPos::default();
    session.pointer_down(Some(id), pos);
    session.pointer_up(pos);
}
