//! Game-mode state machine and input routing.
//!
//! `MainMenu → PlayingGame → GameOver → MainMenu`. The session owns the
//! process-lifetime progression, the in-flight simulation (replaced whole on
//! every start, dropped on acknowledgement), the pointer capture, and a queue
//! of events for audio/display sinks.

use tracing::{debug, info};

use crate::config::{SimConfig, Tuning};
use crate::systems::progression::{Progression, UpgradeOffer};
use crate::systems::simulation::{EndCondition, Simulation};
use crate::systems::tiers::UnlockLevel;
use crate::widgets::{Activity, Effect, ElementId, InputRouter, Interactive, MenuAction, MenuButton, PointerPos};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GameMode {
    MainMenu,
    PlayingGame,
    GameOver(EndCondition),
}

/// Discrete notifications for the host (sound cues, screen changes).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GameEvent {
    GameStarted { level: UnlockLevel },
    ActivityFired(Activity),
    Won,
    GemsAwarded { amount: f64 },
    HarvestAcknowledged,
    WinAcknowledged,
    Upgraded { level: UnlockLevel },
    ProgressReset,
}

/// Decorative sun and planet spin, in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Orbit {
    pub sun: f64,
    pub planet: f64,
}

impl Orbit {
    fn advance(&mut self, dt: f64, t: &Tuning) {
        self.sun = (self.sun + dt * t.sun_rotation_speed).rem_euclid(360.0);
        self.planet = (self.planet + dt * t.planet_rotation_speed).rem_euclid(360.0);
    }
}

const MENU_BUTTONS: [MenuAction; 5] = [
    MenuAction::Start,
    MenuAction::Upgrade,
    MenuAction::Reset,
    MenuAction::AcknowledgeHarvest,
    MenuAction::AcknowledgeWin,
];

pub struct Session {
    config: SimConfig,
    mode: GameMode,
    progression: Progression,
    sim: Option<Simulation>,
    router: InputRouter,
    menu: [MenuButton; 5],
    orbit: Orbit,
    reset_available: bool,
    events: Vec<GameEvent>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SimConfig::builtin())
    }
}

impl Session {
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            mode: GameMode::MainMenu,
            progression: Progression::default(),
            sim: None,
            router: InputRouter::default(),
            menu: MENU_BUTTONS.map(|action| MenuButton { action }),
            orbit: Orbit::default(),
            reset_available: false,
            events: Vec::new(),
        }
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn progression(&self) -> &Progression {
        &self.progression
    }

    pub fn progression_mut(&mut self) -> &mut Progression {
        &mut self.progression
    }

    pub fn simulation(&self) -> Option<&Simulation> {
        self.sim.as_ref()
    }

    pub fn simulation_mut(&mut self) -> Option<&mut Simulation> {
        self.sim.as_mut()
    }

    pub fn orbit(&self) -> Orbit {
        self.orbit
    }

    pub fn captured(&self) -> Option<ElementId> {
        self.router.active()
    }

    pub fn reset_available(&self) -> bool {
        self.reset_available
    }

    pub fn is_unlocked(&self, level: UnlockLevel) -> bool {
        self.progression.is_unlocked(level)
    }

    pub fn upgrade_offer(&self) -> Option<UpgradeOffer> {
        self.progression.offer(&self.config)
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// One host frame of `host_dt` seconds.
    pub fn update(&mut self, host_dt: f64) {
        let t = self.config.tuning;
        let dt = if host_dt > 0.0 { host_dt * t.time_scale } else { 0.0 };
        self.orbit.advance(dt, &t);

        if self.mode != GameMode::PlayingGame {
            return;
        }
        let Some(sim) = self.sim.as_mut() else {
            return;
        };

        let report = sim.tick(dt);
        for activity in Activity::ALL {
            if report.fired[activity.index()] {
                self.events.push(GameEvent::ActivityFired(activity));
            }
        }

        match report.end {
            Some(EndCondition::Win) => {
                info!(age = sim.world().age, "civilization threshold reached");
                self.events.push(GameEvent::Won);
                self.mode = GameMode::GameOver(EndCondition::Win);
            }
            Some(end @ EndCondition::Harvest { reward }) => {
                self.progression.award(reward);
                info!(reward, gems = self.progression.gems(), population = sim.world().population, "harvested");
                self.events.push(GameEvent::GemsAwarded { amount: reward });
                self.mode = GameMode::GameOver(end);
            }
            None => {}
        }
    }

    // ---------------------------------------------------------------------
    // Pointer input
    // ---------------------------------------------------------------------

    /// The host hit-tested a region under a fresh press. `None` (nothing
    /// bound there) and pressing while another element is captured panic.
    pub fn pointer_down(&mut self, hit: Option<ElementId>, pos: PointerPos) {
        let id = self.router.capture(hit);
        let Some(element) = self.element_mut(id) else {
            panic!("pointer down on {id:?}, which has no bound element");
        };
        let effect = element.press_start(pos);
        self.apply(effect);
    }

    /// Routed only to the captured element.
    pub fn pointer_dragged(&mut self, pos: PointerPos) {
        let Some(id) = self.router.active() else {
            return;
        };
        if let Some(element) = self.element_mut(id) {
            let effect = element.drag(pos);
            self.apply(effect);
        }
    }

    pub fn pointer_up(&mut self, pos: PointerPos) {
        let Some(id) = self.router.release() else {
            return;
        };
        if let Some(element) = self.element_mut(id) {
            let effect = element.release(pos);
            self.apply(effect);
        }
    }

    fn element_mut(&mut self, id: ElementId) -> Option<&mut dyn Interactive> {
        match id {
            ElementId::Menu(action) => self
                .menu
                .iter_mut()
                .find(|b| b.action == action)
                .map(|b| b as &mut dyn Interactive),
            ElementId::Button(activity) => {
                let sim = self.sim.as_mut()?;
                Some(sim.button_mut(activity) as &mut dyn Interactive)
            }
            ElementId::Slider(activity) => {
                let sim = self.sim.as_mut()?;
                Some(sim.sliders_mut().handle_mut(activity) as &mut dyn Interactive)
            }
        }
    }

    /// Interpret an element's effect against the current mode.
    pub fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::None => {}
            Effect::Menu(action) => self.perform(action),
            Effect::Press(activity) => {
                if self.mode != GameMode::PlayingGame {
                    return;
                }
                if let Some(sim) = self.sim.as_mut() {
                    if sim.press(activity) {
                        self.events.push(GameEvent::ActivityFired(activity));
                    }
                }
            }
            Effect::Slide { activity, delta } => {
                if self.mode != GameMode::PlayingGame {
                    return;
                }
                if let Some(sim) = self.sim.as_mut() {
                    sim.sliders_mut().drag(activity, delta);
                }
            }
        }
    }

    // ---------------------------------------------------------------------
    // Menu actions
    // ---------------------------------------------------------------------

    pub fn perform(&mut self, action: MenuAction) {
        match (action, self.mode) {
            (MenuAction::Start, GameMode::MainMenu) => self.start_game(),
            (MenuAction::Upgrade, GameMode::MainMenu) => {
                if let Some(level) = self.progression.upgrade(&self.config) {
                    self.events.push(GameEvent::Upgraded { level });
                }
            }
            (MenuAction::Reset, GameMode::MainMenu) if self.reset_available => {
                self.progression.reset();
                self.reset_available = false;
                info!("progress reset");
                self.events.push(GameEvent::ProgressReset);
            }
            (MenuAction::AcknowledgeHarvest, GameMode::GameOver(EndCondition::Harvest { .. })) => {
                self.return_to_menu();
                self.events.push(GameEvent::HarvestAcknowledged);
            }
            (MenuAction::AcknowledgeWin, GameMode::GameOver(EndCondition::Win)) => {
                self.return_to_menu();
                self.reset_available = true;
                self.events.push(GameEvent::WinAcknowledged);
            }
            (action, mode) => debug!(?action, ?mode, "menu action ignored"),
        }
    }

    fn start_game(&mut self) {
        let level = self.progression.level();
        self.sim = Some(Simulation::new(&self.config, level));
        self.mode = GameMode::PlayingGame;
        info!(?level, "game started");
        self.events.push(GameEvent::GameStarted { level });
    }

    fn return_to_menu(&mut self) {
        self.sim = None;
        self.mode = GameMode::MainMenu;
    }
}
