//! Pointer-interactive elements and the capture router.
//!
//! The host hit-tests and reports "down on element X", "dragged", "up".
//! Elements never call back into the game; each input method returns an
//! [`Effect`] that the session interprets.

/// The three activities effort can be allocated to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Activity {
    Carrots = 0,
    Mining = 1,
    Research = 2,
}

impl Activity {
    pub const ALL: [Activity; 3] = [Activity::Carrots, Activity::Mining, Activity::Research];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Menu-level actions bound to plain tap buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MenuAction {
    Start,
    Upgrade,
    Reset,
    AcknowledgeHarvest,
    AcknowledgeWin,
}

/// Identity of a hit-testable region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementId {
    Menu(MenuAction),
    Button(Activity),
    Slider(Activity),
}

/// Pointer position in the element's local frame (track units for sliders).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerPos {
    pub x: f64,
    pub y: f64,
}

impl PointerPos {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// What an input event asks the game to do.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Effect {
    None,
    Menu(MenuAction),
    Press(Activity),
    Slide { activity: Activity, delta: f64 },
}

/// "Can be pressed, dragged, released". Every hook defaults to no effect.
pub trait Interactive {
    fn press_start(&mut self, _pos: PointerPos) -> Effect {
        Effect::None
    }
    fn drag(&mut self, _pos: PointerPos) -> Effect {
        Effect::None
    }
    fn release(&mut self, _pos: PointerPos) -> Effect {
        Effect::None
    }
}

/// A tap-only button for menu actions.
#[derive(Clone, Copy, Debug)]
pub struct MenuButton {
    pub action: MenuAction,
}

impl Interactive for MenuButton {
    fn press_start(&mut self, _pos: PointerPos) -> Effect {
        Effect::Menu(self.action)
    }
}

/// Tracks the single captured element. Owned by the session, never global.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputRouter {
    active: Option<ElementId>,
}

impl InputRouter {
    pub fn active(&self) -> Option<ElementId> {
        self.active
    }

    /// Capture `hit`. Panics on re-entrant capture or a region with no element:
    /// both mean the host integration is broken.
    pub fn capture(&mut self, hit: Option<ElementId>) -> ElementId {
        assert!(
            self.active.is_none(),
            "pointer down while {:?} is still captured",
            self.active
        );
        let Some(id) = hit else {
            panic!("pointer down on a region with no bound element");
        };
        self.active = Some(id);
        id
    }

    /// Clear capture, returning what was captured.
    pub fn release(&mut self) -> Option<ElementId> {
        self.active.take()
    }
}
