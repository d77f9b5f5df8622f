//! Charge-then-tap button.

use crate::mechanics::control::clamp01;
use crate::widgets::element::{Activity, Effect, Interactive, PointerPos};

/// A charge in [0,1] that fills over time and fires at exactly 1.
#[derive(Clone, Copy, Debug)]
pub struct ChargingButton {
    pub activity: Activity,
    charge: f64,
    /// Recomputed by the engine every tick.
    pub fill_rate: f64,
    pub auto_fire: bool,
    pub visible: bool,
}

impl ChargingButton {
    pub fn new(activity: Activity) -> Self {
        Self { activity, charge: 0.0, fill_rate: 0.0, auto_fire: false, visible: false }
    }

    pub fn charge(&self) -> f64 {
        self.charge
    }

    pub fn set_charge(&mut self, charge: f64) {
        self.charge = clamp01(charge);
    }

    /// Full and waiting for a tap.
    pub fn is_ready(&self) -> bool {
        self.charge == 1.0
    }

    /// charge = clamp01(charge + fill_rate * weight * dt).
    pub fn advance(&mut self, dt: f64, weight: f64) {
        // 0 * inf would poison the charge with NaN
        if dt <= 0.0 || weight <= 0.0 || self.fill_rate <= 0.0 {
            return;
        }
        self.charge = clamp01(self.charge + self.fill_rate * weight * dt);
    }

    /// Fires only at exactly 1; resets the charge on success.
    pub fn press(&mut self) -> bool {
        if self.charge == 1.0 {
            self.charge = 0.0;
            true
        } else {
            false
        }
    }

    /// Implicit press the instant a visible auto-fire button fills.
    pub fn should_auto_fire(&self) -> bool {
        self.auto_fire && self.visible && self.is_ready()
    }
}

impl Interactive for ChargingButton {
    fn press_start(&mut self, _pos: PointerPos) -> Effect {
        Effect::Press(self.activity)
    }
}
