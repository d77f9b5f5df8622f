// src/widgets/mod.rs

// Input-facing controls. Presentation (scaling bars, moving handles) is the
// host's job; these only hold values and translate pointer input to effects.

pub mod element;
pub mod button;
pub mod slider;

pub use element::*;
pub use button::ChargingButton;
pub use slider::{Slider, SliderGroup};
