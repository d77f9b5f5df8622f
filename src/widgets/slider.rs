//! Allocation sliders and the three-way co-normalized group.
//!
//! The group keeps `carrots + mining + research == 1` after every mutation.
//! Dragging one slider hands the remaining budget to the other visible
//! sliders in proportion to what they held before the drag.

use crate::mechanics::control::clamp01;
use crate::widgets::element::{Activity, Effect, Interactive, PointerPos};

/// The draggable handle. Holds only the last pointer position; the values
/// live in [`SliderGroup`].
#[derive(Clone, Copy, Debug)]
pub struct Slider {
    pub activity: Activity,
    last_x: f64,
}

impl Slider {
    pub fn new(activity: Activity) -> Self {
        Self { activity, last_x: 0.0 }
    }
}

impl Interactive for Slider {
    fn press_start(&mut self, pos: PointerPos) -> Effect {
        self.last_x = pos.x;
        Effect::None
    }

    fn drag(&mut self, pos: PointerPos) -> Effect {
        let delta = pos.x - self.last_x;
        self.last_x = pos.x;
        Effect::Slide { activity: self.activity, delta }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct SliderGroup {
    handles: [Slider; 3],
    values: [f64; 3],
    visible: [bool; 3],
}

impl SliderGroup {
    pub fn new(weights: [f64; 3], visible: [bool; 3]) -> Self {
        Self {
            handles: Activity::ALL.map(Slider::new),
            values: normalize(weights),
            visible,
        }
    }

    pub fn value(&self, activity: Activity) -> f64 {
        self.values[activity.index()]
    }

    pub fn values(&self) -> [f64; 3] {
        self.values
    }

    pub fn is_visible(&self, activity: Activity) -> bool {
        self.visible[activity.index()]
    }

    pub fn handle_mut(&mut self, activity: Activity) -> &mut Slider {
        &mut self.handles[activity.index()]
    }

    /// Apply a drag of `delta` to one slider. Returns false when the slider
    /// is hidden or there is nothing to trade against.
    pub fn drag(&mut self, activity: Activity, delta: f64) -> bool {
        let next = redistribute(self.values, self.visible, activity, delta);
        let changed = next != self.values;
        self.values = next;
        changed
    }
}

/// Pure redistribution over the prior triple.
///
/// - three visible: the others keep their prior ratio (50/50 if both were 0,
///   everything to the nonzero one if exactly one was 0);
/// - two visible: the other visible slider becomes `1 - x`;
/// - fewer, or a hidden target: no change.
pub fn redistribute(prior: [f64; 3], visible: [bool; 3], which: Activity, delta: f64) -> [f64; 3] {
    let i = which.index();
    let shown = visible.iter().filter(|v| **v).count();
    if !visible[i] || shown < 2 {
        return prior;
    }

    let mut next = prior;
    let x = clamp01(prior[i] + delta);
    let rest = 1.0 - x;
    next[i] = x;

    let (j, k) = match i {
        0 => (1, 2),
        1 => (0, 2),
        _ => (0, 1),
    };

    if shown == 2 {
        let other = if visible[j] { j } else { k };
        next[other] = rest;
    } else {
        let (y, z) = (prior[j], prior[k]);
        let share_j = if y == 0.0 && z == 0.0 {
            0.5
        } else if y == 0.0 {
            0.0
        } else if z == 0.0 {
            1.0
        } else {
            y / (y + z)
        };
        next[j] = rest * share_j;
        next[k] = rest * (1.0 - share_j);
    }

    normalize(next)
}

/// Rescale a triple so it sums to 1; float drift is folded into the largest entry.
pub fn normalize(values: [f64; 3]) -> [f64; 3] {
    let mut v = values.map(clamp01);
    let sum: f64 = v.iter().sum();
    if sum <= 0.0 {
        return [1.0, 0.0, 0.0];
    }
    for x in v.iter_mut() {
        *x /= sum;
    }

    let mut largest = 0;
    for idx in 1..3 {
        if v[idx] > v[largest] {
            largest = idx;
        }
    }
    let others: f64 = (0..3).filter(|&idx| idx != largest).map(|idx| v[idx]).sum();
    v[largest] = 1.0 - others;
    v
}
