/*!
`bunny_harvest` — the simulation core of a small idle game.

What it does
- Bunnies eat carrots and multiply (or starve) continuously; the player
  splits effort between foraging, mining and research before a fixed
  countdown of years runs out.
- Effort is spent through charge-then-tap buttons (fill over time, fire at
  exactly full) and three sliders whose values always sum to 1.
- Gems earned at the end of each game buy unlock tiers that reveal more
  controls and automation.

How to use (call surface only)
- Build a [`session::Session`] from a [`config::SimConfig`]
  (`SimConfig::builtin()` or your own JSON).
- Each frame: forward hit-tested pointer events
  (`pointer_down`/`pointer_dragged`/`pointer_up`), then call `update(dt)`.
- Read world state, button charges, slider weights and graph points from
  `session.simulation()`; drain `session.drain_events()` for sound cues.

What it does NOT do
- No rendering, audio, text layout, raycasting or persistence. Single
  threaded; everything runs inside `update` or an input call.
*/

pub mod config;
pub mod graph;
pub mod mechanics;
pub mod session;
pub mod systems;
pub mod widgets;

#[cfg(feature = "autoplay")]
pub mod autoplay;

pub use config::{ConfigError, SimConfig};
pub use session::{GameEvent, GameMode, Session};
pub use systems::simulation::{EndCondition, Simulation, WorldState};
pub use systems::tiers::UnlockLevel;
