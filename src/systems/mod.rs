pub mod tiers;
pub mod progression;
pub mod simulation;
