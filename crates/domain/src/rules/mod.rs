//! Pure progression rules - stateless, deterministic, no side effects

pub mod activation;
pub mod combination;

pub use activation::{activate, ActivationOutcome};
pub use combination::combined_abilities;
