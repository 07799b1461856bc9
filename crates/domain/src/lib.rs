//! Riftbound domain - the pure data model and progression rules for a
//! three-dimension puzzle platformer.
//!
//! The player exists simultaneously in three parallel dimensions (Reality,
//! Dream, Memory). This crate holds the value types for dimensions,
//! collectible abilities, and interactive objects, plus the two pure rules
//! the engine orchestrates: ability-combination unlocking and one-hop
//! activation propagation. No I/O, no clocks, no state machine - that lives
//! in `riftbound-engine`.

pub mod entities;
pub mod error;
pub mod ids;
pub mod rules;
pub mod value_objects;

pub use entities::{Ability, AbilityKind, CombinedAbility, InteractiveObject, ObjectKind};
pub use error::DomainError;
pub use ids::{AbilityId, ObjectId};
pub use value_objects::{Dimension, GamePhase, Position, Rgb};
