//! Domain entities - identified, mutable within their invariants

pub mod ability;
pub mod interactive_object;

pub use ability::{Ability, AbilityKind, CombinedAbility};
pub use interactive_object::{InteractiveObject, ObjectKind};
