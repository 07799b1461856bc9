//! Value objects - small immutable types with no identity

pub mod dimension;
pub mod phase;
pub mod position;

pub use dimension::{Dimension, Rgb};
pub use phase::GamePhase;
pub use position::Position;
