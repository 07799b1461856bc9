//! Riftbound engine - the game state and progression engine.
//!
//! [`GameSession`] is the aggregate root: it owns the phase machine
//! (Menu -> Playing -> LevelComplete -> Playing), the active dimension and
//! per-dimension player positions, the current level's abilities and
//! interactive objects, and the derived combined-ability set. It
//! orchestrates the pure rules from `riftbound-domain` and persists through
//! the [`SaveStorePort`](ports::SaveStorePort).
//!
//! The presentation layer (rendering, input, audio) is an external
//! collaborator: it reads state through the accessors, dispatches intents
//! (`collect_ability`, `activate_object`, `switch_dimension`, ...), and may
//! subscribe an [`EventSink`](events::EventSink) to react to mutations.

pub mod adapters;
pub mod config;
pub mod events;
pub mod levels;
pub mod ports;
pub mod session;

pub use adapters::{InMemorySaveStore, JsonFileSaveStore};
pub use config::EngineConfig;
pub use events::{EventSink, GameEvent};
pub use levels::LevelTemplate;
pub use ports::{SaveRecord, SaveStoreError, SaveStorePort};
pub use session::GameSession;
