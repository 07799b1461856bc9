//! Engine events - the explicit subscription contract
//!
//! The engine does no implicit re-rendering. Consumers that want to react
//! to mutations register an [`EventSink`]; after each mutating call
//! completes, the session dispatches one or more events describing what
//! changed. No-op calls dispatch nothing, so a redundant dimension switch
//! cannot double-fire an observer.
//!
//! A single event enum instead of one callback per mutation keeps routing
//! in one place and lets new events ship without changing the sink trait.

use riftbound_domain::{
    AbilityId, AbilityKind, CombinedAbility, Dimension, GamePhase, ObjectId, Position,
};

/// Everything a session can report after a mutating call
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// Phase transitioned (never emitted for same-phase re-entry)
    PhaseChanged { from: GamePhase, to: GamePhase },
    /// A level's ability/object sets were (re)built
    LevelStarted { level: u32 },
    /// Active dimension changed
    DimensionSwitched { from: Dimension, to: Dimension },
    /// A per-dimension player position was recorded
    PlayerMoved {
        dimension: Dimension,
        position: Position,
    },
    /// An ability flipped to collected
    AbilityCollected { id: AbilityId, kind: AbilityKind },
    /// The derived combined-ability set changed after a collection
    CombinedAbilitiesChanged { unlocked: Vec<CombinedAbility> },
    /// An object flipped to active, possibly dragging its linked object
    ObjectActivated {
        id: ObjectId,
        linked: Option<ObjectId>,
    },
    /// The current level was completed
    LevelCompleted { level: u32 },
    /// A save record was applied to the session
    GameLoaded { level: u32 },
    /// Full reset back to the menu
    GameReset,
}

/// Receiver for session events; closures qualify
pub trait EventSink {
    fn on_event(&mut self, event: &GameEvent);
}

impl<F: FnMut(&GameEvent)> EventSink for F {
    fn on_event(&mut self, event: &GameEvent) {
        self(event)
    }
}
