//! Engine configuration
//!
//! The two reference clients of this game disagreed on a handful of
//! behaviors (level count, load policy, whether activation saves). Those
//! are product decisions, so each is a named field here rather than a
//! hard-coded assumption; `Default` follows the native client,
//! `web_variant` the web one.

/// Tunable behavior of a [`GameSession`](crate::GameSession)
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Highest reachable level; `advance_level` never passes it
    pub max_level: u32,
    /// Apply a best-effort load when the session is constructed, instead
    /// of waiting for an explicit load intent
    pub auto_load_on_start: bool,
    /// Also persist after object activation (the reference behavior saves
    /// only on ability collection and level completion)
    pub save_on_activation: bool,
    /// Radius the presentation layer should use for its proximity checks
    /// before dispatching collect/activate intents. The engine itself
    /// never runs spatial queries.
    pub trigger_radius: f32,
    /// Name of the single local save slot
    pub save_slot: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_level: 5,
            auto_load_on_start: false,
            save_on_activation: false,
            trigger_radius: 2.5,
            save_slot: "riftbound_save".to_string(),
        }
    }
}

impl EngineConfig {
    /// Preset matching the web client: three levels, otherwise defaults
    pub fn web_variant() -> Self {
        Self {
            max_level: 3,
            ..Self::default()
        }
    }
}
