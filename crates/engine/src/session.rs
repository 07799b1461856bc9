//! Game session - the stateful core of the progression engine
//!
//! One session owns everything: phase, level, active dimension, the
//! per-dimension player positions, the current level's ability and object
//! sets, and the derived combined abilities. All mutation entry points are
//! infallible: unknown ids, repeated transitions, and persistence failures
//! degrade to logged no-ops, so no call sequence can violate an invariant.
//!
//! The session is exclusively owned by its single logical caller (the
//! per-frame update or intent dispatcher). There is no internal
//! concurrency; every operation runs to completion before the next.

use std::collections::{BTreeSet, HashMap, HashSet};

use chrono::Utc;
use tracing::{debug, info, instrument, warn};

use riftbound_domain::rules::{self, ActivationOutcome};
use riftbound_domain::{
    Ability, AbilityId, AbilityKind, CombinedAbility, Dimension, GamePhase, InteractiveObject,
    ObjectId, Position,
};

use crate::adapters::InMemorySaveStore;
use crate::config::EngineConfig;
use crate::events::{EventSink, GameEvent};
use crate::levels;
use crate::ports::{SaveRecord, SaveStorePort};

/// The game state aggregate and its operations
pub struct GameSession {
    config: EngineConfig,
    store: Box<dyn SaveStorePort>,
    sinks: Vec<Box<dyn EventSink>>,

    phase: GamePhase,
    level: u32,
    dimension: Dimension,
    positions: HashMap<Dimension, Position>,
    abilities: Vec<Ability>,
    objects: Vec<InteractiveObject>,
    combined: BTreeSet<CombinedAbility>,
}

impl GameSession {
    /// Create a session at the menu with the given store
    pub fn new(config: EngineConfig, store: Box<dyn SaveStorePort>) -> Self {
        let auto_load = config.auto_load_on_start;
        let mut session = Self {
            config,
            store,
            sinks: Vec::new(),
            phase: GamePhase::Menu,
            level: 1,
            dimension: Dimension::Reality,
            positions: Self::spawn_positions(),
            abilities: Vec::new(),
            objects: Vec::new(),
            combined: BTreeSet::new(),
        };
        if auto_load {
            session.load();
        }
        session
    }

    /// Session with default configuration and an in-memory store
    pub fn in_memory() -> Self {
        Self::new(EngineConfig::default(), Box::new(InMemorySaveStore::new()))
    }

    fn spawn_positions() -> HashMap<Dimension, Position> {
        Dimension::ALL
            .into_iter()
            .map(|dim| (dim, Position::DEFAULT_SPAWN))
            .collect()
    }

    /// Register a sink notified after each mutating call
    pub fn subscribe(&mut self, sink: impl EventSink + 'static) {
        self.sinks.push(Box::new(sink));
    }

    fn emit(&mut self, event: GameEvent) {
        for sink in &mut self.sinks {
            sink.on_event(&event);
        }
    }

    // =========================================================================
    // Intents
    // =========================================================================

    /// Populate the current level and enter `Playing`
    ///
    /// Re-running while already playing rebuilds the level wholesale, which
    /// is destructive to in-progress collection state for the current level.
    #[instrument(skip(self), fields(level = self.level))]
    pub fn start_game(&mut self) {
        let template = match levels::template(self.level) {
            Ok(template) => template,
            Err(err) => {
                warn!(%err, "level template unavailable");
                return;
            }
        };
        self.abilities = template.abilities;
        self.objects = template.objects;
        self.combined = BTreeSet::new();

        let from = self.phase;
        self.phase = GamePhase::Playing;
        info!(level = self.level, "level started");
        if from != GamePhase::Playing {
            self.emit(GameEvent::PhaseChanged {
                from,
                to: GamePhase::Playing,
            });
        }
        self.emit(GameEvent::LevelStarted { level: self.level });
    }

    /// Switch the active dimension; switching to the current one is a no-op
    ///
    /// Player positions are untouched: each dimension keeps its own
    /// last-known position across switches.
    pub fn switch_dimension(&mut self, to: Dimension) {
        if to == self.dimension {
            debug!(%to, "dimension switch ignored: already current");
            return;
        }
        let from = self.dimension;
        self.dimension = to;
        debug!(%from, %to, "dimension switched");
        self.emit(GameEvent::DimensionSwitched { from, to });
    }

    /// Record the player position for one dimension, as reported by the
    /// presentation layer's movement logic
    pub fn update_player_position(&mut self, dimension: Dimension, position: Position) {
        self.positions.insert(dimension, position);
        self.emit(GameEvent::PlayerMoved {
            dimension,
            position,
        });
    }

    /// Collect an ability; unknown ids and repeats are no-ops
    ///
    /// Recomputes the combined set over every collected kind in the level
    /// (all dimensions), then persists.
    pub fn collect_ability(&mut self, id: AbilityId) {
        let Some(ability) = self.abilities.iter_mut().find(|a| a.id() == id) else {
            debug!(%id, "collect ignored: unknown ability");
            return;
        };
        if !ability.collect() {
            debug!(%id, "collect ignored: already collected");
            return;
        }
        let kind = ability.kind();
        info!(%id, %kind, "ability collected");

        let combined_changed = self.recompute_combined();
        self.save();
        self.emit(GameEvent::AbilityCollected { id, kind });
        if combined_changed {
            self.emit(GameEvent::CombinedAbilitiesChanged {
                unlocked: self.combined.iter().copied().collect(),
            });
        }
    }

    /// Activate an object, propagating one hop through its link
    pub fn activate_object(&mut self, id: ObjectId) {
        match rules::activate(id, &mut self.objects) {
            ActivationOutcome::Unchanged => {
                debug!(%id, "activation ignored: unknown or already active");
            }
            ActivationOutcome::Activated { target, linked } => {
                info!(%target, ?linked, "object activated");
                if self.config.save_on_activation {
                    self.save();
                }
                self.emit(GameEvent::ObjectActivated { id: target, linked });
            }
        }
    }

    /// Mark the current level complete and persist
    pub fn complete_level(&mut self) {
        let from = self.phase;
        self.phase = GamePhase::LevelComplete;
        info!(level = self.level, "level completed");
        self.save();
        if from != GamePhase::LevelComplete {
            self.emit(GameEvent::PhaseChanged {
                from,
                to: GamePhase::LevelComplete,
            });
        }
        self.emit(GameEvent::LevelCompleted { level: self.level });
    }

    /// Move to the next level and start it; capped at `max_level`
    ///
    /// The active dimension and player positions carry over; only the
    /// per-level ability/object sets are rebuilt.
    pub fn advance_level(&mut self) {
        if self.level >= self.config.max_level {
            debug!(
                level = self.level,
                max = self.config.max_level,
                "advance ignored: already at max level"
            );
            return;
        }
        self.level += 1;
        self.start_game();
    }

    /// Discard all progress: back to the menu, level 1, Reality, spawn
    /// positions, empty level sets, and no persisted save
    #[instrument(skip(self))]
    pub fn reset_game(&mut self) {
        self.phase = GamePhase::Menu;
        self.level = 1;
        self.dimension = Dimension::Reality;
        self.positions = Self::spawn_positions();
        self.abilities = Vec::new();
        self.objects = Vec::new();
        self.combined = BTreeSet::new();
        self.clear_save();
        info!("game reset");
        self.emit(GameEvent::GameReset);
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Persist the current snapshot; failures are logged and swallowed
    pub fn save(&mut self) {
        let record = SaveRecord {
            current_level: self.level,
            current_dimension: self.dimension,
            abilities: self.abilities.clone(),
            combined_abilities: self.combined.clone(),
            saved_at: Utc::now(),
        };
        if let Err(err) = self.store.save(&record) {
            warn!(%err, "save failed; in-memory state remains authoritative");
        }
    }

    /// Apply the persisted record, if one exists and parses
    ///
    /// All-or-nothing: a missing, failed, or partial load leaves the
    /// session untouched. Phase and objects are not part of the record;
    /// callers re-enter the loaded level through `start_game`.
    pub fn load(&mut self) {
        match self.store.load() {
            Ok(Some(record)) => {
                self.level = record.current_level.clamp(1, self.config.max_level);
                self.dimension = record.current_dimension;
                self.abilities = record.abilities;
                // The stored combined set is a snapshot; the collected
                // kinds are what is authoritative.
                self.combined = self.derive_combined();
                info!(level = self.level, "save loaded");
                self.emit(GameEvent::GameLoaded { level: self.level });
            }
            Ok(None) => debug!("no save present"),
            Err(err) => warn!(%err, "load failed; keeping current state"),
        }
    }

    /// Remove the persisted save; failures are logged and swallowed
    pub fn clear_save(&mut self) {
        if let Err(err) = self.store.clear() {
            warn!(%err, "clearing save failed");
        }
    }

    // =========================================================================
    // Derived state
    // =========================================================================

    fn derive_combined(&self) -> BTreeSet<CombinedAbility> {
        let collected: HashSet<AbilityKind> = self
            .abilities
            .iter()
            .filter(|a| a.is_collected())
            .map(|a| a.kind())
            .collect();
        rules::combined_abilities(&collected)
    }

    /// Recompute the combined set from scratch; true when it changed
    fn recompute_combined(&mut self) -> bool {
        let fresh = self.derive_combined();
        if fresh == self.combined {
            return false;
        }
        self.combined = fresh;
        true
    }

    // =========================================================================
    // Read accessors
    // =========================================================================

    #[inline]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[inline]
    pub fn level(&self) -> u32 {
        self.level
    }

    #[inline]
    pub fn max_level(&self) -> u32 {
        self.config.max_level
    }

    #[inline]
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[inline]
    pub fn abilities(&self) -> &[Ability] {
        &self.abilities
    }

    #[inline]
    pub fn objects(&self) -> &[InteractiveObject] {
        &self.objects
    }

    #[inline]
    pub fn combined_abilities(&self) -> &BTreeSet<CombinedAbility> {
        &self.combined
    }

    /// Last-known player position in `dimension` (spawn when never set)
    pub fn player_position(&self, dimension: Dimension) -> Position {
        self.positions
            .get(&dimension)
            .copied()
            .unwrap_or(Position::DEFAULT_SPAWN)
    }

    /// Player position in the active dimension
    pub fn current_player_position(&self) -> Position {
        self.player_position(self.dimension)
    }

    /// Collected abilities across all dimensions of the current level
    pub fn collected_abilities(&self) -> Vec<&Ability> {
        self.abilities.iter().filter(|a| a.is_collected()).collect()
    }

    /// Whether a collected instance of `kind` is held
    pub fn has_kind(&self, kind: AbilityKind) -> bool {
        self.abilities.iter().any(|a| a.is_collected_kind(kind))
    }

    /// Level-select gating: a level unlocks once at least that many
    /// abilities have been collected
    pub fn can_unlock_level(&self, level: u32) -> bool {
        self.collected_abilities().len() as u32 >= level
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::in_memory()
    }
}
