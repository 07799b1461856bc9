//! Collectible abilities and the combined abilities derived from them
//!
//! An ability is permanently bound to one kind and one dimension; only its
//! `collected` flag ever changes, and only from false to true. Combined
//! abilities carry no state of their own - they are recomputed from the
//! collected set on every collection event (see `rules::combination`).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ids::AbilityId;
use crate::value_objects::{Dimension, Position};

/// The three base movement capabilities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(rename_all = "camelCase")]
pub enum AbilityKind {
    DoubleJump,
    PhaseShift,
    TimeSlow,
}

impl AbilityKind {
    pub const ALL: [AbilityKind; 3] = [
        AbilityKind::DoubleJump,
        AbilityKind::PhaseShift,
        AbilityKind::TimeSlow,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            AbilityKind::DoubleJump => "Double Jump",
            AbilityKind::PhaseShift => "Phase Shift",
            AbilityKind::TimeSlow => "Time Slow",
        }
    }
}

impl fmt::Display for AbilityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Bonus capabilities unlocked purely by holding combinations of base kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(rename_all = "camelCase")]
pub enum CombinedAbility {
    PhaseJump,
    TimePhase,
    TimeJump,
    UltimateSoul,
}

impl CombinedAbility {
    pub fn display_name(self) -> &'static str {
        match self {
            CombinedAbility::PhaseJump => "Phase Jump",
            CombinedAbility::TimePhase => "Time Phase",
            CombinedAbility::TimeJump => "Time Jump",
            CombinedAbility::UltimateSoul => "Ultimate Soul",
        }
    }
}

impl fmt::Display for CombinedAbility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A collectible unlocking a movement capability
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ability {
    id: AbilityId,
    kind: AbilityKind,
    dimension: Dimension,
    position: Position,
    collected: bool,
}

impl Ability {
    /// Create an uncollected ability bound to one kind and one dimension
    pub fn new(kind: AbilityKind, dimension: Dimension, position: Position) -> Self {
        Self {
            id: AbilityId::new(),
            kind,
            dimension,
            position,
            collected: false,
        }
    }

    #[inline]
    pub fn id(&self) -> AbilityId {
        self.id
    }

    #[inline]
    pub fn kind(&self) -> AbilityKind {
        self.kind
    }

    #[inline]
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    #[inline]
    pub fn is_collected(&self) -> bool {
        self.collected
    }

    /// Whether this ability is a collected instance of `kind`
    pub fn is_collected_kind(&self, kind: AbilityKind) -> bool {
        self.collected && self.kind == kind
    }

    /// Mark the ability collected. Returns false when it already was
    /// (collection is monotonic, repeat calls are no-ops).
    pub fn collect(&mut self) -> bool {
        if self.collected {
            return false;
        }
        self.collected = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ability() -> Ability {
        Ability::new(
            AbilityKind::DoubleJump,
            Dimension::Reality,
            Position::new(5.0, 1.0, 0.0),
        )
    }

    #[test]
    fn starts_uncollected() {
        assert!(!ability().is_collected());
    }

    #[test]
    fn collect_is_monotonic() {
        let mut a = ability();
        assert!(a.collect());
        assert!(!a.collect());
        assert!(a.is_collected());
    }

    #[test]
    fn collected_kind_query() {
        let mut a = ability();
        assert!(!a.is_collected_kind(AbilityKind::DoubleJump));
        a.collect();
        assert!(a.is_collected_kind(AbilityKind::DoubleJump));
        assert!(!a.is_collected_kind(AbilityKind::TimeSlow));
    }

    #[test]
    fn serde_round_trip_preserves_every_field() {
        let mut a = ability();
        a.collect();
        let json = serde_json::to_string(&a).expect("serialize");
        let back: Ability = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, a);
    }
}
