//! Combination rule engine
//!
//! Pure function from the set of collected base kinds to the set of unlocked
//! combined abilities. Each rule is evaluated independently, so one call can
//! unlock several results at once. The output fully replaces any prior
//! combined set; nothing here accumulates.

use std::collections::{BTreeSet, HashSet};

use crate::entities::{AbilityKind, CombinedAbility};

/// Compute the combined abilities unlocked by the given collected kinds
///
/// Rule table:
/// - DoubleJump + PhaseShift            -> PhaseJump
/// - PhaseShift + TimeSlow              -> TimePhase
/// - DoubleJump + TimeSlow              -> TimeJump
/// - DoubleJump + PhaseShift + TimeSlow -> UltimateSoul
pub fn combined_abilities(collected: &HashSet<AbilityKind>) -> BTreeSet<CombinedAbility> {
    let double_jump = collected.contains(&AbilityKind::DoubleJump);
    let phase_shift = collected.contains(&AbilityKind::PhaseShift);
    let time_slow = collected.contains(&AbilityKind::TimeSlow);

    let mut unlocked = BTreeSet::new();
    if double_jump && phase_shift {
        unlocked.insert(CombinedAbility::PhaseJump);
    }
    if phase_shift && time_slow {
        unlocked.insert(CombinedAbility::TimePhase);
    }
    if double_jump && time_slow {
        unlocked.insert(CombinedAbility::TimeJump);
    }
    if double_jump && phase_shift && time_slow {
        unlocked.insert(CombinedAbility::UltimateSoul);
    }
    unlocked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(list: &[AbilityKind]) -> HashSet<AbilityKind> {
        list.iter().copied().collect()
    }

    #[test]
    fn empty_set_unlocks_nothing() {
        assert!(combined_abilities(&kinds(&[])).is_empty());
    }

    #[test]
    fn single_kind_unlocks_nothing() {
        for kind in AbilityKind::ALL {
            assert!(combined_abilities(&kinds(&[kind])).is_empty());
        }
    }

    #[test]
    fn each_pair_unlocks_its_combination() {
        use AbilityKind::*;
        use CombinedAbility::*;
        let cases = [
            (kinds(&[DoubleJump, PhaseShift]), PhaseJump),
            (kinds(&[PhaseShift, TimeSlow]), TimePhase),
            (kinds(&[DoubleJump, TimeSlow]), TimeJump),
        ];
        for (collected, expected) in cases {
            let unlocked = combined_abilities(&collected);
            assert_eq!(unlocked.len(), 1);
            assert!(unlocked.contains(&expected));
        }
    }

    #[test]
    fn all_three_kinds_unlock_all_four_combinations() {
        use AbilityKind::*;
        let unlocked = combined_abilities(&kinds(&[DoubleJump, PhaseShift, TimeSlow]));
        assert_eq!(unlocked.len(), 4);
        assert!(unlocked.contains(&CombinedAbility::UltimateSoul));
    }
}
