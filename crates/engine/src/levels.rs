//! Level templates
//!
//! A level is a bundle of abilities and interactive objects, replaced
//! wholesale when the level is (re)entered. Every level carries one ability
//! of each kind, one per dimension, and five objects including a switch
//! wired to a door in another dimension. The reference layouts reuse one
//! arrangement for every level; the template takes the level number so
//! layouts can diverge later without an API change.

use riftbound_domain::{
    Ability, AbilityKind, Dimension, DomainError, InteractiveObject, ObjectKind, Position,
};

/// The per-level bundle handed to the session on `start_game`
#[derive(Debug, Clone)]
pub struct LevelTemplate {
    pub abilities: Vec<Ability>,
    pub objects: Vec<InteractiveObject>,
}

/// Build the template for `level` (1-based)
pub fn template(level: u32) -> Result<LevelTemplate, DomainError> {
    if level == 0 {
        return Err(DomainError::validation("levels are numbered from 1"));
    }

    let abilities = vec![
        Ability::new(
            AbilityKind::DoubleJump,
            Dimension::Reality,
            Position::new(5.0, 1.0, 0.0),
        ),
        Ability::new(
            AbilityKind::PhaseShift,
            Dimension::Dream,
            Position::new(-5.0, 1.0, 0.0),
        ),
        Ability::new(
            AbilityKind::TimeSlow,
            Dimension::Memory,
            Position::new(0.0, 1.0, 5.0),
        ),
    ];

    let door = InteractiveObject::new(ObjectKind::Door, Position::new(10.0, 0.0, 0.0))
        .with_target_dimension(Dimension::Dream);
    let switch = InteractiveObject::new(ObjectKind::Switch, Position::new(8.0, 1.0, 0.0))
        .with_target_dimension(Dimension::Dream)
        .linked_to(door.id());
    let objects = vec![
        switch,
        door,
        InteractiveObject::new(ObjectKind::Platform, Position::new(0.0, 3.0, 5.0)),
        InteractiveObject::new(ObjectKind::GravityZone, Position::new(-8.0, 2.0, 0.0)),
        InteractiveObject::new(ObjectKind::TimeZone, Position::new(0.0, 1.0, -8.0)),
    ];

    Ok(LevelTemplate { abilities, objects })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn level_zero_is_rejected() {
        assert!(template(0).is_err());
    }

    #[test]
    fn every_level_carries_one_ability_of_each_kind() {
        for level in 1..=5 {
            let bundle = template(level).expect("template");
            let kinds: HashSet<AbilityKind> =
                bundle.abilities.iter().map(|a| a.kind()).collect();
            assert_eq!(kinds.len(), 3);
        }
    }

    #[test]
    fn abilities_span_all_three_dimensions() {
        let bundle = template(1).expect("template");
        let dims: HashSet<Dimension> =
            bundle.abilities.iter().map(|a| a.dimension()).collect();
        assert_eq!(dims.len(), 3);
    }

    #[test]
    fn switch_links_to_a_door_in_the_bundle() {
        let bundle = template(1).expect("template");
        let switch = bundle
            .objects
            .iter()
            .find(|obj| obj.kind() == ObjectKind::Switch)
            .expect("switch present");
        let linked = switch.linked_object().expect("switch is wired");
        let door = bundle
            .objects
            .iter()
            .find(|obj| obj.id() == linked)
            .expect("link resolves within the bundle");
        assert_eq!(door.kind(), ObjectKind::Door);
    }

    #[test]
    fn everything_starts_uncollected_and_inactive() {
        let bundle = template(3).expect("template");
        assert!(bundle.abilities.iter().all(|a| !a.is_collected()));
        assert!(bundle.objects.iter().all(|obj| !obj.is_active()));
    }
}
