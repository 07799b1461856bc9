//! Interactive world objects - switches, doors, platforms, and zones
//!
//! Activation is monotonic (false to true only, until a full game reset
//! rebuilds the level). A link to another object is fixed at construction;
//! activating the linking object also activates its target, one hop only
//! (see `rules::activation`).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ids::ObjectId;
use crate::value_objects::{Dimension, Position};

/// The kinds of interactive world entities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ObjectKind {
    Switch,
    Door,
    Platform,
    GravityZone,
    TimeZone,
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ObjectKind::Switch => "switch",
            ObjectKind::Door => "door",
            ObjectKind::Platform => "platform",
            ObjectKind::GravityZone => "gravityZone",
            ObjectKind::TimeZone => "timeZone",
        };
        f.write_str(name)
    }
}

/// A world entity with a binary activated state, optionally wired to
/// trigger another object's activation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractiveObject {
    id: ObjectId,
    kind: ObjectKind,
    position: Position,
    active: bool,
    target_dimension: Option<Dimension>,
    linked_object: Option<ObjectId>,
}

impl InteractiveObject {
    /// Create an inactive object with no cross-dimensional wiring
    pub fn new(kind: ObjectKind, position: Position) -> Self {
        Self {
            id: ObjectId::new(),
            kind,
            position,
            active: false,
            target_dimension: None,
            linked_object: None,
        }
    }

    /// Builder: set the dimension this object affects when activated
    pub fn with_target_dimension(mut self, dimension: Dimension) -> Self {
        self.target_dimension = Some(dimension);
        self
    }

    /// Builder: wire this object to trigger another object's activation
    pub fn linked_to(mut self, target: ObjectId) -> Self {
        self.linked_object = Some(target);
        self
    }

    #[inline]
    pub fn id(&self) -> ObjectId {
        self.id
    }

    #[inline]
    pub fn kind(&self) -> ObjectKind {
        self.kind
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[inline]
    pub fn target_dimension(&self) -> Option<Dimension> {
        self.target_dimension
    }

    #[inline]
    pub fn linked_object(&self) -> Option<ObjectId> {
        self.linked_object
    }

    /// Mark the object active. Returns false when it already was
    /// (activation is monotonic, repeat calls are no-ops).
    pub fn activate(&mut self) -> bool {
        if self.active {
            return false;
        }
        self.active = true;
        true
    }
}
