//! Activation propagation rule
//!
//! Pure transformation over an object collection, usable on its own without
//! the engine. Activating a target also activates the object it links to,
//! one hop only: the linked object's own link is never followed.

use crate::entities::InteractiveObject;
use crate::ids::ObjectId;

/// What an activation request changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationOutcome {
    /// Unknown id, or the target was already active
    Unchanged,
    /// The target flipped to active, along with its linked object when it
    /// had one that was present in the collection
    Activated {
        target: ObjectId,
        linked: Option<ObjectId>,
    },
}

impl ActivationOutcome {
    pub fn changed(&self) -> bool {
        matches!(self, ActivationOutcome::Activated { .. })
    }
}

/// Activate `id` within `objects`, propagating one hop through its link
///
/// Unknown ids and already-active targets are no-ops, never errors; repeated
/// activation is idempotent.
pub fn activate(id: ObjectId, objects: &mut [InteractiveObject]) -> ActivationOutcome {
    let Some(target_idx) = objects.iter().position(|obj| obj.id() == id) else {
        return ActivationOutcome::Unchanged;
    };
    if !objects[target_idx].activate() {
        return ActivationOutcome::Unchanged;
    }

    // Linked object activates regardless of its current state; only its
    // presence in the collection is checked, not its own link.
    let linked = objects[target_idx].linked_object().and_then(|linked_id| {
        let linked_obj = objects.iter_mut().find(|obj| obj.id() == linked_id)?;
        linked_obj.activate();
        Some(linked_id)
    });

    ActivationOutcome::Activated { target: id, linked }
}
