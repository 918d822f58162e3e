//! Placement validation and removal.
//!
//! Pure functions over a [`PlacementStore`] and its [`ExerciseDefinition`].
//! A wrong token is turned away outright: it is never stored, so there is no
//! "incorrect placement" state for the learner to clean up afterwards.

use tracing::debug;

use crate::exercise_engine::{
    models::{ExerciseDefinition, IgnoreReason, Placement, PlacementOutcome},
    store::PlacementStore,
};

/// Try to drop `token_id` onto `slot_id`.
///
/// The token is accepted iff it is the slot's `correct_token_id`; only then is
/// a placement recorded and the token taken out of the pool. Unknown ids, a
/// filled slot, or a token that is already placed elsewhere leave the store
/// untouched and yield [`PlacementOutcome::Ignored`].
pub fn attempt_placement(
    store: &mut PlacementStore,
    definition: &ExerciseDefinition,
    slot_id: &str,
    token_id: &str,
) -> PlacementOutcome {
    let Some(slot) = definition.slot(slot_id) else {
        return ignored(definition, slot_id, token_id, IgnoreReason::UnknownSlot);
    };
    if definition.token(token_id).is_none() {
        return ignored(definition, slot_id, token_id, IgnoreReason::UnknownToken);
    }
    if store.is_filled(slot_id) {
        return ignored(definition, slot_id, token_id, IgnoreReason::SlotFilled);
    }
    if !store.is_available(token_id) {
        return ignored(definition, slot_id, token_id, IgnoreReason::TokenUnavailable);
    }

    if slot.correct_token_id != token_id {
        debug!(exercise = definition.id(), slot_id, token_id, "placement rejected");
        return PlacementOutcome::Rejected;
    }

    let inserted = store.insert(Placement {
        slot_id: slot_id.to_string(),
        token_id: token_id.to_string(),
        is_correct: true,
    });
    debug_assert!(inserted, "pre-checked insert must succeed");
    debug!(exercise = definition.id(), slot_id, token_id, "placement accepted");
    PlacementOutcome::Accepted
}

/// Clear `slot_id` and hand its token back to the pool.
///
/// Returns the removed placement; `None` (and no change) when the slot was
/// empty or unknown.
pub fn remove_placement(
    store: &mut PlacementStore,
    definition: &ExerciseDefinition,
    slot_id: &str,
) -> Option<Placement> {
    let removed = store.remove(definition, slot_id);
    if let Some(p) = &removed {
        debug!(exercise = definition.id(), slot_id, token_id = %p.token_id, "placement removed");
    }
    removed
}

fn ignored(
    definition: &ExerciseDefinition, slot_id: &str, token_id: &str, reason: IgnoreReason,
) -> PlacementOutcome {
    debug!(exercise = definition.id(), slot_id, token_id, %reason, "placement ignored");
    PlacementOutcome::Ignored(reason)
}
