use crate::exercise_engine::{models::ExerciseDefinition, store::PlacementStore};

/// True iff every slot holds a placement that is flagged correct.
///
/// The validator never stores a wrong placement today, but correctness is
/// still checked per slot so this stays right if that ever changes.
pub fn is_complete(store: &PlacementStore, definition: &ExerciseDefinition) -> bool {
    definition.slots().iter().all(|slot| {
        store
            .placement_for(&slot.id)
            .is_some_and(|p| p.is_correct)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exercise_engine::models::{ExerciseKind, Placement, Slot, Token};

    fn def() -> ExerciseDefinition {
        ExerciseDefinition::new(
            "capitals", ExerciseKind::Pairing, "Capitals", "",
            vec![Token::new("paris", "Paris"), Token::new("london", "London")],
            vec![Slot::new("france", "France", "paris"), Slot::new("uk", "UK", "london")],
        )
        .unwrap()
    }

    fn place(store: &mut PlacementStore, slot: &str, token: &str, is_correct: bool) {
        store.insert(Placement { slot_id: slot.into(), token_id: token.into(), is_correct });
    }

    #[test]
    fn empty_store_is_not_complete() {
        let d = def();
        assert!(!is_complete(&PlacementStore::new(&d), &d));
    }

    #[test]
    fn partial_store_is_not_complete() {
        let d = def();
        let mut store = PlacementStore::new(&d);
        place(&mut store, "france", "paris", true);
        assert!(!is_complete(&store, &d));
    }

    #[test]
    fn all_correct_is_complete() {
        let d = def();
        let mut store = PlacementStore::new(&d);
        place(&mut store, "france", "paris", true);
        place(&mut store, "uk", "london", true);
        assert!(is_complete(&store, &d));
    }

    #[test]
    fn a_placement_flagged_incorrect_blocks_completion() {
        let d = def();
        let mut store = PlacementStore::new(&d);
        place(&mut store, "france", "paris", true);
        place(&mut store, "uk", "london", false);
        assert!(!is_complete(&store, &d));
    }
}
