use crate::exercise_engine::models::{ExerciseDefinition, Placement, Token};

/// What is currently placed in one exercise run.
///
/// Holds the placements (at most one per slot) and the pool of tokens that
/// are still free to drag. A token is always in exactly one of the two.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementStore {
    placements: Vec<Placement>,
    available: Vec<Token>,
}

impl PlacementStore {
    /// Empty store: no placements, every token available in definition order.
    pub fn new(definition: &ExerciseDefinition) -> Self {
        PlacementStore {
            placements: Vec::with_capacity(definition.slots().len()),
            available: definition.tokens().to_vec(),
        }
    }

    /// Tokens not referenced by any placement.
    ///
    /// Definition order holds until the first removal; tokens returned by a
    /// removal are appended at the end.
    pub fn available_tokens(&self) -> &[Token] {
        &self.available
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn placement_for(&self, slot_id: &str) -> Option<&Placement> {
        self.placements.iter().find(|p| p.slot_id == slot_id)
    }

    /// The token bound to `slot_id`, if the slot is filled.
    pub fn filled_for<'a>(
        &self, definition: &'a ExerciseDefinition, slot_id: &str,
    ) -> Option<&'a Token> {
        self.placement_for(slot_id)
            .and_then(|p| definition.token(&p.token_id))
    }

    pub fn is_filled(&self, slot_id: &str) -> bool {
        self.placement_for(slot_id).is_some()
    }

    pub fn is_available(&self, token_id: &str) -> bool {
        self.available.iter().any(|t| t.id == token_id)
    }

    /// Number of placements flagged correct.
    pub fn correct_count(&self) -> usize {
        self.placements.iter().filter(|p| p.is_correct).count()
    }

    /// Record a placement and take its token out of the pool.
    ///
    /// Refused (returns `false`, nothing changes) when the slot is already
    /// filled or the token is not in the pool.
    pub(crate) fn insert(&mut self, placement: Placement) -> bool {
        if self.is_filled(&placement.slot_id) {
            return false;
        }
        let Some(idx) = self.available.iter().position(|t| t.id == placement.token_id) else {
            return false;
        };
        self.available.remove(idx);
        self.placements.push(placement);
        true
    }

    /// Drop the placement for `slot_id` and append its token to the pool.
    pub(crate) fn remove(
        &mut self, definition: &ExerciseDefinition, slot_id: &str,
    ) -> Option<Placement> {
        let idx = self.placements.iter().position(|p| p.slot_id == slot_id)?;
        let placement = self.placements.remove(idx);
        if let Some(token) = definition.token(&placement.token_id) {
            self.available.push(token.clone());
        }
        Some(placement)
    }
}
