use std::collections::{BTreeSet, HashSet};
use tracing::{debug, info};

use crate::exercise_engine::{
    error::SetError,
    models::{ExerciseDefinition, Placement},
    runner::{ExerciseRun, PlaceReport},
};

/// An ordered set of exercises worked through one at a time.
///
/// Owns the run state of the current exercise only. Moving to another
/// exercise throws that run away and starts a fresh one; completed ids
/// accumulate until [`reset_progress`](Self::reset_progress).
#[derive(Debug)]
pub struct ExerciseSet {
    exercises: Vec<ExerciseDefinition>,
    current_index: usize,
    completed_ids: BTreeSet<String>,
    run: ExerciseRun,
}

impl ExerciseSet {
    pub fn new(exercises: Vec<ExerciseDefinition>) -> Result<Self, SetError> {
        let first = exercises.first().cloned().ok_or(SetError::Empty)?;
        {
            let mut seen = HashSet::new();
            for ex in &exercises {
                if !seen.insert(ex.id()) {
                    return Err(SetError::DuplicateExercise(ex.id().to_string()));
                }
            }
        }
        Ok(ExerciseSet {
            exercises,
            current_index: 0,
            completed_ids: BTreeSet::new(),
            run: ExerciseRun::new(first),
        })
    }

    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    #[doc(hidden)]
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    pub fn exercises(&self) -> &[ExerciseDefinition] {
        &self.exercises
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current(&self) -> &ExerciseDefinition {
        self.run.definition()
    }

    pub fn run(&self) -> &ExerciseRun {
        &self.run
    }

    /// Move to the next exercise. No wraparound; returns whether it moved.
    pub fn advance(&mut self) -> bool {
        if self.current_index + 1 >= self.exercises.len() {
            return false;
        }
        self.switch_to(self.current_index + 1);
        true
    }

    /// Move to the previous exercise. No wraparound; returns whether it moved.
    pub fn retreat(&mut self) -> bool {
        if self.current_index == 0 {
            return false;
        }
        self.switch_to(self.current_index - 1);
        true
    }

    /// Jump straight to `index`. Out of range is a no-op.
    ///
    /// Selecting the current index restarts that exercise.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.exercises.len() {
            return false;
        }
        self.switch_to(index);
        true
    }

    fn switch_to(&mut self, index: usize) {
        self.current_index = index;
        self.run = ExerciseRun::new(self.exercises[index].clone());
        debug!(index, exercise = self.run.definition().id(), "exercise selected");
    }

    // -- learner input on the current exercise ------------------------------

    /// Drop a token on the current exercise; marks it completed when the
    /// run reports completion.
    pub fn place(&mut self, slot_id: &str, token_id: &str) -> PlaceReport {
        let report = self.run.place(slot_id, token_id);
        if report.completed {
            let id = self.run.definition().id().to_string();
            self.mark_completed(&id);
        }
        report
    }

    pub fn remove(&mut self, slot_id: &str) -> Option<Placement> {
        self.run.remove(slot_id)
    }

    /// Restart the current exercise. Completed ids are kept.
    pub fn reset_exercise(&mut self) {
        self.run.reset();
    }

    // -- progress -----------------------------------------------------------

    /// Idempotent. Ids outside this set are ignored; returns whether the
    /// id is now recorded as completed.
    pub fn mark_completed(&mut self, exercise_id: &str) -> bool {
        if !self.exercises.iter().any(|ex| ex.id() == exercise_id) {
            debug!(exercise = exercise_id, "completion for unknown exercise ignored");
            return false;
        }
        if self.completed_ids.insert(exercise_id.to_string()) {
            debug!(exercise = exercise_id, "exercise marked completed");
        }
        true
    }

    pub fn is_completed(&self, exercise_id: &str) -> bool {
        self.completed_ids.contains(exercise_id)
    }

    pub fn completed_ids(&self) -> &BTreeSet<String> {
        &self.completed_ids
    }

    /// Forget every completion. The current position is unchanged.
    pub fn reset_progress(&mut self) {
        info!(cleared = self.completed_ids.len(), "progress reset");
        self.completed_ids.clear();
    }

    pub fn completed_count(&self) -> usize {
        self.completed_ids.len()
    }

    /// Completed share of the set, rounded to a whole percent.
    pub fn completion_percent(&self) -> u32 {
        let total = self.exercises.len();
        ((self.completed_count() * 100 + total / 2) / total) as u32
    }

    pub fn all_completed(&self) -> bool {
        self.exercises.iter().all(|ex| self.is_completed(ex.id()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exercise_engine::models::{ExerciseKind, Slot, Token};

    fn single(id: &str) -> ExerciseDefinition {
        ExerciseDefinition::new(
            id, ExerciseKind::Pairing, id, "",
            vec![Token::new("t", "T")],
            vec![Slot::new("s", "S", "t")],
        )
        .unwrap()
    }

    fn three() -> ExerciseSet {
        ExerciseSet::new(vec![single("a"), single("b"), single("c")]).unwrap()
    }

    #[test]
    fn empty_and_duplicate_sets_are_rejected() {
        assert_eq!(ExerciseSet::new(vec![]).unwrap_err(), SetError::Empty);
        assert_eq!(
            ExerciseSet::new(vec![single("a"), single("a")]).unwrap_err(),
            SetError::DuplicateExercise("a".into())
        );
    }

    #[test]
    fn movement_clamps_at_both_ends() {
        let mut set = three();
        assert!(!set.retreat());
        assert_eq!(set.current_index(), 0);
        assert!(set.advance());
        assert!(set.advance());
        assert_eq!(set.current().id(), "c");
        assert!(!set.advance());
        assert_eq!(set.current_index(), 2);
        assert!(set.retreat());
        assert_eq!(set.current_index(), 1);
    }

    #[test]
    fn switching_discards_run_state() {
        let mut set = three();
        set.place("s", "t");
        assert!(set.run().is_completed());
        set.advance();
        set.retreat();
        assert!(!set.run().is_completed());
        assert!(set.run().store().placements().is_empty());
    }

    #[test]
    fn boundary_no_op_keeps_run_state() {
        let mut set = three();
        set.place("s", "t");
        assert!(!set.retreat());
        assert!(set.run().is_completed());
    }

    #[test]
    fn select_out_of_range_is_ignored() {
        let mut set = three();
        assert!(!set.select(3));
        assert_eq!(set.current_index(), 0);
        assert!(set.select(2));
        assert_eq!(set.current().id(), "c");
    }

    #[test]
    fn completion_is_recorded_and_survives_navigation() {
        let mut set = three();
        let report = set.place("s", "t");
        assert!(report.completed);
        assert!(set.is_completed("a"));
        set.advance();
        assert!(set.is_completed("a"));
        assert_eq!(set.completion_percent(), 33);
    }

    #[test]
    fn mark_completed_is_idempotent_and_reset_clears_only_progress() {
        let mut set = three();
        set.advance();
        set.mark_completed("a");
        set.mark_completed("a");
        assert_eq!(set.completed_count(), 1);
        set.reset_progress();
        assert_eq!(set.completed_count(), 0);
        assert_eq!(set.current_index(), 1);
    }

    #[test]
    fn completion_of_foreign_ids_is_ignored() {
        let mut set = three();
        for id in ["x", "y", "z", "w"] {
            assert!(!set.mark_completed(id));
        }
        assert!(set.mark_completed("b"));
        assert_eq!(set.completed_count(), 1);
        assert!(!set.is_completed("x"));
        assert!(set.completed_count() <= set.len());
        assert!(set.completion_percent() <= 100);
        assert_eq!(set.completion_percent(), 33);
    }

    #[test]
    fn all_completed_after_every_exercise() {
        let mut set = three();
        for _ in 0..3 {
            set.place("s", "t");
            set.advance();
        }
        assert!(set.all_completed());
        assert_eq!(set.completion_percent(), 100);
    }
}
