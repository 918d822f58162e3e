//! One learner's run through one exercise.
//!
//! ## State machine
//!
//! ```text
//!   Running --place (rejected / not yet full)--> Running
//!   Running --place (last correct token)------> Completed   (notifies once)
//!   Completed --place / remove----------------> Completed
//!   any ------reset---------------------------> Running     (fresh store)
//! ```
//!
//! `Completed` never reverts on its own; only `reset()` starts over.

use std::fmt;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::exercise_engine::{
    completion::is_complete,
    models::{ExerciseDefinition, Feedback, Placement, PlacementOutcome, Token},
    store::PlacementStore,
    validator::{attempt_placement, remove_placement},
};

/// Callback invoked when a run enters `Completed`.
pub type CompletionHook = Box<dyn FnMut(&ExerciseDefinition)>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunStatus {
    #[default]
    Running,
    Completed,
}

/// Attempt counters for the current run. Reset along with the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    /// Drops that were judged (accepted or rejected).
    pub attempts: u32,
    /// Drops turned away as wrong.
    pub rejected: u32,
}

/// What happened in response to one drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceReport {
    pub outcome: PlacementOutcome,
    /// Transient signal for the learner; `None` when the drop was ignored.
    pub feedback: Option<Feedback>,
    /// True only for the drop that moved the run into `Completed`.
    pub completed: bool,
}

pub struct ExerciseRun {
    definition: ExerciseDefinition,
    store: PlacementStore,
    status: RunStatus,
    stats: RunStats,
    on_complete: Option<CompletionHook>,
}

impl fmt::Debug for ExerciseRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExerciseRun")
            .field("exercise", &self.definition.id())
            .field("status", &self.status)
            .field("stats", &self.stats)
            .field("placements", &self.store.placements().len())
            .finish()
    }
}

impl ExerciseRun {
    pub fn new(definition: ExerciseDefinition) -> Self {
        let store = PlacementStore::new(&definition);
        ExerciseRun {
            definition,
            store,
            status: RunStatus::Running,
            stats: RunStats::default(),
            on_complete: None,
        }
    }

    /// Register the completion callback. Replaces any earlier one.
    pub fn on_complete(mut self, hook: impl FnMut(&ExerciseDefinition) + 'static) -> Self {
        self.on_complete = Some(Box::new(hook));
        self
    }

    pub fn definition(&self) -> &ExerciseDefinition {
        &self.definition
    }

    pub fn store(&self) -> &PlacementStore {
        &self.store
    }

    pub fn status(&self) -> RunStatus {
        self.status
    }

    pub fn is_completed(&self) -> bool {
        self.status == RunStatus::Completed
    }

    pub fn stats(&self) -> RunStats {
        self.stats
    }

    pub fn available_tokens(&self) -> &[Token] {
        self.store.available_tokens()
    }

    pub fn filled_for(&self, slot_id: &str) -> Option<&Token> {
        self.store.filled_for(&self.definition, slot_id)
    }

    /// Slots currently holding a correct token.
    pub fn correct_count(&self) -> usize {
        self.store.correct_count()
    }

    pub fn slot_count(&self) -> usize {
        self.definition.slots().len()
    }

    /// 0–100, lowered by every rejected drop: `100 * slots / (slots + rejected)`.
    pub fn score(&self) -> u32 {
        let slots = self.slot_count() as u64;
        let total = slots + u64::from(self.stats.rejected);
        ((slots * 100 + total / 2) / total) as u32
    }

    /// The learner picked up `token_id`. Returns the token if it may be dragged.
    pub fn begin_move(&self, token_id: &str) -> Option<&Token> {
        self.store
            .available_tokens()
            .iter()
            .find(|t| t.id == token_id)
    }

    /// Drop `token_id` onto `slot_id`.
    pub fn place(&mut self, slot_id: &str, token_id: &str) -> PlaceReport {
        let outcome = attempt_placement(&mut self.store, &self.definition, slot_id, token_id);

        let feedback = match outcome {
            PlacementOutcome::Accepted   => Some(Feedback::Correct),
            PlacementOutcome::Rejected   => Some(Feedback::TryAgain),
            PlacementOutcome::Ignored(_) => None,
        };
        if !matches!(outcome, PlacementOutcome::Ignored(_)) {
            self.stats.attempts += 1;
        }
        if outcome == PlacementOutcome::Rejected {
            self.stats.rejected += 1;
        }

        let completed = outcome.is_accepted() && self.check_completion();
        PlaceReport {
            outcome,
            feedback: if completed { Some(Feedback::Completed) } else { feedback },
            completed,
        }
    }

    /// Clear `slot_id`. Allowed after completion too; the run stays completed.
    pub fn remove(&mut self, slot_id: &str) -> Option<Placement> {
        let removed = remove_placement(&mut self.store, &self.definition, slot_id);
        if removed.is_some() {
            self.check_completion();
        }
        removed
    }

    /// Start the exercise over: empty store, all tokens back, `Running`.
    pub fn reset(&mut self) {
        debug!(exercise = self.definition.id(), "run reset");
        self.store = PlacementStore::new(&self.definition);
        self.status = RunStatus::Running;
        self.stats = RunStats::default();
    }

    /// Re-evaluate completion after a store mutation. Returns true when this
    /// call performed the `Running → Completed` transition.
    fn check_completion(&mut self) -> bool {
        if self.status == RunStatus::Completed || !is_complete(&self.store, &self.definition) {
            return false;
        }
        self.status = RunStatus::Completed;
        info!(
            exercise = self.definition.id(),
            attempts = self.stats.attempts,
            rejected = self.stats.rejected,
            "exercise completed"
        );
        if let Some(hook) = self.on_complete.as_mut() {
            hook(&self.definition);
        }
        true
    }
}
