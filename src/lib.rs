//! # dragdrop_drill
//!
//! A drag-and-drop exercise engine for interactive learning drills.
//!
//! An exercise is a set of movable tokens and a set of slots, each slot
//! waiting for exactly one correct token. The learner drops tokens onto
//! slots; right answers stick, wrong ones bounce back with a "try again",
//! and the exercise completes once every slot holds its token.
//!
//! ## How it works
//!
//! 1. Obtain an [`ExerciseDefinition`] from the built-in
//!    [`catalog`](exercise_engine::catalog), or by mapping a topic-service
//!    response with [`parse_activity`] / [`TopicExplanation::exercises`].
//!    Construction validates the definition; a malformed one never reaches
//!    the engine.
//! 2. Start an [`ExerciseRun`] (or an [`ExerciseSet`] for several exercises)
//!    and feed it the learner's input: `place`, `remove`, `reset`.
//! 3. Each drop returns a [`PlaceReport`] with the outcome, the transient
//!    [`Feedback`] to show, and whether that drop completed the exercise.
//!
//! ## Key features
//!
//! - **No error paths mid-run**: unknown ids, filled slots and other
//!   redundant actions are silent no-ops.
//! - **Single completion signal**: the completion hook fires exactly once per
//!   run, however many wrong drops came first.
//! - **Kind-agnostic rules**: pairing, positional-fill and numeric-fill
//!   exercises share one validator; the kind only drives presentation.
//! - **Deterministic shuffling**: [`ExerciseDefinition::shuffled`] with a seed
//!   reproduces the same token order every time.
//!
//! ## Quick start
//!
//! ```rust
//! use dragdrop_drill::{catalog, ExerciseRun, Feedback};
//!
//! let mut run = ExerciseRun::new(catalog::capitals())
//!     .on_complete(|ex| println!("finished {}", ex.title()));
//!
//! // Wrong token: rejected, nothing placed.
//! let report = run.place("france", "london");
//! assert_eq!(report.feedback, Some(Feedback::TryAgain));
//!
//! // Right token: placed.
//! assert!(run.place("france", "paris").outcome.is_accepted());
//! println!("{}/{} correct", run.correct_count(), run.slot_count());
//! ```

pub mod exercise_engine;

// Convenience re-exports so callers can use `dragdrop_drill::ExerciseRun`
// directly without reaching into `exercise_engine::`.
pub use exercise_engine::{
    attempt_placement, catalog, is_complete, parse_activities, parse_activity,
    remove_placement, ActivityError, DefinitionError, DifficultyLevel, ExerciseDefinition,
    ExerciseDraft, ExerciseKind, ExerciseRun, ExerciseSet, Feedback, IgnoreReason, PlaceReport,
    Placement, PlacementOutcome, PlacementStore, Preferences, PreferencesPatch, RunStats,
    RunStatus, SessionAction, SessionState, SetError, Slot, Token, TopicAnalysis,
    TopicExplanation, UserProgress,
};
