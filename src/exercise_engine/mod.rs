//! Core exercise engine: definitions, placement state, validation, runs.
//!
//! ## Module overview
//!
//! | Module       | Purpose |
//! |--------------|---------|
//! | `models`     | Shared types: tokens, slots, exercise kinds, placements, feedback |
//! | `error`      | Construction-time errors for definitions, sets and remote activities |
//! | `store`      | Per-run placement store and pool of available tokens |
//! | `validator`  | `attempt_placement()` / `remove_placement()` |
//! | `completion` | `is_complete()` - every slot correctly filled |
//! | `runner`     | `ExerciseRun` state machine with reset and completion hook |
//! | `navigator`  | `ExerciseSet` - moves through several exercises, tracks completions |
//! | `session`    | Session-wide progress totals and preferences |
//! | `activity`   | Maps topic-service responses into validated definitions |
//! | `catalog`    | Built-in exercises, one per kind |
//! | `shuffle`    | Seeded Fisher-Yates shuffle of token presentation order |

pub mod activity;
pub mod catalog;
pub mod completion;
pub mod error;
pub mod models;
pub mod navigator;
pub mod runner;
pub mod session;
pub mod shuffle;
pub mod store;
pub mod validator;

// Re-export the public API surface so callers can use
// `exercise_engine::ExerciseRun` without reaching into sub-modules.
pub use activity::{parse_activities, parse_activity, TopicAnalysis, TopicExplanation};
pub use completion::is_complete;
pub use error::{ActivityError, DefinitionError, SetError};
pub use models::{
    DifficultyLevel, ExerciseDefinition, ExerciseDraft, ExerciseKind, Feedback, IgnoreReason,
    Placement, PlacementOutcome, Slot, Token,
};
pub use navigator::ExerciseSet;
pub use runner::{CompletionHook, ExerciseRun, PlaceReport, RunStats, RunStatus};
pub use session::{Preferences, PreferencesPatch, SessionAction, SessionState, UserProgress};
pub use store::PlacementStore;
pub use validator::{attempt_placement, remove_placement};
