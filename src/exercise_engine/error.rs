//! Construction-time error types.
//!
//! Errors only exist at the boundaries that *build* things: an exercise
//! definition, an exercise set, or a mapped remote activity. Once a run is
//! underway every learner action is infallible and redundant or invalid
//! actions degrade to no-ops.

use thiserror::Error;

/// Reasons an exercise definition is structurally invalid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefinitionError {
    /// Two tokens share the same id.
    #[error("duplicate token id '{0}'")]
    DuplicateToken(String),

    /// Two slots share the same id.
    #[error("duplicate slot id '{0}'")]
    DuplicateSlot(String),

    /// A slot names a correct token that is not part of the exercise.
    #[error("slot '{slot_id}' expects unknown token '{token_id}'")]
    UnknownCorrectToken { slot_id: String, token_id: String },

    /// The exercise has nothing to fill in.
    #[error("exercise '{0}' has no slots")]
    NoSlots(String),
}

/// Errors raised when building an [`ExerciseSet`](crate::exercise_engine::navigator::ExerciseSet).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetError {
    #[error("an exercise set needs at least one exercise")]
    Empty,

    #[error("duplicate exercise id '{0}' in set")]
    DuplicateExercise(String),
}

/// Errors raised while mapping a remote service response into exercises.
#[derive(Debug, Error)]
pub enum ActivityError {
    /// The payload was not valid JSON for the expected shape.
    #[error("malformed activity payload: {0}")]
    Json(#[from] serde_json::Error),

    /// The explanation response carried no activity content.
    #[error("no interactive content for topic '{0}'")]
    MissingContent(String),

    /// The activity type is not one of the supported exercise kinds.
    #[error("unsupported activity type '{0}'")]
    UnsupportedKind(String),

    /// The activity parsed but does not describe a valid exercise.
    #[error("invalid exercise definition: {0}")]
    Definition(#[from] DefinitionError),
}
