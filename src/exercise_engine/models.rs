use std::collections::HashSet;
use std::fmt;
use serde::{Deserialize, Serialize};

use crate::exercise_engine::error::DefinitionError;

// ---------------------------------------------------------------------------
// Tokens and slots
// ---------------------------------------------------------------------------

/// A movable labelled item the learner drops into a slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub id: String,
    pub label: String,
}

impl Token {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Token { id: id.into(), label: label.into() }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// A target position that accepts exactly one specific token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub id: String,
    pub label: String,
    pub correct_token_id: String,
    /// Text shown in front of the blank, e.g. `"2 + 3 = "`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_prefix: Option<String>,
}

impl Slot {
    pub fn new(
        id: impl Into<String>, label: impl Into<String>, correct_token_id: impl Into<String>,
    ) -> Self {
        Slot {
            id: id.into(),
            label: label.into(),
            correct_token_id: correct_token_id.into(),
            display_prefix: None,
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.display_prefix = Some(prefix.into());
        self
    }
}

// ---------------------------------------------------------------------------
// Exercise kinds
// ---------------------------------------------------------------------------

/// The flavour of a drag-and-drop exercise.
///
/// Kinds only change how an exercise is *presented*. Validation and
/// completion are identical for all three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExerciseKind {
    /// Match each token to its partner (capital → country).
    Pairing,
    /// Put tokens into numbered or named positions (planet → orbit).
    PositionalFill,
    /// Complete equations with numeric tokens.
    NumericFill,
}

impl fmt::Display for ExerciseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExerciseKind::Pairing        => write!(f, "Matching"),
            ExerciseKind::PositionalFill => write!(f, "Fill in Blanks"),
            ExerciseKind::NumericFill    => write!(f, "Math"),
        }
    }
}

impl ExerciseKind {
    /// Heading shown above the slots.
    pub fn prompt(self) -> &'static str {
        match self {
            ExerciseKind::Pairing        => "Match the pairs:",
            ExerciseKind::PositionalFill => "Place in order:",
            ExerciseKind::NumericFill    => "Complete the equations:",
        }
    }

    /// Placeholder text for a slot that has nothing in it yet.
    pub fn empty_slot_hint(self) -> &'static str {
        match self {
            ExerciseKind::Pairing | ExerciseKind::PositionalFill => "Drop here",
            ExerciseKind::NumericFill                            => "?",
        }
    }

    /// One-line text rendering of a slot and whatever currently fills it.
    ///
    /// Numeric fills read as an equation (`"2 + 3 = 5"`); the other kinds
    /// show the slot label next to its content (`"France: Paris"`).
    pub fn render_slot(self, slot: &Slot, filled: Option<&Token>) -> String {
        let content = filled.map_or(self.empty_slot_hint(), |t| t.label.as_str());
        match self {
            ExerciseKind::NumericFill => match &slot.display_prefix {
                Some(prefix) => format!("{prefix}{content}"),
                None         => format!("{} {content}", slot.label),
            },
            ExerciseKind::Pairing | ExerciseKind::PositionalFill => {
                format!("{}: {content}", slot.label)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Exercise definition
// ---------------------------------------------------------------------------

/// Unvalidated exercise fields, as handed over by a content source.
///
/// Turn it into an [`ExerciseDefinition`] with `try_into()`; that is the
/// only way to obtain one, so every definition the engine sees is sound.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseDraft {
    pub id: String,
    pub kind: ExerciseKind,
    pub title: String,
    pub description: String,
    pub tokens: Vec<Token>,
    pub slots: Vec<Slot>,
}

/// The static description of one drag-and-drop exercise.
///
/// Invariants, checked on construction:
/// - token ids are unique, slot ids are unique;
/// - every slot's `correct_token_id` names one of the tokens;
/// - there is at least one slot.
///
/// Token and slot counts need not match: tokens that answer no slot act as
/// distractors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ExerciseDraft")]
pub struct ExerciseDefinition {
    id: String,
    kind: ExerciseKind,
    title: String,
    description: String,
    tokens: Vec<Token>,
    slots: Vec<Slot>,
}

impl TryFrom<ExerciseDraft> for ExerciseDefinition {
    type Error = DefinitionError;

    fn try_from(draft: ExerciseDraft) -> Result<Self, Self::Error> {
        let mut token_ids = HashSet::new();
        for token in &draft.tokens {
            if !token_ids.insert(token.id.as_str()) {
                return Err(DefinitionError::DuplicateToken(token.id.clone()));
            }
        }

        if draft.slots.is_empty() {
            return Err(DefinitionError::NoSlots(draft.id));
        }

        let mut slot_ids = HashSet::new();
        for slot in &draft.slots {
            if !slot_ids.insert(slot.id.as_str()) {
                return Err(DefinitionError::DuplicateSlot(slot.id.clone()));
            }
            if !token_ids.contains(slot.correct_token_id.as_str()) {
                return Err(DefinitionError::UnknownCorrectToken {
                    slot_id: slot.id.clone(),
                    token_id: slot.correct_token_id.clone(),
                });
            }
        }

        Ok(ExerciseDefinition {
            id: draft.id,
            kind: draft.kind,
            title: draft.title,
            description: draft.description,
            tokens: draft.tokens,
            slots: draft.slots,
        })
    }
}

impl ExerciseDefinition {
    pub fn new(
        id: impl Into<String>, kind: ExerciseKind,
        title: impl Into<String>, description: impl Into<String>,
        tokens: Vec<Token>, slots: Vec<Slot>,
    ) -> Result<Self, DefinitionError> {
        ExerciseDraft {
            id: id.into(),
            kind,
            title: title.into(),
            description: description.into(),
            tokens,
            slots,
        }
        .try_into()
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> ExerciseKind {
        self.kind
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Tokens in definition order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Slots in definition order.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn token(&self, token_id: &str) -> Option<&Token> {
        self.tokens.iter().find(|t| t.id == token_id)
    }

    pub fn slot(&self, slot_id: &str) -> Option<&Slot> {
        self.slots.iter().find(|s| s.id == slot_id)
    }

    /// Tokens that are the correct answer for no slot.
    pub fn distractors(&self) -> Vec<&Token> {
        self.tokens
            .iter()
            .filter(|t| !self.slots.iter().any(|s| s.correct_token_id == t.id))
            .collect()
    }

    /// Same exercise with its tokens in a different order.
    ///
    /// Callers must pass a permutation of the current tokens; the slot
    /// references stay valid only under that condition.
    pub(crate) fn with_token_order(&self, tokens: Vec<Token>) -> Self {
        debug_assert_eq!(tokens.len(), self.tokens.len());
        ExerciseDefinition { tokens, ..self.clone() }
    }
}

// ---------------------------------------------------------------------------
// Placements and feedback
// ---------------------------------------------------------------------------

/// A recorded pairing of a token to a slot during one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub slot_id: String,
    pub token_id: String,
    pub is_correct: bool,
}

/// Why a placement attempt was dropped without being judged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IgnoreReason {
    UnknownSlot,
    UnknownToken,
    /// The slot already holds a placement.
    SlotFilled,
    /// The token is sitting in another slot.
    TokenUnavailable,
}

impl fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IgnoreReason::UnknownSlot      => write!(f, "unknown slot"),
            IgnoreReason::UnknownToken     => write!(f, "unknown token"),
            IgnoreReason::SlotFilled       => write!(f, "slot already filled"),
            IgnoreReason::TokenUnavailable => write!(f, "token already placed"),
        }
    }
}

/// Result of one placement attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlacementOutcome {
    /// The token was the slot's answer and is now placed.
    Accepted,
    /// Wrong token for this slot. Nothing was stored.
    Rejected,
    /// The attempt could not be judged and changed nothing.
    Ignored(IgnoreReason),
}

impl PlacementOutcome {
    pub fn is_accepted(self) -> bool {
        matches!(self, PlacementOutcome::Accepted)
    }
}

/// Transient signal for the learner after a drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Feedback {
    Correct,
    TryAgain,
    /// The drop that finished the exercise.
    Completed,
}

impl Feedback {
    pub fn is_success(self) -> bool {
        !matches!(self, Feedback::TryAgain)
    }

    pub fn message(self) -> &'static str {
        match self {
            Feedback::Correct   => "Great job! That's correct!",
            Feedback::TryAgain  => "Not quite right. Try again!",
            Feedback::Completed => "Excellent! You've completed the exercise!",
        }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

// ---------------------------------------------------------------------------
// Learner preferences
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DifficultyLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DifficultyLevel::Beginner     => write!(f, "Beginner"),
            DifficultyLevel::Intermediate => write!(f, "Intermediate"),
            DifficultyLevel::Advanced     => write!(f, "Advanced"),
        }
    }
}
