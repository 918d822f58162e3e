//! Application-session state: progress totals and learner preferences.
//!
//! An explicit value owned by whoever drives the UI, changed only through
//! [`SessionState::apply`]. It lives as long as the session and is never
//! persisted.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::exercise_engine::models::DifficultyLevel;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub animations: bool,
    pub sound_enabled: bool,
    pub difficulty: DifficultyLevel,
}

impl Default for Preferences {
    fn default() -> Self {
        Preferences {
            animations: true,
            sound_enabled: false,
            difficulty: DifficultyLevel::Beginner,
        }
    }
}

/// Partial preference update; `None` fields are left as they are.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferencesPatch {
    pub animations: Option<bool>,
    pub sound_enabled: Option<bool>,
    pub difficulty: Option<DifficultyLevel>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProgress {
    /// Sum of every reported score, repeats included.
    pub total_score: u32,
    /// Distinct exercises completed.
    pub exercises_completed: u32,
    /// `total_score / exercises_completed`, rounded; 0 with nothing completed.
    pub average_score: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionAction {
    SetCurrent(String),
    Complete { exercise_id: String, score: u32 },
    ResetProgress,
    UpdatePreferences(PreferencesPatch),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub current_exercise: Option<String>,
    /// Completed exercise ids in first-completion order.
    pub completed_exercises: Vec<String>,
    pub progress: UserProgress,
    pub preferences: Preferences,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_preferences(preferences: Preferences) -> Self {
        SessionState { preferences, ..Self::default() }
    }

    /// Apply one action.
    pub fn apply(&mut self, action: SessionAction) {
        match action {
            SessionAction::SetCurrent(id) => {
                debug!(exercise = %id, "current exercise set");
                self.current_exercise = Some(id);
            }

            SessionAction::Complete { exercise_id, score } => {
                if !self.completed_exercises.contains(&exercise_id) {
                    self.completed_exercises.push(exercise_id);
                }
                let completed = self.completed_exercises.len() as u32;
                let total = self.progress.total_score.saturating_add(score);
                self.progress = UserProgress {
                    total_score: total,
                    exercises_completed: completed,
                    average_score: total.saturating_add(completed / 2) / completed,
                };
                debug!(progress = ?self.progress, "progress updated");
            }

            SessionAction::ResetProgress => {
                info!("session progress reset");
                self.completed_exercises.clear();
                self.progress = UserProgress::default();
            }

            SessionAction::UpdatePreferences(patch) => {
                let prefs = &mut self.preferences;
                if let Some(v) = patch.animations    { prefs.animations = v; }
                if let Some(v) = patch.sound_enabled { prefs.sound_enabled = v; }
                if let Some(v) = patch.difficulty    { prefs.difficulty = v; }
            }
        }
    }

    pub fn is_completed(&self, exercise_id: &str) -> bool {
        self.completed_exercises.iter().any(|id| id == exercise_id)
    }
}
