//! Mapping remote-service responses into exercise definitions.
//!
//! The topic services are called elsewhere; this module only takes the
//! response bodies they return and turns them into values the engine can
//! run. Anything that does not describe a sound exercise is rejected here,
//! before it reaches a runner.
//!
//! Activity wire format (camelCase, as the service emits it):
//!
//! ```json
//! {
//!   "id": "capitals",
//!   "type": "match",
//!   "title": "Capitals",
//!   "description": "Drag each capital to its country.",
//!   "draggableElements": [{ "id": "paris", "label": "Paris" }],
//!   "droppableBlanks": [
//!     { "id": "france", "label": "France", "correctElementId": "paris" }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::exercise_engine::{
    error::ActivityError,
    models::{ExerciseDefinition, ExerciseDraft, ExerciseKind, Slot, Token},
};

// ---------------------------------------------------------------------------
// Topic service responses
// ---------------------------------------------------------------------------

/// Response of the topic-analysis call: the learner's query broken into
/// sub-topics they can pick from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicAnalysis {
    pub subject_area: String,
    pub depth_level: String,
    pub question_type: String,
    /// Sub-topics, in the order they should be offered.
    pub curiosity_tree: Vec<String>,
}

impl TopicAnalysis {
    pub fn from_json(body: &str) -> Result<Self, ActivityError> {
        Ok(serde_json::from_str(body)?)
    }
}

/// Response of the topic-explanation call for one sub-topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicExplanation {
    pub topic: String,
    pub explanation: String,
    pub template_type: String,
    /// A JSON document holding one activity or an array of them.
    #[serde(default)]
    pub activity_content: Option<String>,
}

impl TopicExplanation {
    pub fn from_json(body: &str) -> Result<Self, ActivityError> {
        Ok(serde_json::from_str(body)?)
    }

    /// Decode the embedded activity content into runnable exercises.
    pub fn exercises(&self) -> Result<Vec<ExerciseDefinition>, ActivityError> {
        let content = self
            .activity_content
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .ok_or_else(|| ActivityError::MissingContent(self.topic.clone()))?;
        parse_activities(content).inspect_err(|e| {
            warn!(topic = %self.topic, error = %e, "activity content could not be mapped");
        })
    }
}

// ---------------------------------------------------------------------------
// Activity wire format
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireElement {
    id: String,
    label: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireBlank {
    id: String,
    label: String,
    correct_element_id: String,
    #[serde(default)]
    display_prefix: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireActivity {
    id: String,
    #[serde(rename = "type")]
    kind: String,
    title: String,
    #[serde(default)]
    description: String,
    draggable_elements: Vec<WireElement>,
    droppable_blanks: Vec<WireBlank>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WirePayload {
    Many(Vec<WireActivity>),
    One(WireActivity),
}

/// Map the service's `type` tag onto an exercise kind.
pub fn parse_kind(tag: &str) -> Option<ExerciseKind> {
    match tag {
        "match"          => Some(ExerciseKind::Pairing),
        "fill-in-blanks" => Some(ExerciseKind::PositionalFill),
        "math-fill"      => Some(ExerciseKind::NumericFill),
        _ => None,
    }
}

impl WireActivity {
    fn into_definition(self) -> Result<ExerciseDefinition, ActivityError> {
        let kind = parse_kind(&self.kind).ok_or(ActivityError::UnsupportedKind(self.kind))?;
        let draft = ExerciseDraft {
            id: self.id,
            kind,
            title: self.title,
            description: self.description,
            tokens: self
                .draggable_elements
                .into_iter()
                .map(|e| Token { id: e.id, label: e.label })
                .collect(),
            slots: self
                .droppable_blanks
                .into_iter()
                .map(|b| Slot {
                    id: b.id,
                    label: b.label,
                    correct_token_id: b.correct_element_id,
                    display_prefix: b.display_prefix,
                })
                .collect(),
        };
        Ok(ExerciseDefinition::try_from(draft)?)
    }
}

/// Parse a single activity document.
pub fn parse_activity(json: &str) -> Result<ExerciseDefinition, ActivityError> {
    let wire: WireActivity = serde_json::from_str(json)?;
    wire.into_definition()
}

/// Parse activity content holding either one activity or an array.
///
/// All-or-nothing: one bad activity rejects the whole batch.
pub fn parse_activities(json: &str) -> Result<Vec<ExerciseDefinition>, ActivityError> {
    match serde_json::from_str::<WirePayload>(json)? {
        WirePayload::One(wire)   => Ok(vec![wire.into_definition()?]),
        WirePayload::Many(wires) => wires.into_iter().map(WireActivity::into_definition).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use crate::exercise_engine::error::DefinitionError;

    fn planets_json() -> serde_json::Value {
        json!({
            "id": "inner-planets",
            "type": "fill-in-blanks",
            "title": "Inner planets",
            "description": "Order them from the Sun.",
            "draggableElements": [
                { "id": "mercury", "label": "Mercury" },
                { "id": "venus", "label": "Venus" }
            ],
            "droppableBlanks": [
                { "id": "pos-1", "label": "1st Planet", "correctElementId": "mercury" },
                { "id": "pos-2", "label": "2nd Planet", "correctElementId": "venus" }
            ]
        })
    }

    #[test]
    fn activity_maps_to_definition() {
        let def = parse_activity(&planets_json().to_string()).unwrap();
        assert_eq!(def.id(), "inner-planets");
        assert_eq!(def.kind(), ExerciseKind::PositionalFill);
        assert_eq!(def.tokens().len(), 2);
        assert_eq!(def.slot("pos-2").unwrap().correct_token_id, "venus");
    }

    #[test]
    fn display_prefix_is_carried_over() {
        let body = json!({
            "id": "sums", "type": "math-fill", "title": "Sums",
            "draggableElements": [{ "id": "n4", "label": "4" }],
            "droppableBlanks": [
                { "id": "e1", "label": "2 + 2 = ?", "displayPrefix": "2 + 2 = ", "correctElementId": "n4" }
            ]
        });
        let def = parse_activity(&body.to_string()).unwrap();
        assert_eq!(def.kind(), ExerciseKind::NumericFill);
        assert_eq!(def.description(), "");
        assert_eq!(def.slots()[0].display_prefix.as_deref(), Some("2 + 2 = "));
    }

    #[test]
    fn dangling_answer_is_rejected_at_the_boundary() {
        let mut body = planets_json();
        body["droppableBlanks"][1]["correctElementId"] = json!("earth");
        let err = parse_activity(&body.to_string()).unwrap_err();
        assert!(matches!(
            err,
            ActivityError::Definition(DefinitionError::UnknownCorrectToken { .. })
        ));
    }

    #[test]
    fn unknown_type_is_rejected() {
        let mut body = planets_json();
        body["type"] = json!("category_sort");
        let err = parse_activity(&body.to_string()).unwrap_err();
        assert!(matches!(err, ActivityError::UnsupportedKind(ref k) if k == "category_sort"));
    }

    #[test]
    fn broken_json_is_a_json_error() {
        assert!(matches!(parse_activity("{ not json"), Err(ActivityError::Json(_))));
    }

    #[test]
    fn content_may_hold_one_or_many_activities() {
        let one = planets_json().to_string();
        assert_eq!(parse_activities(&one).unwrap().len(), 1);

        let mut second = planets_json();
        second["id"] = json!("inner-planets-2");
        let many = json!([planets_json(), second]).to_string();
        assert_eq!(parse_activities(&many).unwrap().len(), 2);
    }

    #[test]
    fn explanation_yields_exercises() {
        let body = json!({
            "topic": "Planets",
            "explanation": "The planets orbit the Sun.",
            "template_type": "fill_blanks",
            "activity_content": planets_json().to_string()
        });
        let explanation = TopicExplanation::from_json(&body.to_string()).unwrap();
        let exercises = explanation.exercises().unwrap();
        assert_eq!(exercises[0].id(), "inner-planets");
    }

    #[test]
    fn explanation_without_content_is_reported() {
        let body = json!({
            "topic": "Planets",
            "explanation": "The planets orbit the Sun.",
            "template_type": "fill_blanks"
        });
        let explanation = TopicExplanation::from_json(&body.to_string()).unwrap();
        assert!(matches!(
            explanation.exercises(),
            Err(ActivityError::MissingContent(ref t)) if t == "Planets"
        ));
    }

    #[test]
    fn analysis_lists_subtopics() {
        let body = json!({
            "subject_area": "Astronomy",
            "depth_level": "beginner",
            "question_type": "conceptual",
            "curiosity_tree": ["Planets", "Orbits", "Moons"]
        });
        let analysis = TopicAnalysis::from_json(&body.to_string()).unwrap();
        assert_eq!(analysis.curiosity_tree, ["Planets", "Orbits", "Moons"]);
    }
}
