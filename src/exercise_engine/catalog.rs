//! Built-in exercises, one per kind.
//!
//! These are plain literal definitions fed through the same engine as
//! generated content. They are also what the test-suite sweeps over.

use crate::exercise_engine::models::{
    ExerciseDefinition, ExerciseDraft, ExerciseKind, Slot, Token,
};

/// Literal content is checked when built; a malformed literal is a bug.
fn literal(draft: ExerciseDraft) -> ExerciseDefinition {
    let id = draft.id.clone();
    ExerciseDefinition::try_from(draft)
        .unwrap_or_else(|e| panic!("built-in exercise '{id}' is malformed: {e}"))
}

fn tokens(pairs: &[(&str, &str)]) -> Vec<Token> {
    pairs.iter().map(|&(id, label)| Token::new(id, label)).collect()
}

pub fn capitals() -> ExerciseDefinition {
    literal(ExerciseDraft {
        id: "capitals-game".into(),
        kind: ExerciseKind::Pairing,
        title: "Match the Capitals to their Countries".into(),
        description: "Drag the capital cities to their correct countries.".into(),
        tokens: tokens(&[
            ("paris", "Paris"), ("london", "London"), ("berlin", "Berlin"),
            ("rome", "Rome"), ("madrid", "Madrid"), ("tokyo", "Tokyo"),
        ]),
        slots: vec![
            Slot::new("france",  "France",         "paris"),
            Slot::new("uk",      "United Kingdom", "london"),
            Slot::new("germany", "Germany",        "berlin"),
            Slot::new("italy",   "Italy",          "rome"),
            Slot::new("spain",   "Spain",          "madrid"),
            Slot::new("japan",   "Japan",          "tokyo"),
        ],
    })
}

pub fn solar_system() -> ExerciseDefinition {
    let planets = [
        ("mercury", "Mercury"), ("venus", "Venus"), ("earth", "Earth"), ("mars", "Mars"),
        ("jupiter", "Jupiter"), ("saturn", "Saturn"), ("uranus", "Uranus"), ("neptune", "Neptune"),
    ];
    let ordinals = ["1st", "2nd", "3rd", "4th", "5th", "6th", "7th", "8th"];
    let slots = planets
        .iter()
        .zip(ordinals)
        .enumerate()
        .map(|(i, (&(id, _), ord))| Slot::new(format!("pos-{}", i + 1), format!("{ord} Planet"), id))
        .collect();

    literal(ExerciseDraft {
        id: "solar-system-game".into(),
        kind: ExerciseKind::PositionalFill,
        title: "Solar System: Orbital Positions".into(),
        description: "Drag the planets to their correct orbital positions.".into(),
        tokens: tokens(&planets),
        slots,
    })
}

pub fn arithmetic() -> ExerciseDefinition {
    let equations = [
        ("eq-1", "2 + 3", "num-5"),
        ("eq-2", "10 - 3", "num-7"),
        ("eq-3", "6 + 6", "num-12"),
        ("eq-4", "5 * 3", "num-15"),
        ("eq-5", "40 / 2", "num-20"),
    ];
    let slots = equations
        .iter()
        .map(|&(id, expr, answer)| {
            Slot::new(id, format!("{expr} = ?"), answer).with_prefix(format!("{expr} = "))
        })
        .collect();

    literal(ExerciseDraft {
        id: "math-equation-game".into(),
        kind: ExerciseKind::NumericFill,
        title: "Complete the Math Equations".into(),
        description: "Drag the correct number to complete the equation.".into(),
        tokens: tokens(&[
            ("num-5", "5"), ("num-7", "7"), ("num-12", "12"), ("num-15", "15"), ("num-20", "20"),
        ]),
        slots,
    })
}

/// Every built-in exercise, in menu order.
pub fn all() -> Vec<ExerciseDefinition> {
    vec![capitals(), solar_system(), arithmetic()]
}
