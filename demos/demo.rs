//! Walk through the built-in exercises end to end.
//!
//! Run with: `cargo run --example demo`
//! Set `RUST_LOG=dragdrop_drill=debug` to see every placement decision.
//!
//! 1. **Single run**: the capitals exercise with one wrong drop, one removal,
//!    and the completion hook firing once.
//!
//! 2. **Exercise set**: all three built-in exercises solved in sequence with
//!    seeded token shuffling, progress fed into a session.

use dragdrop_drill::{
    catalog, ExerciseRun, ExerciseSet, SessionAction, SessionState,
};
use tracing_subscriber::EnvFilter;

/// Print every slot of the current run, then the remaining tokens.
fn print_board(run: &ExerciseRun) {
    let def = run.definition();
    println!("  {}  [{}]  {}/{} correct",
        def.title(), def.kind(), run.correct_count(), run.slot_count());
    println!("  {}", def.kind().prompt());
    for slot in def.slots() {
        println!("    {}", def.kind().render_slot(slot, run.filled_for(&slot.id)));
    }
    let pool: Vec<&str> = run.available_tokens().iter().map(|t| t.label.as_str()).collect();
    println!("  Available: {}", pool.join(", "));
    println!();
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // ── Single run ───────────────────────────────────────────────────────────
    println!();
    println!("══ Single run: capitals ══");
    println!();

    let mut run = ExerciseRun::new(catalog::capitals())
        .on_complete(|ex| println!("  >> completed: {}", ex.title()));

    for (slot, token) in [("france", "london"), ("france", "paris"), ("uk", "london")] {
        let report = run.place(slot, token);
        if let Some(fb) = report.feedback {
            println!("  {token} -> {slot}: {fb}");
        }
    }
    run.remove("uk");
    println!("  removed uk");
    print_board(&run);

    for (slot, token) in [
        ("uk", "london"), ("germany", "berlin"), ("italy", "rome"),
        ("spain", "madrid"), ("japan", "tokyo"),
    ] {
        run.place(slot, token);
    }
    print_board(&run);
    println!("  Score: {}  (attempts {}, rejected {})",
        run.score(), run.stats().attempts, run.stats().rejected);

    // ── Exercise set ─────────────────────────────────────────────────────────
    println!();
    println!("══ Exercise set: every built-in exercise, shuffled ══");
    println!();

    let exercises = catalog::all()
        .iter()
        .enumerate()
        .map(|(i, ex)| ex.shuffled(Some(100 + i as u64)))
        .collect();
    let Ok(mut set) = ExerciseSet::new(exercises) else {
        eprintln!("built-in catalog did not form a set");
        return;
    };
    let mut session = SessionState::new();

    loop {
        let id = set.current().id().to_string();
        session.apply(SessionAction::SetCurrent(id.clone()));
        print_board(set.run());

        let slots = set.current().slots().to_vec();
        for slot in &slots {
            if set.place(&slot.id, &slot.correct_token_id).completed {
                session.apply(SessionAction::Complete {
                    exercise_id: id.clone(),
                    score: set.run().score(),
                });
            }
        }
        print_board(set.run());

        if !set.advance() {
            break;
        }
    }

    println!("  Completed {}/{} ({}%)", set.completed_count(), set.len(), set.completion_percent());
    println!("  Session: {:?}", session.progress);
}
