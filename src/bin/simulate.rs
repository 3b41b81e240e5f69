// Synthetic-cohort driver for the Roomie matching core.
//
// Generates a deterministic cohort, runs a full matching pass, and emits the
// outcomes as JSON on stdout. Cohort shape comes from COHORT_SIZE and
// SURVEY_QUESTIONS, log verbosity from LOG_LEVEL.

use roomie_algo::{MatchOutcome, PairMatcher, Participant};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn env_usize(key: &str, default: usize) -> usize {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Deterministic stand-in for encoded survey answers: a small xorshift keeps
/// runs reproducible without pulling in an RNG crate.
fn synthetic_answers(user_index: usize, questions: usize) -> Vec<f64> {
    let mut state = (user_index as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15) | 1;
    (0..questions)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            // Map into [-1, 1], the range the app's answer encoding uses.
            (state % 2001) as f64 / 1000.0 - 1.0
        })
        .collect()
}

fn main() {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_level))
        .with_target(false)
        .init();

    let cohort_size = env_usize("COHORT_SIZE", 150);
    let questions = env_usize("SURVEY_QUESTIONS", 25);

    info!(
        "Generating cohort of {} participants ({} questions each)",
        cohort_size, questions
    );

    let participants: Vec<Participant> = (0..cohort_size)
        .map(|i| {
            Participant::new(
                format!("user{:04}@roomie.app", i),
                synthetic_answers(i, questions),
            )
        })
        .collect();

    let matcher = match PairMatcher::new(&participants) {
        Ok(matcher) => matcher,
        Err(e) => {
            error!("Failed to build matcher: {}", e);
            std::process::exit(1);
        }
    };

    let outcomes = matcher.run();
    let pairs = outcomes
        .iter()
        .filter(|o| matches!(o, MatchOutcome::Matched(_)))
        .count();
    info!(
        "Run complete: {} pairs, {} left unmatched",
        pairs,
        outcomes.len() - pairs
    );

    match serde_json::to_string_pretty(&outcomes) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            error!("Failed to serialize outcomes: {}", e);
            std::process::exit(1);
        }
    }
}
