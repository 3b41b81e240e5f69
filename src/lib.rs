//! Roomie Algo - greedy pair-matching core for the Roomie roommate app
//!
//! This library provides the matching algorithm used by the Roomie app: survey
//! answers become preference vectors, pairs are ranked by cosine similarity,
//! and a greedy pass extracts disjoint pairs in descending score order. The
//! surrounding application supplies the participants and persists the results.

pub mod core;
pub mod models;

// Re-export commonly used types
pub use crate::core::{cosine_similarity, is_stable_match, MatchError, PairMatcher, ScoreError};
pub use models::{MatchOutcome, MatchedPair, Participant};
