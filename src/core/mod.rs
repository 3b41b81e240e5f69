// Core algorithm exports
pub mod matcher;
pub mod scoring;

pub use matcher::{MatchError, PairMatcher};
pub use scoring::{cosine_similarity, is_stable_match, ScoreError};
