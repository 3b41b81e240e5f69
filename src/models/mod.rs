// Model exports
pub mod domain;

pub use domain::{MatchOutcome, MatchedPair, Participant};
