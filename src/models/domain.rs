use serde::{Deserialize, Serialize};

use crate::core::scoring::is_stable_match;

/// A participant in a matching run: an opaque id plus their numerically
/// encoded survey answers.
///
/// The surrounding application owns the encoding (mapping answers like
/// "Agree" or "Often" to reals); by the time a vector reaches this crate it
/// is a plain sequence of finite numbers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub answers: Vec<f64>,
}

impl Participant {
    pub fn new(user_id: impl Into<String>, answers: Vec<f64>) -> Self {
        Self {
            user_id: user_id.into(),
            answers,
        }
    }
}

/// An accepted pairing of two participants with their similarity score.
///
/// The two slots carry no ordering; (a, b) and (b, a) are the same pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchedPair {
    #[serde(rename = "user1Id")]
    pub user1_id: String,
    #[serde(rename = "user2Id")]
    pub user2_id: String,
    pub score: f64,
}

impl MatchedPair {
    /// Whether this pairing clears the stability threshold.
    pub fn is_stable(&self) -> bool {
        is_stable_match(self.score)
    }
}

/// One step of a matching run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "lowercase")]
pub enum MatchOutcome {
    /// Two participants were paired.
    Matched(MatchedPair),
    /// An odd cohort left exactly one participant without a partner.
    Singleton {
        #[serde(rename = "userId")]
        user_id: String,
    },
    /// The run is exhausted; every further call returns this.
    Done,
}

impl MatchOutcome {
    pub fn is_done(&self) -> bool {
        matches!(self, MatchOutcome::Done)
    }
}
