use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

use thiserror::Error;

use crate::core::scoring::{cosine_similarity, ScoreError};
use crate::models::{MatchOutcome, MatchedPair, Participant};

/// Errors from building a matching run
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatchError {
    #[error("duplicate participant id: {0}")]
    DuplicateParticipant(String),
    #[error(transparent)]
    Score(#[from] ScoreError),
}

/// One candidate pairing, ranked by score.
///
/// `seq` is the pair's creation index and breaks ties between equal scores:
/// the pair generated earlier wins, so a run is fully deterministic and never
/// leans on how the heap orders duplicate keys.
#[derive(Debug, Clone)]
struct ScoredPair {
    user1_id: String,
    user2_id: String,
    score: f64,
    seq: usize,
}

impl PartialEq for ScoredPair {
    fn eq(&self, other: &Self) -> bool {
        self.seq == other.seq
    }
}

impl Eq for ScoredPair {}

impl PartialOrd for ScoredPair {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ScoredPair {
    fn cmp(&self, other: &Self) -> Ordering {
        // Scores are clamped on creation, so never NaN.
        self.score
            .partial_cmp(&other.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Greedy pair matcher over one cohort of participants
///
/// Construction scores all C(N,2) pairs up front; each `next_match` call then
/// pops the best remaining pair. Pairs whose member was already consumed by a
/// higher-scoring match are discarded lazily at pop time rather than scrubbed
/// from the heap when a match is accepted.
///
/// A matcher owns its run state exclusively; concurrent runs over separate
/// cohorts each need their own instance.
#[derive(Debug)]
pub struct PairMatcher {
    pairs: BinaryHeap<ScoredPair>,
    unmatched: HashSet<String>,
}

impl PairMatcher {
    /// Build a matching run from a cohort
    ///
    /// Fails with `DuplicateParticipant` before any scoring if two entries
    /// share an id, and propagates scorer errors for malformed vectors.
    pub fn new(participants: &[Participant]) -> Result<Self, MatchError> {
        let mut unmatched = HashSet::with_capacity(participants.len());
        for participant in participants {
            if !unmatched.insert(participant.user_id.clone()) {
                return Err(MatchError::DuplicateParticipant(
                    participant.user_id.clone(),
                ));
            }
        }

        let pair_count = participants.len() * participants.len().saturating_sub(1) / 2;
        let mut pairs = BinaryHeap::with_capacity(pair_count);
        let mut seq = 0;

        for (i, a) in participants.iter().enumerate() {
            for b in &participants[i + 1..] {
                let score = cosine_similarity(&a.answers, &b.answers)?;
                pairs.push(ScoredPair {
                    user1_id: a.user_id.clone(),
                    user2_id: b.user_id.clone(),
                    score,
                    seq,
                });
                seq += 1;
            }
        }

        tracing::debug!(
            participants = participants.len(),
            pairs = pairs.len(),
            "built matching run"
        );

        Ok(Self { pairs, unmatched })
    }

    /// Produce the next outcome of the run
    ///
    /// Returns the highest-scoring pair whose members are both still
    /// unmatched, the leftover singleton once candidates are exhausted on an
    /// odd cohort, and `Done` from then on.
    pub fn next_match(&mut self) -> MatchOutcome {
        while let Some(pair) = self.pairs.pop() {
            if self.unmatched.contains(&pair.user1_id) && self.unmatched.contains(&pair.user2_id)
            {
                self.unmatched.remove(&pair.user1_id);
                self.unmatched.remove(&pair.user2_id);
                tracing::debug!(
                    user1 = %pair.user1_id,
                    user2 = %pair.user2_id,
                    score = pair.score,
                    "accepted pair"
                );
                return MatchOutcome::Matched(MatchedPair {
                    user1_id: pair.user1_id,
                    user2_id: pair.user2_id,
                    score: pair.score,
                });
            }
            // Stale entry: a member was consumed by a higher-scoring pair.
            tracing::trace!(user1 = %pair.user1_id, user2 = %pair.user2_id, "skipping stale pair");
        }

        // Heap exhausted: at most one participant can still be unmatched,
        // since any two leftovers would have accepted their own pair above.
        if let Some(user_id) = self.unmatched.drain().next() {
            return MatchOutcome::Singleton { user_id };
        }

        MatchOutcome::Done
    }

    /// Drive the run to exhaustion, collecting every pair and the leftover
    /// singleton (if any).
    pub fn run(mut self) -> Vec<MatchOutcome> {
        let mut outcomes = Vec::with_capacity(self.unmatched.len() / 2 + 1);
        loop {
            let outcome = self.next_match();
            if outcome.is_done() {
                break;
            }
            outcomes.push(outcome);
        }
        outcomes
    }

    /// Number of participants not yet consumed by a match.
    pub fn remaining(&self) -> usize {
        self.unmatched.len()
    }
}
