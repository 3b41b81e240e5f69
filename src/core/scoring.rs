use thiserror::Error;

/// Score above which two roommates are considered a stable pairing.
const STABLE_MATCH_THRESHOLD: f64 = 0.7;

/// Errors from comparing two preference vectors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScoreError {
    #[error("preference vectors differ in length ({left} vs {right})")]
    DimensionMismatch { left: usize, right: usize },
    #[error("preference vector has zero magnitude and cannot be normalized")]
    DegenerateVector,
}

/// Cosine similarity between two preference vectors
///
/// Returns a score in [-1, 1]: 1 for identical directions, 0 for orthogonal
/// answers, -1 for opposite ones. Both vectors must have the same length and
/// a non-zero magnitude.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> Result<f64, ScoreError> {
    if a.len() != b.len() {
        return Err(ScoreError::DimensionMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    let magnitude_a = magnitude(a);
    let magnitude_b = magnitude(b);

    if magnitude_a == 0.0 || magnitude_b == 0.0 {
        return Err(ScoreError::DegenerateVector);
    }

    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();

    // Same as dotting the two unit vectors; rounding can push the quotient
    // fractionally past ±1, so clamp at the boundary.
    Ok((dot / (magnitude_a * magnitude_b)).clamp(-1.0, 1.0))
}

/// Euclidean magnitude of a vector
#[inline]
fn magnitude(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// Whether a similarity score clears the stability threshold.
#[inline]
pub fn is_stable_match(score: f64) -> bool {
    score > STABLE_MATCH_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-6;

    #[test]
    fn test_identical_vectors_score_one() {
        let v = vec![1.0, 0.5, -0.5, 0.0, 1.0];
        let score = cosine_similarity(&v, &v).unwrap();
        assert!((score - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_opposite_vectors_score_negative_one() {
        let a = vec![1.0, 1.0, 1.0];
        let b = vec![-1.0, -1.0, -1.0];
        let score = cosine_similarity(&a, &b).unwrap();
        assert!((score + 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_orthogonal_vectors_score_zero() {
        let a = vec![1.0, 0.0];
        let b = vec![0.0, 1.0];
        let score = cosine_similarity(&a, &b).unwrap();
        assert!(score.abs() < TOLERANCE);
    }

    #[test]
    fn test_symmetry() {
        let a = vec![1.0, 0.5, -0.5, 0.3, 0.8];
        let b = vec![0.2, -0.3, 0.7, 0.1, -0.5];
        let ab = cosine_similarity(&a, &b).unwrap();
        let ba = cosine_similarity(&b, &a).unwrap();
        assert!((ab - ba).abs() < TOLERANCE);
    }

    #[test]
    fn test_score_always_in_range() {
        let cases = [
            (vec![1.0, 1.0, 1.0], vec![1.0, 1.0, 1.0]),
            (vec![1.0, 1.0, 1.0], vec![-1.0, -1.0, -1.0]),
            (vec![0.5, -0.5, 0.0], vec![0.0, 0.5, -0.5]),
            (vec![1e-8, 1e-8], vec![1e8, 1e8]),
        ];

        for (a, b) in &cases {
            let score = cosine_similarity(a, b).unwrap();
            assert!(
                (-1.0..=1.0).contains(&score),
                "score {} out of range for {:?} vs {:?}",
                score,
                a,
                b
            );
        }
    }

    #[test]
    fn test_dimension_mismatch() {
        let a = vec![1.0, 0.0, 0.0];
        let b = vec![1.0, 0.0];
        assert_eq!(
            cosine_similarity(&a, &b),
            Err(ScoreError::DimensionMismatch { left: 3, right: 2 })
        );
    }

    #[test]
    fn test_zero_vector_is_degenerate() {
        let a = vec![0.0, 0.0, 0.0];
        let b = vec![1.0, 2.0, 3.0];
        assert_eq!(cosine_similarity(&a, &b), Err(ScoreError::DegenerateVector));
        assert_eq!(cosine_similarity(&b, &a), Err(ScoreError::DegenerateVector));
    }

    #[test]
    fn test_empty_vectors_are_degenerate() {
        assert_eq!(cosine_similarity(&[], &[]), Err(ScoreError::DegenerateVector));
    }

    #[test]
    fn test_single_dimension() {
        let score = cosine_similarity(&[1.0], &[1.0]).unwrap();
        assert!((score - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_similar_preferences_score_high() {
        // Both prefer quiet, clean, early schedule
        let a = vec![1.0, 0.8, 0.9, -0.5, -0.7];
        let b = vec![0.9, 0.7, 0.8, -0.6, -0.8];
        let score = cosine_similarity(&a, &b).unwrap();
        assert!(score > 0.9, "similar answers should score high, got {}", score);
    }

    #[test]
    fn test_stability_threshold() {
        assert!(is_stable_match(0.71));
        assert!(!is_stable_match(0.7));
        assert!(!is_stable_match(-0.2));
    }
}
