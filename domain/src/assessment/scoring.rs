//! Scoring arithmetic.
//!
//! Rounding is half-away-from-zero (`f64::round`) for both the per-domain
//! percentage and the overall mean. All inputs are non-negative here, so
//! ties always round up (e.g. 12.5% -> 13).

/// Percentage of yes answers for one domain, rounded to the nearest integer.
///
/// `total` must be greater than zero; the catalog guarantees every domain
/// has at least one question.
pub fn domain_score(answered_yes: usize, total: usize) -> u8 {
    debug_assert!(total > 0, "domain must have at least one question");
    debug_assert!(answered_yes <= total);
    ((answered_yes as f64 / total as f64) * 100.0).round() as u8
}

/// Unweighted mean of the domain scores, rounded to the nearest integer.
///
/// Returns 0 for an empty slice, which cannot occur for a catalog-driven run.
pub fn overall_score(domain_scores: &[u8]) -> u8 {
    if domain_scores.is_empty() {
        return 0;
    }
    let sum: u32 = domain_scores.iter().map(|&s| s as u32).sum();
    (sum as f64 / domain_scores.len() as f64).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_score_basic() {
        assert_eq!(domain_score(3, 5), 60);
        assert_eq!(domain_score(0, 5), 0);
        assert_eq!(domain_score(5, 5), 100);
    }

    #[test]
    fn test_domain_score_rounds_half_away_from_zero() {
        // 1/8 = 12.5% -> 13
        assert_eq!(domain_score(1, 8), 13);
        // 1/3 = 33.33% -> 33
        assert_eq!(domain_score(1, 3), 33);
        // 2/3 = 66.67% -> 67
        assert_eq!(domain_score(2, 3), 67);
    }

    #[test]
    fn test_domain_score_always_in_range() {
        for total in 1..=10usize {
            for yes in 0..=total {
                let score = domain_score(yes, total);
                assert!(score <= 100);
            }
        }
    }

    #[test]
    fn test_overall_score_mean() {
        assert_eq!(overall_score(&[100, 100, 100, 100, 0]), 80);
        assert_eq!(overall_score(&[0, 0, 0, 0, 0]), 0);
        assert_eq!(overall_score(&[100; 5]), 100);
    }

    #[test]
    fn test_overall_score_rounds_half_up() {
        // mean of 60 and 61 = 60.5 -> 61
        assert_eq!(overall_score(&[60, 61]), 61);
    }

    #[test]
    fn test_overall_score_empty() {
        assert_eq!(overall_score(&[]), 0);
    }
}
