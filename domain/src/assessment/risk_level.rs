//! Risk-level classification.
//!
//! Five inclusive score bands jointly cover 0..=100 with no overlap:
//!
//! | Band     | Level      |
//! |----------|------------|
//! | 90..=100 | LOW        |
//! | 70..=89  | MEDIUM-LOW |
//! | 50..=69  | MEDIUM     |
//! | 25..=49  | HIGH       |
//! | 0..=24   | CRITICAL   |
//!
//! Scores outside 0..=100 classify as [`RiskLevel::Unknown`]. A correct run
//! can never produce one; observing it signals a scoring defect upstream.

use serde::{Deserialize, Serialize};

/// Qualitative risk level derived from a 0..=100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    MediumLow,
    Medium,
    High,
    Critical,
    /// Sentinel for out-of-range scores; never observed in correct operation.
    Unknown,
}

impl RiskLevel {
    /// Classify a score into its band.
    pub fn classify(score: i32) -> Self {
        match score {
            90..=100 => RiskLevel::Low,
            70..=89 => RiskLevel::MediumLow,
            50..=69 => RiskLevel::Medium,
            25..=49 => RiskLevel::High,
            0..=24 => RiskLevel::Critical,
            _ => RiskLevel::Unknown,
        }
    }

    /// Report label for this level.
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::MediumLow => "MEDIUM-LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
            RiskLevel::Critical => "CRITICAL",
            RiskLevel::Unknown => "UNKNOWN",
        }
    }

    /// Severity ordinal: 0 for LOW up to 4 for CRITICAL.
    ///
    /// `Unknown` sorts above everything so a defect is impossible to miss.
    pub fn severity(&self) -> u8 {
        match self {
            RiskLevel::Low => 0,
            RiskLevel::MediumLow => 1,
            RiskLevel::Medium => 2,
            RiskLevel::High => 3,
            RiskLevel::Critical => 4,
            RiskLevel::Unknown => 5,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, RiskLevel::Unknown)
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        assert_eq!(RiskLevel::classify(100), RiskLevel::Low);
        assert_eq!(RiskLevel::classify(90), RiskLevel::Low);
        assert_eq!(RiskLevel::classify(89), RiskLevel::MediumLow);
        assert_eq!(RiskLevel::classify(70), RiskLevel::MediumLow);
        assert_eq!(RiskLevel::classify(69), RiskLevel::Medium);
        assert_eq!(RiskLevel::classify(50), RiskLevel::Medium);
        assert_eq!(RiskLevel::classify(49), RiskLevel::High);
        assert_eq!(RiskLevel::classify(25), RiskLevel::High);
        assert_eq!(RiskLevel::classify(24), RiskLevel::Critical);
        assert_eq!(RiskLevel::classify(0), RiskLevel::Critical);
    }

    #[test]
    fn test_bands_are_exhaustive_and_exclusive() {
        // Every integer in 0..=100 hits exactly one real band.
        for score in 0..=100 {
            let level = RiskLevel::classify(score);
            assert!(
                !level.is_unknown(),
                "score {} fell through the bands",
                score
            );
        }
    }

    #[test]
    fn test_out_of_range_is_unknown() {
        assert_eq!(RiskLevel::classify(101), RiskLevel::Unknown);
        assert_eq!(RiskLevel::classify(-1), RiskLevel::Unknown);
        assert_eq!(RiskLevel::classify(1000), RiskLevel::Unknown);
    }

    #[test]
    fn test_severity_ordering() {
        assert!(RiskLevel::Low.severity() < RiskLevel::MediumLow.severity());
        assert!(RiskLevel::High.severity() < RiskLevel::Critical.severity());
        assert!(RiskLevel::Critical.severity() < RiskLevel::Unknown.severity());
    }

    #[test]
    fn test_labels() {
        assert_eq!(RiskLevel::classify(95).label(), "LOW");
        assert_eq!(RiskLevel::classify(10).to_string(), "CRITICAL");
    }
}
