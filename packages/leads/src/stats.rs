use serde::{Deserialize, Serialize};

use crate::lead::{RawLead, UniqueLead};

/// Display-oriented summary of a deduplication pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeduplicationStats {
    pub original: usize,
    pub unique: usize,
    pub duplicates: usize,
    /// Share of the original list dropped as duplicates, rounded to whole
    /// percent. Zero when the original list was empty.
    pub percentage: u32,
}

impl DeduplicationStats {
    pub fn from_counts(original: usize, unique: usize) -> Self {
        let duplicates = original.saturating_sub(unique);
        let percentage = if original > 0 {
            ((duplicates as f64 / original as f64) * 100.0).round() as u32
        } else {
            0
        };

        Self {
            original,
            unique,
            duplicates,
            percentage,
        }
    }
}

/// Summarize how much a deduplication pass shrank the input.
pub fn deduplication_stats(original: &[RawLead], unique: &[UniqueLead]) -> DeduplicationStats {
    DeduplicationStats::from_counts(original.len(), unique.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_and_percentage() {
        let stats = DeduplicationStats::from_counts(10, 7);
        assert_eq!(stats.duplicates, 3);
        assert_eq!(stats.percentage, 30);
    }

    #[test]
    fn test_empty_original_list() {
        let stats = DeduplicationStats::from_counts(0, 0);
        assert_eq!(stats.duplicates, 0);
        assert_eq!(stats.percentage, 0);
    }

    #[test]
    fn test_unique_exceeding_original_clamps_to_zero() {
        let stats = DeduplicationStats::from_counts(3, 5);
        assert_eq!(stats.duplicates, 0);
        assert_eq!(stats.percentage, 0);
    }

    #[test]
    fn test_percentage_rounds() {
        // 1 of 3 dropped -> 33.33.. -> 33
        assert_eq!(DeduplicationStats::from_counts(3, 2).percentage, 33);
        // 2 of 3 dropped -> 66.66.. -> 67
        assert_eq!(DeduplicationStats::from_counts(3, 1).percentage, 67);
    }
}
