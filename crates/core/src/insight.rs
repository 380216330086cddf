//! Post-run analysis of a sorted input.
//!
//! Each algorithm gets an [`Insights`] value summarizing how well it fit
//! the input it just sorted: fixed educational bullet points, input-derived
//! measurements (operation estimates, value ranges, digit counts), the
//! complexity strings, and an overall [`Verdict`]. All functions are pure
//! over the input values; they are computed once when playback completes.

use crate::radix::digit_count;

/// Overall fit of an algorithm for a concrete input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Optimal,
    Excellent,
    Good,
    Moderate,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Optimal => "Optimal",
            Verdict::Excellent => "Excellent",
            Verdict::Good => "Good",
            Verdict::Moderate => "Moderate",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Analysis shown after a run finishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insights {
    /// Algorithm-level facts, independent of the input.
    pub general: Vec<String>,
    /// Measurements and remarks derived from the sorted input.
    pub case_specific: Vec<String>,
    pub time_complexity: String,
    pub space_complexity: String,
    pub verdict: Verdict,
}

fn bounds(values: &[i64]) -> (i64, i64) {
    let min = *values.iter().min().unwrap_or(&0);
    let max = *values.iter().max().unwrap_or(&0);
    (min, max)
}

/// Insights for a counting sort run.
pub fn counting(values: &[i64]) -> Insights {
    let (min, max) = bounds(values);
    let range = max - min + 1;
    let n = values.len() as i64;

    Insights {
        general: vec![
            "Counting sort is efficient when the range of input values is small relative to the number of elements".to_string(),
            "It's a non-comparison based sorting algorithm that counts occurrences of each value".to_string(),
            "The algorithm uses cumulative sums to determine final positions of elements".to_string(),
            "Stable sorting: maintains relative order of equal elements".to_string(),
        ],
        case_specific: vec![
            format!("Array size: {} elements", n),
            format!("Value range: {} to {} (range = {})", min, max, range),
            format!("Count array size: {} (based on range)", range),
            format!("Total operations: ~{} (count + cumulative + place)", n + range + n),
            if range <= n * 2 {
                "Excellent efficiency! Range is small compared to array size".to_string()
            } else {
                "Less efficient: Large range relative to array size may waste space".to_string()
            },
        ],
        time_complexity: "O(n + k)".to_string(),
        space_complexity: format!("O(k) where k={}", range),
        verdict: if range <= n { Verdict::Optimal } else { Verdict::Moderate },
    }
}

/// Insights for a bucket sort run.
pub fn bucket(values: &[i64]) -> Insights {
    let (min, max) = bounds(values);
    let range = max - min;
    let n = values.len() as i64;
    let bucket_count = crate::bucket::BUCKET_COUNT as i64;
    let well_spread = n > 0 && (range as f64) / (n as f64) < 10.0;

    Insights {
        general: vec![
            "Bucket sort distributes elements into buckets based on their value range".to_string(),
            "Each bucket is sorted individually (often using insertion sort)".to_string(),
            "Works best when input is uniformly distributed across the range".to_string(),
            "Linked list implementation allows dynamic bucket sizing".to_string(),
        ],
        case_specific: vec![
            format!("Array size: {} elements", n),
            format!("Value range: {} to {} (span = {})", min, max, range),
            format!("Number of buckets: {}", bucket_count),
            format!(
                "Bucket size: ~{} per bucket",
                (range + bucket_count - 1) / bucket_count
            ),
            if well_spread {
                "Good distribution! Values well-spread across buckets".to_string()
            } else {
                "Sparse distribution: Some buckets may be underutilized".to_string()
            },
        ],
        time_complexity: "O(n + k)".to_string(),
        space_complexity: format!("O(n + k) where k={}", bucket_count),
        verdict: Verdict::Good,
    }
}

/// Insights for a radix sort run.
pub fn radix(values: &[i64]) -> Insights {
    let (_, max) = bounds(values);
    let digits = digit_count(max) as i64;
    let n = values.len() as i64;

    Insights {
        general: vec![
            "Radix sort processes numbers digit by digit from least to most significant".to_string(),
            "Uses stable counting sort as a subroutine for each digit position".to_string(),
            "Non-comparison based algorithm that leverages digit properties".to_string(),
            "Works efficiently for integers and fixed-length strings".to_string(),
        ],
        case_specific: vec![
            format!("Array size: {} elements", n),
            format!("Maximum value: {} ({} digits)", max, digits),
            format!("Number of passes: {} (one per digit position)", digits),
            format!(
                "Total operations: ~{} ({} passes × (n + 10 buckets))",
                digits * (n + 10),
                digits
            ),
            if digits <= 4 {
                "Efficient! Few digit positions to process".to_string()
            } else {
                "More passes needed due to larger numbers".to_string()
            },
        ],
        time_complexity: "O(d × (n + k))".to_string(),
        space_complexity: format!("O(n + k) where d={}, k=10", digits),
        verdict: if digits <= 4 { Verdict::Excellent } else { Verdict::Good },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counting_case_analysis() {
        let insights = counting(&[4, 2, 2, 8, 3, 3, 1]);
        // n=7, min=1, max=8, range=8.
        assert_eq!(insights.case_specific[0], "Array size: 7 elements");
        assert_eq!(insights.case_specific[1], "Value range: 1 to 8 (range = 8)");
        assert_eq!(
            insights.case_specific[3],
            "Total operations: ~22 (count + cumulative + place)"
        );
        assert_eq!(
            insights.case_specific[4],
            "Excellent efficiency! Range is small compared to array size"
        );
        assert_eq!(insights.space_complexity, "O(k) where k=8");
        // range 8 > n 7, so not optimal.
        assert_eq!(insights.verdict, Verdict::Moderate);
    }

    #[test]
    fn test_counting_optimal_when_range_fits_n() {
        let insights = counting(&[1, 2, 3]);
        assert_eq!(insights.verdict, Verdict::Optimal);
    }

    #[test]
    fn test_counting_wide_range_remark() {
        let insights = counting(&[1, 100]);
        assert_eq!(
            insights.case_specific[4],
            "Less efficient: Large range relative to array size may waste space"
        );
        assert_eq!(insights.verdict, Verdict::Moderate);
    }

    #[test]
    fn test_bucket_case_analysis() {
        let insights = bucket(&[5, 30, 12, 45, 1]);
        // span=44, ratio 8.8 < 10.
        assert_eq!(insights.case_specific[1], "Value range: 1 to 45 (span = 44)");
        assert_eq!(insights.case_specific[3], "Bucket size: ~9 per bucket");
        assert_eq!(
            insights.case_specific[4],
            "Good distribution! Values well-spread across buckets"
        );
        assert_eq!(insights.verdict, Verdict::Good);
    }

    #[test]
    fn test_bucket_sparse_distribution_remark() {
        let insights = bucket(&[1, 1000]);
        assert_eq!(
            insights.case_specific[4],
            "Sparse distribution: Some buckets may be underutilized"
        );
    }

    #[test]
    fn test_radix_case_analysis() {
        let insights = radix(&[170, 45, 75, 90]);
        // max=170, digits=3, ops = 3 * (4 + 10).
        assert_eq!(insights.case_specific[1], "Maximum value: 170 (3 digits)");
        assert_eq!(
            insights.case_specific[3],
            "Total operations: ~42 (3 passes × (n + 10 buckets))"
        );
        assert_eq!(insights.space_complexity, "O(n + k) where d=3, k=10");
        assert_eq!(insights.verdict, Verdict::Excellent);
    }

    #[test]
    fn test_radix_many_digits_downgrades_verdict() {
        let insights = radix(&[123_456]);
        assert_eq!(
            insights.case_specific[4],
            "More passes needed due to larger numbers"
        );
        assert_eq!(insights.verdict, Verdict::Good);
    }

    #[test]
    fn test_empty_input_does_not_panic() {
        let c = counting(&[]);
        assert_eq!(c.case_specific[0], "Array size: 0 elements");
        let b = bucket(&[]);
        assert_eq!(
            b.case_specific[4],
            "Sparse distribution: Some buckets may be underutilized"
        );
        let r = radix(&[]);
        assert_eq!(r.case_specific[1], "Maximum value: 0 (1 digits)");
    }

    #[test]
    fn test_verdict_display() {
        assert_eq!(Verdict::Optimal.to_string(), "Optimal");
        assert_eq!(Verdict::Excellent.to_string(), "Excellent");
    }
}
