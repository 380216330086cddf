//! Algorithm selection and the step generator seam.
//!
//! [`StepGenerator`] is the object-safe interface a sorting algorithm
//! exposes to the rest of the crate: materialize steps, analyze a finished
//! run, and describe the value range suited to random demonstration input.
//! [`AlgorithmKind`] is the closed set of supported algorithms and the
//! parse target for user-facing selection.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::error::Result;
use crate::insight::Insights;
use crate::step::Step;
use crate::{bucket, counting, insight, radix};

/// A sorting algorithm that can narrate itself as a step sequence.
pub trait StepGenerator {
    /// Display name, e.g. "Counting Sort".
    fn name(&self) -> &'static str;

    /// One-paragraph summary shown in the view header.
    fn description(&self) -> &'static str;

    /// Materialize the complete step sequence for `values`. The input is
    /// not mutated; the final step carries the sorted array.
    fn generate(&self, values: &[i64]) -> Result<Vec<Step>>;

    /// Post-run analysis of `values`.
    fn insights(&self, values: &[i64]) -> Insights;

    /// Value range to draw from when sampling a random input.
    fn sample_range(&self) -> RangeInclusive<i64>;
}

/// Counting sort. Small non-negative keys, narrated count table.
pub struct CountingSort;

impl StepGenerator for CountingSort {
    fn name(&self) -> &'static str {
        "Counting Sort"
    }

    fn description(&self) -> &'static str {
        "Counts the number of objects with distinct key values, then calculates \
         positions using cumulative sums. Time Complexity: O(n + k) where k is \
         the range of input."
    }

    fn generate(&self, values: &[i64]) -> Result<Vec<Step>> {
        counting::generate(values)
    }

    fn insights(&self, values: &[i64]) -> Insights {
        insight::counting(values)
    }

    fn sample_range(&self) -> RangeInclusive<i64> {
        1..=20
    }
}

/// Bucket sort. Five range buckets drawn as linked lists.
pub struct BucketSort;

impl StepGenerator for BucketSort {
    fn name(&self) -> &'static str {
        "Bucket Sort"
    }

    fn description(&self) -> &'static str {
        "Distributes elements into buckets (linked lists), sorts individual \
         buckets, then concatenates. Time Complexity: O(n + k) on average, \
         where k is the number of buckets."
    }

    fn generate(&self, values: &[i64]) -> Result<Vec<Step>> {
        bucket::generate(values)
    }

    fn insights(&self, values: &[i64]) -> Insights {
        insight::bucket(values)
    }

    fn sample_range(&self) -> RangeInclusive<i64> {
        1..=50
    }
}

/// Radix sort (LSD). Ten digit buckets per pass.
pub struct RadixSort;

impl StepGenerator for RadixSort {
    fn name(&self) -> &'static str {
        "Radix Sort"
    }

    fn description(&self) -> &'static str {
        "Sorts numbers digit by digit starting from least significant digit \
         using stable counting sort. Time Complexity: O(d × (n + k)) where d \
         is number of digits, k is range of digit values."
    }

    fn generate(&self, values: &[i64]) -> Result<Vec<Step>> {
        radix::generate(values)
    }

    fn insights(&self, values: &[i64]) -> Insights {
        insight::radix(values)
    }

    fn sample_range(&self) -> RangeInclusive<i64> {
        1..=999
    }
}

/// The supported algorithms, as a parseable closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmKind {
    Counting,
    Bucket,
    Radix,
}

impl AlgorithmKind {
    pub const ALL: [AlgorithmKind; 3] =
        [AlgorithmKind::Counting, AlgorithmKind::Bucket, AlgorithmKind::Radix];

    /// Instantiate the generator for this kind.
    pub fn generator(&self) -> Box<dyn StepGenerator> {
        match self {
            AlgorithmKind::Counting => Box::new(CountingSort),
            AlgorithmKind::Bucket => Box::new(BucketSort),
            AlgorithmKind::Radix => Box::new(RadixSort),
        }
    }
}

impl fmt::Display for AlgorithmKind {
    /// The lowercase selection token, as accepted by [`FromStr`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            AlgorithmKind::Counting => "counting",
            AlgorithmKind::Bucket => "bucket",
            AlgorithmKind::Radix => "radix",
        };
        f.write_str(token)
    }
}

impl FromStr for AlgorithmKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "counting" => Ok(AlgorithmKind::Counting),
            "bucket" => Ok(AlgorithmKind::Bucket),
            "radix" => Ok(AlgorithmKind::Radix),
            other => Err(format!(
                "unknown algorithm '{}': expected counting, bucket, or radix",
                other
            )),
        }
    }
}
