//! Bucket sort step generator.
//!
//! Partitions values into a fixed number of range-based buckets, sorts each
//! bucket independently, and concatenates the buckets in index order. The
//! presentation layer draws buckets as linked lists; here they are plain
//! ordered `Vec`s (the `-> null` rendering is a display conceit).
//!
//! Narrated steps:
//!
//! 1. a step showing the freshly created empty buckets
//! 2. one step per element distributed, with the index formula and the
//!    concrete computation
//! 3. a boundary step once everything is distributed
//! 4. per non-empty bucket: a "sorting internally" step, then one step per
//!    element merged into the growing sorted prefix
//! 5. a final step with every position `Sorted`
//!
//! # Input Contract
//!
//! Any `i64` values are accepted; bucket indices are computed relative to
//! the minimum, so negatives need no special casing. Stability within a
//! bucket is not guaranteed. Empty input yields a single placeholder step.

use crate::error::Result;
use crate::step::{CellState, Step};

/// Number of range buckets.
pub const BUCKET_COUNT: usize = 5;

/// Bucket index for `value`: `⌊(value - min) / bucket_size⌋`, clamped into
/// the last bucket so the maximum value cannot land one past the end.
fn bucket_index(value: i64, min: i64, bucket_size: i64) -> usize {
    let raw = ((value - min) / bucket_size) as usize;
    raw.min(BUCKET_COUNT - 1)
}

/// Generate the full step sequence for bucket sort.
pub fn generate(values: &[i64]) -> Result<Vec<Step>> {
    if values.is_empty() {
        return Ok(vec![Step::new(
            Vec::new(),
            Vec::new(),
            "Initial array to be sorted",
        )]);
    }

    let mut steps = Vec::new();
    steps.push(Step::uniform(
        values.to_vec(),
        CellState::Default,
        "Initial array to be sorted",
    ));

    let min = *values.iter().min().unwrap_or(&0);
    let max = *values.iter().max().unwrap_or(&0);
    let range = max - min;
    // Ceil division, clamped to 1 when all values are equal (range 0).
    let bucket_size = ((range + BUCKET_COUNT as i64 - 1) / BUCKET_COUNT as i64).max(1);

    let mut buckets: Vec<Vec<i64>> = vec![Vec::new(); BUCKET_COUNT];
    let mut created = Step::uniform(
        values.to_vec(),
        CellState::Default,
        format!("Creating {} empty buckets (linked lists)", BUCKET_COUNT),
    );
    created.buckets = Some(buckets.clone());
    steps.push(created);

    // Distribute elements into buckets, one step each.
    for (idx, &num) in values.iter().enumerate() {
        let target = bucket_index(num, min, bucket_size);
        buckets[target].push(num);

        let mut step = Step::new(
            values.to_vec(),
            Step::comparing_at(values.len(), idx),
            format!("Inserting {} into bucket {} (linked list node)", num, target),
        );
        step.buckets = Some(buckets.clone());
        step.highlight_bucket = Some(target);
        step.formula = Some("bucketIndex = ⌊(num - min) / bucketSize⌋".to_string());
        step.computation = Some(format!(
            "bucketIndex = ⌊({} - {}) / {}⌋ = {}",
            num, min, bucket_size, target
        ));
        steps.push(step);
    }

    let mut distributed = Step::uniform(
        values.to_vec(),
        CellState::Default,
        "All elements distributed into buckets - now sorting each bucket",
    );
    distributed.buckets = Some(buckets.clone());
    steps.push(distributed);

    // Sort each bucket, then merge it into the growing sorted prefix.
    let mut sorted: Vec<i64> = Vec::with_capacity(values.len());
    for bucket_idx in 0..BUCKET_COUNT {
        if buckets[bucket_idx].is_empty() {
            continue;
        }
        buckets[bucket_idx].sort_unstable();

        let mut step = Step::new(
            padded_prefix(&sorted, values.len()),
            prefix_states(sorted.len(), values.len()),
            format!("Sorting bucket {} internally", bucket_idx),
        );
        step.buckets = Some(buckets.clone());
        step.highlight_bucket = Some(bucket_idx);
        steps.push(step);

        for i in 0..buckets[bucket_idx].len() {
            let num = buckets[bucket_idx][i];
            sorted.push(num);

            let mut step = Step::new(
                padded_prefix(&sorted, values.len()),
                prefix_states(sorted.len(), values.len()),
                format!("Merging {} from bucket {} into final array", num, bucket_idx),
            );
            step.buckets = Some(buckets.clone());
            step.highlight_bucket = Some(bucket_idx);
            steps.push(step);
        }
    }

    steps.push(Step::uniform(
        sorted,
        CellState::Sorted,
        "Array sorted successfully!",
    ));

    Ok(steps)
}

/// The merged prefix followed by zero padding up to the full length.
fn padded_prefix(sorted: &[i64], len: usize) -> Vec<i64> {
    let mut array = sorted.to_vec();
    array.resize(len, 0);
    array
}

/// `Sorted` tags for the merged prefix, `Default` for the rest.
fn prefix_states(placed: usize, len: usize) -> Vec<CellState> {
    (0..len)
        .map(|i| {
            if i < placed {
                CellState::Sorted
            } else {
                CellState::Default
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_index_examples() {
        // min=1, max=45, range=44, bucketSize=ceil(44/5)=9: 30 -> bucket 3.
        assert_eq!(bucket_index(30, 1, 9), 3);
        assert_eq!(bucket_index(5, 1, 9), 0);
        assert_eq!(bucket_index(45, 1, 9), 4);
    }

    #[test]
    fn test_max_value_clamped_into_last_bucket() {
        // range=10, size=2: raw index of 10 is 5, clamped to 4.
        assert_eq!(bucket_index(10, 0, 2), BUCKET_COUNT - 1);
    }

    #[test]
    fn test_distribution_step_narration() {
        let steps = generate(&[5, 30, 12, 45, 1]).unwrap();
        // Steps: initial, creation, then one per element in input order.
        let inserting_30 = &steps[3];
        assert_eq!(
            inserting_30.description,
            "Inserting 30 into bucket 3 (linked list node)"
        );
        assert_eq!(inserting_30.highlight_bucket, Some(3));
        assert_eq!(
            inserting_30.computation.as_deref(),
            Some("bucketIndex = ⌊(30 - 1) / 9⌋ = 3")
        );
        assert_eq!(
            inserting_30.formula.as_deref(),
            Some("bucketIndex = ⌊(num - min) / bucketSize⌋")
        );
    }

    #[test]
    fn test_creation_step_shows_empty_buckets() {
        let steps = generate(&[5, 30]).unwrap();
        let buckets = steps[1].buckets.as_ref().unwrap();
        assert_eq!(buckets.len(), BUCKET_COUNT);
        assert!(buckets.iter().all(|b| b.is_empty()));
    }

    #[test]
    fn test_final_step_is_sorted() {
        let steps = generate(&[5, 30, 12, 45, 1]).unwrap();
        let last = steps.last().unwrap();
        assert_eq!(last.array, vec![1, 5, 12, 30, 45]);
        assert!(last.states.iter().all(|s| *s == CellState::Sorted));
    }

    #[test]
    fn test_negative_values_supported() {
        let steps = generate(&[-5, 3, -10]).unwrap();
        assert_eq!(steps.last().unwrap().array, vec![-10, -5, 3]);
    }

    #[test]
    fn test_all_equal_values_share_bucket_zero() {
        let steps = generate(&[7, 7, 7]).unwrap();
        let distributed = steps
            .iter()
            .rev()
            .find(|s| s.description.starts_with("All elements distributed"))
            .unwrap();
        let buckets = distributed.buckets.as_ref().unwrap();
        assert_eq!(buckets[0], vec![7, 7, 7]);
        assert!(buckets[1..].iter().all(|b| b.is_empty()));
    }

    #[test]
    fn test_merge_steps_grow_sorted_prefix() {
        let steps = generate(&[2, 1]).unwrap();
        let merges: Vec<&Step> = steps
            .iter()
            .filter(|s| s.description.starts_with("Merging"))
            .collect();
        assert_eq!(merges.len(), 2);
        assert_eq!(merges[0].array, vec![1, 0]);
        assert_eq!(
            merges[0].states,
            vec![CellState::Sorted, CellState::Default]
        );
        assert_eq!(merges[1].array, vec![1, 2]);
    }

    #[test]
    fn test_empty_input_single_placeholder() {
        let steps = generate(&[]).unwrap();
        assert_eq!(steps.len(), 1);
    }

    #[test]
    fn test_single_element() {
        let steps = generate(&[9]).unwrap();
        assert_eq!(steps.last().unwrap().array, vec![9]);
    }
}
