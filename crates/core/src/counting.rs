//! Counting sort step generator.
//!
//! Counts occurrences of each value over `[0, max]`, turns the counts into
//! prefix sums, then places elements stably into the output by walking the
//! input in reverse. The run is narrated one operation per step:
//!
//! 1. one step per count increment (element tagged `Comparing`)
//! 2. one step per prefix-sum update (updated slot highlighted)
//! 3. one step per placement (settled slots tagged `Sorted`)
//! 4. a final step with every position `Sorted`
//!
//! # Stability
//!
//! The reverse placement walk preserves the relative input order of equal
//! values; [`stable_positions`] exposes the resulting index mapping so the
//! property stays testable even though equal values are indistinguishable
//! in snapshots.
//!
//! # Input Contract
//!
//! Values must be non-negative (the count table is indexed by value).
//! Empty input yields a single placeholder step.

use crate::error::Result;
use crate::input::require_non_negative;
use crate::step::{snapshot_partial, CellState, RangeInfo, Step};

/// Generate the full step sequence for counting sort.
///
/// # Errors
/// `InputError::NegativeValue` if any value is negative.
pub fn generate(values: &[i64]) -> Result<Vec<Step>> {
    if values.is_empty() {
        return Ok(vec![Step::new(
            Vec::new(),
            Vec::new(),
            "Initial array to be sorted",
        )]);
    }
    require_non_negative(values)?;

    let max = *values.iter().max().unwrap_or(&0);
    let range = RangeInfo {
        min: 0,
        max,
        range: max,
    };
    let table_len = max as usize + 1;
    let mut steps = Vec::new();

    let mut initial = Step::uniform(
        values.to_vec(),
        CellState::Default,
        "Initial array to be sorted. Count array size = max value",
    );
    initial.range_info = Some(range);
    steps.push(initial);

    // Phase 1: count occurrences, one step per element.
    let mut count = vec![0usize; table_len];
    for (idx, &num) in values.iter().enumerate() {
        count[num as usize] += 1;
        let mut step = Step::new(
            values.to_vec(),
            Step::comparing_at(values.len(), idx),
            format!("Counting {}: count[{}] = {}", num, num, count[num as usize]),
        );
        step.count_table = Some(count.clone());
        step.range_info = Some(range);
        step.computation = Some(format!("count[{}]++", num));
        steps.push(step);
    }

    // Phase 2: prefix sums, one step per updated slot.
    let mut cumulative = count.clone();
    for i in 1..table_len {
        let before = cumulative[i];
        cumulative[i] += cumulative[i - 1];
        let mut step = Step::uniform(
            values.to_vec(),
            CellState::Default,
            format!(
                "Building prefix sum: cumulative[{}] = {} + {} = {}",
                i,
                before,
                cumulative[i - 1],
                cumulative[i]
            ),
        );
        step.count_table = Some(count.clone());
        step.cumulative_table = Some(cumulative.clone());
        step.range_info = Some(range);
        step.computation = Some(format!("cumulative[{}] = cumulative[{}] + count[{}]", i, i - 1, i));
        step.highlight_cumulative = Some(i);
        steps.push(step);
    }

    // Phase 3: stable placement, reverse input order.
    let mut output: Vec<Option<i64>> = vec![None; values.len()];
    for &num in values.iter().rev() {
        let slot = num as usize;
        let position = cumulative[slot] - 1;
        output[position] = Some(num);
        cumulative[slot] -= 1;

        let (array, states) = snapshot_partial(&output);
        let mut step = Step::new(
            array,
            states,
            format!("Placing {} at position {}", num, position),
        );
        step.cumulative_table = Some(cumulative.clone());
        step.range_info = Some(range);
        step.computation = Some(format!(
            "position = cumulative[{}] - 1 = {} - 1 = {}",
            num,
            position + 1,
            position
        ));
        steps.push(step);
    }

    let sorted: Vec<i64> = output.into_iter().map(|slot| slot.unwrap_or(0)).collect();
    let mut done = Step::uniform(sorted, CellState::Sorted, "Array sorted successfully!");
    done.range_info = Some(range);
    steps.push(done);

    Ok(steps)
}

/// Output position for each input index under stable counting sort.
///
/// Equal values keep their relative input order: if `values[i] ==
/// values[j]` and `i < j`, then `positions[i] < positions[j]`.
///
/// # Errors
/// `InputError::NegativeValue` if any value is negative.
pub fn stable_positions(values: &[i64]) -> Result<Vec<usize>> {
    require_non_negative(values)?;
    if values.is_empty() {
        return Ok(Vec::new());
    }

    let max = *values.iter().max().unwrap_or(&0);
    let mut cumulative = vec![0usize; max as usize + 1];
    for &num in values {
        cumulative[num as usize] += 1;
    }
    for i in 1..cumulative.len() {
        cumulative[i] += cumulative[i - 1];
    }

    let mut positions = vec![0usize; values.len()];
    for (idx, &num) in values.iter().enumerate().rev() {
        let slot = num as usize;
        cumulative[slot] -= 1;
        positions[idx] = cumulative[slot];
    }
    Ok(positions)
}
