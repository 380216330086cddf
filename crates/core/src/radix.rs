//! Radix sort (LSD) step generator.
//!
//! Sorts non-negative integers by distributing them into ten digit buckets
//! per pass, least significant digit first. Every pass runs the same
//! parameterized digit pass; only the divisor selecting the digit changes.
//! Passes preserve the relative order of ties, which is what makes the
//! digit-by-digit refinement correct.
//!
//! Narrated steps per pass:
//!
//! 1. a pass-start step naming the digit place
//! 2. a step showing the ten freshly initialized digit buckets
//! 3. one step per element examined, with the digit extraction computation
//! 4. a boundary step once all elements are grouped
//! 5. one step per element placed back, in reverse scan order
//! 6. a pass-end step with every position `Sorted`
//!
//! Prefix sums inside a pass are not narrated; placement steps carry the
//! resulting positions instead.
//!
//! # Input Contract
//!
//! Negative values are rejected up front with [`InputError::NegativeValue`]
//! since digit extraction by division is meaningless for them. Empty input
//! yields a single placeholder step.
//!
//! [`InputError::NegativeValue`]: crate::error::InputError::NegativeValue

use crate::error::Result;
use crate::input::require_non_negative;
use crate::step::{snapshot_partial, CellState, Step};

/// Number of decimal digits in `n`, counting zero as one digit.
pub fn digit_count(n: i64) -> u32 {
    let mut n = n.abs();
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}

/// Zero-based index of the digit selected by divisor `exp` (1 -> 0,
/// 10 -> 1, 100 -> 2, ...). `exp` must be a power of ten.
pub fn digit_index(exp: i64) -> u32 {
    let mut exp = exp;
    let mut index = 0;
    while exp >= 10 {
        exp /= 10;
        index += 1;
    }
    index
}

/// Human name for the digit place selected by `exp`.
fn place_name(exp: i64) -> String {
    match exp {
        1 => "ones".to_string(),
        10 => "tens".to_string(),
        100 => "hundreds".to_string(),
        _ => exp.to_string(),
    }
}

/// Generate the full step sequence for radix sort.
pub fn generate(values: &[i64]) -> Result<Vec<Step>> {
    if values.is_empty() {
        return Ok(vec![Step::new(
            Vec::new(),
            Vec::new(),
            "Initial array to be sorted",
        )]);
    }
    require_non_negative(values)?;

    let mut steps = Vec::new();
    steps.push(Step::uniform(
        values.to_vec(),
        CellState::Default,
        "Initial array to be sorted",
    ));

    let max = *values.iter().max().unwrap_or(&0);
    let mut arr = values.to_vec();
    let mut exp: i64 = 1;
    while max / exp > 0 {
        let mut pass_start = Step::uniform(
            arr.clone(),
            CellState::Active,
            format!(
                "Starting sort by {} place (position {})",
                place_name(exp),
                exp
            ),
        );
        pass_start.digit_position = Some(digit_index(exp));
        steps.push(pass_start);

        arr = digit_pass(&arr, exp, &mut steps);
        exp *= 10;
    }

    steps.push(Step::uniform(
        arr,
        CellState::Sorted,
        format!("Array sorted successfully after {} passes!", digit_count(max)),
    ));

    Ok(steps)
}

/// One stable counting pass keyed on the digit selected by `exp`,
/// narrating bucket initialization, examination, and placement. Returns
/// the reordered array.
fn digit_pass(arr: &[i64], exp: i64, steps: &mut Vec<Step>) -> Vec<i64> {
    let digit_of = |v: i64| ((v / exp) % 10) as usize;
    let digit_pos = digit_index(exp);

    let mut buckets: Vec<Vec<i64>> = vec![Vec::new(); 10];
    let mut init = Step::uniform(
        arr.to_vec(),
        CellState::Default,
        format!("Initializing 10 digit buckets for position {}", exp),
    );
    init.digit_buckets = Some(buckets.clone());
    init.digit_position = Some(digit_pos);
    steps.push(init);

    for (idx, &num) in arr.iter().enumerate() {
        let digit = digit_of(num);
        buckets[digit].push(num);

        let mut step = Step::new(
            arr.to_vec(),
            Step::comparing_at(arr.len(), idx),
            format!("Examining {}: extracting digit {} at position {}", num, digit, exp),
        );
        step.digit_buckets = Some(buckets.clone());
        step.digit_position = Some(digit_pos);
        step.computation = Some(format!("digit = floor({} / {}) % 10 = {}", num, exp, digit));
        steps.push(step);
    }

    let mut grouped = Step::uniform(
        arr.to_vec(),
        CellState::Active,
        format!("All elements grouped by digit at position {}", exp),
    );
    grouped.digit_buckets = Some(buckets.clone());
    grouped.digit_position = Some(digit_pos);
    steps.push(grouped);

    // Prefix sums over bucket sizes give the exclusive upper bound of each
    // digit's output span. Not narrated.
    let mut cumulative: Vec<usize> = buckets.iter().map(Vec::len).collect();
    for i in 1..cumulative.len() {
        cumulative[i] += cumulative[i - 1];
    }

    // Reverse scan keeps equal digits in their incoming order.
    let mut output: Vec<Option<i64>> = vec![None; arr.len()];
    for &num in arr.iter().rev() {
        let digit = digit_of(num);
        let position = cumulative[digit] - 1;
        output[position] = Some(num);
        cumulative[digit] -= 1;

        let (array, states) = snapshot_partial(&output);
        let mut step = Step::new(
            array,
            states,
            format!("Placing {} at position {} based on digit {}", num, position, digit),
        );
        step.digit_buckets = Some(buckets.clone());
        step.digit_position = Some(digit_pos);
        step.computation = Some(format!(
            "position = cumulative_count[{}] - 1 = {}",
            digit, position
        ));
        steps.push(step);
    }

    let result: Vec<i64> = output.into_iter().flatten().collect();
    let mut pass_end = Step::uniform(
        result.clone(),
        CellState::Sorted,
        format!(
            "Completed sorting by {} place - array stable for this digit",
            place_name(exp)
        ),
    );
    pass_end.digit_position = Some(digit_pos);
    steps.push(pass_end);

    result
}
