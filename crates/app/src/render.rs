//! Terminal rendering of steps and insights.
//!
//! Mirrors what the visualization shows for each step: the narrated
//! description, the computation being performed, the array with per-cell
//! state markers, and whichever auxiliary structure the current algorithm
//! carries (count and prefix-sum tables, linked-list buckets, digit
//! buckets).
//!
//! # Markers
//!
//! - `(n)` comparing, `[n]` sorted, `*n*` active, bare otherwise
//! - in radix steps the examined digit is bracketed inside the value,
//!   e.g. `1[7]0` when the tens digit is being sorted
//! - `>` points at the bucket or prefix-sum slot being updated

use sortviz_core::insight::Insights;
use sortviz_core::step::{CellState, Step};

/// Render one step as a multi-line block.
pub fn render_step(step: &Step, position: usize, total: usize) -> String {
    let mut lines = Vec::new();
    lines.push(format!("[{}/{}] {}", position + 1, total, step.description));

    if let Some(formula) = &step.formula {
        lines.push(format!("    formula: {}", formula));
    }
    if let Some(computation) = &step.computation {
        lines.push(format!("    compute: {}", computation));
    }

    lines.push(format!("    {}", render_array(step)));

    if let Some(info) = &step.range_info {
        lines.push(format!(
            "    Min: {}  Max: {}  Range: {}",
            info.min, info.max, info.range
        ));
    }

    if let Some(counts) = &step.count_table {
        lines.push(format!(
            "    Count Array (size {}): {}",
            counts.len(),
            render_table(counts, None)
        ));
    }

    if let Some(cumulative) = &step.cumulative_table {
        lines.push(format!(
            "    Cumulative (prefix sums): {}",
            render_table(cumulative, step.highlight_cumulative)
        ));
    }

    if let Some(buckets) = &step.buckets {
        lines.push("    Buckets (linked lists):".to_string());
        for (i, bucket) in buckets.iter().enumerate() {
            let marker = if step.highlight_bucket == Some(i) { ">" } else { " " };
            lines.push(format!(
                "    {} Bucket {}: {}",
                marker,
                i,
                render_linked_list(bucket)
            ));
        }
    }

    if let Some(buckets) = &step.digit_buckets {
        lines.push("    Digit Buckets (0-9):".to_string());
        for (digit, bucket) in buckets.iter().enumerate() {
            let contents = if bucket.is_empty() {
                "empty".to_string()
            } else {
                bucket
                    .iter()
                    .map(|v| highlight_digit(*v, step.digit_position))
                    .collect::<Vec<_>>()
                    .join(" ")
            };
            lines.push(format!("      [{}]: {}", digit, contents));
        }
    }

    lines.join("\n")
}

/// Render the insight panel shown after playback completes.
pub fn render_insights(title: &str, insights: &Insights) -> String {
    let mut lines = Vec::new();
    lines.push(format!("=== {} - Insights & Analysis ===", title));
    lines.push(String::new());
    lines.push("General Insights:".to_string());
    for insight in &insights.general {
        lines.push(format!("  - {}", insight));
    }
    lines.push(String::new());
    lines.push("This Case Analysis:".to_string());
    for insight in &insights.case_specific {
        lines.push(format!("  - {}", insight));
    }
    lines.push(String::new());
    lines.push(format!("Time Complexity:  {}", insights.time_complexity));
    lines.push(format!("Space Complexity: {}", insights.space_complexity));
    lines.push(format!("Performance:      {}", insights.verdict));
    lines.join("\n")
}

fn render_array(step: &Step) -> String {
    if step.array.is_empty() {
        return "Array: (empty)".to_string();
    }
    let label = match step.digit_position {
        Some(pos) => format!("Array (digit at 10^{}):", pos),
        None => "Array:".to_string(),
    };
    let cells: Vec<String> = step
        .array
        .iter()
        .zip(&step.states)
        .map(|(value, state)| cell(&highlight_digit(*value, step.digit_position), *state))
        .collect();
    format!("{} {}", label, cells.join(" "))
}

fn cell(text: &str, state: CellState) -> String {
    match state {
        CellState::Comparing => format!("({})", text),
        CellState::Sorted => format!("[{}]", text),
        CellState::Active => format!("*{}*", text),
        CellState::Default => text.to_string(),
    }
}

fn render_table(values: &[usize], highlight: Option<usize>) -> String {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            if highlight == Some(i) {
                format!(">[{}]={}", i, v)
            } else {
                format!("[{}]={}", i, v)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_linked_list(bucket: &[i64]) -> String {
    if bucket.is_empty() {
        return "null".to_string();
    }
    let mut parts: Vec<String> = bucket.iter().map(|v| v.to_string()).collect();
    parts.push("null".to_string());
    parts.join(" -> ")
}

/// Bracket the digit at `position` (counted from the least significant),
/// e.g. 170 at position 1 renders as `1[7]0`. Values too short to have
/// that digit render unchanged.
fn highlight_digit(value: i64, position: Option<u32>) -> String {
    let text = value.to_string();
    let Some(position) = position else {
        return text;
    };
    let position = position as usize;
    if position >= text.len() {
        return text;
    }
    let split = text.len() - 1 - position;
    if !text.as_bytes()[split].is_ascii_digit() {
        return text;
    }
    let (head, rest) = text.split_at(split);
    let (digit, tail) = rest.split_at(1);
    format!("{}[{}]{}", head, digit, tail)
}
