//! The step model: immutable snapshots of an algorithm run.
//!
//! A generator materializes the entire run as an ordered `Vec<Step>` before
//! playback begins. Each step carries the array values at that instant, a
//! parallel display tag per index, a narration line, and whatever auxiliary
//! structure the algorithm was touching (count tables, buckets, digit
//! buckets). Steps are never mutated after generation.
//!
//! # Display Tags
//!
//! `CellState` is presentation-only and not part of the algorithm's true
//! state: `Comparing` marks the element being examined, `Sorted` marks
//! settled output positions, `Active` marks a whole-array phase boundary.
//!
//! # Auxiliary Data
//!
//! Every auxiliary field is optional; a generator fills only the fields its
//! algorithm uses. Count and cumulative tables are indexed by value over
//! `[0, max]`; bucket collections are ordered outer-by-index,
//! inner-by-insertion.

/// Per-element display tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    /// Not currently involved in the narrated operation
    Default,
    /// The element being examined or moved
    Comparing,
    /// Settled into its final (or per-pass) position
    Sorted,
    /// Part of a whole-array phase highlight
    Active,
}

impl Default for CellState {
    fn default() -> Self {
        CellState::Default
    }
}

/// Value-range banner shown alongside counting-sort steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeInfo {
    /// Smallest key the count table covers
    pub min: i64,
    /// Largest key the count table covers
    pub max: i64,
    /// Displayed span (equals `max`; the table itself has `max + 1` slots)
    pub range: i64,
}

/// One immutable snapshot in a precomputed playback sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    /// Array values at this instant (unplaced output slots render as 0)
    pub array: Vec<i64>,

    /// Display tag per index, parallel to `array`
    pub states: Vec<CellState>,

    /// Human-readable narration for this step
    pub description: String,

    /// Occurrence counts indexed by value (counting sort)
    pub count_table: Option<Vec<usize>>,

    /// Prefix sums indexed by value (counting sort)
    pub cumulative_table: Option<Vec<usize>>,

    /// Value-range banner (counting sort)
    pub range_info: Option<RangeInfo>,

    /// Range-bucket contents in index order (bucket sort)
    pub buckets: Option<Vec<Vec<i64>>>,

    /// Digit-bucket contents for digits 0-9 (radix sort)
    pub digit_buckets: Option<Vec<Vec<i64>>>,

    /// Bucket receiving the current element
    pub highlight_bucket: Option<usize>,

    /// Prefix-sum slot being updated
    pub highlight_cumulative: Option<usize>,

    /// 0-based decimal digit index of the current radix pass
    pub digit_position: Option<u32>,

    /// General formula narration (e.g. the bucket-index rule)
    pub formula: Option<String>,

    /// Concrete arithmetic narration for this step
    pub computation: Option<String>,
}

impl Step {
    /// Create a step with no auxiliary data.
    ///
    /// Generators fill in the auxiliary fields they need before pushing.
    pub fn new(array: Vec<i64>, states: Vec<CellState>, description: impl Into<String>) -> Self {
        Self {
            array,
            states,
            description: description.into(),
            count_table: None,
            cumulative_table: None,
            range_info: None,
            buckets: None,
            digit_buckets: None,
            highlight_bucket: None,
            highlight_cumulative: None,
            digit_position: None,
            formula: None,
            computation: None,
        }
    }

    /// Create a step where every element carries the same tag.
    pub fn uniform(array: Vec<i64>, state: CellState, description: impl Into<String>) -> Self {
        let states = vec![state; array.len()];
        Self::new(array, states, description)
    }

    /// States for an array where only `index` is tagged `Comparing`.
    pub fn comparing_at(len: usize, index: usize) -> Vec<CellState> {
        (0..len)
            .map(|i| {
                if i == index {
                    CellState::Comparing
                } else {
                    CellState::Default
                }
            })
            .collect()
    }

    /// Check the invariant that states parallel the array.
    pub fn is_well_formed(&self) -> bool {
        self.array.len() == self.states.len()
    }
}

/// Snapshot a partially-built output array the way the visualizer shows it:
/// placed slots keep their value and are tagged `Sorted`, unplaced slots
/// render as 0 and stay `Default`.
pub fn snapshot_partial(output: &[Option<i64>]) -> (Vec<i64>, Vec<CellState>) {
    let array = output.iter().map(|slot| slot.unwrap_or(0)).collect();
    let states = output
        .iter()
        .map(|slot| {
            if slot.is_some() {
                CellState::Sorted
            } else {
                CellState::Default
            }
        })
        .collect();
    (array, states)
}
