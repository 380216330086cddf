//! sortviz-core: Educational sorting visualizer with narrated step playback
//!
//! This library provides the core components for a learning-focused system that:
//! - Materializes counting, bucket, and radix sort runs as step sequences
//! - Narrates every operation with descriptions, formulas, and computations
//! - Plays sequences back through an explicit cursor/phase state machine
//! - Summarizes each finished run with complexity and distribution insights
//!
//! # Architecture
//!
//! The system is designed around clear module boundaries:
//! - `step`: Step snapshots, cell states, and auxiliary tables
//! - `counting`: Counting sort step generator
//! - `bucket`: Bucket sort step generator
//! - `radix`: Radix sort (LSD) step generator
//! - `generator`: Algorithm selection and the generator trait
//! - `input`: Lenient text parsing and seeded random sampling
//! - `playback`: Cursor, phase, and speed state machine
//! - `session`: Per-view controller tying input, steps, and playback together
//! - `insight`: Post-run analysis
//!
//! # Design Principles
//!
//! - **No panics**: All errors are structured and recoverable
//! - **Materialized playback**: Full step sequences are generated up front;
//!   playback never re-runs an algorithm
//! - **Deterministic**: Seeded randomness makes runs reproducible
//! - **Pure generators**: Step generation is a function of the input values

pub mod bucket;
pub mod counting;
pub mod error;
pub mod generator;
pub mod input;
pub mod insight;
pub mod playback;
pub mod radix;
pub mod session;
pub mod step;

// Re-export commonly used types
pub use error::{Error, Result};
