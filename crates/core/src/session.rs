//! One algorithm view's state: input array, materialized steps, playback.
//!
//! A session owns everything a single visualization needs. Input mutations
//! (replace, append, remove, regenerate) re-materialize the full step
//! sequence and return the cursor to the start; playback then walks the
//! new sequence. Insights are computed once per run, when playback first
//! reaches the final step, and are re-armed by reset or any mutation.
//!
//! # Design
//!
//! - **Validate, then commit**: a mutation materializes the new step
//!   sequence before touching any session state, so a failed generation
//!   (for example a negative value fed to counting sort) leaves the
//!   session exactly as it was.
//! - **Lenient text input**: free-text mutations drop unparseable tokens;
//!   if nothing parses the operation is ignored outright.
//! - **Deterministic sampling**: random inputs come from a seeded ChaCha8
//!   RNG, so a seed reproduces the whole session.
//!
//! # Thread Safety
//!
//! Not thread-safe. One session per view; synchronize externally if
//! shared.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

use crate::error::Result;
use crate::generator::{AlgorithmKind, StepGenerator};
use crate::input::{parse_sequence, random_array};
use crate::insight::Insights;
use crate::playback::{Phase, Playback, TickOutcome};
use crate::step::Step;

/// Length of a freshly sampled random input.
pub const DEFAULT_SAMPLE_LEN: usize = 10;

/// Whether a text mutation changed the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The input parsed to at least one value and the session was rebuilt.
    Applied,
    /// Nothing parsed; the session was left untouched.
    Ignored,
}

/// A single algorithm visualization session.
pub struct Session {
    kind: AlgorithmKind,
    generator: Box<dyn StepGenerator>,
    array: Vec<i64>,
    steps: Vec<Step>,
    playback: Playback,
    insights: Option<Insights>,
    rng: ChaCha8Rng,
    sample_len: usize,
}

impl Session {
    /// Create a session and materialize an initial random input.
    ///
    /// # Arguments
    /// - `kind`: which algorithm this session narrates
    /// - `seed`: RNG seed; the same seed reproduces the same inputs
    pub fn new(kind: AlgorithmKind, seed: u64) -> Result<Self> {
        Self::with_sample_len(kind, seed, DEFAULT_SAMPLE_LEN)
    }

    /// Create a session whose random inputs have `sample_len` elements.
    pub fn with_sample_len(kind: AlgorithmKind, seed: u64, sample_len: usize) -> Result<Self> {
        let mut session = Self {
            kind,
            generator: kind.generator(),
            array: Vec::new(),
            steps: Vec::new(),
            playback: Playback::new(),
            insights: None,
            rng: ChaCha8Rng::seed_from_u64(seed),
            sample_len,
        };
        session.generate()?;
        Ok(session)
    }

    /// Replace the input with a freshly sampled random array.
    pub fn generate(&mut self) -> Result<()> {
        let values = random_array(&mut self.rng, self.sample_len, self.generator.sample_range());
        self.regenerate(values)
    }

    /// Replace the input with values parsed from free text.
    ///
    /// # Returns
    /// `Outcome::Ignored` if no token parsed; the session is unchanged.
    ///
    /// # Errors
    /// Propagates generation failures (the session is unchanged).
    pub fn replace(&mut self, input: &str) -> Result<Outcome> {
        let values = parse_sequence(input);
        if values.is_empty() {
            return Ok(Outcome::Ignored);
        }
        self.regenerate(values)?;
        Ok(Outcome::Applied)
    }

    /// Append values parsed from free text to the current input.
    pub fn append(&mut self, input: &str) -> Result<Outcome> {
        let values = parse_sequence(input);
        if values.is_empty() {
            return Ok(Outcome::Ignored);
        }
        let mut extended = self.array.clone();
        extended.extend(values);
        self.regenerate(extended)?;
        Ok(Outcome::Applied)
    }

    /// Remove values parsed from free text from the current input.
    ///
    /// Each parsed value removes its first occurrence; values not present
    /// are skipped. Removing every element falls back to a fresh random
    /// input rather than leaving the session empty.
    pub fn remove(&mut self, input: &str) -> Result<Outcome> {
        let values = parse_sequence(input);
        if values.is_empty() {
            return Ok(Outcome::Ignored);
        }
        let mut remaining = self.array.clone();
        for value in values {
            if let Some(pos) = remaining.iter().position(|&v| v == value) {
                remaining.remove(pos);
            }
        }
        if remaining.is_empty() {
            self.generate()?;
            return Ok(Outcome::Applied);
        }
        self.regenerate(remaining)?;
        Ok(Outcome::Applied)
    }

    /// Start or resume playback.
    pub fn play(&mut self) {
        self.playback.play();
    }

    /// Pause playback, keeping the cursor in place.
    pub fn pause(&mut self) {
        self.playback.pause();
    }

    /// Return the cursor to the first step and re-arm insights.
    pub fn reset(&mut self) {
        self.playback.reset();
        self.insights = None;
    }

    /// Set the playback speed (0.5 to 3.0 in half steps).
    pub fn set_speed(&mut self, speed: f64) -> Result<()> {
        self.playback.set_speed(speed)
    }

    /// Advance playback by one step.
    ///
    /// On the tick that reaches the final step, insights are computed if
    /// this run has not produced them yet. Replaying a completed run does
    /// not recompute them; reset or a mutation re-arms them.
    pub fn advance(&mut self) -> TickOutcome {
        let outcome = self.playback.tick(self.steps.len());
        if outcome == TickOutcome::Finished && self.insights.is_none() {
            self.insights = Some(self.generator.insights(&self.array));
        }
        outcome
    }

    pub fn kind(&self) -> AlgorithmKind {
        self.kind
    }

    /// Display name of the algorithm, e.g. "Counting Sort".
    pub fn algorithm_name(&self) -> &'static str {
        self.generator.name()
    }

    /// One-paragraph summary of the algorithm.
    pub fn algorithm_description(&self) -> &'static str {
        self.generator.description()
    }

    pub fn array(&self) -> &[i64] {
        &self.array
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// The step under the playback cursor.
    pub fn current_step(&self) -> Option<&Step> {
        self.steps.get(self.playback.cursor())
    }

    pub fn cursor(&self) -> usize {
        self.playback.cursor()
    }

    pub fn phase(&self) -> Phase {
        self.playback.phase()
    }

    pub fn is_playing(&self) -> bool {
        self.playback.is_playing()
    }

    pub fn speed(&self) -> f64 {
        self.playback.speed()
    }

    /// Delay between ticks at the current speed.
    pub fn interval(&self) -> Duration {
        self.playback.interval()
    }

    /// Insights for the finished run, if playback has completed one.
    pub fn insights(&self) -> Option<&Insights> {
        self.insights.as_ref()
    }

    /// Swap in `values` as the session input.
    ///
    /// Steps are materialized before any state is replaced, so a failed
    /// generation leaves the session untouched.
    fn regenerate(&mut self, values: Vec<i64>) -> Result<()> {
        let steps = self.generator.generate(&values)?;
        self.playback.begin_generating();
        self.array = values;
        self.steps = steps;
        self.insights = None;
        self.playback.rearm();
        Ok(())
    }
}
