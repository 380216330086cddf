//! Playback state machine for a materialized step sequence.
//!
//! Playback never touches the steps themselves; it tracks a cursor into a
//! sequence whose length is supplied by the caller, plus a phase and a
//! speed. Advancing is driven externally (a timer, a loop, a test) through
//! [`Playback::tick`], which mirrors an interval firing.
//!
//! # Phases
//!
//! - `Idle`: no step sequence has been materialized yet
//! - `Generating`: step materialization in progress
//! - `Ready`: steps materialized, cursor at the start, not advancing
//! - `Playing`: ticks advance the cursor
//! - `Paused`: cursor holds its position, ticks are ignored
//! - `Completed`: the cursor reached the final step while playing
//!
//! `Playing` at the final step does not advance; the next tick reports
//! [`TickOutcome::Finished`] and the phase becomes `Completed`. Playing
//! again from `Completed` is allowed and finishes immediately on the next
//! tick, without re-triggering completion side effects upstream.
//!
//! # Speed
//!
//! Speed is a multiplier over a one-second base interval and is restricted
//! to half-step values between 0.5 and 3.0. [`Playback::interval`] converts
//! it to the delay between ticks.

use crate::error::{Error, Result};
use std::time::Duration;

/// Lifecycle phase of a playback session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Generating,
    Ready,
    Playing,
    Paused,
    Completed,
}

/// Result of a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The cursor moved one step forward.
    Advanced,
    /// The cursor was already at the final step; playback stopped.
    Finished,
    /// Playback was not in the `Playing` phase; nothing happened.
    Ignored,
}

/// Cursor, phase, and speed for one algorithm view.
///
/// One instance per session; not shared across algorithms.
#[derive(Debug, Clone)]
pub struct Playback {
    phase: Phase,
    cursor: usize,
    speed: f64,
}

impl Playback {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            cursor: 0,
            speed: 1.0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Index of the step currently shown.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn is_playing(&self) -> bool {
        self.phase == Phase::Playing
    }

    /// Delay between ticks at the current speed (one second at 1.0).
    pub fn interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.speed)
    }

    /// Set the playback speed.
    ///
    /// # Errors
    /// Returns [`Error::InvalidSpeed`] unless `speed` is one of
    /// 0.5, 1.0, 1.5, 2.0, 2.5, 3.0. The current speed is kept on error.
    pub fn set_speed(&mut self, speed: f64) -> Result<()> {
        if !is_valid_speed(speed) {
            return Err(Error::InvalidSpeed {
                value: speed.to_string(),
            });
        }
        self.speed = speed;
        Ok(())
    }

    /// Mark step materialization in progress.
    ///
    /// Synchronous callers pass through this phase within a single call;
    /// it exists so the machine states every session goes through are
    /// explicit.
    pub fn begin_generating(&mut self) {
        self.phase = Phase::Generating;
    }

    /// Accept a freshly materialized sequence: cursor to the start,
    /// phase to `Ready`. Speed is kept.
    pub fn rearm(&mut self) {
        self.cursor = 0;
        self.phase = Phase::Ready;
    }

    /// Start or resume advancing. Allowed from `Ready`, `Paused`, and
    /// `Completed`; has no effect before steps are materialized.
    pub fn play(&mut self) {
        match self.phase {
            Phase::Ready | Phase::Paused | Phase::Completed => self.phase = Phase::Playing,
            Phase::Idle | Phase::Generating | Phase::Playing => {}
        }
    }

    /// Stop advancing, keeping the cursor where it is.
    pub fn pause(&mut self) {
        if self.phase == Phase::Playing {
            self.phase = Phase::Paused;
        }
    }

    /// Return the cursor to the start without regenerating steps.
    pub fn reset(&mut self) {
        match self.phase {
            Phase::Idle | Phase::Generating => {}
            _ => {
                self.cursor = 0;
                self.phase = Phase::Ready;
            }
        }
    }

    /// Advance one step within a sequence of `step_count` steps.
    ///
    /// At the final step the phase becomes `Completed` and the cursor
    /// stays put. Ticks outside the `Playing` phase are ignored.
    pub fn tick(&mut self, step_count: usize) -> TickOutcome {
        if self.phase != Phase::Playing {
            return TickOutcome::Ignored;
        }
        if self.cursor + 1 >= step_count {
            self.phase = Phase::Completed;
            return TickOutcome::Finished;
        }
        self.cursor += 1;
        TickOutcome::Advanced
    }
}

impl Default for Playback {
    fn default() -> Self {
        Self::new()
    }
}

/// Half-step speeds between 0.5 and 3.0 inclusive. All such values are
/// exactly representable in f64, so the fract check is reliable.
fn is_valid_speed(speed: f64) -> bool {
    (0.5..=3.0).contains(&speed) && (speed * 2.0).fract() == 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn armed() -> Playback {
        let mut pb = Playback::new();
        pb.rearm();
        pb
    }

    #[test]
    fn test_initial_state() {
        let pb = Playback::new();
        assert_eq!(pb.phase(), Phase::Idle);
        assert_eq!(pb.cursor(), 0);
        assert_eq!(pb.speed(), 1.0);
    }

    #[test]
    fn test_play_ignored_when_idle() {
        let mut pb = Playback::new();
        pb.play();
        assert_eq!(pb.phase(), Phase::Idle);
    }

    #[test]
    fn test_tick_ignored_unless_playing() {
        let mut pb = armed();
        assert_eq!(pb.tick(5), TickOutcome::Ignored);
        assert_eq!(pb.cursor(), 0);
    }

    #[test]
    fn test_ticks_advance_then_finish() {
        let mut pb = armed();
        pb.play();
        assert_eq!(pb.tick(3), TickOutcome::Advanced);
        assert_eq!(pb.tick(3), TickOutcome::Advanced);
        assert_eq!(pb.cursor(), 2);
        assert_eq!(pb.tick(3), TickOutcome::Finished);
        assert_eq!(pb.phase(), Phase::Completed);
        // Cursor holds at the final step.
        assert_eq!(pb.cursor(), 2);
        assert_eq!(pb.tick(3), TickOutcome::Ignored);
    }

    #[test]
    fn test_replay_from_completed_finishes_again() {
        let mut pb = armed();
        pb.play();
        while pb.tick(2) == TickOutcome::Advanced {}
        assert_eq!(pb.phase(), Phase::Completed);

        pb.play();
        assert_eq!(pb.phase(), Phase::Playing);
        assert_eq!(pb.tick(2), TickOutcome::Finished);
        assert_eq!(pb.cursor(), 1);
    }

    #[test]
    fn test_pause_holds_cursor() {
        let mut pb = armed();
        pb.play();
        pb.tick(5);
        pb.pause();
        assert_eq!(pb.phase(), Phase::Paused);
        assert_eq!(pb.tick(5), TickOutcome::Ignored);
        assert_eq!(pb.cursor(), 1);

        pb.play();
        assert_eq!(pb.tick(5), TickOutcome::Advanced);
        assert_eq!(pb.cursor(), 2);
    }

    #[test]
    fn test_reset_returns_to_ready() {
        let mut pb = armed();
        pb.play();
        pb.tick(5);
        pb.tick(5);
        pb.reset();
        assert_eq!(pb.phase(), Phase::Ready);
        assert_eq!(pb.cursor(), 0);
    }

    #[test]
    fn test_single_step_sequence_finishes_immediately() {
        let mut pb = armed();
        pb.play();
        assert_eq!(pb.tick(1), TickOutcome::Finished);
        assert_eq!(pb.cursor(), 0);
    }

    #[test]
    fn test_speed_validation() {
        let mut pb = Playback::new();
        for speed in [0.5, 1.0, 1.5, 2.0, 2.5, 3.0] {
            assert!(pb.set_speed(speed).is_ok(), "speed {} should be valid", speed);
        }
        for speed in [0.0, 0.4, 0.75, 3.5, -1.0] {
            assert!(pb.set_speed(speed).is_err(), "speed {} should be invalid", speed);
        }
        // Last successful value survives a failed set.
        assert_eq!(pb.speed(), 3.0);
    }

    #[test]
    fn test_interval_scales_with_speed() {
        let mut pb = Playback::new();
        assert_eq!(pb.interval(), Duration::from_secs(1));
        pb.set_speed(2.0).unwrap();
        assert_eq!(pb.interval(), Duration::from_millis(500));
        pb.set_speed(0.5).unwrap();
        assert_eq!(pb.interval(), Duration::from_secs(2));
    }

    #[test]
    fn test_rearm_clears_cursor_keeps_speed() {
        let mut pb = armed();
        pb.set_speed(2.5).unwrap();
        pb.play();
        pb.tick(10);
        pb.tick(10);
        pb.rearm();
        assert_eq!(pb.phase(), Phase::Ready);
        assert_eq!(pb.cursor(), 0);
        assert_eq!(pb.speed(), 2.5);
    }
}
