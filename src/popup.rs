//! Popup lifecycle state machine: delayed reveal, progress animation, dismissal.
//!
//! The controller owns the whole splash timeline and nothing else touches it.
//! It does no drawing and no sleeping: the frame loop feeds it the current
//! `Instant` via [`PopupController::update`] and renders from its accessors,
//! which keeps every transition testable with synthetic timestamps.
//!
//! # Lifecycle
//!
//! ```text
//!                reveal_delay              100 ticks          final tick
//!  Waiting ────────────────────▶ Animating ─────────▶ (bar full) ──────▶ Complete
//!  (hidden)                      (overlay + panel     progress=100       (close button
//!                                 visible, bar 0-100)                     shown, timer
//!                                                                         released)
//!
//!  Animating ──dismiss()──▶ Dismissed          Complete ──dismiss()──▶ Dismissed
//! ```
//!
//! There is no way back to `Waiting` short of restarting the process.
//!
//! # Timer Ownership
//!
//! Both timers are explicitly owned `Option<Instant>` deadlines:
//!
//! - `reveal_at`: one-shot. Consumed (set to `None`) the first time `update`
//!   observes `now >= reveal_at`.
//! - `next_tick`: repeating. Armed at reveal, re-armed after every increment,
//!   released (set to `None`) by the tick that finds the counter already at
//!   [`PROGRESS_MAX`]. That release happens exactly once per run.
//!
//! Deadlines anchor to the schedule (`previous deadline + interval`), not to
//! when the loop happened to observe them, so frame jitter never accumulates:
//! the bar is full exactly `reveal_delay + 100 * tick_interval` after start.
//! If the loop stalls past several deadlines, `update` processes each overdue
//! tick in order; each one still increments by exactly 1.
//!
//! # Dismissal Semantics
//!
//! [`PopupController::dismiss`] only clears the two visibility flags. It is
//! idempotent, callable in any phase, and deliberately does NOT release the
//! tick deadline: a splash dismissed mid-animation keeps ticking invisibly
//! until the counter completes and the timer self-cancels. A dismissal while
//! still `Waiting` is a visible no-op and does not cancel the pending reveal.

use std::time::{Duration, Instant};

use crate::config::{PROGRESS_MAX, PROGRESS_TICK, REVEAL_DELAY};

// =============================================================================
// Timing Parameters
// =============================================================================

/// Timeline parameters for the splash. Defaults come from [`crate::config`];
/// the CLI can override both for faster manual testing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PopupTimings {
    /// How long the splash stays hidden after start.
    pub reveal_delay: Duration,
    /// Interval between progress increments.
    pub tick_interval: Duration,
}

impl PopupTimings {
    /// Create timings with explicit values.
    pub const fn new(
        reveal_delay: Duration,
        tick_interval: Duration,
    ) -> Self {
        Self {
            reveal_delay,
            tick_interval,
        }
    }
}

impl Default for PopupTimings {
    fn default() -> Self { Self::new(REVEAL_DELAY, PROGRESS_TICK) }
}

// =============================================================================
// Derived Phase
// =============================================================================

/// Coarse lifecycle phase, derived from the controller fields.
///
/// Used for logging and assertions; rendering reads the individual accessors
/// instead. `Dismissed` reports the presentation state: a splash dismissed
/// mid-animation is `Dismissed` even while its tick timer is still running
/// down in the background.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    /// Before the reveal deadline: nothing is visible yet.
    Waiting,
    /// Overlay and panel visible, progress bar advancing.
    Animating,
    /// Counter reached 100, timer released, close button shown.
    Complete,
    /// Close action hid the overlay and panel.
    Dismissed,
}

// =============================================================================
// Update Events
// =============================================================================

/// What a single [`PopupController::update`] call observed.
///
/// Returned so the frame loop can log transitions without polling for edges
/// itself. All fields are false/zero when the call was a no-op.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct UpdateEvents {
    /// The reveal deadline fired during this call.
    pub revealed: bool,
    /// Number of progress increments processed during this call
    /// (more than 1 only when catching up after a stall).
    pub ticks: u32,
    /// The counter was found full and the close button was revealed
    /// during this call.
    pub completed: bool,
}

// =============================================================================
// Popup Controller
// =============================================================================

/// Owns the splash timeline: reveal deadline, tick deadline, progress
/// counter, and visibility flags.
///
/// Constructed once at startup with the start `Instant` (the explicit
/// initialization entry point; there is no ambient global state). Advanced by
/// [`update`](Self::update) from the frame loop.
pub struct PopupController {
    /// Timeline parameters (fixed after construction).
    timings: PopupTimings,

    /// One-shot reveal deadline. `None` once it has fired.
    reveal_at: Option<Instant>,

    /// Repeating progress deadline. `None` before reveal and after the
    /// self-cancel at completion.
    next_tick: Option<Instant>,

    /// Progress counter, 0..=100. Increments by exactly 1 per tick.
    progress: u8,

    /// Whether the popup panel is shown.
    popup_visible: bool,

    /// Whether the dimming overlay is shown. Tracked separately from the
    /// panel because they are distinct page elements, even though this
    /// program always toggles them together.
    overlay_visible: bool,

    /// Whether the close button has been revealed (stays true even after
    /// dismissal, like an inline display style that nothing resets).
    close_revealed: bool,
}

impl PopupController {
    /// Create a controller scheduled from `start`: the reveal deadline is
    /// armed immediately, everything else starts hidden and idle.
    pub fn with_timings(
        start: Instant,
        timings: PopupTimings,
    ) -> Self {
        Self {
            timings,
            reveal_at: Some(start + timings.reveal_delay),
            next_tick: None,
            progress: 0,
            popup_visible: false,
            overlay_visible: false,
            close_revealed: false,
        }
    }

    /// Advance the timeline to `now`, firing any deadlines that have passed.
    ///
    /// Processes the one-shot reveal first, then every overdue progress tick
    /// in schedule order. Safe to call as often as the frame loop likes;
    /// calls between deadlines return an empty [`UpdateEvents`].
    pub fn update(
        &mut self,
        now: Instant,
    ) -> UpdateEvents {
        let mut events = UpdateEvents::default();

        // One-shot reveal: consume the deadline, show both elements, and arm
        // the repeating tick anchored to the scheduled reveal time.
        if let Some(reveal_at) = self.reveal_at
            && now >= reveal_at
        {
            self.reveal_at = None;
            self.popup_visible = true;
            self.overlay_visible = true;
            self.next_tick = Some(reveal_at + self.timings.tick_interval);
            events.revealed = true;
        }

        // Repeating tick: a tick that finds the counter already full reveals
        // the close button and releases the timer (the counter fills on the
        // 100th tick; the close button appears on the 101st).
        while let Some(due) = self.next_tick {
            if now < due {
                break;
            }
            if self.progress >= PROGRESS_MAX {
                self.close_revealed = true;
                self.next_tick = None;
                events.completed = true;
            } else {
                self.progress += 1;
                self.next_tick = Some(due + self.timings.tick_interval);
                events.ticks += 1;
            }
        }

        events
    }

    /// Hide the popup and overlay (the close action).
    ///
    /// Unconditional and idempotent: callable in any phase, a no-op when
    /// nothing is visible. Does not touch either timer - a pending reveal
    /// still fires, and a running tick sequence keeps counting invisibly.
    ///
    /// Returns true if anything was actually hidden.
    pub const fn dismiss(&mut self) -> bool {
        let was_visible = self.popup_visible || self.overlay_visible;
        self.popup_visible = false;
        self.overlay_visible = false;
        was_visible
    }

    /// Current progress counter value (0..=100).
    #[inline]
    pub const fn progress(&self) -> u8 { self.progress }

    /// Whether the popup panel is shown.
    #[inline]
    pub const fn popup_visible(&self) -> bool { self.popup_visible }

    /// Whether the dimming overlay is shown.
    #[inline]
    pub const fn overlay_visible(&self) -> bool { self.overlay_visible }

    /// Whether the close button has been revealed by completion.
    #[inline]
    pub const fn close_revealed(&self) -> bool { self.close_revealed }

    /// Whether the close button can currently be clicked: it must have been
    /// revealed AND the panel must be visible (a hidden control receives no
    /// clicks).
    #[inline]
    pub const fn close_active(&self) -> bool { self.popup_visible && self.close_revealed }

    /// Derive the coarse lifecycle phase from the controller fields.
    pub const fn phase(&self) -> Phase {
        if self.reveal_at.is_some() {
            Phase::Waiting
        } else if !self.popup_visible {
            Phase::Dismissed
        } else if self.next_tick.is_some() {
            Phase::Animating
        } else {
            Phase::Complete
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Timestamp `k` ticks after the reveal deadline.
    fn after_ticks(
        start: Instant,
        k: u32,
    ) -> Instant {
        start + REVEAL_DELAY + PROGRESS_TICK * k
    }

    /// Controller with default timings, scheduled from `start`.
    fn make_controller(start: Instant) -> PopupController {
        PopupController::with_timings(start, PopupTimings::default())
    }

    // -------------------------------------------------------------------------
    // Construction Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_new_starts_waiting() {
        let start = Instant::now();
        let controller = make_controller(start);

        assert_eq!(controller.phase(), Phase::Waiting, "Fresh controller should be Waiting");
        assert!(!controller.popup_visible(), "Popup should start hidden");
        assert!(!controller.overlay_visible(), "Overlay should start hidden");
        assert!(!controller.close_revealed(), "Close button should start hidden");
        assert!(!controller.close_active(), "Close button should not be clickable yet");
        assert_eq!(controller.progress(), 0, "Progress should start at 0");
    }

    #[test]
    fn test_default_timings_match_config() {
        let timings = PopupTimings::default();
        assert_eq!(timings.reveal_delay, REVEAL_DELAY);
        assert_eq!(timings.tick_interval, PROGRESS_TICK);
    }

    // -------------------------------------------------------------------------
    // Reveal Timing Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_hidden_before_delay() {
        let start = Instant::now();
        let mut controller = make_controller(start);

        // 1ms short of the deadline: still nothing
        let events = controller.update(start + REVEAL_DELAY - Duration::from_millis(1));

        assert_eq!(events, UpdateEvents::default(), "No events before the deadline");
        assert_eq!(controller.phase(), Phase::Waiting, "Still Waiting at 4999ms");
        assert!(!controller.overlay_visible(), "Overlay must stay hidden before the delay");
    }

    #[test]
    fn test_reveal_at_exact_delay() {
        let start = Instant::now();
        let mut controller = make_controller(start);

        let events = controller.update(start + REVEAL_DELAY);

        assert!(events.revealed, "Reveal should fire exactly at the deadline");
        assert_eq!(events.ticks, 0, "No tick coincides with the reveal instant");
        assert!(controller.popup_visible(), "Popup visible after reveal");
        assert!(controller.overlay_visible(), "Overlay visible after reveal");
        assert_eq!(controller.progress(), 0, "Progress still 0 at reveal");
        assert_eq!(controller.phase(), Phase::Animating, "Phase should be Animating after reveal");
    }

    #[test]
    fn test_reveal_fires_once() {
        let start = Instant::now();
        let mut controller = make_controller(start);

        let first = controller.update(start + REVEAL_DELAY);
        let second = controller.update(start + REVEAL_DELAY + Duration::from_millis(1));

        assert!(first.revealed, "First update at the deadline reveals");
        assert!(!second.revealed, "Reveal is one-shot");
    }

    // -------------------------------------------------------------------------
    // Progress Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_progress_one_per_tick() {
        let start = Instant::now();
        let mut controller = make_controller(start);
        controller.update(start + REVEAL_DELAY);

        // Mid-interval: no increment yet
        let events = controller.update(after_ticks(start, 1) - Duration::from_millis(1));
        assert_eq!(events.ticks, 0, "No tick before its deadline");
        assert_eq!(controller.progress(), 0);

        // First tick deadline
        let events = controller.update(after_ticks(start, 1));
        assert_eq!(events.ticks, 1, "Exactly one tick at the first deadline");
        assert_eq!(controller.progress(), 1, "Progress should be 1 after one tick");

        // Second tick deadline
        let events = controller.update(after_ticks(start, 2));
        assert_eq!(events.ticks, 1, "Exactly one tick at the second deadline");
        assert_eq!(controller.progress(), 2, "Progress should be 2 after two ticks");
    }

    #[test]
    fn test_progress_monotonic_never_exceeds_max() {
        let start = Instant::now();
        let mut controller = make_controller(start);
        controller.update(start + REVEAL_DELAY);

        let mut prev = 0u8;
        // Walk well past the end of the animation in single-tick steps
        for k in 1..=150u32 {
            controller.update(after_ticks(start, k));
            let p = controller.progress();
            assert!(p >= prev, "Progress must be non-decreasing ({prev} -> {p})");
            assert!(p <= PROGRESS_MAX, "Progress must never exceed {PROGRESS_MAX}");
            assert!(u32::from(p - prev) <= 1, "Progress advances at most 1 per tick");
            prev = p;
        }
        assert_eq!(prev, PROGRESS_MAX, "Progress should settle at the maximum");
    }

    #[test]
    fn test_catch_up_processes_missed_ticks() {
        let start = Instant::now();
        let mut controller = make_controller(start);
        controller.update(start + REVEAL_DELAY);

        // Stall: the loop skips straight to tick 37
        let events = controller.update(after_ticks(start, 37));

        assert_eq!(events.ticks, 37, "All overdue ticks should be processed in order");
        assert_eq!(controller.progress(), 37, "Progress should match elapsed ticks");
    }

    #[test]
    fn test_catch_up_past_completion() {
        let start = Instant::now();
        let mut controller = make_controller(start);

        // One giant leap over the entire timeline
        let events = controller.update(after_ticks(start, 500));

        assert!(events.revealed, "Reveal fires during catch-up");
        assert_eq!(events.ticks, 100, "Exactly 100 increments even over a huge gap");
        assert!(events.completed, "Completion fires during the same catch-up");
        assert_eq!(controller.progress(), PROGRESS_MAX);
        assert!(controller.close_revealed(), "Close button revealed after catch-up");
        assert_eq!(controller.phase(), Phase::Complete);
    }

    // -------------------------------------------------------------------------
    // Completion and Termination Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_completion_one_tick_after_full() {
        let start = Instant::now();
        let mut controller = make_controller(start);

        // Tick 100 fills the bar but does not reveal the close button yet
        let events = controller.update(after_ticks(start, 100));
        assert_eq!(controller.progress(), PROGRESS_MAX, "Bar full on the 100th tick");
        assert!(!events.completed, "Completion does not fire on the filling tick");
        assert!(!controller.close_revealed(), "Close button still hidden at 100%");
        assert_eq!(controller.phase(), Phase::Animating, "Timer still armed at 100%");

        // The 101st firing finds the counter full, reveals the button, stops
        let events = controller.update(after_ticks(start, 101));
        assert!(events.completed, "Completion fires one tick after the bar fills");
        assert_eq!(events.ticks, 0, "The completing firing is not an increment");
        assert!(controller.close_revealed(), "Close button revealed at completion");
        assert!(controller.close_active(), "Close button clickable at completion");
        assert_eq!(controller.phase(), Phase::Complete);
    }

    #[test]
    fn test_termination_cancels_exactly_once() {
        let start = Instant::now();
        let mut controller = make_controller(start);
        controller.update(after_ticks(start, 101));
        assert_eq!(controller.phase(), Phase::Complete);

        // Long after completion: nothing moves, completion does not re-fire
        let events = controller.update(after_ticks(start, 10_000));
        assert_eq!(events, UpdateEvents::default(), "No events after the timer is released");
        assert_eq!(controller.progress(), PROGRESS_MAX, "Progress frozen at max");
        assert_eq!(controller.phase(), Phase::Complete, "Phase stays Complete");
    }

    #[test]
    fn test_close_reveal_iff_counter_full() {
        let start = Instant::now();
        let mut controller = make_controller(start);

        // At every point before the bar is full, the close button is hidden
        for k in 0..=100u32 {
            controller.update(after_ticks(start, k));
            assert!(
                !controller.close_revealed(),
                "Close button must stay hidden through tick {k}"
            );
        }
        controller.update(after_ticks(start, 101));
        assert!(controller.close_revealed(), "Close button shown only once the counter is full");
    }

    // -------------------------------------------------------------------------
    // Dismissal Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_dismiss_hides_both() {
        let start = Instant::now();
        let mut controller = make_controller(start);
        controller.update(after_ticks(start, 10));

        assert!(controller.dismiss(), "Dismiss should report it hid something");
        assert!(!controller.popup_visible(), "Popup hidden after dismiss");
        assert!(!controller.overlay_visible(), "Overlay hidden after dismiss");
        assert_eq!(controller.phase(), Phase::Dismissed);
    }

    #[test]
    fn test_dismiss_idempotent() {
        let start = Instant::now();
        let mut controller = make_controller(start);
        controller.update(after_ticks(start, 101));

        assert!(controller.dismiss(), "First dismiss hides the elements");
        assert!(!controller.dismiss(), "Second dismiss is a no-op");
        assert!(!controller.popup_visible(), "Still hidden after double dismiss");
        assert!(!controller.overlay_visible(), "Still hidden after double dismiss");
        assert_eq!(controller.phase(), Phase::Dismissed, "Phase unchanged by double dismiss");
    }

    #[test]
    fn test_dismiss_during_waiting_keeps_reveal() {
        let start = Instant::now();
        let mut controller = make_controller(start);

        // Programmatic dismissal before anything is visible: a no-op that
        // does not cancel the pending reveal
        assert!(!controller.dismiss(), "Nothing to hide while Waiting");
        assert_eq!(controller.phase(), Phase::Waiting, "Still Waiting after early dismiss");

        let events = controller.update(start + REVEAL_DELAY);
        assert!(events.revealed, "Reveal still fires after an early dismiss");
        assert!(controller.popup_visible(), "Popup becomes visible regardless");
    }

    #[test]
    fn test_dismiss_does_not_stop_ticks() {
        let start = Instant::now();
        let mut controller = make_controller(start);
        controller.update(after_ticks(start, 30));
        controller.dismiss();

        // Ticks keep arriving while hidden
        let events = controller.update(after_ticks(start, 31));
        assert_eq!(events.ticks, 1, "Ticks continue after dismissal");
        assert_eq!(controller.progress(), 31, "Progress advances while hidden");
        assert_eq!(controller.phase(), Phase::Dismissed, "Presentation state stays Dismissed");

        // ... all the way to self-cancellation
        let events = controller.update(after_ticks(start, 101));
        assert!(events.completed, "Completion still fires after dismissal");
        assert!(controller.close_revealed(), "Close flag set even though hidden");
        assert!(!controller.close_active(), "Hidden close button is not clickable");
        assert_eq!(controller.phase(), Phase::Dismissed, "Dismissed wins over Complete");
    }

    #[test]
    fn test_close_active_requires_visibility() {
        let start = Instant::now();
        let mut controller = make_controller(start);
        controller.update(after_ticks(start, 101));

        assert!(controller.close_active(), "Revealed + visible = clickable");

        controller.dismiss();
        assert!(controller.close_revealed(), "Reveal flag survives dismissal");
        assert!(!controller.close_active(), "Hidden panel makes the button unclickable");
    }

    // -------------------------------------------------------------------------
    // Custom Timings Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_custom_timings() {
        let start = Instant::now();
        let timings = PopupTimings::new(Duration::from_millis(100), Duration::from_millis(10));
        let mut controller = PopupController::with_timings(start, timings);

        let events = controller.update(start + Duration::from_millis(99));
        assert!(!events.revealed, "Custom delay respected");

        let events = controller.update(start + Duration::from_millis(100));
        assert!(events.revealed, "Reveal at the custom deadline");

        // 100 ticks at 10ms each, plus the completing firing
        let events = controller.update(start + Duration::from_millis(100 + 10 * 101));
        assert_eq!(controller.progress(), PROGRESS_MAX);
        assert!(events.completed, "Completion follows the custom cadence");
    }
}
