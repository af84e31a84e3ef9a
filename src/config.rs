//! Application configuration constants.
//!
//! # Pre-computed Layout Constants
//!
//! Layout values like the screen center are computed at compile time as
//! `const`, avoiding per-frame arithmetic and scattered casts. Widget-local
//! geometry (panel, track, button rectangles) lives next to the widgets that
//! draw it; this module holds the screen, timing, and shared layout values.
//!
//! # Timing Defaults
//!
//! The splash timeline is: [`REVEAL_DELAY`] of nothing, then one progress
//! point per [`PROGRESS_TICK`] until [`PROGRESS_MAX`], then one final tick
//! that reveals the close button. Both durations can be overridden on the
//! command line; these constants are the defaults and the documented
//! behavior.

use std::time::Duration;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (ST7789-class 320x240 panel, simulator-rendered).
pub const SCREEN_WIDTH: u32 = 320;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 240;

// =============================================================================
// Timing Configuration
// =============================================================================

/// Target frame time (~50 FPS). The main loop sleeps if a frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(20);

/// How long the splash stays hidden after startup before it is revealed.
pub const REVEAL_DELAY: Duration = Duration::from_millis(5000);

/// Cadence of the progress animation: one increment per tick.
pub const PROGRESS_TICK: Duration = Duration::from_millis(50);

/// Progress counter ceiling. The counter reaches this value on the 100th
/// tick; the tick after that reveals the close button and stops the timer.
pub const PROGRESS_MAX: u8 = 100;

// =============================================================================
// Pre-computed Layout Constants
// =============================================================================

/// Page header bar height in pixels.
pub const HEADER_HEIGHT: u32 = 26;

/// Screen center X coordinate. Used for centering the panel contents and
/// centered page text. Pre-computed as i32 to avoid casts in drawing code.
pub const CENTER_X: i32 = (SCREEN_WIDTH / 2) as i32;

// =============================================================================
// Unit Tests
// =============================================================================
