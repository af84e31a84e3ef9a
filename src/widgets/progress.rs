//! Progress bar and percent readout.
//!
//! The bar is a light track with an inset accent fill whose width encodes
//! the counter as a percentage: 0 -> 0px, 100 -> the full inner width. A
//! large percent readout sits under the track. Both are redrawn only when
//! the counter changes (about every 50ms while animating), and the readout
//! strip is cleared first so narrower text never leaves remnants of wider
//! text behind.

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use embedded_graphics_simulator::SimulatorDisplay;
use heapless::String;

use super::panel::{PANEL_WIDTH, PANEL_X, PANEL_Y};
use crate::colors::{LIGHT_GRAY, RED, WHITE};
use crate::config::{CENTER_X, PROGRESS_MAX};
use crate::styles::{CENTERED, VALUE_STYLE_BLACK};

// =============================================================================
// Track Layout Constants
// =============================================================================

/// Track X position (18px inset from the panel edge).
const TRACK_X: i32 = PANEL_X + 18;
/// Track Y position.
const TRACK_Y: i32 = PANEL_Y + 73;
/// Track width (panel width minus the 18px insets). 204px outer, which
/// leaves a 200px inner fill area: an even 2px per percentage point.
const TRACK_WIDTH: u32 = PANEL_WIDTH - 36;
/// Track height.
const TRACK_HEIGHT: u32 = 14;

/// Inner fill inset on each side.
const FILL_INSET: u32 = 2;
/// Maximum fill width (the inner track width).
const FILL_MAX_WIDTH: u32 = TRACK_WIDTH - FILL_INSET * 2;

// =============================================================================
// Percent Readout Layout Constants
// =============================================================================

/// Readout baseline (centered under the track).
const READOUT_POS: Point = Point::new(CENTER_X, PANEL_Y + 113);
/// Cleared strip behind the readout, sized for "100%" in ProFont 18pt.
const READOUT_CLEAR_POS: Point = Point::new(CENTER_X - 30, PANEL_Y + 94);
const READOUT_CLEAR_SIZE: Size = Size::new(60, 26);

// =============================================================================
// Pre-computed Primitive Styles (const fn in embedded-graphics 0.8)
// =============================================================================

/// Light track fill.
const TRACK_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(LIGHT_GRAY);

/// Accent bar fill.
const BAR_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(RED);

/// Panel background fill for the readout strip.
const STRIP_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(WHITE);

// =============================================================================
// Fill Width Mapping
// =============================================================================

/// Map a progress value (0..=100) to the fill width in pixels.
///
/// 0 maps to 0px, 100 to the full inner width, monotonically in between.
/// Values above the counter ceiling are clamped so the fill can never
/// escape the track.
pub const fn fill_width(progress: u8) -> u32 {
    let p = if progress > PROGRESS_MAX { PROGRESS_MAX } else { progress };
    (p as u32 * FILL_MAX_WIDTH) / PROGRESS_MAX as u32
}

// =============================================================================
// Drawing Functions
// =============================================================================

/// Draw the progress bar and percent readout for `progress`.
///
/// Repaints the whole track (cheap, and immune to stale fill edges), the
/// inset fill at the mapped width, and the readout on a freshly cleared
/// strip.
pub fn draw_progress(
    display: &mut SimulatorDisplay<Rgb565>,
    progress: u8,
) {
    // Track
    Rectangle::new(Point::new(TRACK_X, TRACK_Y), Size::new(TRACK_WIDTH, TRACK_HEIGHT))
        .into_styled(TRACK_FILL)
        .draw(display)
        .ok();

    // Inset fill (a zero-width rectangle draws nothing at 0%)
    let width = fill_width(progress);
    if width > 0 {
        Rectangle::new(
            Point::new(TRACK_X + FILL_INSET as i32, TRACK_Y + FILL_INSET as i32),
            Size::new(width, TRACK_HEIGHT - FILL_INSET * 2),
        )
        .into_styled(BAR_FILL)
        .draw(display)
        .ok();
    }

    // Percent readout on a cleared strip
    Rectangle::new(READOUT_CLEAR_POS, READOUT_CLEAR_SIZE)
        .into_styled(STRIP_FILL)
        .draw(display)
        .ok();
    let mut readout: String<8> = String::new();
    let _ = write!(readout, "{progress}%");
    Text::with_text_style(&readout, READOUT_POS, VALUE_STYLE_BLACK, CENTERED)
        .draw(display)
        .ok();
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Fill Width Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_fill_width_endpoints() {
        assert_eq!(fill_width(0), 0, "0% should map to an empty fill");
        assert_eq!(fill_width(PROGRESS_MAX), FILL_MAX_WIDTH, "100% should fill the inner track");
    }

    #[test]
    fn test_fill_width_midpoint() {
        // 200px inner width: 50% lands on exactly half
        assert_eq!(fill_width(50), FILL_MAX_WIDTH / 2, "50% should be half the inner width");
    }

    #[test]
    fn test_fill_width_monotonic() {
        let mut prev = 0;
        for p in 0..=PROGRESS_MAX {
            let w = fill_width(p);
            assert!(w >= prev, "Fill width must be non-decreasing at {p}%");
            assert!(w <= FILL_MAX_WIDTH, "Fill width must never exceed the inner track");
            prev = w;
        }
    }

    #[test]
    fn test_fill_width_clamps() {
        assert_eq!(
            fill_width(250),
            FILL_MAX_WIDTH,
            "Out-of-range progress must clamp to the full fill"
        );
    }

    // -------------------------------------------------------------------------
    // Layout Sanity Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_track_inside_panel() {
        assert!(TRACK_X >= PANEL_X, "Track must not overflow the panel's left edge");
        assert!(
            TRACK_X + TRACK_WIDTH as i32 <= PANEL_X + PANEL_WIDTH as i32,
            "Track must not overflow the panel's right edge"
        );
        assert!(TRACK_Y >= PANEL_Y, "Track must sit inside the panel");
    }

    #[test]
    fn test_readout_strip_clears_below_track() {
        assert!(
            READOUT_CLEAR_POS.y >= TRACK_Y + TRACK_HEIGHT as i32,
            "Readout strip must not overwrite the track"
        );
    }

    #[test]
    fn test_even_pixels_per_percent() {
        // The inner width divides evenly so every increment moves the fill
        assert_eq!(
            FILL_MAX_WIDTH % PROGRESS_MAX as u32,
            0,
            "Inner track width should be a multiple of 100"
        );
    }
}
