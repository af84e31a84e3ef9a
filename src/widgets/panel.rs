//! Popup panel chrome and close button.
//!
//! The panel is a centered card: accent border, white background, title and
//! body copy. The close button lives at the bottom of the card and is drawn
//! only after the progress animation completes; the const hit test is what
//! the frame loop runs mouse clicks through.
//!
//! All geometry is pre-computed: panel rectangle centered via
//! `(SCREEN - size) / 2`, the border drawn as a slightly larger rectangle
//! behind the background, text at const positions.
//!
//! # Layout
//!
//! ```text
//! ┌──────────────────────────────┐ 3px accent border
//! │        SPECIAL OFFER         │ title (10x20, accent)
//! │  Preparing your discount...  │ body copy (6x10, black)
//! │  ┌────────────────────────┐  │
//! │  │████████████░░░░░░░░░░░░│  │ progress track (widgets::progress)
//! │  └────────────────────────┘  │
//! │             62%              │ percent readout (ProFont 18pt)
//! │          ┌───────┐           │
//! │          │ CLOSE │           │ close button (hidden until 100%)
//! │          └───────┘           │
//! └──────────────────────────────┘
//! ```

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use embedded_graphics_simulator::SimulatorDisplay;

use crate::colors::{RED, WHITE};
use crate::config::{CENTER_X, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::styles::{CENTERED, LABEL_STYLE_BLACK, LABEL_STYLE_WHITE, TITLE_STYLE_RED};

// =============================================================================
// Panel Layout Constants
// =============================================================================

/// Width of the popup panel.
pub(crate) const PANEL_WIDTH: u32 = 240;
/// Height of the popup panel.
pub(crate) const PANEL_HEIGHT: u32 = 170;
/// X position (centered on screen).
pub(crate) const PANEL_X: i32 = (SCREEN_WIDTH - PANEL_WIDTH) as i32 / 2;
/// Y position (centered on screen).
pub(crate) const PANEL_Y: i32 = (SCREEN_HEIGHT - PANEL_HEIGHT) as i32 / 2;

/// Panel border rectangle (accent rectangle drawn behind the background).
const PANEL_BORDER_POS: Point = Point::new(PANEL_X - 3, PANEL_Y - 3);
const PANEL_BORDER_SIZE: Size = Size::new(PANEL_WIDTH + 6, PANEL_HEIGHT + 6);

/// Panel background rectangle (inner white rectangle).
const PANEL_BG_POS: Point = Point::new(PANEL_X, PANEL_Y);
const PANEL_BG_SIZE: Size = Size::new(PANEL_WIDTH, PANEL_HEIGHT);

// =============================================================================
// Close Button Layout Constants
// =============================================================================

/// Width of the close button.
const CLOSE_BTN_WIDTH: u32 = 80;
/// Height of the close button.
const CLOSE_BTN_HEIGHT: u32 = 24;
/// X position (centered inside the panel).
const CLOSE_BTN_X: i32 = CENTER_X - (CLOSE_BTN_WIDTH / 2) as i32;
/// Y position (19px above the panel's bottom edge).
const CLOSE_BTN_Y: i32 = PANEL_Y + PANEL_HEIGHT as i32 - CLOSE_BTN_HEIGHT as i32 - 19;

// =============================================================================
// Pre-computed Text Positions
// =============================================================================

/// Position of the panel title baseline.
const TITLE_POS: Point = Point::new(CENTER_X, PANEL_Y + 29);
/// First body copy line baseline.
const BODY1_POS: Point = Point::new(CENTER_X, PANEL_Y + 51);
/// Second body copy line baseline.
const BODY2_POS: Point = Point::new(CENTER_X, PANEL_Y + 65);
/// Close button label baseline (optically centered in the button).
const CLOSE_LABEL_POS: Point = Point::new(CENTER_X, CLOSE_BTN_Y + 16);

// =============================================================================
// Pre-computed Primitive Styles (const fn in embedded-graphics 0.8)
// =============================================================================

/// Accent fill for the panel border and the close button.
const RED_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(RED);

/// White fill for the panel background.
const WHITE_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(WHITE);

// =============================================================================
// Drawing Functions
// =============================================================================

/// Draw the panel chrome: border, background, title, and body copy.
///
/// Drawn once per showing, over the overlay dim. The progress bar and close
/// button are layered on top by their own draw functions.
pub fn draw_panel(display: &mut SimulatorDisplay<Rgb565>) {
    // Accent border (drawn as a larger rectangle behind the background)
    Rectangle::new(PANEL_BORDER_POS, PANEL_BORDER_SIZE)
        .into_styled(RED_FILL)
        .draw(display)
        .ok();

    // White background
    Rectangle::new(PANEL_BG_POS, PANEL_BG_SIZE)
        .into_styled(WHITE_FILL)
        .draw(display)
        .ok();

    // Title and body copy
    Text::with_text_style("SPECIAL OFFER", TITLE_POS, TITLE_STYLE_RED, CENTERED)
        .draw(display)
        .ok();
    Text::with_text_style("Preparing your discount code.", BODY1_POS, LABEL_STYLE_BLACK, CENTERED)
        .draw(display)
        .ok();
    Text::with_text_style("This takes a few seconds.", BODY2_POS, LABEL_STYLE_BLACK, CENTERED)
        .draw(display)
        .ok();
}

/// Draw the close button.
///
/// Hidden by default; the frame loop calls this once, on the frame the
/// progress animation completes.
pub fn draw_close_button(display: &mut SimulatorDisplay<Rgb565>) {
    Rectangle::new(
        Point::new(CLOSE_BTN_X, CLOSE_BTN_Y),
        Size::new(CLOSE_BTN_WIDTH, CLOSE_BTN_HEIGHT),
    )
    .into_styled(RED_FILL)
    .draw(display)
    .ok();

    Text::with_text_style("CLOSE", CLOSE_LABEL_POS, LABEL_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();
}

/// Hit test for the close button rectangle.
///
/// Inclusive of the top-left edge, exclusive of the bottom-right, matching
/// pixel coverage of the drawn rectangle.
pub const fn close_button_contains(p: Point) -> bool {
    p.x >= CLOSE_BTN_X
        && p.x < CLOSE_BTN_X + CLOSE_BTN_WIDTH as i32
        && p.y >= CLOSE_BTN_Y
        && p.y < CLOSE_BTN_Y + CLOSE_BTN_HEIGHT as i32
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Layout Sanity Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_panel_centered() {
        assert_eq!(PANEL_X, 40, "Panel X should center a 240px panel on a 320px screen");
        assert_eq!(PANEL_Y, 35, "Panel Y should center a 170px panel on a 240px screen");
    }

    #[test]
    fn test_panel_border_inside_screen() {
        assert!(PANEL_BORDER_POS.x >= 0, "Border must not clip the left edge");
        assert!(PANEL_BORDER_POS.y >= 0, "Border must not clip the top edge");
        assert!(
            PANEL_BORDER_POS.x + PANEL_BORDER_SIZE.width as i32 <= SCREEN_WIDTH as i32,
            "Border must not clip the right edge"
        );
        assert!(
            PANEL_BORDER_POS.y + PANEL_BORDER_SIZE.height as i32 <= SCREEN_HEIGHT as i32,
            "Border must not clip the bottom edge"
        );
    }

    #[test]
    fn test_button_inside_panel() {
        assert!(CLOSE_BTN_X >= PANEL_X, "Button must not overflow the panel's left edge");
        assert!(
            CLOSE_BTN_X + CLOSE_BTN_WIDTH as i32 <= PANEL_X + PANEL_WIDTH as i32,
            "Button must not overflow the panel's right edge"
        );
        assert!(CLOSE_BTN_Y >= PANEL_Y, "Button must not overflow the panel's top edge");
        assert!(
            CLOSE_BTN_Y + CLOSE_BTN_HEIGHT as i32 <= PANEL_Y + PANEL_HEIGHT as i32,
            "Button must not overflow the panel's bottom edge"
        );
    }

    // -------------------------------------------------------------------------
    // Hit Test Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_hit_center() {
        let center = Point::new(
            CLOSE_BTN_X + (CLOSE_BTN_WIDTH / 2) as i32,
            CLOSE_BTN_Y + (CLOSE_BTN_HEIGHT / 2) as i32,
        );
        assert!(close_button_contains(center), "Center of the button should hit");
    }

    #[test]
    fn test_hit_edges() {
        // Top-left corner is inside (inclusive)
        assert!(
            close_button_contains(Point::new(CLOSE_BTN_X, CLOSE_BTN_Y)),
            "Top-left corner is part of the button"
        );
        // Last covered pixel is inside
        assert!(
            close_button_contains(Point::new(
                CLOSE_BTN_X + CLOSE_BTN_WIDTH as i32 - 1,
                CLOSE_BTN_Y + CLOSE_BTN_HEIGHT as i32 - 1,
            )),
            "Bottom-right covered pixel is part of the button"
        );
        // One past the edge is outside (exclusive)
        assert!(
            !close_button_contains(Point::new(CLOSE_BTN_X + CLOSE_BTN_WIDTH as i32, CLOSE_BTN_Y)),
            "Right edge is one past the last covered pixel"
        );
        assert!(
            !close_button_contains(Point::new(CLOSE_BTN_X, CLOSE_BTN_Y + CLOSE_BTN_HEIGHT as i32)),
            "Bottom edge is one past the last covered pixel"
        );
    }

    #[test]
    fn test_miss_outside() {
        assert!(!close_button_contains(Point::new(0, 0)), "Screen origin misses");
        assert!(
            !close_button_contains(Point::new(CLOSE_BTN_X - 1, CLOSE_BTN_Y)),
            "Just left of the button misses"
        );
        assert!(
            !close_button_contains(Point::new(CLOSE_BTN_X, CLOSE_BTN_Y - 1)),
            "Just above the button misses"
        );
        assert!(
            !close_button_contains(Point::new(
                (SCREEN_WIDTH - 1) as i32,
                (SCREEN_HEIGHT - 1) as i32
            )),
            "Far screen corner misses"
        );
    }
}
