//! Static backdrop page the splash appears over.
//!
//! A fake single-article page: header bar with the site title, a headline,
//! a byline, body copy, and a footer. Drawn on the first frame and again
//! after the splash is dismissed; nothing on it ever animates, so it is
//! never redrawn in between.
//!
//! # Visual Layout
//!
//! ```text
//! ┌────────────────────────────────────┐
//! │            GIZMO DAILY             │  Header bar (accent)
//! │────────────────────────────────────│
//! │ The 50-cent microcontroller        │  Headline
//! │ By R. Ohm | Gizmo Daily staff      │  Byline (gray)
//! │                                    │
//! │ Cheap micros used to mean ...      │  Body copy
//! │ ...                                │
//! │            (c) Gizmo Daily         │  Footer (gray)
//! └────────────────────────────────────┘
//! ```

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::mono_font::ascii::FONT_10X20;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use embedded_graphics_simulator::SimulatorDisplay;

use crate::colors::{BLACK, RED};
use crate::config::{HEADER_HEIGHT, SCREEN_WIDTH};
use crate::styles::{CENTERED, LABEL_STYLE_BLACK, LABEL_STYLE_GRAY, LEFT_ALIGNED, TITLE_STYLE_WHITE};

// =============================================================================
// Page Layout Constants
// =============================================================================

/// Position of the site title text (centered in the header bar).
const HEADER_TITLE_POS: Point = Point::new(160, 19);

/// Top-left corner of the header rectangle.
const HEADER_RECT_POS: Point = Point::new(0, 0);

/// Size of the header rectangle (full width).
const HEADER_RECT_SIZE: Size = Size::new(SCREEN_WIDTH, HEADER_HEIGHT);

/// Headline baseline position (left margin).
const HEADLINE_POS: Point = Point::new(10, 52);

/// Byline baseline position.
const BYLINE_POS: Point = Point::new(10, 68);

/// Body copy X position (left margin).
const BODY_X: i32 = 10;

/// Body copy first line Y position.
const BODY_START_Y: i32 = 88;

/// Vertical spacing between body lines.
const BODY_LINE_HEIGHT: i32 = 14;

/// Footer baseline position (centered near the bottom edge).
const FOOTER_POS: Point = Point::new(160, 232);

// =============================================================================
// Page Copy
// =============================================================================

/// Body copy lines. An empty string renders as a paragraph break.
const BODY_LINES: [&str; 8] = [
    "Cheap micros used to mean painful toolchains",
    "and three kilobytes of RAM. The newest batch",
    "changes the math: a dual-core part with a real",
    "debugger for less than a postage stamp.",
    "",
    "We soldered one to a breadboard adapter, ran",
    "the usual blink demo, and then kept going until",
    "something broke. Spoiler: it was the breadboard.",
];

// =============================================================================
// Pre-computed Styles (const fn in embedded-graphics 0.8)
// =============================================================================

/// Accent fill for the header bar.
const HEADER_FILL_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(RED);

/// Black headline text style (`FONT_10X20`).
const HEADLINE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_10X20, BLACK);

// =============================================================================
// Drawing Function
// =============================================================================

/// Draw the full backdrop page.
///
/// The caller clears the display to the page background color first; this
/// draws the header bar, headline, byline, body copy, and footer.
pub fn draw_page(display: &mut SimulatorDisplay<Rgb565>) {
    // Header bar with centered site title
    Rectangle::new(HEADER_RECT_POS, HEADER_RECT_SIZE)
        .into_styled(HEADER_FILL_STYLE)
        .draw(display)
        .ok();
    Text::with_text_style("GIZMO DAILY", HEADER_TITLE_POS, TITLE_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();

    // Headline and byline
    Text::with_text_style("The 50-cent microcontroller", HEADLINE_POS, HEADLINE_STYLE, LEFT_ALIGNED)
        .draw(display)
        .ok();
    Text::with_text_style(
        "By R. Ohm | Gizmo Daily staff",
        BYLINE_POS,
        LABEL_STYLE_GRAY,
        LEFT_ALIGNED,
    )
    .draw(display)
    .ok();

    // Body copy (empty strings just advance the line position)
    for (i, line) in BODY_LINES.iter().enumerate() {
        if line.is_empty() {
            continue;
        }
        let y_pos = BODY_START_Y + (i as i32 * BODY_LINE_HEIGHT);
        Text::with_text_style(line, Point::new(BODY_X, y_pos), LABEL_STYLE_BLACK, LEFT_ALIGNED)
            .draw(display)
            .ok();
    }

    // Footer
    Text::with_text_style("(c) Gizmo Daily", FOOTER_POS, LABEL_STYLE_GRAY, CENTERED)
        .draw(display)
        .ok();
}

// =============================================================================
// Unit Tests
// =============================================================================
