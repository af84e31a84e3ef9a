//! Pre-computed static text styles to avoid per-frame object construction.
//!
//! `MonoTextStyle` and `TextStyle` construction is cheap but pointless to
//! repeat every frame: all text in this application uses a fixed font/color
//! pairing, so the styles are defined once as `const`. The constructors are
//! const fn in embedded-graphics 0.8, so these live in the binary's read-only
//! data section.
//!
//! Fonts in use:
//! - `FONT_10X20` for the page header title and the panel title
//! - `FONT_6X10` for body copy, secondary text, and the button label
//! - `ProFont` 18pt for the large percent readout inside the panel

use embedded_graphics::{
    mono_font::{
        MonoTextStyle,
        ascii::{FONT_6X10, FONT_10X20},
    },
    pixelcolor::Rgb565,
    text::{Alignment, TextStyle, TextStyleBuilder},
};
use profont::PROFONT_18_POINT;

use crate::colors::{BLACK, GRAY, RED, WHITE};

// =============================================================================
// Text Alignment Styles (const - zero runtime cost)
// =============================================================================

/// Centered text alignment. Used for titles, the percent readout, and the
/// button label.
pub const CENTERED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Center).build();

/// Left-aligned text. Used for the page body copy.
pub const LEFT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Left).build();

// =============================================================================
// Pre-computed Text Styles (const - zero runtime cost)
// =============================================================================

/// Medium white text for the page header title (10x20 pixels).
pub const TITLE_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_10X20, WHITE);

/// Medium red text for the panel title (10x20 pixels).
pub const TITLE_STYLE_RED: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_10X20, RED);

/// Small black text for body copy on light backgrounds.
pub const LABEL_STYLE_BLACK: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, BLACK);

/// Small gray text for secondary page lines (byline, footer).
pub const LABEL_STYLE_GRAY: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, GRAY);

/// Small white text for the close button label.
pub const LABEL_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, WHITE);

/// Large black text for the percent readout (`ProFont` 18pt).
pub const VALUE_STYLE_BLACK: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_18_POINT, BLACK);
