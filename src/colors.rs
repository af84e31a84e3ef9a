//! Color constants for the promo splash display.
//!
//! # Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! - Red: 0-31 (5 bits)
//! - Green: 0-63 (6 bits)
//! - Blue: 0-31 (5 bits)
//!
//! This format is native to small SPI displays (ST7789 class) and is what the
//! simulator framebuffer stores, so no conversion happens at draw time.
//! Standard colors come from the `RgbColor` trait constants; custom shades are
//! constructed with explicit component values.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait - guaranteed optimal values)
// =============================================================================

/// Pure black (0, 0, 0). Used for the overlay dim pixels and page body text.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white (31, 63, 31). Page and panel background, button label text.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure red (31, 0, 0). Accent color: page header, panel border and title,
/// progress fill, close button.
pub const RED: Rgb565 = Rgb565::RED;

// =============================================================================
// Custom Colors (application-specific)
// =============================================================================

/// Dark gray for secondary page text (bylines, footer).
/// RGB565: (12, 24, 12) - roughly 40% brightness.
pub const GRAY: Rgb565 = Rgb565::new(12, 24, 12);

/// Light gray for the empty progress track on the white panel.
/// RGB565: (24, 48, 24) - roughly 75% brightness.
pub const LIGHT_GRAY: Rgb565 = Rgb565::new(24, 48, 24);
