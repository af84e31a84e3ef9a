//! Full-screen dimming overlay drawn behind the popup panel.
//!
//! An RGB565 framebuffer has no alpha channel, so "dim the page" is done the
//! way small panels do it: paint every other pixel black in a checkerboard,
//! leaving half of the page pixels showing through. At 2x window scale this
//! reads as a uniform 50% darkening.
//!
//! Drawn once per showing (the page underneath is static), then the panel is
//! painted opaquely on top.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::SimulatorDisplay;

use crate::colors::BLACK;
use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Draw the dimming checkerboard over the whole screen.
///
/// Alternating rows offset the pattern by one pixel so no column is ever
/// fully dark. Uses a single `draw_iter` call rather than per-pixel draw
/// calls.
pub fn draw_overlay_dim(display: &mut SimulatorDisplay<Rgb565>) {
    let dim = (0..SCREEN_HEIGHT as i32).flat_map(|y| {
        let offset = y & 1;
        (offset..SCREEN_WIDTH as i32)
            .step_by(2)
            .map(move |x| Pixel(Point::new(x, y), BLACK))
    });
    display.draw_iter(dim).ok();
}
