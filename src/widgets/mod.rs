//! Widget components for the promo splash display.
//!
//! - [`overlay`]: full-screen dimming checkerboard behind the panel
//! - [`panel`]: the popup panel chrome and the close button (with hit test)
//! - [`progress`]: the progress bar and percent readout
//!
//! # Architecture
//!
//! Widgets are plain drawing functions over the simulator display. Layered
//! bottom to top: page, overlay dim, panel chrome, progress bar, close
//! button. Each layer is drawn only on the frame its state changes (see
//! [`render`](crate::render)); nothing here keeps state of its own.
//!
//! All geometry is `const`, centered via the pre-computed screen constants
//! from [`config`](crate::config), and all fixed styles come from
//! [`styles`](crate::styles). Runtime-formatted text (the percent readout)
//! uses `heapless::String`, never the heap.

mod overlay;
mod panel;
mod progress;

pub use overlay::draw_overlay_dim;
pub use panel::{close_button_contains, draw_close_button, draw_panel};
pub use progress::draw_progress;
