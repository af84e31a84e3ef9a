//! Screen modules.
//!
//! A single screen: the static backdrop [`page`] the splash is layered
//! over. The overlay, panel, progress bar, and close button are widgets
//! (see [`widgets`](crate::widgets)), composited over this page by the
//! frame loop.

mod page;

pub use page::draw_page;
