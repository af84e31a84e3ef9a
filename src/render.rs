//! Render state tracking for optimized display updates.
//!
//! The backdrop page is static and the splash only changes on discrete
//! events, so the 50 FPS loop redraws almost nothing on a typical frame.
//! This module tracks what changed:
//!
//! - First frame: clear and draw the backdrop page.
//! - Overlay shown this frame: draw the dimming checkerboard.
//! - Panel shown this frame: draw the panel chrome (border, background,
//!   title, body).
//! - Progress value changed: redraw the bar and percent readout.
//! - Close button newly revealed: draw it once.
//! - Overlay or panel hidden this frame: clear and redraw the page.
//!
//! # Update Strategy
//!
//! | Element      | Update Frequency          | Strategy            |
//! |--------------|---------------------------|---------------------|
//! | Page         | First frame / after hide  | Conditional redraw  |
//! | Overlay dim  | On show                   | Draw-once per show  |
//! | Panel chrome | On show                   | Draw-once per show  |
//! | Progress bar | On counter change (~50ms) | Compare-and-store   |
//! | Close button | On reveal                 | Draw-once           |
//!
//! # Hide Cleanup
//!
//! When either element hides, the display is fully cleared to remove its
//! remnants (the dim pixels especially), then the page is redrawn. A hide
//! also invalidates everything stacked above the page: if the other element
//! is somehow still visible it is marked for redraw, and the bar/button
//! dirty state is reset so they repaint after the panel chrome. This cleanup
//! happens in the same frame the visibility drops.

/// Tracks render state for conditional redraws of the page and splash.
pub struct RenderState {
    /// Whether this is the first frame (need full page draw).
    first_frame: bool,

    /// Previous overlay visibility.
    prev_overlay_visible: bool,

    /// Previous panel visibility.
    prev_popup_visible: bool,

    /// Overlay became visible this frame (draw the dim backdrop).
    overlay_just_shown: bool,

    /// Panel became visible this frame (draw the panel chrome).
    popup_just_shown: bool,

    /// Overlay or panel became hidden this frame (clear + redraw page).
    just_hidden: bool,

    /// Previous progress value drawn. `None` forces the next draw.
    prev_progress: Option<u8>,

    /// Whether the close button has been drawn for the current showing.
    prev_close_revealed: bool,
}

impl RenderState {
    /// Create a new render state for the first frame.
    pub const fn new() -> Self {
        Self {
            first_frame: true,
            prev_overlay_visible: false,
            prev_popup_visible: false,
            overlay_just_shown: false,
            popup_just_shown: false,
            just_hidden: false,
            prev_progress: None,
            prev_close_revealed: false,
        }
    }

    /// Record this frame's visibility flags and derive the show/hide edges.
    ///
    /// A hide invalidates everything above the page: the display gets
    /// cleared, so any element still visible must redraw, and the bar and
    /// button dirty state is reset.
    pub const fn update_visibility(
        &mut self,
        overlay_visible: bool,
        popup_visible: bool,
    ) {
        self.overlay_just_shown = overlay_visible && !self.prev_overlay_visible;
        self.popup_just_shown = popup_visible && !self.prev_popup_visible;
        self.just_hidden = (self.prev_overlay_visible && !overlay_visible)
            || (self.prev_popup_visible && !popup_visible);

        if self.just_hidden {
            // The clear wipes whatever is still on screen
            self.overlay_just_shown = overlay_visible;
            self.popup_just_shown = popup_visible;
        }
        if self.popup_just_shown {
            // Fresh chrome needs a fresh bar and button on top
            self.prev_progress = None;
            self.prev_close_revealed = false;
        }

        self.prev_overlay_visible = overlay_visible;
        self.prev_popup_visible = popup_visible;
    }

    /// Check if this is the first frame.
    #[inline]
    pub const fn is_first_frame(&self) -> bool { self.first_frame }

    /// Overlay became visible this frame.
    #[inline]
    pub const fn overlay_just_shown(&self) -> bool { self.overlay_just_shown }

    /// Panel became visible this frame.
    #[inline]
    pub const fn popup_just_shown(&self) -> bool { self.popup_just_shown }

    /// Overlay or panel became hidden this frame.
    #[inline]
    pub const fn just_hidden(&self) -> bool { self.just_hidden }

    /// Check if the progress bar needs redrawing for `progress`.
    ///
    /// Compare-and-store: true when the value differs from the last drawn
    /// one (or nothing has been drawn since the panel appeared).
    pub const fn check_progress_dirty(
        &mut self,
        progress: u8,
    ) -> bool {
        let dirty = match self.prev_progress {
            Some(prev) => prev != progress,
            None => true,
        };
        self.prev_progress = Some(progress);
        dirty
    }

    /// Check if the close button needs drawing.
    ///
    /// True exactly once per showing: on the frame `revealed` flips to true.
    pub const fn check_close_dirty(
        &mut self,
        revealed: bool,
    ) -> bool {
        let dirty = revealed && !self.prev_close_revealed;
        self.prev_close_revealed = revealed;
        dirty
    }

    /// Call at end of frame to reset the per-frame edge flags.
    pub const fn end_frame(&mut self) {
        self.first_frame = false;
        self.overlay_just_shown = false;
        self.popup_just_shown = false;
        self.just_hidden = false;
    }
}

impl Default for RenderState {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================
