// Crate-level lints: Allow common embedded/graphics patterns that pedantic lints flag
#![allow(clippy::cast_possible_truncation)] // Intentional u128->u64, usize->i32 casts for ms values and pixel math
#![allow(clippy::cast_possible_wrap)] // u32->i32 is acceptable for our coordinate ranges
#![allow(clippy::struct_excessive_bools)] // RenderState tracks visibility edges as bools
#![allow(clippy::too_many_lines)] // main() is long but well-structured

//! Timed promo splash overlay simulator.
//!
//! Recreates a familiar web annoyance as a 320x240 embedded-graphics app:
//! a static article page is drawn, and five seconds later a promo splash
//! drops over it: dimmed backdrop, offer panel, a progress bar crawling
//! from 0% to 100% at one point per 50ms, and a CLOSE button that only
//! appears once the bar is full. Clicking CLOSE dismisses the splash and
//! restores the page.
//!
//! # Timeline (default flags)
//!
//! | Time | Event |
//! |----------------|-------|
//! | 0ms | Page drawn, splash armed |
//! | 5000ms | Overlay + panel revealed, progress starts at 0% |
//! | 5000ms + n*50ms | Progress reaches n% |
//! | 10000ms | Counter full (100%) |
//! | 10050ms | Repeating deadline released, CLOSE shown |
//! | (user click) | Splash dismissed, page restored |
//!
//! The reveal delay and tick cadence can be shortened from the command line
//! for manual testing (`--delay-ms`, `--tick-ms`); the sequence is the same.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────┐
//! │ GIZMO DAILY          (article page, white) │
//! │ ░░░░░░░░░░░ overlay dim (50%) ░░░░░░░░░░░  │
//! │ ░░┌──────────────────────────────────┐░░   │
//! │ ░░│          SPECIAL OFFER           │░░   │
//! │ ░░│   Preparing your discount code.  │░░   │
//! │ ░░│  ▓▓▓▓▓▓▓▓▓▓░░░░░░░░░░░░░░░░░░░   │░░   │
//! │ ░░│               42%                │░░   │
//! │ ░░│            [ CLOSE ]             │░░   │
//! │ ░░└──────────────────────────────────┘░░   │
//! │ ░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░  │
//! └────────────────────────────────────────────┘
//! ```
//!
//! All lifecycle state and timing decisions live in
//! [`popup::PopupController`]; this file owns the window, the frame loop,
//! and input routing. [`render::RenderState`] tracks visibility edges so
//! each element is drawn only on the frame something about it changed, and
//! [`widgets`] / [`screens`] do the actual pixel pushing.
//!
//! # Controls (Simulator Mode)
//!
//! | Input | Action |
//! |-------|--------|
//! | Left click on CLOSE | Dismiss the splash (only while CLOSE is shown) |
//! | Window close | Quit |
//!
//! Clicks anywhere else are swallowed, like the original: the overlay eats
//! them and the page below never sees input while the splash is up.

mod cli;
mod colors;
mod config;
mod popup;
mod render;
mod screens;
mod styles;
mod widgets;

use std::thread;
use std::time::Instant;

use clap::Parser;
use cli::Args;
use colors::WHITE;
use config::{FRAME_TIME, SCREEN_HEIGHT, SCREEN_WIDTH};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::MouseButton;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use env_logger::Env;
use log::{debug, info, trace};
use popup::PopupController;
use render::RenderState;
use screens::draw_page;
use widgets::{close_button_contains, draw_close_button, draw_overlay_dim, draw_panel, draw_progress};

fn main() {
    let args = Args::parse();

    // Logging goes to stderr; RUST_LOG overrides the -v derived default
    env_logger::Builder::from_env(Env::default().default_filter_or(args.log_level()))
        .format_timestamp_millis()
        .init();

    info!(
        "promo splash sim starting: reveal delay {}ms, tick {}ms, scale {}x",
        args.delay_ms, args.tick_ms, args.scale
    );

    // Initialize display and window (simulator mode)
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(args.scale).build();
    let mut window = Window::new("Promo Splash Sim", &output_settings);

    // First paint so the window comes up showing a blank page, not garbage
    display.clear(WHITE).ok();
    window.update(&display);

    // The splash clock starts at first paint, like an onload handler
    let mut controller = PopupController::with_timings(Instant::now(), args.timings());

    // Edge tracking for selective redraw
    let mut render_state = RenderState::new();

    // ==========================================================================
    // Main Render Loop
    // ==========================================================================

    loop {
        let frame_start = Instant::now();

        // Handle window events. Clicks are tested against the state the user
        // actually saw (last frame), so a button revealed during this frame
        // cannot be hit before it has been drawn.
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => {
                    info!("window closed, exiting");
                    return;
                }
                SimulatorEvent::MouseButtonDown {
                    mouse_btn: MouseButton::Left,
                    point,
                } => {
                    if controller.close_active() && close_button_contains(point) {
                        controller.dismiss();
                        info!("splash dismissed at {}%", controller.progress());
                    } else {
                        debug!("click at {point:?} ignored in phase {:?}", controller.phase());
                    }
                }
                _ => {}
            }
        }

        // Advance the splash lifecycle to the current instant
        let events = controller.update(frame_start);
        if events.revealed {
            info!("splash revealed after {}ms", args.delay_ms);
        }
        if events.ticks > 0 {
            trace!("progress at {}% (+{})", controller.progress(), events.ticks);
        }
        if events.completed {
            info!("progress complete, close button enabled");
        }

        // ======================================================================
        // Rendering (edge-triggered, back to front)
        // ======================================================================

        render_state.update_visibility(controller.overlay_visible(), controller.popup_visible());

        // Page underneath everything: first frame, and again after a dismiss
        // to clear the splash remnants
        if render_state.is_first_frame() || render_state.just_hidden() {
            display.clear(WHITE).ok();
            draw_page(&mut display);
        }

        // Overlay dim and panel chrome draw once per showing
        if render_state.overlay_just_shown() {
            draw_overlay_dim(&mut display);
        }
        if render_state.popup_just_shown() {
            draw_panel(&mut display);
        }

        // Panel content only while the panel is up: bar on change, CLOSE once
        if controller.popup_visible() {
            if render_state.check_progress_dirty(controller.progress()) {
                draw_progress(&mut display, controller.progress());
            }
            if render_state.check_close_dirty(controller.close_revealed()) {
                draw_close_button(&mut display);
            }
        }

        // End of frame - reset per-frame state
        render_state.end_frame();

        // Update window with rendered frame
        window.update(&display);

        // Sleep to maintain target frame rate (~50 FPS)
        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_TIME {
            thread::sleep(FRAME_TIME.checked_sub(elapsed).unwrap());
        }
    }
}
