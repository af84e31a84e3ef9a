//! Command-line arguments.
//!
//! Everything is optional and the defaults reproduce the documented splash
//! behavior exactly (5 second delay, 50ms cadence, 2x window). The timing
//! overrides exist for manual testing: waiting out the full 10 second
//! timeline on every run gets old fast.

use std::time::Duration;

use clap::Parser;

use crate::config::{PROGRESS_TICK, REVEAL_DELAY};
use crate::popup::PopupTimings;

/// Timed promo splash overlay simulator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Window scale factor (1 = native 320x240)
    #[arg(
        short = 's',
        long = "scale",
        value_name = "N",
        default_value_t = 2,
        value_parser = clap::value_parser!(u32).range(1..=4)
    )]
    pub scale: u32,

    /// Milliseconds before the splash is revealed
    #[arg(long = "delay-ms", value_name = "MS", default_value_t = REVEAL_DELAY.as_millis() as u64)]
    pub delay_ms: u64,

    /// Milliseconds between progress increments
    #[arg(
        long = "tick-ms",
        value_name = "MS",
        default_value_t = PROGRESS_TICK.as_millis() as u64,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub tick_ms: u64,

    /// Increase logging verbosity (default: warn, -v: info, -vv: debug, -vvv+: trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

impl Args {
    /// Splash timings from the (possibly overridden) millisecond values.
    pub const fn timings(&self) -> PopupTimings {
        PopupTimings::new(
            Duration::from_millis(self.delay_ms),
            Duration::from_millis(self.tick_ms),
        )
    }

    /// Default log level for the env_logger filter, from the -v count.
    pub const fn log_level(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
