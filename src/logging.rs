//! Logging setup for the `hangar-docs` binary.
//!
//! The library only emits `tracing` events; installing a subscriber is the
//! binary's job.

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// How chatty the binary is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Errors only.
    Quiet,
    /// Info and above.
    #[default]
    Normal,
    /// Per-render debug events.
    Verbose,
    /// Everything, including per-section trace events.
    Trace,
}

impl Verbosity {
    /// Resolve the `-v` count and `-q` flag from the command line.
    pub fn from_flags(verbose: u8, quiet: bool) -> Self {
        match (quiet, verbose) {
            (true, _) => Self::Quiet,
            (false, 0) => Self::Normal,
            (false, 1) => Self::Verbose,
            (false, _) => Self::Trace,
        }
    }

    pub fn level(self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::INFO,
            Self::Verbose => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    /// Filter directive used when `RUST_LOG` is unset.
    pub fn directive(self) -> String {
        format!("hangar_docs={},tower_http={}", self.level(), self.level())
    }
}

/// Install the global subscriber. `RUST_LOG` wins over `verbosity`.
///
/// Calling this twice is harmless; the second call does nothing.
pub fn init_logging(verbosity: Verbosity) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.directive()));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .try_init();
}
