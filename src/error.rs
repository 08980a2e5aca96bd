//! Error types for the replaykit library.
//!
//! ## Key Components
//!
//! - [`ConfigError`]: Returned when simulation construction parameters are
//!   invalid (e.g. zero capacity).
//! - [`TraceError`]: Returned when a trace file cannot be opened or a line
//!   does not parse as three integers. Either condition aborts the whole
//!   run; partial statistics are never reported.
//!
//! ## Example Usage
//!
//! ```
//! use replaykit::error::ConfigError;
//! use replaykit::sim::SimulationBuilder;
//!
//! // Fallible construction for user-configurable parameters
//! let err = SimulationBuilder::new(0).try_build().unwrap_err();
//! assert!(err.to_string().contains("capacity"));
//! ```

use std::fmt;
use std::io;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when simulation configuration parameters are invalid.
///
/// Produced by fallible constructors such as
/// [`SimulationBuilder::try_build`](crate::sim::SimulationBuilder::try_build).
/// Carries a human-readable description of which parameter failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    /// Creates a new `ConfigError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// TraceError
// ---------------------------------------------------------------------------

/// Error returned when a trace cannot be read or parsed.
///
/// Statistics are only meaningful over the full trace, so either variant is
/// fatal for the run: no engine output is produced after one is raised.
#[derive(Debug)]
pub enum TraceError {
    /// The trace source could not be opened or read.
    Io(io::Error),
    /// A non-blank line did not parse as three whitespace-separated
    /// integers. Lines are numbered from 1.
    Format { line: usize },
}

impl fmt::Display for TraceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "cannot read trace: {err}"),
            Self::Format { line } => {
                write!(f, "line {line}: expected three whitespace-separated integers")
            },
        }
    }
}

impl std::error::Error for TraceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Format { .. } => None,
        }
    }
}

impl From<io::Error> for TraceError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
