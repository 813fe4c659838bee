//! Structured CLI errors with meaningful exit codes.
//!
//! Exit code scheme:
//! - 0:  success
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 10: engine error (bad dimensions, bad scene)
//! - 11: I/O error (snapshot write)
//! - 12: input error (bad JSON params, bad fps)
//! - 13: serialization error

use starweave_core::StarweaveError;
use std::fmt;

/// Errors produced by CLI operations, each mapped to a distinct exit code.
pub enum CliError {
    /// An engine-level error (bad dimensions, invalid scene).
    Engine(StarweaveError),
    /// An I/O error (snapshot write).
    Io(String),
    /// A user input error (bad params JSON, non-positive fps).
    Input(String),
    /// A serialization error (JSON output failure).
    Serialization(String),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Engine(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Engine(e) => write!(f, "{e}"),
            CliError::Io(msg) => write!(f, "{msg}"),
            CliError::Input(msg) => write!(f, "{msg}"),
            CliError::Serialization(msg) => write!(f, "{msg}"),
        }
    }
}

impl From<StarweaveError> for CliError {
    fn from(e: StarweaveError) -> Self {
        match e {
            StarweaveError::Io(msg) => CliError::Io(msg),
            other => CliError::Engine(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct_per_variant() {
        assert_eq!(
            CliError::Engine(StarweaveError::InvalidDimensions).exit_code(),
            10
        );
        assert_eq!(CliError::Io("write failed".into()).exit_code(), 11);
        assert_eq!(CliError::Input("bad fps".into()).exit_code(), 12);
        assert_eq!(CliError::Serialization("json".into()).exit_code(), 13);
    }

    #[test]
    fn io_engine_errors_route_to_the_io_code() {
        let err = CliError::from(StarweaveError::Io("disk full".into()));
        assert_eq!(err.exit_code(), 11);
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn other_engine_errors_keep_the_engine_code() {
        let err = CliError::from(StarweaveError::InvalidDimensions);
        assert_eq!(err.exit_code(), 10);
    }

    #[test]
    fn serde_errors_route_to_serialization() {
        let bad = serde_json::from_str::<serde_json::Value>("{nope").unwrap_err();
        assert_eq!(CliError::from(bad).exit_code(), 13);
    }
}
