//! Log severity levels and their string forms.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use super::errors::{LogError, LogResult};

/// Log severity, ordered from least to most severe.
///
/// The ordering follows declaration order:
/// `Invalid < Debug < Trace < Info < Warning < Error < None`.
///
/// `None` is a threshold value only; no message carries it, so a logger
/// configured with `None` emits nothing. `Invalid` is the sentinel for a
/// failed parse and is never a real level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    /// Parse-failure sentinel. Has no string form.
    Invalid,
    /// Verbose diagnostic detail
    Debug,
    /// Operation tracing
    Trace,
    /// Normal operations
    Info,
    /// Recoverable issues
    Warning,
    /// Operation failures
    Error,
    /// Threshold that suppresses all output
    None,
}

impl LogLevel {
    /// Returns the canonical uppercase name of the level.
    ///
    /// `Invalid` returns the empty string: it is not a real level and the
    /// reverse direction never produces it on success, so the two conversions
    /// are deliberately not perfect inverses.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Trace => "TRACE",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::None => "NONE",
            LogLevel::Invalid => "",
        }
    }

    /// Parses a canonical level name, ignoring case.
    ///
    /// Inherent form of the [`FromStr`] impl; see there for the accepted
    /// inputs.
    pub fn parse(input: &str) -> LogResult<Self> {
        input.parse()
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = LogError;

    /// Parses a canonical level name, ignoring case.
    ///
    /// Only an exact case-insensitive match is accepted: padded, truncated,
    /// or otherwise unknown input is an error. Callers that want an in-band
    /// sentinel instead of the error can use
    /// `input.parse().unwrap_or(LogLevel::Invalid)`.
    fn from_str(input: &str) -> LogResult<Self> {
        match input.to_ascii_uppercase().as_str() {
            "DEBUG" => Ok(LogLevel::Debug),
            "TRACE" => Ok(LogLevel::Trace),
            "INFO" => Ok(LogLevel::Info),
            "WARNING" => Ok(LogLevel::Warning),
            "ERROR" => Ok(LogLevel::Error),
            "NONE" => Ok(LogLevel::None),
            _ => Err(LogError::InvalidLevel(input.to_string())),
        }
    }
}

/// Wire form is the canonical uppercase name. `Invalid` serializes to the
/// empty string, which no deserialization accepts, so it does not round-trip;
/// the same asymmetry as [`LogLevel::as_str`].
impl Serialize for LogLevel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// Accepts whatever [`LogLevel::parse`] accepts: an exact case-insensitive
/// match on a canonical name.
impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let input = String::deserialize(deserializer)?;
        input.parse().map_err(de::Error::custom)
    }
}
