//! Leveled line logger.
//!
//! # Design Principles
//!
//! - Total ordering over severities: Debug < Trace < Info < Warning < Error < None
//! - A message is emitted only when its level is at or above the threshold
//! - Suppressed messages are never formatted, not just discarded
//! - `None` as the threshold suppresses every message
//! - One emitted message = one line on the sink

mod errors;
mod level;
mod logger;

pub use errors::{LogError, LogResult};
pub use level::LogLevel;
pub use logger::{LevelLogger, LineFormat};
