//! Threshold-gated line logger over an injected sink.

use std::fmt;
use std::io::Write;
use std::sync::Mutex;

use chrono::Local;

use super::level::LogLevel;

/// Line prefix written before each emitted message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineFormat {
    /// Message only, no prefix
    Plain,
    /// Local date and time, `2009/01/23 01:23:23` style
    Timestamp,
}

/// A logger that writes one line per message to an owned sink, dropping
/// every message below its configured threshold.
///
/// Emit methods take [`fmt::Arguments`] built at the call site with
/// `format_args!`, so a suppressed message costs a level comparison and
/// nothing else; no formatting happens for it.
///
/// The sink sits behind a mutex and the format+write step runs under the
/// lock, so concurrent emitters never interleave partial lines. The sink is
/// only written to, never read or closed.
///
/// ```
/// use provkit::log::{LevelLogger, LineFormat, LogLevel};
///
/// let logger = LevelLogger::new(Vec::new(), LineFormat::Plain, LogLevel::Info);
/// logger.debug(format_args!("not written"));
/// logger.info(format_args!("cache warmed in {}ms", 12));
/// assert_eq!(logger.into_sink(), b"cache warmed in 12ms\n");
/// ```
pub struct LevelLogger<W: Write> {
    sink: Mutex<W>,
    format: LineFormat,
    level: LogLevel,
}

impl<W: Write> LevelLogger<W> {
    /// Creates a logger writing to `sink` with the given line format and
    /// minimum level. The threshold is fixed for the logger's lifetime.
    pub fn new(sink: W, format: LineFormat, level: LogLevel) -> Self {
        Self {
            sink: Mutex::new(sink),
            format,
            level,
        }
    }

    /// Configured threshold.
    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// Emits at Debug level.
    pub fn debug(&self, args: fmt::Arguments<'_>) {
        self.emit(LogLevel::Debug, args);
    }

    /// Emits at Trace level.
    pub fn trace(&self, args: fmt::Arguments<'_>) {
        self.emit(LogLevel::Trace, args);
    }

    /// Emits at Info level.
    pub fn info(&self, args: fmt::Arguments<'_>) {
        self.emit(LogLevel::Info, args);
    }

    /// Emits at Warning level.
    pub fn warning(&self, args: fmt::Arguments<'_>) {
        self.emit(LogLevel::Warning, args);
    }

    /// Emits at Error level.
    pub fn error(&self, args: fmt::Arguments<'_>) {
        self.emit(LogLevel::Error, args);
    }

    /// Consumes the logger and returns the sink.
    pub fn into_sink(self) -> W {
        match self.sink.into_inner() {
            Ok(sink) => sink,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn emit(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        if level < self.level {
            return;
        }
        let mut sink = match self.sink.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        // Sink failures are swallowed; a logger that can fail per line is
        // the wrong interface for its call sites.
        let _ = match self.format {
            LineFormat::Plain => writeln!(sink, "{}", args),
            LineFormat::Timestamp => writeln!(
                sink,
                "{} {}",
                Local::now().format("%Y/%m/%d %H:%M:%S"),
                args
            ),
        };
        let _ = sink.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_reports_configured_threshold() {
        let logger = LevelLogger::new(Vec::new(), LineFormat::Plain, LogLevel::Warning);
        assert_eq!(logger.level(), LogLevel::Warning);
    }

    #[test]
    fn test_emit_writes_one_line() {
        let logger = LevelLogger::new(Vec::new(), LineFormat::Plain, LogLevel::Debug);
        logger.info(format_args!("hello"));
        let output = String::from_utf8(logger.into_sink()).unwrap();
        assert_eq!(output, "hello\n");
    }

    #[test]
    fn test_emit_formats_arguments_in_order() {
        let logger = LevelLogger::new(Vec::new(), LineFormat::Plain, LogLevel::Debug);
        logger.error(format_args!("{} then {}", "first", "second"));
        let output = String::from_utf8(logger.into_sink()).unwrap();
        assert_eq!(output, "first then second\n");
    }

    #[test]
    fn test_suppressed_emit_writes_nothing() {
        let logger = LevelLogger::new(Vec::new(), LineFormat::Plain, LogLevel::Error);
        logger.debug(format_args!("dropped"));
        logger.warning(format_args!("dropped"));
        assert!(logger.into_sink().is_empty());
    }

    #[test]
    fn test_timestamp_prefix_precedes_message() {
        let logger = LevelLogger::new(Vec::new(), LineFormat::Timestamp, LogLevel::Debug);
        logger.info(format_args!("prefixed"));
        let output = String::from_utf8(logger.into_sink()).unwrap();
        assert!(output.ends_with("prefixed\n"));
        // Prefix is "YYYY/MM/DD HH:MM:SS " = 20 chars ahead of the message.
        assert_eq!(output.len(), "prefixed\n".len() + 20);
        assert_eq!(&output[4..5], "/");
        assert_eq!(&output[7..8], "/");
    }

    #[test]
    fn test_concurrent_emits_do_not_interleave() {
        use std::sync::Arc;
        use std::thread;

        let logger = Arc::new(LevelLogger::new(
            Vec::new(),
            LineFormat::Plain,
            LogLevel::Debug,
        ));
        let handles: Vec<_> = (0..8)
            .map(|worker| {
                let logger = Arc::clone(&logger);
                thread::spawn(move || {
                    for _ in 0..50 {
                        logger.info(format_args!("worker {} says aaaaaaaa", worker));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let logger = Arc::try_unwrap(logger).ok().unwrap();
        let output = String::from_utf8(logger.into_sink()).unwrap();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 8 * 50);
        for line in lines {
            assert!(line.starts_with("worker "));
            assert!(line.ends_with(" says aaaaaaaa"));
        }
    }
}
