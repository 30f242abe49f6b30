//! Structured logging for the generator binary
//!
//! The library only emits `tracing` events; installing a subscriber is left to
//! the binary (or to tests). [`init_logging`] sets up a `tracing-subscriber`
//! fmt layer with an [`EnvFilter`], printing either JSON lines or a pretty,
//! human-oriented format.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Log format: JSON for machines, pretty-print for people
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

impl LogFormat {
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Pretty, // Default to pretty for a CLI
        }
    }
}

/// Install the global subscriber
///
/// `filter` uses `EnvFilter` directive syntax (`info`, `dto2mvc=debug`, ...);
/// an unparsable filter falls back to `info`. Calling this more than once is
/// harmless: later calls leave the first subscriber in place.
pub fn init_logging(format: LogFormat, filter: &str) {
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(env_filter);

    let result = match format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_target(true).with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Pretty => registry
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .try_init(),
    };

    if result.is_err() {
        tracing::debug!("global subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parse() {
        assert_eq!(LogFormat::parse("json"), LogFormat::Json);
        assert_eq!(LogFormat::parse("JSON"), LogFormat::Json);
        assert_eq!(LogFormat::parse("pretty"), LogFormat::Pretty);
        assert_eq!(LogFormat::parse("anything"), LogFormat::Pretty);
    }

    #[test]
    fn test_init_logging_twice_is_harmless() {
        init_logging(LogFormat::Pretty, "debug");
        init_logging(LogFormat::Json, "not a [valid filter");
    }
}
