//! Rolling Logger
//!
//! Keeps the most recent log records in a circular buffer so a frontend can
//! show them, and optionally mirrors every record to a sink (the browser
//! console).
//!
//! Both `tracing` events and `log` records end up in the same buffer.

mod buffer;
mod layer;

use std::sync::Arc;

use thiserror::Error;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;

pub use buffer::{LogBuffer, LogRecord};
pub use layer::{LogBridge, RollingLayer, Sink};

use layer::{to_log_filter, Outputs};

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("a global logger is already installed")]
    AlreadyInitialized,
}

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Records kept in memory
    pub capacity: usize,
    pub level: LevelFilter,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            capacity: 500,
            level: LevelFilter::INFO,
        }
    }
}

impl LoggerConfig {
    pub fn with_level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }
}

/// Read access to the buffered records
#[derive(Debug, Clone)]
pub struct LogHandle {
    buffer: LogBuffer,
}

impl LogHandle {
    pub fn snapshot(&self) -> Vec<LogRecord> {
        self.buffer.snapshot()
    }

    pub fn recent(&self, n: usize) -> Vec<LogRecord> {
        self.buffer.recent(n)
    }

    pub fn clear(&self) {
        self.buffer.clear();
    }
}

/// Build the layer and bridge without installing them globally.
pub fn build(config: &LoggerConfig, sink: Option<Sink>) -> (RollingLayer, LogBridge, LogHandle) {
    let buffer = LogBuffer::new(config.capacity);
    let outputs = Arc::new(Outputs {
        buffer: buffer.clone(),
        sink,
    });
    (
        RollingLayer::new(outputs.clone()),
        LogBridge::new(outputs, config.level),
        LogHandle { buffer },
    )
}

/// Install the logger as the global `tracing` subscriber and `log` logger.
/// Can only succeed once per process.
pub fn init(config: LoggerConfig, sink: Option<Sink>) -> Result<LogHandle, LoggerError> {
    let (layer, bridge, handle) = build(&config, sink);
    let subscriber = tracing_subscriber::registry().with(config.level).with(layer);
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|_| LoggerError::AlreadyInitialized)?;
    log::set_boxed_logger(Box::new(bridge)).map_err(|_| LoggerError::AlreadyInitialized)?;
    log::set_max_level(to_log_filter(config.level));
    Ok(handle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_feeds_buffer_and_sink() {
        let mirrored = Arc::new(std::sync::Mutex::new(Vec::new()));
        let seen = mirrored.clone();
        let sink: Sink = Arc::new(move |record: &LogRecord| {
            seen.lock().unwrap().push(record.message.clone());
        });
        let config = LoggerConfig {
            capacity: 2,
            ..LoggerConfig::default()
        };

        let (layer, bridge, handle) = build(&config, Some(sink));
        let subscriber = tracing_subscriber::registry().with(layer);
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("first");
            tracing::info!("second");
        });
        log::Log::log(
            &bridge,
            &log::Record::builder()
                .level(log::Level::Warn)
                .args(format_args!("third"))
                .build(),
        );

        let kept: Vec<_> = handle.snapshot().into_iter().map(|r| r.message).collect();
        assert_eq!(kept, vec!["second", "third"]);
        assert_eq!(*mirrored.lock().unwrap(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_default_config() {
        let config = LoggerConfig::default().with_level(LevelFilter::DEBUG);
        assert_eq!(config.capacity, 500);
        assert_eq!(config.level, LevelFilter::DEBUG);
    }
}
