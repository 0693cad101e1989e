//! tracing layer and `log` bridge feeding the shared buffer.

use std::fmt::{self, Write as _};
use std::sync::Arc;

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::{Context, Layer};

use crate::buffer::{LogBuffer, LogRecord};

/// Called for every record, e.g. to mirror it to a console
pub type Sink = Arc<dyn Fn(&LogRecord) + Send + Sync>;

/// Destinations shared by the tracing layer and the `log` bridge
pub(crate) struct Outputs {
    pub(crate) buffer: LogBuffer,
    pub(crate) sink: Option<Sink>,
}

impl Outputs {
    pub(crate) fn record(&self, record: LogRecord) {
        if let Some(sink) = &self.sink {
            sink(&record);
        }
        self.buffer.push(record);
    }
}

/// Collects the `message` field and appends the rest as `key=value`
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: String,
}

impl MessageVisitor {
    fn finish(self) -> String {
        if self.fields.is_empty() {
            self.message
        } else if self.message.is_empty() {
            self.fields.trim_start().to_string()
        } else {
            format!("{}{}", self.message, self.fields)
        }
    }
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            let _ = write!(self.fields, " {}={}", field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        } else {
            let _ = write!(self.fields, " {}={:?}", field.name(), value);
        }
    }
}

pub struct RollingLayer {
    outputs: Arc<Outputs>,
}

impl RollingLayer {
    pub(crate) fn new(outputs: Arc<Outputs>) -> Self {
        Self { outputs }
    }
}

impl<S: Subscriber> Layer<S> for RollingLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        let meta = event.metadata();
        self.outputs
            .record(LogRecord::new(*meta.level(), meta.target(), visitor.finish()));
    }
}

/// Routes records from the `log` facade into the same outputs
pub struct LogBridge {
    outputs: Arc<Outputs>,
    level: log::LevelFilter,
}

impl LogBridge {
    pub(crate) fn new(outputs: Arc<Outputs>, level: LevelFilter) -> Self {
        Self {
            outputs,
            level: to_log_filter(level),
        }
    }

    pub fn level(&self) -> log::LevelFilter {
        self.level
    }
}

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &log::Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        self.outputs.record(LogRecord::new(
            to_tracing_level(record.level()),
            record.target(),
            record.args().to_string(),
        ));
    }

    fn flush(&self) {}
}

fn to_tracing_level(level: log::Level) -> Level {
    match level {
        log::Level::Error => Level::ERROR,
        log::Level::Warn => Level::WARN,
        log::Level::Info => Level::INFO,
        log::Level::Debug => Level::DEBUG,
        log::Level::Trace => Level::TRACE,
    }
}

pub(crate) fn to_log_filter(filter: LevelFilter) -> log::LevelFilter {
    match filter.into_level() {
        None => log::LevelFilter::Off,
        Some(level) if level == Level::ERROR => log::LevelFilter::Error,
        Some(level) if level == Level::WARN => log::LevelFilter::Warn,
        Some(level) if level == Level::INFO => log::LevelFilter::Info,
        Some(level) if level == Level::DEBUG => log::LevelFilter::Debug,
        Some(_) => log::LevelFilter::Trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Log;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tracing_subscriber::layer::SubscriberExt;

    fn outputs(sink: Option<Sink>) -> Arc<Outputs> {
        Arc::new(Outputs {
            buffer: LogBuffer::new(16),
            sink,
        })
    }

    #[test]
    fn test_layer_captures_message_and_fields() {
        let out = outputs(None);
        let subscriber = tracing_subscriber::registry().with(RollingLayer::new(out.clone()));

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(count = 3, "items fetched");
            tracing::warn!("offline");
        });

        let records = out.buffer.snapshot();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].message, "items fetched count=3");
        assert_eq!(records[0].level, Level::INFO);
        assert_eq!(records[1].message, "offline");
        assert_eq!(records[1].level, Level::WARN);
    }

    #[test]
    fn test_level_filter_applies() {
        let out = outputs(None);
        let subscriber = tracing_subscriber::registry()
            .with(LevelFilter::WARN)
            .with(RollingLayer::new(out.clone()));

        tracing::subscriber::with_default(subscriber, || {
            tracing::debug!("hidden");
            tracing::error!("shown");
        });

        let messages: Vec<String> = out.buffer.snapshot().into_iter().map(|r| r.message).collect();
        assert_eq!(messages, vec!["shown"]);
    }

    #[test]
    fn test_sink_sees_every_record() {
        let seen = Arc::new(AtomicUsize::new(0));
        let counter = seen.clone();
        let sink: Sink = Arc::new(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        let out = outputs(Some(sink));
        let subscriber = tracing_subscriber::registry().with(RollingLayer::new(out));

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("one");
            tracing::info!("two");
        });

        assert_eq!(seen.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_log_bridge() {
        let out = outputs(None);
        let bridge = LogBridge::new(out.clone(), LevelFilter::INFO);

        bridge.log(
            &log::Record::builder()
                .level(log::Level::Info)
                .target("zaiko")
                .args(format_args!("loaded {} items", 3))
                .build(),
        );
        bridge.log(
            &log::Record::builder()
                .level(log::Level::Debug)
                .target("zaiko")
                .args(format_args!("noise"))
                .build(),
        );

        let records = out.buffer.snapshot();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].target, "zaiko");
        assert_eq!(records[0].message, "loaded 3 items");
    }

    #[test]
    fn test_filter_conversion() {
        assert_eq!(to_log_filter(LevelFilter::OFF), log::LevelFilter::Off);
        assert_eq!(to_log_filter(LevelFilter::WARN), log::LevelFilter::Warn);
        assert_eq!(to_log_filter(LevelFilter::TRACE), log::LevelFilter::Trace);
    }
}
