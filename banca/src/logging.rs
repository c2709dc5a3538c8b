use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use chrono::Local;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::{
    fmt, layer::Context, layer::SubscriberExt, registry::LookupSpan, util::SubscriberInitExt,
    EnvFilter, Layer,
};

use crate::log_buffer::{LogBuffer, LogEntry};

/// Start tracing: a session log file plus the in-memory buffer behind the logs screen.
///
/// The file lands in `~/.config/banca/logs/banca-YYYY-MM-DD-HH-MM-SS.log`;
/// its path is returned. `RUST_LOG` overrides the default `info` filter.
pub fn init_logging_with_buffer(buffer: LogBuffer) -> Result<PathBuf> {
    let logs_dir = logs_dir()?;
    let file_name = format!("banca-{}.log", Local::now().format("%Y-%m-%d-%H-%M-%S"));

    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(&logs_dir, &file_name));
    let file_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(LogBufferLayer::new(buffer))
        .init();

    // The writer thread must outlive every event of the session
    std::mem::forget(guard);

    Ok(logs_dir.join(file_name))
}

fn logs_dir() -> Result<PathBuf> {
    let dir = dirs::config_dir()
        .context("Could not find config directory")?
        .join("banca")
        .join("logs");
    create_dir(&dir)?;
    Ok(dir)
}

fn create_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).with_context(|| format!("Creating {}", dir.display()))
}

/// Copies every event into a [`LogBuffer`]
pub struct LogBufferLayer {
    buffer: LogBuffer,
}

impl LogBufferLayer {
    pub fn new(buffer: LogBuffer) -> Self {
        Self { buffer }
    }
}

impl<S> Layer<S> for LogBufferLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = EntryVisitor::default();
        event.record(&mut visitor);

        let metadata = event.metadata();
        self.buffer.push(LogEntry {
            timestamp: Local::now(),
            level: *metadata.level(),
            target: metadata.target().to_string(),
            message: visitor.into_message(),
        });
    }
}

/// Collects the message and appends other fields as `key=value`
#[derive(Default)]
struct EntryVisitor {
    message: String,
    fields: String,
}

impl EntryVisitor {
    fn into_message(self) -> String {
        match (self.message.is_empty(), self.fields.is_empty()) {
            (_, true) => self.message,
            (true, false) => self.fields,
            (false, false) => format!("{} {}", self.message, self.fields),
        }
    }

    fn push_field(&mut self, field: &Field, value: impl std::fmt::Display) {
        if !self.fields.is_empty() {
            self.fields.push(' ');
        }
        let _ = write!(self.fields, "{}={}", field.name(), value);
    }
}

impl Visit for EntryVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.push_field(field, value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        } else {
            self.push_field(field, format_args!("{:?}", value));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture(emit: impl FnOnce()) -> Vec<LogEntry> {
        let buffer = LogBuffer::new(10);
        let subscriber = tracing_subscriber::registry().with(LogBufferLayer::new(buffer.clone()));
        tracing::subscriber::with_default(subscriber, emit);
        buffer.get_entries()
    }

    #[test]
    fn test_buffer_layer_captures_messages() {
        let entries = capture(|| {
            tracing::info!("Transition to {}", "home");
            tracing::warn!("Scanner idle");
        });

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].message, "Transition to home");
        assert_eq!(entries[1].level, tracing::Level::WARN);
        assert_eq!(entries[1].message, "Scanner idle");
    }

    #[test]
    fn test_fields_follow_the_message() {
        let entries = capture(|| {
            tracing::info!(screen = "qr-scan", ticks = 3, "Scanner idle");
            tracing::debug!(flow = "loan");
        });

        assert_eq!(entries[0].message, "Scanner idle screen=qr-scan ticks=3");
        assert_eq!(entries[1].message, "flow=loan");
    }
}
