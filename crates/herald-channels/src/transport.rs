//! Transport sinks: the side effect of a successful send.
//!
//! Sends are simulated: a sink receives the `Delivery` and emits its line.
//! `ConsoleTransport` prints to stdout, `MemoryTransport` keeps the lines
//! for inspection.

use std::io::Write;
use std::sync::Mutex;

use tracing::info;

use crate::base::Delivery;
use crate::error::ChannelError;

/// Receives validated deliveries from channels.
pub trait Transport: Send + Sync {
    fn deliver(&self, delivery: &Delivery) -> Result<(), ChannelError>;
}

/// Writes one line per delivery to stdout.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleTransport;

impl ConsoleTransport {
    fn write_line(out: &mut impl Write, delivery: &Delivery) -> Result<(), ChannelError> {
        writeln!(out, "{delivery}").map_err(|e| ChannelError::Transport(e.to_string()))
    }
}

impl Transport for ConsoleTransport {
    fn deliver(&self, delivery: &Delivery) -> Result<(), ChannelError> {
        Self::write_line(&mut std::io::stdout().lock(), delivery)?;

        info!(
            channel = delivery.channel,
            destination = %delivery.destination,
            "notification sent"
        );
        Ok(())
    }
}

/// Records delivery lines in memory.
#[derive(Debug, Default)]
pub struct MemoryTransport {
    lines: Mutex<Vec<String>>,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every line delivered so far, oldest first.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl Transport for MemoryTransport {
    fn deliver(&self, delivery: &Delivery) -> Result<(), ChannelError> {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(delivery.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Delivery {
        Delivery {
            channel: "SMS",
            destination: "1234567890".into(),
            message: "Hi!".into(),
        }
    }

    /// Writer that rejects every write.
    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_memory_transport_records_lines() {
        let t = MemoryTransport::new();
        t.deliver(&sample()).unwrap();
        t.deliver(&sample()).unwrap();
        assert_eq!(
            t.lines(),
            vec!["Sending SMS to 1234567890: Hi!", "Sending SMS to 1234567890: Hi!"]
        );
    }

    #[test]
    fn test_console_writes_exactly_one_line() {
        let mut out = Vec::new();
        ConsoleTransport::write_line(&mut out, &sample()).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Sending SMS to 1234567890: Hi!\n"
        );
    }

    #[test]
    fn test_console_write_failure_is_transport_error() {
        let err = ConsoleTransport::write_line(&mut BrokenPipe, &sample()).unwrap_err();
        assert!(matches!(err, ChannelError::Transport(msg) if msg.contains("pipe closed")));
    }

    #[test]
    fn test_console_transport_deliver_succeeds() {
        ConsoleTransport.deliver(&sample()).unwrap();
    }
}
