//! Channel trait: the transport-independent "send a message to a
//! destination" capability.
//!
//! Each channel implements this trait to:
//! - `spec()`: the registry entry it was built from (name and labels)
//! - `destination()`: the opaque address it sends to
//! - `send()`: deliver one message
//!
//! Construction never validates the destination; `send` does.

use std::fmt;
use std::sync::Arc;

use crate::error::ChannelError;
use crate::registry::ChannelSpec;
use crate::transport::Transport;

// ─────────────────────────────────────────────
// Delivery
// ─────────────────────────────────────────────

/// One validated message on its way to a transport sink.
///
/// Displays as `Sending <Kind> to <destination>: <message>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Delivery {
    /// Display name of the sending channel (e.g. `"SMS"`).
    pub channel: &'static str,
    pub destination: String,
    pub message: String,
}

impl fmt::Display for Delivery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sending {} to {}: {}",
            self.channel, self.destination, self.message
        )
    }
}

// ─────────────────────────────────────────────
// Channel trait
// ─────────────────────────────────────────────

/// Every notification channel implements this trait.
///
/// The registry hands out `Box<dyn Channel>`; callers only ever see this
/// interface.
pub trait Channel: Send + Sync {
    /// The registry entry this channel was built from.
    fn spec(&self) -> &'static ChannelSpec;

    /// The destination as given at construction, unvalidated.
    fn destination(&self) -> &str;

    /// Send `message` to this channel's destination.
    ///
    /// The default body fails with `NotImplemented`; concrete channels
    /// must override it.
    fn send(&self, message: &str) -> Result<(), ChannelError> {
        let _ = message;
        Err(ChannelError::NotImplemented {
            channel: self.spec().display_name,
        })
    }
}

impl fmt::Debug for dyn Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Channel")
            .field("name", &self.spec().name)
            .field("destination", &self.destination())
            .finish()
    }
}

/// Presence-check the destination, then hand the delivery to `transport`.
///
/// Shared by the concrete channels' `send` implementations.
pub fn deliver(
    spec: &'static ChannelSpec,
    destination: &str,
    message: &str,
    transport: &Arc<dyn Transport>,
) -> Result<(), ChannelError> {
    if destination.is_empty() {
        return Err(ChannelError::MissingDestination {
            label: spec.destination_label,
        });
    }

    transport.deliver(&Delivery {
        channel: spec.display_name,
        destination: destination.to_string(),
        message: message.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::lookup;
    use crate::transport::MemoryTransport;

    /// A channel that never overrides `send`.
    struct BareChannel;

    impl Channel for BareChannel {
        fn spec(&self) -> &'static ChannelSpec {
            lookup("email").unwrap()
        }

        fn destination(&self) -> &str {
            "someone@example.com"
        }
    }

    #[test]
    fn test_default_send_is_not_implemented() {
        let ch = BareChannel;
        let err = ch.send("hello").unwrap_err();
        assert_eq!(err, ChannelError::NotImplemented { channel: "Email" });
    }

    #[test]
    fn test_delivery_line() {
        let d = Delivery {
            channel: "Email",
            destination: "nexus@email.com".into(),
            message: "Hello!".into(),
        };
        assert_eq!(d.to_string(), "Sending Email to nexus@email.com: Hello!");
    }

    #[test]
    fn test_deliver_rejects_empty_destination() {
        let memory = Arc::new(MemoryTransport::new());
        let transport: Arc<dyn Transport> = memory.clone();

        let err = deliver(lookup("telegram").unwrap(), "", "Yo!", &transport).unwrap_err();
        assert_eq!(err.to_string(), "Telegram ID required");
        assert!(memory.lines().is_empty());
    }

    #[test]
    fn test_debug_for_dyn_channel() {
        let ch: Box<dyn Channel> = Box::new(BareChannel);
        let dbg = format!("{ch:?}");
        assert!(dbg.contains("email"));
        assert!(dbg.contains("someone@example.com"));
    }
}
