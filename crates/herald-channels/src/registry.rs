//! Channel registry: the static table of known transports and the factory
//! that builds channels from it.
//!
//! Adding a transport means adding one `ChannelSpec` entry to `CHANNELS`.
//! The `Channel` trait, `lookup`, and `create` never change.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::base::Channel;
use crate::email::EmailChannel;
use crate::error::ChannelError;
use crate::sms::SmsChannel;
use crate::telegram::TelegramChannel;
use crate::transport::{ConsoleTransport, Transport};

// ─────────────────────────────────────────────
// ChannelSpec
// ─────────────────────────────────────────────

/// Static description of one transport.
#[derive(Clone, Debug)]
pub struct ChannelSpec {
    /// Lowercase lookup key (e.g. `"telegram"`).
    pub name: &'static str,
    /// Name used in the delivery line (e.g. `"SMS"`).
    pub display_name: &'static str,
    /// What the destination is called in `MissingDestination` errors.
    pub destination_label: &'static str,
    /// What the destination string is, for help output.
    pub destination_hint: &'static str,
    /// Builds the channel. The destination is stored unvalidated.
    pub build: fn(&'static ChannelSpec, String, Arc<dyn Transport>) -> Box<dyn Channel>,
}

/// Every transport Herald can build, in listing order.
pub static CHANNELS: &[ChannelSpec] = &[
    ChannelSpec {
        name: "email",
        display_name: "Email",
        destination_label: "Email",
        destination_hint: "email address",
        build: EmailChannel::boxed,
    },
    ChannelSpec {
        name: "sms",
        display_name: "SMS",
        destination_label: "Phone Number",
        destination_hint: "phone number",
        build: SmsChannel::boxed,
    },
    ChannelSpec {
        name: "telegram",
        display_name: "Telegram",
        destination_label: "Telegram ID",
        destination_hint: "account id",
        build: TelegramChannel::boxed,
    },
];

/// Find the spec for `channel_type` in `CHANNELS`, ignoring ASCII case.
pub fn lookup(channel_type: &str) -> Option<&'static ChannelSpec> {
    find_in(CHANNELS, channel_type)
}

/// Registry keys, in table order.
pub fn channel_names() -> Vec<&'static str> {
    CHANNELS.iter().map(|spec| spec.name).collect()
}

fn find_in(specs: &'static [ChannelSpec], channel_type: &str) -> Option<&'static ChannelSpec> {
    specs
        .iter()
        .find(|spec| spec.name.eq_ignore_ascii_case(channel_type))
}

// ─────────────────────────────────────────────
// Registry
// ─────────────────────────────────────────────

/// Builds channels from a spec table; every channel shares one transport sink.
#[derive(Clone)]
pub struct ChannelRegistry {
    specs: &'static [ChannelSpec],
    transport: Arc<dyn Transport>,
}

impl ChannelRegistry {
    /// Registry over `CHANNELS` whose channels print to stdout.
    pub fn new() -> Self {
        Self::with_transport(Arc::new(ConsoleTransport))
    }

    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self::with_specs(CHANNELS, transport)
    }

    /// Registry over a custom spec table.
    pub fn with_specs(specs: &'static [ChannelSpec], transport: Arc<dyn Transport>) -> Self {
        Self { specs, transport }
    }

    /// Build the channel registered under `channel_type`.
    ///
    /// Fails with `UnknownChannelType` for anything not in the table.
    /// The destination is not checked here; `send` does that.
    pub fn create(
        &self,
        channel_type: &str,
        destination: &str,
    ) -> Result<Box<dyn Channel>, ChannelError> {
        let Some(spec) = find_in(self.specs, channel_type) else {
            warn!(channel_type, "unknown channel type");
            return Err(ChannelError::UnknownChannelType(channel_type.to_string()));
        };

        debug!(channel = spec.name, destination, "creating channel");
        Ok((spec.build)(
            spec,
            destination.to_string(),
            Arc::clone(&self.transport),
        ))
    }
}

impl Default for ChannelRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a channel that prints to stdout.
///
/// Shorthand for `ChannelRegistry::new().create(..)`.
pub fn create(channel_type: &str, destination: &str) -> Result<Box<dyn Channel>, ChannelError> {
    ChannelRegistry::new().create(channel_type, destination)
}
