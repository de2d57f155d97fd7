//! SMS channel. Phone numbers are opaque strings; only presence is checked.

use std::sync::Arc;

use crate::base::{deliver, Channel};
use crate::error::ChannelError;
use crate::registry::ChannelSpec;
use crate::transport::Transport;

/// Sends notifications to a phone number.
pub struct SmsChannel {
    spec: &'static ChannelSpec,
    phone_number: String,
    transport: Arc<dyn Transport>,
}

impl SmsChannel {
    pub fn new(
        spec: &'static ChannelSpec,
        phone_number: impl Into<String>,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            spec,
            phone_number: phone_number.into(),
            transport,
        }
    }

    /// Registry constructor.
    pub fn boxed(
        spec: &'static ChannelSpec,
        phone_number: String,
        transport: Arc<dyn Transport>,
    ) -> Box<dyn Channel> {
        Box::new(Self::new(spec, phone_number, transport))
    }
}

impl Channel for SmsChannel {
    fn spec(&self) -> &'static ChannelSpec {
        self.spec
    }

    fn destination(&self) -> &str {
        &self.phone_number
    }

    fn send(&self, message: &str) -> Result<(), ChannelError> {
        deliver(self.spec, &self.phone_number, message, &self.transport)
    }
}
