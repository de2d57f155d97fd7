//! Email channel.

use std::sync::Arc;

use crate::base::{deliver, Channel};
use crate::error::ChannelError;
use crate::registry::ChannelSpec;
use crate::transport::Transport;

/// Sends notifications to an email address.
pub struct EmailChannel {
    spec: &'static ChannelSpec,
    address: String,
    transport: Arc<dyn Transport>,
}

impl EmailChannel {
    pub fn new(
        spec: &'static ChannelSpec,
        address: impl Into<String>,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            spec,
            address: address.into(),
            transport,
        }
    }

    /// Registry constructor.
    pub fn boxed(
        spec: &'static ChannelSpec,
        address: String,
        transport: Arc<dyn Transport>,
    ) -> Box<dyn Channel> {
        Box::new(Self::new(spec, address, transport))
    }
}

impl Channel for EmailChannel {
    fn spec(&self) -> &'static ChannelSpec {
        self.spec
    }

    fn destination(&self) -> &str {
        &self.address
    }

    fn send(&self, message: &str) -> Result<(), ChannelError> {
        deliver(self.spec, &self.address, message, &self.transport)
    }
}
