//! Telegram channel, addressed by account id.

use std::sync::Arc;

use crate::base::{deliver, Channel};
use crate::error::ChannelError;
use crate::registry::ChannelSpec;
use crate::transport::Transport;

/// Sends notifications to a Telegram account id.
pub struct TelegramChannel {
    spec: &'static ChannelSpec,
    account_id: String,
    transport: Arc<dyn Transport>,
}

impl TelegramChannel {
    pub fn new(
        spec: &'static ChannelSpec,
        account_id: impl Into<String>,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            spec,
            account_id: account_id.into(),
            transport,
        }
    }

    /// Registry constructor.
    pub fn boxed(
        spec: &'static ChannelSpec,
        account_id: String,
        transport: Arc<dyn Transport>,
    ) -> Box<dyn Channel> {
        Box::new(Self::new(spec, account_id, transport))
    }
}

impl Channel for TelegramChannel {
    fn spec(&self) -> &'static ChannelSpec {
        self.spec
    }

    fn destination(&self) -> &str {
        &self.account_id
    }

    fn send(&self, message: &str) -> Result<(), ChannelError> {
        deliver(self.spec, &self.account_id, message, &self.transport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::lookup;
    use crate::transport::MemoryTransport;

    #[test]
    fn test_send_writes_line() {
        let memory = Arc::new(MemoryTransport::new());
        let ch = TelegramChannel::new(lookup("telegram").unwrap(), "telegram_user_42", memory.clone());

        ch.send("Yo!").unwrap();
        assert_eq!(memory.lines(), vec!["Sending Telegram to telegram_user_42: Yo!"]);
    }

    #[test]
    fn test_empty_account_id() {
        let ch = TelegramChannel::new(lookup("telegram").unwrap(), "", Arc::new(MemoryTransport::new()));
        let err = ch.send("Yo!").unwrap_err();
        assert_eq!(err, ChannelError::MissingDestination { label: "Telegram ID" });
    }
}
