//! Channel error taxonomy.

use thiserror::Error;

/// Errors raised by the factory and by `Channel::send`.
///
/// None of these are retried; they go straight back to the caller.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ChannelError {
    /// The factory was asked for a transport it has no entry for.
    #[error("Unknown notification type: {0}")]
    UnknownChannelType(String),

    /// `send` was called on a channel with an empty destination.
    #[error("{label} required")]
    MissingDestination { label: &'static str },

    /// A `Channel` implementor left `send` at its default body.
    #[error("send is not implemented for {channel}")]
    NotImplemented { channel: &'static str },

    /// The transport sink failed to emit the delivery.
    #[error("transport failed: {0}")]
    Transport(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            ChannelError::UnknownChannelType("fax".into()).to_string(),
            "Unknown notification type: fax"
        );
        assert_eq!(
            ChannelError::MissingDestination { label: "Phone Number" }.to_string(),
            "Phone Number required"
        );
        assert_eq!(
            ChannelError::NotImplemented { channel: "SMS" }.to_string(),
            "send is not implemented for SMS"
        );
    }
}
