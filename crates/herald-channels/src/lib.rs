//! Herald Channels: notification channels and the factory that builds them.
//!
//! This crate provides:
//! - **base**: the `Channel` trait, `Delivery`, and the shared `deliver` check
//! - **transport**: where a successful send ends up (`ConsoleTransport`, `MemoryTransport`)
//! - **email** / **sms** / **telegram**: the concrete channels
//! - **registry**: `ChannelSpec`, the static channel table, and `create()`

pub mod base;
pub mod email;
pub mod error;
pub mod registry;
pub mod sms;
pub mod telegram;
pub mod transport;

pub use base::{deliver, Channel, Delivery};
pub use error::ChannelError;
pub use registry::{channel_names, create, lookup, ChannelRegistry, ChannelSpec, CHANNELS};
pub use transport::{ConsoleTransport, MemoryTransport, Transport};
