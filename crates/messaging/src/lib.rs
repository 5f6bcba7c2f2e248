//! # Orders Messaging
//!
//! Request/reply plumbing for the order management system. Every boundary in
//! the system — the product validation channel and the order store — is an
//! actor behind a [`Mailbox`], and this crate owns the pattern once so the
//! domain crates never touch raw channels.
//!
//! ## The Pattern
//!
//! A request message carries its own reply envelope (a [`ReplyTo`] oneshot
//! sender). The caller builds the envelope, embeds it in the message, sends
//! it through the mailbox, and awaits exactly one reply within a configured
//! window. The responder is a [`MessageHandler`] driven by a
//! [`MessageActor`] run loop in its own Tokio task.
//!
//! ## Concurrency Model
//!
//! - Each actor processes its messages **sequentially** — the handler has
//!   exclusive ownership of its state, so no locks are needed. A handler
//!   that applies a multi-row write does so atomically from the point of
//!   view of every other caller.
//! - Multiple actors run in **parallel**, one Tokio task each.
//! - Cancellation is free: dropping a pending [`Mailbox::request`] future
//!   drops the reply receiver, and the responder's answer lands nowhere.
//!
//! ## Errors
//!
//! The plumbing distinguishes exactly three failures ([`ChannelError`]):
//! the channel is closed, the responder dropped the envelope, or no reply
//! arrived in time. Anything domain-shaped travels inside the reply payload.
//!
//! ## Testing
//!
//! The [`mock`] module provides mailboxes for testing client logic without
//! spawning actors: script replies by hand, simulate a dead upstream, or
//! hold requests forever to exercise timeout paths.

pub mod actor;
pub mod error;
pub mod mailbox;
pub mod message;
pub mod mock;
pub mod tracing;

pub use actor::{MessageActor, MessageHandler};
pub use error::ChannelError;
pub use mailbox::Mailbox;
pub use message::ReplyTo;
pub use tracing::setup_tracing;
