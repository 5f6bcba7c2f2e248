//! Channel-level errors shared by every mailbox in the system.

use std::time::Duration;

/// Failures of the request/reply plumbing itself.
///
/// These are transport failures, not domain failures: domain errors travel
/// inside the reply payload. Callers at the domain boundary map these onto
/// their own taxonomy (e.g. unavailable vs. timed-out upstream).
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ChannelError {
    /// The receiving actor is gone; the request could not be delivered.
    #[error("channel closed")]
    Closed,
    /// The responder dropped the reply envelope without answering.
    #[error("reply dropped")]
    ReplyDropped,
    /// No reply arrived within the caller's window.
    #[error("no reply within {0:?}")]
    Timeout(Duration),
}
