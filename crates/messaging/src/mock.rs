//! Mock mailboxes for testing client logic without spawning actors.
//!
//! Three shapes cover the failure modes a client has to survive:
//!
//! - [`mock_mailbox`] — hands the test the raw receiver so it can inspect
//!   each request and script the reply by hand. The workhorse for testing
//!   orchestration logic around a channel.
//! - [`unreachable_mailbox`] — a channel whose receiver is already gone;
//!   every send fails with [`ChannelError::Closed`]. Simulates a dead
//!   upstream.
//! - [`silent_mailbox`] — accepts every request and holds it forever
//!   without answering, so pending requests run into their timeout window.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use orders_messaging::mock::mock_mailbox;
//! use orders_messaging::ReplyTo;
//!
//! enum Lookup {
//!     ById { id: u32, reply_to: ReplyTo<String> },
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let (mailbox, mut requests) = mock_mailbox::<Lookup>(4);
//!
//! let call = tokio::spawn(async move {
//!     mailbox
//!         .request(Duration::from_secs(1), |reply_to| Lookup::ById { id: 7, reply_to })
//!         .await
//! });
//!
//! let Lookup::ById { id, reply_to } = requests.recv().await.unwrap();
//! assert_eq!(id, 7);
//! reply_to.send("seven".to_string()).unwrap();
//!
//! assert_eq!(call.await.unwrap().unwrap(), "seven");
//! # }
//! ```
//!
//! [`ChannelError::Closed`]: crate::error::ChannelError::Closed

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::mailbox::Mailbox;

/// Creates a mailbox plus the raw receiver, letting a test play the actor.
pub fn mock_mailbox<M: Send>(capacity: usize) -> (Mailbox<M>, mpsc::Receiver<M>) {
    let (sender, receiver) = mpsc::channel(capacity);
    (Mailbox::new(sender), receiver)
}

/// A mailbox whose receiving side is already gone.
///
/// Every send or request fails immediately with `ChannelError::Closed`.
pub fn unreachable_mailbox<M: Send>() -> Mailbox<M> {
    let (sender, receiver) = mpsc::channel(1);
    drop(receiver);
    Mailbox::new(sender)
}

/// A mailbox whose actor accepts requests but never answers them.
///
/// Received messages are held alive (their reply envelopes included) until
/// the mailbox closes, so callers exhaust their timeout window instead of
/// seeing a dropped envelope. The returned handle keeps the hoarding task
/// joinable.
pub fn silent_mailbox<M: Send + 'static>(capacity: usize) -> (Mailbox<M>, JoinHandle<()>) {
    let (sender, mut receiver) = mpsc::channel(capacity);
    let handle = tokio::spawn(async move {
        let mut held = Vec::new();
        while let Some(msg) = receiver.recv().await {
            held.push(msg);
        }
    });
    (Mailbox::new(sender), handle)
}
