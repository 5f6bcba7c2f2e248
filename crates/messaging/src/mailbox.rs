//! The sender half of an actor's channel.

use std::time::Duration;

use tokio::sync::{mpsc, oneshot};

use crate::error::ChannelError;
use crate::message::ReplyTo;

/// A cheap, cloneable handle for sending messages to an actor.
///
/// `Mailbox<M>` holds only the sender side of the actor's mpsc channel, so
/// cloning it and sharing it across tasks costs nothing. Dropping every
/// clone closes the channel and lets the actor shut down.
#[derive(Debug)]
pub struct Mailbox<M> {
    sender: mpsc::Sender<M>,
}

// Manual impl: `#[derive(Clone)]` would require `M: Clone`, which messages
// carrying oneshot senders can never satisfy.
impl<M> Clone for Mailbox<M> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<M: Send> Mailbox<M> {
    pub fn new(sender: mpsc::Sender<M>) -> Self {
        Self { sender }
    }

    /// Fire-and-forget delivery of a message.
    pub async fn send(&self, msg: M) -> Result<(), ChannelError> {
        self.sender.send(msg).await.map_err(|_| ChannelError::Closed)
    }

    /// Single request, single awaited reply.
    ///
    /// Builds the oneshot reply envelope, hands it to `make_msg` so the
    /// caller can embed it in the matching request variant, sends the
    /// message, then awaits exactly one reply within `window`.
    ///
    /// Failure mapping: the request could not be delivered → [`ChannelError::Closed`];
    /// the responder dropped the envelope → [`ChannelError::ReplyDropped`];
    /// the window elapsed → [`ChannelError::Timeout`].
    ///
    /// Dropping the returned future cancels the exchange: the reply receiver
    /// is dropped with it, and the responder's eventual send fails harmlessly.
    pub async fn request<R>(
        &self,
        window: Duration,
        make_msg: impl FnOnce(ReplyTo<R>) -> M,
    ) -> Result<R, ChannelError> {
        let (reply_to, reply) = oneshot::channel();
        self.sender
            .send(make_msg(reply_to))
            .await
            .map_err(|_| ChannelError::Closed)?;
        match tokio::time::timeout(window, reply).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(_)) => Err(ChannelError::ReplyDropped),
            Err(_) => Err(ChannelError::Timeout(window)),
        }
    }
}
