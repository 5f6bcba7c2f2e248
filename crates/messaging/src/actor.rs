//! The generic actor run loop.
//!
//! A [`MessageHandler`] is the business half: it owns some state and knows
//! how to process one message. The [`MessageActor`] is the plumbing half:
//! it owns the receiving end of the channel and drives the handler
//! sequentially until every mailbox clone is dropped.

use async_trait::async_trait;
use tokio::sync::mpsc;
use tracing::info;

use crate::mailbox::Mailbox;

/// Something that processes messages from a mailbox.
///
/// Handlers run inside a [`MessageActor`] task and have exclusive access to
/// their own state while handling a message — no locking is ever required.
/// A handler that answers requests sends the reply through the [`ReplyTo`]
/// envelope embedded in the message; a send failure means the requester has
/// gone away and is ignored.
///
/// [`ReplyTo`]: crate::message::ReplyTo
#[async_trait]
pub trait MessageHandler: Send + 'static {
    type Message: Send + 'static;

    /// Short name used in logs; defaults to the bare type name.
    fn name() -> &'static str {
        std::any::type_name::<Self>()
            .rsplit("::")
            .next()
            .unwrap_or("handler")
    }

    async fn handle(&mut self, msg: Self::Message);
}

/// Owns an mpsc receiver and runs a handler over it.
///
/// Created together with its [`Mailbox`]; spawn [`MessageActor::run`] on a
/// Tokio task and hand the mailbox to whoever needs to talk to the handler.
pub struct MessageActor<H: MessageHandler> {
    receiver: mpsc::Receiver<H::Message>,
    handler: H,
}

impl<H: MessageHandler> MessageActor<H> {
    /// Creates the actor and its mailbox.
    ///
    /// `capacity` bounds the channel; senders wait when it is full.
    pub fn new(handler: H, capacity: usize) -> (Self, Mailbox<H::Message>) {
        let (sender, receiver) = mpsc::channel(capacity);
        (Self { receiver, handler }, Mailbox::new(sender))
    }

    /// Runs the event loop, processing messages until the channel closes.
    ///
    /// Messages are handled strictly one at a time in arrival order. The
    /// loop exits when the last mailbox clone is dropped, which is how the
    /// system performs graceful shutdown.
    pub async fn run(mut self) {
        let name = H::name();
        info!(actor = name, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            self.handler.handle(msg).await;
        }

        info!(actor = name, "Shutdown");
    }
}
