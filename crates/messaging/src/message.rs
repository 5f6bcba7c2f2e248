//! Reply envelope carried inside request messages.

use tokio::sync::oneshot;

/// One-shot reply channel embedded in a request message.
///
/// A request variant that expects an answer carries a `ReplyTo<T>` field;
/// the responder sends exactly one `T` through it. If the requester has
/// gone away (cancelled), the send fails and the responder ignores it.
pub type ReplyTo<T> = oneshot::Sender<T>;
