use crate::{Comment, CommentId};

/// State-changing intents a comment node can signal to the thread that owns
/// it. The thread applies them to its in-memory tree; nothing here reaches
/// the network.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum Action {
    /// Replace the stored comment with this (server-returned) representation
    SetComment(Comment),
    DeleteComment(CommentId),
}
