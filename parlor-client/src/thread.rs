use crate::{
    api::{Action, Comment, CommentId, Post, ThreadResponse, UserId},
    CommentTreeExt,
};

/// The thread state shared by every comment node under one post: the
/// viewer's identity, the post, and the comment forest. This is the single
/// owner of the displayed tree; nodes request changes through [`Action`]s
/// and never mutate it directly.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ThreadDump {
    pub viewer: UserId,
    pub post: Post,
    pub comments: Vec<Comment>,
}

impl ThreadDump {
    pub fn new(viewer: UserId, thread: ThreadResponse) -> ThreadDump {
        ThreadDump {
            viewer,
            post: thread.post,
            comments: thread.comments,
        }
    }

    pub fn find(&self, id: CommentId) -> Option<&Comment> {
        self.comments.find(id)
    }

    /// Replace the stored comment with the server-returned representation.
    /// PATCH responses are shallow, so children already present locally are
    /// kept when the incoming representation carries none.
    pub fn set_comment(&mut self, comment: Comment) -> bool {
        match self.comments.find_mut(comment.id) {
            None => false,
            Some(stored) => {
                let children = std::mem::take(&mut stored.children);
                *stored = comment;
                if stored.children.is_empty() {
                    stored.children = children;
                }
                true
            }
        }
    }

    pub fn delete_comment(&mut self, id: CommentId) -> Option<Comment> {
        self.comments.remove_comment(id)
    }

    pub fn add_reply(&mut self, parent: CommentId, reply: Comment) -> bool {
        match self.comments.find_mut(parent) {
            None => false,
            Some(parent) => {
                parent.children.push(reply);
                true
            }
        }
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::SetComment(c) => {
                let id = c.id;
                if !self.set_comment(c) {
                    tracing::warn!(?id, "got comment update for comment not in thread");
                }
            }
            Action::DeleteComment(id) => {
                if self.delete_comment(id).is_none() {
                    tracing::warn!(?id, "got comment removal for comment not in thread");
                }
            }
        }
    }

    pub fn comment_count(&self) -> usize {
        self.comments.count()
    }
}
