use uuid::Uuid;

use crate::{Author, Comment, Time, STUB_UUID};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct PostId(pub Uuid);

impl PostId {
    pub fn stub() -> PostId {
        PostId(STUB_UUID)
    }
}

/// Minimal post representation: just what the thread view needs to show
/// above its comments.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Post {
    pub id: PostId,
    pub author: Author,
    pub content: String,
    pub created_at: Time,
}

/// Response of the thread fetch: the post and its root comments, oldest
/// first, each carrying its full subtree.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ThreadResponse {
    pub post: Post,
    pub comments: Vec<Comment>,
}
