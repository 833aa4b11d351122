use uuid::Uuid;

use crate::{Author, Error, PostId, Time, UserId, STUB_UUID};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct CommentId(pub Uuid);

impl CommentId {
    pub fn stub() -> CommentId {
        CommentId(STUB_UUID)
    }
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Comment {
    pub id: CommentId,
    pub post_id: PostId,
    pub author: Author,
    pub content: String,
    pub created_at: Time,

    /// True once the author has saved at least one edit
    #[serde(default)]
    pub edited: bool,

    #[serde(default)]
    pub num_likes: i64,

    /// Child comments, oldest first. Defaulted so that shallow server
    /// representations (the PATCH response) still deserialize.
    #[serde(default)]
    pub children: Vec<Comment>,
}

impl Comment {
    /// Display guard for the edit/delete affordances. The server enforces
    /// the same rule; this only decides what gets rendered.
    pub fn editable_by(&self, viewer: &UserId) -> bool {
        self.author.id == *viewer
    }

    pub fn validate(&self) -> Result<(), Error> {
        crate::validate_string(&self.content)?;
        crate::validate_time(&self.created_at)?;
        for child in &self.children {
            child.validate()?;
        }
        Ok(())
    }
}

/// Body of the PATCH on a per-post, per-comment resource
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct UpdateComment {
    pub content: String,
}

impl UpdateComment {
    pub fn validate(&self) -> Result<(), Error> {
        crate::validate_string(&self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comment_by(author_id: Uuid) -> Comment {
        Comment {
            id: CommentId(Uuid::from_u128(1)),
            post_id: PostId(Uuid::from_u128(2)),
            author: Author {
                id: UserId(author_id),
                name: Some(String::from("someone")),
                first_name: None,
                last_name: None,
                photo: None,
                verified: false,
            },
            content: String::from("hello"),
            created_at: chrono::Utc::now(),
            edited: false,
            num_likes: 0,
            children: Vec::new(),
        }
    }

    #[test]
    fn only_the_author_may_edit() {
        let c = comment_by(Uuid::from_u128(42));
        assert!(c.editable_by(&UserId(Uuid::from_u128(42))));
        assert!(!c.editable_by(&UserId(Uuid::from_u128(43))));
        assert!(!c.editable_by(&UserId::stub()));
    }

    #[test]
    fn validation_recurses_into_children() {
        let mut c = comment_by(Uuid::from_u128(42));
        assert_eq!(c.validate(), Ok(()));
        let mut child = comment_by(Uuid::from_u128(43));
        child.content = String::from("bad\0content");
        c.children.push(child);
        assert_eq!(
            c.validate(),
            Err(Error::NullByteInString(String::from("bad\0content")))
        );
    }

    #[test]
    fn update_payload_validation() {
        assert_eq!(
            UpdateComment {
                content: String::from("fine")
            }
            .validate(),
            Ok(())
        );
        assert!(UpdateComment {
            content: String::from("\0")
        }
        .validate()
        .is_err());
    }

    #[test]
    fn shallow_representation_deserializes() {
        // what a PATCH response looks like: no children, no counters
        let json = serde_json::json!({
            "id": "00000000-0000-0000-0000-000000000001",
            "post_id": "00000000-0000-0000-0000-000000000002",
            "author": { "id": "00000000-0000-0000-0000-000000000003" },
            "content": "updated text",
            "created_at": "2022-11-03T12:00:00Z",
        });
        let c: Comment = serde_json::from_value(json).expect("parsing shallow comment");
        assert_eq!(c.content, "updated text");
        assert!(!c.edited);
        assert_eq!(c.num_likes, 0);
        assert!(c.children.is_empty());
    }
}
