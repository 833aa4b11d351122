use std::str::FromStr;

use anyhow::{anyhow, Context};
use serde_json::json;
use uuid::Uuid;

use crate::Time;

#[derive(Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Unknown error: {0}")]
    Unknown(String),

    #[error("Permission denied")]
    PermissionDenied,

    #[error("Comment not found {0}")]
    CommentNotFound(Uuid),

    #[error("Null byte in string is not allowed {0:?}")]
    NullByteInString(String),

    #[error("Content too long ({0} bytes)")]
    ContentTooLong(usize),

    #[error("Time out of the expected range {0}")]
    InvalidTime(Time),
}

impl Error {
    pub fn status_code(&self) -> http::StatusCode {
        use http::StatusCode;
        match self {
            Error::Unknown(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::PermissionDenied => StatusCode::FORBIDDEN,
            Error::CommentNotFound(_) => StatusCode::NOT_FOUND,
            Error::NullByteInString(_) => StatusCode::BAD_REQUEST,
            Error::ContentTooLong(_) => StatusCode::BAD_REQUEST,
            Error::InvalidTime(_) => StatusCode::BAD_REQUEST,
        }
    }

    pub fn contents(&self) -> Vec<u8> {
        serde_json::to_vec(&match self {
            Error::Unknown(msg) => json!({
                "message": msg,
                "type": "unknown",
            }),
            Error::PermissionDenied => json!({
                "message": "permission denied",
                "type": "permission-denied",
            }),
            Error::CommentNotFound(id) => json!({
                "message": "comment not found",
                "type": "comment-not-found",
                "comment": id,
            }),
            Error::NullByteInString(s) => json!({
                "message": "there was a null byte in argument string",
                "type": "null-byte",
                "string": s,
            }),
            Error::ContentTooLong(len) => json!({
                "message": "content is too long",
                "type": "content-too-long",
                "length": len,
            }),
            Error::InvalidTime(t) => json!({
                "message": "time is out of the expected range",
                "type": "invalid-time",
                "time": t,
            }),
        })
        .expect("serializing error contents")
    }

    pub fn parse(body: &[u8]) -> anyhow::Result<Error> {
        let data: serde_json::Value =
            serde_json::from_slice(body).context("parsing error contents")?;
        Ok(
            match data
                .get("type")
                .and_then(|t| t.as_str())
                .ok_or_else(|| anyhow!("error type is not a string"))?
            {
                "unknown" => Error::Unknown(String::from(
                    data.get("message")
                        .and_then(|msg| msg.as_str())
                        .unwrap_or(""),
                )),
                "permission-denied" => Error::PermissionDenied,
                "comment-not-found" => Error::CommentNotFound(
                    data.get("comment")
                        .and_then(|id| id.as_str())
                        .and_then(|id| Uuid::from_str(id).ok())
                        .ok_or_else(|| {
                            anyhow!("error is a comment-not-found without a proper comment id")
                        })?,
                ),
                "null-byte" => Error::NullByteInString(String::from(
                    data.get("string").and_then(|s| s.as_str()).ok_or_else(|| {
                        anyhow!("error is a null-byte-in-string without a string")
                    })?,
                )),
                "content-too-long" => Error::ContentTooLong(
                    data.get("length")
                        .and_then(|l| l.as_u64())
                        .ok_or_else(|| anyhow!("error is a content-too-long without a length"))?
                        as usize,
                ),
                "invalid-time" => Error::InvalidTime(
                    data.get("time")
                        .and_then(|t| serde_json::from_value(t.clone()).ok())
                        .ok_or_else(|| anyhow!("error is an invalid-time without a time"))?,
                ),
                _ => return Err(anyhow!("error contents has unknown type")),
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrips(e: Error) {
        let parsed = Error::parse(&e.contents()).expect("parsing error contents back");
        assert_eq!(parsed, e);
    }

    #[test]
    fn errors_roundtrip_through_their_json_body() {
        roundtrips(Error::Unknown(String::from("boom")));
        roundtrips(Error::PermissionDenied);
        roundtrips(Error::CommentNotFound(Uuid::from_u128(7)));
        roundtrips(Error::NullByteInString(String::from("a\0b")));
        roundtrips(Error::ContentTooLong(123456));
        roundtrips(Error::InvalidTime(chrono::Utc::now()));
    }

    #[test]
    fn garbage_bodies_do_not_parse() {
        assert!(Error::parse(b"not even json").is_err());
        assert!(Error::parse(b"{\"message\": \"no type field\"}").is_err());
        assert!(Error::parse(b"{\"type\": \"never-heard-of-it\"}").is_err());
    }

    #[test]
    fn status_codes() {
        use http::StatusCode;
        assert_eq!(
            Error::PermissionDenied.status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            Error::CommentNotFound(Uuid::from_u128(7)).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            Error::ContentTooLong(1).status_code(),
            StatusCode::BAD_REQUEST
        );
    }
}
