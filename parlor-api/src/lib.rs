pub use uuid::{uuid, Uuid};
pub type Time = chrono::DateTime<chrono::Utc>;

pub const STUB_UUID: Uuid = uuid!("ffffffff-ffff-ffff-ffff-ffffffffffff");

/// Longest comment or post body the API accepts, in bytes
pub const MAX_CONTENT_LEN: usize = 10_000;

mod action;
pub use action::Action;

mod auth;
pub use auth::AuthToken;

mod comment;
pub use comment::{Comment, CommentId, UpdateComment};

mod error;
pub use error::Error;

mod post;
pub use post::{Post, PostId, ThreadResponse};

mod user;
pub use user::{Author, UserId};

// Strings are rejected rather than silently truncated: the server does the
// same check and a mismatch would make the PATCH response diverge from what
// the client displays.
pub fn validate_string(s: &str) -> Result<(), Error> {
    if s.contains('\0') {
        return Err(Error::NullByteInString(s.to_string()));
    }
    if s.len() > MAX_CONTENT_LEN {
        return Err(Error::ContentTooLong(s.len()));
    }
    Ok(())
}

pub fn validate_time(t: &Time) -> Result<(), Error> {
    use chrono::Datelike;
    match t.year() {
        1970..=9999 => Ok(()),
        _ => Err(Error::InvalidTime(*t)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_validation() {
        assert_eq!(validate_string("hello there"), Ok(()));
        assert_eq!(validate_string(""), Ok(()));
        assert_eq!(
            validate_string("he\0llo"),
            Err(Error::NullByteInString(String::from("he\0llo")))
        );
        let huge = "a".repeat(MAX_CONTENT_LEN + 1);
        assert_eq!(validate_string(&huge), Err(Error::ContentTooLong(huge.len())));
    }

    #[test]
    fn time_validation() {
        use chrono::TimeZone;
        let ok = chrono::Utc.with_ymd_and_hms(2022, 11, 3, 12, 0, 0).unwrap();
        assert_eq!(validate_time(&ok), Ok(()));
        let too_old = chrono::Utc.with_ymd_and_hms(1969, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(validate_time(&too_old), Err(Error::InvalidTime(too_old)));
    }
}
