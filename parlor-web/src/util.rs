use std::{fmt, str::FromStr};

use parlor_client::api::{Author, Time};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(inline_js = "
    export function get_timezone() {
        return Intl.DateTimeFormat().resolvedOptions().timeZone;
    }
")]
extern "C" {
    fn get_timezone() -> String;
}

lazy_static::lazy_static! {
    static ref LOCAL_TZ: chrono_tz::Tz = {
        chrono_tz::Tz::from_str(&get_timezone())
            .expect("host js timezone is not in chrono-tz database")
    };
}

pub fn local_tz() -> chrono_tz::Tz {
    *LOCAL_TZ
}

/// Full timestamp in the viewer's timezone, for the tooltip over the
/// relative dateline
pub fn localized_timestamp(t: &Time) -> String {
    t.with_timezone(&local_tz())
        .format("%Y-%m-%d %H:%M")
        .to_string()
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Elapsed {
    JustNow,
    Minutes(i64),
    Hours(i64),
    Days(i64),
    Weeks(i64),
    Years(i64),
}

impl Elapsed {
    pub fn between(from: &Time, to: &Time) -> Elapsed {
        use chrono::Duration;
        let d = *to - *from;
        // anything in the future (clock skew) counts as just-now
        if d < Duration::minutes(1) {
            Elapsed::JustNow
        } else if d < Duration::hours(1) {
            Elapsed::Minutes(d.num_minutes())
        } else if d < Duration::days(1) {
            Elapsed::Hours(d.num_hours())
        } else if d < Duration::weeks(1) {
            Elapsed::Days(d.num_days())
        } else if d < Duration::days(365) {
            Elapsed::Weeks(d.num_weeks())
        } else {
            Elapsed::Years(d.num_days() / 365)
        }
    }
}

impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Elapsed::JustNow => write!(f, "just now"),
            Elapsed::Minutes(n) => write!(f, "{}m", n),
            Elapsed::Hours(n) => write!(f, "{}h", n),
            Elapsed::Days(n) => write!(f, "{}d", n),
            Elapsed::Weeks(n) => write!(f, "{}w", n),
            Elapsed::Years(n) => write!(f, "{}y", n),
        }
    }
}

/// Compact "how long ago" text for comment datelines
pub fn relative_time(t: &Time, now: &Time) -> String {
    Elapsed::between(t, now).to_string()
}

/// Initials shown on avatars without a photo
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(|c| c.to_uppercase())
        .collect()
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TextSpan {
    Plain(String),
    Link(String),
}

/// Split a comment body into plain text and http(s) links, so links can be
/// rendered as anchors. Whitespace is preserved in the plain spans.
pub fn linkify(text: &str) -> Vec<TextSpan> {
    let mut spans = Vec::new();
    let mut plain = String::new();
    for chunk in text.split_inclusive(char::is_whitespace) {
        let word = chunk.trim_end_matches(char::is_whitespace);
        if word.starts_with("http://") || word.starts_with("https://") {
            if !plain.is_empty() {
                spans.push(TextSpan::Plain(std::mem::take(&mut plain)));
            }
            spans.push(TextSpan::Link(word.to_string()));
            plain.push_str(&chunk[word.len()..]);
        } else {
            plain.push_str(chunk);
        }
    }
    if !plain.is_empty() {
        spans.push(TextSpan::Plain(plain));
    }
    spans
}

pub fn author_profile_link(author: &Author) -> String {
    format!("/profile/{}", author.id.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    #[test]
    fn elapsed_buckets() {
        let now = Utc::now();
        let at = |d: Duration| Elapsed::between(&(now - d), &now);
        assert_eq!(at(Duration::seconds(0)), Elapsed::JustNow);
        assert_eq!(at(Duration::seconds(59)), Elapsed::JustNow);
        assert_eq!(at(Duration::seconds(-30)), Elapsed::JustNow);
        assert_eq!(at(Duration::minutes(5)), Elapsed::Minutes(5));
        assert_eq!(at(Duration::hours(3)), Elapsed::Hours(3));
        assert_eq!(at(Duration::days(2)), Elapsed::Days(2));
        assert_eq!(at(Duration::days(20)), Elapsed::Weeks(2));
        assert_eq!(at(Duration::days(800)), Elapsed::Years(2));
    }

    #[test]
    fn elapsed_display() {
        assert_eq!(Elapsed::JustNow.to_string(), "just now");
        assert_eq!(Elapsed::Minutes(5).to_string(), "5m");
        assert_eq!(Elapsed::Hours(3).to_string(), "3h");
        assert_eq!(Elapsed::Weeks(2).to_string(), "2w");
    }

    #[test]
    fn initials_of_names() {
        assert_eq!(initials("Ada Lovelace"), "AL");
        assert_eq!(initials("ada"), "A");
        assert_eq!(initials("Ada Byron Lovelace"), "AB");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn linkify_plain_text() {
        assert_eq!(
            linkify("no links here"),
            vec![TextSpan::Plain(String::from("no links here"))]
        );
        assert_eq!(linkify(""), vec![]);
    }

    #[test]
    fn linkify_finds_links() {
        assert_eq!(
            linkify("see https://example.org for more"),
            vec![
                TextSpan::Plain(String::from("see ")),
                TextSpan::Link(String::from("https://example.org")),
                TextSpan::Plain(String::from(" for more")),
            ]
        );
        assert_eq!(
            linkify("http://a.example http://b.example"),
            vec![
                TextSpan::Link(String::from("http://a.example")),
                TextSpan::Plain(String::from(" ")),
                TextSpan::Link(String::from("http://b.example")),
            ]
        );
    }
}
