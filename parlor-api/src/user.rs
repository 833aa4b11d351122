use uuid::Uuid;

use crate::STUB_UUID;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct UserId(pub Uuid);

impl UserId {
    pub fn stub() -> UserId {
        UserId(STUB_UUID)
    }
}

/// Author reference embedded in posts and comments. Older accounts carry
/// first/last name pairs, newer ones a single display name; either (or
/// neither) may be set.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Author {
    pub id: UserId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub verified: bool,
}

impl Author {
    /// Placeholder author for client-side mocked replies
    pub fn guest() -> Author {
        Author {
            id: UserId::stub(),
            name: Some(String::from("Guest User")),
            first_name: None,
            last_name: None,
            photo: None,
            verified: false,
        }
    }

    pub fn display_name(&self) -> String {
        if let Some(name) = &self.name {
            return name.clone();
        }
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{} {}", first, last),
            (Some(first), None) => first.clone(),
            (None, Some(last)) => last.clone(),
            (None, None) => String::from("Guest User"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nameless() -> Author {
        Author {
            id: UserId::stub(),
            name: None,
            first_name: None,
            last_name: None,
            photo: None,
            verified: false,
        }
    }

    #[test]
    fn display_name_prefers_explicit_name() {
        let mut a = nameless();
        a.name = Some(String::from("Ada L."));
        a.first_name = Some(String::from("Ada"));
        a.last_name = Some(String::from("Lovelace"));
        assert_eq!(a.display_name(), "Ada L.");
    }

    #[test]
    fn display_name_falls_back_to_name_parts() {
        let mut a = nameless();
        a.first_name = Some(String::from("Ada"));
        a.last_name = Some(String::from("Lovelace"));
        assert_eq!(a.display_name(), "Ada Lovelace");
        a.last_name = None;
        assert_eq!(a.display_name(), "Ada");
    }

    #[test]
    fn display_name_of_anonymous_author() {
        assert_eq!(nameless().display_name(), "Guest User");
        assert_eq!(Author::guest().display_name(), "Guest User");
    }
}
