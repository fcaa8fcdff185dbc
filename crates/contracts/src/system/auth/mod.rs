use serde::{Deserialize, Serialize};

/// Language used when the browser has none stored
pub const DEFAULT_LANG: &str = "en";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    User,
    Artist,
    Admin,
}

impl UserRole {
    /// Parse the role string stored at login; unknown values yield `None`
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "USER" => Some(UserRole::User),
            "ARTIST" => Some(UserRole::Artist),
            "ADMIN" => Some(UserRole::Admin),
            _ => None,
        }
    }
}

/// Session data read from browser storage at startup
///
/// Passed explicitly to the components that need it; this crate never
/// writes the underlying storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: Option<String>,
    pub role: Option<UserRole>,
    pub lang: String,
}

impl Default for Session {
    fn default() -> Self {
        Self::anonymous()
    }
}

impl Session {
    pub fn anonymous() -> Self {
        Self {
            access_token: None,
            role: None,
            lang: DEFAULT_LANG.to_string(),
        }
    }

    /// Build from raw storage values, treating blank strings as absent
    pub fn from_storage(
        access_token: Option<String>,
        role: Option<String>,
        lang: Option<String>,
    ) -> Self {
        let non_blank = |v: Option<String>| v.filter(|s| !s.trim().is_empty());
        Self {
            access_token: non_blank(access_token),
            role: non_blank(role).and_then(|r| UserRole::parse(&r)),
            lang: non_blank(lang)
                .map(|l| short_lang(&l))
                .unwrap_or_else(|| DEFAULT_LANG.to_string()),
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    pub fn is_anonymous(&self) -> bool {
        self.access_token.is_none()
    }

    /// `Authorization` header value when a token is present
    pub fn bearer(&self) -> Option<String> {
        self.token().map(|t| format!("Bearer {}", t))
    }
}

/// "es-ES" -> "es"
fn short_lang(value: &str) -> String {
    value
        .split(['-', '_'])
        .next()
        .unwrap_or(value)
        .trim()
        .to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_storage_blank_values() {
        let session = Session::from_storage(Some("  ".into()), Some("".into()), None);
        assert!(session.is_anonymous());
        assert_eq!(session.role, None);
        assert_eq!(session.lang, "en");
        assert_eq!(session.bearer(), None);
    }

    #[test]
    fn test_from_storage_with_token() {
        let session = Session::from_storage(
            Some("abc".into()),
            Some("admin".into()),
            Some("es-ES".into()),
        );
        assert_eq!(session.bearer().as_deref(), Some("Bearer abc"));
        assert_eq!(session.role, Some(UserRole::Admin));
        assert_eq!(session.lang, "es");
    }

    #[test]
    fn test_role_parse() {
        assert_eq!(UserRole::parse("ARTIST"), Some(UserRole::Artist));
        assert_eq!(UserRole::parse("guest"), None);
    }
}
