//! Username type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Username`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum UsernameError {
    /// The input string is empty.
    #[error("username cannot be empty")]
    Empty,
    /// The input string is too long.
    #[error("username must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// The input contains a character outside the allowed set.
    #[error("username contains invalid character {0:?}")]
    InvalidChar(char),
}

/// An account username.
///
/// Usernames key the per-user item stores, so the type is `Ord` and
/// serializes transparently as a bare string. Validation mirrors the rules
/// the account system applies at signup; the stores themselves trust any
/// `Username` handed to them and never re-check it against the account
/// database.
///
/// ## Constraints
///
/// - Length: 1-150 characters
/// - Characters: letters, digits, and `@` `.` `+` `-` `_`
///
/// ## Examples
///
/// ```
/// use greengrocer_core::Username;
///
/// // Valid usernames
/// assert!(Username::parse("alice").is_ok());
/// assert!(Username::parse("user.name+tag").is_ok());
///
/// // Invalid usernames
/// assert!(Username::parse("").is_err());         // empty
/// assert!(Username::parse("no spaces").is_err()); // whitespace
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    /// Maximum length of a username.
    pub const MAX_LENGTH: usize = 150;

    /// Parse a `Username` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input:
    /// - Is empty
    /// - Is longer than 150 characters
    /// - Contains a character other than letters, digits, or `@.+-_`
    pub fn parse(s: &str) -> Result<Self, UsernameError> {
        if s.is_empty() {
            return Err(UsernameError::Empty);
        }

        if s.chars().count() > Self::MAX_LENGTH {
            return Err(UsernameError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        if let Some(c) = s
            .chars()
            .find(|c| !c.is_alphanumeric() && !matches!(c, '@' | '.' | '+' | '-' | '_'))
        {
            return Err(UsernameError::InvalidChar(c));
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the username as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Username` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Username {
    type Err = UsernameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_usernames() {
        assert!(Username::parse("alice").is_ok());
        assert!(Username::parse("bob42").is_ok());
        assert!(Username::parse("user.name").is_ok());
        assert!(Username::parse("user+tag").is_ok());
        assert!(Username::parse("user@example.com").is_ok());
        assert!(Username::parse("under_score-dash").is_ok());
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(Username::parse(""), Err(UsernameError::Empty)));
    }

    #[test]
    fn test_parse_too_long() {
        let long = "a".repeat(151);
        assert!(matches!(
            Username::parse(&long),
            Err(UsernameError::TooLong { .. })
        ));
    }

    #[test]
    fn test_parse_max_length_ok() {
        let max = "a".repeat(150);
        assert!(Username::parse(&max).is_ok());
    }

    #[test]
    fn test_parse_invalid_chars() {
        assert!(matches!(
            Username::parse("no spaces"),
            Err(UsernameError::InvalidChar(' '))
        ));
        assert!(matches!(
            Username::parse("semi;colon"),
            Err(UsernameError::InvalidChar(';'))
        ));
        assert!(matches!(
            Username::parse("slash/name"),
            Err(UsernameError::InvalidChar('/'))
        ));
    }

    #[test]
    fn test_display() {
        let user = Username::parse("alice").unwrap();
        assert_eq!(format!("{user}"), "alice");
    }

    #[test]
    fn test_serde_roundtrip() {
        let user = Username::parse("alice").unwrap();
        let json = serde_json::to_string(&user).unwrap();
        assert_eq!(json, "\"alice\"");

        let parsed: Username = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, user);
    }

    #[test]
    fn test_from_str() {
        let user: Username = "alice".parse().unwrap();
        assert_eq!(user.as_str(), "alice");
    }

    #[test]
    fn test_ordering() {
        let alice = Username::parse("alice").unwrap();
        let bob = Username::parse("bob").unwrap();
        assert!(alice < bob);
    }
}
