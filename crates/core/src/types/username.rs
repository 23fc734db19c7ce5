//! Login username type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Username`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum UsernameError {
    /// The input string is blank after trimming.
    #[error("username cannot be blank")]
    Blank,
    /// The input string is too long.
    #[error("username must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
}

/// A login username.
///
/// Usernames are stored as entered (with surrounding whitespace trimmed) and
/// compared exactly everywhere except the duplicate check when registering a
/// new seller, which is case-insensitive: `JABUITRAGO` conflicts with an
/// existing `jabuitrago`.
///
/// ## Examples
///
/// ```
/// use polimarket_core::Username;
///
/// assert!(Username::parse("mariocas").is_ok());
/// assert!(Username::parse("  jleal  ").is_ok()); // trimmed
/// assert!(Username::parse("   ").is_err());      // blank
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    /// Maximum length of a username.
    pub const MAX_LENGTH: usize = 64;

    /// Parse a `Username` from a string, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is blank after trimming or longer than
    /// [`Username::MAX_LENGTH`] characters.
    pub fn parse(s: &str) -> Result<Self, UsernameError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(UsernameError::Blank);
        }

        if trimmed.len() > Self::MAX_LENGTH {
            return Err(UsernameError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        Ok(Self(trimmed.to_owned()))
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

    /// Case-insensitive comparison, used for duplicate detection.
    #[must_use]
    pub fn eq_ignore_case(&self, other: &Self) -> bool {
        self.0.to_lowercase() == other.0.to_lowercase()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
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
