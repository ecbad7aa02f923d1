use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

const MAX_LENGTH: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatastoreNameError {
    #[error("Datastore name cannot be empty")]
    Empty,
    #[error("Datastore name too long: {len} chars (max {max})")]
    TooLong { len: usize, max: usize },
    #[error("Datastore name contains control characters")]
    ControlChars,
}

/// Display name of a catalog entry.
///
/// Surrounding whitespace is stripped; the name must fit on one line of a
/// picker, so control characters (including newlines and tabs) are
/// rejected. Uniqueness in the catalog is case-insensitive via
/// [`Self::normalized`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DatastoreName(String);

impl DatastoreName {
    pub fn new(name: impl Into<String>) -> Result<Self, DatastoreNameError> {
        let name = name.into();
        let trimmed = name.trim();

        if trimmed.is_empty() {
            return Err(DatastoreNameError::Empty);
        }
        if trimmed.chars().any(char::is_control) {
            return Err(DatastoreNameError::ControlChars);
        }

        let char_count = trimmed.chars().count();
        if char_count > MAX_LENGTH {
            return Err(DatastoreNameError::TooLong {
                len: char_count,
                max: MAX_LENGTH,
            });
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// For case-insensitive uniqueness comparison.
    pub fn normalized(&self) -> String {
        self.0.to_lowercase()
    }
}

impl fmt::Display for DatastoreName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for DatastoreName {
    type Error = DatastoreNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DatastoreName> for String {
    fn from(name: DatastoreName) -> Self {
        name.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    mod new {
        use super::*;

        #[rstest]
        #[case("orders", true)]
        #[case("Sales Data 2026", true)]
        #[case("  padded  ", true)] // trimmed
        #[case("a", true)]
        #[case("", false)]
        #[case("   ", false)] // whitespace only
        #[case("two\nlines", false)]
        #[case("tab\there", false)]
        fn validation(#[case] input: &str, #[case] should_succeed: bool) {
            assert_eq!(DatastoreName::new(input).is_ok(), should_succeed);
        }

        #[test]
        fn exactly_max_length_returns_ok() {
            let name = "a".repeat(MAX_LENGTH);
            assert!(DatastoreName::new(&name).is_ok());
        }

        #[test]
        fn over_max_length_returns_too_long_error() {
            let name = "a".repeat(MAX_LENGTH + 1);
            let result = DatastoreName::new(&name);
            assert_eq!(
                result,
                Err(DatastoreNameError::TooLong {
                    len: MAX_LENGTH + 1,
                    max: MAX_LENGTH,
                })
            );
        }

        #[test]
        fn length_counts_chars_not_bytes() {
            let name = "デ".repeat(MAX_LENGTH);
            assert!(DatastoreName::new(&name).is_ok());
        }

        #[test]
        fn control_chars_are_rejected() {
            assert_eq!(
                DatastoreName::new("bell\u{7}"),
                Err(DatastoreNameError::ControlChars)
            );
        }

        #[test]
        fn trims_whitespace() {
            let name = DatastoreName::new("  orders  ").unwrap();
            assert_eq!(name.as_str(), "orders");
        }
    }

    mod normalized {
        use super::*;

        #[test]
        fn returns_lowercase() {
            let name = DatastoreName::new("Customer Master").unwrap();
            assert_eq!(name.normalized(), "customer master");
        }
    }

    mod serde {
        use super::*;

        #[test]
        fn serializes_to_string() {
            let name = DatastoreName::new("orders").unwrap();
            let json = serde_json::to_string(&name).unwrap();
            assert_eq!(json, "\"orders\"");
        }

        #[test]
        fn deserialize_revalidates() {
            assert!(serde_json::from_str::<DatastoreName>("\"\"").is_err());
            assert!(serde_json::from_str::<DatastoreName>("\"two\\nlines\"").is_err());
        }

        #[test]
        fn deserialize_trims_like_new() {
            let name: DatastoreName = serde_json::from_str("\"  orders  \"").unwrap();
            assert_eq!(name.as_str(), "orders");
        }
    }
}
