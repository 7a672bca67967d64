use std::{
    borrow::Borrow,
    fmt,
    hash::{Hash, Hasher},
    ops::Deref,
    str::FromStr,
};

use non_empty_string::NonEmptyString;
use serde::{Deserialize, Serialize};

/// Separator between a category key and an option ID in category-scoped IDs.
pub const SCOPE_SEPARATOR: char = ':';

/// The key identifying a filter category, e.g. `busType` or `amenities`.
///
/// Keys are non-empty, contain no whitespace and never contain the scope
/// separator (`:`), so that a category-scoped option ID can always be split
/// back into its parts.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CategoryKey(NonEmptyString);

impl CategoryKey {
    /// Creates a new `CategoryKey` from a string.
    ///
    /// # Errors
    ///
    /// Returns `InvalidIdError` if the string is empty, contains whitespace
    /// or contains the scope separator.
    pub fn new(s: String) -> Result<Self, InvalidIdError> {
        if s.contains(SCOPE_SEPARATOR) {
            return Err(InvalidIdError::Separator(s));
        }
        validate(s).map(Self)
    }

    /// Returns the string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// The identifier of a single filter option.
///
/// Option IDs share one flat ID space across every category of a catalog.
/// In category scope they take the form `categoryKey:optionId`.
///
/// # Examples
///
/// ```
/// use facets::{CategoryKey, OptionId};
///
/// let key = CategoryKey::new("busType".to_string()).unwrap();
/// let raw = OptionId::new("sleeper".to_string()).unwrap();
///
/// assert_eq!(raw.scoped(&key).as_str(), "busType:sleeper");
/// assert!(OptionId::new("two words".to_string()).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OptionId(NonEmptyString);

impl OptionId {
    /// Creates a new `OptionId` from a string.
    ///
    /// # Errors
    ///
    /// Returns `InvalidIdError` if the string is empty or contains
    /// whitespace.
    pub fn new(s: String) -> Result<Self, InvalidIdError> {
        validate(s).map(Self)
    }

    /// Returns the string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Namespaces this ID under the given category, as `category:id`.
    #[must_use]
    pub fn scoped(&self, category: &CategoryKey) -> Self {
        let mut scoped = category.0.clone();
        scoped.push(SCOPE_SEPARATOR);
        scoped.push_str(self.as_str());
        Self(scoped)
    }
}

fn validate(s: String) -> Result<NonEmptyString, InvalidIdError> {
    if s.chars().any(char::is_whitespace) {
        return Err(InvalidIdError::Whitespace(s));
    }
    NonEmptyString::new(s).map_err(|_| InvalidIdError::Empty)
}

/// Error returned when a category key or option ID is malformed.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum InvalidIdError {
    /// The identifier was the empty string.
    #[error("identifier must not be empty")]
    Empty,

    /// The identifier contained whitespace.
    #[error("invalid identifier '{0}': must not contain whitespace")]
    Whitespace(String),

    /// A category key contained the scope separator.
    #[error("invalid category key '{0}': must not contain ':'")]
    Separator(String),
}

// `Hash` must agree with `Borrow<str>`, so both types hash as their string.
impl Hash for CategoryKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl Hash for OptionId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl Borrow<str> for CategoryKey {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for OptionId {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl Deref for CategoryKey {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl Deref for OptionId {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl AsRef<str> for CategoryKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for OptionId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for OptionId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CategoryKey {
    type Err = InvalidIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_string())
    }
}

impl FromStr for OptionId {
    type Err = InvalidIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_string())
    }
}

impl TryFrom<String> for CategoryKey {
    type Error = InvalidIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for OptionId {
    type Error = InvalidIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for CategoryKey {
    type Error = InvalidIdError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value.to_string())
    }
}

impl TryFrom<&str> for OptionId {
    type Error = InvalidIdError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value.to_string())
    }
}

impl From<CategoryKey> for String {
    fn from(key: CategoryKey) -> Self {
        key.as_str().to_owned()
    }
}

impl From<OptionId> for String {
    fn from(id: OptionId) -> Self {
        id.as_str().to_owned()
    }
}
