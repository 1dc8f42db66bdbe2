//! Error classification tags.

use std::borrow::Cow;

/// Caller-assigned classification of an error.
///
/// Kinds are plain string tags. The sentinel [`Kind::NA`] marks an
/// unclassified error and is what every error starts out as unless a kind is
/// given at construction.
///
/// # Examples
///
/// ```
/// use xerror::Kind;
///
/// const NOT_FOUND: Kind = Kind::from_static("not_found");
///
/// assert_eq!(NOT_FOUND.as_str(), "not_found");
/// assert!(Kind::default().is_na());
/// assert_eq!(Kind::from("not_found"), NOT_FOUND);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
#[display("{}", _0)]
pub struct Kind(Cow<'static, str>);

impl Kind {
    /// The unclassified sentinel, rendered as `N/A`.
    pub const NA: Kind = Kind::from_static("N/A");

    /// Create a kind from a static tag, usable in `const` items.
    pub const fn from_static(tag: &'static str) -> Self {
        Self(Cow::Borrowed(tag))
    }

    /// Create a kind from an owned tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Self(Cow::Owned(tag.into()))
    }

    /// The raw tag.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the unclassified sentinel.
    pub fn is_na(&self) -> bool {
        *self == Self::NA
    }
}

impl Default for Kind {
    fn default() -> Self {
        Self::NA
    }
}

impl From<&'static str> for Kind {
    fn from(tag: &'static str) -> Self {
        Self::from_static(tag)
    }
}

impl From<String> for Kind {
    fn from(tag: String) -> Self {
        Self::new(tag)
    }
}

impl AsRef<str> for Kind {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
