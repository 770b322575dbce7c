#![forbid(unsafe_code)]

//! Navigation path identifier.

/// An opaque identifier for the current logical location in the
/// application.
///
/// Owned by the hosting router; this crate only compares values. Any
/// change observed on a [`PathSignal`](crate::PathSignal), by equality, is
/// a navigation event.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NavigationPath(String);

impl NavigationPath {
    /// Create a path from any string-like value.
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// The path as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NavigationPath {
    fn from(path: &str) -> Self {
        Self(path.to_owned())
    }
}

impl From<String> for NavigationPath {
    fn from(path: String) -> Self {
        Self(path)
    }
}

impl std::fmt::Display for NavigationPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
