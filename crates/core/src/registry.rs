//! Namespaced registry keys.
//!
//! Block, item and enchantment identifiers reported by the host are strings of
//! the form `minecraft:coal_ore`. Keys are validated once at the boundary so the
//! rest of the workspace can compare them without re-parsing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Default namespace used when a key omits an explicit namespace.
pub const DEFAULT_NAMESPACE: &str = "minecraft";

/// Error returned when parsing an invalid [`RegistryKey`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryKeyError {
    /// Input was empty or whitespace.
    #[error("registry key cannot be empty")]
    Empty,
    /// Namespace part was empty or contained disallowed characters.
    #[error("invalid registry key namespace `{0}` (allowed: a-z0-9_.-)")]
    InvalidNamespace(String),
    /// Path part was empty or contained disallowed characters.
    #[error("invalid registry key path `{0}` (allowed: a-z0-9_./-)")]
    InvalidPath(String),
}

/// A namespaced key of the form `namespace:path`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RegistryKey {
    namespace: String,
    path: String,
}

impl RegistryKey {
    /// Parse a registry key.
    ///
    /// Accepts either `namespace:path` or a bare `path` (uses [`DEFAULT_NAMESPACE`]).
    pub fn parse(input: &str) -> Result<Self, RegistryKeyError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(RegistryKeyError::Empty);
        }

        let (namespace, path) = input.split_once(':').unwrap_or((DEFAULT_NAMESPACE, input));
        if namespace.is_empty()
            || !namespace
                .chars()
                .all(|c| matches!(c, 'a'..='z' | '0'..='9' | '_' | '-' | '.'))
        {
            return Err(RegistryKeyError::InvalidNamespace(namespace.to_string()));
        }
        if path.is_empty()
            || !path
                .chars()
                .all(|c| matches!(c, 'a'..='z' | '0'..='9' | '_' | '-' | '.' | '/'))
        {
            return Err(RegistryKeyError::InvalidPath(path.to_string()));
        }

        Ok(Self {
            namespace: namespace.to_string(),
            path: path.to_string(),
        })
    }

    /// Key in [`DEFAULT_NAMESPACE`] for a path known to be valid (compile-time literals).
    pub fn vanilla(path: &str) -> Self {
        debug_assert!(Self::parse(path).is_ok(), "invalid vanilla path `{path}`");
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            path: path.to_string(),
        }
    }

    /// Registry key namespace.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Registry key path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Compare against a fully qualified `namespace:path` literal without allocating.
    pub fn is(&self, id: &str) -> bool {
        match id.split_once(':') {
            Some((ns, path)) => ns == self.namespace && path == self.path,
            None => false,
        }
    }

    /// Copy of this key with `suffix` removed from the end of the path.
    ///
    /// Returns an unchanged copy when the path does not end with `suffix` or
    /// when stripping would leave the path empty.
    pub fn strip_path_suffix(&self, suffix: &str) -> Self {
        match self.path.strip_suffix(suffix) {
            Some(stripped) if !stripped.is_empty() => Self {
                namespace: self.namespace.clone(),
                path: stripped.to_string(),
            },
            _ => self.clone(),
        }
    }
}

impl fmt::Display for RegistryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

impl FromStr for RegistryKey {
    type Err = RegistryKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for RegistryKey {
    type Error = RegistryKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<RegistryKey> for String {
    fn from(key: RegistryKey) -> Self {
        key.to_string()
    }
}
