//! Namespaced resource identifiers (`namespace:path`).

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ParseError;

/// Namespace assumed when an identifier is written without one.
pub const DEFAULT_NAMESPACE: &str = "minecraft";

/// Identifier of a host registry entry: block, item, tag, sound, particle or
/// entity archetype.
///
/// Parsing follows the host convention: `"clay"` and `"minecraft:clay"` name the
/// same entry. Namespaces and paths are restricted to `[a-z0-9_.-]` (paths also
/// allow `/`).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ResourceId {
    namespace: String,
    path: String,
}

pub type BlockId = ResourceId;
pub type ItemId = ResourceId;
pub type TagId = ResourceId;
pub type SoundId = ResourceId;
pub type ParticleId = ResourceId;
pub type ArchetypeId = ResourceId;
pub type RecipeId = ResourceId;

impl ResourceId {
    /// Builds an identifier from trusted parts.
    ///
    /// Intended for identifiers written in code; use [`ResourceId::parse`] for
    /// anything read from content files. Parts that would not parse back are a
    /// programming error and trip a debug assertion.
    pub fn from_parts(namespace: impl Into<String>, path: impl Into<String>) -> Self {
        let (namespace, path) = (namespace.into(), path.into());
        debug_assert!(
            is_valid_namespace(&namespace) && is_valid_path(&path),
            "invalid resource id parts {namespace:?}:{path:?}"
        );
        Self { namespace, path }
    }

    /// Shorthand for an identifier in the default namespace.
    pub fn vanilla(path: impl Into<String>) -> Self {
        Self::from_parts(DEFAULT_NAMESPACE, path)
    }

    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        let (namespace, path) = match raw.split_once(':') {
            Some((namespace, path)) => (namespace, path),
            None => (DEFAULT_NAMESPACE, raw),
        };

        if !is_valid_namespace(namespace) || !is_valid_path(path) {
            return Err(ParseError::InvalidResourceId(raw.to_string()));
        }

        Ok(Self::from_parts(namespace, path))
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

fn is_namespace_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '_' | '.' | '-')
}

fn is_valid_namespace(namespace: &str) -> bool {
    !namespace.is_empty() && namespace.chars().all(is_namespace_char)
}

fn is_valid_path(path: &str) -> bool {
    !path.is_empty() && path.chars().all(|c| is_namespace_char(c) || c == '/')
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

impl FromStr for ResourceId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ResourceId {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ResourceId> for String {
    fn from(id: ResourceId) -> Self {
        id.to_string()
    }
}
