use core::fmt;
use core::str::FromStr;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{BlockId, ParseError, ResourceId};

const AIR_BLOCKS: [&str; 3] = ["air", "cave_air", "void_air"];

/// Concrete block state: a block id plus its property assignments.
///
/// Written as `minecraft:oak_log[axis=y]`; properties are optional and kept
/// sorted so equal states compare and print identically.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BlockState {
    block: BlockId,
    properties: BTreeMap<String, String>,
}

impl BlockState {
    pub fn of(block: BlockId) -> Self {
        Self {
            block,
            properties: BTreeMap::new(),
        }
    }

    pub fn air() -> Self {
        Self::of(ResourceId::vanilla("air"))
    }

    /// Adds a property. Keys and values must survive a print/parse cycle:
    /// non-empty, untrimmed, and free of `[`, `]`, `,` and `=`.
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let (key, value) = (key.into(), value.into());
        debug_assert!(
            is_property_token(&key) && is_property_token(&value),
            "invalid block property {key:?}={value:?}"
        );
        self.properties.insert(key, value);
        self
    }

    pub fn block(&self) -> &BlockId {
        &self.block
    }

    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    pub fn is_air(&self) -> bool {
        self.block.namespace() == super::id::DEFAULT_NAMESPACE
            && AIR_BLOCKS.contains(&self.block.path())
    }

    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        let invalid = || ParseError::InvalidBlockState(raw.to_string());

        let (id, props) = match raw.split_once('[') {
            Some((id, rest)) => {
                let body = rest.strip_suffix(']').ok_or_else(invalid)?;
                (id, Some(body))
            }
            None => (raw, None),
        };

        let mut state = Self::of(ResourceId::parse(id)?);
        if let Some(body) = props.filter(|b| !b.is_empty()) {
            for pair in body.split(',') {
                let (key, value) = pair.split_once('=').ok_or_else(invalid)?;
                let (key, value) = (key.trim(), value.trim());
                if key.is_empty() || value.is_empty() {
                    return Err(invalid());
                }
                state.properties.insert(key.to_string(), value.to_string());
            }
        }
        Ok(state)
    }
}

impl fmt::Display for BlockState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.block)?;
        if !self.properties.is_empty() {
            f.write_str("[")?;
            for (i, (key, value)) in self.properties.iter().enumerate() {
                if i > 0 {
                    f.write_str(",")?;
                }
                write!(f, "{key}={value}")?;
            }
            f.write_str("]")?;
        }
        Ok(())
    }
}

fn is_property_token(token: &str) -> bool {
    !token.is_empty()
        && token.trim() == token
        && !token.contains(|c| matches!(c, '[' | ']' | ',' | '='))
}

impl FromStr for BlockState {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for BlockState {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<BlockState> for String {
    fn from(state: BlockState) -> Self {
        state.to_string()
    }
}

impl From<BlockId> for BlockState {
    fn from(block: BlockId) -> Self {
        Self::of(block)
    }
}
