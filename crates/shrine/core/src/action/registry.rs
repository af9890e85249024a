//! Tag registry backing the `"type"`-tagged action format.
//!
//! Every action kind registers one [`ActionCodec`]: its tag plus a pair of
//! functions converting between the variant and a JSON object without the
//! `"type"` key. The registry adds and strips the discriminator, so the wire
//! form of a sequence is
//!
//! ```json
//! { "type": "sequence", "steps": [ { "type": "drop_item", "item": "minecraft:diamond" } ] }
//! ```
//!
//! Decoding also accepts a tag prefixed with the registry namespace
//! (`"kamigami:area"`); any other prefix is an unknown type. Encoding always
//! emits the bare tag.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use tracing::error;

use super::{
    Action, Area, Chance, ConditionalReplace, DropItem, PlayEffects, ReplaceBlock, Sequence,
    SpawnEntity,
};
use crate::config::EngineConfig;
use crate::error::{ErrorSeverity, ShrineError};

/// Key carrying the variant tag.
pub const TYPE_KEY: &str = "type";

pub type EncodeFn = fn(&Action) -> Result<Map<String, Value>, RegistryError>;
pub type DecodeFn = fn(Map<String, Value>) -> Result<Action, RegistryError>;

#[derive(Clone, Copy, Debug)]
pub struct ActionCodec {
    pub tag: &'static str,
    pub encode: EncodeFn,
    pub decode: DecodeFn,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("action definition must be a JSON object")]
    NotAnObject,

    #[error("action definition has no string \"type\" field")]
    MissingType,

    #[error("unknown action type '{0}'")]
    UnknownType(String),

    #[error("action type '{0}' registered twice")]
    DuplicateType(&'static str),

    #[error("action type '{0}' has no codec")]
    Unregistered(&'static str),

    #[error("codec for '{expected}' received a '{found}' action")]
    Mismatched {
        expected: &'static str,
        found: &'static str,
    },

    #[error("malformed '{tag}' action: {message}")]
    Malformed { tag: &'static str, message: String },
}

impl ShrineError for RegistryError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::DuplicateType(_) | Self::Unregistered(_) | Self::Mismatched { .. } => {
                ErrorSeverity::Internal
            }
            _ => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotAnObject => "REGISTRY_NOT_AN_OBJECT",
            Self::MissingType => "REGISTRY_MISSING_TYPE",
            Self::UnknownType(_) => "REGISTRY_UNKNOWN_TYPE",
            Self::DuplicateType(_) => "REGISTRY_DUPLICATE_TYPE",
            Self::Unregistered(_) => "REGISTRY_UNREGISTERED",
            Self::Mismatched { .. } => "REGISTRY_MISMATCHED",
            Self::Malformed { .. } => "REGISTRY_MALFORMED",
        }
    }
}

// ============================================================================
// Codec helpers
// ============================================================================

fn to_object<T: Serialize>(tag: &'static str, value: &T) -> Result<Map<String, Value>, RegistryError> {
    match serde_json::to_value(value) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(RegistryError::Malformed {
            tag,
            message: "variant did not serialize to an object".to_string(),
        }),
        Err(err) => Err(RegistryError::Malformed {
            tag,
            message: err.to_string(),
        }),
    }
}

fn from_object<T: DeserializeOwned>(
    tag: &'static str,
    fields: Map<String, Value>,
) -> Result<T, RegistryError> {
    serde_json::from_value(Value::Object(fields)).map_err(|err| RegistryError::Malformed {
        tag,
        message: err.to_string(),
    })
}

macro_rules! variant_codec {
    ($kind:ident) => {
        ActionCodec {
            tag: $kind::TAG,
            encode: |action| match action {
                Action::$kind(step) => to_object($kind::TAG, step),
                other => Err(RegistryError::Mismatched {
                    expected: $kind::TAG,
                    found: other.type_tag(),
                }),
            },
            decode: |fields| from_object::<$kind>($kind::TAG, fields).map(Action::$kind),
        }
    };
}

// ============================================================================
// Registry
// ============================================================================

#[derive(Clone, Debug)]
pub struct ActionRegistry {
    namespace: String,
    codecs: HashMap<&'static str, ActionCodec>,
}

impl Default for ActionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionRegistry {
    /// Empty registry in the default engine namespace.
    pub fn new() -> Self {
        Self {
            namespace: EngineConfig::DEFAULT_NAMESPACE.to_string(),
            codecs: HashMap::new(),
        }
    }

    /// Namespace accepted as a tag prefix on decode.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Registry with a codec for every built-in action kind.
    pub fn with_builtin_actions() -> Self {
        let mut registry = Self::new();
        let builtins = [
            variant_codec!(Sequence),
            variant_codec!(Chance),
            variant_codec!(Area),
            variant_codec!(SpawnEntity),
            variant_codec!(PlayEffects),
            variant_codec!(DropItem),
            variant_codec!(ReplaceBlock),
            variant_codec!(ConditionalReplace),
        ];
        for codec in builtins {
            if let Err(err) = registry.register(codec) {
                error!(target: "shrine::action", tag = codec.tag, error = %err, "builtin codec rejected");
            }
        }
        registry
    }

    /// Process-wide registry used by the `Serialize`/`Deserialize` impls.
    pub fn builtin() -> &'static ActionRegistry {
        static BUILTIN: OnceLock<ActionRegistry> = OnceLock::new();
        BUILTIN.get_or_init(Self::with_builtin_actions)
    }

    pub fn register(&mut self, codec: ActionCodec) -> Result<(), RegistryError> {
        if self.codecs.contains_key(codec.tag) {
            return Err(RegistryError::DuplicateType(codec.tag));
        }
        self.codecs.insert(codec.tag, codec);
        Ok(())
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.codec_for(tag).is_some()
    }

    /// Registered tags in sorted order.
    pub fn tags(&self) -> Vec<&'static str> {
        let mut tags: Vec<_> = self.codecs.keys().copied().collect();
        tags.sort_unstable();
        tags
    }

    pub fn len(&self) -> usize {
        self.codecs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codecs.is_empty()
    }

    pub fn encode(&self, action: &Action) -> Result<Value, RegistryError> {
        let tag = action.type_tag();
        let codec = self
            .codecs
            .get(tag)
            .ok_or(RegistryError::Unregistered(tag))?;

        let mut fields = (codec.encode)(action)?;
        fields.insert(TYPE_KEY.to_string(), Value::String(tag.to_string()));
        Ok(Value::Object(fields))
    }

    pub fn decode(&self, value: Value) -> Result<Action, RegistryError> {
        let Value::Object(mut fields) = value else {
            return Err(RegistryError::NotAnObject);
        };
        let tag = match fields.remove(TYPE_KEY) {
            Some(Value::String(tag)) => tag,
            _ => return Err(RegistryError::MissingType),
        };

        let codec = self
            .codec_for(&tag)
            .ok_or_else(|| RegistryError::UnknownType(tag.clone()))?;
        (codec.decode)(fields)
    }

    /// Codec for `"area"` or `"<namespace>:area"`.
    fn codec_for(&self, tag: &str) -> Option<&ActionCodec> {
        let bare = match tag.split_once(':') {
            None => tag,
            Some((namespace, bare)) if namespace == self.namespace => bare,
            Some(_) => return None,
        };
        self.codecs.get(bare)
    }
}

// ============================================================================
// Serde integration
// ============================================================================

impl Serialize for Action {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        ActionRegistry::builtin()
            .encode(self)
            .map_err(serde::ser::Error::custom)?
            .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Action {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        ActionRegistry::builtin()
            .decode(value)
            .map_err(serde::de::Error::custom)
    }
}
