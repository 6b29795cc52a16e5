//! The `{type, data}` envelope wrapping every polymorphic value

use polycodec_core::{CodecConfig, EnvelopeError, EnvelopeResult};
use serde_json::{Map, Value};

/// Wire-level record produced for every polymorphic encode
///
/// `type_id` names the concrete type; `data` is that type's own structural
/// encoding and is never inspected by the envelope layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    /// Type identifier (e.g., "Circle", "shapes.Square")
    pub type_id: String,

    /// Structurally encoded payload of the concrete type
    pub data: Value,
}

impl Envelope {
    /// Create a new envelope
    pub fn new(type_id: impl Into<String>, data: Value) -> Self {
        Self {
            type_id: type_id.into(),
            data,
        }
    }

    /// Build the structural tree using the configured member names
    pub fn into_tree(self, config: &CodecConfig) -> Value {
        let mut object = Map::with_capacity(2);
        object.insert(config.type_field.clone(), Value::String(self.type_id));
        object.insert(config.data_field.clone(), self.data);
        Value::Object(object)
    }

    /// Extract an envelope from a structural tree
    ///
    /// Both members must be present. The data member may hold `null`.
    pub fn from_tree(tree: &Value, config: &CodecConfig) -> EnvelopeResult<Self> {
        let object = tree.as_object().ok_or_else(|| {
            EnvelopeError::MalformedEnvelope(format!(
                "expected an object envelope, found {}",
                kind_of(tree)
            ))
        })?;

        let type_id = match member(object, &config.type_field)? {
            Value::String(type_id) => type_id.clone(),
            other => {
                return Err(EnvelopeError::MalformedEnvelope(format!(
                    "'{}' member must be a string, found {}",
                    config.type_field,
                    kind_of(other)
                )));
            }
        };
        let data = member(object, &config.data_field)?.clone();

        if config.deny_unknown_members {
            let unknown = object
                .keys()
                .find(|key| **key != config.type_field && **key != config.data_field);
            if let Some(key) = unknown {
                return Err(EnvelopeError::MalformedEnvelope(format!(
                    "unexpected member '{key}' in envelope"
                )));
            }
        }

        Ok(Self { type_id, data })
    }

    /// Serialize to bytes using the default member names
    pub fn to_bytes(&self) -> EnvelopeResult<Vec<u8>> {
        let tree = self.clone().into_tree(&CodecConfig::default());
        Ok(serde_json::to_vec(&tree)?)
    }

    /// Deserialize from bytes using the default member names
    pub fn from_bytes(data: &[u8]) -> EnvelopeResult<Self> {
        let tree: Value = serde_json::from_slice(data)?;
        Self::from_tree(&tree, &CodecConfig::default())
    }
}

fn member<'a>(object: &'a Map<String, Value>, name: &str) -> EnvelopeResult<&'a Value> {
    object.get(name).ok_or_else(|| {
        EnvelopeError::MalformedEnvelope(format!(
            "no '{name}' member found in what was expected to be an envelope"
        ))
    })
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
