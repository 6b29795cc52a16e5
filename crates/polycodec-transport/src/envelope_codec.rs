//! Polymorphic envelope codec
//!
//! Encodes a value behind an interface as `{type, data}` and decodes such an
//! envelope back into the exact concrete type, given only the interface and a
//! [`ResolutionScope`] for it.

use crate::codec::{Codec, JsonCodec};
use crate::envelope::Envelope;
use polycodec_core::{CodecConfig, EnvelopeError, EnvelopeResult, ResolutionScope, Variant};
use serde_json::Value;
use std::any::Any;
use std::fmt;

/// Encoder/decoder for values of interface type `I`
///
/// The scope is an explicit dependency; independent scopes (per test, per
/// subsystem) never see each other's registrations.
pub struct EnvelopeCodec<'s, I: ?Sized> {
    scope: &'s ResolutionScope<I>,
    config: CodecConfig,
    json: JsonCodec,
}

impl<'s, I: ?Sized + Variant> EnvelopeCodec<'s, I> {
    /// Create a codec using the default configuration
    pub fn new(scope: &'s ResolutionScope<I>) -> Self {
        Self {
            scope,
            config: CodecConfig::default(),
            json: JsonCodec::new(),
        }
    }

    /// Create a codec with a custom configuration
    pub fn with_config(scope: &'s ResolutionScope<I>, config: CodecConfig) -> EnvelopeResult<Self> {
        config.validate()?;
        let json = if config.pretty {
            JsonCodec::pretty()
        } else {
            JsonCodec::new()
        };
        Ok(Self {
            scope,
            config,
            json,
        })
    }

    /// The scope identifiers are resolved against
    pub fn scope(&self) -> &'s ResolutionScope<I> {
        self.scope
    }

    /// The active configuration
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Wrap `value` in an envelope without building the tree
    pub fn envelope(&self, value: &I) -> EnvelopeResult<Envelope> {
        let type_id = Any::type_id(Variant::as_any(value));
        let identifier = self
            .scope
            .identifier_of(type_id)
            .ok_or_else(|| EnvelopeError::UnregisteredType(Variant::variant_name(value)))?;
        tracing::trace!(identifier, "encoding polymorphic value");

        let data = Variant::to_structural(value)?;
        Ok(Envelope::new(identifier, data))
    }

    /// Encode `value` into an envelope tree
    pub fn encode(&self, value: &I) -> EnvelopeResult<Value> {
        Ok(self.envelope(value)?.into_tree(&self.config))
    }

    /// Decode an envelope tree into the concrete value it names
    pub fn decode(&self, tree: &Value) -> EnvelopeResult<Box<I>> {
        let envelope = Envelope::from_tree(tree, &self.config)?;
        self.open(&envelope)
    }

    /// Decode an already extracted envelope
    pub fn open(&self, envelope: &Envelope) -> EnvelopeResult<Box<I>> {
        let registration = self
            .scope
            .resolve(&envelope.type_id)
            .ok_or_else(|| EnvelopeError::UnresolvableType(envelope.type_id.clone()))?;

        registration
            .decode(&envelope.data)
            .map_err(|source| EnvelopeError::PayloadDecode {
                type_id: envelope.type_id.clone(),
                source,
            })
    }

    /// Encode `value` to JSON bytes
    pub fn encode_to_vec(&self, value: &I) -> EnvelopeResult<Vec<u8>> {
        let tree = self.encode(value)?;
        self.json.encode(&tree)
    }

    /// Encode `value` to a JSON string
    pub fn encode_string(&self, value: &I) -> EnvelopeResult<String> {
        let tree = self.encode(value)?;
        self.json.encode_string(&tree)
    }

    /// Decode JSON bytes holding an envelope
    pub fn decode_slice(&self, data: &[u8]) -> EnvelopeResult<Box<I>> {
        let tree: Value = self.json.decode(data)?;
        self.decode(&tree)
    }

    /// Decode a JSON string holding an envelope
    pub fn decode_str(&self, data: &str) -> EnvelopeResult<Box<I>> {
        let tree: Value = self.json.decode_str(data)?;
        self.decode(&tree)
    }
}

impl<I: ?Sized> fmt::Debug for EnvelopeCodec<'_, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvelopeCodec")
            .field("scope", self.scope)
            .field("config", &self.config)
            .finish()
    }
}
