//! Structural codec trait and JSON implementation

use polycodec_core::EnvelopeResult;
use serde::{Serialize, de::DeserializeOwned};

/// Trait for the structural (non-polymorphic) encoding of concrete values
pub trait Codec: Send + Sync {
    /// Encode a value to bytes
    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> EnvelopeResult<Vec<u8>>;

    /// Decode bytes to a value
    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> EnvelopeResult<T>;

    /// Get the content type for this codec
    fn content_type(&self) -> &'static str;
}

/// JSON codec implementation using serde_json
#[derive(Debug, Clone, Default)]
pub struct JsonCodec {
    /// Whether to pretty-print output (default: false for efficiency)
    pretty: bool,
}

impl JsonCodec {
    /// Create a new JSON codec
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Create a JSON codec that pretty-prints output
    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    /// Returns true if output is pretty-printed
    pub fn is_pretty(&self) -> bool {
        self.pretty
    }

    /// Encode a value directly to a JSON string
    pub fn encode_string<T: Serialize + ?Sized>(&self, value: &T) -> EnvelopeResult<String> {
        let encoded = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(encoded)
    }

    /// Decode a JSON string to a value
    pub fn decode_str<T: DeserializeOwned>(&self, data: &str) -> EnvelopeResult<T> {
        Ok(serde_json::from_str(data)?)
    }
}

impl Codec for JsonCodec {
    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> EnvelopeResult<Vec<u8>> {
        let encoded = if self.pretty {
            serde_json::to_vec_pretty(value)?
        } else {
            serde_json::to_vec(value)?
        };
        Ok(encoded)
    }

    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> EnvelopeResult<T> {
        Ok(serde_json::from_slice(data)?)
    }

    fn content_type(&self) -> &'static str {
        "application/json"
    }
}
