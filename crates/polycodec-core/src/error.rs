//! Error types for polymorphic envelope encoding and decoding

use thiserror::Error;

/// Result type alias for envelope operations
pub type EnvelopeResult<T> = Result<T, EnvelopeError>;

/// Error type for envelope operations
#[derive(Error, Debug)]
pub enum EnvelopeError {
    /// The tree presented for decode is not a well-formed `{type, data}` envelope
    #[error("malformed envelope: {0}")]
    MalformedEnvelope(String),

    /// The type identifier is not known to the resolution scope
    #[error("unresolvable type identifier: {0}")]
    UnresolvableType(String),

    /// The resolved concrete type rejected the envelope payload
    #[error("failed to decode payload as '{type_id}': {source}")]
    PayloadDecode {
        type_id: String,
        #[source]
        source: serde_json::Error,
    },

    /// The runtime type of an encoded value has no registration in the scope
    #[error("type '{0}' is not registered in the resolution scope")]
    UnregisteredType(&'static str),

    /// An identifier is already bound to a different concrete type
    #[error("identifier '{identifier}' is already bound to '{existing}', cannot bind '{attempted}'")]
    DuplicateIdentifier {
        identifier: String,
        existing: &'static str,
        attempted: &'static str,
    },

    /// A concrete type is already registered under a different identifier
    #[error("type '{type_name}' is already registered as '{existing}', cannot register as '{attempted}'")]
    DuplicateType {
        type_name: &'static str,
        existing: String,
        attempted: String,
    },

    /// Identifier rejected at registration time
    #[error("invalid type identifier: {0:?}")]
    InvalidIdentifier(String),

    /// Failure of the underlying structural encoder/decoder
    #[error("structural codec error: {0}")]
    Structural(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl EnvelopeError {
    /// Returns true if the input was not a valid envelope
    pub fn is_malformed(&self) -> bool {
        matches!(self, EnvelopeError::MalformedEnvelope(_))
    }

    /// Returns true if the envelope named a type the scope cannot resolve
    pub fn is_unresolvable(&self) -> bool {
        matches!(self, EnvelopeError::UnresolvableType(_))
    }

    /// Returns true if the concrete decoder rejected the payload
    pub fn is_payload_error(&self) -> bool {
        matches!(self, EnvelopeError::PayloadDecode { .. })
    }
}
