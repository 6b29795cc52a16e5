//! Envelope codec configuration

use crate::error::{EnvelopeError, EnvelopeResult};
use serde::{Deserialize, Serialize};

/// Configuration for envelope encoding and decoding
///
/// The defaults produce the canonical wire shape:
///
/// ```text
/// { "type": "<identifier>", "data": <payload> }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecConfig {
    /// Name of the member carrying the type identifier
    #[serde(default = "default_type_field")]
    pub type_field: String,

    /// Name of the member carrying the encoded payload
    #[serde(default = "default_data_field")]
    pub data_field: String,

    /// Whether byte/string output is pretty-printed (default: false)
    #[serde(default)]
    pub pretty: bool,

    /// Reject envelopes carrying members other than the type and data members
    ///
    /// Extra members are ignored by default.
    #[serde(default)]
    pub deny_unknown_members: bool,
}

fn default_type_field() -> String {
    "type".to_string()
}

fn default_data_field() -> String {
    "data".to_string()
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            type_field: default_type_field(),
            data_field: default_data_field(),
            pretty: false,
            deny_unknown_members: false,
        }
    }
}

impl CodecConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create configuration from JSON bytes
    ///
    /// Empty input yields the default configuration.
    pub fn from_json(bytes: &[u8]) -> EnvelopeResult<Self> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        let config: Self =
            serde_json::from_slice(bytes).map_err(|e| EnvelopeError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Create configuration from a TOML document
    pub fn from_toml_str(source: &str) -> EnvelopeResult<Self> {
        let config: Self =
            toml::from_str(source).map_err(|e| EnvelopeError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Set the member names used for the identifier and the payload
    pub fn with_field_names(
        mut self,
        type_field: impl Into<String>,
        data_field: impl Into<String>,
    ) -> Self {
        self.type_field = type_field.into();
        self.data_field = data_field.into();
        self
    }

    /// Enable pretty-printed output
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Reject envelopes with members beyond the type and data members
    pub fn with_deny_unknown_members(mut self, deny: bool) -> Self {
        self.deny_unknown_members = deny;
        self
    }

    /// Check that the member names are usable
    pub fn validate(&self) -> EnvelopeResult<()> {
        if self.type_field.is_empty() {
            return Err(EnvelopeError::Config("type_field must not be empty".into()));
        }
        if self.data_field.is_empty() {
            return Err(EnvelopeError::Config("data_field must not be empty".into()));
        }
        if self.type_field == self.data_field {
            return Err(EnvelopeError::Config(format!(
                "type_field and data_field must differ, both are '{}'",
                self.type_field
            )));
        }
        Ok(())
    }
}
