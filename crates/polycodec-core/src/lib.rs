//! polycodec-core - Core traits, errors, and resolution scopes
//!
//! This crate provides the foundational types for polymorphic serialization:
//! - [`Variant`] capabilities every concrete value behind an interface has
//! - [`TypeTag`] for a concrete type's default identifier
//! - [`ResolutionScope`] mapping identifiers to concrete decoders
//! - [`EnvelopeError`] for error handling
//! - [`CodecConfig`] for envelope configuration

mod config;
mod error;
mod scope;
mod variant;

pub use config::CodecConfig;
pub use error::{EnvelopeError, EnvelopeResult};
pub use scope::{Registration, ResolutionScope};
pub use variant::{TypeTag, Variant, downcast_ref};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        CodecConfig, EnvelopeError, EnvelopeResult, ResolutionScope, TypeTag, Variant,
        downcast_ref,
    };
}
