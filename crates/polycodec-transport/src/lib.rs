//! polycodec-transport - Envelope codec and JSON structural layer
//!
//! This crate provides:
//! - [`Envelope`] for the `{type, data}` wire shape
//! - [`EnvelopeCodec`] for polymorphic encode/decode against a scope
//! - [`Codec`] trait and [`JsonCodec`] for the structural layer
//! - [`Poly`] and [`Interface`] for interface-typed fields in serde types

mod codec;
mod envelope;
mod envelope_codec;
mod poly;

pub use codec::{Codec, JsonCodec};
pub use envelope::Envelope;
pub use envelope_codec::EnvelopeCodec;
pub use poly::{Interface, Poly, interface_codec};

#[doc(hidden)]
pub mod __private {
    pub use once_cell::sync::OnceCell;
    pub use polycodec_core::{EnvelopeError, EnvelopeResult, ResolutionScope};
    pub use tracing;
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{Codec, Envelope, EnvelopeCodec, Interface, JsonCodec, Poly, interface};
}
