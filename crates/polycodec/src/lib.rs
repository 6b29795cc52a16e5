//! # polycodec
//!
//! Serialize values whose static type is a trait object and get the exact
//! concrete type back on decode.
//!
//! Every polymorphic value is written as an envelope:
//!
//! ```text
//! { "type": "<identifier>", "data": <payload of the concrete type> }
//! ```
//!
//! The identifier is looked up in a [`ResolutionScope`] built by explicit
//! registration, one scope per interface.
//!
//! ## Quick Start
//!
//! ```ignore
//! use polycodec::prelude::*;
//!
//! trait Shape: Variant {
//!     fn area(&self) -> f64;
//! }
//!
//! #[derive(Debug, Serialize, Deserialize, TypeTag)]
//! struct Circle {
//!     radius: f64,
//! }
//!
//! impl Shape for Circle {
//!     fn area(&self) -> f64 {
//!         std::f64::consts::PI * self.radius * self.radius
//!     }
//! }
//!
//! let mut scope: ResolutionScope<dyn Shape> = ResolutionScope::new();
//! scope.register_tagged::<Circle, _>(|c| Box::new(c))?;
//!
//! let codec = EnvelopeCodec::new(&scope);
//! let tree = codec.encode(&Circle { radius: 2.0 })?;
//! // {"type":"Circle","data":{"radius":2.0}}
//!
//! let shape: Box<dyn Shape> = codec.decode(&tree)?;
//! assert!(shape.area() > 12.0);
//! ```
//!
//! ## Interface-typed fields
//!
//! Fields declared as an interface use [`Poly`] and a process-wide scope
//! declared with [`interface!`]:
//!
//! ```ignore
//! interface!(dyn Shape { Circle, Square });
//!
//! #[derive(Serialize, Deserialize)]
//! struct Drawing {
//!     shapes: Vec<Poly<dyn Shape>>,
//! }
//! ```
//!
//! ## Dependencies
//!
//! `#[derive(TypeTag)]` and [`interface!`] only need `polycodec`. The
//! `Serialize`/`Deserialize` derives re-exported by the prelude expand to
//! paths under `serde`, so either list `serde` (with the `derive` feature)
//! in your own manifest or point the derives at the re-export:
//!
//! ```ignore
//! #[derive(Serialize, Deserialize, TypeTag)]
//! #[serde(crate = "polycodec::serde")]
//! struct Circle {
//!     radius: f64,
//! }
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports from:
//! - [`polycodec_core`] - Errors, configuration, `Variant`, resolution scopes
//! - [`polycodec_transport`] - Envelope codec, `Poly`, JSON structural codec
//! - [`polycodec_macros`] - `#[derive(TypeTag)]`

// The derive names paths as `::polycodec::...`, including inside this crate
extern crate self as polycodec;

mod logging;

// Re-export core types
pub use polycodec_core::{
    CodecConfig, EnvelopeError, EnvelopeResult, Registration, ResolutionScope, TypeTag, Variant,
    downcast_ref,
};

// Re-export transport types
pub use polycodec_transport::{
    Codec, Envelope, EnvelopeCodec, Interface, JsonCodec, Poly, interface, interface_codec,
};

// Re-export macros
pub use polycodec_macros::TypeTag;

pub use logging::{init_logging, init_logging_with_filter};

// Re-export common dependencies that users need
pub use serde;
pub use serde_json;
pub use tracing;

/// Paths used by `#[derive(TypeTag)]` expansions. Not part of the public API.
#[doc(hidden)]
pub mod __private {
    pub use polycodec_core::TypeTag;
}

/// Prelude module for convenient imports.
///
/// Use `use polycodec::prelude::*;` to import commonly used types.
///
/// This includes:
/// - Traits: `Variant`, `TypeTag` (trait and derive), `Interface`
/// - Types: `ResolutionScope`, `EnvelopeCodec`, `Poly`, `CodecConfig`
/// - Errors: `EnvelopeError`, `EnvelopeResult`
/// - Macros: `interface!`
/// - Serde derives: `Serialize`, `Deserialize`
pub mod prelude {
    pub use crate::{
        CodecConfig, EnvelopeCodec, EnvelopeError, EnvelopeResult, Interface, Poly,
        ResolutionScope, TypeTag, Variant, downcast_ref, interface,
    };

    // Serde derives (commonly needed for concrete types). They still resolve
    // `serde` from the user's crate; see the crate docs.
    pub use serde::{Deserialize, Serialize};
}
