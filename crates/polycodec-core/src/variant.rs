//! Concrete-type capabilities required of polymorphic values

use serde::Serialize;
use std::any::Any;

/// Stable type identifier of a concrete type
///
/// Usually derived with `#[derive(TypeTag)]`. The identifier is what the
/// envelope's `type` member carries on the wire.
pub trait TypeTag {
    /// Identifier embedded in envelopes for this type
    const TYPE_ID: &'static str;
}

/// Object-safe capabilities of a concrete value behind an interface
///
/// Interface traits extend this so that a `&dyn Interface` can be encoded
/// with its concrete layout and its runtime type recovered:
///
/// ```ignore
/// trait Shape: Variant {
///     fn area(&self) -> f64;
/// }
/// ```
///
/// Implemented for every `Serialize + 'static` type; there is no need to
/// implement it by hand.
pub trait Variant: Any {
    /// Encode this value using its concrete type's structure
    fn to_structural(&self) -> Result<serde_json::Value, serde_json::Error>;

    /// Borrow as `Any` for runtime type inspection
    fn as_any(&self) -> &dyn Any;

    /// Convert into a boxed `Any`
    fn into_any(self: Box<Self>) -> Box<dyn Any>;

    /// Rust type name of the concrete type, for diagnostics only
    fn variant_name(&self) -> &'static str;
}

impl<T: Serialize + Any> Variant for T {
    fn to_structural(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }

    fn variant_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

/// Downcast an interface value to a concrete type
///
/// Returns `None` when the runtime type is not exactly `C`.
pub fn downcast_ref<C: Any, I: ?Sized + Variant>(value: &I) -> Option<&C> {
    Variant::as_any(value).downcast_ref::<C>()
}
