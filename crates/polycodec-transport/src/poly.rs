//! Interface-typed fields nested inside other serializable values
//!
//! Serde derives cannot thread a scope through `Deserialize`, so a field of
//! interface type resolves identifiers against a process-wide scope declared
//! once per interface with [`interface!`](crate::interface). The scope is
//! initialized atomically on first use and never changes afterwards.

use crate::envelope_codec::EnvelopeCodec;
use polycodec_core::{CodecConfig, EnvelopeResult, ResolutionScope, Variant};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser};
use std::any::Any;
use std::fmt;
use std::ops::{Deref, DerefMut};

/// An interface type (`dyn Trait`) with a process-wide resolution scope
pub trait Interface: Variant {
    /// The scope used for envelopes of this interface
    fn scope() -> EnvelopeResult<&'static ResolutionScope<Self>>;

    /// Envelope configuration used for fields of this interface
    fn config() -> CodecConfig {
        CodecConfig::default()
    }
}

/// Codec bound to the process-wide scope of `I`
pub fn interface_codec<I: ?Sized + Interface>() -> EnvelopeResult<EnvelopeCodec<'static, I>> {
    EnvelopeCodec::with_config(I::scope()?, I::config())
}

/// Owned interface value that serializes as an envelope
///
/// # Example
///
/// ```ignore
/// #[derive(Serialize, Deserialize)]
/// struct Drawing {
///     shapes: Vec<Poly<dyn Shape>>,
/// }
/// ```
pub struct Poly<I: ?Sized>(Box<I>);

impl<I: ?Sized> Poly<I> {
    /// Wrap a boxed interface value
    pub fn new(value: Box<I>) -> Self {
        Self(value)
    }

    /// Unwrap into the boxed interface value
    pub fn into_inner(self) -> Box<I> {
        self.0
    }
}

impl<I: ?Sized + Variant> Poly<I> {
    /// Downcast to the concrete type `C`
    pub fn downcast_ref<C: Any>(&self) -> Option<&C> {
        polycodec_core::downcast_ref::<C, I>(self.0.as_ref())
    }
}

impl<I: ?Sized> From<Box<I>> for Poly<I> {
    fn from(value: Box<I>) -> Self {
        Self(value)
    }
}

impl<I: ?Sized> Deref for Poly<I> {
    type Target = I;

    fn deref(&self) -> &I {
        &self.0
    }
}

impl<I: ?Sized> DerefMut for Poly<I> {
    fn deref_mut(&mut self) -> &mut I {
        &mut self.0
    }
}

impl<I: ?Sized + fmt::Debug> fmt::Debug for Poly<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Poly").field(&&*self.0).finish()
    }
}

/// Structural equality: same concrete type and same encoded payload
impl<I: ?Sized + Variant> PartialEq for Poly<I> {
    fn eq(&self, other: &Self) -> bool {
        let (left, right) = (self.0.as_ref(), other.0.as_ref());
        if Any::type_id(Variant::as_any(left)) != Any::type_id(Variant::as_any(right)) {
            return false;
        }
        match (Variant::to_structural(left), Variant::to_structural(right)) {
            (Ok(left), Ok(right)) => left == right,
            _ => false,
        }
    }
}

impl<I: ?Sized + Interface> Serialize for Poly<I> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let tree = interface_codec::<I>()
            .and_then(|codec| codec.encode(self.0.as_ref()))
            .map_err(ser::Error::custom)?;
        tree.serialize(serializer)
    }
}

impl<'de, I: ?Sized + Interface> Deserialize<'de> for Poly<I> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tree = serde_json::Value::deserialize(deserializer)?;
        interface_codec::<I>()
            .and_then(|codec| codec.decode(&tree))
            .map(Poly)
            .map_err(de::Error::custom)
    }
}

/// Declare the process-wide scope of an interface from its `TypeTag` types
///
/// ```ignore
/// trait Shape: Variant {}
///
/// interface!(dyn Shape { Circle, Square });
/// ```
///
/// Registration errors (for example two types sharing an identifier) are
/// returned from every [`Interface::scope`] call.
#[macro_export]
macro_rules! interface {
    (dyn $iface:path { $($variant:ty),* $(,)? }) => {
        impl $crate::Interface for dyn $iface {
            fn scope() -> $crate::__private::EnvelopeResult<
                &'static $crate::__private::ResolutionScope<Self>,
            > {
                static SCOPE: $crate::__private::OnceCell<
                    $crate::__private::ResolutionScope<dyn $iface>,
                > = $crate::__private::OnceCell::new();

                SCOPE.get_or_try_init(|| {
                    let mut scope: $crate::__private::ResolutionScope<dyn $iface> =
                        $crate::__private::ResolutionScope::new();
                    $(
                        scope.register_tagged::<$variant, _>(|value| ::std::boxed::Box::new(value))?;
                    )*
                    $crate::__private::tracing::debug!(
                        interface = stringify!($iface),
                        types = scope.len(),
                        "initialized resolution scope"
                    );
                    Ok::<_, $crate::__private::EnvelopeError>(scope)
                })
            }
        }
    };
}
