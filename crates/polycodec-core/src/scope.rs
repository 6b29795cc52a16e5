//! Resolution scopes mapping type identifiers to concrete decoders
//!
//! A [`ResolutionScope`] is built once, by explicit registration, for one
//! interface type `I` (usually `dyn SomeTrait`). Registration requires an
//! upcast `Fn(C) -> Box<I>`, so only types that actually implement `I` can be
//! reached from a tag decoded against this scope.

use crate::error::{EnvelopeError, EnvelopeResult};
use crate::variant::TypeTag;
use serde::de::DeserializeOwned;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;

type DecodeFn<I> = Box<dyn Fn(&serde_json::Value) -> Result<Box<I>, serde_json::Error> + Send + Sync>;

/// A concrete type registered in a [`ResolutionScope`]
pub struct Registration<I: ?Sized> {
    identifier: String,
    type_name: &'static str,
    type_id: TypeId,
    decode: DecodeFn<I>,
}

impl<I: ?Sized> Registration<I> {
    /// Primary identifier of the registered type
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Rust type name of the registered type
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// `TypeId` of the registered type
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Decode a structural payload as the registered type
    pub fn decode(&self, data: &serde_json::Value) -> Result<Box<I>, serde_json::Error> {
        (self.decode)(data)
    }
}

impl<I: ?Sized> fmt::Debug for Registration<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("identifier", &self.identifier)
            .field("type_name", &self.type_name)
            .finish()
    }
}

/// Lookup from type identifier to concrete decoder for interface `I`
pub struct ResolutionScope<I: ?Sized> {
    registrations: Vec<Registration<I>>,
    by_identifier: HashMap<String, usize>,
    by_type: HashMap<TypeId, usize>,
}

impl<I: ?Sized> ResolutionScope<I> {
    /// Create an empty scope
    pub fn new() -> Self {
        Self {
            registrations: Vec::new(),
            by_identifier: HashMap::new(),
            by_type: HashMap::new(),
        }
    }

    /// Register concrete type `C` under `identifier`
    ///
    /// Registering the same type under the same identifier again is a no-op.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let mut scope: ResolutionScope<dyn Shape> = ResolutionScope::new();
    /// scope
    ///     .register::<Circle, _>("Circle", |c| Box::new(c))?
    ///     .register::<Square, _>("Square", |s| Box::new(s))?;
    /// ```
    pub fn register<C, F>(
        &mut self,
        identifier: impl Into<String>,
        upcast: F,
    ) -> EnvelopeResult<&mut Self>
    where
        I: 'static,
        C: DeserializeOwned + Any,
        F: Fn(C) -> Box<I> + Send + Sync + 'static,
    {
        let identifier = identifier.into();
        let type_id = TypeId::of::<C>();
        let type_name = std::any::type_name::<C>();

        if identifier.is_empty() {
            return Err(EnvelopeError::InvalidIdentifier(identifier));
        }

        if let Some(&index) = self.by_identifier.get(&identifier) {
            let existing = &self.registrations[index];
            if existing.type_id == type_id {
                if existing.identifier == identifier {
                    return Ok(self);
                }
                // `identifier` is an alias of this same type
                return Err(EnvelopeError::DuplicateType {
                    type_name,
                    existing: existing.identifier.clone(),
                    attempted: identifier,
                });
            }
            return Err(EnvelopeError::DuplicateIdentifier {
                identifier,
                existing: existing.type_name,
                attempted: type_name,
            });
        }

        if let Some(&index) = self.by_type.get(&type_id) {
            return Err(EnvelopeError::DuplicateType {
                type_name,
                existing: self.registrations[index].identifier.clone(),
                attempted: identifier,
            });
        }

        tracing::debug!(identifier = %identifier, type_name, "registering type");

        let index = self.registrations.len();
        self.registrations.push(Registration {
            identifier: identifier.clone(),
            type_name,
            type_id,
            decode: Box::new(move |data: &serde_json::Value| C::deserialize(data).map(&upcast)),
        });
        self.by_identifier.insert(identifier, index);
        self.by_type.insert(type_id, index);
        Ok(self)
    }

    /// Register concrete type `C` under its [`TypeTag::TYPE_ID`]
    pub fn register_tagged<C, F>(&mut self, upcast: F) -> EnvelopeResult<&mut Self>
    where
        I: 'static,
        C: TypeTag + DeserializeOwned + Any,
        F: Fn(C) -> Box<I> + Send + Sync + 'static,
    {
        self.register::<C, F>(C::TYPE_ID, upcast)
    }

    /// Accept `alias` as an alternate identifier for an already registered type
    ///
    /// Aliases are decode-only; encoding always emits the primary identifier.
    pub fn register_alias(
        &mut self,
        alias: impl Into<String>,
        identifier: &str,
    ) -> EnvelopeResult<&mut Self> {
        let alias = alias.into();
        if alias.is_empty() {
            return Err(EnvelopeError::InvalidIdentifier(alias));
        }

        let index = *self
            .by_identifier
            .get(identifier)
            .ok_or_else(|| EnvelopeError::UnresolvableType(identifier.to_string()))?;

        match self.by_identifier.get(&alias).copied() {
            Some(existing) if existing == index => return Ok(self),
            Some(existing) => {
                return Err(EnvelopeError::DuplicateIdentifier {
                    identifier: alias,
                    existing: self.registrations[existing].type_name,
                    attempted: self.registrations[index].type_name,
                });
            }
            None => {}
        }

        tracing::debug!(alias = %alias, identifier, "registering alias");
        self.by_identifier.insert(alias, index);
        Ok(self)
    }

    /// Resolve an identifier (primary or alias) to its registration
    pub fn resolve(&self, identifier: &str) -> Option<&Registration<I>> {
        let registration = self
            .by_identifier
            .get(identifier)
            .map(|&index| &self.registrations[index]);
        tracing::trace!(identifier, found = registration.is_some(), "resolving type identifier");
        registration
    }

    /// Primary identifier registered for the type with the given `TypeId`
    pub fn identifier_of(&self, type_id: TypeId) -> Option<&str> {
        self.by_type
            .get(&type_id)
            .map(|&index| self.registrations[index].identifier.as_str())
    }

    /// Primary identifier registered for `C`
    pub fn identifier_for<C: Any>(&self) -> Option<&str> {
        self.identifier_of(TypeId::of::<C>())
    }

    /// Returns true if `identifier` resolves in this scope
    pub fn contains(&self, identifier: &str) -> bool {
        self.by_identifier.contains_key(identifier)
    }

    /// Number of registered types (aliases not counted)
    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    /// Returns true if no types are registered
    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    /// Primary identifiers, sorted
    pub fn identifiers(&self) -> Vec<&str> {
        let mut identifiers: Vec<&str> = self
            .registrations
            .iter()
            .map(|r| r.identifier.as_str())
            .collect();
        identifiers.sort_unstable();
        identifiers
    }
}

impl<I: ?Sized> Default for ResolutionScope<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: ?Sized> fmt::Debug for ResolutionScope<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolutionScope")
            .field("identifiers", &self.identifiers())
            .field("aliases", &(self.by_identifier.len() - self.registrations.len()))
            .finish()
    }
}

#[cfg(test)]
#[path = "scope/scope_tests.rs"]
mod scope_tests;
