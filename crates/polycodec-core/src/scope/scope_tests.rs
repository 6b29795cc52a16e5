#![allow(non_snake_case)]

use super::*;
use crate::variant::{Variant, downcast_ref};
use serde::{Deserialize, Serialize};

trait Shape: Variant {}

trait Animal: Variant {}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Circle {
    radius: f64,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Square {
    side: f64,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Dog {
    name: String,
}

// Not registered by shape_scope()
#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Oval {
    width: f64,
    height: f64,
}

impl Shape for Circle {}
impl Shape for Square {}
impl Shape for Oval {}
impl Animal for Dog {}

impl TypeTag for Square {
    const TYPE_ID: &'static str = "geometry.Square";
}

fn shape_scope() -> ResolutionScope<dyn Shape> {
    let mut scope: ResolutionScope<dyn Shape> = ResolutionScope::new();
    scope
        .register::<Circle, _>("Circle", |c| Box::new(c))
        .unwrap()
        .register::<Square, _>("Square", |s| Box::new(s))
        .unwrap();
    scope
}

#[test]
fn ResolutionScope___new___is_empty() {
    let scope: ResolutionScope<dyn Shape> = ResolutionScope::new();

    assert!(scope.is_empty());
    assert_eq!(scope.len(), 0);
    assert!(scope.resolve("Circle").is_none());
}

#[test]
fn ResolutionScope___register___resolves_identifier_to_type() {
    let scope = shape_scope();

    let registration = scope.resolve("Circle").unwrap();

    assert_eq!(registration.identifier(), "Circle");
    assert_eq!(registration.type_id(), TypeId::of::<Circle>());
    assert!(registration.type_name().ends_with("Circle"));
}

#[test]
fn ResolutionScope___register___maps_type_back_to_identifier() {
    let scope = shape_scope();

    assert_eq!(scope.identifier_for::<Circle>(), Some("Circle"));
    assert_eq!(scope.identifier_for::<Square>(), Some("Square"));
    assert_eq!(scope.identifier_of(TypeId::of::<Dog>()), None);
}

#[test]
fn ResolutionScope___registration_decode___builds_concrete_value() {
    let scope = shape_scope();
    let registration = scope.resolve("Square").unwrap();

    let shape = registration.decode(&serde_json::json!({"side": 3.0})).unwrap();

    assert_eq!(
        downcast_ref::<Square, dyn Shape>(shape.as_ref()),
        Some(&Square { side: 3.0 })
    );
}

#[test]
fn ResolutionScope___registration_decode___rejects_wrong_shape() {
    let scope = shape_scope();
    let registration = scope.resolve("Square").unwrap();

    let result = registration.decode(&serde_json::json!({"radius": 3.0}));

    assert!(result.is_err());
}

#[test]
fn ResolutionScope___register_same_pair_twice___is_idempotent() {
    let mut scope = shape_scope();

    let result = scope.register::<Circle, _>("Circle", |c| Box::new(c));

    assert!(result.is_ok());
    assert_eq!(scope.len(), 2);
}

#[test]
fn ResolutionScope___register_taken_identifier___returns_duplicate_identifier() {
    let mut scope = shape_scope();

    let result = scope.register::<Square, _>("Circle", |s| Box::new(s));

    assert!(matches!(
        result,
        Err(EnvelopeError::DuplicateIdentifier { ref identifier, .. }) if identifier == "Circle"
    ));
}

#[test]
fn ResolutionScope___register_type_under_second_identifier___returns_duplicate_type() {
    let mut scope = shape_scope();

    let result = scope.register::<Circle, _>("Round", |c| Box::new(c));

    assert!(matches!(
        result,
        Err(EnvelopeError::DuplicateType { ref existing, .. }) if existing == "Circle"
    ));
    assert!(!scope.contains("Round"));
}

#[test]
fn ResolutionScope___register_empty_identifier___returns_invalid_identifier() {
    let mut scope: ResolutionScope<dyn Shape> = ResolutionScope::new();

    let result = scope.register::<Circle, _>("", |c| Box::new(c));

    assert!(matches!(result, Err(EnvelopeError::InvalidIdentifier(_))));
    assert!(scope.is_empty());
}

#[test]
fn ResolutionScope___register_tagged___uses_type_tag_identifier() {
    let mut scope: ResolutionScope<dyn Shape> = ResolutionScope::new();

    scope.register_tagged::<Square, _>(|s| Box::new(s)).unwrap();

    assert!(scope.contains("geometry.Square"));
    assert_eq!(scope.identifier_for::<Square>(), Some("geometry.Square"));
}

#[test]
fn ResolutionScope___register_alias___resolves_to_same_type() {
    let mut scope = shape_scope();

    scope.register_alias("shapes.Circle", "Circle").unwrap();

    let registration = scope.resolve("shapes.Circle").unwrap();
    assert_eq!(registration.identifier(), "Circle");
    assert_eq!(scope.identifier_for::<Circle>(), Some("Circle"));
    assert_eq!(scope.len(), 2);
}

#[test]
fn ResolutionScope___register_alias_to_unknown___returns_unresolvable() {
    let mut scope = shape_scope();

    let result = scope.register_alias("Old", "Missing");

    assert!(matches!(result, Err(EnvelopeError::UnresolvableType(_))));
}

#[test]
fn ResolutionScope___register_alias_over_other_type___returns_duplicate_identifier() {
    let mut scope = shape_scope();

    let result = scope.register_alias("Square", "Circle");

    assert!(matches!(
        result,
        Err(EnvelopeError::DuplicateIdentifier { .. })
    ));
}

#[test]
fn ResolutionScope___register_alias_twice___is_idempotent() {
    let mut scope = shape_scope();
    scope.register_alias("Round", "Circle").unwrap();

    let result = scope.register_alias("Round", "Circle");

    assert!(result.is_ok());
}

#[test]
fn ResolutionScope___register_over_own_alias___returns_duplicate_type() {
    let mut scope = shape_scope();
    scope.register_alias("Round", "Circle").unwrap();

    let result = scope.register::<Circle, _>("Round", |c| Box::new(c));

    assert!(matches!(
        result,
        Err(EnvelopeError::DuplicateType { ref existing, ref attempted, .. })
            if existing == "Circle" && attempted == "Round"
    ));
    assert_eq!(scope.identifier_for::<Circle>(), Some("Circle"));
}

#[test]
fn ResolutionScope___register_other_type_over_alias___names_both_types() {
    let mut scope = shape_scope();
    scope.register_alias("Round", "Circle").unwrap();

    let result = scope.register::<Oval, _>("Round", |d| Box::new(d));

    match result {
        Err(EnvelopeError::DuplicateIdentifier { existing, attempted, .. }) => {
            assert!(existing.ends_with("Circle"));
            assert!(attempted.ends_with("Oval"));
        }
        other => panic!("expected DuplicateIdentifier, got {:?}", other.err()),
    }
}

#[test]
fn ResolutionScope___identifiers___are_sorted_and_exclude_aliases() {
    let mut scope = shape_scope();
    scope.register_alias("AnotherCircle", "Circle").unwrap();

    assert_eq!(scope.identifiers(), vec!["Circle", "Square"]);
}

#[test]
fn ResolutionScope___scopes_per_interface___do_not_share_identifiers() {
    let shapes = shape_scope();
    let mut animals: ResolutionScope<dyn Animal> = ResolutionScope::new();
    animals.register::<Dog, _>("Dog", |d| Box::new(d)).unwrap();

    assert!(shapes.resolve("Dog").is_none());
    assert!(animals.resolve("Circle").is_none());
}

#[test]
fn ResolutionScope___debug___lists_identifiers() {
    let scope = shape_scope();

    let debug = format!("{:?}", scope);

    assert!(debug.contains("Circle"));
    assert!(debug.contains("Square"));
}

#[test]
fn ResolutionScope___is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<ResolutionScope<dyn Shape>>();
}
