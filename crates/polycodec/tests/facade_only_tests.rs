//! Usage through the facade alone
//!
//! Every path here goes through `polycodec`, the way an application that
//! lists only `polycodec` in its manifest writes it.

#![allow(non_snake_case)]

use polycodec::prelude::*;
use polycodec::serde_json::{self, json};

trait Message: Variant + std::fmt::Debug {
    fn topic(&self) -> &str;
}

#[derive(Debug, PartialEq, Serialize, Deserialize, TypeTag)]
#[serde(crate = "polycodec::serde")]
struct Published {
    topic: String,
    body: String,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, TypeTag)]
#[serde(crate = "polycodec::serde")]
#[type_tag(id = "msg.ack")]
struct Acked {
    topic: String,
    sequence: u64,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(crate = "polycodec::serde")]
struct Batch {
    messages: Vec<Poly<dyn Message>>,
}

impl Message for Published {
    fn topic(&self) -> &str {
        &self.topic
    }
}

impl Message for Acked {
    fn topic(&self) -> &str {
        &self.topic
    }
}

interface!(dyn Message { Published, Acked });

#[test]
fn TypeTag___derived_through_facade___has_identifiers() {
    assert_eq!(Published::TYPE_ID, "Published");
    assert_eq!(Acked::TYPE_ID, "msg.ack");
}

#[test]
fn EnvelopeCodec___facade_paths___roundtrip() {
    let mut scope: ResolutionScope<dyn Message> = ResolutionScope::new();
    scope
        .register_tagged::<Published, _>(|m| Box::new(m))
        .unwrap()
        .register_tagged::<Acked, _>(|m| Box::new(m))
        .unwrap();
    let codec = EnvelopeCodec::new(&scope);

    let tree = codec
        .encode(&Acked {
            topic: "orders".into(),
            sequence: 9,
        })
        .unwrap();
    let message = codec.decode(&tree).unwrap();

    assert_eq!(
        tree,
        json!({"type": "msg.ack", "data": {"topic": "orders", "sequence": 9}})
    );
    assert_eq!(message.topic(), "orders");
    assert!(downcast_ref::<Acked, dyn Message>(message.as_ref()).is_some());
}

#[test]
fn Poly___facade_paths___nested_roundtrip() {
    let batch = Batch {
        messages: vec![
            Poly::new(Box::new(Published {
                topic: "orders".into(),
                body: "created".into(),
            })),
            Poly::new(Box::new(Acked {
                topic: "orders".into(),
                sequence: 1,
            })),
        ],
    };

    let text = serde_json::to_string(&batch).unwrap();
    let decoded: Batch = serde_json::from_str(&text).unwrap();

    assert_eq!(decoded, batch);
    assert!(text.contains(r#"{"type":"Published","data":{"topic":"orders","body":"created"}}"#));
}
