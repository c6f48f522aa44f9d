//! Property-based tests for the XML tree
//!
//! These tests use proptest to verify:
//! 1. Roundtrip property: parse(serialize(tree)) == tree
//! 2. Entity encoding is undone by decoding
//! 3. Arbitrary or truncated input never panics and never yields a tree

use proptest::prelude::*;
use xmlite::{entity, parse_node, Document, Node};

/// Strategy for element and attribute names
fn arb_name() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9_]{0,8}"
}

/// Strategy for attribute values: anything that fits on one line and
/// contains no `%`, which would start a numeric reference on decode
fn arb_value() -> impl Strategy<Value = String> {
    "[^\r\n%]{0,16}"
}

fn arb_attrs() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec((arb_name(), arb_value()), 0..4)
}

fn build(name: String, attrs: Vec<(String, String)>, children: Vec<Node>) -> Node {
    let mut node = Node::new(name);
    for (key, value) in attrs {
        node.append(key, value);
    }
    for child in children {
        node.append_child(child);
    }
    node
}

/// Strategy for arbitrary trees
fn arb_node() -> impl Strategy<Value = Node> {
    let leaf = (arb_name(), arb_attrs()).prop_map(|(name, attrs)| build(name, attrs, Vec::new()));

    leaf.prop_recursive(4, 48, 5, |inner| {
        (arb_name(), arb_attrs(), prop::collection::vec(inner, 0..5))
            .prop_map(|(name, attrs, children)| build(name, attrs, children))
    })
}

proptest! {
    #[test]
    fn node_roundtrip(node in arb_node()) {
        let serialized = node.to_string();
        let parsed = parse_node(&serialized).unwrap();
        prop_assert_eq!(parsed, node);
    }

    #[test]
    fn document_roundtrip(node in arb_node()) {
        let doc = Document::new(node);
        let parsed = Document::parse(&doc.to_string()).unwrap();
        prop_assert_eq!(parsed, doc);
    }

    /// The indented log form is still valid input
    #[test]
    fn log_form_roundtrip(node in arb_node()) {
        let parsed = parse_node(&node.log_string(0)).unwrap();
        prop_assert_eq!(parsed, node);
    }

    #[test]
    fn encode_then_decode(s in "[^%]*") {
        let encoded = entity::encode(&s);
        prop_assert_eq!(entity::decode(&encoded), s.as_str());
    }

    #[test]
    fn encoded_text_has_no_specials(s in any::<String>()) {
        let encoded = entity::encode(&s);
        prop_assert!(!encoded.contains(['<', '>', '"', '\'']));
    }

    #[test]
    fn arbitrary_input_never_panics(s in any::<String>()) {
        let _ = Document::parse(&s);
        let _ = parse_node(&s);
    }

    /// Every cut before the final `>` leaves an incomplete tree
    #[test]
    fn truncated_input_fails(node in arb_node(), cut in any::<prop::sample::Index>()) {
        let serialized = node.to_string();
        let last = serialized.rfind('>').unwrap();
        let boundaries: Vec<usize> = serialized
            .char_indices()
            .map(|(i, _)| i)
            .filter(|&i| i <= last)
            .collect();
        let end = boundaries[cut.index(boundaries.len())];
        prop_assert!(parse_node(&serialized[..end]).is_err());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_dedupes_attributes() {
        let node = build(
            "a".to_string(),
            vec![
                ("x".to_string(), "1".to_string()),
                ("x".to_string(), "2".to_string()),
            ],
            Vec::new(),
        );
        assert_eq!(node.attr_count(), 1);
        assert_eq!(node.value("x"), Some("2"));
    }

    #[test]
    fn test_simple_roundtrip() {
        let xml = "<a k=\"v &amp; w\"><b/><c x=\"1\"/></a>";
        let parsed = parse_node(xml).unwrap();
        let reparsed = parse_node(&parsed.to_string()).unwrap();
        assert_eq!(parsed, reparsed);
    }
}
