//! Property-based tests for the reader and writer
//!
//! These tests use proptest to verify:
//! 1. Round-trip: read(write(tree)) == tree
//! 2. Indentation on input lines never changes the parsed tree
//! 3. Arbitrary input never panics the reader

#![allow(clippy::unwrap_used)]

use proptest::prelude::*;
use linexml::{
    from_str, to_string, utils::to_string_with_config, FormatConfig, Indent, Structure,
};

/// Strategy for tag and attribute names
fn arb_name() -> impl Strategy<Value = String> {
    "[a-zA-Z_][a-zA-Z0-9_.:-]{0,8}"
}

/// Strategy for attribute values: anything but a double quote
fn arb_value() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 =>/.,:_-]{0,12}"
}

/// Strategy for content: lines that start with a visible character
fn arb_content() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        prop::collection::vec("[a-zA-Z0-9][a-zA-Z0-9 =>.,!?]{0,15}", 1..4)
            .prop_map(|lines| lines.join("\n")),
    ]
}

fn arb_leaf() -> impl Strategy<Value = Structure> {
    (
        arb_name(),
        prop::collection::hash_map(arb_name(), arb_value(), 0..4),
        arb_content(),
    )
        .prop_map(|(key, attributes, content)| Structure {
            key,
            attributes: attributes.into_iter().collect(),
            content,
            childs: Vec::new(),
        })
}

/// Strategy for whole trees
fn arb_structure() -> impl Strategy<Value = Structure> {
    arb_leaf().prop_recursive(5, 64, 6, |inner| {
        (arb_leaf(), prop::collection::vec(inner, 0..6)).prop_map(|(mut node, childs)| {
            node.childs = childs;
            node
        })
    })
}

/// Re-indents every line of `text` with a per-line amount of spaces and tabs
fn reindent(text: &str, pads: &[usize]) -> String {
    text.lines()
        .enumerate()
        .map(|(i, line)| {
            let pad = pads.get(i % pads.len().max(1)).copied().unwrap_or(0);
            let indent: String = (0..pad).map(|n| if n % 2 == 0 { ' ' } else { '\t' }).collect();
            format!("{indent}{}", line.trim_start())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

proptest! {
    #[test]
    fn round_trip_with_tabs(tree in arb_structure()) {
        let text = to_string(&tree).unwrap();
        prop_assert_eq!(from_str(&text).unwrap(), tree);
    }

    #[test]
    fn round_trip_with_spaces(tree in arb_structure(), width in 0usize..5) {
        let config = FormatConfig { indent: Indent::Spaces(width) };
        let text = to_string_with_config(&tree, &config).unwrap();
        prop_assert_eq!(from_str(&text).unwrap(), tree);
    }

    #[test]
    fn indentation_is_insignificant(
        tree in arb_structure(),
        pads in prop::collection::vec(0usize..6, 1..8),
    ) {
        let text = to_string(&tree).unwrap();
        let shifted = reindent(&text, &pads);
        prop_assert_eq!(from_str(&shifted).unwrap(), from_str(&text).unwrap());
    }

    #[test]
    fn arbitrary_input_never_panics(s in "[<>/a-c=\" \n\t]{0,64}") {
        let _result = from_str(&s);
    }
}
