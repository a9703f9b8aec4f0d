//! Property tests for the parse/evaluate pipeline

use proptest::prelude::*;

use crate::ast::{BinaryOp, Node, UnaryOp};
use crate::cache::evaluate_str;
use crate::evaluator::Bindings;
use crate::lexer::{Lexer, TokenKind};
use crate::parser::parse;

// ═══════════════════════════════════════════════════════════════════════════
// Strategy generators
// ═══════════════════════════════════════════════════════════════════════════

/// Generate identifiers that can never collide with a keyword
fn identifier_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,7}"
        .prop_filter("keywords are reserved", |s| {
            !matches!(s.as_str(), "and" | "or" | "not")
        })
}

/// Generate well-formed expression text of bounded depth
fn expr_text_strategy() -> impl Strategy<Value = String> {
    identifier_strategy().prop_recursive(4, 24, 2, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|(a, b)| format!("{} and {}", a, b)),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| format!("{} or {}", a, b)),
            inner.clone().prop_map(|a| format!("not {}", a)),
            inner.prop_map(|a| format!("({})", a)),
        ]
    })
}

/// Collect identifier names in tree-walk order
fn collect_identifiers(node: &Node, out: &mut Vec<String>) {
    match node {
        Node::Identifier(name) => out.push(name.clone()),
        Node::Unary { operand, .. } => collect_identifiers(operand, out),
        Node::Binary { left, right, .. } => {
            collect_identifiers(left, out);
            collect_identifiers(right, out);
        }
        Node::Paren(inner) => collect_identifiers(inner, out),
    }
}

/// Bind every identifier in the tree, cycling through `values`
fn full_bindings(node: &Node, values: &[bool]) -> Bindings {
    let mut names = Vec::new();
    collect_identifiers(node, &mut names);
    names
        .into_iter()
        .enumerate()
        .map(|(i, name)| (name, values[i % values.len()]))
        .collect()
}

/// Non-short-circuiting evaluation; `None` on any unbound identifier
fn reference_eval(node: &Node, bindings: &Bindings) -> Option<bool> {
    match node {
        Node::Identifier(name) => bindings.get(name).copied(),
        Node::Binary { op, left, right } => {
            let l = reference_eval(left, bindings)?;
            let r = reference_eval(right, bindings)?;
            Some(match op {
                BinaryOp::And => l && r,
                BinaryOp::Or => l || r,
            })
        }
        Node::Unary {
            op: UnaryOp::Not,
            operand,
        } => Some(!reference_eval(operand, bindings)?),
        Node::Paren(inner) => reference_eval(inner, bindings),
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Properties
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    /// Every expression the grammar can produce parses
    #[test]
    fn prop_generated_expressions_parse(text in expr_text_strategy()) {
        prop_assert!(parse(&text).is_ok(), "failed to parse: {}", text);
    }

    /// Printing a tree and re-parsing the output reproduces the tree
    #[test]
    fn prop_print_reparse_round_trip(text in expr_text_strategy()) {
        let tree = parse(&text).unwrap();
        let reparsed = parse(&tree.to_string()).unwrap();
        prop_assert_eq!(tree.root(), reparsed.root(), "print/reparse diverged for: {}", text);
    }

    /// With every identifier bound, evaluation agrees with a
    /// non-short-circuiting reference walk
    #[test]
    fn prop_eval_matches_reference(
        text in expr_text_strategy(),
        values in prop::collection::vec(any::<bool>(), 1..8)
    ) {
        let tree = parse(&text).unwrap();
        let bindings = full_bindings(tree.root(), &values);
        let expected = reference_eval(tree.root(), &bindings);
        prop_assert_eq!(tree.evaluate(&bindings).ok(), expected);
    }

    /// `and` binds tighter than `or` regardless of identifier choice
    #[test]
    fn prop_and_binds_tighter(
        a in identifier_strategy(),
        b in identifier_strategy(),
        c in identifier_strategy()
    ) {
        let flat = parse(&format!("{} or {} and {}", a, b, c)).unwrap();
        match flat.root() {
            Node::Binary { op: BinaryOp::Or, right, .. } => {
                let is_and = matches!(**right, Node::Binary { op: BinaryOp::And, .. });
                prop_assert!(is_and);
            }
            other => prop_assert!(false, "expected top-level or, got {:?}", other),
        }
    }

    /// Operator chains associate to the left: the right child of the root
    /// is always a plain identifier
    #[test]
    fn prop_chains_left_associative(
        names in prop::collection::vec(identifier_strategy(), 2..6),
        use_and in any::<bool>()
    ) {
        let op_text = if use_and { "and" } else { "or" };
        let text = names.join(&format!(" {} ", op_text));
        let tree = parse(&text).unwrap();
        match tree.root() {
            Node::Binary { right, .. } => {
                prop_assert!(matches!(**right, Node::Identifier(_)));
            }
            other => prop_assert!(false, "expected binary root, got {:?}", other),
        }
    }

    /// The token stream ends with exactly one terminator, offsets never
    /// decrease, and nothing follows the terminator -- for any input
    #[test]
    fn prop_token_stream_terminates(text in ".{0,40}") {
        let tokens: Vec<_> = Lexer::new(&text).collect();
        prop_assert!(!tokens.is_empty());

        let last = tokens.last().unwrap();
        prop_assert!(matches!(last.kind, TokenKind::EndOfInput | TokenKind::Error(_)));
        for token in &tokens[..tokens.len() - 1] {
            prop_assert!(!matches!(token.kind, TokenKind::EndOfInput | TokenKind::Error(_)));
        }

        for pair in tokens.windows(2) {
            prop_assert!(pair[0].start <= pair[1].start);
        }
    }

    /// Cached evaluation agrees with a direct parse + evaluate
    #[test]
    fn prop_cache_consistency(
        text in expr_text_strategy(),
        values in prop::collection::vec(any::<bool>(), 1..8)
    ) {
        let tree = parse(&text).unwrap();
        let bindings = full_bindings(tree.root(), &values);
        let direct = tree.evaluate(&bindings);
        let cached = evaluate_str(&text, &bindings);
        prop_assert_eq!(direct, cached);
    }
}
