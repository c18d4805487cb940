#![allow(clippy::uninlined_format_args)]

// Work around dead code warnings: rust-lang issue #46379
pub mod common;

use common::*;
use renorm::{Exprs, Kind, Node, NodeId, Walk, EMPTY, UNBOUNDED};
use std::fmt;

/// A payload whose printed name differs from its numeric order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Token(u32);

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "t{}", self.0)
    }
}

#[test]
fn test_empty_is_singleton() {
    let mut exprs: Exprs = Exprs::new();
    assert_eq!(exprs.intern(None), exprs.empty());
    assert_eq!(exprs.empty(), EMPTY);
    assert_eq!(exprs.normal_form(EMPTY), EMPTY);
    assert!(exprs.in_normal_form(EMPTY));
    assert_eq!(exprs.render(EMPTY), "()");
    assert_eq!(exprs.kind(EMPTY), Kind::Empty);
}

#[test]
fn test_symbol_interning() {
    let mut exprs = Exprs::new();
    let a = exprs.symbol(7u32);
    let b = exprs.intern(Some(7u32));
    let c = exprs.symbol(8u32);
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(exprs.payload_of(a), Some(&7));
    assert_eq!(exprs.name_of(c), Some("8"));
    assert_eq!(exprs.lookup_symbol(&8u32), Some(c));
    assert_eq!(exprs.lookup_symbol(&9u32), None);
    assert_eq!(exprs.payload_of(EMPTY), None);
}

#[test]
fn test_nodes_are_hash_consed() {
    let mut exprs = Exprs::new();
    let a = exprs.symbol("a");
    let before = exprs.node_count();
    let s1 = exprs.make_star(a);
    let s2 = exprs.make_star(a);
    assert_eq!(s1, s2);
    assert_eq!(exprs.node_count(), before + 1);

    let r1 = exprs.make_range_from(a, 2);
    let r2 = exprs.make_range(a, 2, UNBOUNDED);
    assert_eq!(r1, r2);
    assert_ne!(exprs.make_power(a, 2), exprs.make_power(a, 3));
}

#[test]
fn test_accessors() {
    let mut exprs = Exprs::new();
    let a = exprs.symbol("a");
    let b = exprs.symbol("b");
    let pow = exprs.make_power(a, 3);
    let range = exprs.make_range(b, 1, 4);
    let cat = exprs.make_concat(pow, range);

    assert_eq!(exprs.left_of(cat), Some(pow));
    assert_eq!(exprs.right_of(cat), Some(range));
    assert_eq!(exprs.arg_of(pow), Some(a));
    assert_eq!(exprs.power_of(pow), Some(3));
    assert_eq!(exprs.lower_of(range), Some(1));
    assert_eq!(exprs.upper_of(range), Some(4));
    assert_eq!(exprs.power_of(range), None);
    assert_eq!(exprs.arg_of(cat), None);
    assert_eq!(
        exprs.node(range),
        Node::Range {
            arg: b,
            lower: 1,
            upper: 4
        }
    );
    assert!(exprs.kind(pow).is_unary());
    assert!(exprs.kind(cat).is_binary());
    assert!(!exprs.kind(a).is_unary());
}

#[test]
fn test_normal_forms_are_cached() {
    let mut te = TestExprs::new();
    let id = te.parse("a.a*");
    assert_eq!(te.exprs.cached_normal_form(id), None);
    let nf = te.exprs.normal_form(id);
    assert_eq!(te.exprs.cached_normal_form(id), Some(nf));
    assert_eq!(te.exprs.cached_normal_form(nf), Some(nf));
    assert_eq!(te.exprs.render(nf), "a+");

    // Building the same expression again finds the cached result.
    let again = te.parse("a.a*");
    assert_eq!(again, id);
    assert_eq!(te.exprs.normal_form(again), nf);
    assert_eq!(te.exprs.normal_form(nf), nf);
}

#[test]
fn test_norm_equals() {
    let mut te = TestExprs::new();
    let l = te.parse("a.a.a");
    let r = te.parse("a^3");
    let other = te.parse("a^4");
    assert!(te.exprs.norm_equals(l, r));
    assert!(!te.exprs.norm_equals(l, other));
    assert!(te.exprs.norm_equals(other, other));
}

#[test]
fn test_concat_all() {
    let mut exprs = Exprs::new();
    let a = exprs.symbol("a");
    let b = exprs.symbol("b");
    let c = exprs.symbol("c");
    let seq = exprs.make_concat_all([a, b, c]);
    assert_eq!(exprs.render(seq), "a.b.c.()");
    assert_eq!(exprs.render_normal(seq), "a.b.c");
    assert_eq!(exprs.make_concat_all(Vec::new()), EMPTY);
    let single = exprs.make_concat_all(vec![b]);
    assert_eq!(exprs.normal_form(single), b);
}

#[test]
fn test_custom_payloads() {
    let mut exprs = Exprs::new();
    let t9 = exprs.symbol(Token(9));
    let t10 = exprs.symbol(Token(10));
    let choice = exprs.make_choice(t9, t10);
    // Choices sort by printed name, not by payload.
    assert_eq!(exprs.render_normal(choice), "t10 | t9");
    assert_eq!(exprs.payload_of(t10), Some(&Token(10)));
}

#[test]
fn test_renamed_symbols() {
    let mut exprs = Exprs::new();
    let t9 = exprs.symbol(Token(9));
    let t10 = exprs.symbol(Token(10));
    let choice = exprs.make_choice(t9, t10);
    assert_eq!(exprs.render_normal(choice), "t10 | t9");

    // The new name orders the symbol, replacing the cached normal form.
    assert!(exprs.set_name(t9, "nine"));
    assert_eq!(exprs.name_of(t9), Some("nine"));
    assert_eq!(exprs.payload_of(t9), Some(&Token(9)));
    assert_eq!(exprs.render_normal(choice), "nine | t10");
    assert_eq!(exprs.lookup_symbol(&Token(9)), Some(t9));

    assert!(!exprs.set_name(choice, "both"));
    assert_eq!(exprs.normal_form(EMPTY), EMPTY);
}

#[test]
fn test_lex_less_orders_symbols_only() {
    let mut te = TestExprs::new();
    let a = te.parse("a");
    let b = te.parse("b");
    let a_star = te.parse("a*");
    let b_star = te.parse("b*");
    assert!(te.exprs.lex_less(a, b));
    assert!(!te.exprs.lex_less(b, a));
    assert!(!te.exprs.lex_less(a, a));
    assert!(!te.exprs.lex_less(a_star, b_star));
    assert!(!te.exprs.lex_less(a, b_star));
    assert!(!te.exprs.lex_less(b_star, a));
}

#[test]
fn test_matching_pairs() {
    let mut te = TestExprs::new();
    let code = |te: &mut TestExprs, l: &str, r: &str| {
        let (l, r) = (te.parse(l), te.parse(r));
        te.exprs.matching_pair(l, r).map(|pair| pair.to_string())
    };
    assert_eq!(code(&mut te, "a", "a").as_deref(), Some("XX"));
    assert_eq!(code(&mut te, "a*", "a+").as_deref(), Some("SP"));
    assert_eq!(code(&mut te, "a_1^2", "a_2^3").as_deref(), Some("RR"));
    assert_eq!(code(&mut te, "(a.b)^2", "a.b").as_deref(), Some("NX"));
    assert_eq!(code(&mut te, "a", "b*"), None);
}

#[test]
fn test_display_tree() {
    let mut te = TestExprs::new();
    let id = te.parse("a.b*");
    let tree = te.exprs.display_tree(id).to_string();
    assert_eq!(tree, "Concat #4\n..Symbol 'a' #1\n..Star #3\n....Symbol 'b' #2\n");

    let id = te.parse("a_2~ | a^3");
    let tree = te.exprs.display_tree(id).to_string();
    let lines: Vec<&str> = tree.lines().collect();
    assert_eq!(lines.len(), 5);
    assert!(lines[0].starts_with("Choice"));
    assert!(lines[1].starts_with("..PowerRange 2.."));
    assert!(lines[3].starts_with("..Power 3"));
}

#[test]
fn test_deep_concatenation() {
    // Nesting depth is limited by the stack; a few hundred levels are fine.
    let mut exprs = Exprs::new();
    let a = exprs.symbol("a");
    let b = exprs.symbol("b");
    let factors: Vec<NodeId> = (0..500).map(|i| if i % 2 == 0 { a } else { b }).collect();
    let seq = exprs.make_concat_all(factors);
    let nf = exprs.normal_form(seq);
    assert_eq!(exprs.tree_depth(nf), 500);
    assert_eq!(exprs.render(nf), vec!["a.b"; 250].join("."));
    assert!(exprs.in_normal_form(nf));
}

#[test]
fn test_walk() {
    let mut te = TestExprs::new();
    let id = te.parse("(a | b).c*");
    assert_eq!(te.exprs.tree_size(id), 6);
    assert_eq!(te.exprs.tree_depth(id), 3);

    // Postorder visits children first.
    let mut kinds = Vec::new();
    te.exprs
        .walk(true, id, &mut |_: NodeId, node: &Node, _: &mut Walk| {
            kinds.push(node.kind())
        });
    assert_eq!(kinds.first(), Some(&Kind::Symbol));
    assert_eq!(kinds.last(), Some(&Kind::Concat));

    // Skipping children of the choice leaves only the star's subtree.
    let mut visited = 0;
    te.exprs
        .walk(false, id, &mut |_: NodeId, node: &Node, walk: &mut Walk| {
            visited += 1;
            walk.skip_children = matches!(node, Node::Choice(..));
        });
    assert_eq!(visited, 4);
}
