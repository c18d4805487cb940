/*!

# renorm - normal forms for algebraic regular expressions

This crate computes canonical ("normal") forms of regular expressions over an arbitrary alphabet.
Symbols are opaque payloads: strings, integers, or any type that is hashable and printable.
It is meant for symbolic reasoning about regular languages, such as comparing and simplifying
expressions, not for matching strings.

# Example: building and normalizing

```rust
use renorm::Exprs;
let mut exprs = Exprs::new();
let a = exprs.symbol("a");
let a_star = exprs.make_star(a);
let e = exprs.make_concat(a, a_star);
assert_eq!(exprs.render(e), "a.a*");
assert_eq!(exprs.render_normal(e), "a+");
```

# Example: parsing

Expressions can be written in the same syntax they are rendered in:

```rust
use renorm::Exprs;
let mut exprs: Exprs = Exprs::new();
let e = exprs.parse("(b | a).c").unwrap();
assert_eq!(exprs.render_normal(e), "a.c | b.c");

let merged = exprs.parse("a^2 | a_3^5").unwrap();
assert_eq!(exprs.render_normal(merged), "a_2^5");
```

# Syntax

| Form | Meaning |
|------|---------|
| `()` | the empty expression |
| `A.B` | concatenation |
| `A \| B` | choice |
| `A?` `A+` `A*` | option, one or more, zero or more |
| `A^n` | exactly n repetitions |
| `A_m^n` `A_m~` | between m and n repetitions, or at least m |

# Architecture

Expressions live in an arena, [`Exprs`], which hash-conses its nodes: equal expressions are the
same [`NodeId`]. Each operator has a set of rewrite rules. [`Exprs::normal_form`] normalizes the
children of a node, applies the rules for its operator, and repeats on the result until no rule
applies. Normal forms are cached per node.

Choices are put in a canonical order: symbols are sorted by their printed name, and repetitions of
the same expression are sorted by their bounds, merging ranges that overlap or touch.

# Limits

Normalization follows a chain of rewrites iteratively, but normalizing children, rendering and
walking recurse once per level of nesting. Very deeply nested expressions (for example a
concatenation of hundreds of thousands of factors) can overflow the stack in any of these
operations. This is a known resource bound, not a supported failure mode: keep nesting depth
well below what the thread's stack can hold.

# Tracing

When [`enable_trace`] is on, every rule application is reported as a `debug` event on the
`renorm::rules` target of the `tracing` crate.

*/

#![warn(clippy::all)]
#![allow(clippy::upper_case_acronyms, clippy::match_like_matches_macro)]

pub use crate::ir::{Exprs, Node, Walk, EMPTY};
pub use crate::normalize::{disable_trace, enable_trace, toggle_trace, trace_enabled};
pub use crate::pairs::{MatchingPair, Wrap};
pub use crate::parse::Error;
pub use crate::render::{Rendered, Tree};
pub use crate::symbols::{Payload, SymbolTable};
pub use crate::types::{Exponent, Kind, NodeId, SymbolID, BINARY, UNARY, UNBOUNDED};
pub use crate::util::{sat_add, sat_mul};

mod choice;
mod concat;
mod ir;
mod normalize;
mod pairs;
mod parse;
mod render;
mod symbols;
mod types;
mod unary;
mod util;
