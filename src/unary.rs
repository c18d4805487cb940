//! Rewrite rules for the unary operators.
//! Each rule sees the operator's already-normalized child.

use crate::ir::{Exprs, Node, EMPTY};
use crate::normalize::Rewrite::{self, Keep, Remove, Replace};
use crate::symbols::Payload;
use crate::types::{Exponent, NodeId, UNBOUNDED};
use crate::util::sat_mul;

impl<S: Payload> Exprs<S> {
    pub(crate) fn rewrite_option(&mut self, arg: NodeId) -> Rewrite {
        match self.node(arg) {
            Node::Empty => Remove("[OP:E]"),
            Node::Option(..) => Replace("[OP:O]", arg),
            Node::Plus(x) => Replace("[OP:P]", self.make_star(x)),
            Node::Star(..) => Replace("[OP:S]", arg),
            Node::Range { lower: 0, .. } => Replace("[OP:R0]", arg),
            Node::Range {
                arg: x,
                lower: 1,
                upper,
            } => Replace("[OP:R1]", self.make_range(x, 0, upper)),
            _ => Keep,
        }
    }

    pub(crate) fn rewrite_plus(&mut self, arg: NodeId) -> Rewrite {
        match self.node(arg) {
            Node::Empty => Remove("[PL:E]"),
            Node::Option(x) => Replace("[PL:O]", self.make_star(x)),
            Node::Plus(..) => Replace("[PL:P]", arg),
            Node::Star(..) => Replace("[PL:S]", arg),
            _ => Keep,
        }
    }

    pub(crate) fn rewrite_star(&mut self, arg: NodeId) -> Rewrite {
        match self.node(arg) {
            Node::Empty => Remove("[ST:E]"),
            Node::Option(x) => Replace("[ST:O]", self.make_star(x)),
            Node::Plus(x) => Replace("[ST:P]", self.make_star(x)),
            Node::Star(..) => Replace("[ST:S]", arg),
            _ => Keep,
        }
    }

    /// X^n. A non-positive exponent denotes the empty expression.
    pub(crate) fn rewrite_power(&mut self, arg: NodeId, power: Exponent) -> Rewrite {
        if arg == EMPTY {
            return Remove("[PW:E]");
        }
        if power <= 0 {
            return Remove("[PW:0]");
        }
        if power == 1 {
            return Replace("[PW:1]", arg);
        }
        match self.node(arg) {
            Node::Option(x) => Replace("[PW:O]", self.make_range(x, 0, power)),
            Node::Plus(x) => Replace("[PW:P]", self.make_range_from(x, power)),
            Node::Star(..) => Replace("[PW:S]", arg),
            Node::Power { arg: x, power: m } => {
                Replace("[PW:N]", self.make_power(x, sat_mul(m, power)))
            }
            Node::Range {
                arg: x,
                lower,
                upper,
            } => {
                let (lower, upper) = (sat_mul(lower, power), sat_mul(upper, power));
                Replace("[PW:R]", self.make_range(x, lower, upper))
            }
            _ => Keep,
        }
    }

    /// X_m^n. The first rule that applies wins; the bounds are checked before
    /// the child.
    pub(crate) fn rewrite_range(&mut self, arg: NodeId, lower: Exponent, upper: Exponent) -> Rewrite {
        if arg == EMPTY {
            return Remove("[PR:E]");
        }
        match (lower, upper) {
            (0, n) if n <= 0 => return Remove("[PR:00]"),
            (0, 1) => return Replace("[PR:01]", self.make_option(arg)),
            (0, UNBOUNDED) => return Replace("[PR:0_]", self.make_star(arg)),
            (1, UNBOUNDED) => return Replace("[PR:1_]", self.make_plus(arg)),
            (m, n) if m > n => return Remove("[PR:__]"),
            (m, n) if m < 0 => return Replace("[PR:-n]", self.make_range(arg, 0, n)),
            (_, n) if n < 0 => return Remove("[PR:m-]"),
            (m, n) if m == n => return Replace("[PR:mm]", self.make_power(arg, m)),
            _ => {}
        }
        match self.node(arg) {
            Node::Option(x) => Replace("[PR:O]", self.make_range(x, 0, upper)),
            Node::Plus(x) => Replace("[PR:P]", self.make_range_from(x, lower)),
            Node::Star(..) => Replace("[PR:S]", arg),
            _ => Keep,
        }
    }
}
