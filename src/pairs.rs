//! Matching-pair classification.
//!
//! Two expressions form a matching pair if they are equal, or if they are drawn
//! from `{X, X?, X+, X*, X^n, X_p^q}` for one base expression X. Concatenation
//! and choice use the classification to collapse the pair into one operator.

use crate::ir::{Exprs, Node};
use crate::symbols::Payload;
use crate::types::NodeId;
use core::fmt;

/// How one side of a matching pair relates to the shared base X.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Wrap {
    /// X itself.
    Bare,
    /// X?
    Option,
    /// X+
    Plus,
    /// X*
    Star,
    /// X^n
    Power,
    /// X_m^n
    Range,
}

impl Wrap {
    fn of(node: &Node) -> Option<Wrap> {
        match node {
            Node::Option(..) => Some(Wrap::Option),
            Node::Plus(..) => Some(Wrap::Plus),
            Node::Star(..) => Some(Wrap::Star),
            Node::Power { .. } => Some(Wrap::Power),
            Node::Range { .. } => Some(Wrap::Range),
            _ => None,
        }
    }

    /// \return the position of this wrap in the order X O P S N R.
    #[inline]
    pub(crate) fn index(self) -> usize {
        self as usize
    }

    /// The one-letter mnemonic used in pair codes.
    pub fn mnemonic(self) -> char {
        match self {
            Wrap::Bare => 'X',
            Wrap::Option => 'O',
            Wrap::Plus => 'P',
            Wrap::Star => 'S',
            Wrap::Power => 'N',
            Wrap::Range => 'R',
        }
    }
}

/// The classification of a matching pair: one of the 36 codes `XX` through
/// `RR`, together with the shared base expression.
///
/// The diagonal codes `OO`, `PP` and `SS` are never produced, because two
/// identical wrappers around the same base are the same node and classify as
/// `XX`. `NN` and `RR` do occur, when the bounds differ.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct MatchingPair {
    pub left: Wrap,
    pub right: Wrap,
    pub base: NodeId,
}

impl fmt::Display for MatchingPair {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.left.mnemonic(), self.right.mnemonic())
    }
}

impl<S: Payload> Exprs<S> {
    /// Classify \p left and \p right as a matching pair.
    /// \return None if they do not share a base expression.
    pub fn matching_pair(&self, left: NodeId, right: NodeId) -> Option<MatchingPair> {
        let pair = |l, r, base| Some(MatchingPair { left: l, right: r, base });
        if left == right {
            return pair(Wrap::Bare, Wrap::Bare, left);
        }
        let (lnode, rnode) = (self.node(left), self.node(right));
        let (lwrap, rwrap) = (Wrap::of(&lnode), Wrap::of(&rnode));
        if let (Some(lw), Some(rw), Some(la), Some(ra)) = (lwrap, rwrap, lnode.arg(), rnode.arg()) {
            if la == ra {
                return pair(lw, rw, la);
            }
        }
        if let (Some(lw), Some(la)) = (lwrap, lnode.arg()) {
            if la == right {
                return pair(lw, Wrap::Bare, right);
            }
        }
        if let (Some(rw), Some(ra)) = (rwrap, rnode.arg()) {
            if ra == left {
                return pair(Wrap::Bare, rw, left);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::Wrap;
    use crate::ir::Exprs;

    #[test]
    fn classify() {
        let mut exprs = Exprs::new();
        let a = exprs.symbol("a");
        let b = exprs.symbol("b");
        let a_opt = exprs.make_option(a);
        let a_star = exprs.make_star(a);
        let a_pow2 = exprs.make_power(a, 2);
        let a_pow3 = exprs.make_power(a, 3);
        let a_range = exprs.make_range(a, 1, 4);
        let b_star = exprs.make_star(b);

        let code = |l, r| exprs.matching_pair(l, r).map(|p| p.to_string());
        assert_eq!(code(a, a).as_deref(), Some("XX"));
        assert_eq!(code(a, a_opt).as_deref(), Some("XO"));
        assert_eq!(code(a_star, a).as_deref(), Some("SX"));
        assert_eq!(code(a_opt, a_star).as_deref(), Some("OS"));
        assert_eq!(code(a_pow2, a_range).as_deref(), Some("NR"));
        assert_eq!(code(a_pow2, a_pow3).as_deref(), Some("NN"));
        assert_eq!(code(a_star, a_star).as_deref(), Some("XX"));
        assert_eq!(code(a, b), None);
        assert_eq!(code(a_star, b_star), None);
        assert_eq!(code(a_star, b), None);
    }

    #[test]
    fn base_is_the_shared_argument() {
        let mut exprs = Exprs::new();
        let a = exprs.symbol("a");
        let a_plus = exprs.make_plus(a);
        let a_opt = exprs.make_option(a);
        let pair = exprs.matching_pair(a_plus, a_opt).unwrap();
        assert_eq!(pair.base, a);
        assert_eq!((pair.left, pair.right), (Wrap::Plus, Wrap::Option));

        // A wrapper around the other operand is matched against it directly.
        let a_plus_opt = exprs.make_option(a_plus);
        let pair = exprs.matching_pair(a_plus, a_plus_opt).unwrap();
        assert_eq!(pair.base, a_plus);
        assert_eq!((pair.left, pair.right), (Wrap::Bare, Wrap::Option));
    }
}
