//! Rewrite rules for choice.
//!
//! Besides simplification, these rules put choices into a canonical order:
//! right-nested, symbols sorted by name, and repetitions of one base sorted
//! by their lower bound, with overlapping or adjacent ranges merged.

use crate::ir::{Exprs, Node, EMPTY};
use crate::normalize::Rewrite::{self, Keep, Replace};
use crate::symbols::Payload;
use crate::types::{Exponent, NodeId, UNBOUNDED};

impl<S: Payload> Exprs<S> {
    /// Rewrite `left | right`, whose operands are normal.
    pub(crate) fn rewrite_choice(&mut self, left: NodeId, right: NodeId) -> Rewrite {
        if left == EMPTY {
            return Replace("[CH:E_]", self.make_option(right));
        }
        if right == EMPTY {
            return Replace("[CH:_E]", self.make_option(left));
        }
        if left == right {
            return Replace("[CH:XX1]", left);
        }
        let (lnode, rnode) = (self.node(left), self.node(right));
        if let Node::Option(x) = lnode {
            let inner = self.make_choice(x, right);
            return Replace("[CH:O_]", self.make_option(inner));
        }
        if let Node::Option(y) = rnode {
            let inner = self.make_choice(left, y);
            return Replace("[CH:_O]", self.make_option(inner));
        }
        if let Node::Choice(x, y) = lnode {
            let rest = self.make_choice(y, right);
            return Replace("[CH:AS]", self.make_choice(x, rest));
        }

        if let Node::Symbol(..) = lnode {
            match rnode {
                Node::Symbol(..) if self.lex_less(right, left) => {
                    return Replace("[CH:ba%1]", self.make_choice(right, left));
                }
                Node::Choice(first, rest) if self.lex_less(first, left) => {
                    return Replace("[CH:ba%2]", self.rotate(first, left, rest));
                }
                _ => {}
            }
        }
        if let Node::Choice(first, _) = rnode {
            if first == left {
                return Replace("[CH:XX2]", right);
            }
        }

        if let Some(rewrite) = self.absorb_factor(left, right) {
            return rewrite;
        }

        match rnode {
            Node::Power { arg, power: 2 } if arg == left => {
                return Replace("[CH:XN^2]", self.make_range(left, 1, 2));
            }
            Node::Range { arg, lower, upper } if arg == left => match lower {
                0 => return Replace("[CH:XR0n]", right),
                1 => return Replace("[CH:XR1n]", right),
                2 => return Replace("[CH:XR2n]", self.make_range(left, 1, upper)),
                _ => {}
            },
            _ => {}
        }

        match lnode {
            Node::Power { arg, power } => self.rewrite_power_choice(left, right, arg, power),
            Node::Range { arg, lower, upper } => {
                self.rewrite_range_choice(left, right, arg, lower, upper)
            }
            _ => Keep,
        }
    }

    /// \return `first | (second | rest)`.
    fn rotate(&mut self, first: NodeId, second: NodeId, rest: NodeId) -> NodeId {
        let tail = self.make_choice(second, rest);
        self.make_choice(first, tail)
    }

    /// Absorb a bare alternative into a concatenation that has a starred
    /// neighbor: `X.Y* | X → X.Y*`, `X.Y+ | X → X.Y*`, and the mirrored forms.
    fn absorb_factor(&mut self, left: NodeId, right: NodeId) -> Option<Rewrite> {
        if let Node::Concat(x, y) = self.node(left) {
            if x == right {
                match self.node(y) {
                    Node::Star(..) => return Some(Replace("[CH:XSX]", left)),
                    Node::Plus(z) => {
                        let star = self.make_star(z);
                        return Some(Replace("[CH:XPX]", self.make_concat(right, star)));
                    }
                    _ => {}
                }
            }
            if y == right {
                match self.node(x) {
                    Node::Star(..) => return Some(Replace("[CH:SXX]", left)),
                    Node::Plus(z) => {
                        let star = self.make_star(z);
                        return Some(Replace("[CH:PXX]", self.make_concat(star, right)));
                    }
                    _ => {}
                }
            }
        }
        if let Node::Concat(x, y) = self.node(right) {
            if x == left {
                match self.node(y) {
                    Node::Star(..) => return Some(Replace("[CH:XXS]", right)),
                    Node::Plus(z) => {
                        let star = self.make_star(z);
                        return Some(Replace("[CH:XXP]", self.make_concat(left, star)));
                    }
                    _ => {}
                }
            }
            if y == left {
                match self.node(x) {
                    Node::Star(..) => return Some(Replace("[CH:XSX']", right)),
                    Node::Plus(z) => {
                        let star = self.make_star(z);
                        return Some(Replace("[CH:XPX']", self.make_concat(star, left)));
                    }
                    _ => {}
                }
            }
        }
        None
    }

    /// Rewrite `X^n | right`.
    fn rewrite_power_choice(
        &mut self,
        left: NodeId,
        right: NodeId,
        x: NodeId,
        n: Exponent,
    ) -> Rewrite {
        if x == right {
            return Replace("[CH:NX%1]", self.make_choice(right, left));
        }
        match self.node(right) {
            Node::Power { arg, power: k } if arg == x => {
                if n.checked_add(1) == Some(k) {
                    return Replace("[CH:NN_1]", self.make_range(x, n, k));
                }
                if k < n {
                    return Replace("[CH:NN%1]", self.make_choice(right, left));
                }
            }
            Node::Power { arg, .. } if self.lex_less(arg, x) => {
                return Replace("[CH:mn%1]", self.make_choice(right, left));
            }
            Node::Choice(first, rest) => {
                if let Node::Power { arg, power: k } = self.node(first) {
                    if arg == x && k < n {
                        return Replace("[CH:NN%2]", self.rotate(first, left, rest));
                    }
                    if self.lex_less(arg, x) {
                        return Replace("[CH:mn%2]", self.rotate(first, left, rest));
                    }
                }
            }
            Node::Range {
                arg,
                lower: p,
                upper: q,
            } if arg == x => {
                if p <= n && n <= q {
                    return Replace("[CH:NR_2]", right);
                }
                if n.checked_add(1) == Some(p) {
                    return Replace("[CH:NR_1]", self.make_range(x, n, q));
                }
                if p <= n {
                    return Replace("[CH:NR]", self.make_choice(right, left));
                }
            }
            _ => {}
        }
        Keep
    }

    /// Rewrite `X_m^n | right`.
    fn rewrite_range_choice(
        &mut self,
        left: NodeId,
        right: NodeId,
        x: NodeId,
        m: Exponent,
        n: Exponent,
    ) -> Rewrite {
        if x == right {
            return Replace("[CH:RX]", self.make_choice(right, left));
        }
        match self.node(right) {
            Node::Power { arg, power: k } if arg == x => {
                if n.checked_add(1) == Some(k) {
                    return Replace("[CH:RN_1]", self.make_range(x, m, k));
                }
                if k <= n {
                    return Replace("[CH:RN]", self.make_choice(right, left));
                }
            }
            Node::Choice(first, rest) => {
                if let Node::Range { arg, lower, .. } = self.node(first) {
                    if arg == x && lower < m {
                        return Replace("[CH:RR2]", self.rotate(first, left, rest));
                    }
                    if self.lex_less(arg, x) {
                        return Replace("[CH:ba%RR2]", self.rotate(first, left, rest));
                    }
                }
            }
            Node::Range {
                arg,
                lower: p,
                upper: q,
            } if arg == x => {
                if p < m {
                    return Replace("[CH:RR11]", self.make_choice(right, left));
                }
                if n == UNBOUNDED || p <= n + 1 {
                    let merged = self.make_range(x, m.min(p), n.max(q));
                    return Replace("[CH:RR12]", merged);
                }
            }
            _ => {}
        }
        Keep
    }
}
