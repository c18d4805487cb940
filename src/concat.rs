//! Rewrite rules for concatenation.

use crate::ir::{Exprs, Node, EMPTY};
use crate::normalize::Rewrite::{self, Keep, Replace};
use crate::pairs::{MatchingPair, Wrap};
use crate::symbols::Payload;
use crate::types::NodeId;
use crate::util::sat_add;

/// Labels for collapsing a matching pair `L.R`, indexed by wrap.
const FLAT_LABELS: [[&str; 6]; 6] = [
    ["[CO:XX1]", "[CO:XO1]", "[CO:XP1]", "[CO:XS1]", "[CO:XN1]", "[CO:XR1]"],
    ["[CO:OX1]", "[CO:OO1]", "[CO:OP1]", "[CO:OS1]", "[CO:ON1]", "[CO:OR1]"],
    ["[CO:PX1]", "[CO:PO1]", "[CO:PP1]", "[CO:PS1]", "[CO:PN1]", "[CO:PR1]"],
    ["[CO:SX1]", "[CO:SO1]", "[CO:SP1]", "[CO:SS1]", "[CO:SN1]", "[CO:SR1]"],
    ["[CO:NX1]", "[CO:NO1]", "[CO:NP1]", "[CO:NS1]", "[CO:NN1]", "[CO:NR1]"],
    ["[CO:RX1]", "[CO:RO1]", "[CO:RP1]", "[CO:RS1]", "[CO:RN1]", "[CO:RR1]"],
];

/// Labels for collapsing a matching pair at the head of `L.(R.Z)`.
const NESTED_LABELS: [[&str; 6]; 6] = [
    ["[CO:XX2]", "[CO:XO2]", "[CO:XP2]", "[CO:XS2]", "[CO:XN2]", "[CO:XR2]"],
    ["[CO:OX2]", "[CO:OO2]", "[CO:OP2]", "[CO:OS2]", "[CO:ON2]", "[CO:OR2]"],
    ["[CO:PX2]", "[CO:PO2]", "[CO:PP2]", "[CO:PS2]", "[CO:PN2]", "[CO:PR2]"],
    ["[CO:SX2]", "[CO:SO2]", "[CO:SP2]", "[CO:SS2]", "[CO:SN2]", "[CO:SR2]"],
    ["[CO:NX2]", "[CO:NO2]", "[CO:NP2]", "[CO:NS2]", "[CO:NN2]", "[CO:NR2]"],
    ["[CO:RX2]", "[CO:RO2]", "[CO:RP2]", "[CO:RS2]", "[CO:RN2]", "[CO:RR2]"],
];

fn label(table: &'static [[&'static str; 6]; 6], pair: MatchingPair) -> &'static str {
    table[pair.left.index()][pair.right.index()]
}

impl<S: Payload> Exprs<S> {
    /// Rewrite `left.right`, whose operands are normal.
    /// Structural rules come first: drop empties, reassociate to the right and
    /// distribute over choice. Then a matching pair at the head collapses into
    /// one repetition.
    pub(crate) fn rewrite_concat(&mut self, left: NodeId, right: NodeId) -> Rewrite {
        if left == EMPTY {
            return Replace("[CO:E_]", right);
        }
        if right == EMPTY {
            return Replace("[CO:_E]", left);
        }
        match self.node(left) {
            Node::Concat(x, y) => {
                let rest = self.make_concat(y, right);
                return Replace("[CO:_A]", self.make_concat(x, rest));
            }
            Node::Choice(x, y) => {
                let xr = self.make_concat(x, right);
                let yr = self.make_concat(y, right);
                return Replace("[CO:D_]", self.make_choice(xr, yr));
            }
            _ => {}
        }
        if let Node::Choice(y, z) = self.node(right) {
            let ly = self.make_concat(left, y);
            let lz = self.make_concat(left, z);
            return Replace("[CO:_D]", self.make_choice(ly, lz));
        }

        if let Some(pair) = self.matching_pair(left, right) {
            let combined = self.combine(pair, left, right);
            return Replace(label(&FLAT_LABELS, pair), combined);
        }
        if let Node::Concat(y, z) = self.node(right) {
            if let Some(pair) = self.matching_pair(left, y) {
                let combined = self.combine(pair, left, y);
                return Replace(label(&NESTED_LABELS, pair), self.make_concat(combined, z));
            }
        }
        Keep
    }

    /// \return the single repetition equivalent to `left.right`, where the
    /// two form \p pair.
    fn combine(&mut self, pair: MatchingPair, left: NodeId, right: NodeId) -> NodeId {
        use Wrap::*;
        let x = pair.base;
        // Bounds of the Power or Range sides; a Power n reads as n..n.
        let (m, n) = self.node(left).bounds().unwrap_or((0, 0));
        let (p, q) = self.node(right).bounds().unwrap_or((0, 0));
        match (pair.left, pair.right) {
            (Bare, Bare) => self.make_power(x, 2),
            (Bare, Option) | (Option, Bare) => self.make_range(x, 1, 2),
            (Bare, Plus) | (Plus, Bare) | (Plus, Plus) => self.make_range_from(x, 2),
            (Bare, Star) | (Star, Bare) => self.make_plus(x),
            (Bare, Power) => self.make_power(x, sat_add(q, 1)),
            (Bare, Range) => self.make_range(x, sat_add(p, 1), sat_add(q, 1)),

            (Option, Option) => self.make_range(x, 0, 2),
            (Option, Plus) | (Option, Star) | (Star, Plus) => right,
            (Option, Power) => self.make_range(x, q, sat_add(q, 1)),
            (Option, Range) => self.make_range(x, p, sat_add(q, 1)),

            (Plus, Option) | (Plus, Star) | (Star, Option) | (Star, Star) => left,
            (Plus, Power) => self.make_range_from(x, sat_add(q, 1)),
            (Plus, Range) => self.make_range_from(x, sat_add(p, 1)),

            (Star, Power) => self.make_range_from(x, q),
            (Star, Range) => self.make_range_from(x, p),

            (Power, Bare) => self.make_power(x, sat_add(n, 1)),
            (Power, Option) => self.make_range(x, n, sat_add(n, 1)),
            (Power, Plus) => self.make_range_from(x, sat_add(n, 1)),
            (Power, Star) => self.make_range_from(x, n),
            (Power, Power) => self.make_power(x, sat_add(n, q)),
            (Power, Range) => self.make_range(x, sat_add(n, p), sat_add(n, q)),

            (Range, Bare) => self.make_range(x, sat_add(m, 1), sat_add(n, 1)),
            (Range, Option) => self.make_range(x, m, sat_add(n, 1)),
            (Range, Plus) => self.make_range_from(x, sat_add(m, 1)),
            (Range, Star) => self.make_range_from(x, m),
            (Range, Power) => self.make_range(x, sat_add(m, q), sat_add(n, q)),
            (Range, Range) => self.make_range(x, sat_add(m, p), sat_add(n, q)),
        }
    }
}
