//! The normal-form driver

use crate::ir::{Exprs, Node, EMPTY};
use crate::symbols::Payload;
use crate::types::NodeId;
use core::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;

/// Whether rule applications are reported.
static TRACE: AtomicBool = AtomicBool::new(false);

/// Report every rule application as a `renorm::rules` debug event.
pub fn enable_trace() {
    TRACE.store(true, Ordering::Relaxed);
}

pub fn disable_trace() {
    TRACE.store(false, Ordering::Relaxed);
}

/// Flip the trace flag. \return the new state.
pub fn toggle_trace() -> bool {
    !TRACE.fetch_xor(true, Ordering::Relaxed)
}

#[inline]
pub fn trace_enabled() -> bool {
    TRACE.load(Ordering::Relaxed)
}

/// Things that a rewrite rule may do.
/// Every non-Keep outcome carries the label of the rule that fired.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Rewrite {
    // The node is already in normal form.
    Keep,

    // Replace the node with the empty expression.
    Remove(&'static str),

    // Replace the node with another node.
    Replace(&'static str, NodeId),
}

impl<S: Payload> Exprs<S> {
    /// \return the normal form of \p id, computing and caching it if needed.
    ///
    /// Children are normalized first, then the rule for the node's kind is
    /// applied. A replacement is normalized in turn until no rule fires; every
    /// node met along the way caches the final result.
    pub fn normal_form(&mut self, id: NodeId) -> NodeId {
        if let Some(nf) = self.cached_normal_form(id) {
            return nf;
        }
        let mut visited = vec![id];
        let mut current = id;
        let result = loop {
            let rebuilt = self.normalize_children(current);
            if rebuilt != current {
                if let Some(nf) = self.cached_normal_form(rebuilt) {
                    break nf;
                }
                visited.push(rebuilt);
            }
            let next = match self.rewrite(rebuilt) {
                Rewrite::Keep => break rebuilt,
                Rewrite::Remove(rule) => {
                    self.trace_rule(rule, rebuilt, EMPTY);
                    EMPTY
                }
                Rewrite::Replace(rule, next) => {
                    self.trace_rule(rule, rebuilt, next);
                    next
                }
            };
            if let Some(nf) = self.cached_normal_form(next) {
                break nf;
            }
            debug_assert!(!visited.contains(&next), "Rewrite cycle at {}", next);
            visited.push(next);
            current = next;
        };
        for v in visited {
            self.normal[v.index()] = Some(result);
        }
        result
    }

    /// \return the normal form of \p id if it was already computed.
    #[inline]
    pub fn cached_normal_form(&self, id: NodeId) -> Option<NodeId> {
        self.normal[id.index()]
    }

    /// \return whether \p id is its own normal form.
    pub fn in_normal_form(&mut self, id: NodeId) -> bool {
        self.normal_form(id) == id
    }

    /// \return whether \p a and \p b have the same normal form.
    pub fn norm_equals(&mut self, a: NodeId, b: NodeId) -> bool {
        a == b || self.normal_form(a) == self.normal_form(b)
    }

    /// \return \p id with each child replaced by its normal form.
    fn normalize_children(&mut self, id: NodeId) -> NodeId {
        let node = self.node(id);
        let rebuilt = node.map_children(|child| self.normal_form(child));
        if rebuilt == node {
            id
        } else {
            self.insert(rebuilt)
        }
    }

    /// Apply the rule for the kind of \p id, whose children are normal.
    fn rewrite(&mut self, id: NodeId) -> Rewrite {
        match self.node(id) {
            Node::Empty | Node::Symbol(..) => Rewrite::Keep,
            Node::Option(arg) => self.rewrite_option(arg),
            Node::Plus(arg) => self.rewrite_plus(arg),
            Node::Star(arg) => self.rewrite_star(arg),
            Node::Power { arg, power } => self.rewrite_power(arg, power),
            Node::Range { arg, lower, upper } => self.rewrite_range(arg, lower, upper),
            Node::Choice(left, right) => self.rewrite_choice(left, right),
            Node::Concat(left, right) => self.rewrite_concat(left, right),
        }
    }

    fn trace_rule(&self, rule: &'static str, before: NodeId, after: NodeId) {
        if !trace_enabled() {
            return;
        }
        debug!(
            target: "renorm::rules",
            kind = self.kind(before).tag(),
            rule,
            "{} --> {}",
            self.display(before),
            self.display(after)
        );
    }
}
