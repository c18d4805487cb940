//! Rendering expressions as text

use crate::ir::{Exprs, Node, Walk};
use crate::symbols::Payload;
use crate::types::{NodeId, UNBOUNDED};
use core::fmt;

/// Displays one expression in infix syntax, e.g. `a.b* | c_2^4`.
pub struct Rendered<'a, S> {
    exprs: &'a Exprs<S>,
    id: NodeId,
}

impl<S: Payload> fmt::Display for Rendered<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.exprs.write_node(self.id, f)
    }
}

/// Displays one expression as an indented tree, one node per line.
pub struct Tree<'a, S> {
    exprs: &'a Exprs<S>,
    id: NodeId,
}

impl<S: Payload> fmt::Display for Tree<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let exprs = self.exprs;
        let mut result = Ok(());
        exprs.walk(
            false,
            self.id,
            &mut |id: NodeId, node: &Node, walk: &mut Walk| {
                if result.is_ok() {
                    result = exprs.display_node(id, node, walk.depth, f)
                }
            },
        );
        result
    }
}

impl<S: Payload> Exprs<S> {
    /// \return a Display adapter rendering \p id.
    pub fn display(&self, id: NodeId) -> Rendered<'_, S> {
        Rendered { exprs: self, id }
    }

    /// \return a Display adapter dumping the tree under \p id.
    pub fn display_tree(&self, id: NodeId) -> Tree<'_, S> {
        Tree { exprs: self, id }
    }

    /// \return \p id rendered in infix syntax.
    pub fn render(&self, id: NodeId) -> String {
        self.display(id).to_string()
    }

    /// \return the normal form of \p id rendered in infix syntax.
    pub fn render_normal(&mut self, id: NodeId) -> String {
        let nf = self.normal_form(id);
        self.render(nf)
    }

    fn write_node(&self, id: NodeId, f: &mut fmt::Formatter) -> fmt::Result {
        match self.node(id) {
            Node::Empty => f.write_str("()"),
            Node::Symbol(sym) => f.write_str(self.symbols.name(sym)),
            Node::Option(arg) => {
                self.write_operand(arg, |n| n.is_binary(), f)?;
                f.write_str("?")
            }
            Node::Plus(arg) => {
                self.write_operand(arg, |n| n.is_binary(), f)?;
                f.write_str("+")
            }
            Node::Star(arg) => {
                self.write_operand(arg, |n| n.is_binary(), f)?;
                f.write_str("*")
            }
            Node::Power { arg, power } => {
                self.write_operand(arg, |n| n.is_binary(), f)?;
                write!(f, "^{}", power)
            }
            Node::Range { arg, lower, upper } => {
                self.write_operand(arg, |n| n.is_binary(), f)?;
                if upper == UNBOUNDED {
                    write!(f, "_{}~", lower)
                } else {
                    write!(f, "_{}^{}", lower, upper)
                }
            }
            Node::Choice(left, right) => {
                self.write_node(left, f)?;
                f.write_str(" | ")?;
                self.write_node(right, f)
            }
            Node::Concat(left, right) => {
                self.write_operand(left, |n| n.is_binary(), f)?;
                f.write_str(".")?;
                self.write_operand(right, |n| matches!(n, Node::Choice(..)), f)
            }
        }
    }

    /// Write \p id, in parentheses if \p group holds for its node.
    fn write_operand<G>(&self, id: NodeId, group: G, f: &mut fmt::Formatter) -> fmt::Result
    where
        G: Fn(&Node) -> bool,
    {
        if group(&self.node(id)) {
            f.write_str("(")?;
            self.write_node(id, f)?;
            f.write_str(")")
        } else {
            self.write_node(id, f)
        }
    }

    fn display_node(&self, id: NodeId, node: &Node, depth: usize, f: &mut fmt::Formatter) -> fmt::Result {
        for _ in 0..depth {
            write!(f, "..")?;
        }
        match *node {
            Node::Empty => write!(f, "Empty")?,
            Node::Symbol(sym) => write!(f, "Symbol '{}'", self.symbols.name(sym))?,
            Node::Power { power, .. } => write!(f, "Power {}", power)?,
            Node::Range { lower, upper, .. } if upper == UNBOUNDED => {
                write!(f, "PowerRange {}..", lower)?
            }
            Node::Range { lower, upper, .. } => write!(f, "PowerRange {}..{}", lower, upper)?,
            _ => write!(f, "{}", node.kind())?,
        }
        writeln!(f, " {}", id)
    }
}
