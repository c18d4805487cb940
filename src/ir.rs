//! Expression arena for regular expressions over arbitrary symbols

use crate::symbols::{Payload, SymbolTable};
use crate::types::{Exponent, Kind, NodeId, SymbolID, MAX_NODES, UNBOUNDED};
use core::borrow::Borrow;
use core::hash::Hash;
use rustc_hash::FxHashMap;

/// The canonical empty expression. Every arena stores it at index 0.
pub const EMPTY: NodeId = NodeId::new(0);

/// The node types of our expressions.
/// Children are referenced by NodeId into the owning arena.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Node {
    /// Matches the empty string. Printed as ().
    Empty,

    /// An interned symbol of the alphabet.
    Symbol(SymbolID),

    /// X?
    Option(NodeId),

    /// X+
    Plus(NodeId),

    /// X*
    Star(NodeId),

    /// X^n, exactly n repetitions.
    Power { arg: NodeId, power: Exponent },

    /// X_m^n, between m and n repetitions inclusive.
    /// An upper bound of UNBOUNDED is printed as X_m~.
    Range {
        arg: NodeId,
        lower: Exponent,
        upper: Exponent,
    },

    /// X | Y
    Choice(NodeId, NodeId),

    /// X.Y
    Concat(NodeId, NodeId),
}

impl Node {
    pub fn kind(&self) -> Kind {
        match self {
            Node::Empty => Kind::Empty,
            Node::Symbol(..) => Kind::Symbol,
            Node::Option(..) => Kind::Option,
            Node::Plus(..) => Kind::Plus,
            Node::Star(..) => Kind::Star,
            Node::Power { .. } => Kind::Power,
            Node::Range { .. } => Kind::Range,
            Node::Choice(..) => Kind::Choice,
            Node::Concat(..) => Kind::Concat,
        }
    }

    #[inline]
    pub fn is_unary(&self) -> bool {
        self.kind().is_unary()
    }

    #[inline]
    pub fn is_binary(&self) -> bool {
        self.kind().is_binary()
    }

    /// \return the child of a unary node.
    pub fn arg(&self) -> Option<NodeId> {
        match *self {
            Node::Option(arg)
            | Node::Plus(arg)
            | Node::Star(arg)
            | Node::Power { arg, .. }
            | Node::Range { arg, .. } => Some(arg),
            _ => None,
        }
    }

    /// \return the children of a binary node.
    pub fn operands(&self) -> Option<(NodeId, NodeId)> {
        match *self {
            Node::Choice(left, right) | Node::Concat(left, right) => Some((left, right)),
            _ => None,
        }
    }

    /// \return the repetition bounds of a Power or Range node.
    pub fn bounds(&self) -> Option<(Exponent, Exponent)> {
        match *self {
            Node::Power { power, .. } => Some((power, power)),
            Node::Range { lower, upper, .. } => Some((lower, upper)),
            _ => None,
        }
    }

    /// \return a copy of this node whose children are replaced through \p f.
    pub fn map_children<F>(&self, mut f: F) -> Node
    where
        F: FnMut(NodeId) -> NodeId,
    {
        match *self {
            Node::Empty => Node::Empty,
            Node::Symbol(sym) => Node::Symbol(sym),
            Node::Option(arg) => Node::Option(f(arg)),
            Node::Plus(arg) => Node::Plus(f(arg)),
            Node::Star(arg) => Node::Star(f(arg)),
            Node::Power { arg, power } => Node::Power { arg: f(arg), power },
            Node::Range { arg, lower, upper } => Node::Range {
                arg: f(arg),
                lower,
                upper,
            },
            Node::Choice(left, right) => {
                let left = f(left);
                Node::Choice(left, f(right))
            }
            Node::Concat(left, right) => {
                let left = f(left);
                Node::Concat(left, f(right))
            }
        }
    }
}

/// An arena of expressions, which is also the interning context for symbols.
///
/// Nodes are immutable and hash-consed: building a node equal to an existing
/// one returns the existing NodeId, so structural equality is NodeId equality.
/// The only state written after a node is created is its cached normal form.
///
/// Construction and normalization take `&mut self`; to share an arena across
/// threads, put it behind a lock.
#[derive(Debug, Clone)]
pub struct Exprs<S = String> {
    /// Node storage, indexed by NodeId.
    nodes: Vec<Node>,

    /// Lookup from node to its id, for hash-consing.
    ids: FxHashMap<Node, NodeId>,

    /// Cached normal forms, indexed by NodeId.
    pub(crate) normal: Vec<Option<NodeId>>,

    /// The symbols of the alphabet seen so far.
    pub(crate) symbols: SymbolTable<S>,
}

impl<S: Payload> Default for Exprs<S> {
    fn default() -> Self {
        let mut ids = FxHashMap::default();
        ids.insert(Node::Empty, EMPTY);
        Exprs {
            nodes: vec![Node::Empty],
            ids,
            normal: vec![Some(EMPTY)],
            symbols: SymbolTable::new(),
        }
    }
}

impl<S: Payload> Exprs<S> {
    /// Create an arena holding only the empty expression.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add \p node to the arena, or find its existing copy.
    pub(crate) fn insert(&mut self, node: Node) -> NodeId {
        if let Some(&id) = self.ids.get(&node) {
            return id;
        }
        assert!(self.nodes.len() < MAX_NODES, "Node count limit exceeded");
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(node);
        self.normal.push(None);
        self.ids.insert(node, id);
        id
    }

    /// \return the node stored at \p id.
    #[inline]
    pub fn node(&self, id: NodeId) -> Node {
        self.nodes[id.index()]
    }

    #[inline]
    pub fn kind(&self, id: NodeId) -> Kind {
        self.node(id).kind()
    }

    /// \return the number of distinct nodes in the arena, including Empty.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// \return the canonical empty expression.
    #[inline]
    pub fn empty(&self) -> NodeId {
        EMPTY
    }

    /// \return the canonical leaf for \p payload, or Empty if there is none.
    pub fn intern(&mut self, payload: Option<S>) -> NodeId {
        match payload {
            None => EMPTY,
            Some(payload) => self.symbol(payload),
        }
    }

    /// \return the canonical leaf for \p payload.
    pub fn symbol(&mut self, payload: S) -> NodeId {
        let sym = self.symbols.intern(payload);
        self.insert(Node::Symbol(sym))
    }

    /// \return the leaf for \p payload if it was already interned.
    pub fn lookup_symbol<Q>(&self, payload: &Q) -> Option<NodeId>
    where
        S: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let sym = self.symbols.lookup(payload)?;
        self.ids.get(&Node::Symbol(sym)).copied()
    }

    pub fn make_option(&mut self, arg: NodeId) -> NodeId {
        self.insert(Node::Option(arg))
    }

    pub fn make_plus(&mut self, arg: NodeId) -> NodeId {
        self.insert(Node::Plus(arg))
    }

    pub fn make_star(&mut self, arg: NodeId) -> NodeId {
        self.insert(Node::Star(arg))
    }

    pub fn make_power(&mut self, arg: NodeId, power: Exponent) -> NodeId {
        self.insert(Node::Power { arg, power })
    }

    /// Bounds are not validated; out-of-range bounds normalize to Empty.
    pub fn make_range(&mut self, arg: NodeId, lower: Exponent, upper: Exponent) -> NodeId {
        self.insert(Node::Range { arg, lower, upper })
    }

    /// Make X_lower~, at least \p lower repetitions with no upper bound.
    pub fn make_range_from(&mut self, arg: NodeId, lower: Exponent) -> NodeId {
        self.make_range(arg, lower, UNBOUNDED)
    }

    pub fn make_choice(&mut self, left: NodeId, right: NodeId) -> NodeId {
        self.insert(Node::Choice(left, right))
    }

    pub fn make_concat(&mut self, left: NodeId, right: NodeId) -> NodeId {
        self.insert(Node::Concat(left, right))
    }

    /// Fold a sequence of nodes into a right-nested concatenation
    /// `a.(b.(c.()))`, preserving order. An empty sequence yields Empty.
    pub fn make_concat_all<I>(&mut self, items: I) -> NodeId
    where
        I: IntoIterator<Item = NodeId>,
        I::IntoIter: DoubleEndedIterator,
    {
        items
            .into_iter()
            .rev()
            .fold(EMPTY, |rest, item| self.make_concat(item, rest))
    }

    /// \return the child of a unary node.
    pub fn arg_of(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).arg()
    }

    /// \return the left child of a binary node.
    pub fn left_of(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).operands().map(|(left, _)| left)
    }

    /// \return the right child of a binary node.
    pub fn right_of(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).operands().map(|(_, right)| right)
    }

    /// \return the exponent of a Power node.
    pub fn power_of(&self, id: NodeId) -> Option<Exponent> {
        match self.node(id) {
            Node::Power { power, .. } => Some(power),
            _ => None,
        }
    }

    /// \return the lower bound of a Range node.
    pub fn lower_of(&self, id: NodeId) -> Option<Exponent> {
        match self.node(id) {
            Node::Range { lower, .. } => Some(lower),
            _ => None,
        }
    }

    /// \return the upper bound of a Range node; UNBOUNDED if it has none.
    pub fn upper_of(&self, id: NodeId) -> Option<Exponent> {
        match self.node(id) {
            Node::Range { upper, .. } => Some(upper),
            _ => None,
        }
    }

    /// \return the payload of a Symbol node.
    pub fn payload_of(&self, id: NodeId) -> Option<&S> {
        match self.node(id) {
            Node::Symbol(sym) => Some(self.symbols.payload(sym)),
            _ => None,
        }
    }

    /// \return the printed name of a Symbol node.
    pub fn name_of(&self, id: NodeId) -> Option<&str> {
        match self.node(id) {
            Node::Symbol(sym) => Some(self.symbols.name(sym)),
            _ => None,
        }
    }

    /// \return whether \p id is a symbol.
    #[inline]
    pub fn is_symbol(&self, id: NodeId) -> bool {
        matches!(self.node(id), Node::Symbol(..))
    }

    /// \return whether \p a and \p b are both symbols and the name of \p a
    /// sorts before the name of \p b. Other nodes are never ordered.
    pub fn lex_less(&self, a: NodeId, b: NodeId) -> bool {
        match (self.name_of(a), self.name_of(b)) {
            (Some(a), Some(b)) => a < b,
            _ => false,
        }
    }

    /// Print the symbol \p id as \p name instead of its payload's Display.
    /// The name also orders the symbol in choices, so cached normal forms are
    /// discarded. \return false if \p id is not a symbol.
    pub fn set_name(&mut self, id: NodeId, name: impl Into<String>) -> bool {
        let Node::Symbol(sym) = self.node(id) else {
            return false;
        };
        self.symbols.set_name(sym, name);
        self.normal.iter_mut().for_each(|nf| *nf = None);
        self.normal[EMPTY.index()] = Some(EMPTY);
        true
    }

    /// Call a function on every node reachable from \p id.
    /// If \p postorder is true, then process children before the node;
    /// otherwise process children after the node.
    /// Shared subexpressions are visited once per occurrence.
    pub fn walk<F>(&self, postorder: bool, id: NodeId, func: &mut F)
    where
        F: FnMut(NodeId, &Node, &mut Walk),
    {
        let mut walker = Walker {
            exprs: self,
            func,
            postorder,
            walk: Walk::default(),
        };
        walker.process(id);
    }

    /// \return the number of nodes in the tree rooted at \p id, counting
    /// shared subexpressions once per occurrence.
    pub fn tree_size(&self, id: NodeId) -> usize {
        let mut size = 0;
        self.walk(true, id, &mut |_: NodeId, _: &Node, _: &mut Walk| size += 1);
        size
    }

    /// \return the height of the tree rooted at \p id; a leaf has height 1.
    pub fn tree_depth(&self, id: NodeId) -> usize {
        let mut depth = 0;
        self.walk(false, id, &mut |_: NodeId, _: &Node, walk: &mut Walk| {
            depth = depth.max(walk.depth + 1)
        });
        depth
    }
}

/// A helper type for walking.
#[derive(Debug, Clone, Default)]
pub struct Walk {
    // If set to true, skip the children of this node.
    pub skip_children: bool,

    // The current depth of the walk.
    pub depth: usize,
}

struct Walker<'a, 'e, S, F>
where
    F: FnMut(NodeId, &Node, &mut Walk),
{
    exprs: &'e Exprs<S>,
    func: &'a mut F,
    postorder: bool,
    walk: Walk,
}

impl<S: Payload, F> Walker<'_, '_, S, F>
where
    F: FnMut(NodeId, &Node, &mut Walk),
{
    fn process_children(&mut self, node: &Node) {
        match *node {
            Node::Empty | Node::Symbol(..) => {}
            Node::Option(arg)
            | Node::Plus(arg)
            | Node::Star(arg)
            | Node::Power { arg, .. }
            | Node::Range { arg, .. } => self.process(arg),
            Node::Choice(left, right) | Node::Concat(left, right) => {
                self.process(left);
                self.process(right);
            }
        }
    }

    fn process(&mut self, id: NodeId) {
        let node = self.exprs.node(id);
        self.walk.skip_children = false;
        if !self.postorder {
            (self.func)(id, &node, &mut self.walk);
        }
        if !self.walk.skip_children {
            self.walk.depth += 1;
            self.process_children(&node);
            self.walk.depth -= 1;
        }
        if self.postorder {
            (self.func)(id, &node, &mut self.walk);
        }
    }
}
