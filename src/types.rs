use core::fmt;

/// An exponent or repetition bound.
/// Bounds may be negative on construction; the rewrite rules treat
/// negative bounds as denoting the empty language.
pub type Exponent = i32;

/// The sentinel standing for an unbounded upper repetition count.
pub const UNBOUNDED: Exponent = Exponent::MAX;

/// Identifies a node in an [`Exprs`](crate::Exprs) arena.
/// Nodes are hash-consed, so two structurally equal nodes of one arena always
/// have the same NodeId.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    pub(crate) const fn new(raw: u32) -> Self {
        Self(raw)
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }

    /// \return the raw index of this node in its arena.
    #[inline]
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A symbol index is u32.
/// SymbolID 0 corresponds to the first symbol interned.
pub type SymbolID = u32;

/// The maximum number of nodes an arena may hold.
pub const MAX_NODES: usize = u32::MAX as usize;

/// The kind of a node, as a single bit.
/// Kinds are grouped into the UNARY and BINARY masks so that generic code can
/// test a node's shape without matching on every variant.
#[repr(u16)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Kind {
    Empty = 1 << 0,
    Symbol = 1 << 1,
    Option = 1 << 2,
    Plus = 1 << 3,
    Star = 1 << 4,
    Power = 1 << 5,
    Range = 1 << 6,
    Choice = 1 << 7,
    Concat = 1 << 8,
}

/// Mask of the kinds that wrap a single child.
pub const UNARY: u16 =
    Kind::Option as u16 | Kind::Plus as u16 | Kind::Star as u16 | Kind::Power as u16 | Kind::Range as u16;

/// Mask of the kinds that have a left and a right child.
pub const BINARY: u16 = Kind::Choice as u16 | Kind::Concat as u16;

impl Kind {
    /// \return the bit for this kind.
    #[inline]
    pub const fn bit(self) -> u16 {
        self as u16
    }

    #[inline]
    pub const fn is_unary(self) -> bool {
        self.bit() & UNARY != 0
    }

    #[inline]
    pub const fn is_binary(self) -> bool {
        self.bit() & BINARY != 0
    }

    /// \return the name used for this kind in rule traces.
    pub const fn tag(self) -> &'static str {
        match self {
            Kind::Empty => "Empty",
            Kind::Symbol => "Symbol",
            Kind::Option => "Option",
            Kind::Plus => "Plus",
            Kind::Star => "Star",
            Kind::Power => "Power",
            Kind::Range => "PowerRange",
            Kind::Choice => "Choice",
            Kind::Concat => "Concat",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.tag())
    }
}
