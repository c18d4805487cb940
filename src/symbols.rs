//! Interning of symbol payloads

use crate::types::SymbolID;
use core::borrow::Borrow;
use core::fmt;
use core::hash::Hash;
use rustc_hash::FxHashMap;

/// The requirements on a symbol payload.
/// Payloads are compared with their own equality; their Display rendering is
/// the symbol's printed name, which also orders symbols in choices.
pub trait Payload: Eq + Hash + Clone + fmt::Display {}

impl<T> Payload for T where T: Eq + Hash + Clone + fmt::Display {}

/// Maps payloads to dense symbol ids, at most one id per equal payload.
#[derive(Debug, Clone)]
pub struct SymbolTable<S> {
    /// Payloads, indexed by SymbolID.
    payloads: Vec<S>,

    /// Printed names, indexed by SymbolID.
    names: Vec<Box<str>>,

    /// Lookup from payload to its id.
    ids: FxHashMap<S, SymbolID>,
}

impl<S: Payload> Default for SymbolTable<S> {
    fn default() -> Self {
        Self {
            payloads: Vec::new(),
            names: Vec::new(),
            ids: FxHashMap::default(),
        }
    }
}

impl<S: Payload> SymbolTable<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// \return the id for \p payload, registering it on first use.
    pub fn intern(&mut self, payload: S) -> SymbolID {
        if let Some(&id) = self.ids.get(&payload) {
            return id;
        }
        assert!(self.payloads.len() < SymbolID::MAX as usize, "Symbol count limit exceeded");
        let id = self.payloads.len() as SymbolID;
        self.names.push(payload.to_string().into_boxed_str());
        self.payloads.push(payload.clone());
        self.ids.insert(payload, id);
        id
    }

    /// \return the id for \p payload, if it was interned.
    pub fn lookup<Q>(&self, payload: &Q) -> Option<SymbolID>
    where
        S: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.ids.get(payload).copied()
    }

    #[inline]
    pub fn payload(&self, id: SymbolID) -> &S {
        &self.payloads[id as usize]
    }

    #[inline]
    pub fn name(&self, id: SymbolID) -> &str {
        &self.names[id as usize]
    }

    /// Replace the printed name of \p id.
    pub fn set_name(&mut self, id: SymbolID, name: impl Into<String>) {
        self.names[id as usize] = name.into().into_boxed_str();
    }

    pub fn len(&self) -> usize {
        self.payloads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payloads.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::SymbolTable;

    #[test]
    fn equal_payloads_share_an_id() {
        let mut table = SymbolTable::new();
        let a = table.intern(String::from("a"));
        let b = table.intern(String::from("b"));
        assert_ne!(a, b);
        assert_eq!(table.intern(String::from("a")), a);
        assert_eq!(table.len(), 2);
        assert_eq!(table.lookup("b"), Some(b));
        assert_eq!(table.lookup("c"), None);
    }

    #[test]
    fn names_come_from_display() {
        let mut table = SymbolTable::new();
        let seven = table.intern(7u32);
        let forty_two = table.intern(42u32);
        assert_eq!(table.name(seven), "7");
        assert_eq!(table.name(forty_two), "42");
        assert_eq!(*table.payload(forty_two), 42);
    }

    #[test]
    fn renamed_symbols_keep_their_payload() {
        let mut table = SymbolTable::new();
        let seven = table.intern(7u32);
        table.set_name(seven, "seven");
        assert_eq!(table.name(seven), "seven");
        assert_eq!(table.lookup(&7u32), Some(seven));
        assert_eq!(table.intern(7u32), seven);
        assert_eq!(table.name(seven), "seven");
    }
}
