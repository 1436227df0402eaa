//! ListSymTable: the same operations over a single unbucketed chain.
//!
//! Every lookup is a linear scan, so this is only sensible for small tables
//! or as a baseline to check `HashSymTable` against.

use crate::chain::{Arena, Binding, Chain, Nodes};
use crate::error::InsertError;
use crate::sym_table::SymbolTable;
use core::fmt;
use core::mem;
use slotmap::{DefaultKey, SlotMap};

pub struct ListSymTable<V> {
    chain: Chain,
    arena: Arena<V>,
}

impl<V> ListSymTable<V> {
    pub fn new() -> Self {
        Self {
            chain: Chain::EMPTY,
            arena: SlotMap::with_key(),
        }
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    fn find_node(&self, key: &str) -> Option<DefaultKey> {
        self.chain.find(&self.arena, key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.find_node(key).is_some()
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.find_node(key).map(|node| &self.arena[node].value)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let node = self.find_node(key)?;
        Some(&mut self.arena[node].value)
    }

    pub fn insert(&mut self, key: &str, value: V) -> Result<(), InsertError> {
        if self.contains_key(key) {
            return Err(InsertError::DuplicateKey);
        }
        let node = self.arena.insert(Binding::new(key, value)?);
        self.chain.push_back(&mut self.arena, node);
        Ok(())
    }

    pub fn replace(&mut self, key: &str, value: V) -> Option<V> {
        self.get_mut(key).map(|slot| mem::replace(slot, value))
    }

    pub fn remove(&mut self, key: &str) -> Option<V> {
        let node = self.chain.unlink(&mut self.arena, key)?;
        self.arena.remove(node).map(|b| b.value)
    }

    /// Bindings in insertion order.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            nodes: self.chain.nodes(&self.arena),
            remaining: self.arena.len(),
        }
    }

    pub fn for_each<F>(&self, mut visitor: F)
    where
        F: FnMut(&str, &V),
    {
        for (k, v) in self.iter() {
            visitor(k, v);
        }
    }
}

impl<V> Default for ListSymTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Debug> fmt::Debug for ListSymTable<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<V> SymbolTable<V> for ListSymTable<V> {
    fn len(&self) -> usize {
        ListSymTable::len(self)
    }
    fn insert(&mut self, key: &str, value: V) -> Result<(), InsertError> {
        ListSymTable::insert(self, key, value)
    }
    fn replace(&mut self, key: &str, value: V) -> Option<V> {
        ListSymTable::replace(self, key, value)
    }
    fn contains_key(&self, key: &str) -> bool {
        ListSymTable::contains_key(self, key)
    }
    fn get(&self, key: &str) -> Option<&V> {
        ListSymTable::get(self, key)
    }
    fn remove(&mut self, key: &str) -> Option<V> {
        ListSymTable::remove(self, key)
    }
    fn for_each<F>(&self, visitor: F)
    where
        F: FnMut(&str, &V),
    {
        ListSymTable::for_each(self, visitor)
    }
}

pub struct Iter<'a, V> {
    nodes: Nodes<'a, V>,
    remaining: usize,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let (_, b) = self.nodes.next()?;
        self.remaining -= 1;
        Some((b.key.as_str(), &b.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

impl<'a, V> IntoIterator for &'a ListSymTable<V> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
