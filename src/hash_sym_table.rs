//! HashSymTable: separately chained buckets that grow along a capacity schedule.

use crate::chain::{Arena, Binding, Chain, Nodes};
use crate::error::{AllocError, InsertError};
use crate::hash::bucket_index;
use crate::schedule::CapacitySchedule;
use crate::sym_table::SymbolTable;
use core::fmt;
use core::iter::FusedIterator;
use core::mem;
use log::{debug, trace, warn};
use slotmap::{DefaultKey, SlotMap};

/// Hash-table-backed symbol table.
///
/// Bindings live in a slot arena; each bucket is a chain of arena keys in
/// insertion order. When an insert finds `len() == bucket_count()` the table
/// moves to the next step of its [`CapacitySchedule`], re-linking every
/// binding into a freshly allocated bucket array. Growth never fails an
/// insert: if the schedule is exhausted or the new array cannot be
/// allocated, the table keeps its current buckets and chains get longer.
pub struct HashSymTable<V> {
    buckets: Vec<Chain>,
    arena: Arena<V>,
    schedule: CapacitySchedule,
    step: usize,
}

fn alloc_buckets(count: usize) -> Option<Vec<Chain>> {
    let mut buckets = Vec::new();
    buckets.try_reserve_exact(count).ok()?;
    buckets.resize(count, Chain::EMPTY);
    Some(buckets)
}

impl<V> HashSymTable<V> {
    /// Empty table at the first step of [`CapacitySchedule::DEFAULT`].
    pub fn new() -> Self {
        Self::with_schedule(CapacitySchedule::DEFAULT)
    }

    pub fn with_schedule(schedule: CapacitySchedule) -> Self {
        Self {
            buckets: vec![Chain::EMPTY; schedule.initial()],
            arena: SlotMap::with_key(),
            schedule,
            step: 0,
        }
    }

    /// Like [`HashSymTable::new`], but reports a failed bucket allocation
    /// instead of aborting.
    pub fn try_new() -> Result<Self, AllocError> {
        Self::try_with_schedule(CapacitySchedule::DEFAULT)
    }

    pub fn try_with_schedule(schedule: CapacitySchedule) -> Result<Self, AllocError> {
        let count = schedule.initial();
        let buckets = alloc_buckets(count).ok_or(AllocError { buckets: count })?;
        Ok(Self {
            buckets,
            arena: SlotMap::with_key(),
            schedule,
            step: 0,
        })
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Current number of buckets.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Index of the current bucket count within the schedule. Never decreases.
    pub fn growth_step(&self) -> usize {
        self.step
    }

    pub fn schedule(&self) -> CapacitySchedule {
        self.schedule
    }

    #[inline]
    fn bucket_of(&self, key: &str) -> usize {
        bucket_index(key, self.buckets.len())
    }

    fn find_node(&self, key: &str) -> Option<DefaultKey> {
        self.buckets[self.bucket_of(key)].find(&self.arena, key)
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

    /// Bind a copy of `key` to `value`.
    ///
    /// Fails with [`InsertError::DuplicateKey`] if `key` is already bound,
    /// or [`InsertError::OutOfMemory`] if the key copy cannot be allocated.
    /// The table is unchanged on failure; in particular a rejected insert
    /// never triggers growth.
    pub fn insert(&mut self, key: &str, value: V) -> Result<(), InsertError> {
        if self.contains_key(key) {
            return Err(InsertError::DuplicateKey);
        }
        let binding = Binding::new(key, value)?;
        if self.len() == self.buckets.len() {
            self.try_grow();
        }
        let slot = self.bucket_of(key);
        let node = self.arena.insert(binding);
        self.buckets[slot].push_back(&mut self.arena, node);
        Ok(())
    }

    /// Swap in `value` for an existing binding and return the old value.
    /// The stored key is reused, not copied again.
    pub fn replace(&mut self, key: &str, value: V) -> Option<V> {
        self.get_mut(key).map(|slot| mem::replace(slot, value))
    }

    pub fn remove(&mut self, key: &str) -> Option<V> {
        self.remove_entry(key).map(|(_, v)| v)
    }

    /// Unbind `key`, handing back the table's owned copy of the key along
    /// with the value.
    pub fn remove_entry(&mut self, key: &str) -> Option<(String, V)> {
        let slot = self.bucket_of(key);
        let node = self.buckets[slot].unlink(&mut self.arena, key)?;
        let binding = self.arena.remove(node)?;
        Some((binding.key, binding.value))
    }

    /// Move to the next scheduled bucket count. Returns false, with the table
    /// untouched, when there is no next step or the array cannot be allocated.
    fn try_grow(&mut self) -> bool {
        let from = self.buckets.len();
        let Some(to) = self.schedule.get(self.step + 1) else {
            debug!(
                "symbol table at final capacity of {} buckets; chaining {} bindings",
                from,
                self.len()
            );
            return false;
        };
        let Some(fresh) = alloc_buckets(to) else {
            warn!("could not allocate {} buckets; staying at {}", to, from);
            return false;
        };
        trace!(
            "growing symbol table from {} to {} buckets ({} bindings)",
            from,
            to,
            self.len()
        );
        let old = mem::replace(&mut self.buckets, fresh);
        for chain in old {
            chain.redistribute(&mut self.arena, &mut self.buckets, |k| bucket_index(k, to));
        }
        self.step += 1;
        true
    }

    /// Bindings in bucket order, and insertion order within a bucket.
    ///
    /// The order is stable between mutations but may change across growth.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            arena: &self.arena,
            buckets: self.buckets.iter(),
            chain: Chain::EMPTY.nodes(&self.arena),
            remaining: self.arena.len(),
        }
    }

    /// Mutable access to every value. Visit order is unspecified.
    pub fn iter_mut(&mut self) -> IterMut<'_, V> {
        IterMut {
            it: self.arena.iter_mut(),
        }
    }

    /// Call `visitor` for each binding in [`HashSymTable::iter`] order.
    pub fn for_each<F>(&self, mut visitor: F)
    where
        F: FnMut(&str, &V),
    {
        for (k, v) in self.iter() {
            visitor(k, v);
        }
    }
}

impl<V> Default for HashSymTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Debug> fmt::Debug for HashSymTable<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<V> SymbolTable<V> for HashSymTable<V> {
    fn len(&self) -> usize {
        HashSymTable::len(self)
    }
    fn insert(&mut self, key: &str, value: V) -> Result<(), InsertError> {
        HashSymTable::insert(self, key, value)
    }
    fn replace(&mut self, key: &str, value: V) -> Option<V> {
        HashSymTable::replace(self, key, value)
    }
    fn contains_key(&self, key: &str) -> bool {
        HashSymTable::contains_key(self, key)
    }
    fn get(&self, key: &str) -> Option<&V> {
        HashSymTable::get(self, key)
    }
    fn remove(&mut self, key: &str) -> Option<V> {
        HashSymTable::remove(self, key)
    }
    fn for_each<F>(&self, visitor: F)
    where
        F: FnMut(&str, &V),
    {
        HashSymTable::for_each(self, visitor)
    }
}

/// Iterator over `(key, value)` pairs of a [`HashSymTable`].
pub struct Iter<'a, V> {
    arena: &'a Arena<V>,
    buckets: core::slice::Iter<'a, Chain>,
    chain: Nodes<'a, V>,
    remaining: usize,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        loop {
            if let Some((_, b)) = self.chain.next() {
                self.remaining -= 1;
                return Some((b.key.as_str(), &b.value));
            }
            self.chain = self.buckets.next()?.nodes(self.arena);
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}
impl<V> FusedIterator for Iter<'_, V> {}

impl<'a, V> IntoIterator for &'a HashSymTable<V> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over `(key, &mut value)` pairs of a [`HashSymTable`].
pub struct IterMut<'a, V> {
    it: slotmap::basic::IterMut<'a, DefaultKey, Binding<V>>,
}

impl<'a, V> Iterator for IterMut<'a, V> {
    type Item = (&'a str, &'a mut V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.it.next().map(|(_, b)| (b.key.as_str(), &mut b.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.it.size_hint()
    }
}
