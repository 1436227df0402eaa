//! Arena-backed singly linked chains.
//!
//! Every binding lives in a `SlotMap` arena owned by the table; a `Chain` is
//! just a (head, tail) pair of arena keys, and each binding stores the key of
//! its successor. Moving a binding between chains re-links keys and never
//! touches the binding's owned key string.

use crate::error::InsertError;
use slotmap::{DefaultKey, SlotMap};

pub(crate) type Arena<V> = SlotMap<DefaultKey, Binding<V>>;

#[derive(Debug)]
pub(crate) struct Binding<V> {
    pub(crate) key: String,
    pub(crate) value: V,
    next: Option<DefaultKey>,
}

impl<V> Binding<V> {
    /// Copy `key` into an owned string. Fails instead of aborting when the
    /// copy cannot be allocated. The caller already holds `key` in memory, so
    /// this only trips under real allocator exhaustion and has no test.
    pub(crate) fn new(key: &str, value: V) -> Result<Self, InsertError> {
        let mut owned = String::new();
        owned
            .try_reserve_exact(key.len())
            .map_err(|_| InsertError::OutOfMemory)?;
        owned.push_str(key);
        Ok(Self {
            key: owned,
            value,
            next: None,
        })
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Chain {
    head: Option<DefaultKey>,
    tail: Option<DefaultKey>,
}

impl Chain {
    pub(crate) const EMPTY: Chain = Chain {
        head: None,
        tail: None,
    };

    pub(crate) fn find<V>(&self, arena: &Arena<V>, key: &str) -> Option<DefaultKey> {
        self.nodes(arena)
            .find(|(_, b)| b.key == key)
            .map(|(node, _)| node)
    }

    /// Append `node` at the tail. `node` must not currently be linked into
    /// any chain.
    pub(crate) fn push_back<V>(&mut self, arena: &mut Arena<V>, node: DefaultKey) {
        arena[node].next = None;
        match self.tail {
            Some(t) => arena[t].next = Some(node),
            None => self.head = Some(node),
        }
        self.tail = Some(node);
    }

    /// Detach the binding for `key` and return its arena key. The binding
    /// itself stays in the arena; the caller removes it.
    pub(crate) fn unlink<V>(&mut self, arena: &mut Arena<V>, key: &str) -> Option<DefaultKey> {
        let mut prev: Option<DefaultKey> = None;
        let mut cur = self.head;
        while let Some(node) = cur {
            let next = arena[node].next;
            if arena[node].key == key {
                match prev {
                    Some(p) => arena[p].next = next,
                    None => self.head = next,
                }
                if self.tail == Some(node) {
                    self.tail = prev;
                }
                arena[node].next = None;
                return Some(node);
            }
            prev = cur;
            cur = next;
        }
        None
    }

    /// Move every binding of this chain, in chain order, onto the tail of
    /// `targets[pick(key)]`. Relative order of bindings that land in the
    /// same target is preserved.
    pub(crate) fn redistribute<V, F>(self, arena: &mut Arena<V>, targets: &mut [Chain], mut pick: F)
    where
        F: FnMut(&str) -> usize,
    {
        let mut cur = self.head;
        while let Some(node) = cur {
            cur = arena[node].next;
            let slot = pick(arena[node].key.as_str());
            targets[slot].push_back(arena, node);
        }
    }

    pub(crate) fn nodes<'a, V>(&self, arena: &'a Arena<V>) -> Nodes<'a, V> {
        Nodes {
            arena,
            cur: self.head,
        }
    }
}

/// Walks one chain from head to tail.
pub(crate) struct Nodes<'a, V> {
    arena: &'a Arena<V>,
    cur: Option<DefaultKey>,
}

impl<'a, V> Iterator for Nodes<'a, V> {
    type Item = (DefaultKey, &'a Binding<V>);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.cur?;
        let b = &self.arena[node];
        self.cur = b.next;
        Some((node, b))
    }
}
