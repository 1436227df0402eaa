//! The operation set shared by every symbol table in this crate.

use crate::error::InsertError;

/// String-keyed container with unique keys and caller-chosen values.
///
/// Keys are copied into the table on insert and owned by it; values are
/// stored as given and never inspected. To bind a key to "nothing", pick an
/// optional value type such as `Option<&T>`: `get` then returns
/// `Some(&None)` for a key bound to nothing and `None` for an unbound key.
pub trait SymbolTable<V> {
    /// Number of bindings.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bind `key` to `value`. On error the table is unchanged.
    fn insert(&mut self, key: &str, value: V) -> Result<(), InsertError>;

    /// Swap the value bound to `key`, returning the previous one. Returns
    /// `None` and leaves the table unchanged when `key` is unbound.
    fn replace(&mut self, key: &str, value: V) -> Option<V>;

    fn contains_key(&self, key: &str) -> bool;

    fn get(&self, key: &str) -> Option<&V>;

    /// Unbind `key`, returning its value.
    fn remove(&mut self, key: &str) -> Option<V>;

    /// Call `visitor` once per binding. The visitor only sees shared
    /// references, so the table cannot be mutated while it runs.
    fn for_each<F>(&self, visitor: F)
    where
        F: FnMut(&str, &V);
}
