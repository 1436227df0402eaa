//! symtable: string-keyed symbol tables that own their keys and store
//! caller-chosen values.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: a hash-backed symbol table whose chaining, hashing, and growth
//!   policy are small enough to reason about directly, plus a linear
//!   baseline with the same contract.
//! - Layers:
//!   - `chain`: a `SlotMap` arena of bindings and singly linked chains of
//!     arena keys with O(1) tail append. Both tables are built on it.
//!   - HashSymTable<V>: an array of chains indexed by `hash::bucket_index`,
//!     grown along a `CapacitySchedule`.
//!   - ListSymTable<V>: one chain, no buckets, no growth.
//!   - `SymbolTable<V>`: the operation set both tables implement;
//!     `verify` runs scripted checks against any implementation.
//!
//! Constraints
//! - Single-threaded; no interior mutability, so the borrow checker is the
//!   only synchronization. Wrap a table in a lock to share it.
//! - Keys are `&str` on the way in and copied into owned `String`s; values
//!   are stored as given and never inspected.
//! - Unique keys; duplicate inserts fail with the table unchanged.
//! - A key bound to "nothing" is modelled by an optional value type and is
//!   always distinguishable from an unbound key by the `Option` layering of
//!   `get`/`replace`/`remove`.
//!
//! Growth
//! - Triggered only from `insert`, only when `len() == bucket_count()`, and
//!   only after the duplicate check and key copy have succeeded.
//! - Allocates the next scheduled bucket array, then re-links every arena
//!   node into it in bucket-then-chain order. Keys and values never move.
//! - If the schedule is exhausted or the allocation fails, the insert goes
//!   ahead at the current capacity. Growth failures are logged, not returned.
//!
//! Notes and non-goals
//! - No shrinking below the initial capacity (or at all).
//! - Iteration order is bucket-ascending then insertion order, and is only
//!   meaningful between mutations.
//! - No persistence, no non-string keys.

mod chain;
pub mod error;
pub mod hash;
pub mod hash_sym_table;
pub mod list_sym_table;
pub mod logger;
pub mod schedule;
mod sym_table;
#[cfg(test)]
mod sym_table_proptest;
pub mod verify;

// Public surface
pub use error::{AllocError, InsertError, ScheduleError};
pub use hash_sym_table::HashSymTable;
pub use list_sym_table::ListSymTable;
pub use schedule::CapacitySchedule;
pub use sym_table::SymbolTable;
