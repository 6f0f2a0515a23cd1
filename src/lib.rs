//! An indexed priority queue: a fixed-capacity binary heap of `(id, priority)` entries whose
//! identifiers are dense integers, so that any entry can be found, re-prioritized or removed
//! by identifier in O(log n).
//!
//! The `paths` module shows the queue in use, for shortest paths and spanning trees.

pub mod error;
pub mod graph;
pub mod paths;
pub mod queue;
pub mod slots;

#[cfg(test)]
mod testing;

pub use error::Error;
pub use graph::WeightedGraph;
pub use queue::IndexedPriorityQueue;
pub use slots::{Entry, HeapOrder};

// identifier of a queue entry; always in 0..capacity
pub type Id = u32;

// 1-based position in the slot store
pub type Slot = usize;

// vertex type; an index into a vertex list
pub type V = u32;

// edge weight
pub type Weight = f64;
