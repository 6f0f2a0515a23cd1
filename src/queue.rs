use crate::error::Error;
use crate::slots::{left, parent, right, Entry, HeapOrder, SlotStore};
use crate::{Id, Slot};
use core::fmt::{Debug, Formatter};
use log::debug;

/// A fixed-capacity priority queue whose entries are addressed by a dense identifier
/// in `0..capacity`.
///
/// Each identifier has at most one entry. Besides taking the top entry, callers can look up,
/// change or remove the entry for any identifier in O(log n), which is what shortest-path and
/// spanning-tree searches need for "decrease-key".
///
/// Ties between equal priorities are broken by heap position, which is not stable.
#[derive(Clone)]
pub struct IndexedPriorityQueue {
    order: HeapOrder,
    store: SlotStore,
}

impl IndexedPriorityQueue {
    /// Creates an empty queue that accepts identifiers in `0..capacity`.
    /// Neither the capacity nor the order can change afterward.
    pub fn new(capacity: u32, order: HeapOrder) -> Self {
        Self {
            order,
            store: SlotStore::new(capacity),
        }
    }

    /// Creates an empty queue whose top is the smallest priority.
    pub fn min(capacity: u32) -> Self {
        Self::new(capacity, HeapOrder::Min)
    }

    /// Creates an empty queue whose top is the largest priority.
    pub fn max(capacity: u32) -> Self {
        Self::new(capacity, HeapOrder::Max)
    }

    /// Builds a queue by inserting each `(id, priority)` pair in turn. Stops at the first pair
    /// that `insert` rejects and returns that error.
    pub fn from_entries<I>(capacity: u32, order: HeapOrder, entries: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (Id, f64)>,
    {
        let mut queue = Self::new(capacity, order);
        for (id, priority) in entries {
            queue.insert(id, priority)?;
        }
        Ok(queue)
    }

    pub fn capacity(&self) -> u32 {
        self.store.capacity()
    }

    /// Number of entries currently in the queue.
    pub fn size(&self) -> usize {
        self.store.len()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.len() == 0
    }

    pub fn order(&self) -> HeapOrder {
        self.order
    }

    pub fn contains(&self, id: Id) -> bool {
        self.store.slot_of(id).is_some()
    }

    /// Adds an entry for `id`.
    ///
    /// Fails if `id` is out of range or already has an entry; the queue is unchanged on failure.
    pub fn insert(&mut self, id: Id, priority: f64) -> Result<(), Error> {
        self.check_range(id)?;
        if self.store.slot_of(id).is_some() {
            return Err(Error::AlreadyPresent(id));
        }
        let slot = self.store.push(Entry { id, priority });
        self.sift_up(slot);
        Ok(())
    }

    /// Replaces the priority of the entry for `id`, then moves the entry toward the root or
    /// toward the leaves, whichever the new priority requires.
    ///
    /// Fails if `id` is out of range or has no entry; the queue is unchanged on failure.
    pub fn change_priority(&mut self, id: Id, new_priority: f64) -> Result<(), Error> {
        let slot = self.locate(id)?;
        self.store.set_priority(slot, new_priority);
        self.rebalance(slot);
        Ok(())
    }

    /// Removes the entry for `id` and returns its priority.
    ///
    /// Fails if `id` is out of range or has no entry; the queue is unchanged on failure.
    pub fn remove_by_id(&mut self, id: Id) -> Result<f64, Error> {
        let slot = self.locate(id)?;
        let removed = self.store.remove(slot);
        // If the last entry was moved into the vacated slot, its neighbors changed, and it may
        // now be out of order in either direction.
        if slot <= self.store.len() {
            self.rebalance(slot);
        }
        Ok(removed.priority)
    }

    /// Returns the top entry without removing it, or `None` if the queue is empty.
    pub fn peek_top(&self) -> Option<(Id, f64)> {
        if self.is_empty() {
            return None;
        }
        let top = self.store.entry(1);
        Some((top.id, top.priority))
    }

    /// Removes the top entry and returns it, or returns `None` if the queue is empty.
    pub fn delete_top(&mut self) -> Option<(Id, f64)> {
        let (id, priority) = self.peek_top()?;
        let removed = self.remove_by_id(id);
        debug_assert!(removed.is_ok());
        Some((id, priority))
    }

    /// Returns the priority of the entry for `id`, or `None` if `id` is out of range or
    /// has no entry.
    pub fn get_priority(&self, id: Id) -> Option<f64> {
        self.store
            .slot_of(id)
            .map(|slot| self.store.priority(slot))
    }

    /// Removes all entries. Runs in time proportional to the number of entries, not to the
    /// capacity.
    pub fn clear(&mut self) {
        self.store.clear();
    }

    /// Iterates the entries in slot order. The first item is the top; the rest are in no
    /// particular priority order.
    pub fn iter(&self) -> impl Iterator<Item = (Id, f64)> + '_ {
        self.store.entries().iter().map(|e| (e.id, e.priority))
    }

    /// Moves all entries into a queue with a different capacity and the same order.
    ///
    /// The entries keep their slots, so this costs O(capacity) and no comparisons. Fails with
    /// `CapacityTooSmall` if some identifier present in the queue would be out of range.
    pub fn into_resized(mut self, capacity: u32) -> Result<Self, Error> {
        let required = self
            .store
            .entries()
            .iter()
            .map(|e| e.id + 1)
            .max()
            .unwrap_or(0);
        if capacity < required {
            return Err(Error::CapacityTooSmall { capacity, required });
        }
        debug!(
            "re-constructing queue: capacity {} -> {}, {} entries",
            self.capacity(),
            capacity,
            self.len()
        );
        self.store.set_capacity(capacity);
        Ok(self)
    }

    /// Removes every entry, top first.
    pub fn into_sorted_vec(mut self) -> Vec<(Id, f64)> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Some(top) = self.delete_top() {
            sorted.push(top);
        }
        sorted
    }

    /// Panics if heap order or the consistency between the slots and the index is broken.
    pub fn assert_invariants(&self) {
        self.store.check(self.order);
    }

    fn check_range(&self, id: Id) -> Result<(), Error> {
        if id < self.capacity() {
            Ok(())
        } else {
            Err(Error::OutOfRange {
                id,
                capacity: self.capacity(),
            })
        }
    }

    fn locate(&self, id: Id) -> Result<Slot, Error> {
        self.check_range(id)?;
        self.store.slot_of(id).ok_or(Error::NotPresent(id))
    }

    fn violates_parent(&self, slot: Slot) -> bool {
        slot > 1
            && self
                .order
                .prefers(self.store.priority(slot), self.store.priority(parent(slot)))
    }

    // The entry at `slot` was just changed or moved. At most one direction can be out of
    // order, so check the parent first and only descend if the parent is fine.
    fn rebalance(&mut self, slot: Slot) {
        if self.violates_parent(slot) {
            self.sift_up(slot);
        } else {
            self.sift_down(slot);
        }
    }

    fn sift_up(&mut self, mut slot: Slot) {
        while self.violates_parent(slot) {
            let parent = parent(slot);
            self.store.swap(slot, parent);
            slot = parent;
        }
    }

    /// Returns the child of `slot` that belongs closer to the root, or `None` if `slot` is a leaf.
    ///
    /// When `slot` has only one child, that child is the last occupied slot and has no sibling;
    /// the right slot must not be read in that case.
    fn preferred_child(&self, slot: Slot) -> Option<Slot> {
        let len = self.store.len();
        let left = left(slot);
        if left > len {
            return None;
        }
        let right = right(slot);
        if right > len {
            debug_assert_eq!(left, len);
            return Some(left);
        }
        if self
            .order
            .prefers(self.store.priority(right), self.store.priority(left))
        {
            Some(right)
        } else {
            Some(left)
        }
    }

    fn sift_down(&mut self, mut slot: Slot) {
        while let Some(child) = self.preferred_child(slot) {
            if !self
                .order
                .prefers(self.store.priority(child), self.store.priority(slot))
            {
                break;
            }
            self.store.swap(slot, child);
            slot = child;
        }
    }
}

impl Debug for IndexedPriorityQueue {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> core::fmt::Result {
        write!(fmt, "Q({:?}, {}/{}): ", self.order, self.len(), self.capacity())?;
        for (id, priority) in self.iter() {
            write!(fmt, "{}:{:?} ", id, priority)?;
        }
        Ok(())
    }
}
