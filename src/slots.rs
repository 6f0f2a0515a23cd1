//! Array-backed slot store and the identifier-to-slot position index.
//!
//! Slots are 1-based: slot 0 holds a placeholder that is never read as an entry, so the root is
//! slot 1, the parent of `s` is `s / 2` and its children are `2 * s` and `2 * s + 1`. Because
//! slot 0 is never occupied, a position of 0 doubles as the "absent" marker in the index.

use crate::{Id, Slot};
use core::cmp::Ordering;
use log::trace;

/// Selects which end of the priority range is the top of the queue.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum HeapOrder {
    /// The smallest priority is on top.
    Min,
    /// The largest priority is on top.
    Max,
}

impl Default for HeapOrder {
    fn default() -> Self {
        HeapOrder::Min
    }
}

impl HeapOrder {
    /// Returns true if priority `a` must sit strictly closer to the root than priority `b`.
    ///
    /// Priorities are compared with `f64::total_cmp`, so every value (NaN included) has a place
    /// in the order and the heap can never be left in an inconsistent state by a comparison.
    #[inline]
    pub fn prefers(self, a: f64, b: f64) -> bool {
        match self {
            HeapOrder::Min => a.total_cmp(&b) == Ordering::Less,
            HeapOrder::Max => a.total_cmp(&b) == Ordering::Greater,
        }
    }
}

/// An (identifier, priority) pair. Entries are owned by the slot store.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Entry {
    pub id: Id,
    pub priority: f64,
}

// slot number stored in the position index for identifiers that have no entry
const ABSENT: u32 = 0;

const PLACEHOLDER: Entry = Entry {
    id: !0u32,
    priority: f64::NAN,
};

#[inline]
pub(crate) fn parent(slot: Slot) -> Slot {
    slot / 2
}

#[inline]
pub(crate) fn left(slot: Slot) -> Slot {
    slot * 2
}

#[inline]
pub(crate) fn right(slot: Slot) -> Slot {
    slot * 2 + 1
}

#[derive(Clone)]
pub(crate) struct SlotStore {
    /// `slots[0]` is `PLACEHOLDER`; occupied slots are `1..=len()`.
    slots: Vec<Entry>,

    /// `position[id]` is the slot holding `id`, or `ABSENT`.
    /// Length is the capacity.
    position: Vec<u32>,
}

impl SlotStore {
    pub fn new(capacity: u32) -> Self {
        let mut slots = Vec::with_capacity(capacity as usize + 1);
        slots.push(PLACEHOLDER);
        Self {
            slots,
            position: vec![ABSENT; capacity as usize],
        }
    }

    pub fn capacity(&self) -> u32 {
        self.position.len() as u32
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots.len() - 1
    }

    /// Returns the slot that holds `id`. Identifiers outside the domain are simply absent.
    #[inline]
    pub fn slot_of(&self, id: Id) -> Option<Slot> {
        match self.position.get(id as usize) {
            Some(&slot) if slot != ABSENT => Some(slot as Slot),
            _ => None,
        }
    }

    #[inline]
    pub fn entry(&self, slot: Slot) -> &Entry {
        debug_assert!(slot >= 1 && slot <= self.len());
        &self.slots[slot]
    }

    #[inline]
    pub fn priority(&self, slot: Slot) -> f64 {
        self.entry(slot).priority
    }

    pub fn set_priority(&mut self, slot: Slot, priority: f64) {
        debug_assert!(slot >= 1 && slot <= self.len());
        self.slots[slot].priority = priority;
    }

    /// Appends `entry` at slot `len() + 1` and indexes it. The caller has already checked that
    /// the identifier is in range and absent.
    pub fn push(&mut self, entry: Entry) -> Slot {
        debug_assert_eq!(self.position[entry.id as usize], ABSENT);
        let slot = self.slots.len();
        self.slots.push(entry);
        self.position[entry.id as usize] = slot as u32;
        slot
    }

    /// Exchanges the entries in slots `a` and `b`, and re-synchronizes the index for both.
    pub fn swap(&mut self, a: Slot, b: Slot) {
        self.slots.swap(a, b);
        let id_a = self.slots[a].id;
        let id_b = self.slots[b].id;
        self.position[id_a as usize] = a as u32;
        self.position[id_b as usize] = b as u32;
        trace!("swap: slot {} <- id {}, slot {} <- id {}", a, id_a, b, id_b);
    }

    /// Removes the entry in `slot`. If it was not the last slot, the last entry moves into
    /// `slot`; the caller must then restore heap order at `slot`.
    pub fn remove(&mut self, slot: Slot) -> Entry {
        debug_assert!(slot >= 1 && slot <= self.len());
        let removed = self.slots.swap_remove(slot);
        self.position[removed.id as usize] = ABSENT;
        if slot < self.slots.len() {
            let moved = self.slots[slot].id;
            debug_assert_eq!(self.position[moved as usize] as usize, self.slots.len());
            self.position[moved as usize] = slot as u32;
            trace!("remove: id {} moved from last slot into slot {}", moved, slot);
        }
        removed
    }

    /// Removes all entries. Only the index entries that were occupied are touched.
    pub fn clear(&mut self) {
        for entry in self.slots.drain(1..) {
            self.position[entry.id as usize] = ABSENT;
        }
    }

    /// Changes the size of the identifier domain. Every present identifier must be below
    /// `capacity`; slot contents do not move, so heap order is unaffected.
    pub fn set_capacity(&mut self, capacity: u32) {
        debug_assert!(self.entries().iter().all(|e| e.id < capacity));
        self.position.resize(capacity as usize, ABSENT);
        self.position.shrink_to_fit();
        let want = capacity as usize + 1;
        if want > self.slots.capacity() {
            self.slots.reserve_exact(want - self.slots.len());
        }
    }

    /// The occupied slots, in slot order.
    pub fn entries(&self) -> &[Entry] {
        &self.slots[1..]
    }

    /// Panics if the heap-order, bijection or density invariants do not hold.
    pub fn check(&self, order: HeapOrder) {
        let len = self.len();
        for slot in 2..=len {
            assert!(
                !order.prefers(self.priority(slot), self.priority(parent(slot))),
                "heap order violated between slot {} and its parent",
                slot
            );
        }
        for slot in 1..=len {
            let id = self.slots[slot].id;
            assert!(id < self.capacity(), "slot {} holds out-of-range id {}", slot, id);
            assert_eq!(
                self.position[id as usize] as usize, slot,
                "index for id {} does not point at slot {}",
                id, slot
            );
        }
        let mut present = 0;
        for (id, &slot) in self.position.iter().enumerate() {
            if slot != ABSENT {
                present += 1;
                assert!(slot as usize <= len, "id {} indexed past the last slot", id);
                assert_eq!(self.slots[slot as usize].id as usize, id);
            }
        }
        assert_eq!(present, len, "index and slot store disagree on the element count");
    }
}
