use crate::{HeapOrder, Id, IndexedPriorityQueue};
use rand::rngs::SmallRng;
use rand::SeedableRng;

pub fn init_test() {
    drop(env_logger::try_init());
}

pub fn rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

/// Naive reference for the queue: one optional priority per identifier, and a linear scan to
/// find the top.
pub struct Model {
    pub order: HeapOrder,
    pub priorities: Vec<Option<f64>>,
}

impl Model {
    pub fn new(capacity: u32, order: HeapOrder) -> Self {
        Self {
            order,
            priorities: vec![None; capacity as usize],
        }
    }

    pub fn len(&self) -> usize {
        self.priorities.iter().filter(|p| p.is_some()).count()
    }

    /// The priority that should be on top of the queue.
    pub fn top_priority(&self) -> Option<f64> {
        let order = self.order;
        self.priorities
            .iter()
            .filter_map(|&p| p)
            .fold(None, |best: Option<f64>, p| match best {
                Some(b) if !order.prefers(p, b) => Some(b),
                _ => Some(p),
            })
    }

    /// Asserts that `queue` holds exactly the entries in this model, and that its invariants hold.
    pub fn assert_matches(&self, queue: &IndexedPriorityQueue) {
        queue.assert_invariants();
        assert_eq!(queue.len(), self.len());
        for (id, &expected) in self.priorities.iter().enumerate() {
            let actual = queue.get_priority(id as Id);
            assert_eq!(
                actual.map(f64::to_bits),
                expected.map(f64::to_bits),
                "priority of id {}",
                id
            );
        }
        assert_eq!(
            queue.peek_top().map(|(_, p)| p.to_bits()),
            self.top_priority().map(f64::to_bits)
        );
    }
}
