//! Bounded in-memory event store.
//!
//! Holds the most recent [`CAPACITY`] events in insertion order. The mutex
//! keeps every operation atomic under concurrent requests.

use std::collections::VecDeque;

use parking_lot::Mutex;
use rand::Rng;

use crate::generator::generate_event;
use crate::models::SecurityEvent;

/// Maximum number of retained events; beyond this the oldest is evicted.
pub const CAPACITY: usize = 1000;

/// Number of events the lazy seed fills in for the stats endpoint.
pub const SEED_COUNT: usize = 100;

pub struct EventStore {
    inner: Mutex<Inner>,
}

struct Inner {
    events: VecDeque<SecurityEvent>,
    next_id: u64,
}

impl Inner {
    fn push(&mut self, event: SecurityEvent) {
        self.events.push_back(event);
        if self.events.len() > CAPACITY {
            self.events.pop_front();
        }
    }

    fn record(&mut self, rng: &mut impl Rng) -> SecurityEvent {
        let event = generate_event(self.next_id, rng);
        self.next_id += 1;
        self.push(event.clone());
        event
    }
}

impl EventStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                events: VecDeque::new(),
                next_id: 1,
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.lock().events.len()
    }

    /// Append an already-built event, evicting the oldest when over capacity.
    pub fn append(&self, event: SecurityEvent) {
        self.inner.lock().push(event);
    }

    /// Generate one event with the next sequence id and append it.
    pub fn record(&self, rng: &mut impl Rng) -> SecurityEvent {
        self.inner.lock().record(rng)
    }

    /// Populate the store with [`SEED_COUNT`] events when it holds fewer than
    /// that. The lock is held across check-and-fill so concurrent callers
    /// cannot double-seed.
    pub fn seed_if_empty(&self, rng: &mut impl Rng) {
        let mut inner = self.inner.lock();
        if inner.events.len() >= SEED_COUNT {
            return;
        }
        for _ in 0..SEED_COUNT {
            inner.record(rng);
        }
    }

    /// Last `n` events (or fewer), in insertion order.
    pub fn recent(&self, n: usize) -> Vec<SecurityEvent> {
        let inner = self.inner.lock();
        let skip = inner.events.len().saturating_sub(n);
        inner.events.iter().skip(skip).cloned().collect()
    }

    /// Full contents in insertion order.
    pub fn snapshot(&self) -> Vec<SecurityEvent> {
        self.inner.lock().events.iter().cloned().collect()
    }
}

impl Default for EventStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn recent_returns_at_most_store_size() {
        let store = EventStore::new();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..10 {
            store.record(&mut rng);
        }

        assert_eq!(store.recent(3).len(), 3);
        assert_eq!(store.recent(10).len(), 10);
        assert_eq!(store.recent(500).len(), 10);
        assert!(store.recent(0).is_empty());
    }

    #[test]
    fn recent_preserves_insertion_order() {
        let store = EventStore::new();
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..5 {
            store.record(&mut rng);
        }

        let ids: Vec<u64> = store.recent(3).iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![3, 4, 5]);
    }

    #[test]
    fn capacity_is_bounded_and_oldest_evicted() {
        let store = EventStore::new();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..(CAPACITY + 1) {
            store.record(&mut rng);
        }

        assert_eq!(store.len(), CAPACITY);
        let ids: Vec<u64> = store.snapshot().iter().map(|e| e.id).collect();
        assert!(!ids.contains(&1));
        assert_eq!(ids.first(), Some(&2));
        assert_eq!(ids.last(), Some(&(CAPACITY as u64 + 1)));
    }

    #[test]
    fn ids_keep_increasing_after_eviction() {
        let store = EventStore::new();
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..(CAPACITY + 5) {
            store.record(&mut rng);
        }

        let next = store.record(&mut rng);
        assert_eq!(next.id, CAPACITY as u64 + 6);
    }

    #[test]
    fn seed_fills_exactly_one_hundred_once() {
        let store = EventStore::new();
        let mut rng = StdRng::seed_from_u64(5);

        store.seed_if_empty(&mut rng);
        assert_eq!(store.len(), SEED_COUNT);

        store.seed_if_empty(&mut rng);
        assert_eq!(store.len(), SEED_COUNT);
    }

    #[test]
    fn seed_appends_hundred_when_below_threshold() {
        let store = EventStore::new();
        let mut rng = StdRng::seed_from_u64(6);
        for _ in 0..40 {
            store.record(&mut rng);
        }

        store.seed_if_empty(&mut rng);
        assert_eq!(store.len(), 140);
    }

    #[test]
    fn append_enforces_the_same_bound() {
        let store = EventStore::new();
        let mut rng = StdRng::seed_from_u64(7);
        for id in 1..=(CAPACITY as u64 + 3) {
            store.append(generate_event(id, &mut rng));
        }

        assert_eq!(store.len(), CAPACITY);
        let first = store.snapshot().first().map(|e| e.id);
        assert_eq!(first, Some(4));
    }
}
