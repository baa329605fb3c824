pub mod schema;
mod slot;

pub use slot::{MemorySlot, Slot};

use anyhow::Result;

use crate::models::error::Error;
use crate::models::metrics::BodyMetrics;

/// Name of the slot key holding the serialized tuple.
pub const SLOT_KEY: &str = "body_metrics";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&BodyMetrics)>;

/// Owns the current [`BodyMetrics`] tuple, mirrors it into a durable
/// [`Slot`] and tells subscribers about every change.
///
/// Unreadable or inconsistent slot data is dropped in favour of defaults and
/// remembered in [`MetricsStore::recovered`]. Subscribers run synchronously
/// inside `set`/`clear`.
pub struct MetricsStore<S: Slot> {
    slot: S,
    current: BodyMetrics,
    recovered: bool,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_id: u64,
}

impl<S: Slot> MetricsStore<S> {
    pub fn open(slot: S) -> Result<Self> {
        let mut store = Self {
            slot,
            current: BodyMetrics::default(),
            recovered: false,
            subscribers: Vec::new(),
            next_id: 0,
        };
        store.load()?;
        Ok(store)
    }

    fn load(&mut self) -> Result<()> {
        self.recovered = false;
        self.current = match self.slot.read(SLOT_KEY)? {
            None => BodyMetrics::default(),
            Some(raw) => match schema::decode(&raw) {
                Ok(m) => m,
                Err(e) => {
                    log::warn!("discarding saved body metrics: {}", e);
                    self.recovered = true;
                    BodyMetrics::default()
                }
            },
        };
        Ok(())
    }

    /// Re-read the slot, dropping the in-memory value. Subscribers are kept
    /// but not notified.
    pub fn reload(&mut self) -> Result<()> {
        self.load()
    }

    pub fn get(&self) -> &BodyMetrics {
        &self.current
    }

    /// Whether the last load found unusable data and fell back to defaults.
    pub fn recovered(&self) -> bool {
        self.recovered
    }

    /// Replace the tuple. A tuple that would not load back is refused, and
    /// the slot is written before memory changes, so either failure leaves
    /// the store as it was.
    pub fn set(&mut self, metrics: BodyMetrics) -> Result<()> {
        metrics
            .validate()
            .map_err(|reason| Error::invalid("metrics", reason))?;
        let raw = schema::encode(&metrics)?;
        self.slot.write(SLOT_KEY, &raw)?;
        log::debug!("stored body metrics: {}", raw);
        self.current = metrics;
        self.notify();
        Ok(())
    }

    pub fn clear(&mut self) -> Result<()> {
        self.slot.remove(SLOT_KEY)?;
        log::debug!("cleared body metrics");
        self.current = BodyMetrics::default();
        self.recovered = false;
        self.notify();
        Ok(())
    }

    pub fn subscribe(&mut self, f: impl FnMut(&BodyMetrics) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(f)));
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    fn notify(&mut self) {
        for (_, f) in self.subscribers.iter_mut() {
            f(&self.current);
        }
    }
}
