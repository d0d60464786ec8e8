use std::collections::HashMap;

use market::types::{Observation, TokenEvent, TokenIdentity};

use crate::model::TokenRecord;

/// Cycle-end counters scanned from every record's event set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WatchSummary {
    pub tracked: usize,
    pub rugged: usize,
    pub pumped: usize,
}

impl std::fmt::Display for WatchSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "tracked={} rugged={} pumped={}",
            self.tracked, self.rugged, self.pumped
        )
    }
}

/// In-memory map of token records keyed by lowercase address.
///
/// The store is a plain owned value mutated only from the cycle path;
/// records are never deleted. Fine for a bounded watch-list, a known
/// scaling limit for unbounded discovery.
#[derive(Default)]
pub struct WatchlistStore {
    records: HashMap<String, TokenRecord>,
    window_size: usize,
}

impl WatchlistStore {
    pub fn new(window_size: usize) -> Self {
        Self {
            records: HashMap::new(),
            window_size,
        }
    }

    /// Look up or create the record for `identity` and append the
    /// observation to its window. Returns the updated record.
    pub fn record(&mut self, identity: &TokenIdentity, obs: Observation) -> &mut TokenRecord {
        let entry = self
            .records
            .entry(identity.address.clone())
            .or_insert_with(|| TokenRecord::new(identity.clone(), self.window_size));

        entry.observe(obs);
        entry
    }

    pub fn get(&self, address: &str) -> Option<&TokenRecord> {
        self.records.get(address)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TokenRecord> {
        self.records.values()
    }

    /// Count distinct records per event across the whole watch-list.
    pub fn summary(&self) -> WatchSummary {
        let mut summary = WatchSummary {
            tracked: self.records.len(),
            ..Default::default()
        };

        for record in self.records.values() {
            if record.has_event(TokenEvent::Rugged) {
                summary.rugged += 1;
            }
            if record.has_event(TokenEvent::Pumped) {
                summary.pumped += 1;
            }
        }

        summary
    }
}
