use std::collections::VecDeque;

use crate::types::Observation;

pub const DEFAULT_WINDOW_SIZE: usize = 5;

/// Count-bounded FIFO window of recent observations for one token.
///
/// Invariants:
/// - `len() <= capacity` at all times
/// - pushing at capacity evicts the oldest entry first
/// - relative order of the survivors is preserved
#[derive(Debug, Clone)]
pub struct ObservationWindow {
    values: VecDeque<Observation>,
    capacity: usize,
}

impl ObservationWindow {
    /// `capacity` below 2 is clamped: the signal layer needs two points.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(2);
        Self {
            values: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, obs: Observation) {
        if self.values.len() == self.capacity {
            self.values.pop_front();
        }
        self.values.push_back(obs);
    }

    /// Most recent observation.
    pub fn latest(&self) -> Option<&Observation> {
        self.values.back()
    }

    /// Second most recent observation.
    pub fn previous(&self) -> Option<&Observation> {
        let n = self.values.len();
        if n < 2 {
            return None;
        }
        self.values.get(n - 2)
    }

    pub fn oldest(&self) -> Option<&Observation> {
        self.values.front()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Observation> {
        self.values.iter()
    }
}

impl Default for ObservationWindow {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_SIZE)
    }
}
