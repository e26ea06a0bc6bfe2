//! Deal bookkeeping.

/// Running totals of deal activity.
///
/// Owned by whoever drives hand construction (normally the engine) and
/// passed down by `&mut`, so independent simulations never share counts.
/// The values are informational only and never steer the algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DealCounters {
    /// Genotypes created: the initial population plus every child.
    pub hands_created: u64,
    /// Cards drawn: 13 for each random deal, 1 for each mutation shuffle.
    pub draws: u64,
    /// Reserve reshuffles performed by mutation.
    pub shuffles: u64,
}

impl DealCounters {
    /// Fresh counters, all zero.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_deal(&mut self, cards: usize) {
        self.draws += cards as u64;
    }

    pub(crate) fn record_shuffle(&mut self) {
        self.draws += 1;
        self.shuffles += 1;
    }

    pub(crate) fn record_hands(&mut self, count: usize) {
        self.hands_created += count as u64;
    }
}
