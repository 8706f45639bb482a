//! Per-run search counters.

/// Counters collected over one search run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchMetrics {
    /// Generations processed (the longest path length reached).
    pub generations: usize,
    /// Paths extended by at least one segment.
    pub expanded: u64,
    /// Closed loops scored.
    pub candidates: u64,
    /// Paths discarded by beam pruning.
    pub pruned: u64,
    /// Largest work collection seen at a generation boundary.
    pub peak_queue: usize,
}

impl SearchMetrics {
    /// Fold in counters gathered by a worker shard.
    pub fn absorb(&mut self, expanded: u64, candidates: u64) {
        self.expanded += expanded;
        self.candidates += candidates;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = SearchMetrics::default();
        assert_eq!(m.generations, 0);
        assert_eq!(m.expanded, 0);
        assert_eq!(m.candidates, 0);
        assert_eq!(m.pruned, 0);
        assert_eq!(m.peak_queue, 0);
    }

    #[test]
    fn absorb_accumulates() {
        let mut m = SearchMetrics::default();
        m.absorb(3, 1);
        m.absorb(4, 2);
        assert_eq!(m.expanded, 7);
        assert_eq!(m.candidates, 3);
    }
}
