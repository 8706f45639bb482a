//! Mutable state of one search run.

use crate::engine::SearchReport;
use crate::error::SearchError;
use crate::metrics::SearchMetrics;
use crate::sink::{LoopResult, ResultSink};
use labyrinth_core::Segment;
use labyrinth_grid::GridTopology;
use labyrinth_route::{render, Score};

/// Running high score, acceptance count and counters for one run.
///
/// Owned by whichever thread talks to the sink: the caller for
/// [`SearchEngine::run`](crate::SearchEngine::run), the aggregator for
/// [`SearchEngine::run_parallel`](crate::SearchEngine::run_parallel).
#[derive(Debug, Default)]
pub struct SearchContext {
    min_score: i64,
    best: Option<Score>,
    accepted: usize,
    /// Counters for the run so far.
    pub metrics: SearchMetrics,
}

impl SearchContext {
    /// Fresh context that accepts nothing scoring below `min_score`.
    pub fn new(min_score: i64) -> Self {
        Self {
            min_score,
            ..Self::default()
        }
    }

    /// The highest score accepted so far, if any.
    pub fn high_score(&self) -> Option<i64> {
        self.best.map(|s| s.value)
    }

    /// Number of results handed to the sink.
    pub fn accepted(&self) -> usize {
        self.accepted
    }

    /// Offer a closed loop.
    ///
    /// The loop is rendered and handed to `sink` only when `score` reaches
    /// both the minimum score and the high score. Ties are accepted.
    /// Returns whether it was accepted.
    pub fn offer<S: ResultSink + ?Sized>(
        &mut self,
        topology: &GridTopology,
        path: &[Segment],
        score: Score,
        sink: &mut S,
    ) -> Result<bool, SearchError> {
        let threshold = self
            .high_score()
            .map_or(self.min_score, |high| high.max(self.min_score));
        if score.value < threshold {
            return Ok(false);
        }
        let instructions = render(topology, path)?;
        let result = LoopResult {
            score,
            instructions: instructions.lines,
            path: path.to_vec(),
        };
        sink.accept(&result)?;
        self.best = Some(score);
        self.accepted += 1;
        tracing::info!(
            score = score.value,
            length = score.length,
            unique = score.unique,
            crossings = score.crossings,
            "accepted loop"
        );
        Ok(true)
    }

    /// Finish the run.
    pub fn into_report(self) -> SearchReport {
        SearchReport {
            best: self.best,
            accepted: self.accepted,
            metrics: self.metrics,
        }
    }
}
