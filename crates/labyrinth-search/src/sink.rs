//! Destinations for accepted loops.

use crate::error::SinkError;
use labyrinth_core::Segment;
use labyrinth_route::Score;

/// A loop that reached or tied the running high score.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoopResult {
    /// The loop's score breakdown.
    pub score: Score,
    /// Rendered directions.
    pub instructions: Vec<String>,
    /// The walked segments.
    pub path: Vec<Segment>,
}

/// Receives every accepted loop, in acceptance order.
///
/// Scores passed to a sink never decrease over a run.
pub trait ResultSink {
    /// Store one result.
    fn accept(&mut self, result: &LoopResult) -> Result<(), SinkError>;
}

impl<S: ResultSink + ?Sized> ResultSink for &mut S {
    fn accept(&mut self, result: &LoopResult) -> Result<(), SinkError> {
        (**self).accept(result)
    }
}

/// Keeps accepted results in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    results: Vec<LoopResult>,
}

impl MemorySink {
    /// An empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Results in acceptance order.
    pub fn results(&self) -> &[LoopResult] {
        &self.results
    }

    /// The last accepted result, which holds the best score.
    pub fn best(&self) -> Option<&LoopResult> {
        self.results.last()
    }

    /// Take ownership of the results.
    pub fn into_results(self) -> Vec<LoopResult> {
        self.results
    }
}

impl ResultSink for MemorySink {
    fn accept(&mut self, result: &LoopResult) -> Result<(), SinkError> {
        self.results.push(result.clone());
        Ok(())
    }
}
