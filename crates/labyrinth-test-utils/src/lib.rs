//! Test utilities for Labyrinth development.
//!
//! Standard grids live in [`fixtures`]; [`reference`] holds a brute-force
//! depth-first solver the generational engine is checked against.
//! [`FailingSink`] and [`CountingSink`] exercise the sink seam.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod reference;

use labyrinth_search::{LoopResult, ResultSink, SinkError};

/// Accepts `succeed` results, then fails every call.
pub struct FailingSink {
    succeed: usize,
    calls: usize,
}

impl FailingSink {
    pub fn new(succeed: usize) -> Self {
        Self { succeed, calls: 0 }
    }

    /// Calls made so far, failed ones included.
    pub fn calls(&self) -> usize {
        self.calls
    }
}

impl ResultSink for FailingSink {
    fn accept(&mut self, _result: &LoopResult) -> Result<(), SinkError> {
        self.calls += 1;
        if self.calls > self.succeed {
            return Err(SinkError::Write {
                reason: format!("refused result {}", self.calls),
            });
        }
        Ok(())
    }
}

/// Records only scores, for runs too large to keep every path.
#[derive(Default)]
pub struct CountingSink {
    pub scores: Vec<i64>,
}

impl CountingSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResultSink for CountingSink {
    fn accept(&mut self, result: &LoopResult) -> Result<(), SinkError> {
        self.scores.push(result.score.value);
        Ok(())
    }
}
