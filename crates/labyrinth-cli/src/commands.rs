//! `run` and `check`.

use std::path::PathBuf;

use anyhow::Result;
use labyrinth_search::{LengthBounds, SearchEngine, SearchReport};

use crate::config::LabyrinthConfig;
use crate::sink::FileSink;

/// What a completed run produced.
#[derive(Debug)]
pub struct RunSummary {
    /// Engine report.
    pub report: SearchReport,
    /// Result files, in acceptance order.
    pub files: Vec<PathBuf>,
}

/// Grid statistics for a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckSummary {
    /// Intersections in the grid.
    pub corners: usize,
    /// Block sides in the grid.
    pub block_sides: usize,
    /// Walkable directed segments after exclusions.
    pub segments: usize,
    /// Distinct excluded block sides.
    pub exclusions: usize,
    /// Loop lengths searched.
    pub bounds: LengthBounds,
}

/// Search with `config`, writing results under `config.output.dir`.
pub fn run(config: &LabyrinthConfig) -> Result<RunSummary> {
    let plan = config.resolve()?;
    let index = plan.index();
    tracing::info!(
        start = %plan.search.start,
        min = plan.search.bounds.min,
        max = plan.search.bounds.max,
        beam = ?plan.search.beam_width,
        seed = ?plan.search.seed,
        workers = plan.workers.get(),
        segments = index.segment_count(),
        "starting search"
    );

    let engine = SearchEngine::new(&plan.topology, &index, plan.search.clone())?;
    let mut sink = FileSink::create(&config.output.dir)?;
    let report = if plan.workers.get() == 1 {
        engine.run(&mut sink)?
    } else {
        engine.run_parallel(plan.workers, &mut sink)?
    };

    tracing::info!(
        best = ?report.best.map(|s| s.value),
        accepted = report.accepted,
        generations = report.metrics.generations,
        candidates = report.metrics.candidates,
        pruned = report.metrics.pruned,
        "search finished"
    );
    Ok(RunSummary {
        report,
        files: sink.into_written(),
    })
}

/// Validate `config` without searching.
pub fn check(config: &LabyrinthConfig) -> Result<CheckSummary> {
    let plan = config.resolve()?;
    let index = plan.index();
    Ok(CheckSummary {
        corners: plan.topology.corner_count(),
        block_sides: plan.topology.block_sides(),
        segments: index.segment_count(),
        exclusions: plan.exclusions.len(),
        bounds: plan.search.bounds,
    })
}
