//! Generational loop search.

use crate::config::SearchConfig;
use crate::context::SearchContext;
use crate::error::SearchError;
use crate::metrics::SearchMetrics;
use crate::sink::ResultSink;
use labyrinth_core::Segment;
use labyrinth_grid::{GridTopology, NeighbourOrder, SegmentIndex};
use labyrinth_route::{score, Score};

/// A partial or complete walk.
pub(crate) type Path = Vec<Segment>;

/// Outcome of a finished search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchReport {
    /// Best accepted score, `None` if no loop was found.
    pub best: Option<Score>,
    /// Results handed to the sink, ties included.
    pub accepted: usize,
    /// Counters for the run.
    pub metrics: SearchMetrics,
}

/// Paths grown from one slice of a generation.
#[derive(Debug, Default)]
pub(crate) struct Shard {
    pub(crate) next: Vec<Path>,
    pub(crate) expanded: u64,
    pub(crate) candidates: u64,
}

/// Searches a street grid for high-scoring closed walks.
///
/// Every walk starts with a segment leaving the configured starting
/// intersection. Each generation extends every queued walk by one segment
/// in all directions except straight back to the corner it just left.
/// Walks inside the length window that end back at the start are scored.
///
/// # Examples
///
/// ```
/// use labyrinth_core::{Corner, Quadrant};
/// use labyrinth_grid::{ExclusionSet, GridTopology, SegmentIndex};
/// use labyrinth_search::{LengthBounds, MemorySink, SearchConfig, SearchEngine};
///
/// let grid = GridTopology::new(["A", "B"], ["P", "Q"]).unwrap();
/// let index = SegmentIndex::new(&grid, &ExclusionSet::new());
/// let config = SearchConfig::new(
///     Corner::new(0, 0).at(Quadrant::NorthEast),
///     LengthBounds::new(4, 4).unwrap(),
/// );
/// let engine = SearchEngine::new(&grid, &index, config).unwrap();
/// let mut sink = MemorySink::new();
/// let report = engine.run(&mut sink).unwrap();
/// assert_eq!(report.best.unwrap().unique, 4);
/// ```
#[derive(Debug)]
pub struct SearchEngine<'a> {
    pub(crate) topology: &'a GridTopology,
    pub(crate) index: &'a SegmentIndex,
    pub(crate) config: SearchConfig,
}

impl<'a> SearchEngine<'a> {
    /// Validate `config` against `topology` and build an engine.
    pub fn new(
        topology: &'a GridTopology,
        index: &'a SegmentIndex,
        config: SearchConfig,
    ) -> Result<Self, SearchError> {
        config.validate(topology)?;
        Ok(Self {
            topology,
            index,
            config,
        })
    }

    /// The configuration in use.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Run to completion on the calling thread.
    ///
    /// Stops at the first scoring, rendering or sink error.
    pub fn run<S: ResultSink + ?Sized>(&self, sink: &mut S) -> Result<SearchReport, SearchError> {
        let mut ctx = SearchContext::new(self.config.min_score);
        let mut queue = self.first_generation(&mut ctx.metrics)?;

        while let Some(generation) = queue.first().map(Vec::len) {
            self.enter_generation(generation, queue.len(), &mut ctx.metrics);
            let range = score_range(&queue)?;
            let mut order = self.order_for(generation, 0);
            let shard = self.grow(&queue, &mut order, |path, score| {
                ctx.offer(self.topology, path, score, &mut *sink).map(|_| ())
            })?;
            ctx.metrics.absorb(shard.expanded, shard.candidates);
            tracing::info!(
                generation,
                queued = queue.len(),
                grown = shard.next.len(),
                best = ?range.map(|(best, _)| best),
                worst = ?range.map(|(_, worst)| worst),
                high_score = ?ctx.high_score(),
                "generation complete"
            );
            queue = self.prune(shard.next, generation + 1, &mut ctx.metrics)?;
        }

        Ok(ctx.into_report())
    }

    /// One single-segment walk per segment leaving the start intersection.
    pub(crate) fn first_generation(
        &self,
        metrics: &mut SearchMetrics,
    ) -> Result<Vec<Path>, SearchError> {
        let mut order = self.order_for(0, 0);
        let paths = self
            .index
            .ordered_from(self.config.start.corner, &mut order)
            .into_iter()
            .map(|segment| vec![segment])
            .collect();
        self.prune(paths, 1, metrics)
    }

    pub(crate) fn enter_generation(
        &self,
        generation: usize,
        queued: usize,
        metrics: &mut SearchMetrics,
    ) {
        metrics.generations = generation;
        metrics.peak_queue = metrics.peak_queue.max(queued);
    }

    /// Segment order for one worker in one generation.
    pub(crate) fn order_for(&self, generation: usize, worker: usize) -> NeighbourOrder {
        NeighbourOrder::from_seed(
            self.config
                .seed
                .map(|seed| seed ^ generation as u64 ^ ((worker as u64) << 32)),
        )
    }

    /// Offer closed loops in `paths` to `on_loop` and extend the rest.
    pub(crate) fn grow<F>(
        &self,
        paths: &[Path],
        order: &mut NeighbourOrder,
        mut on_loop: F,
    ) -> Result<Shard, SearchError>
    where
        F: FnMut(&[Segment], Score) -> Result<(), SearchError>,
    {
        let bounds = self.config.bounds;
        let mut shard = Shard::default();

        for path in paths {
            let Some(last) = path.last() else {
                continue;
            };
            let len = path.len();

            if len >= bounds.min && self.config.closure.closes(self.config.start, last.end) {
                shard.candidates += 1;
                on_loop(path, score(path)?)?;
            }

            if len < bounds.max {
                let mut grew = false;
                for next in self.index.ordered_from(last.end.corner, order) {
                    if next.end.corner == last.start.corner {
                        continue;
                    }
                    let mut extended = Vec::with_capacity(len + 1);
                    extended.extend_from_slice(path);
                    extended.push(next);
                    shard.next.push(extended);
                    grew = true;
                }
                if grew {
                    shard.expanded += 1;
                }
            }
        }

        Ok(shard)
    }

    /// Cut a generation down to the beam width, best scores first.
    ///
    /// Equal scores keep their generation order.
    pub(crate) fn prune(
        &self,
        paths: Vec<Path>,
        generation: usize,
        metrics: &mut SearchMetrics,
    ) -> Result<Vec<Path>, SearchError> {
        let Some(width) = self.config.beam_width else {
            return Ok(paths);
        };
        if paths.len() <= width.get() {
            return Ok(paths);
        }

        let mut scored = paths
            .into_iter()
            .map(|path| score(&path).map(|s| (s.value, path)))
            .collect::<Result<Vec<_>, _>>()?;
        scored.sort_by(|a, b| b.0.cmp(&a.0));

        let dropped = scored.len() - width.get();
        scored.truncate(width.get());
        metrics.pruned += dropped as u64;

        let best = scored.first().map(|(value, _)| *value);
        let worst = scored.last().map(|(value, _)| *value);
        tracing::debug!(
            generation,
            kept = scored.len(),
            dropped,
            best = ?best,
            worst = ?worst,
            "pruned generation"
        );

        Ok(scored.into_iter().map(|(_, path)| path).collect())
    }
}

/// Best and worst score among queued walks, `None` for an empty queue.
pub(crate) fn score_range(queue: &[Path]) -> Result<Option<(i64, i64)>, SearchError> {
    let mut range = None;
    for path in queue {
        let value = score(path)?.value;
        range = Some(match range {
            None => (value, value),
            Some((best, worst)) => (value.max(best), value.min(worst)),
        });
    }
    Ok(range)
}
