//! Multi-threaded generation expansion.
//!
//! Each generation is split into contiguous shards, one per worker. Workers
//! run on scoped threads against the shared read-only [`SegmentIndex`] and
//! stream every closed loop they find, already scored, to the calling
//! thread over a channel. The calling thread is the only owner of the
//! high score and the sink, and it prunes between generations.
//!
//! Candidates are offered in worker order once the generation's workers
//! have finished, so a fixed seed and worker count reproduce the same run.
//! With one worker the run matches [`SearchEngine::run`].
//!
//! [`SegmentIndex`]: labyrinth_grid::SegmentIndex

use crate::context::SearchContext;
use crate::engine::{score_range, Path, SearchEngine, SearchReport, Shard};
use crate::error::SearchError;
use crate::sink::ResultSink;
use crossbeam_channel::unbounded;
use labyrinth_route::Score;
use std::num::NonZeroUsize;
use std::thread;

/// A closed loop found by a worker.
struct Candidate {
    worker: usize,
    path: Path,
    score: Score,
}

impl SearchEngine<'_> {
    /// Run to completion, growing each generation on `workers` threads.
    ///
    /// Worker `w` shuffles with a seed of `seed ^ generation ^ (w << 32)`.
    /// A panicking worker is re-raised on the calling thread.
    pub fn run_parallel<S: ResultSink + ?Sized>(
        &self,
        workers: NonZeroUsize,
        sink: &mut S,
    ) -> Result<SearchReport, SearchError> {
        let mut ctx = SearchContext::new(self.config.min_score);
        let mut queue = self.first_generation(&mut ctx.metrics)?;

        while let Some(generation) = queue.first().map(Vec::len) {
            self.enter_generation(generation, queue.len(), &mut ctx.metrics);
            let range = score_range(&queue)?;
            let (candidates, shards) = self.fan_out(&queue, generation, workers);

            let mut next = Vec::new();
            for shard in shards {
                let shard = shard?;
                ctx.metrics.absorb(shard.expanded, shard.candidates);
                next.extend(shard.next);
            }
            for candidate in candidates {
                ctx.offer(self.topology, &candidate.path, candidate.score, &mut *sink)?;
            }

            tracing::info!(
                generation,
                queued = queue.len(),
                grown = next.len(),
                best = ?range.map(|(best, _)| best),
                worst = ?range.map(|(_, worst)| worst),
                workers = workers.get(),
                high_score = ?ctx.high_score(),
                "generation complete"
            );
            queue = self.prune(next, generation + 1, &mut ctx.metrics)?;
        }

        Ok(ctx.into_report())
    }

    fn fan_out(
        &self,
        queue: &[Path],
        generation: usize,
        workers: NonZeroUsize,
    ) -> (Vec<Candidate>, Vec<Result<Shard, SearchError>>) {
        let chunk = queue.len().div_ceil(workers.get()).max(1);
        let (tx, rx) = unbounded::<Candidate>();

        thread::scope(|scope| {
            let handles: Vec<_> = queue
                .chunks(chunk)
                .enumerate()
                .map(|(worker, paths)| {
                    let tx = tx.clone();
                    let mut order = self.order_for(generation, worker);
                    scope.spawn(move || {
                        self.grow(paths, &mut order, |path, score| {
                            let sent = tx.send(Candidate {
                                worker,
                                path: path.to_vec(),
                                score,
                            });
                            debug_assert!(
                                sent.is_ok(),
                                "receiver dropped before workers joined"
                            );
                            Ok(())
                        })
                    })
                })
                .collect();
            drop(tx);

            let mut candidates: Vec<Candidate> = rx.iter().collect();
            candidates.sort_by_key(|c| c.worker);

            let shards = handles
                .into_iter()
                .map(|handle| {
                    handle
                        .join()
                        .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
                })
                .collect();
            (candidates, shards)
        })
    }
}
