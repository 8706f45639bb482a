//! Brute-force reference solver.
//!
//! Walks every path depth-first with the same growth rules as the engine
//! (start anywhere on the starting intersection, never step straight back
//! to the corner just left) and keeps the best closed loop. Exponential;
//! only for small grids and short bounds.

use labyrinth_core::{CardinalCorner, Segment};
use labyrinth_grid::SegmentIndex;
use labyrinth_route::{score, Score};
use labyrinth_search::{LengthBounds, LoopClosure};

/// Every closed loop's score, and the best of them.
#[derive(Debug, Default)]
pub struct Exhaustive {
    pub best: Option<Score>,
    pub loops: u64,
}

impl Exhaustive {
    /// The best score, if it reaches `min_score`.
    pub fn best_reaching(&self, min_score: i64) -> Option<i64> {
        self.best.map(|s| s.value).filter(|&v| v >= min_score)
    }
}

pub fn solve(
    index: &SegmentIndex,
    start: CardinalCorner,
    bounds: LengthBounds,
    closure: LoopClosure,
) -> Exhaustive {
    let mut out = Exhaustive::default();
    let mut path = Vec::with_capacity(bounds.max);
    for first in index.segments_from(start.corner) {
        path.push(*first);
        walk(index, start, bounds, closure, &mut path, &mut out);
        path.pop();
    }
    out
}

fn walk(
    index: &SegmentIndex,
    start: CardinalCorner,
    bounds: LengthBounds,
    closure: LoopClosure,
    path: &mut Vec<Segment>,
    out: &mut Exhaustive,
) {
    let last = *path.last().expect("non-empty path");
    if path.len() >= bounds.min && closure.closes(start, last.end) {
        let s = score(path).expect("valid path");
        out.loops += 1;
        if out.best.is_none_or(|b| s.value > b.value) {
            out.best = Some(s);
        }
    }
    if path.len() >= bounds.max {
        return;
    }
    for next in index.segments_from(last.end.corner) {
        if next.end.corner == last.start.corner {
            continue;
        }
        path.push(*next);
        walk(index, start, bounds, closure, path, out);
        path.pop();
    }
}
