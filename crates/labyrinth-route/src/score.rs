//! Loop scoring.
//!
//! `value = 10 * unique - 9 * reused - crossings - 27 * uturns`, where a
//! segment is reused when its block side already appeared earlier in the
//! path, crossings are the points reported by the directions, and a
//! U-turn is any corner where the heading reverses.

use crate::transition::transition;
use labyrinth_core::{DirectionlessSegment, Segment, TopologyError, Turn};
use std::collections::HashSet;

/// Points for each distinct block side walked.
pub const REWARD_UNIQUE: i64 = 10;
/// Penalty for each walk of an already-walked block side.
pub const PENALTY_REUSE: i64 = 9;
/// Penalty for each reversal of heading.
pub const PENALTY_UTURN: i64 = 27;

/// A path's score and the counts it was computed from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Score {
    /// The ranking value.
    pub value: i64,
    /// Number of segments.
    pub length: usize,
    /// Distinct block sides.
    pub unique: usize,
    /// Crossing points over all reported corners.
    pub crossings: u32,
    /// Corners where the heading reversed.
    pub uturns: u32,
}

impl Score {
    /// Segments that repeat an earlier block side.
    pub fn reused(&self) -> usize {
        self.length - self.unique
    }
}

/// Number of distinct block sides in `path`.
pub fn unique_segments(path: &[Segment]) -> usize {
    path.iter()
        .map(Segment::directionless)
        .collect::<HashSet<DirectionlessSegment>>()
        .len()
}

/// Score a path.
///
/// Pure: the result depends on `path` alone. Fails only if the path
/// contains an invalid segment or two consecutive segments do not meet.
pub fn score(path: &[Segment]) -> Result<Score, TopologyError> {
    let unique = unique_segments(path);
    let mut crossings = 0u32;
    let mut uturns = 0u32;
    for pair in path.windows(2) {
        let t = transition(&pair[0], &pair[1])?;
        crossings += t.points();
        if t.turn == Turn::UTurn {
            uturns += 1;
        }
    }
    if let [only] = path {
        only.heading()?;
    }
    let reused = path.len() - unique;
    let value = REWARD_UNIQUE * unique as i64
        - PENALTY_REUSE * reused as i64
        - i64::from(crossings)
        - PENALTY_UTURN * i64::from(uturns);
    Ok(Score {
        value,
        length: path.len(),
        unique,
        crossings,
        uturns,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use labyrinth_core::{Corner, Quadrant};
    use proptest::prelude::*;

    /// The smallest loop on a one-block grid, starting northeast of the
    /// northwest corner and walking clockwise around the block.
    fn block_loop() -> Vec<Segment> {
        vec![
            Segment::new(
                Corner::new(0, 0).at(Quadrant::NorthEast),
                Corner::new(1, 0).at(Quadrant::NorthWest),
            ),
            Segment::new(
                Corner::new(1, 0).at(Quadrant::SouthWest),
                Corner::new(1, 1).at(Quadrant::NorthWest),
            ),
            Segment::new(
                Corner::new(1, 1).at(Quadrant::NorthWest),
                Corner::new(0, 1).at(Quadrant::NorthEast),
            ),
            Segment::new(
                Corner::new(0, 1).at(Quadrant::NorthEast),
                Corner::new(0, 0).at(Quadrant::SouthEast),
            ),
        ]
    }

    fn eastbound(blocks: u16) -> Vec<Segment> {
        (0..blocks)
            .map(|v| {
                Segment::new(
                    Corner::new(v, 0).at(Quadrant::SouthEast),
                    Corner::new(v + 1, 0).at(Quadrant::SouthWest),
                )
            })
            .collect()
    }

    #[test]
    fn block_loop_scores_forty_minus_one_crossing() {
        let s = score(&block_loop()).unwrap();
        assert_eq!(s.unique, 4);
        assert_eq!(s.crossings, 1);
        assert_eq!(s.uturns, 0);
        assert_eq!(s.value, 39);
    }

    #[test]
    fn straight_run_has_no_penalty() {
        let s = score(&eastbound(5)).unwrap();
        assert_eq!(s.value, 50);
        assert_eq!(s.crossings, 0);
    }

    #[test]
    fn out_and_back_pays_reuse_and_uturn() {
        let mut path = eastbound(1);
        path.push(path[0].reversed());
        let s = score(&path).unwrap();
        assert_eq!(s.unique, 1);
        assert_eq!(s.reused(), 1);
        assert_eq!(s.uturns, 1);
        assert_eq!(s.value, 10 - 9 - 27);
    }

    #[test]
    fn single_invalid_segment_is_error() {
        let bad = Segment::new(
            Corner::new(0, 0).at(Quadrant::NorthEast),
            Corner::new(1, 0).at(Quadrant::NorthEast),
        );
        assert!(score(&[bad]).is_err());
    }

    #[test]
    fn empty_path_scores_zero() {
        assert_eq!(score(&[]).unwrap(), Score::default());
    }

    proptest! {
        #[test]
        fn score_is_idempotent(blocks in 1u16..20, rotate in 0usize..4) {
            let mut path = block_loop();
            path.rotate_left(rotate);
            let straight = eastbound(blocks);
            prop_assert_eq!(score(&straight), score(&straight));
            // A rotated loop may not chain; either way it is deterministic.
            prop_assert_eq!(score(&path), score(&path));
        }
    }
}
