//! Grid and index invariant checks shared by the test modules.

use crate::exclusion::ExclusionSet;
use crate::index::SegmentIndex;
use crate::topology::GridTopology;
use labyrinth_core::Direction;

/// Assert that `b` east/south of `a` implies `a` west/north of `b`.
pub fn assert_adjacency_symmetric(topology: &GridTopology) {
    for corner in topology.corners() {
        for dir in Direction::ALL {
            if let Some(next) = topology.corner_neighbour(corner, dir) {
                assert_eq!(
                    topology.corner_neighbour(next, dir.reverse()),
                    Some(corner),
                    "adjacency asymmetric: {next} is {dir} of {corner} but not the reverse"
                );
            }
        }
    }
}

/// Assert the per-corner segment contract: two segments per existing
/// neighbour minus exclusions, every segment leaves the corner, ends one
/// block away in its heading, and never walks an excluded side.
pub fn assert_index_consistent(
    topology: &GridTopology,
    index: &SegmentIndex,
    exclusions: &ExclusionSet,
) {
    assert_adjacency_symmetric(topology);
    for corner in topology.corners() {
        let segments = index.segments_from(corner);
        assert!(segments.len() <= 8, "{corner} has {} segments", segments.len());

        let neighbours = Direction::ALL
            .iter()
            .filter(|&&d| topology.corner_neighbour(corner, d).is_some())
            .count();
        let blocked = Direction::ALL
            .iter()
            .filter_map(|&d| topology.corner_neighbour(corner, d).map(|n| (d, n)))
            .flat_map(|(d, n)| {
                d.quadrant_pairs()
                    .into_iter()
                    .map(move |(l, a)| labyrinth_core::Segment::new(corner.at(l), n.at(a)))
            })
            .filter(|s| exclusions.blocks(s))
            .count();
        assert_eq!(
            segments.len(),
            2 * neighbours - blocked,
            "{corner}: {neighbours} neighbours, {blocked} blocked"
        );

        for seg in segments {
            assert_eq!(seg.start.corner, corner, "{seg} does not leave {corner}");
            let heading = seg.heading().expect("generated segment has a heading");
            assert_eq!(
                topology.corner_neighbour(corner, heading),
                Some(seg.end.corner),
                "{seg} does not end one block {heading}"
            );
            assert!(!exclusions.blocks(seg), "{seg} is excluded");
        }
    }
}
