//! Benchmark profiles for the Labyrinth loop search.
//!
//! - [`capitol_hill_profile`]: the 4x3 Capitol Hill grid with a beam
//! - [`square_profile`]: an `n`x`n` grid starting in the middle
//! - [`perimeter_loop`]: a deterministic closed walk for scoring benches

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::num::NonZeroUsize;

use labyrinth_core::{Corner, Direction, Quadrant, Segment};
use labyrinth_grid::{ExclusionSet, GridTopology, SegmentIndex};
use labyrinth_search::{LengthBounds, SearchConfig};

/// A grid, its index and a search configuration over it.
pub struct Profile {
    pub topology: GridTopology,
    pub index: SegmentIndex,
    pub config: SearchConfig,
}

/// Capitol Hill from the southeast corner of 17th and Howell, tolerance 5.
pub fn capitol_hill_profile(beam: usize, seed: u64) -> Profile {
    let topology = GridTopology::new(
        ["15th", "16th", "17th", "18th"],
        ["Denny", "Howell", "Olive"],
    )
    .unwrap();
    let start = topology
        .corner("17th", "Howell")
        .unwrap()
        .at(Quadrant::SouthEast);
    profile(topology, start.corner, 5, beam, seed)
}

/// An `n` by `n` grid starting at its middle intersection.
pub fn square_profile(n: usize, tolerance: usize, beam: usize, seed: u64) -> Profile {
    let topology = GridTopology::new(
        (0..n).map(|i| format!("V{i}")),
        (0..n).map(|i| format!("H{i}")),
    )
    .unwrap();
    let mid = (n / 2) as u16;
    profile(topology, Corner::new(mid, mid), tolerance, beam, seed)
}

fn profile(
    topology: GridTopology,
    start: Corner,
    tolerance: usize,
    beam: usize,
    seed: u64,
) -> Profile {
    let index = SegmentIndex::new(&topology, &ExclusionSet::new());
    let bounds = LengthBounds::around(topology.block_sides(), tolerance).unwrap();
    let mut config = SearchConfig::new(start.at(Quadrant::SouthEast), bounds).seed(seed);
    if let Some(width) = NonZeroUsize::new(beam) {
        config = config.beam_width(width);
    }
    Profile {
        topology,
        index,
        config,
    }
}

/// Clockwise around the outside of `grid`, on the outer side of each street.
pub fn perimeter_loop(grid: &GridTopology) -> Vec<Segment> {
    let start = Corner::new(0, 0);
    let mut here = start;
    let mut path = Vec::new();
    for dir in [Direction::East, Direction::South, Direction::West, Direction::North] {
        let (leave, arrive) = dir.quadrant_pairs()[0];
        while let Some(next) = grid.corner_neighbour(here, dir) {
            path.push(Segment::new(here.at(leave), next.at(arrive)));
            here = next;
        }
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perimeter_closes_and_scores() {
        let p = capitol_hill_profile(0, 0);
        let path = perimeter_loop(&p.topology);
        assert_eq!(path.len(), 10);
        assert_eq!(path[0].start.corner, path[path.len() - 1].end.corner);
        let s = labyrinth_route::score(&path).unwrap();
        assert_eq!(s.unique, 10);
        assert_eq!(s.uturns, 0);
    }

    #[test]
    fn profiles_validate() {
        let p = square_profile(5, 2, 10, 1);
        assert!(p.config.validate(&p.topology).is_ok());
        assert_eq!(p.config.start.corner, Corner::new(2, 2));
        assert!(capitol_hill_profile(0, 0).config.beam_width.is_none());
    }
}
