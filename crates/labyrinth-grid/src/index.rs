//! Precomputed directed segments leaving each corner.

use crate::exclusion::ExclusionSet;
use crate::order::NeighbourOrder;
use crate::topology::GridTopology;
use labyrinth_core::{Corner, Direction, Segment};
use smallvec::SmallVec;

/// Segments leaving one corner. Interior corners have eight.
pub type SegmentSet = SmallVec<[Segment; 8]>;

/// Every walkable segment leaving every corner of a grid.
///
/// Built once from a [`GridTopology`] and an [`ExclusionSet`]; a corner's
/// segment set never changes afterwards, so lookups are a slice borrow
/// with no hidden cache. For each direction that has a neighbouring
/// corner, two segments are generated, one per side of the street
/// walked (see [`Direction::quadrant_pairs`]). Directions are visited
/// north, east, south, west. Excluded block sides are dropped.
#[derive(Debug, Clone)]
pub struct SegmentIndex {
    cols: usize,
    rows: usize,
    by_corner: Vec<SegmentSet>,
    excluded: usize,
}

impl SegmentIndex {
    /// Precompute segment sets for every corner of `topology`.
    pub fn new(topology: &GridTopology, exclusions: &ExclusionSet) -> Self {
        let mut excluded = 0;
        let by_corner = topology
            .corners()
            .map(|corner| {
                let mut set = SegmentSet::new();
                for dir in Direction::ALL {
                    let Some(next) = topology.corner_neighbour(corner, dir) else {
                        continue;
                    };
                    for (leave, arrive) in dir.quadrant_pairs() {
                        let segment = Segment::new(corner.at(leave), next.at(arrive));
                        if exclusions.blocks(&segment) {
                            excluded += 1;
                        } else {
                            set.push(segment);
                        }
                    }
                }
                set
            })
            .collect();
        Self {
            cols: topology.vertical_count(),
            rows: topology.horizontal_count(),
            by_corner,
            excluded,
        }
    }

    fn rank(&self, corner: Corner) -> Option<usize> {
        let v = usize::from(corner.vertical.0);
        let h = usize::from(corner.horizontal.0);
        (v < self.cols && h < self.rows).then_some(h * self.cols + v)
    }

    /// Segments leaving `corner` in generation order. Empty for a corner
    /// outside the grid.
    pub fn segments_from(&self, corner: Corner) -> &[Segment] {
        self.rank(corner)
            .and_then(|r| self.by_corner.get(r))
            .map(|set| set.as_slice())
            .unwrap_or(&[])
    }

    /// Segments leaving `corner`, arranged by `order`.
    pub fn ordered_from(&self, corner: Corner, order: &mut NeighbourOrder) -> SegmentSet {
        let mut set = SegmentSet::from_slice(self.segments_from(corner));
        order.arrange(&mut set);
        set
    }

    /// Total directed segments in the index.
    pub fn segment_count(&self) -> usize {
        self.by_corner.iter().map(SmallVec::len).sum()
    }

    /// Directed segments dropped because their block side is excluded.
    pub fn excluded_count(&self) -> usize {
        self.excluded
    }
}
