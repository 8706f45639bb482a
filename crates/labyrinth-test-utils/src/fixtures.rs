//! Standard grids.

use labyrinth_core::{CardinalCorner, Quadrant};
use labyrinth_grid::{ExclusionSet, GridTopology, SegmentIndex};

/// Two streets each way: a single block.
pub fn one_block() -> GridTopology {
    GridTopology::new(["A", "B"], ["P", "Q"]).expect("one-block grid")
}

/// Capitol Hill: 15th to 18th, Denny to Olive.
pub fn capitol_hill() -> GridTopology {
    GridTopology::new(["15th", "16th", "17th", "18th"], ["Denny", "Howell", "Olive"])
        .expect("Capitol Hill grid")
}

/// Southeast corner of 17th and Howell.
pub fn capitol_hill_start(grid: &GridTopology) -> CardinalCorner {
    grid.corner("17th", "Howell")
        .expect("17th and Howell")
        .at(Quadrant::SouthEast)
}

/// A `vertical` by `horizontal` grid with streets named `V0..` and `H0..`.
pub fn grid(vertical: usize, horizontal: usize) -> GridTopology {
    GridTopology::new(
        (0..vertical).map(|i| format!("V{i}")),
        (0..horizontal).map(|i| format!("H{i}")),
    )
    .expect("generated grid")
}

/// Index with no exclusions.
pub fn open_index(grid: &GridTopology) -> SegmentIndex {
    SegmentIndex::new(grid, &ExclusionSet::new())
}
