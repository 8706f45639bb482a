//! Labyrinth: find long closed walks around a city street grid.
//!
//! This is the facade crate that re-exports the public API of the Labyrinth
//! sub-crates. A walk starts and ends at one intersection, rewards every
//! distinct block side it covers, and is penalized for repeats, street
//! crossings and U-turns.
//!
//! # Quick start
//!
//! ```rust
//! use labyrinth::prelude::*;
//!
//! // A single block: eight block sides counting both sides of each street.
//! let grid = GridTopology::new(["1st", "2nd"], ["Pine", "Pike"]).unwrap();
//! let index = SegmentIndex::new(&grid, &ExclusionSet::new());
//! let start = grid.corner("1st", "Pine").unwrap().at(Quadrant::NorthEast);
//! let bounds = LengthBounds::around(grid.block_sides(), 0).unwrap();
//!
//! let engine = SearchEngine::new(&grid, &index, SearchConfig::new(start, bounds)).unwrap();
//! let mut sink = MemorySink::new();
//! let report = engine.run(&mut sink).unwrap();
//!
//! let best = sink.best().unwrap();
//! assert_eq!(Some(best.score), report.best);
//! assert!(best.score.value >= 0);
//! // Loops close on the side of the intersection they started from.
//! assert_eq!(best.path.last().map(|s| s.end), Some(start));
//! assert_eq!(best.instructions.last().map(String::as_str), Some("Done."));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `labyrinth-core` | Compass, corners, segments, errors |
//! | [`grid`] | `labyrinth-grid` | Street topology, exclusions, segment index |
//! | [`route`] | `labyrinth-route` | Scoring and turn-by-turn directions |
//! | [`search`] | `labyrinth-search` | Generational search engine and result sinks |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core vocabulary (`labyrinth-core`).
///
/// Quadrants, directions and turns, [`types::Corner`] and
/// [`types::Segment`], and the configuration and topology errors.
pub use labyrinth_core as types;

/// Street grids (`labyrinth-grid`).
///
/// [`grid::GridTopology`] names the streets, [`grid::ExclusionSet`] blocks
/// sides off, and [`grid::SegmentIndex`] precomputes every corner's moves.
pub use labyrinth_grid as grid;

/// Scoring and directions (`labyrinth-route`).
pub use labyrinth_route as route;

/// Loop search (`labyrinth-search`).
///
/// [`search::SearchEngine`] runs the search; results go to any
/// [`search::ResultSink`].
pub use labyrinth_search as search;

/// Common imports.
///
/// ```rust
/// use labyrinth::prelude::*;
/// ```
pub mod prelude {
    // Core
    pub use labyrinth_core::{
        CardinalCorner, ConfigError, Corner, Direction, Quadrant, Segment, TopologyError, Turn,
    };

    // Grid
    pub use labyrinth_grid::{ExclusionSet, GridTopology, NeighbourOrder, SegmentIndex};

    // Route
    pub use labyrinth_route::{render, score, Instructions, Score};

    // Search
    pub use labyrinth_search::{
        LengthBounds, LoopClosure, LoopResult, MemorySink, ResultSink, SearchConfig, SearchEngine,
        SearchError, SearchReport, SinkError,
    };
}
