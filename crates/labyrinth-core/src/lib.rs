//! Core types for the Labyrinth loop search.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! vocabulary shared by every other crate in the workspace: compass
//! directions and quadrants, corners and segments of a street grid, and
//! the configuration and topology error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod compass;
pub mod corner;
pub mod error;
pub mod segment;

pub use compass::{Axis, Direction, Quadrant, Turn};
pub use corner::{CardinalCorner, Corner, Crossing, StreetId, StreetIndex};
pub use error::{ConfigError, TopologyError};
pub use segment::{DirectionlessSegment, Segment};
