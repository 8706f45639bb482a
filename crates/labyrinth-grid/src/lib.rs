//! Street-grid model for Labyrinth.
//!
//! [`GridTopology`] holds the two ordered street lists and precomputed
//! neighbour tables. [`ExclusionSet`] lists blocked block sides, and
//! [`SegmentIndex`] derives, once, every directed segment leaving every
//! corner. [`NeighbourOrder`] controls the order in which a corner's
//! segments are handed to the search.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod exclusion;
pub mod index;
pub mod order;
pub mod topology;

#[cfg(test)]
pub(crate) mod compliance;

pub use exclusion::ExclusionSet;
pub use index::{SegmentIndex, SegmentSet};
pub use order::NeighbourOrder;
pub use topology::GridTopology;
