//! Error types for the Labyrinth loop search.
//!
//! Two families: [`ConfigError`] for problems in the configured grid,
//! start, bounds or exclusions (fatal at startup, before any search), and
//! [`TopologyError`] for invariant violations while walking the grid
//! (always a construction bug, never retried).

use crate::compass::{Axis, Direction};
use crate::corner::{CardinalCorner, Corner, StreetId};
use std::error::Error;
use std::fmt;

/// Errors detected while validating configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// An axis list has no streets.
    EmptyAxis {
        /// The empty axis.
        axis: Axis,
    },
    /// An axis list has more streets than a [`StreetIndex`](crate::StreetIndex) can address.
    TooManyStreets {
        /// The oversized axis.
        axis: Axis,
        /// Number of streets configured.
        count: usize,
    },
    /// A street name is empty or whitespace.
    BlankStreetName {
        /// Axis of the offending entry.
        axis: Axis,
        /// Position of the offending entry.
        position: usize,
    },
    /// The same street name appears twice on one axis.
    DuplicateStreet {
        /// Axis of the duplicate.
        axis: Axis,
        /// The repeated name.
        name: String,
    },
    /// A referenced street is not in its axis list.
    StreetNotFound {
        /// Axis that was searched.
        axis: Axis,
        /// The missing name.
        name: String,
    },
    /// The starting corner is not an intersection of the grid.
    StartOutsideGrid {
        /// The configured start.
        corner: Corner,
    },
    /// The number of distinct exclusions differs from the expected count.
    ExclusionCountMismatch {
        /// Count the configuration declares.
        expected: usize,
        /// Distinct exclusions actually listed.
        counted: usize,
    },
    /// An exclusion does not describe a block of the grid.
    InvalidExclusion {
        /// Description of the problem.
        reason: String,
    },
    /// Minimum path length is zero or exceeds the maximum.
    InvalidLengthBounds {
        /// Configured minimum.
        min: usize,
        /// Configured maximum.
        max: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyAxis { axis } => write!(f, "no {axis} streets configured"),
            Self::TooManyStreets { axis, count } => {
                write!(f, "{count} {axis} streets exceeds the limit of {}", u16::MAX)
            }
            Self::BlankStreetName { axis, position } => {
                write!(f, "{axis} street at position {position} has a blank name")
            }
            Self::DuplicateStreet { axis, name } => {
                write!(f, "{axis} street '{name}' is listed more than once")
            }
            Self::StreetNotFound { axis, name } => {
                write!(f, "street '{name}' is not in the {axis} street list")
            }
            Self::StartOutsideGrid { corner } => {
                write!(f, "starting corner {corner} is outside the grid")
            }
            Self::ExclusionCountMismatch { expected, counted } => write!(
                f,
                "expected {expected} exclusions but {counted} distinct exclusions are listed"
            ),
            Self::InvalidExclusion { reason } => write!(f, "invalid exclusion: {reason}"),
            Self::InvalidLengthBounds { min, max } => {
                write!(f, "invalid path length bounds: min {min}, max {max}")
            }
        }
    }
}

impl Error for ConfigError {}

/// Invariant violations while walking the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TopologyError {
    /// A neighbour was requested along the wrong axis, e.g. the east
    /// neighbour of a horizontal street.
    WrongAxis {
        /// The street queried.
        street: StreetId,
        /// The direction requested.
        direction: Direction,
    },
    /// A segment's quadrant pair has no heading, or its corners share no street.
    InvalidSegment {
        /// Segment start.
        start: CardinalCorner,
        /// Segment end.
        end: CardinalCorner,
    },
    /// A street index is outside its axis list.
    UnknownStreet {
        /// The street queried.
        street: StreetId,
    },
    /// A crossing was requested between sides of two different corners.
    CornerMismatch {
        /// Where the walker arrived.
        arrived: CardinalCorner,
        /// Where the walker departs.
        departs: CardinalCorner,
    },
}

impl fmt::Display for TopologyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongAxis { street, direction } => {
                write!(f, "{street} has no {direction} neighbour: wrong axis")
            }
            Self::InvalidSegment { start, end } => {
                write!(f, "invalid segment from {start} to {end}")
            }
            Self::UnknownStreet { street } => write!(f, "{street} is not in the grid"),
            Self::CornerMismatch { arrived, departs } => {
                write!(f, "cannot cross from {arrived} to {departs}: different corners")
            }
        }
    }
}

impl Error for TopologyError {}
