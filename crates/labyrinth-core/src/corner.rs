//! Street identifiers, corners, and quadrant-qualified corners.

use crate::compass::{Axis, Quadrant};
use std::fmt;

/// Position of a street within its axis list.
///
/// Vertical streets are numbered west to east, horizontal streets north
/// to south, both starting at zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StreetIndex(pub u16);

impl fmt::Display for StreetIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u16> for StreetIndex {
    fn from(v: u16) -> Self {
        Self(v)
    }
}

/// A street addressed by axis and position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StreetId {
    /// Which axis list the street belongs to.
    pub axis: Axis,
    /// Position in that list.
    pub index: StreetIndex,
}

impl StreetId {
    /// The vertical street at `index`.
    pub fn vertical(index: u16) -> Self {
        Self {
            axis: Axis::Vertical,
            index: StreetIndex(index),
        }
    }

    /// The horizontal street at `index`.
    pub fn horizontal(index: u16) -> Self {
        Self {
            axis: Axis::Horizontal,
            index: StreetIndex(index),
        }
    }
}

impl fmt::Display for StreetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} street #{}", self.axis, self.index)
    }
}

/// The intersection of one vertical and one horizontal street.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Corner {
    /// The north–south street.
    pub vertical: StreetIndex,
    /// The east–west street.
    pub horizontal: StreetIndex,
}

impl Corner {
    /// Corner of vertical street `vertical` and horizontal street `horizontal`.
    pub fn new(vertical: u16, horizontal: u16) -> Self {
        Self {
            vertical: StreetIndex(vertical),
            horizontal: StreetIndex(horizontal),
        }
    }

    /// This corner's street on the given axis.
    pub fn street(&self, axis: Axis) -> StreetId {
        match axis {
            Axis::Vertical => StreetId {
                axis,
                index: self.vertical,
            },
            Axis::Horizontal => StreetId {
                axis,
                index: self.horizontal,
            },
        }
    }

    /// The given side of this corner.
    pub fn at(self, quadrant: Quadrant) -> CardinalCorner {
        CardinalCorner {
            quadrant,
            corner: self,
        }
    }
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.vertical, self.horizontal)
    }
}

/// One side of a corner: where a walker actually stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardinalCorner {
    /// The intersection.
    pub corner: Corner,
    /// The side of the intersection.
    pub quadrant: Quadrant,
}

impl CardinalCorner {
    /// Which streets must be crossed to move from this side of the corner
    /// to `other`, or `None` if `other` is at a different corner.
    pub fn crossing_to(&self, other: &CardinalCorner) -> Option<Crossing> {
        if self.corner != other.corner {
            return None;
        }
        Some(Crossing::between(self.quadrant, other.quadrant))
    }
}

impl fmt::Display for CardinalCorner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.quadrant, self.corner)
    }
}

/// Street crossings needed to change quadrant at a single corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Crossing {
    /// Same quadrant.
    Neither,
    /// One street on the given axis.
    Street(Axis),
    /// Diagonally opposite quadrant.
    Both,
}

impl Crossing {
    /// Crossing needed to go from quadrant `from` to quadrant `to`.
    pub fn between(from: Quadrant, to: Quadrant) -> Self {
        if from == to {
            return Self::Neither;
        }
        match (from.is_north() == to.is_north(), from.is_east() == to.is_east()) {
            // Same side of the horizontal street: only the vertical street lies between.
            (true, false) => Self::Street(Axis::Vertical),
            (false, true) => Self::Street(Axis::Horizontal),
            _ => Self::Both,
        }
    }

    /// Penalty points: one per street crossed.
    pub fn points(self) -> u32 {
        match self {
            Self::Neither => 0,
            Self::Street(_) => 1,
            Self::Both => 2,
        }
    }
}
