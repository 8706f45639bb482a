//! Compass vocabulary: street axes, travel directions, corner quadrants
//! and turns.

use std::fmt;

/// Orientation of a street.
///
/// Vertical streets run north–south and are listed west to east;
/// horizontal streets run east–west and are listed north to south.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    /// A north–south street.
    Vertical,
    /// An east–west street.
    Horizontal,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vertical => write!(f, "vertical"),
            Self::Horizontal => write!(f, "horizontal"),
        }
    }
}

/// A compass heading.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Towards the first horizontal street.
    North,
    /// Towards the last vertical street.
    East,
    /// Towards the last horizontal street.
    South,
    /// Towards the first vertical street.
    West,
}

impl Direction {
    /// All four directions in segment-generation order.
    pub const ALL: [Direction; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// The opposite heading.
    pub fn reverse(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }

    /// Axis of the street a walker follows when heading this way.
    ///
    /// Heading north or south follows a vertical street.
    pub fn street_axis(self) -> Axis {
        match self {
            Self::North | Self::South => Axis::Vertical,
            Self::East | Self::West => Axis::Horizontal,
        }
    }

    /// Heading of a block walked from quadrant `start` to quadrant `end`
    /// of the neighbouring corner.
    ///
    /// Only the eight same-side combinations are valid: leaving the
    /// northwest quadrant and arriving at the southwest quadrant of the
    /// next corner is heading north, and so on. Every other pair
    /// returns `None`.
    pub fn from_quadrants(start: Quadrant, end: Quadrant) -> Option<Self> {
        use Quadrant::{NorthEast, NorthWest, SouthEast, SouthWest};
        match (start, end) {
            (NorthWest, SouthWest) | (NorthEast, SouthEast) => Some(Self::North),
            (NorthEast, NorthWest) | (SouthEast, SouthWest) => Some(Self::East),
            (SouthEast, NorthEast) | (SouthWest, NorthWest) => Some(Self::South),
            (SouthWest, SouthEast) | (NorthWest, NorthEast) => Some(Self::West),
            _ => None,
        }
    }

    /// The two `(leave, arrive)` quadrant pairs for a block walked in
    /// this direction, in generation order.
    pub fn quadrant_pairs(self) -> [(Quadrant, Quadrant); 2] {
        use Quadrant::{NorthEast, NorthWest, SouthEast, SouthWest};
        match self {
            Self::North => [(NorthWest, SouthWest), (NorthEast, SouthEast)],
            Self::East => [(NorthEast, NorthWest), (SouthEast, SouthWest)],
            Self::South => [(SouthEast, NorthEast), (SouthWest, NorthWest)],
            Self::West => [(SouthWest, SouthEast), (NorthWest, NorthEast)],
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::North => write!(f, "north"),
            Self::East => write!(f, "east"),
            Self::South => write!(f, "south"),
            Self::West => write!(f, "west"),
        }
    }
}

/// Which side of an intersection a walker stands on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Quadrant {
    /// North of the horizontal street, west of the vertical street.
    NorthWest,
    /// North of the horizontal street, east of the vertical street.
    NorthEast,
    /// South of the horizontal street, east of the vertical street.
    SouthEast,
    /// South of the horizontal street, west of the vertical street.
    SouthWest,
}

impl Quadrant {
    /// All four quadrants, clockwise from northwest.
    pub const ALL: [Quadrant; 4] = [
        Self::NorthWest,
        Self::NorthEast,
        Self::SouthEast,
        Self::SouthWest,
    ];

    /// `true` for the two quadrants north of the horizontal street.
    pub fn is_north(self) -> bool {
        matches!(self, Self::NorthWest | Self::NorthEast)
    }

    /// `true` for the two quadrants east of the vertical street.
    pub fn is_east(self) -> bool {
        matches!(self, Self::NorthEast | Self::SouthEast)
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NorthWest => write!(f, "northwest"),
            Self::NorthEast => write!(f, "northeast"),
            Self::SouthEast => write!(f, "southeast"),
            Self::SouthWest => write!(f, "southwest"),
        }
    }
}

/// The turn made between two consecutive headings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Turn {
    /// Same heading.
    Straight,
    /// Quarter turn counter-clockwise.
    Left,
    /// Quarter turn clockwise.
    Right,
    /// Heading reversed.
    UTurn,
}

impl Turn {
    /// Classify the turn from heading `from` to heading `to`.
    pub fn between(from: Direction, to: Direction) -> Self {
        use Direction::{East, North, South, West};
        match (from, to) {
            (North, North) | (East, East) | (South, South) | (West, West) => Self::Straight,
            (North, South) | (South, North) | (East, West) | (West, East) => Self::UTurn,
            (North, East) | (East, South) | (South, West) | (West, North) => Self::Right,
            (North, West) | (West, South) | (South, East) | (East, North) => Self::Left,
        }
    }

    /// The turn made when walking the same corner in the opposite
    /// direction: left and right swap, straight and U-turn are unchanged.
    pub fn inverse(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            other => other,
        }
    }
}
