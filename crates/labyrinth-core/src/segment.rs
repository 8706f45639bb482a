//! Directed block segments and their undirected identity.

use crate::compass::{Axis, Direction, Turn};
use crate::corner::{CardinalCorner, StreetId};
use crate::error::TopologyError;
use std::fmt;

/// One block walked from `start` to `end` without crossing a street.
///
/// Both ends lie on the same side of the street being followed, so the
/// quadrant pair alone determines the heading (see
/// [`Direction::from_quadrants`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Segment {
    /// Where the block walk begins.
    pub start: CardinalCorner,
    /// Where the block walk ends.
    pub end: CardinalCorner,
}

impl Segment {
    /// Segment from `start` to `end`.
    pub fn new(start: CardinalCorner, end: CardinalCorner) -> Self {
        Self { start, end }
    }

    /// The same block walked the other way.
    pub fn reversed(&self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }

    /// Identity of this block side ignoring direction of travel.
    pub fn directionless(&self) -> DirectionlessSegment {
        DirectionlessSegment::new(self.start, self.end)
    }

    fn invalid(&self) -> TopologyError {
        TopologyError::InvalidSegment {
            start: self.start,
            end: self.end,
        }
    }

    /// Compass heading of this segment.
    pub fn heading(&self) -> Result<Direction, TopologyError> {
        Direction::from_quadrants(self.start.quadrant, self.end.quadrant)
            .ok_or_else(|| self.invalid())
    }

    /// The street this segment follows.
    pub fn street(&self) -> Result<StreetId, TopologyError> {
        let (a, b) = (self.start.corner, self.end.corner);
        if a == b {
            return Err(self.invalid());
        }
        if a.horizontal == b.horizontal {
            Ok(a.street(Axis::Horizontal))
        } else if a.vertical == b.vertical {
            Ok(a.street(Axis::Vertical))
        } else {
            Err(self.invalid())
        }
    }

    /// The cross street at the end of this segment: the street at the
    /// ending corner that was not walked along.
    pub fn ending_street(&self) -> Result<StreetId, TopologyError> {
        let walked = self.street()?;
        let cross = match walked.axis {
            Axis::Vertical => Axis::Horizontal,
            Axis::Horizontal => Axis::Vertical,
        };
        Ok(self.end.corner.street(cross))
    }

    /// The turn made when continuing from this segment onto `next`.
    pub fn turn_to(&self, next: &Segment) -> Result<Turn, TopologyError> {
        Ok(Turn::between(self.heading()?, next.heading()?))
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.start, self.end)
    }
}

/// A block side identified by its two ends, regardless of direction.
///
/// Stored with the smaller end first so that a segment and its reverse
/// compare and hash equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DirectionlessSegment {
    low: CardinalCorner,
    high: CardinalCorner,
}

impl DirectionlessSegment {
    /// Identity of the block side between `a` and `b`, in either order.
    pub fn new(a: CardinalCorner, b: CardinalCorner) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    /// The two ends, smaller first.
    pub fn ends(&self) -> (CardinalCorner, CardinalCorner) {
        (self.low, self.high)
    }
}

impl fmt::Display for DirectionlessSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <-> {}", self.low, self.high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compass::Quadrant;
    use crate::corner::Corner;
    use proptest::prelude::*;

    fn arb_segment() -> impl Strategy<Value = Segment> {
        // Any of the 8 valid blocks leaving an interior corner (1, 1).
        (0usize..4, 0usize..2).prop_map(|(d, side)| {
            let dir = Direction::ALL[d];
            let (leave, arrive) = dir.quadrant_pairs()[side];
            let here = Corner::new(1, 1);
            let there = match dir {
                Direction::North => Corner::new(1, 0),
                Direction::East => Corner::new(2, 1),
                Direction::South => Corner::new(1, 2),
                Direction::West => Corner::new(0, 1),
            };
            Segment::new(here.at(leave), there.at(arrive))
        })
    }

    #[test]
    fn heading_of_northbound_block() {
        let s = Segment::new(
            Corner::new(0, 1).at(Quadrant::NorthEast),
            Corner::new(0, 0).at(Quadrant::SouthEast),
        );
        assert_eq!(s.heading(), Ok(Direction::North));
        assert_eq!(s.street(), Ok(StreetId::vertical(0)));
        assert_eq!(s.ending_street(), Ok(StreetId::horizontal(0)));
    }

    #[test]
    fn heading_of_invalid_quadrants_is_error() {
        let s = Segment::new(
            Corner::new(0, 1).at(Quadrant::NorthEast),
            Corner::new(0, 0).at(Quadrant::NorthEast),
        );
        assert!(matches!(
            s.heading(),
            Err(TopologyError::InvalidSegment { .. })
        ));
    }

    #[test]
    fn street_of_diagonal_corners_is_error() {
        let s = Segment::new(
            Corner::new(0, 0).at(Quadrant::SouthEast),
            Corner::new(1, 1).at(Quadrant::NorthWest),
        );
        assert!(s.street().is_err());
        assert!(s.ending_street().is_err());
    }

    #[test]
    fn turn_to_uses_both_headings() {
        let east = Segment::new(
            Corner::new(0, 0).at(Quadrant::SouthEast),
            Corner::new(1, 0).at(Quadrant::SouthWest),
        );
        let south = Segment::new(
            Corner::new(1, 0).at(Quadrant::SouthWest),
            Corner::new(1, 1).at(Quadrant::NorthWest),
        );
        assert_eq!(east.turn_to(&south), Ok(Turn::Right));
        assert_eq!(south.reversed().turn_to(&east.reversed()), Ok(Turn::Left));
    }

    proptest! {
        #[test]
        fn directionless_ignores_direction(s in arb_segment()) {
            prop_assert_eq!(s.directionless(), s.reversed().directionless());
        }

        #[test]
        fn reversed_heading_is_reverse(s in arb_segment()) {
            let forward = s.heading().unwrap();
            let backward = s.reversed().heading().unwrap();
            prop_assert_eq!(backward, forward.reverse());
        }

        #[test]
        fn reversed_segment_follows_same_street(s in arb_segment()) {
            prop_assert_eq!(s.street().unwrap(), s.reversed().street().unwrap());
        }

        #[test]
        fn heading_axis_matches_street_axis(s in arb_segment()) {
            prop_assert_eq!(s.heading().unwrap().street_axis(), s.street().unwrap().axis);
        }
    }
}
