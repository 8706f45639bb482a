//! What happens at the corner between two consecutive segments.

use labyrinth_core::{Crossing, Segment, TopologyError, Turn};

/// The walker's moves at one corner: arrive on `arrived`, cross to the
/// start of `departs`, leave on `departs`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    /// Streets crossed to reach the next segment's start.
    pub crossing: Crossing,
    /// Turn between the two headings.
    pub turn: Turn,
    /// Both segments share start and end quadrants: the walker carried
    /// straight on along the same side of the street and there is
    /// nothing to say.
    pub silent: bool,
}

impl Transition {
    /// Crossing penalty this corner contributes. Silent corners are free.
    pub fn points(&self) -> u32 {
        if self.silent {
            0
        } else {
            self.crossing.points()
        }
    }
}

/// Analyse the corner between `arrived` and `departs`.
///
/// Fails if either segment has no heading or if `departs` does not start
/// at the corner where `arrived` ends.
pub fn transition(arrived: &Segment, departs: &Segment) -> Result<Transition, TopologyError> {
    let turn = arrived.turn_to(departs)?;
    let crossing = arrived
        .end
        .crossing_to(&departs.start)
        .ok_or(TopologyError::CornerMismatch {
            arrived: arrived.end,
            departs: departs.start,
        })?;
    let silent = arrived.start.quadrant == departs.start.quadrant
        && arrived.end.quadrant == departs.end.quadrant;
    Ok(Transition {
        crossing,
        turn,
        silent,
    })
}
