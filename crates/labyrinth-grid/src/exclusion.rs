//! Blocked block sides.

use crate::topology::GridTopology;
use indexmap::IndexSet;
use labyrinth_core::{CardinalCorner, ConfigError, Direction, DirectionlessSegment, Segment};

/// Block sides that may never be walked.
///
/// Entries are undirected: excluding the north side of a block from A to
/// B also excludes walking it from B to A.
#[derive(Debug, Clone, Default)]
pub struct ExclusionSet {
    blocked: IndexSet<DirectionlessSegment>,
}

impl ExclusionSet {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a validated set from `(end, end)` pairs.
    ///
    /// Every pair must describe one side of a block in `topology`: two
    /// adjacent corners, quadrants on the same side of the street between
    /// them. The number of distinct entries must equal `expected`; a
    /// mismatch means the literal list was mistyped or truncated, and the
    /// set is rejected rather than silently under-excluding.
    pub fn build<I>(
        topology: &GridTopology,
        pairs: I,
        expected: usize,
    ) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (CardinalCorner, CardinalCorner)>,
    {
        let mut set = Self::new();
        for (a, b) in pairs {
            check_block(topology, a, b)?;
            set.insert(DirectionlessSegment::new(a, b));
        }
        if set.len() != expected {
            return Err(ConfigError::ExclusionCountMismatch {
                expected,
                counted: set.len(),
            });
        }
        Ok(set)
    }

    /// Add an entry without validation. Returns `false` if already present.
    pub fn insert(&mut self, segment: DirectionlessSegment) -> bool {
        self.blocked.insert(segment)
    }

    /// `true` if the block side is excluded.
    pub fn contains(&self, segment: &DirectionlessSegment) -> bool {
        self.blocked.contains(segment)
    }

    /// `true` if the segment walks an excluded block side.
    pub fn blocks(&self, segment: &Segment) -> bool {
        self.contains(&segment.directionless())
    }

    /// Number of distinct exclusions.
    pub fn len(&self) -> usize {
        self.blocked.len()
    }

    /// `true` if nothing is excluded.
    pub fn is_empty(&self) -> bool {
        self.blocked.is_empty()
    }

    /// Exclusions in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &DirectionlessSegment> {
        self.blocked.iter()
    }
}

impl FromIterator<DirectionlessSegment> for ExclusionSet {
    fn from_iter<T: IntoIterator<Item = DirectionlessSegment>>(iter: T) -> Self {
        Self {
            blocked: iter.into_iter().collect(),
        }
    }
}

fn check_block(
    topology: &GridTopology,
    a: CardinalCorner,
    b: CardinalCorner,
) -> Result<(), ConfigError> {
    let invalid = |why: &str| ConfigError::InvalidExclusion {
        reason: format!("{a} to {b}: {why}"),
    };
    if !topology.contains(a.corner) || !topology.contains(b.corner) {
        return Err(invalid("corner outside the grid"));
    }
    let heading = Direction::from_quadrants(a.quadrant, b.quadrant)
        .ok_or_else(|| invalid("quadrants are not on the same side of a street"))?;
    if topology.corner_neighbour(a.corner, heading) != Some(b.corner) {
        return Err(invalid("corners are not one block apart"));
    }
    Ok(())
}
