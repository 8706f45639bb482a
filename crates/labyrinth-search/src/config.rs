//! Search configuration and validation.

use labyrinth_core::{CardinalCorner, ConfigError};
use labyrinth_grid::GridTopology;
use std::num::NonZeroUsize;

/// Inclusive window of loop lengths, in segments.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LengthBounds {
    /// Shortest path considered a loop.
    pub min: usize,
    /// Longest path grown.
    pub max: usize,
}

impl LengthBounds {
    /// Explicit bounds. `min` must be at least 1 and at most `max`.
    pub fn new(min: usize, max: usize) -> Result<Self, ConfigError> {
        if min == 0 || min > max {
            return Err(ConfigError::InvalidLengthBounds { min, max });
        }
        Ok(Self { min, max })
    }

    /// `total ± tolerance`, with the minimum floored at 1.
    ///
    /// `total` is normally [`GridTopology::block_sides`]: a loop of that
    /// length could walk every block side exactly once.
    pub fn around(total: usize, tolerance: usize) -> Result<Self, ConfigError> {
        Self::new(total.saturating_sub(tolerance).max(1), total + tolerance)
    }

    /// `true` if a path of `len` segments may be a loop.
    pub fn admits(&self, len: usize) -> bool {
        len >= self.min && len <= self.max
    }
}

/// When a walk counts as back at the start.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoopClosure {
    /// The last segment ends on the starting side of the intersection.
    #[default]
    Quadrant,
    /// The last segment ends at the starting intersection, on any side.
    Corner,
}

impl LoopClosure {
    /// `true` if a walk ending at `end` closes a loop started at `start`.
    pub fn closes(self, start: CardinalCorner, end: CardinalCorner) -> bool {
        match self {
            Self::Corner => start.corner == end.corner,
            Self::Quadrant => start == end,
        }
    }
}

/// Everything the engine needs besides the grid.
#[derive(Clone, Debug)]
pub struct SearchConfig {
    /// Where every loop starts and ends.
    pub start: CardinalCorner,
    /// Accepted loop lengths.
    pub bounds: LengthBounds,
    /// Walks kept per generation. `None` = exhaustive search.
    pub beam_width: Option<NonZeroUsize>,
    /// Loop closure rule.
    pub closure: LoopClosure,
    /// Seed for shuffling segment order. `None` = fixed generation order.
    pub seed: Option<u64>,
    /// Lowest score ever handed to a sink.
    pub min_score: i64,
}

impl SearchConfig {
    /// Exhaustive, unshuffled search from `start` within `bounds`.
    ///
    /// Loops must end on the starting side of the intersection and score
    /// at least 0.
    pub fn new(start: CardinalCorner, bounds: LengthBounds) -> Self {
        Self {
            start,
            bounds,
            beam_width: None,
            closure: LoopClosure::default(),
            seed: None,
            min_score: 0,
        }
    }

    /// Keep at most `width` walks per generation.
    pub fn beam_width(mut self, width: NonZeroUsize) -> Self {
        self.beam_width = Some(width);
        self
    }

    /// Set the loop closure rule.
    pub fn closure(mut self, closure: LoopClosure) -> Self {
        self.closure = closure;
        self
    }

    /// Shuffle segment order with a deterministic seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Only hand loops scoring at least `score` to the sink.
    pub fn min_score(mut self, score: i64) -> Self {
        self.min_score = score;
        self
    }

    /// Check the configuration against the grid it will search.
    pub fn validate(&self, topology: &GridTopology) -> Result<(), ConfigError> {
        if !topology.contains(self.start.corner) {
            return Err(ConfigError::StartOutsideGrid {
                corner: self.start.corner,
            });
        }
        LengthBounds::new(self.bounds.min, self.bounds.max)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use labyrinth_core::{Corner, Quadrant};

    #[test]
    fn around_floors_minimum() {
        assert_eq!(
            LengthBounds::around(34, 5).unwrap(),
            LengthBounds { min: 29, max: 39 }
        );
        assert_eq!(
            LengthBounds::around(4, 10).unwrap(),
            LengthBounds { min: 1, max: 14 }
        );
    }

    #[test]
    fn new_rejects_inverted_or_zero() {
        assert!(LengthBounds::new(0, 4).is_err());
        assert_eq!(
            LengthBounds::new(5, 4),
            Err(ConfigError::InvalidLengthBounds { min: 5, max: 4 })
        );
        assert!(LengthBounds::new(4, 4).unwrap().admits(4));
    }

    #[test]
    fn closure_rules() {
        let start = Corner::new(0, 0).at(Quadrant::NorthEast);
        let across = Corner::new(0, 0).at(Quadrant::SouthEast);
        assert!(LoopClosure::Corner.closes(start, across));
        assert!(!LoopClosure::Quadrant.closes(start, across));
        assert!(LoopClosure::Quadrant.closes(start, start));
    }

    #[test]
    fn defaults_close_on_starting_side_from_zero() {
        let config = SearchConfig::new(
            Corner::new(0, 0).at(Quadrant::NorthEast),
            LengthBounds::new(4, 4).unwrap(),
        );
        assert_eq!(config.closure, LoopClosure::Quadrant);
        assert_eq!(config.min_score, 0);
        assert_eq!(config.min_score(-20).min_score, -20);
    }

    #[test]
    fn validate_rejects_start_outside_grid() {
        let grid = GridTopology::new(["A", "B"], ["P", "Q"]).unwrap();
        let bounds = LengthBounds::new(4, 8).unwrap();
        let inside = SearchConfig::new(Corner::new(1, 1).at(Quadrant::NorthWest), bounds);
        assert!(inside.validate(&grid).is_ok());
        let outside = SearchConfig::new(Corner::new(2, 0).at(Quadrant::NorthWest), bounds);
        assert!(matches!(
            outside.validate(&grid),
            Err(ConfigError::StartOutsideGrid { .. })
        ));
    }

    #[test]
    fn validate_rejects_hand_built_bounds() {
        let grid = GridTopology::new(["A", "B"], ["P", "Q"]).unwrap();
        let config = SearchConfig::new(
            Corner::new(0, 0).at(Quadrant::NorthWest),
            LengthBounds { min: 9, max: 2 },
        );
        assert!(config.validate(&grid).is_err());
    }
}
