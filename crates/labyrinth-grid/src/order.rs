//! Presentation order of a corner's segments.
//!
//! The search explores segments in whatever order the index hands them
//! out. [`NeighbourOrder::Shuffled`] reshuffles on every request with a
//! seeded ChaCha8 RNG, so two runs with the same seed explore identically
//! while different seeds surface different (equally scored) loops.

use labyrinth_core::Segment;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// How [`SegmentIndex::ordered_from`](crate::SegmentIndex::ordered_from)
/// arranges the segments it returns.
#[derive(Debug, Clone, Default)]
pub enum NeighbourOrder {
    /// Fixed generation order: north, east, south, west.
    #[default]
    Generation,
    /// A fresh permutation on every call.
    Shuffled(ChaCha8Rng),
}

impl NeighbourOrder {
    /// Shuffled order from a deterministic seed.
    pub fn seeded(seed: u64) -> Self {
        Self::Shuffled(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Shuffled if a seed is given, generation order otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or(Self::Generation, Self::seeded)
    }

    /// `true` if this order permutes segments.
    pub fn is_shuffled(&self) -> bool {
        matches!(self, Self::Shuffled(_))
    }

    /// Arrange `segments` in place.
    pub fn arrange(&mut self, segments: &mut [Segment]) {
        if let Self::Shuffled(rng) = self {
            segments.shuffle(rng);
        }
    }
}
