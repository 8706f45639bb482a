//! TOML configuration for a search run.
//!
//! Every section and field is optional; anything missing falls back to the
//! Capitol Hill defaults (15th to 18th, Denny to Olive, starting on the
//! southeast corner of 17th and Howell).

use std::fs;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use labyrinth_core::{CardinalCorner, Quadrant};
use labyrinth_grid::{ExclusionSet, GridTopology, SegmentIndex};
use labyrinth_search::{LengthBounds, LoopClosure, SearchConfig};
use serde::Deserialize;

/// Whole configuration file.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct LabyrinthConfig {
    /// Street names.
    pub grid: GridSection,
    /// Where loops start and end.
    pub start: StartSection,
    /// Search tuning.
    pub search: SearchSection,
    /// Block sides that may not be walked.
    pub exclusions: ExclusionSection,
    /// Where results are written.
    pub output: OutputSection,
}

/// `[grid]`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct GridSection {
    /// North-south streets, west to east.
    pub vertical: Vec<String>,
    /// East-west streets, north to south.
    pub horizontal: Vec<String>,
}

impl Default for GridSection {
    fn default() -> Self {
        Self {
            vertical: ["15th", "16th", "17th", "18th"].map(String::from).to_vec(),
            horizontal: ["Denny", "Howell", "Olive"].map(String::from).to_vec(),
        }
    }
}

/// Quadrant as written in the file.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum QuadrantName {
    /// `"northwest"`
    NorthWest,
    /// `"northeast"`
    NorthEast,
    /// `"southeast"`
    SouthEast,
    /// `"southwest"`
    SouthWest,
}

impl From<QuadrantName> for Quadrant {
    fn from(name: QuadrantName) -> Self {
        match name {
            QuadrantName::NorthWest => Quadrant::NorthWest,
            QuadrantName::NorthEast => Quadrant::NorthEast,
            QuadrantName::SouthEast => Quadrant::SouthEast,
            QuadrantName::SouthWest => Quadrant::SouthWest,
        }
    }
}

/// `[start]`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct StartSection {
    /// North-south street of the starting intersection.
    pub vertical: String,
    /// East-west street of the starting intersection.
    pub horizontal: String,
    /// Which corner of the intersection to start on.
    pub quadrant: QuadrantName,
}

impl Default for StartSection {
    fn default() -> Self {
        Self {
            vertical: "17th".to_string(),
            horizontal: "Howell".to_string(),
            quadrant: QuadrantName::SouthEast,
        }
    }
}

/// Loop closure rule as written in the file.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ClosureName {
    /// Back on the starting side of the intersection.
    #[default]
    Quadrant,
    /// Back at the starting intersection, any side.
    Corner,
}

impl From<ClosureName> for LoopClosure {
    fn from(name: ClosureName) -> Self {
        match name {
            ClosureName::Corner => LoopClosure::Corner,
            ClosureName::Quadrant => LoopClosure::Quadrant,
        }
    }
}

/// `[search]`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct SearchSection {
    /// Loops may be this many segments shorter or longer than the number
    /// of block sides in the grid.
    pub tolerance: usize,
    /// Walks kept per generation; 0 searches exhaustively.
    pub beam_width: usize,
    /// Shuffle seed; omitted keeps generation order.
    pub seed: Option<u64>,
    /// Loop closure rule.
    pub closure: ClosureName,
    /// Loops scoring below this are never written.
    pub min_score: i64,
    /// Worker threads; 1 runs on the calling thread.
    pub workers: usize,
}

impl Default for SearchSection {
    fn default() -> Self {
        Self {
            tolerance: 5,
            beam_width: 2000,
            seed: None,
            closure: ClosureName::Quadrant,
            min_score: 0,
            workers: 1,
        }
    }
}

/// One end of an excluded block side.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct BlockEnd {
    /// Side of the intersection.
    pub quadrant: QuadrantName,
    /// North-south street.
    pub vertical: String,
    /// East-west street.
    pub horizontal: String,
}

/// `[exclusions]`
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ExclusionSection {
    /// How many distinct block sides `blocks` is meant to list.
    pub expected_count: usize,
    /// Block sides as pairs of ends.
    pub blocks: Vec<[BlockEnd; 2]>,
}

/// `[output]`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputSection {
    /// Directory for result files, created if missing.
    pub dir: PathBuf,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("output"),
        }
    }
}

/// Command-line values that replace file settings.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct Overrides {
    /// Walks kept per generation (0 = exhaustive).
    #[arg(long)]
    pub beam: Option<usize>,
    /// Shuffle seed.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Worker threads.
    #[arg(long)]
    pub workers: Option<usize>,
    /// Output directory.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Everything a run needs, resolved against the grid.
#[derive(Debug)]
pub struct Plan {
    /// The street grid.
    pub topology: GridTopology,
    /// Validated exclusions.
    pub exclusions: ExclusionSet,
    /// Engine configuration.
    pub search: SearchConfig,
    /// Worker threads.
    pub workers: NonZeroUsize,
}

impl Plan {
    /// Build the segment index for this plan.
    pub fn index(&self) -> SegmentIndex {
        SegmentIndex::new(&self.topology, &self.exclusions)
    }
}

impl LabyrinthConfig {
    /// Replace file settings with any given on the command line.
    pub fn apply(&mut self, overrides: &Overrides) {
        if let Some(beam) = overrides.beam {
            self.search.beam_width = beam;
        }
        if let Some(seed) = overrides.seed {
            self.search.seed = Some(seed);
        }
        if let Some(workers) = overrides.workers {
            self.search.workers = workers;
        }
        if let Some(dir) = &overrides.output {
            self.output.dir = dir.clone();
        }
    }

    /// Checks that need no grid.
    pub fn validate(&self) -> Result<()> {
        if self.search.workers == 0 {
            return Err(anyhow!("search.workers must be > 0"));
        }
        if self.output.dir.as_os_str().is_empty() {
            return Err(anyhow!("output.dir must not be empty"));
        }
        Ok(())
    }

    /// Resolve street names and build the search plan.
    pub fn resolve(&self) -> Result<Plan> {
        self.validate()?;
        let topology = GridTopology::new(&self.grid.vertical, &self.grid.horizontal)
            .context("build street grid")?;

        let start = end_at(
            &topology,
            &self.start.vertical,
            &self.start.horizontal,
            self.start.quadrant,
        )
        .context("resolve starting corner")?;

        let pairs = self
            .exclusions
            .blocks
            .iter()
            .map(|[a, b]| {
                Ok((
                    end_at(&topology, &a.vertical, &a.horizontal, a.quadrant)?,
                    end_at(&topology, &b.vertical, &b.horizontal, b.quadrant)?,
                ))
            })
            .collect::<Result<Vec<_>>>()
            .context("resolve exclusions")?;
        let exclusions = ExclusionSet::build(&topology, pairs, self.exclusions.expected_count)
            .context("validate exclusions")?;

        let bounds = LengthBounds::around(topology.block_sides(), self.search.tolerance)?;
        let mut search = SearchConfig::new(start, bounds)
            .closure(self.search.closure.into())
            .min_score(self.search.min_score);
        if let Some(width) = NonZeroUsize::new(self.search.beam_width) {
            search = search.beam_width(width);
        }
        if let Some(seed) = self.search.seed {
            search = search.seed(seed);
        }
        let workers = NonZeroUsize::new(self.search.workers)
            .ok_or_else(|| anyhow!("search.workers must be > 0"))?;

        Ok(Plan {
            topology,
            exclusions,
            search,
            workers,
        })
    }
}

fn end_at(
    topology: &GridTopology,
    vertical: &str,
    horizontal: &str,
    quadrant: QuadrantName,
) -> Result<CardinalCorner> {
    Ok(topology.corner(vertical, horizontal)?.at(quadrant.into()))
}

/// Load and validate a configuration file.
pub fn load_config(path: &Path) -> Result<LabyrinthConfig> {
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: LabyrinthConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}
