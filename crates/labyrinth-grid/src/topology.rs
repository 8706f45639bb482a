//! Ordered street lists with O(1) neighbour lookup.

use indexmap::IndexSet;
use labyrinth_core::{Axis, ConfigError, Corner, Direction, StreetId, StreetIndex, TopologyError};

/// One axis: street names in order plus the neighbour tables built from
/// that order.
#[derive(Debug, Clone)]
struct AxisTable {
    names: IndexSet<String>,
    /// West neighbour for vertical streets, north neighbour for horizontal.
    before: Vec<Option<StreetIndex>>,
    /// East neighbour for vertical streets, south neighbour for horizontal.
    after: Vec<Option<StreetIndex>>,
}

impl AxisTable {
    fn build(axis: Axis, names: Vec<String>) -> Result<Self, ConfigError> {
        if names.is_empty() {
            return Err(ConfigError::EmptyAxis { axis });
        }
        let count = names.len();
        if count > usize::from(u16::MAX) {
            return Err(ConfigError::TooManyStreets { axis, count });
        }
        let mut set = IndexSet::with_capacity(count);
        for (position, name) in names.into_iter().enumerate() {
            if name.trim().is_empty() {
                return Err(ConfigError::BlankStreetName { axis, position });
            }
            if set.contains(&name) {
                return Err(ConfigError::DuplicateStreet { axis, name });
            }
            set.insert(name);
        }
        // `count` fits in u16, checked above.
        let before = (0..count)
            .map(|i| i.checked_sub(1).map(|j| StreetIndex(j as u16)))
            .collect();
        let after = (0..count)
            .map(|i| (i + 1 < count).then(|| StreetIndex((i + 1) as u16)))
            .collect();
        Ok(Self {
            names: set,
            before,
            after,
        })
    }

    fn len(&self) -> usize {
        self.names.len()
    }

    fn before(&self, index: StreetIndex) -> Option<StreetIndex> {
        self.before.get(usize::from(index.0)).copied().flatten()
    }

    fn after(&self, index: StreetIndex) -> Option<StreetIndex> {
        self.after.get(usize::from(index.0)).copied().flatten()
    }

    fn contains(&self, index: StreetIndex) -> bool {
        usize::from(index.0) < self.len()
    }
}

/// A rectangular street grid.
///
/// Vertical streets are listed west to east and horizontal streets north
/// to south. Both lists are fixed at construction; neighbour tables are
/// precomputed from them so every lookup is an index operation.
///
/// # Examples
///
/// ```
/// use labyrinth_core::{Axis, Direction};
/// use labyrinth_grid::GridTopology;
///
/// let grid = GridTopology::new(["15th", "16th", "17th"], ["Denny", "Howell"]).unwrap();
/// let sixteenth = grid.street(Axis::Vertical, "16th").unwrap();
/// let east = grid.neighbour(sixteenth, Direction::East).unwrap().unwrap();
/// assert_eq!(grid.street_name(east), Some("17th"));
///
/// // Horizontal streets have no east neighbour.
/// let denny = grid.street(Axis::Horizontal, "Denny").unwrap();
/// assert!(grid.neighbour(denny, Direction::East).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct GridTopology {
    vertical: AxisTable,
    horizontal: AxisTable,
}

impl GridTopology {
    /// Build a grid from vertical streets (west to east) and horizontal
    /// streets (north to south).
    ///
    /// Fails if either list is empty, contains a blank name, or repeats a
    /// name.
    pub fn new<V, H>(vertical: V, horizontal: H) -> Result<Self, ConfigError>
    where
        V: IntoIterator,
        V::Item: Into<String>,
        H: IntoIterator,
        H::Item: Into<String>,
    {
        let vertical = AxisTable::build(
            Axis::Vertical,
            vertical.into_iter().map(Into::into).collect(),
        )?;
        let horizontal = AxisTable::build(
            Axis::Horizontal,
            horizontal.into_iter().map(Into::into).collect(),
        )?;
        Ok(Self {
            vertical,
            horizontal,
        })
    }

    fn table(&self, axis: Axis) -> &AxisTable {
        match axis {
            Axis::Vertical => &self.vertical,
            Axis::Horizontal => &self.horizontal,
        }
    }

    /// Number of vertical streets.
    pub fn vertical_count(&self) -> usize {
        self.vertical.len()
    }

    /// Number of horizontal streets.
    pub fn horizontal_count(&self) -> usize {
        self.horizontal.len()
    }

    /// Look up a street by name on the given axis.
    pub fn street(&self, axis: Axis, name: &str) -> Result<StreetId, ConfigError> {
        self.table(axis)
            .names
            .get_index_of(name)
            .map(|i| StreetId {
                axis,
                index: StreetIndex(i as u16),
            })
            .ok_or_else(|| ConfigError::StreetNotFound {
                axis,
                name: name.to_string(),
            })
    }

    /// Name of a street, or `None` if it is not in the grid.
    pub fn street_name(&self, street: StreetId) -> Option<&str> {
        self.table(street.axis)
            .names
            .get_index(usize::from(street.index.0))
            .map(String::as_str)
    }

    /// The corner of two named streets.
    pub fn corner(&self, vertical: &str, horizontal: &str) -> Result<Corner, ConfigError> {
        let v = self.street(Axis::Vertical, vertical)?;
        let h = self.street(Axis::Horizontal, horizontal)?;
        Ok(Corner {
            vertical: v.index,
            horizontal: h.index,
        })
    }

    /// The adjacent parallel street in `direction`.
    ///
    /// Vertical streets answer east and west, horizontal streets north and
    /// south; `Ok(None)` means the street is on the grid boundary. Asking
    /// along the wrong axis is a [`TopologyError::WrongAxis`].
    pub fn neighbour(
        &self,
        street: StreetId,
        direction: Direction,
    ) -> Result<Option<StreetId>, TopologyError> {
        // Streets are stacked perpendicular to the way they run.
        if direction.street_axis() == street.axis {
            return Err(TopologyError::WrongAxis { street, direction });
        }
        let table = self.table(street.axis);
        if !table.contains(street.index) {
            return Err(TopologyError::UnknownStreet { street });
        }
        let next = match direction {
            Direction::West | Direction::North => table.before(street.index),
            Direction::East | Direction::South => table.after(street.index),
        };
        Ok(next.map(|index| StreetId {
            axis: street.axis,
            index,
        }))
    }

    /// `true` if both of the corner's streets are in the grid.
    pub fn contains(&self, corner: Corner) -> bool {
        self.vertical.contains(corner.vertical) && self.horizontal.contains(corner.horizontal)
    }

    /// The corner one block away in `direction`, or `None` at the boundary.
    pub fn corner_neighbour(&self, corner: Corner, direction: Direction) -> Option<Corner> {
        if !self.contains(corner) {
            return None;
        }
        match direction {
            Direction::North => self.horizontal.before(corner.horizontal).map(|h| Corner {
                horizontal: h,
                ..corner
            }),
            Direction::South => self.horizontal.after(corner.horizontal).map(|h| Corner {
                horizontal: h,
                ..corner
            }),
            Direction::West => self.vertical.before(corner.vertical).map(|v| Corner {
                vertical: v,
                ..corner
            }),
            Direction::East => self.vertical.after(corner.vertical).map(|v| Corner {
                vertical: v,
                ..corner
            }),
        }
    }

    /// Number of corners.
    pub fn corner_count(&self) -> usize {
        self.vertical_count() * self.horizontal_count()
    }

    /// Row-major position of a corner (north row first, west to east).
    pub fn corner_rank(&self, corner: Corner) -> Option<usize> {
        self.contains(corner).then(|| {
            usize::from(corner.horizontal.0) * self.vertical_count()
                + usize::from(corner.vertical.0)
        })
    }

    /// All corners in row-major order.
    pub fn corners(&self) -> impl Iterator<Item = Corner> + '_ {
        let cols = self.vertical_count() as u16;
        let rows = self.horizontal_count() as u16;
        (0..rows).flat_map(move |h| (0..cols).map(move |v| Corner::new(v, h)))
    }

    /// Number of distinct block sides in the grid, ignoring exclusions.
    ///
    /// Every block between two adjacent corners has two walkable sides.
    pub fn block_sides(&self) -> usize {
        let v = self.vertical_count();
        let h = self.horizontal_count();
        v * 2 * (h - 1) + h * 2 * (v - 1)
    }
}
