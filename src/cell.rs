use crate::{Coord, Direction, LifeError, MooreDirection, MooreNeighbors, Neighborhood};
use std::cmp::Ordering;
use std::fmt;
use tracing::warn;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single materialized lattice point.
///
/// Each neighbor slot is `None` when nothing is materialized in that direction, or
/// `Some(alive)` holding the linked neighbor's last known state. The board keeps the
/// mirrored states current, so living neighbors can be counted from the cell alone.
///
/// Cells compare and order by `(x, y)` only.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cell {
    x: i64,
    y: i64,
    alive: bool,
    neighbors: MooreNeighbors<Option<bool>>,
}

impl Cell {
    /// Make an isolated cell with no neighbors.
    pub fn new(x: i64, y: i64, alive: bool) -> Self {
        Cell {
            x,
            y,
            alive,
            neighbors: MooreNeighbors::default(),
        }
    }

    #[inline]
    pub fn x(&self) -> i64 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> i64 {
        self.y
    }

    #[inline]
    pub fn coord(&self) -> Coord {
        (self.x, self.y)
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Change this cell's state. Neighbors are not told about it.
    #[inline]
    pub fn set_alive(&mut self, alive: bool) {
        self.alive = alive;
    }

    /// Number of linked neighbors that are alive.
    pub fn living_neighbor_count(&self) -> usize {
        self.neighbors
            .iter()
            .filter(|&slot| slot == Some(true))
            .count()
    }

    /// Number of linked neighbors, alive or dead.
    pub fn neighbor_count(&self) -> usize {
        self.neighbors.iter().flatten().count()
    }

    #[inline]
    pub fn has_neighbor(&self, dir: MooreDirection) -> bool {
        self.neighbors[dir].is_some()
    }

    pub fn has_neighbor_at(&self, x: i64, y: i64) -> bool {
        MooreDirection::between(self.coord(), (x, y)).map_or(false, |dir| self.has_neighbor(dir))
    }

    /// Coordinates of all linked neighbors.
    pub fn neighbors(&self) -> impl Iterator<Item = Coord> {
        let coord = self.coord();
        self.neighbors
            .dir_iter()
            .filter(|(_, slot)| slot.is_some())
            .filter_map(move |(dir, _)| dir.offset(coord))
    }

    /// Link `self` and `other` as neighbors of each other.
    ///
    /// Cells that are not Moore-adjacent are left untouched.
    pub fn add_neighbor(&mut self, other: &mut Cell) -> Result<(), LifeError> {
        let dir = match MooreDirection::between(self.coord(), other.coord()) {
            Some(dir) => dir,
            None => {
                warn!(
                    a = ?self.coord(),
                    b = ?other.coord(),
                    "refusing to link cells that are not neighbors"
                );
                return Err(LifeError::NotAdjacent {
                    a: self.coord(),
                    b: other.coord(),
                });
            }
        };
        self.attach(dir, other.alive);
        other.attach(dir.inv(), self.alive);
        Ok(())
    }

    /// Unlink `self` and `other` on both sides. Does nothing if they were not linked.
    pub fn remove_neighbor(&mut self, other: &mut Cell) {
        if let Some(dir) = MooreDirection::between(self.coord(), other.coord()) {
            self.detach(dir);
            other.detach(dir.inv());
        }
    }

    #[inline]
    pub(crate) fn slots(&self) -> MooreNeighbors<Option<bool>> {
        self.neighbors
    }

    #[inline]
    pub(crate) fn attach(&mut self, dir: MooreDirection, alive: bool) {
        self.neighbors[dir] = Some(alive);
    }

    /// Refresh the mirrored state of an already linked neighbor.
    #[inline]
    pub(crate) fn observe(&mut self, dir: MooreDirection, alive: bool) {
        if let Some(slot) = self.neighbors[dir].as_mut() {
            *slot = alive;
        }
    }

    #[inline]
    pub(crate) fn detach(&mut self, dir: MooreDirection) {
        self.neighbors[dir] = None;
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.coord() == other.coord()
    }
}

impl Eq for Cell {}

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cell {
    fn cmp(&self, other: &Self) -> Ordering {
        self.coord().cmp(&other.coord())
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}): {} | {}",
            self.x,
            self.y,
            if self.alive { "alive" } else { "dead" },
            self.living_neighbor_count()
        )
    }
}
