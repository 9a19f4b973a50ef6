use crate::{Cell, Coord, Direction, LifeError, MooreDirection, Neighborhood};
use boolinator::Boolinator;
use std::collections::BTreeMap;
use tracing::{debug, info, trace, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The B3/S23 rule. Returns the next state only when it differs from `alive`.
#[inline]
pub fn transition(alive: bool, living_neighbors: usize) -> Option<bool> {
    let next = if alive {
        (2..=3).contains(&living_neighbors)
    } else {
        living_neighbors == 3
    };
    (next != alive).as_some(next)
}

/// What happened during one call to [`LifeMap::step`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StepSummary {
    /// The generation reached by the step.
    pub generation: u64,
    /// Living cells at the start of the step.
    pub alive: usize,
    pub born: usize,
    pub died: usize,
}

/// A sparse, unbounded Game of Life board.
///
/// Only live cells and the dead cells touching them are stored. Every other coordinate
/// is implicitly dead. Cells are linked to their materialized Moore neighbors and the
/// board keeps those links symmetric as cells come and go.
#[derive(Clone, Debug, Default)]
pub struct LifeMap {
    cells: BTreeMap<Coord, Cell>,
    generation: u64,
}

impl LifeMap {
    /// Make an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make a board where every listed coordinate is alive. Duplicates collapse.
    pub fn from_coordinates<I>(coords: I) -> Self
    where
        I: IntoIterator<Item = Coord>,
    {
        let mut map = Self::new();
        for (x, y) in coords {
            map.revive((x, y));
        }
        map
    }

    /// Make a board from coordinate pairs already parsed by an ingestion step.
    ///
    /// Records the ingester rejected are expected to have been dropped before they
    /// reach the board.
    pub fn from_ingested_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = Coord>,
    {
        let map = Self::from_coordinates(records);
        debug!(
            alive = map.living_count(),
            materialized = map.len(),
            "seeded board from ingested records"
        );
        map
    }

    /// Set the state of the cell at `(x, y)`.
    ///
    /// Setting a cell alive creates it if needed and materializes its neighbors.
    /// Setting a cell dead requires it to exist; it and any of its dead neighbors left
    /// without living neighbors are removed from the board.
    pub fn set_cell_state(&mut self, x: i64, y: i64, alive: bool) -> Result<(), LifeError> {
        if alive {
            self.revive((x, y));
            Ok(())
        } else {
            self.kill((x, y))
        }
    }

    /// Advance the board by one generation.
    pub fn step(&mut self) -> StepSummary {
        let mut alive = 0;
        let pending: Vec<(Coord, bool)> = self
            .cells
            .values()
            .filter_map(|cell| {
                if cell.is_alive() {
                    alive += 1;
                }
                transition(cell.is_alive(), cell.living_neighbor_count())
                    .map(|next| (cell.coord(), next))
            })
            .collect();

        info!(generation = self.generation, alive, "cells alive");

        let born = pending.iter().filter(|&&(_, next)| next).count();
        let died = pending.len() - born;
        for (coord, next) in pending {
            if next {
                self.revive(coord);
            } else if let Err(err) = self.kill(coord) {
                warn!(%err, "live cell vanished before it could die");
            }
        }

        self.generation += 1;
        StepSummary {
            generation: self.generation,
            alive,
            born,
            died,
        }
    }

    /// All materialized cells in `(x, y)` order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.values()
    }

    /// All living cells in `(x, y)` order.
    pub fn alive_cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.values().filter(|cell| cell.is_alive())
    }

    pub fn get(&self, x: i64, y: i64) -> Option<&Cell> {
        self.cells.get(&(x, y))
    }

    /// Living neighbors of `(x, y)`, which is zero for anything not materialized.
    pub fn living_neighbor_count(&self, x: i64, y: i64) -> usize {
        self.get(x, y).map_or(0, Cell::living_neighbor_count)
    }

    /// Number of materialized cells, alive or dead.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn living_count(&self) -> usize {
        self.alive_cells().count()
    }

    /// Number of completed steps.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Check every structural invariant of the board.
    ///
    /// A cell's links must match exactly the in-range adjacent coordinates present in
    /// the board, mirrored states must match the neighbors' real states, every dead
    /// cell must touch a living one and every living cell must be fully surrounded.
    pub fn validate(&self) -> Result<(), LifeError> {
        for (&coord, cell) in &self.cells {
            if cell.coord() != coord {
                return Err(LifeError::InvalidNeighbors {
                    coord,
                    message: format!("cell stored under the wrong key {:?}", cell.coord()),
                });
            }
            for (dir, slot) in cell.slots().dir_iter() {
                let target = dir.offset(coord);
                let neighbor = target.and_then(|target| self.cells.get(&target));
                match (slot, neighbor) {
                    (None, None) if cell.is_alive() && target.is_some() => {
                        return Err(LifeError::InvalidNeighbors {
                            coord,
                            message: format!("living cell is missing its {:?} neighbor", dir),
                        });
                    }
                    (None, None) => {}
                    (None, Some(_)) => {
                        return Err(LifeError::InvalidNeighbors {
                            coord,
                            message: format!("{:?} neighbor exists but is not linked", dir),
                        });
                    }
                    (Some(_), None) => {
                        return Err(LifeError::InvalidNeighbors {
                            coord,
                            message: format!("linked {:?} neighbor is not on the board", dir),
                        });
                    }
                    (Some(mirrored), Some(neighbor)) => {
                        if !neighbor.has_neighbor(dir.inv()) {
                            return Err(LifeError::InvalidNeighbors {
                                coord,
                                message: format!("{:?} neighbor does not link back", dir),
                            });
                        }
                        if mirrored != neighbor.is_alive() {
                            return Err(LifeError::InvalidNeighbors {
                                coord,
                                message: format!("stale state for {:?} neighbor", dir),
                            });
                        }
                    }
                }
            }
            if !cell.is_alive() && cell.living_neighbor_count() == 0 {
                return Err(LifeError::QuiescentCell { coord });
            }
        }
        Ok(())
    }

    /// Make the cell at `coord` alive, creating it and its neighborhood as needed.
    fn revive(&mut self, coord: Coord) {
        let cell = self
            .cells
            .entry(coord)
            .or_insert_with(|| Cell::new(coord.0, coord.1, true));
        cell.set_alive(true);
        self.publish(coord);
        self.discover(coord);
    }

    fn kill(&mut self, coord: Coord) -> Result<(), LifeError> {
        let cell = self
            .cells
            .get_mut(&coord)
            .ok_or(LifeError::NotMaterialized { coord })?;
        cell.set_alive(false);
        let neighbors: Vec<Coord> = cell.neighbors().collect();
        self.publish(coord);

        // Only this cell and its neighbors lost a living neighbor.
        for candidate in std::iter::once(coord).chain(neighbors) {
            let quiescent = self
                .cells
                .get(&candidate)
                .map_or(false, |cell| !cell.is_alive() && cell.living_neighbor_count() == 0);
            if quiescent {
                self.destroy(candidate);
            }
        }
        Ok(())
    }

    /// Tell every neighbor of `coord` about its current state.
    fn publish(&mut self, coord: Coord) {
        let (alive, slots) = match self.cells.get(&coord) {
            Some(cell) => (cell.is_alive(), cell.slots()),
            None => return,
        };
        for (dir, slot) in slots.dir_iter() {
            if slot.is_none() {
                continue;
            }
            if let Some(neighbor) = dir.offset(coord).and_then(|t| self.cells.get_mut(&t)) {
                neighbor.observe(dir.inv(), alive);
            }
        }
    }

    /// Link `origin` to every materialized coordinate around it. Living cells also
    /// create their missing neighbors as dead cells, which are then linked to whatever
    /// already surrounds them in turn.
    fn discover(&mut self, origin: Coord) {
        let mut frontier = vec![origin];
        while let Some(coord) = frontier.pop() {
            let (alive, slots) = match self.cells.get(&coord) {
                Some(cell) => (cell.is_alive(), cell.slots()),
                None => continue,
            };
            for (dir, slot) in slots.dir_iter() {
                if slot.is_some() {
                    continue;
                }
                let target = match dir.offset(coord) {
                    Some(target) => target,
                    None => continue,
                };
                if self.cells.contains_key(&target) {
                    self.link(coord, target, dir);
                } else if alive {
                    trace!(?target, "materializing dead neighbor");
                    self.cells
                        .insert(target, Cell::new(target.0, target.1, false));
                    self.link(coord, target, dir);
                    frontier.push(target);
                }
            }
        }
    }

    /// Link two present cells where `b` lies in direction `dir` from `a`.
    fn link(&mut self, a: Coord, b: Coord, dir: MooreDirection) {
        let a_alive = self.cells.get(&a).map(Cell::is_alive);
        let b_alive = self.cells.get(&b).map(Cell::is_alive);
        if let (Some(a_alive), Some(b_alive)) = (a_alive, b_alive) {
            if let Some(cell) = self.cells.get_mut(&a) {
                cell.attach(dir, b_alive);
            }
            if let Some(cell) = self.cells.get_mut(&b) {
                cell.attach(dir.inv(), a_alive);
            }
        }
    }

    /// Remove a cell, unlinking it from every neighbor first.
    fn destroy(&mut self, coord: Coord) -> Option<Cell> {
        let cell = self.cells.remove(&coord)?;
        for (dir, slot) in cell.slots().dir_iter() {
            if slot.is_none() {
                continue;
            }
            if let Some(neighbor) = dir.offset(coord).and_then(|t| self.cells.get_mut(&t)) {
                neighbor.detach(dir.inv());
            }
        }
        trace!(?coord, "released quiescent cell");
        Some(cell)
    }
}

impl FromIterator<Coord> for LifeMap {
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
        Self::from_coordinates(iter)
    }
}
