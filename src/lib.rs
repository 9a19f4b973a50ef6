//! Lifemap runs Conway's Game of Life on an unbounded `i64` plane.
//!
//! Only living cells and the dead cells touching them are stored in a [`LifeMap`]. Every
//! stored [`Cell`] is linked to its stored Moore neighbors, so counting living neighbors
//! never has to look at the rest of the board. Cells that end up dead with no living
//! neighbors are dropped again, since absence already means dead.
//!
//! Coordinates at the edge of the `i64` range are handled by simply not having neighbors
//! past the edge; the board never wraps.
//!
//! ```
//! use lifemap::LifeMap;
//!
//! let mut map = LifeMap::from_coordinates(vec![(1, 0), (1, 1), (1, 2)]);
//! map.step();
//! let alive: Vec<_> = map.alive_cells().map(|cell| cell.coord()).collect();
//! assert_eq!(alive, vec![(0, 1), (1, 1), (2, 1)]);
//! ```

mod cell;
mod error;
pub mod ingest;
mod map;
mod moore;
mod neighborhood;
pub mod patterns;

pub use cell::*;
pub use error::*;
pub use map::*;
pub use moore::*;
pub use neighborhood::*;

/// A lattice point as `(x, y)`.
pub type Coord = (i64, i64);
