use crate::Coord;
use std::io;
use std::num::ParseIntError;
use thiserror::Error;

/// Errors raised by the board and its cells.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LifeError {
    /// Two cells were linked as neighbors without being Moore-adjacent.
    #[error("cells {a:?} and {b:?} are not neighbors")]
    NotAdjacent { a: Coord, b: Coord },
    /// An explicit dead state was requested for a coordinate with no cell.
    #[error("no cell is materialized at {coord:?}")]
    NotMaterialized { coord: Coord },
    /// The neighbor graph disagrees with the cells stored in the board.
    #[error("invalid neighbor relationships at {coord:?}: {message}")]
    InvalidNeighbors { coord: Coord, message: String },
    /// A dead cell with no living neighbors was left on the board.
    #[error("dead cell at {coord:?} has no living neighbors")]
    QuiescentCell { coord: Coord },
}

/// Errors raised while reading `x,y` coordinate records.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("expected `x,y` but found {record:?}")]
    Malformed { record: String },
    #[error("invalid coordinate {text:?}: {source}")]
    InvalidCoordinate { text: String, source: ParseIntError },
    #[error("failed to read record: {0}")]
    Io(#[from] io::Error),
}
