use crate::{Coord, Direction, Neighborhood};
use enum_iterator::IntoEnumIterator;
use std::array;
use std::iter::Zip;
use std::ops::{Index, IndexMut};
use MooreDirection::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the 8 directions of the Moore neighborhood.
///
/// Variants rotate counter-clockwise starting from `Right`, so the opposite of any
/// direction is four steps away. `Up` points toward decreasing `y`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, IntoEnumIterator)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MooreDirection {
    Right,
    UpRight,
    Up,
    UpLeft,
    Left,
    DownLeft,
    Down,
    DownRight,
}

impl Direction for MooreDirection {
    type Directions = <MooreDirection as IntoEnumIterator>::Iterator;

    #[inline]
    fn directions() -> Self::Directions {
        MooreDirection::into_enum_iter()
    }
}

impl MooreDirection {
    #[inline]
    pub fn delta(self) -> (i64, i64) {
        match self {
            Right => (1, 0),
            UpRight => (1, -1),
            Up => (0, -1),
            UpLeft => (-1, -1),
            Left => (-1, 0),
            DownLeft => (-1, 1),
            Down => (0, 1),
            DownRight => (1, 1),
        }
    }

    /// The coordinate one step from `coord` in this direction.
    ///
    /// Returns `None` when the step would leave the `i64` range on either axis;
    /// the board never wraps around its edges.
    #[inline]
    pub fn offset(self, (x, y): Coord) -> Option<Coord> {
        let (dx, dy) = self.delta();
        Some((x.checked_add(dx)?, y.checked_add(dy)?))
    }

    /// The direction leading from `from` to `to`, if they are Moore neighbors.
    pub fn between(from: Coord, to: Coord) -> Option<Self> {
        let dx = to.0.checked_sub(from.0)?;
        let dy = to.1.checked_sub(from.1)?;
        Self::directions().find(|dir| dir.delta() == (dx, dy))
    }
}

impl From<usize> for MooreDirection {
    fn from(n: usize) -> Self {
        match n % 8 {
            0 => Right,
            1 => UpRight,
            2 => Up,
            3 => UpLeft,
            4 => Left,
            5 => DownLeft,
            6 => Down,
            _ => DownRight,
        }
    }
}

impl From<MooreDirection> for usize {
    fn from(dir: MooreDirection) -> usize {
        match dir {
            Right => 0,
            UpRight => 1,
            Up => 2,
            UpLeft => 3,
            Left => 4,
            DownLeft => 5,
            Down => 6,
            DownRight => 7,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MooreNeighbors<T> {
    pub right: T,
    pub up_right: T,
    pub up: T,
    pub up_left: T,
    pub left: T,
    pub down_left: T,
    pub down: T,
    pub down_right: T,
}

impl<T> MooreNeighbors<T> {
    pub fn as_ref(&self) -> MooreNeighbors<&T> {
        MooreNeighbors {
            right: &self.right,
            up_right: &self.up_right,
            up: &self.up,
            up_left: &self.up_left,
            left: &self.left,
            down_left: &self.down_left,
            down: &self.down,
            down_right: &self.down_right,
        }
    }

    fn into_array(self) -> [T; 8] {
        [
            self.right,
            self.up_right,
            self.up,
            self.up_left,
            self.left,
            self.down_left,
            self.down,
            self.down_right,
        ]
    }
}

impl<T> Index<MooreDirection> for MooreNeighbors<T> {
    type Output = T;
    #[inline]
    fn index(&self, ix: MooreDirection) -> &T {
        match ix {
            Right => &self.right,
            UpRight => &self.up_right,
            Up => &self.up,
            UpLeft => &self.up_left,
            Left => &self.left,
            DownLeft => &self.down_left,
            Down => &self.down,
            DownRight => &self.down_right,
        }
    }
}

impl<T> IndexMut<MooreDirection> for MooreNeighbors<T> {
    #[inline]
    fn index_mut(&mut self, ix: MooreDirection) -> &mut T {
        match ix {
            Right => &mut self.right,
            UpRight => &mut self.up_right,
            Up => &mut self.up,
            UpLeft => &mut self.up_left,
            Left => &mut self.left,
            DownLeft => &mut self.down_left,
            Down => &mut self.down,
            DownRight => &mut self.down_right,
        }
    }
}

impl<T> Neighborhood<T> for MooreNeighbors<T> {
    type Direction = MooreDirection;
    type Iter = array::IntoIter<T, 8>;
    type DirIter = Zip<<MooreDirection as IntoEnumIterator>::Iterator, array::IntoIter<T, 8>>;

    #[inline]
    fn new<F: FnMut(MooreDirection) -> T>(mut f: F) -> MooreNeighbors<T> {
        Self {
            right: f(Right),
            up_right: f(UpRight),
            up: f(Up),
            up_left: f(UpLeft),
            left: f(Left),
            down_left: f(DownLeft),
            down: f(Down),
            down_right: f(DownRight),
        }
    }

    #[inline]
    fn iter(self) -> Self::Iter {
        self.into_array().into_iter()
    }

    #[inline]
    fn dir_iter(self) -> Self::DirIter {
        MooreDirection::directions().zip(self.into_array())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inv_is_opposite_delta() {
        for dir in MooreDirection::directions() {
            let (dx, dy) = dir.delta();
            assert_eq!(dir.inv().delta(), (-dx, -dy));
            assert_eq!(dir.inv().inv(), dir);
        }
    }

    #[test]
    fn usize_conversion_round_trips() {
        assert_eq!(MooreDirection::total(), 8);
        for (ix, dir) in MooreDirection::directions().enumerate() {
            assert_eq!(usize::from(dir), ix);
            assert_eq!(MooreDirection::from(ix), dir);
        }
    }

    #[test]
    fn offset_refuses_to_wrap() {
        assert_eq!(Right.offset((i64::MAX, 0)), None);
        assert_eq!(Down.offset((0, i64::MAX)), None);
        assert_eq!(UpLeft.offset((i64::MIN, 5)), None);
        assert_eq!(UpLeft.offset((5, i64::MIN)), None);
        assert_eq!(Left.offset((i64::MAX, i64::MIN)), Some((i64::MAX - 1, i64::MIN)));
        assert_eq!(DownRight.offset((-1, -1)), Some((0, 0)));
    }

    #[test]
    fn between_finds_adjacent_only() {
        assert_eq!(MooreDirection::between((0, 0), (1, 1)), Some(DownRight));
        assert_eq!(MooreDirection::between((0, 0), (-1, 0)), Some(Left));
        assert_eq!(MooreDirection::between((0, 0), (0, 0)), None);
        assert_eq!(MooreDirection::between((0, 0), (2, 0)), None);
        assert_eq!(MooreDirection::between((i64::MIN, 0), (i64::MAX, 0)), None);
    }

    #[test]
    fn dir_iter_pairs_slots_with_directions() {
        let neighbors = MooreNeighbors::new(|dir| dir.delta());
        for (dir, delta) in neighbors.dir_iter() {
            assert_eq!(dir.delta(), delta);
            assert_eq!(neighbors[dir], delta);
        }
        assert_eq!(neighbors.iter().count(), 8);
    }
}
