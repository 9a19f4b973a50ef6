pub trait Direction: Sized + From<usize> + Into<usize> {
    type Directions: Iterator<Item = Self>;

    /// An iterator over all directions. There must be an even number of directions and they
    /// must rotate counter-clockwise when iterating in order for the default `inv` to work.
    fn directions() -> Self::Directions;

    /// All directions should have an opposite direction on the opposite side of its iterator.
    #[inline]
    fn inv(self) -> Self {
        let mut n: usize = self.into();
        n += Self::total() / 2;
        n %= Self::total();
        n.into()
    }

    /// The total number of directions.
    #[inline]
    fn total() -> usize {
        Self::directions().count()
    }
}

/// A `Neighborhood` holds one slot per neighbor, each in its own `Direction`.
pub trait Neighborhood<T>: Sized {
    type Direction: Direction;
    type Iter: Iterator<Item = T>;
    type DirIter: Iterator<Item = (Self::Direction, T)>;

    fn new<F: FnMut(Self::Direction) -> T>(dir_map: F) -> Self;

    /// Iterate over all neighbor slots.
    fn iter(self) -> Self::Iter;
    /// Iterate over all neighbor slots with their directions.
    fn dir_iter(self) -> Self::DirIter;
}
