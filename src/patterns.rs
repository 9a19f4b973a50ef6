//! A few well known seed patterns, placed near the origin.

use crate::Coord;

pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [Coord],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "blinker",
        cells: &[(1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "block",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
    },
    Pattern {
        name: "beehive",
        cells: &[(1, 0), (2, 0), (0, 1), (3, 1), (1, 2), (2, 2)],
    },
    Pattern {
        name: "toad",
        cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
    },
    Pattern {
        name: "beacon",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (3, 2), (2, 3), (3, 3)],
    },
    Pattern {
        name: "glider",
        cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
    },
    Pattern {
        name: "r-pentomino",
        cells: &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
    },
];

/// Look a pattern up by name, ignoring case.
pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS
        .iter()
        .find(|pattern| pattern.name.eq_ignore_ascii_case(name))
}

/// A wide, sparse lattice: every other column from 0 to 1000 and every tenth row, plus
/// one cell in each corner of the `i64` plane.
pub fn demo_lattice() -> Vec<Coord> {
    (0..1000)
        .step_by(2)
        .flat_map(|x| (0..1000).step_by(10).map(move |y| (x, y)))
        .chain(vec![
            (i64::MIN, i64::MIN),
            (i64::MIN, i64::MAX),
            (i64::MAX, i64::MIN),
            (i64::MAX, i64::MAX),
        ])
        .collect()
}
