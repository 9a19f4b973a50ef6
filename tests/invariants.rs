use lifemap::{Cell, Coord, LifeError, LifeMap};
use proptest::prelude::*;
use std::collections::{BTreeSet, HashMap};

/// In-range Moore neighbors of `coord`, never wrapping at the edges of `i64`.
fn moore(coord: Coord) -> impl Iterator<Item = Coord> {
    let (x, y) = coord;
    (-1i64..=1)
        .flat_map(|dx| (-1i64..=1).map(move |dy| (dx, dy)))
        .filter(|&delta| delta != (0, 0))
        .filter_map(move |(dx, dy)| Some((x.checked_add(dx)?, y.checked_add(dy)?)))
}

/// Dense reference rule working on a plain set of living coordinates.
fn reference_step(alive: &BTreeSet<Coord>) -> BTreeSet<Coord> {
    let mut counts: HashMap<Coord, usize> = HashMap::new();
    for &coord in alive {
        for neighbor in moore(coord) {
            *counts.entry(neighbor).or_default() += 1;
        }
    }
    counts
        .into_iter()
        .filter(|(coord, n)| *n == 3 || (*n == 2 && alive.contains(coord)))
        .map(|(coord, _)| coord)
        .collect()
}

fn alive(map: &LifeMap) -> BTreeSet<Coord> {
    map.alive_cells().map(Cell::coord).collect()
}

fn snapshot(map: &LifeMap) -> Vec<(Coord, bool, Vec<Coord>)> {
    map.cells()
        .map(|cell| (cell.coord(), cell.is_alive(), cell.neighbors().collect()))
        .collect()
}

/// Materialized cells must be exactly the living ones and everything touching them.
fn assert_exact_footprint(map: &LifeMap) {
    let living = alive(map);
    let expected: BTreeSet<Coord> = living
        .iter()
        .flat_map(|&coord| moore(coord).chain(std::iter::once(coord)))
        .collect();
    let actual: BTreeSet<Coord> = map.cells().map(Cell::coord).collect();
    assert_eq!(actual, expected);
}

fn seeds(origin: Coord) -> impl Strategy<Value = Vec<Coord>> {
    prop::collection::vec((0i64..8, 0i64..8), 0..24).prop_map(move |cells| {
        cells
            .into_iter()
            .map(|(dx, dy)| (origin.0.wrapping_add(dx), origin.1.wrapping_add(dy)))
            .collect()
    })
}

fn origins() -> impl Strategy<Value = Coord> {
    prop_oneof![
        Just((0, 0)),
        Just((-4, -4)),
        Just((i64::MAX - 7, i64::MAX - 7)),
        Just((i64::MIN, i64::MIN)),
        Just((i64::MIN, i64::MAX - 7)),
    ]
}

proptest! {
    #[test]
    fn matches_dense_reference(
        (origin, cells) in origins().prop_flat_map(|origin| (Just(origin), seeds(origin))),
        steps in 0usize..8,
    ) {
        let mut map = LifeMap::from_coordinates(cells.iter().copied());
        let mut expected: BTreeSet<Coord> = cells.iter().copied().collect();
        prop_assert_eq!(alive(&map), expected.clone());
        map.validate().unwrap();

        for _ in 0..steps {
            map.step();
            expected = reference_step(&expected);
            prop_assert_eq!(alive(&map), expected.clone(), "origin {:?}", origin);
            prop_assert_eq!(map.validate(), Ok(()));
            assert_exact_footprint(&map);
        }
    }

    #[test]
    fn reviving_twice_is_idempotent(cells in seeds((0, 0)), x in 0i64..8, y in 0i64..8) {
        let mut once = LifeMap::from_coordinates(cells.iter().copied());
        let mut twice = once.clone();
        once.set_cell_state(x, y, true).unwrap();
        twice.set_cell_state(x, y, true).unwrap();
        twice.set_cell_state(x, y, true).unwrap();
        prop_assert_eq!(snapshot(&once), snapshot(&twice));
    }

    #[test]
    fn edits_keep_invariants(
        edits in prop::collection::vec((-3i64..3, -3i64..3, any::<bool>()), 0..40),
    ) {
        let mut map = LifeMap::new();
        for (x, y, state) in edits {
            let existed = map.get(x, y).is_some();
            let before = snapshot(&map);
            match map.set_cell_state(x, y, state) {
                Ok(()) => prop_assert!(state || existed),
                Err(err) => {
                    prop_assert_eq!(err, LifeError::NotMaterialized { coord: (x, y) });
                    prop_assert_eq!(snapshot(&map), before);
                }
            }
            prop_assert_eq!(map.validate(), Ok(()));
            assert_exact_footprint(&map);
        }
    }
}
