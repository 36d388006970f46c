//! Distance maps over generated mazes and the fixed fixture layouts.

use mazer_core::{Cell, Grid};
use mazer_gen::MazeGen;
use mazer_gen::fixtures::{hollow, serpentine};
use mazer_paths::{DistanceMap, PathError, find_longest_path};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn serpentine_grid(rows: usize, cols: usize) -> Grid {
    let mut g = Grid::new(rows, cols, 1).unwrap();
    g.for_each(serpentine);
    g
}

#[test]
fn serpentine_worst_case_distance() {
    let mut g = serpentine_grid(10, 10);
    g.set_cell_label(9, " A").unwrap();
    g.set_cell_label(99, " B").unwrap();

    let mut dm = DistanceMap::build(&g, 9).unwrap();
    assert_eq!(dm.distance_to(99), Some(99));

    let path = dm.find_path(&g).unwrap();
    assert_eq!(path.len(), 100);
    assert_eq!(path.first(), Some(&9));
    assert_eq!(path.last(), Some(&99));

    // Consecutive cells are adjacent and the path never revisits a cell.
    let mut seen = vec![false; g.len()];
    for pair in path.windows(2) {
        assert!(g.is_connected(pair[0], pair[1], mazer_core::Heading::Any).is_some());
    }
    for &id in path {
        assert!(!seen[id]);
        seen[id] = true;
    }
}

#[test]
fn hollow_corner_to_corner() {
    let mut g: Grid = Grid::new(5, 10, 1).unwrap();
    g.for_each(hollow);
    let last = g.len() - 1;

    let mut dm = DistanceMap::build(&g, 0).unwrap();
    let expected = (g.cols() + g.rows() - 2) as u32;
    assert_eq!(dm.distance_to(last), Some(expected));
    let path = dm.find_path(&g).unwrap();
    assert_eq!(path.len(), expected as usize + 1);

    // Interior cells are cut off.
    let interior = g.id_at(2, 4).unwrap();
    assert_eq!(dm.distance_at(interior), None);
    assert_eq!(
        dm.find_path_to(&g, interior),
        Err(PathError::Unreachable { target: interior })
    );
}

#[test]
fn disconnected_grid_is_unreachable() {
    let g: Grid = Grid::new(3, 3, 1).unwrap();
    let mut dm = DistanceMap::build(&g, 0).unwrap();
    assert_eq!(dm.distance_to(8), None);
    assert!(dm.find_path(&g).is_err());
    assert_eq!(dm.reached().collect::<Vec<_>>(), vec![(0, 0)]);
}

#[test]
fn serpentine_farthest_from_corner() {
    let g = serpentine_grid(3, 3);
    let dm = DistanceMap::build(&g, 0).unwrap();
    assert_eq!(dm.farthest_distance(), 6);
    assert_eq!(dm.farthest_id(), 6);
}

#[test]
fn serpentine_diameter_and_naming() {
    let mut g = serpentine_grid(3, 3);
    let dm = find_longest_path(&g).unwrap();
    assert_eq!(dm.farthest_distance(), 8);
    assert_eq!(dm.farthest_id(), 2);
    assert_eq!(dm.path(), &[6, 7, 8, 5, 4, 3, 0, 1, 2]);

    assert_eq!(dm.name_path(&mut g, "STA", "END"), Ok(9));
    assert_eq!(g.cell_by_id(6).and_then(Cell::label), Some("STA"));
    assert_eq!(g.cell_by_id(1).and_then(Cell::label), Some("7"));
    assert_eq!(g.cell_by_id(2).and_then(Cell::label), Some("END"));

    let board = g.render_ascii(true);
    assert!(board.contains("|STA"));
    assert!(board.contains("END|"));
}

#[test]
fn micro_grid_longest_path() {
    let g: Grid = Grid::new(1, 1, 3).unwrap();
    let dm = find_longest_path(&g).unwrap();
    assert_eq!(dm.path(), &[0]);
}

#[test]
fn generated_mazes_are_spanning_trees() {
    for seed in [1, 7, 23, 99] {
        let mut g: Grid = Grid::new(8, 11, 0).unwrap();
        let mut mg = MazeGen::new(StdRng::seed_from_u64(seed));
        mg.aldous_broder(&mut g).unwrap();
        assert_eq!(g.edge_count(), g.len() - 1);

        for source in [0, g.len() / 2, g.len() - 1] {
            let dm = DistanceMap::build(&g, source).unwrap();
            assert_eq!(dm.reached().count(), g.len(), "seed {seed} source {source}");
        }

        // In a tree the double sweep gives the true diameter: no pair of
        // cells is farther apart.
        let longest = find_longest_path(&g).unwrap();
        for source in 0..g.len() {
            let dm = DistanceMap::build(&g, source).unwrap();
            assert!(dm.farthest_distance() <= longest.farthest_distance());
        }
        assert_eq!(longest.path().len(), longest.farthest_distance() as usize + 1);
    }
}
