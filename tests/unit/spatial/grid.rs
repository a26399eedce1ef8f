//! Tests for grid construction, lookup and Moore adjacency

#[cfg(test)]
mod tests {
    use gridlattice::spatial::grid::EMPTY_DIMENSION;
    use gridlattice::{Coordinate, Direction, Grid, GridError};
    use std::collections::HashSet;

    fn coord(row: i32, col: i32) -> Coordinate {
        Coordinate::new(row, col)
    }

    // Tests positive dimensions are reported exactly
    #[test]
    fn test_new_reports_dimensions() {
        let grid = Grid::<i32>::new(3, 5);

        assert_eq!(grid.row_count(), 3);
        assert_eq!(grid.col_count(), 5);
        assert_eq!(grid.len(), 15);
        assert_eq!(grid.dimensions(), (3, 5));
        assert!(!grid.is_empty());
    }

    // Tests non-positive dimensions produce the -1 sentinel and no cells
    #[test]
    fn test_non_positive_dimensions_produce_empty_grid() {
        for (rows, cols) in [(0, 4), (4, 0), (-2, 3), (3, -2), (0, 0), (-1, -1)] {
            let grid = Grid::<u8>::new(rows, cols);

            assert!(grid.is_empty(), "{rows}x{cols} should be empty");
            assert_eq!(grid.row_count(), EMPTY_DIMENSION);
            assert_eq!(grid.col_count(), EMPTY_DIMENSION);
            assert_eq!(grid.len(), 0);
            assert!(!grid.is_valid_index(coord(0, 0)));
            assert!(grid.get_cell(coord(0, 0)).is_err());
        }
    }

    // Tests default construction seeds T::default()
    #[test]
    fn test_new_uses_type_default() {
        let grid = Grid::<String>::new(2, 2);

        assert!(grid.iter().all(|cell| cell.data().is_empty()));
    }

    // Tests seeded construction clones the value into every cell
    #[test]
    fn test_with_default_seeds_every_cell() {
        let grid = Grid::with_default(2, 3, 7u16);

        assert_eq!(grid.iter().count(), 6);
        assert!(grid.iter().all(|cell| *cell.data() == 7));
        assert!(Grid::with_default(0, 3, 7u16).is_empty());
    }

    // Tests coordinate-derived construction
    #[test]
    fn test_from_fn_receives_each_coordinate() {
        let grid = Grid::from_fn(2, 3, |c| c.row * 10 + c.col);

        assert_eq!(grid.get(coord(1, 2)), Some(&12));
        assert_eq!(grid.get(coord(0, 1)), Some(&1));

        let mut calls = 0;
        let empty = Grid::from_fn(0, 3, |_| {
            calls += 1;
            0
        });
        assert!(empty.is_empty());
        assert_eq!(calls, 0);
    }

    // Tests validity matches the bounds predicate for every nearby coordinate
    #[test]
    fn test_is_valid_index_matches_bounds() {
        let grid = Grid::<()>::new(3, 4);

        for row in -2..6 {
            for col in -2..7 {
                let expected = (0..3).contains(&row) && (0..4).contains(&col);
                assert_eq!(grid.is_valid_index(coord(row, col)), expected, "({row},{col})");
            }
        }
    }

    // Tests lookups carry the cell's coordinate and payload
    #[test]
    fn test_get_cell_returns_view() {
        let grid = Grid::from_fn(2, 2, |c| (c.row, c.col));

        let cell = grid.get_cell(coord(1, 0));
        assert!(cell.as_ref().is_ok_and(|cell| cell.coordinate() == coord(1, 0)));
        assert!(cell.is_ok_and(|cell| *cell.data() == (1, 0)));
    }

    // Tests out-of-range lookups are reported, never clamped
    #[test]
    fn test_get_cell_out_of_range() {
        let grid = Grid::<i32>::new(2, 3);

        for bad in [coord(2, 0), coord(0, 3), coord(-1, 0), coord(0, -1)] {
            match grid.get_cell(bad) {
                Err(GridError::OutOfRange {
                    coordinate,
                    rows,
                    cols,
                }) => {
                    assert_eq!(coordinate, bad);
                    assert_eq!((rows, cols), (2, 3));
                }
                other => unreachable!("expected OutOfRange for {bad}, got {other:?}"),
            }
        }
    }

    // Tests mutable views change only the payload
    #[test]
    fn test_get_cell_mut_updates_payload() {
        let mut grid = Grid::<i32>::new(2, 2);

        if let Ok(mut cell) = grid.get_cell_mut(coord(1, 1)) {
            assert_eq!(cell.coordinate(), coord(1, 1));
            *cell.data_mut() += 5;
            assert_eq!(cell.set(9), 5);
        }
        assert_eq!(grid.get(coord(1, 1)), Some(&9));
        assert!(grid.get_cell_mut(coord(2, 2)).is_err());

        if let Some(value) = grid.get_mut(coord(0, 1)) {
            *value = -3;
        }
        assert_eq!(grid.get(coord(0, 1)), Some(&-3));
    }

    #[test]
    fn test_fill_overwrites_every_payload() {
        let mut grid = Grid::<i32>::new(3, 2);
        grid.fill(4);

        assert!(grid.iter().all(|cell| *cell.data() == 4));
    }

    // Tests mutable iteration covers every cell in row-major order
    #[test]
    fn test_iter_mut_row_major() {
        let mut grid = Grid::<i32>::new(2, 3);
        for (index, mut cell) in grid.iter_mut().enumerate() {
            *cell.data_mut() = index as i32;
        }

        let values: Vec<i32> = grid.iter().map(|cell| *cell.data()).collect();
        assert_eq!(values, vec![0, 1, 2, 3, 4, 5]);
    }

    // Tests the top-left corner has exactly its three in-bounds neighbors
    #[test]
    fn test_corner_neighbors() {
        let grid = Grid::<i32>::new(2, 2);

        assert_eq!(
            grid.neighbors(coord(0, 0)),
            vec![coord(0, 1), coord(1, 1), coord(1, 0)]
        );
        assert_eq!(
            grid.neighbors(coord(1, 1)),
            vec![coord(0, 0), coord(0, 1), coord(1, 0)]
        );
    }

    // Tests interior neighbors follow compass order and are distinct
    #[test]
    fn test_interior_neighbors_compass_order() {
        let grid = Grid::<i32>::new(3, 3);
        let center = coord(1, 1);
        let neighbors = grid.neighbors(center);

        assert_eq!(
            neighbors,
            vec![
                coord(0, 0),
                coord(0, 1),
                coord(0, 2),
                coord(1, 2),
                coord(2, 2),
                coord(2, 1),
                coord(2, 0),
                coord(1, 0),
            ]
        );

        let unique: HashSet<_> = neighbors.iter().copied().collect();
        assert_eq!(unique.len(), 8);
        assert!(!unique.contains(&center));
        assert!(neighbors.iter().all(|&n| grid.is_valid_index(n)));
    }

    // Tests every interior cell of a larger grid has 8 distinct neighbors
    #[test]
    fn test_all_interior_cells_have_eight_neighbors() {
        let grid = Grid::<()>::new(5, 6);

        for row in 1..4 {
            for col in 1..5 {
                let c = coord(row, col);
                let unique: HashSet<_> = grid.neighbors(c).into_iter().collect();
                assert_eq!(unique.len(), 8);
                assert!(!unique.contains(&c));
            }
        }
    }

    // Tests edge cells drop diagonals touching the edge
    #[test]
    fn test_edge_neighbors() {
        let grid = Grid::<i32>::new(3, 3);

        assert_eq!(
            grid.neighbors(coord(0, 1)),
            vec![coord(0, 2), coord(1, 2), coord(1, 1), coord(1, 0), coord(0, 0)]
        );
        assert_eq!(
            grid.neighbors(coord(1, 2)),
            vec![coord(0, 1), coord(0, 2), coord(2, 2), coord(2, 1), coord(1, 1)]
        );
    }

    // Tests single-row and single-cell grids
    #[test]
    fn test_degenerate_shape_neighbors() {
        let row = Grid::<i32>::new(1, 3);
        assert_eq!(row.neighbors(coord(0, 1)), vec![coord(0, 2), coord(0, 0)]);

        let single = Grid::<i32>::new(1, 1);
        assert!(single.neighbors(coord(0, 0)).is_empty());

        let empty = Grid::<i32>::new(0, 0);
        assert!(empty.neighbors(coord(0, 0)).is_empty());
    }

    // Tests neighbors of an out-of-bounds coordinate are still filtered
    #[test]
    fn test_out_of_bounds_input_neighbors() {
        let grid = Grid::<i32>::new(2, 2);

        assert_eq!(grid.neighbors(coord(-1, -1)), vec![coord(0, 0)]);
        assert!(grid.neighbors(coord(5, 5)).is_empty());
    }

    // Tests sorted enumeration returns the same set in row-major order
    #[test]
    fn test_neighbors_sorted() {
        let grid = Grid::<i32>::new(3, 3);

        assert_eq!(
            grid.neighbors_sorted(coord(1, 1)),
            vec![
                coord(0, 0),
                coord(0, 1),
                coord(0, 2),
                coord(1, 0),
                coord(1, 2),
                coord(2, 0),
                coord(2, 1),
                coord(2, 2),
            ]
        );
    }

    #[test]
    fn test_direction_compass() {
        let diagonals = Direction::COMPASS
            .iter()
            .filter(|direction| direction.is_diagonal())
            .count();

        assert_eq!(diagonals, 4);
        assert_eq!(Direction::DownLeft.step(coord(1, 1)), coord(2, 0));
        assert_eq!(Direction::Left.delta(), (0, -1));
    }
}
