use nqueens::{Board, ConflictEngine, Grid, Line};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

fn random_board(seed: u64, n: usize) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::new(n);
    if n == 0 {
        return board;
    }
    let pieces = rng.random_range(0..=n + 1);
    for _ in 0..pieces {
        let r = rng.random_range(0..n);
        let c = rng.random_range(0..n);
        if !board.get(r, c).unwrap() {
            board.toggle_piece(r, c).unwrap();
        }
    }
    board
}

/// Scans every cell and keeps the ones whose recomputed key matches.
fn brute_force_major(grid: &impl Grid, key: isize) -> bool {
    let n = grid.size();
    let mut count = 0;
    for r in 0..n {
        for c in 0..n {
            if grid.cell_at(r, c) == 1 && c as isize - r as isize == key {
                count += 1;
            }
        }
    }
    count > 1
}

fn brute_force_minor(grid: &impl Grid, key: isize) -> bool {
    let n = grid.size();
    let mut count = 0;
    for r in 0..n {
        for c in 0..n {
            if grid.cell_at(r, c) == 1 && (c + r) as isize == key {
                count += 1;
            }
        }
    }
    count > 1
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn diagonal_walk_matches_brute_force(seed in any::<u64>(), n in 0usize..9) {
        let board = random_board(seed, n);
        let engine = board.conflicts();
        let span = 2 * n as isize + 2;
        for key in -span..=span {
            prop_assert_eq!(engine.has_major_diagonal_conflict_at(key), brute_force_major(&board, key));
            prop_assert_eq!(engine.has_minor_diagonal_conflict_at(key), brute_force_minor(&board, key));
        }
    }

    #[test]
    fn aggregates_compose(seed in any::<u64>(), n in 0usize..9) {
        let board = random_board(seed, n);
        let engine = board.conflicts();
        let rows = engine.has_any_row_conflicts();
        let cols = engine.has_any_col_conflicts();
        let major = engine.has_any_major_diagonal_conflicts();
        let minor = engine.has_any_minor_diagonal_conflicts();
        prop_assert_eq!(engine.has_any_rook_conflicts(), rows || cols);
        prop_assert_eq!(engine.has_any_queen_conflicts(), rows || cols || major || minor);

        let report = engine.report();
        prop_assert_eq!(report.rows, rows);
        prop_assert_eq!(report.columns, cols);
        prop_assert_eq!(report.major_diagonals, major);
        prop_assert_eq!(report.minor_diagonals, minor);
        prop_assert_eq!(report.queens, engine.has_any_queen_conflicts());
    }

    #[test]
    fn queen_conflict_iff_some_point_conflicts(seed in any::<u64>(), n in 1usize..9) {
        let board = random_board(seed, n);
        let engine = board.conflicts();
        let any_piece_attacked = board
            .pieces()
            .any(|(r, c)| engine.has_any_queen_conflicts_at_point(r, c).unwrap());
        prop_assert_eq!(engine.has_any_queen_conflicts(), any_piece_attacked);
    }

    #[test]
    fn single_piece_never_conflicts(n in 1usize..12, r in 0usize..12, c in 0usize..12) {
        let (r, c) = (r % n, c % n);
        let mut board = Board::new(n);
        board.toggle_piece(r, c).unwrap();
        let engine = board.conflicts();
        prop_assert!(!engine.has_any_queen_conflicts());
        prop_assert!(!engine.has_any_queen_conflicts_at_point(r, c).unwrap());
        prop_assert!(Line::all(n).all(|line| !engine.has_conflict_on(line)));
    }

    #[test]
    fn empty_board_never_conflicts(n in 0usize..12) {
        let grid = vec![vec![0u8; n]; n];
        let engine = ConflictEngine::new(&grid);
        prop_assert!(!engine.has_any_queen_conflicts());
        prop_assert!(engine.conflicting_lines().is_empty());
    }

    #[test]
    fn two_on_a_major_diagonal(n in 2usize..10, a in 0usize..10, b in 0usize..10, d in -9isize..10) {
        // keys within n - 2 of the main diagonal hold at least two cells
        let d = d % (n as isize - 1);
        let cells: Vec<_> = Line::MajorDiagonal(d).cells(n).collect();
        let (i, j) = (a % cells.len(), b % cells.len());
        prop_assume!(i != j);
        let mut board = Board::new(n);
        board.toggle_piece(cells[i].0, cells[i].1).unwrap();
        board.toggle_piece(cells[j].0, cells[j].1).unwrap();
        let engine = board.conflicts();
        let last = n as isize - 1;
        for key in -last..=last {
            prop_assert_eq!(engine.has_major_diagonal_conflict_at(key), key == d);
        }
        prop_assert!(!engine.has_any_rook_conflicts());
    }

    #[test]
    fn two_on_a_minor_diagonal(n in 2usize..10, a in 0usize..10, b in 0usize..10, s in 0isize..18) {
        let s = 1 + s % (2 * n as isize - 3);
        let cells: Vec<_> = Line::MinorDiagonal(s).cells(n).collect();
        let (i, j) = (a % cells.len(), b % cells.len());
        prop_assume!(i != j);
        let mut board = Board::new(n);
        board.toggle_piece(cells[i].0, cells[i].1).unwrap();
        board.toggle_piece(cells[j].0, cells[j].1).unwrap();
        let engine = board.conflicts();
        for key in 0..=2 * (n as isize - 1) {
            prop_assert_eq!(engine.has_minor_diagonal_conflict_at(key), key == s);
        }
        prop_assert!(!engine.has_any_rook_conflicts());
    }
}
