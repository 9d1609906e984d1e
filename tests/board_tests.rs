use nqueens::{Board, BoardError, Grid};

#[test]
fn test_new_board_is_empty() {
    let board = Board::new(4);
    assert_eq!(board.size(), 4);
    assert_eq!(board.rows().len(), 4);
    assert!(board.rows().iter().all(|row| row.len() == 4 && row.iter().all(|&v| v == 0)));
    assert_eq!(board.pieces().count(), 0);
}

#[test]
fn test_zero_sized_board() {
    let board = Board::new(0);
    assert_eq!(board.size(), 0);
    assert_eq!(board.pieces().count(), 0);
    assert_eq!(board, Board::default());
}

#[test]
fn test_from_rows_rejects_bad_input() {
    assert_eq!(
        Board::from_rows(vec![vec![1, 0], vec![0]]).unwrap_err(),
        BoardError::NotSquare { row: 1, len: 1, n: 2 }
    );
    assert_eq!(
        Board::from_rows(vec![vec![1, 0], vec![0, 2]]).unwrap_err(),
        BoardError::InvalidCell {
            row: 1,
            col: 1,
            value: 2
        }
    );
}

#[test]
fn test_toggle_piece() -> Result<(), BoardError> {
    let mut board = Board::new(3);
    board.toggle_piece(1, 2)?;
    assert!(board.get(1, 2)?);
    assert_eq!(board.cell_at(1, 2), 1);
    assert_eq!(board.pieces().collect::<Vec<_>>(), vec![(1, 2)]);

    board.toggle_piece(1, 2)?;
    assert!(!board.get(1, 2)?);

    assert_eq!(
        board.toggle_piece(3, 0).unwrap_err(),
        BoardError::OutOfRange { row: 3, col: 0 }
    );
    Ok(())
}

#[test]
fn test_parse_literal() -> Result<(), BoardError> {
    let board: Board = "1,0,0; 0,1,0; 0,0,1".parse()?;
    assert_eq!(
        board,
        Board::from_rows(vec![vec![1, 0, 0], vec![0, 1, 0], vec![0, 0, 1]])?
    );

    let board: Board = "0 1\n1 0\n".parse()?;
    assert_eq!(board.pieces().collect::<Vec<_>>(), vec![(0, 1), (1, 0)]);
    assert_eq!(board.to_string(), "0 1\n1 0");

    assert_eq!(
        "1,x;0,0".parse::<Board>().unwrap_err(),
        BoardError::ParseCell { row: 0, col: 1 }
    );
    assert_eq!("".parse::<Board>()?, Board::new(0));
    Ok(())
}

#[test]
fn test_conflicts_follow_toggles() -> Result<(), BoardError> {
    let mut board = Board::new(4);
    board.toggle_piece(0, 0)?;
    assert!(!board.conflicts().has_any_queen_conflicts());

    board.toggle_piece(3, 3)?;
    assert!(board.conflicts().has_major_diagonal_conflict_at(0));

    board.toggle_piece(3, 3)?;
    board.toggle_piece(1, 2)?;
    assert!(!board.conflicts().has_any_queen_conflicts());
    Ok(())
}
