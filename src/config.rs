/// Cell value of an empty square.
pub const EMPTY: u8 = 0;
/// Cell value of a square holding a piece.
pub const PIECE: u8 = 1;

/// Environment variable read by [`crate::init_logging`].
pub const LOG_ENV_VAR: &str = "NQUEENS_LOG";

/// Separators accepted between rows of a literal board.
pub const ROW_SEPARATORS: [char; 2] = [';', '\n'];
/// Separators accepted between cells of a literal row.
pub const CELL_SEPARATORS: [char; 3] = [',', ' ', '\t'];

/// Returns `true` if `value` is a legal cell value.
pub const fn is_cell_value(value: u8) -> bool {
    value == EMPTY || value == PIECE
}
