use crate::types::Position;

/// Errors raised by board operations
///
/// Every operation validates its arguments before touching the grid, so an `Err`
/// always leaves the board exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("position {position} is outside the {rows}x{cols} board")]
    OutOfBounds {
        position: Position,
        rows: usize,
        cols: usize,
    },
    #[error("tile kind {kind} is outside [0, {tile_kinds})")]
    InvalidTile { kind: u8, tile_kinds: u8 },
    #[error("board needs at least one tile kind")]
    NoTileKinds,
    #[error("{tile_kinds} tile kinds do not fit the signed cell encoding (at most {max})")]
    TooManyTileKinds { tile_kinds: u8, max: u8 },
    #[error("board rows must all have the same length")]
    RaggedRows,
    #[error("board still had matches after {passes} stabilization passes")]
    StabilizeExhausted { passes: usize },
}
