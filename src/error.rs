use thiserror::Error;

/// Errors raised by board construction, clicks and the solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LightsOnError {
    #[error("coordinate ({x}, {y}) is outside the {width}x{height} board")]
    OutOfRange { x: u8, y: u8, width: u8, height: u8 },

    #[error("invalid board dimensions {width}x{height}: need 1..=64 cells")]
    InvalidDimensions { width: u8, height: u8 },

    #[error("board {width}x{height} has {cells} cells, solver is limited to {max_cells}")]
    BoardTooLarge {
        width: u8,
        height: u8,
        cells: usize,
        max_cells: usize,
    },

    #[error("no solution")]
    NoSolution,
}
