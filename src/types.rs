use serde::Serialize;

/// A board coordinate. `(0, 0)` is the top-left cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    pub x: u8,
    pub y: u8,
}

impl Position {
    pub fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }
}

/// One board along a solution path, as returned from WASM APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SolutionStep {
    pub width: u8,
    pub height: u8,
    pub bits: u64,
    /// Row-major cells, 1 = on, 0 = off.
    pub cells: Vec<u8>,
    /// Contract:
    /// - `Some` on every board except the last one: the cell to click next.
    /// - `None` on the solved board.
    pub click: Option<Position>,
    /// Clicks remaining until the board is solved.
    pub distance: u32,
}
