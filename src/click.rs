use crate::board::{BoardState, cell_index, coordinates};
use crate::error::LightsOnError;
use crate::types::Position;

const NEIGHBORS: [(i8, i8); 5] = [(0, 0), (-1, 0), (1, 0), (0, -1), (0, 1)];

/// Returns the cells toggled by clicking `pos`: the cell itself plus its
/// orthogonal neighbors, clipped to the grid.
pub fn click_mask(width: u8, height: u8, pos: Position) -> Result<u64, LightsOnError> {
    if pos.x >= width || pos.y >= height {
        return Err(LightsOnError::OutOfRange {
            x: pos.x,
            y: pos.y,
            width,
            height,
        });
    }

    let mut mask = 0u64;
    for (dx, dy) in NEIGHBORS {
        let x = pos.x as i16 + dx as i16;
        let y = pos.y as i16 + dy as i16;
        if in_bounds(x, y, width, height) {
            mask |= 1u64 << cell_index(width, Position::new(x as u8, y as u8));
        }
    }
    Ok(mask)
}

/// Clicks `pos` on `state`, producing the next board.
///
/// Clicking the same cell twice restores the original board.
pub fn click(state: &BoardState, pos: Position) -> Result<BoardState, LightsOnError> {
    let mask = click_mask(state.width(), state.height(), pos)?;
    Ok(state.toggle_mask(mask))
}

/// Every click available on one board size, paired with its toggle mask.
#[derive(Debug, Clone)]
pub struct ClickTable {
    clicks: Vec<(Position, u64)>,
}

impl ClickTable {
    pub fn new(width: u8, height: u8) -> Result<Self, LightsOnError> {
        let clicks = coordinates(width, height)
            .map(|pos| click_mask(width, height, pos).map(|mask| (pos, mask)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { clicks })
    }

    pub fn iter(&self) -> impl Iterator<Item = (Position, u64)> + '_ {
        self.clicks.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.clicks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clicks.is_empty()
    }
}

fn in_bounds(x: i16, y: i16, width: u8, height: u8) -> bool {
    (0..width as i16).contains(&x) && (0..height as i16).contains(&y)
}
