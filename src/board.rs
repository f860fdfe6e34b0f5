use crate::error::LightsOnError;
use crate::types::Position;

/// Largest number of cells a board can hold in its bit pattern.
pub const MAX_CELLS: usize = u64::BITS as usize;

/// Lights On board state packed into one bitboard.
///
/// Bit `y * width + x` holds cell `(x, y)`; `(0, 0)` is the least-significant
/// bit. Bits above `width * height` are always zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardState {
    width: u8,
    height: u8,
    bits: u64,
}

/// Identity of a board state, usable as a map key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoardKey {
    pub width: u8,
    pub height: u8,
    pub bits: u64,
}

impl BoardState {
    /// Creates a board with every light off.
    pub fn new(width: u8, height: u8) -> Result<Self, LightsOnError> {
        Self::from_bits(width, height, 0)
    }

    /// Creates a board from a raw bit pattern. Bits outside the grid are dropped.
    pub fn from_bits(width: u8, height: u8, bits: u64) -> Result<Self, LightsOnError> {
        let cells = width as usize * height as usize;
        if cells == 0 || cells > MAX_CELLS {
            return Err(LightsOnError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            bits: bits & full_mask(cells),
        })
    }

    /// Creates the board with every light on.
    pub fn solved(width: u8, height: u8) -> Result<Self, LightsOnError> {
        Self::from_bits(width, height, u64::MAX)
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn bits(&self) -> u64 {
        self.bits
    }

    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn key(&self) -> BoardKey {
        BoardKey {
            width: self.width,
            height: self.height,
            bits: self.bits,
        }
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    /// Returns whether the light at `pos` is on.
    pub fn is_set(&self, pos: Position) -> Result<bool, LightsOnError> {
        let bit = self.bit(pos)?;
        Ok(self.bits & bit != 0)
    }

    pub fn is_solved(&self) -> bool {
        self.bits == full_mask(self.cell_count())
    }

    /// Returns the number of lit cells.
    pub fn lit_count(&self) -> u32 {
        self.bits.count_ones()
    }

    /// Flips each listed cell, leaving its neighbors alone.
    /// Fails without touching any bit when a coordinate is off the board.
    pub fn toggle_cells(&self, positions: &[Position]) -> Result<Self, LightsOnError> {
        let mut mask = 0u64;
        for &pos in positions {
            mask ^= self.bit(pos)?;
        }
        Ok(self.toggle_mask(mask))
    }

    /// Flips every cell set in `mask`. Bits outside the grid are ignored.
    pub fn toggle_mask(&self, mask: u64) -> Self {
        Self {
            bits: (self.bits ^ mask) & full_mask(self.cell_count()),
            ..*self
        }
    }

    /// Iterates every coordinate in row-major order.
    pub fn coordinates(&self) -> impl Iterator<Item = Position> + use<> {
        coordinates(self.width, self.height)
    }

    /// Converts the board to row-major cells where 1 = on and 0 = off.
    pub fn cells(&self) -> Vec<u8> {
        (0..self.cell_count())
            .map(|idx| ((self.bits >> idx) & 1) as u8)
            .collect()
    }

    fn bit(&self, pos: Position) -> Result<u64, LightsOnError> {
        if !self.contains(pos) {
            return Err(LightsOnError::OutOfRange {
                x: pos.x,
                y: pos.y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(1u64 << cell_index(self.width, pos))
    }
}

impl From<BoardKey> for BoardState {
    fn from(key: BoardKey) -> Self {
        Self {
            width: key.width,
            height: key.height,
            bits: key.bits,
        }
    }
}

/// Iterates every coordinate of a `width` x `height` grid in row-major order.
pub fn coordinates(width: u8, height: u8) -> impl Iterator<Item = Position> {
    (0..height).flat_map(move |y| (0..width).map(move |x| Position::new(x, y)))
}

pub(crate) fn cell_index(width: u8, pos: Position) -> usize {
    pos.y as usize * width as usize + pos.x as usize
}

fn full_mask(cells: usize) -> u64 {
    if cells >= MAX_CELLS {
        u64::MAX
    } else {
        (1u64 << cells) - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(x: u8, y: u8) -> Position {
        Position::new(x, y)
    }

    #[test]
    fn solved_board_has_every_light_on() {
        let board = BoardState::solved(3, 3).unwrap();

        assert_eq!(board.bits(), 0b111_111_111);
        assert!(board.is_solved());
        assert_eq!(board.lit_count(), 9);
    }

    #[test]
    fn solved_board_fills_a_full_bitboard() {
        let board = BoardState::solved(8, 8).unwrap();

        assert_eq!(board.bits(), u64::MAX);
        assert!(board.is_solved());
    }

    #[test]
    fn invalid_dimensions_are_rejected() {
        assert_eq!(
            BoardState::new(0, 3),
            Err(LightsOnError::InvalidDimensions { width: 0, height: 3 })
        );
        assert_eq!(
            BoardState::new(9, 8),
            Err(LightsOnError::InvalidDimensions { width: 9, height: 8 })
        );
    }

    #[test]
    fn from_bits_drops_bits_outside_the_grid() {
        let board = BoardState::from_bits(2, 2, 0b1_0110).unwrap();

        assert_eq!(board.bits(), 0b0110);
        assert_eq!(board, BoardState::from_bits(2, 2, 0b0110).unwrap());
    }

    #[test]
    fn is_set_reads_row_major_bits() {
        // [ ] [o] [ ]
        // [o] [ ] [o]
        // [o] [ ] [ ]
        let board = BoardState::from_bits(3, 3, 0b001_101_010).unwrap();

        assert!(!board.is_set(pos(0, 0)).unwrap());
        assert!(board.is_set(pos(1, 0)).unwrap());
        assert!(board.is_set(pos(0, 1)).unwrap());
        assert!(board.is_set(pos(2, 1)).unwrap());
        assert!(board.is_set(pos(0, 2)).unwrap());
        assert!(!board.is_set(pos(2, 2)).unwrap());
        assert_eq!(board.cells(), vec![0, 1, 0, 1, 0, 1, 1, 0, 0]);
    }

    #[test]
    fn is_set_rejects_out_of_range_coordinates() {
        let board = BoardState::new(3, 2).unwrap();

        assert_eq!(
            board.is_set(pos(1, 2)),
            Err(LightsOnError::OutOfRange {
                x: 1,
                y: 2,
                width: 3,
                height: 2
            })
        );
    }

    #[test]
    fn toggle_cells_flips_only_listed_cells() {
        let board = BoardState::new(3, 3).unwrap();

        let toggled = board.toggle_cells(&[pos(0, 0), pos(2, 2)]).unwrap();

        assert_eq!(toggled.bits(), 0b100_000_001);
        assert_eq!(board.bits(), 0, "original board must be unchanged");
        assert_eq!(toggled.toggle_cells(&[pos(0, 0), pos(2, 2)]).unwrap(), board);
    }

    #[test]
    fn toggle_cells_with_bad_coordinate_fails_without_partial_update() {
        let board = BoardState::new(2, 2).unwrap();

        let err = board.toggle_cells(&[pos(0, 0), pos(2, 0)]).unwrap_err();

        assert!(matches!(err, LightsOnError::OutOfRange { x: 2, y: 0, .. }));
    }

    #[test]
    fn keys_match_for_independently_built_boards() {
        let a = BoardState::from_bits(3, 2, 0b101_010).unwrap();
        let b = BoardState::new(3, 2)
            .unwrap()
            .toggle_cells(&[pos(1, 0), pos(0, 1), pos(2, 1)])
            .unwrap();

        assert_eq!(a.key(), a.key());
        assert_eq!(a.key(), b.key());
        assert_eq!(BoardState::from(a.key()), a);
    }

    #[test]
    fn keys_differ_when_dimensions_differ() {
        let wide = BoardState::from_bits(3, 2, 0b11).unwrap();
        let tall = BoardState::from_bits(2, 3, 0b11).unwrap();

        assert_ne!(wide.key(), tall.key());
    }

    #[test]
    fn coordinates_are_row_major_and_restartable() {
        let board = BoardState::new(2, 2).unwrap();

        let first: Vec<_> = board.coordinates().collect();
        let second: Vec<_> = board.coordinates().collect();

        assert_eq!(first, vec![pos(0, 0), pos(1, 0), pos(0, 1), pos(1, 1)]);
        assert_eq!(first, second);
    }
}
