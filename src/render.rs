use crate::board::{BoardState, cell_index};
use crate::solver::Solution;
use crate::types::Position;

/// How a single cell is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellMark {
    Off,
    On,
    OffMustClick,
    OnMustClick,
}

impl CellMark {
    pub fn new(is_set: bool, is_click: bool) -> Self {
        match (is_set, is_click) {
            (false, false) => Self::Off,
            (true, false) => Self::On,
            (false, true) => Self::OffMustClick,
            (true, true) => Self::OnMustClick,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Self::Off => ' ',
            Self::On => 'o',
            Self::OffMustClick => '+',
            Self::OnMustClick => '-',
        }
    }
}

/// Renders one board, marking `click` as the next cell to click.
///
/// ```text
/// [ ] [o] [ ]
/// [o] [+] [o]
/// [o] [ ] [ ]
/// ```
pub fn render_board(board: &BoardState, click: Option<Position>) -> String {
    let bits = board.bits();
    (0..board.height())
        .map(|y| {
            (0..board.width())
                .map(|x| {
                    let pos = Position::new(x, y);
                    let is_set = (bits >> cell_index(board.width(), pos)) & 1 != 0;
                    let mark = CellMark::new(is_set, click == Some(pos));
                    format!("[{}]", mark.symbol())
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders every board of a solution, separated by blank lines.
pub fn render_solution(solution: &Solution) -> String {
    solution
        .steps()
        .iter()
        .map(|step| render_board(&step.board, step.click))
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::Solver;

    #[test]
    fn cell_marks_cover_every_combination() {
        assert_eq!(CellMark::new(false, false).symbol(), ' ');
        assert_eq!(CellMark::new(true, false).symbol(), 'o');
        assert_eq!(CellMark::new(false, true).symbol(), '+');
        assert_eq!(CellMark::new(true, true).symbol(), '-');
    }

    #[test]
    fn board_renders_rows_top_to_bottom() {
        let board = BoardState::from_bits(3, 3, 0b001_101_010).unwrap();

        let text = render_board(&board, Some(Position::new(1, 1)));

        assert_eq!(text, "[ ] [o] [ ]\n[o] [+] [o]\n[o] [ ] [ ]");
    }

    #[test]
    fn lit_click_cell_uses_minus() {
        let board = BoardState::from_bits(2, 1, 0b01).unwrap();

        assert_eq!(render_board(&board, Some(Position::new(0, 0))), "[-] [ ]");
    }

    #[test]
    fn solution_boards_are_separated_by_blank_lines() {
        let mut solver = Solver::new();
        let board = BoardState::new(1, 1).unwrap();
        let solution = solver.solve(&board).unwrap();

        assert_eq!(render_solution(&solution), "[+]\n\n[o]");
    }
}
