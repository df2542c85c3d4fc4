use std::fmt;

use super::types::{InvalidMove, Mark};
use super::win_detector::evaluate;

pub const BOARD_SIZE: usize = 9;

/// Row-major 3x3 grid. Slot 0 is top-left, slot 8 bottom-right.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Board {
    cells: [Mark; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Mark; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Mark; BOARD_SIZE] {
        &self.cells
    }

    pub fn get(&self, slot: usize) -> Option<Mark> {
        self.cells.get(slot).copied()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn marked_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell != Mark::Empty).count()
    }

    /// Empty slots in ascending order.
    pub fn available_moves(&self) -> Vec<usize> {
        (0..BOARD_SIZE)
            .filter(|&slot| self.cells[slot] == Mark::Empty)
            .collect()
    }

    /// The only public mutation: writes `mark` into an empty slot of an undecided board.
    pub fn apply(&mut self, slot: usize, mark: Mark) -> Result<(), InvalidMove> {
        debug_assert!(mark != Mark::Empty, "apply called with Mark::Empty");

        if slot >= BOARD_SIZE {
            return Err(InvalidMove::SlotOutOfRange(slot));
        }
        if evaluate(self).is_decided() {
            return Err(InvalidMove::GameOver);
        }
        if self.cells[slot] != Mark::Empty {
            return Err(InvalidMove::SlotOccupied(slot));
        }

        self.cells[slot] = mark;
        Ok(())
    }

    // Search-only: unchecked place/undo on a scratch copy.
    pub(super) fn place(&mut self, slot: usize, mark: Mark) {
        self.cells[slot] = mark;
    }

    pub(super) fn clear(&mut self, slot: usize) {
        self.cells[slot] = Mark::Empty;
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            let cells: Vec<String> = (0..3)
                .map(|col| {
                    let slot = row * 3 + col;
                    match self.cells[slot] {
                        Mark::Empty => (slot + 1).to_string(),
                        mark => mark.to_string(),
                    }
                })
                .collect();
            write!(f, " {} ", cells.join(" | "))?;
            if row < 2 {
                writeln!(f)?;
                writeln!(f, "---+---+---")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Mark::{Empty as E, O, X};

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.available_moves(), (0..9).collect::<Vec<_>>());
        assert!(!board.is_full());
        assert_eq!(board.marked_count(), 0);
    }

    #[test]
    fn test_apply_writes_mark() {
        let mut board = Board::new();
        board.apply(4, X).unwrap();
        assert_eq!(board.get(4), Some(X));
        assert_eq!(board.available_moves(), vec![0, 1, 2, 3, 5, 6, 7, 8]);
    }

    #[test]
    fn test_apply_rejects_occupied_slot_without_mutation() {
        let mut board = Board::new();
        board.apply(0, X).unwrap();
        let before = board;
        assert_eq!(board.apply(0, O), Err(InvalidMove::SlotOccupied(0)));
        assert_eq!(board, before);
    }

    #[test]
    fn test_apply_rejects_out_of_range() {
        let mut board = Board::new();
        assert_eq!(board.apply(9, X), Err(InvalidMove::SlotOutOfRange(9)));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_apply_rejects_decided_board() {
        let mut board = Board::from_cells([X, X, X, O, O, E, E, E, E]);
        assert_eq!(board.apply(5, O), Err(InvalidMove::GameOver));
        assert_eq!(board.get(5), Some(E));
    }

    #[test]
    fn test_is_full() {
        let board = Board::from_cells([X, O, X, X, O, O, O, X, X]);
        assert!(board.is_full());
        assert!(board.available_moves().is_empty());
    }

    #[test]
    fn test_get_out_of_range() {
        assert_eq!(Board::new().get(9), None);
    }

    #[test]
    fn test_display_shows_slot_numbers_for_empty_cells() {
        let board = Board::from_cells([X, E, E, E, O, E, E, E, E]);
        let text = board.to_string();
        assert!(text.starts_with(" X | 2 | 3 "));
        assert!(text.contains(" 4 | O | 6 "));
        assert!(text.ends_with(" 7 | 8 | 9 "));
    }
}
