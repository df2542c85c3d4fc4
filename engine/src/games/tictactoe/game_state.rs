use crate::games::RandomSource;
use super::board::Board;
use super::bot_controller::calculate_move;
use super::types::{Difficulty, GameStatus, InvalidMove, Mark, WinningLine};
use super::win_detector::{check_win_with_line, evaluate};

/// Everything a renderer needs after a state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSnapshot {
    pub board: Board,
    pub status: GameStatus,
    pub difficulty: Difficulty,
    pub last_move: Option<usize>,
    pub winning_line: Option<WinningLine>,
}

impl GameSnapshot {
    pub fn status_text(&self) -> String {
        self.status.to_string()
    }
}

#[derive(Debug)]
pub struct TicTacToeGameState {
    board: Board,
    status: GameStatus,
    difficulty: Difficulty,
    last_move: Option<usize>,
    generation: u64,
}

impl TicTacToeGameState {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            board: Board::new(),
            status: GameStatus::AwaitingPlayerMove,
            difficulty,
            last_move: None,
            generation: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    /// Bumped on every reset. A scheduled computer turn compares it before applying.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        if self.status.is_game_over() {
            check_win_with_line(&self.board)
        } else {
            None
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board,
            status: self.status,
            difficulty: self.difficulty,
            last_move: self.last_move,
            winning_line: self.winning_line(),
        }
    }

    pub fn reset(&mut self) {
        self.board = Board::new();
        self.status = GameStatus::AwaitingPlayerMove;
        self.last_move = None;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Changing difficulty always starts a fresh game.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.reset();
    }

    pub fn place_player_mark(&mut self, slot: usize) -> Result<GameStatus, InvalidMove> {
        self.place_mark(slot, Mark::PLAYER)
    }

    /// Lets the difficulty policy pick the computer's slot and applies it.
    pub fn play_computer_turn<R: RandomSource + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<usize, InvalidMove> {
        if self.status.is_game_over() {
            return Err(InvalidMove::GameOver);
        }
        if self.status != GameStatus::AwaitingComputerMove {
            return Err(InvalidMove::NotYourTurn {
                expected: Mark::PLAYER,
                found: Mark::COMPUTER,
            });
        }

        let slot = calculate_move(self.difficulty, &self.board, rng).ok_or(InvalidMove::GameOver)?;
        self.place_mark(slot, Mark::COMPUTER)?;
        Ok(slot)
    }

    /// Applies `mark` at `slot` if it is that mark's turn. On error nothing changes.
    pub fn place_mark(&mut self, slot: usize, mark: Mark) -> Result<GameStatus, InvalidMove> {
        let Some(expected) = self.status.mark_to_move() else {
            return Err(InvalidMove::GameOver);
        };
        if mark != expected {
            return Err(InvalidMove::NotYourTurn { expected, found: mark });
        }

        self.board.apply(slot, mark)?;
        self.last_move = Some(slot);

        self.status = match evaluate(&self.board).to_result() {
            Some(result) => GameStatus::GameOver(result),
            None if mark == Mark::PLAYER => GameStatus::AwaitingComputerMove,
            None => GameStatus::AwaitingPlayerMove,
        };

        Ok(self.status)
    }
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new(Difficulty::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::{ScriptedRandom, SessionRng};
    use crate::games::tictactoe::GameResult;

    fn state_with_moves(moves: &[usize]) -> TicTacToeGameState {
        let mut state = TicTacToeGameState::new(Difficulty::Hard);
        for (i, &slot) in moves.iter().enumerate() {
            let mark = if i % 2 == 0 { Mark::X } else { Mark::O };
            state.place_mark(slot, mark).unwrap();
        }
        state
    }

    #[test]
    fn test_initial_state() {
        let state = TicTacToeGameState::default();
        assert_eq!(state.status(), GameStatus::AwaitingPlayerMove);
        assert_eq!(state.difficulty(), Difficulty::Hard);
        assert_eq!(*state.board(), Board::new());
        assert_eq!(state.last_move(), None);
        assert_eq!(state.winning_line(), None);
    }

    #[test]
    fn test_player_move_hands_turn_to_computer() {
        let mut state = TicTacToeGameState::new(Difficulty::Easy);
        assert_eq!(state.place_player_mark(4), Ok(GameStatus::AwaitingComputerMove));
        assert_eq!(state.board().get(4), Some(Mark::X));
        assert_eq!(state.last_move(), Some(4));
    }

    #[test]
    fn test_player_cannot_move_during_computer_turn() {
        let mut state = TicTacToeGameState::new(Difficulty::Easy);
        state.place_player_mark(4).unwrap();
        let before = state.snapshot();
        assert_eq!(
            state.place_player_mark(0),
            Err(InvalidMove::NotYourTurn { expected: Mark::O, found: Mark::X })
        );
        assert_eq!(state.snapshot(), before);
    }

    #[test]
    fn test_occupied_slot_rejection_does_not_mutate() {
        let mut state = state_with_moves(&[4, 0]);
        let before = state.snapshot();
        assert_eq!(state.place_player_mark(0), Err(InvalidMove::SlotOccupied(0)));
        assert_eq!(state.place_player_mark(4), Err(InvalidMove::SlotOccupied(4)));
        assert_eq!(state.snapshot(), before);
        assert_eq!(state.status(), GameStatus::AwaitingPlayerMove);
    }

    #[test]
    fn test_win_ends_game_and_reports_line() {
        let mut state = state_with_moves(&[0, 3, 1, 4]);
        assert_eq!(state.place_player_mark(2), Ok(GameStatus::GameOver(GameResult::Win(Mark::X))));
        assert_eq!(state.winning_line(), Some(WinningLine::new(Mark::X, [0, 1, 2])));
        assert_eq!(state.snapshot().status_text(), "X wins!");
    }

    #[test]
    fn test_moves_rejected_after_game_over() {
        let mut state = state_with_moves(&[0, 3, 1, 4, 2]);
        let before = state.snapshot();
        assert_eq!(state.place_player_mark(8), Err(InvalidMove::GameOver));
        assert_eq!(state.place_mark(8, Mark::O), Err(InvalidMove::GameOver));
        let mut rng = SessionRng::new(3);
        assert_eq!(state.play_computer_turn(&mut rng), Err(InvalidMove::GameOver));
        assert_eq!(state.snapshot(), before);
    }

    #[test]
    fn test_full_board_without_line_is_a_tie() {
        let mut state = state_with_moves(&[0, 1, 2, 4, 3, 5, 7, 6]);
        assert_eq!(state.place_player_mark(8), Ok(GameStatus::GameOver(GameResult::Tie)));
        assert_eq!(state.winning_line(), None);
        assert_eq!(state.snapshot().status_text(), "It's a tie!");
    }

    #[test]
    fn test_computer_turn_applies_policy_move() {
        let mut state = TicTacToeGameState::new(Difficulty::Hard);
        state.place_player_mark(0).unwrap();
        let mut rng = ScriptedRandom::new(&[0.0]);
        assert_eq!(state.play_computer_turn(&mut rng), Ok(4));
        assert_eq!(state.board().get(4), Some(Mark::O));
        assert_eq!(state.status(), GameStatus::AwaitingPlayerMove);
    }

    #[test]
    fn test_computer_turn_rejected_on_player_turn() {
        let mut state = TicTacToeGameState::new(Difficulty::Hard);
        let mut rng = ScriptedRandom::new(&[0.0]);
        assert!(matches!(state.play_computer_turn(&mut rng), Err(InvalidMove::NotYourTurn { .. })));
        assert_eq!(*state.board(), Board::new());
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut state = state_with_moves(&[0, 4, 8]);
        state.reset();
        let once = state.snapshot();
        state.reset();
        assert_eq!(state.snapshot(), once);
        assert_eq!(once.board, Board::new());
        assert_eq!(once.status, GameStatus::AwaitingPlayerMove);
        assert_eq!(once.last_move, None);
    }

    #[test]
    fn test_reset_from_game_over() {
        let mut state = state_with_moves(&[0, 3, 1, 4, 2]);
        let generation = state.generation();
        state.reset();
        assert_eq!(state.status(), GameStatus::AwaitingPlayerMove);
        assert_eq!(state.generation(), generation + 1);
        assert_eq!(state.place_player_mark(2), Ok(GameStatus::AwaitingComputerMove));
    }

    #[test]
    fn test_difficulty_change_resets() {
        let mut state = state_with_moves(&[0, 4]);
        state.set_difficulty(Difficulty::Easy);
        assert_eq!(state.difficulty(), Difficulty::Easy);
        assert_eq!(*state.board(), Board::new());
        assert_eq!(state.status(), GameStatus::AwaitingPlayerMove);
    }

    #[test]
    fn test_marks_alternate_starting_with_player() {
        for seed in 0..20 {
            let mut state = TicTacToeGameState::new(Difficulty::Easy);
            let mut rng = SessionRng::new(seed);
            let mut previous = state.snapshot().board;
            let mut expected = Mark::X;

            while !state.status().is_game_over() {
                if state.status() == GameStatus::AwaitingPlayerMove {
                    let empty = state.board().available_moves();
                    let slot = empty[rng.pick_index(empty.len())];
                    state.place_player_mark(slot).unwrap();
                } else {
                    state.play_computer_turn(&mut rng).unwrap();
                }

                let slot = state.last_move().unwrap();
                assert_eq!(previous.get(slot), Some(Mark::Empty));
                assert_eq!(state.board().get(slot), Some(expected));
                assert_eq!(state.board().marked_count(), previous.marked_count() + 1);
                previous = *state.board();
                expected = expected.opponent().unwrap();
            }
        }
    }
}
