mod board;
mod bot_controller;
mod game_state;
mod session;
mod settings;
mod types;
mod win_detector;

pub use board::{Board, BOARD_SIZE};
pub use bot_controller::{best_move, calculate_move, position_value, random_move, WIN_SCORE};
pub use game_state::{GameSnapshot, TicTacToeGameState};
pub use session::TicTacToeSession;
pub use settings::TicTacToeSessionSettings;
pub use types::{Difficulty, GameResult, GameStatus, InvalidMove, Mark, Outcome, WinningLine};
pub use win_detector::{check_win_with_line, evaluate, LINES};
