use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    /// The human side. Always moves first.
    pub const PLAYER: Mark = Mark::X;
    /// The computer side.
    pub const COMPUTER: Mark = Mark::O;

    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Mark::Empty => ' ',
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Evaluation of a board. Derived on demand, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Undecided,
    Win(Mark),
    Tie,
}

impl Outcome {
    pub fn is_decided(&self) -> bool {
        !matches!(self, Outcome::Undecided)
    }

    pub fn to_result(self) -> Option<GameResult> {
        match self {
            Outcome::Undecided => None,
            Outcome::Win(mark) => Some(GameResult::Win(mark)),
            Outcome::Tie => Some(GameResult::Tie),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    Win(Mark),
    Tie,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    AwaitingPlayerMove,
    AwaitingComputerMove,
    GameOver(GameResult),
}

impl GameStatus {
    /// Mark expected to move next, `None` once the game is over.
    pub fn mark_to_move(&self) -> Option<Mark> {
        match self {
            GameStatus::AwaitingPlayerMove => Some(Mark::PLAYER),
            GameStatus::AwaitingComputerMove => Some(Mark::COMPUTER),
            GameStatus::GameOver(_) => None,
        }
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self, GameStatus::GameOver(_))
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::AwaitingPlayerMove => write!(f, "Turn of {}", Mark::PLAYER),
            GameStatus::AwaitingComputerMove => write!(f, "Turn of {}", Mark::COMPUTER),
            GameStatus::GameOver(GameResult::Win(mark)) => write!(f, "{} wins!", mark),
            GameStatus::GameOver(GameResult::Tie) => write!(f, "It's a tie!"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    #[default]
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("Unknown difficulty '{}', expected easy, medium or hard", other)),
        }
    }
}

/// A completed line: the mark that owns it and its three slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub cells: [usize; 3],
}

impl WinningLine {
    pub fn new(mark: Mark, cells: [usize; 3]) -> Self {
        Self { mark, cells }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMove {
    SlotOutOfRange(usize),
    SlotOccupied(usize),
    NotYourTurn { expected: Mark, found: Mark },
    GameOver,
}

impl fmt::Display for InvalidMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidMove::SlotOutOfRange(slot) => write!(f, "Slot {} is out of range", slot),
            InvalidMove::SlotOccupied(slot) => write!(f, "Slot {} is already marked", slot),
            InvalidMove::NotYourTurn { expected, found } => {
                write!(f, "Not {}'s turn, {} is to move", found, expected)
            }
            InvalidMove::GameOver => write!(f, "Game is already over"),
        }
    }
}

impl std::error::Error for InvalidMove {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text() {
        assert_eq!(GameStatus::AwaitingPlayerMove.to_string(), "Turn of X");
        assert_eq!(GameStatus::AwaitingComputerMove.to_string(), "Turn of O");
        assert_eq!(GameStatus::GameOver(GameResult::Win(Mark::O)).to_string(), "O wins!");
        assert_eq!(GameStatus::GameOver(GameResult::Tie).to_string(), "It's a tie!");
    }

    #[test]
    fn test_mark_to_move() {
        assert_eq!(GameStatus::AwaitingPlayerMove.mark_to_move(), Some(Mark::X));
        assert_eq!(GameStatus::AwaitingComputerMove.mark_to_move(), Some(Mark::O));
        assert_eq!(GameStatus::GameOver(GameResult::Tie).mark_to_move(), None);
    }

    #[test]
    fn test_difficulty_parsing() {
        assert_eq!("Easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!(" medium ".parse::<Difficulty>(), Ok(Difficulty::Medium));
        assert_eq!("HARD".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert!("nightmare".parse::<Difficulty>().is_err());
        for difficulty in Difficulty::ALL {
            assert_eq!(difficulty.as_str().parse::<Difficulty>(), Ok(difficulty));
        }
    }

    #[test]
    fn test_default_difficulty_is_hard() {
        assert_eq!(Difficulty::default(), Difficulty::Hard);
    }

    #[test]
    fn test_outcome_to_result() {
        assert_eq!(Outcome::Undecided.to_result(), None);
        assert_eq!(Outcome::Tie.to_result(), Some(GameResult::Tie));
        assert_eq!(Outcome::Win(Mark::X).to_result(), Some(GameResult::Win(Mark::X)));
        assert!(!Outcome::Undecided.is_decided());
    }
}
