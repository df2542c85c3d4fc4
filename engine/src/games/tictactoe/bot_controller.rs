use crate::defaults::MEDIUM_RANDOM_MOVE_CHANCE;
use crate::games::RandomSource;
use super::board::Board;
use super::types::{Difficulty, Mark, Outcome};
use super::win_detector::{check_win_with_line, evaluate};

/// Terminal score of a computer win. A player win scores the negation, a tie zero.
pub const WIN_SCORE: i32 = 10;

/// Picks the computer's move for `difficulty`. Must only be called on an undecided board.
pub fn calculate_move<R: RandomSource + ?Sized>(
    difficulty: Difficulty,
    board: &Board,
    rng: &mut R,
) -> Option<usize> {
    let outcome = evaluate(board);
    debug_assert!(!outcome.is_decided(), "calculate_move called on a finished game");
    if outcome.is_decided() {
        return None;
    }

    match difficulty {
        Difficulty::Easy => random_move(board, rng),
        Difficulty::Medium => {
            if rng.next_f64() < MEDIUM_RANDOM_MOVE_CHANCE {
                random_move(board, rng)
            } else {
                best_move(board, Mark::COMPUTER)
            }
        }
        Difficulty::Hard => best_move(board, Mark::COMPUTER),
    }
}

pub fn random_move<R: RandomSource + ?Sized>(board: &Board, rng: &mut R) -> Option<usize> {
    let available_moves = board.available_moves();
    if available_moves.is_empty() {
        return None;
    }
    let idx = rng.pick_index(available_moves.len());
    Some(available_moves[idx])
}

/// Minimax choice for `side`. O maximizes, X minimizes.
///
/// An immediate win is always taken. Otherwise slots are tried in ascending order and a
/// candidate replaces the current best only on a strictly better score, so the lowest slot
/// wins among equals. Returns `None` on a full or decided board.
pub fn best_move(board: &Board, side: Mark) -> Option<usize> {
    if side == Mark::Empty || evaluate(board).is_decided() {
        return None;
    }

    let mut board = *board;
    let available_moves = board.available_moves();

    if let Some(slot) = find_winning_move(&mut board, side, &available_moves) {
        return Some(slot);
    }

    let is_maximizing = side == Mark::COMPUTER;
    let mut best_move = None;
    let mut best_score = if is_maximizing { i32::MIN } else { i32::MAX };
    let mut alpha = i32::MIN;
    let mut beta = i32::MAX;

    for slot in available_moves {
        board.place(slot, side);
        let score = minimax(&mut board, !is_maximizing, alpha, beta);
        board.clear(slot);

        if is_maximizing {
            if score > best_score {
                best_score = score;
                best_move = Some(slot);
            }
            alpha = alpha.max(score);
        } else {
            if score < best_score {
                best_score = score;
                best_move = Some(slot);
            }
            beta = beta.min(score);
        }
    }

    best_move
}

/// Game-theoretic value of `board` with `side_to_move` to play, from the computer's view.
pub fn position_value(board: &Board, side_to_move: Mark) -> i32 {
    let mut board = *board;
    minimax(&mut board, side_to_move == Mark::COMPUTER, i32::MIN, i32::MAX)
}

fn find_winning_move(board: &mut Board, mark: Mark, moves: &[usize]) -> Option<usize> {
    for &slot in moves {
        board.place(slot, mark);
        let winner = check_win_with_line(board).map(|line| line.mark);
        board.clear(slot);

        if winner == Some(mark) {
            return Some(slot);
        }
    }
    None
}

fn terminal_score(board: &Board) -> Option<i32> {
    match evaluate(board) {
        Outcome::Undecided => None,
        Outcome::Tie => Some(0),
        Outcome::Win(mark) if mark == Mark::COMPUTER => Some(WIN_SCORE),
        Outcome::Win(_) => Some(-WIN_SCORE),
    }
}

fn minimax(board: &mut Board, is_maximizing: bool, mut alpha: i32, mut beta: i32) -> i32 {
    if let Some(score) = terminal_score(board) {
        return score;
    }

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for slot in board.available_moves() {
            board.place(slot, Mark::COMPUTER);
            let eval = minimax(board, false, alpha, beta);
            board.clear(slot);

            max_eval = max_eval.max(eval);
            alpha = alpha.max(eval);
            if beta <= alpha {
                break;
            }
        }
        max_eval
    } else {
        let mut min_eval = i32::MAX;
        for slot in board.available_moves() {
            board.place(slot, Mark::PLAYER);
            let eval = minimax(board, true, alpha, beta);
            board.clear(slot);

            min_eval = min_eval.min(eval);
            beta = beta.min(eval);
            if beta <= alpha {
                break;
            }
        }
        min_eval
    }
}
