use tictactoe_engine::games::GameBroadcaster;
use tictactoe_engine::games::tictactoe::{GameSnapshot, Mark};

/// Prints every snapshot to stdout.
#[derive(Clone, Default)]
pub struct ConsoleBroadcaster;

impl ConsoleBroadcaster {
    pub fn new() -> Self {
        Self
    }
}

impl GameBroadcaster for ConsoleBroadcaster {
    async fn broadcast_state(&self, snapshot: GameSnapshot) {
        println!("{}", render_snapshot(&snapshot));
    }
}

pub fn render_snapshot(snapshot: &GameSnapshot) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(&snapshot.board.to_string());
    out.push_str("\n\n");

    if let Some(line) = snapshot.winning_line {
        let cells: Vec<String> = line.cells.iter().map(|slot| (slot + 1).to_string()).collect();
        out.push_str(&format!("Winning line: {}\n", cells.join("-")));
    }

    if let Some(slot) = snapshot.last_move {
        if let Some(mark) = snapshot.board.get(slot).filter(|&m| m != Mark::Empty) {
            out.push_str(&format!("Last move: {} at {}\n", mark, slot + 1));
        }
    }

    out.push_str(&format!("{} [difficulty: {}]", snapshot.status, snapshot.difficulty));
    out
}
