use tictactoe_engine::games::tictactoe::{Difficulty, BOARD_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    PlaceMark { slot: usize },
    Reset,
    SetDifficulty(Difficulty),
    Help,
    Quit,
}

/// Parses one input line. Slots are typed 1-9 and returned 0-based.
pub fn parse_command(line: &str) -> Result<ConsoleCommand, String> {
    let mut parts = line.split_whitespace();
    let Some(head) = parts.next() else {
        return Err("Empty command, type 'help' for usage".to_string());
    };

    if let Ok(number) = head.parse::<usize>() {
        if (1..=BOARD_SIZE).contains(&number) {
            return Ok(ConsoleCommand::PlaceMark { slot: number - 1 });
        }
        return Err(format!("Cell must be between 1 and {}", BOARD_SIZE));
    }

    match head.to_ascii_lowercase().as_str() {
        "r" | "reset" => Ok(ConsoleCommand::Reset),
        "d" | "difficulty" => {
            let value = parts
                .next()
                .ok_or_else(|| "Usage: difficulty <easy|medium|hard>".to_string())?;
            Ok(ConsoleCommand::SetDifficulty(value.parse()?))
        }
        "h" | "help" | "?" => Ok(ConsoleCommand::Help),
        "q" | "quit" | "exit" => Ok(ConsoleCommand::Quit),
        other => Err(format!("Unknown command '{}', type 'help' for usage", other)),
    }
}

pub fn help_text() -> &'static str {
    "Commands:\n  \
     1-9                     place your mark (X) in that cell\n  \
     r, reset                start a new game\n  \
     d, difficulty <level>   easy, medium or hard (starts a new game)\n  \
     h, help                 show this help\n  \
     q, quit                 exit"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cell_numbers() {
        assert_eq!(parse_command("1"), Ok(ConsoleCommand::PlaceMark { slot: 0 }));
        assert_eq!(parse_command(" 9 "), Ok(ConsoleCommand::PlaceMark { slot: 8 }));
        assert!(parse_command("0").is_err());
        assert!(parse_command("10").is_err());
    }

    #[test]
    fn test_parse_keywords() {
        assert_eq!(parse_command("r"), Ok(ConsoleCommand::Reset));
        assert_eq!(parse_command("RESET"), Ok(ConsoleCommand::Reset));
        assert_eq!(parse_command("help"), Ok(ConsoleCommand::Help));
        assert_eq!(parse_command("q"), Ok(ConsoleCommand::Quit));
    }

    #[test]
    fn test_parse_difficulty() {
        assert_eq!(
            parse_command("difficulty easy"),
            Ok(ConsoleCommand::SetDifficulty(Difficulty::Easy))
        );
        assert_eq!(
            parse_command("d Medium"),
            Ok(ConsoleCommand::SetDifficulty(Difficulty::Medium))
        );
        assert!(parse_command("d").is_err());
        assert!(parse_command("d brutal").is_err());
    }

    #[test]
    fn test_parse_garbage() {
        assert!(parse_command("").is_err());
        assert!(parse_command("move 3").is_err());
    }
}
