mod command;
mod console_broadcaster;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tictactoe_engine::config::{ConfigManager, EngineConfig, FileContentConfigProvider};
use tictactoe_engine::games::SessionRng;
use tictactoe_engine::games::tictactoe::{Difficulty, TicTacToeSession, TicTacToeSessionSettings};
use tictactoe_engine::{SessionId, log, logger};

use command::{ConsoleCommand, help_text, parse_command};
use console_broadcaster::ConsoleBroadcaster;

#[derive(Parser)]
#[command(name = "tictactoe_client", about = "Play tic-tac-toe against a minimax opponent")]
struct Args {
    /// YAML config file. Created on the first difficulty change if missing.
    #[arg(long, default_value = "tictactoe.yaml")]
    config: String,

    /// Overrides the configured difficulty for this run.
    #[arg(long)]
    difficulty: Option<Difficulty>,

    /// Seed for the computer's randomness. Random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager: ConfigManager<FileContentConfigProvider, EngineConfig> =
        ConfigManager::from_yaml_file(&args.config);
    let mut config = config_manager.get_config()?;
    if let Some(difficulty) = args.difficulty {
        config.difficulty = difficulty;
    }

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Starting game with seed {}", rng.seed());

    let session = TicTacToeSession::new(
        SessionId::generate(),
        TicTacToeSessionSettings::from(&config),
        rng,
        ConsoleBroadcaster::new(),
    );

    println!("{}", help_text());
    session.broadcast_current_state().await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        match parse_command(&line) {
            Ok(ConsoleCommand::PlaceMark { slot }) => {
                if let Err(e) = session.on_player_move(slot).await {
                    println!("{}", e);
                }
            }
            Ok(ConsoleCommand::Reset) => session.on_reset().await,
            Ok(ConsoleCommand::SetDifficulty(difficulty)) => {
                session.on_difficulty_changed(difficulty).await;
                config.difficulty = difficulty;
                if let Err(e) = config_manager.set_config(&config) {
                    log!("Failed to save config: {}", e);
                }
            }
            Ok(ConsoleCommand::Help) => println!("{}", help_text()),
            Ok(ConsoleCommand::Quit) => break,
            Err(e) => println!("{}", e),
        }
    }

    log!("Session {} closed", session.session_id());
    Ok(())
}
