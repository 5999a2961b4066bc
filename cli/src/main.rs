mod board_view;
mod config;
mod input;

use std::io::{self, BufRead, Write};
use std::time::Duration;

use clap::Parser;
use engine::config::ConfigManager;
use engine::games::SessionRng;
use engine::games::tictactoe::{
    Difficulty, GameStatus, Mark, TicTacToeGameState, choose_move, winning_line,
};
use engine::{log, logger};

use config::GameConfig;

#[derive(Parser)]
#[command(name = "tictactoe")]
struct Args {
    /// Bot difficulty: easy, medium, hard or insane
    #[arg(long)]
    difficulty: Option<String>,

    /// RNG seed for reproducible bot behavior
    #[arg(long)]
    seed: Option<u64>,

    /// Path to the YAML config file
    #[arg(long, default_value = "tictactoe.yaml")]
    config: String,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("TicTacToe".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager: ConfigManager<GameConfig> = ConfigManager::from_yaml_file(&args.config);
    let mut config = config_manager.get_config()?;

    if let Some(difficulty) = args.difficulty.as_deref() {
        config.difficulty = difficulty.parse::<Difficulty>()?;
    }

    let mut rng = match args.seed.or(config.seed) {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };

    log!(
        "Starting game: difficulty={}, seed={}",
        config.difficulty,
        rng.seed()
    );

    println!("You are X, the bot is O. Cells are numbered 1-9.");

    loop {
        play_match(&config, &mut rng)?;
        if !ask_rematch()? {
            break;
        }
    }

    Ok(())
}

fn play_match(config: &GameConfig, rng: &mut SessionRng) -> Result<(), Box<dyn std::error::Error>> {
    let mut state = TicTacToeGameState::new();
    println!("\n{}", board_view::render(&state.board, None));

    while state.status == GameStatus::InProgress {
        if state.current_mark == Mark::X {
            let index = input::read_player_move(&state.board)?;
            state.place_mark(Mark::X, index)?;
        } else {
            // Paces the bot's reveal; input is not read until the mark
            // has been applied and printed.
            std::thread::sleep(Duration::from_millis(config.bot_delay_ms));
            let index = choose_move(&state.board, config.difficulty, rng)?;
            state.place_mark(Mark::O, index)?;
            if let Some(cell) = state.last_move {
                println!("Bot plays cell {}", cell + 1);
            }
        }

        let line = winning_line(&state.board);
        println!("\n{}", board_view::render(&state.board, line.as_ref()));
    }

    match state.status {
        GameStatus::XWon => println!("You win!"),
        GameStatus::OWon => println!("Bot wins."),
        GameStatus::Draw => println!("It's a tie."),
        GameStatus::InProgress => unreachable!(),
    }

    Ok(())
}

fn ask_rematch() -> Result<bool, Box<dyn std::error::Error>> {
    print!("Play again? (y/n): ");
    io::stdout().flush()?;

    let mut line = String::new();
    let bytes_read = io::stdin().lock().read_line(&mut line)?;
    if bytes_read == 0 {
        return Ok(false);
    }

    Ok(matches!(line.trim(), "y" | "Y" | "yes"))
}
