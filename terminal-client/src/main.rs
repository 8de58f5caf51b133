mod config;
mod render;

use std::io::{self, BufRead, Write};
use std::time::Duration;

use clap::{Parser, ValueEnum};
use tictactoe_core::engine::{Difficulty, GameMode, Mark, MatchSession};
use tictactoe_core::{SessionRng, log, logger};

use config::{CONFIG_FILE, Config, ModeKind, get_config_manager};
use render::{render_board, render_scoreboard, render_status};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    Pvp,
    Ai,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum DifficultyArg {
    Easy,
    Medium,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum MarkArg {
    X,
    O,
}

impl From<MarkArg> for Mark {
    fn from(arg: MarkArg) -> Self {
        match arg {
            MarkArg::X => Mark::X,
            MarkArg::O => Mark::O,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe_terminal", about = "Play tic-tac-toe in the terminal")]
struct Args {
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    #[arg(long, value_enum)]
    difficulty: Option<DifficultyArg>,

    #[arg(long, value_enum)]
    computer_mark: Option<MarkArg>,

    #[arg(long, default_value = CONFIG_FILE)]
    config: String,

    #[arg(long)]
    use_log_prefix: bool,
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Cell(usize),
    Restart,
    ToggleMode,
    Quit,
    Unknown,
}

fn parse_command(line: &str) -> Command {
    match line.trim() {
        "q" | "quit" => Command::Quit,
        "r" | "restart" => Command::Restart,
        "m" | "mode" => Command::ToggleMode,
        other => match other.parse::<usize>() {
            Ok(n @ 1..=9) => Command::Cell(n - 1),
            _ => Command::Unknown,
        },
    }
}

fn apply_args(mut config: Config, args: &Args) -> Config {
    if let Some(mode) = args.mode {
        config.game.mode = match mode {
            ModeArg::Pvp => ModeKind::TwoPlayer,
            ModeArg::Ai => ModeKind::VsComputer,
        };
    }
    if let Some(difficulty) = args.difficulty {
        config.game.difficulty = difficulty.into();
    }
    if let Some(mark) = args.computer_mark {
        config.game.computer_mark = mark.into();
    }
    if args.use_log_prefix {
        config.log.use_prefix = true;
    }
    config
}

fn toggled_mode(current: GameMode, config: &Config) -> GameMode {
    match current {
        GameMode::TwoPlayer => GameMode::VsComputer {
            difficulty: config.game.difficulty,
            computer_mark: config.game.computer_mark,
        },
        GameMode::VsComputer { .. } => GameMode::TwoPlayer,
    }
}

fn print_table(session: &MatchSession) {
    println!();
    println!("{}", render_board(session.state()));
    println!("{}", render_status(session.state(), session.mode()));
    println!("{}", render_scoreboard(&session.scoreboard()));
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = get_config_manager(&args.config).get_config()?;
    let config = apply_args(config, &args);

    let prefix = if config.log.use_prefix {
        Some("TicTacToe".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let rng = SessionRng::from_random();
    log!("Starting session with seed {}", rng.seed());
    let mut session = MatchSession::new(config.game.game_mode(), rng);
    let thinking_delay = Duration::from_millis(config.game.thinking_delay_ms as u64);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    print_table(&session);
    loop {
        if session.is_computer_turn() {
            std::thread::sleep(thinking_delay);
            let (index, _) = session.play_computer()?;
            println!("Computer plays {}", index + 1);
            print_table(&session);
            continue;
        }

        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };

        match parse_command(&line?) {
            Command::Quit => break,
            Command::Restart => {
                session.restart();
                print_table(&session);
            }
            Command::ToggleMode => {
                let mode = toggled_mode(session.mode(), &config);
                session.change_mode(mode);
                log!("Mode changed to {:?}", mode);
                print_table(&session);
            }
            Command::Cell(index) => match session.play_human(index) {
                Ok(_) => print_table(&session),
                Err(err) => println!("Rejected: {}", err),
            },
            Command::Unknown => println!("Enter 1-9 to play, r to restart, m to switch mode, q to quit"),
        }
    }

    println!("{}", render_scoreboard(&session.scoreboard()));
    Ok(())
}
