use clap::Parser;
use minesweeper_rules::{Action, Game, GameConfig, GameError, Outcome, Position};
use std::io::{self, Write};

#[derive(Parser, Debug)]
#[command(version, about = "Play Minesweeper in the terminal")]
struct Options {
    /// Grid height
    #[arg(long, env = "MINESWEEPER_ROWS", default_value_t = 16)]
    rows: usize,

    /// Grid width
    #[arg(long, env = "MINESWEEPER_COLS", default_value_t = 16)]
    cols: usize,

    /// Number of mines, must be below rows * cols
    #[arg(long, env = "MINESWEEPER_MINES", default_value_t = 30)]
    mines: usize,
}

fn main() {
    env_logger::init();
    let options = Options::parse();

    match run_game(options) {
        Ok(_) => println!("Thanks for playing!"),
        Err(e) => eprintln!("Game error: {}", e),
    }
}

fn run_game(options: Options) -> Result<(), GameError> {
    let config = GameConfig::new(options.rows, options.cols, options.mines)?;
    let mut game = Game::new(config)?;

    loop {
        while !game.outcome().is_finished() {
            print_board(&game);

            let Some(command) = get_user_input() else {
                continue;
            };
            match command {
                Command::Quit => return Ok(()),
                Command::Reset => game.reset()?,
                Command::Play(pos, action) => {
                    if let Err(e) = game.perform_action(pos, action) {
                        println!("Error: {}", e);
                    }
                }
            }
        }

        print_board(&game);
        match game.outcome() {
            Outcome::Won => println!("Congratulations! You won!"),
            Outcome::Lost => println!("Game Over!"),
            Outcome::InProgress => unreachable!(),
        }

        print!("Play again? [y/N]: ");
        io::stdout().flush().ok();
        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() || !input.trim().eq_ignore_ascii_case("y") {
            return Ok(());
        }
        game.reset()?;
    }
}

fn print_board(game: &Game) {
    let board = game.board();
    let (rows, cols) = game.dimensions();

    println!("Flags left: {}", game.remaining_flags());

    // Print column numbers
    print!("    ");
    for col in 0..cols {
        print!("{:>2} ", col);
    }
    println!();

    // Print rows
    for row in 0..rows {
        print!("{:>2}  ", row);
        for col in 0..cols {
            print!("{:>2} ", board[Position::new(row, col)]);
        }
        println!();
    }
}

enum Command {
    Play(Position, Action),
    Reset,
    Quit,
}

fn get_user_input() -> Option<Command> {
    print!("Enter command (row col [r/f], 'n' for new game, 'q' to quit): ");
    io::stdout().flush().ok()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input).ok()? == 0 {
        return Some(Command::Quit);
    }

    let mut parts = input.split_whitespace();
    let first = parts.next()?;

    match first {
        "q" => return Some(Command::Quit),
        "n" => return Some(Command::Reset),
        _ => {}
    }

    let row = first.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    let action = match parts.next().and_then(|s| s.chars().next()).unwrap_or('r') {
        'r' => Action::Reveal,
        'f' => Action::Flag,
        _ => {
            println!("Invalid action. Use 'r' to reveal or 'f' to flag");
            return None;
        }
    };

    Some(Command::Play(Position::new(row, col), action))
}
