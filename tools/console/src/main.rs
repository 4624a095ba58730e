mod command;

use command::{parse_line, Command, ParseError};
use scoreboard::ScoreBoard;
use std::io::{self, BufRead, Write};

fn main() -> Result<(), anyhow::Error> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    tracing::info!("Starting scoreboard console");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut board = ScoreBoard::new();

    println!("Live Scoreboard console");
    println!("commands: start <home> <away> | update <home> <away> <hs> <as> | finish <home> <away> | summary | exit");

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF behaves like exit.
            break;
        }

        match parse_line(&line) {
            Ok(Command::Start { home, away }) => match board.start_match(&home, &away) {
                Ok(()) => println!("Match started!"),
                Err(e) => println!("Error: {e}"),
            },
            Ok(Command::Update { home, away, home_score, away_score }) => {
                match board.update_score(&home, &away, home_score, away_score) {
                    Ok(()) => println!("Score updated!"),
                    Err(e) => println!("Error: {e}"),
                }
            }
            Ok(Command::Finish { home, away }) => match board.finish_match(&home, &away) {
                Ok(()) => println!("Match finished!"),
                Err(e) => println!("Error: {e}"),
            },
            Ok(Command::Summary) => {
                for entry in board.summary() {
                    println!(
                        "{} {} - {} {}",
                        entry.home_team, entry.home_score, entry.away_score, entry.away_team
                    );
                }
            }
            Ok(Command::Exit) => break,
            Err(ParseError::Empty) => {}
            Err(ParseError::Usage(usage)) => println!("{usage}"),
            Err(ParseError::Unknown(cmd)) => println!("Unknown command: {cmd}"),
        }
    }

    tracing::info!("Exiting");
    Ok(())
}
