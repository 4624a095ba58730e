//! Command grammar for the interactive shell
//!
//! One command per line, whitespace-delimited tokens. Team names are single
//! tokens here; multi-word names are reachable through the library API only.

/// A parsed shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start { home: String, away: String },
    Update { home: String, away: String, home_score: i32, away_score: i32 },
    Finish { home: String, away: String },
    Summary,
    Exit,
}

/// Why a line could not be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Empty or whitespace-only line; nothing to do.
    Empty,
    /// Wrong token count or non-numeric score; carries the usage string.
    Usage(&'static str),
    Unknown(String),
}

const USAGE_START: &str = "usage: start <homeTeam> <awayTeam>";
const USAGE_UPDATE: &str = "usage: update <homeTeam> <awayTeam> <homeScore> <awayScore>";
const USAGE_FINISH: &str = "usage: finish <homeTeam> <awayTeam>";

/// Parse one input line into a command
pub fn parse_line(line: &str) -> Result<Command, ParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&command, args)) = tokens.split_first() else {
        return Err(ParseError::Empty);
    };

    match command.to_lowercase().as_str() {
        "start" => match args {
            [home, away] => Ok(Command::Start {
                home: home.to_string(),
                away: away.to_string(),
            }),
            _ => Err(ParseError::Usage(USAGE_START)),
        },
        "update" => match args {
            [home, away, hs, aws] => {
                let home_score = hs.parse().map_err(|_| ParseError::Usage(USAGE_UPDATE))?;
                let away_score = aws.parse().map_err(|_| ParseError::Usage(USAGE_UPDATE))?;
                Ok(Command::Update {
                    home: home.to_string(),
                    away: away.to_string(),
                    home_score,
                    away_score,
                })
            }
            _ => Err(ParseError::Usage(USAGE_UPDATE)),
        },
        "finish" => match args {
            [home, away] => Ok(Command::Finish {
                home: home.to_string(),
                away: away.to_string(),
            }),
            _ => Err(ParseError::Usage(USAGE_FINISH)),
        },
        "summary" => Ok(Command::Summary),
        "exit" => Ok(Command::Exit),
        other => Err(ParseError::Unknown(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_start() {
        assert_eq!(
            parse_line("start Germany Poland"),
            Ok(Command::Start {
                home: "Germany".to_string(),
                away: "Poland".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_update() {
        assert_eq!(
            parse_line("update Germany Poland 3 1"),
            Ok(Command::Update {
                home: "Germany".to_string(),
                away: "Poland".to_string(),
                home_score: 3,
                away_score: 1,
            })
        );
    }

    #[test]
    fn test_parse_update_negative_score_token() {
        // Negative numbers parse here; the registry rejects them.
        assert_eq!(
            parse_line("update Germany Poland -1 0"),
            Ok(Command::Update {
                home: "Germany".to_string(),
                away: "Poland".to_string(),
                home_score: -1,
                away_score: 0,
            })
        );
    }

    #[test]
    fn test_parse_finish_summary_exit() {
        assert_eq!(
            parse_line("finish Germany Poland"),
            Ok(Command::Finish {
                home: "Germany".to_string(),
                away: "Poland".to_string(),
            })
        );
        assert_eq!(parse_line("summary"), Ok(Command::Summary));
        assert_eq!(parse_line("exit"), Ok(Command::Exit));
    }

    #[test]
    fn test_commands_are_case_insensitive() {
        assert_eq!(parse_line("SUMMARY"), Ok(Command::Summary));
        assert_eq!(parse_line("Exit"), Ok(Command::Exit));
    }

    #[test]
    fn test_wrong_arity_yields_usage() {
        assert_eq!(parse_line("start Germany"), Err(ParseError::Usage(USAGE_START)));
        assert_eq!(
            parse_line("start Germany Poland Extra"),
            Err(ParseError::Usage(USAGE_START))
        );
        assert_eq!(
            parse_line("update Germany Poland 3"),
            Err(ParseError::Usage(USAGE_UPDATE))
        );
        assert_eq!(parse_line("finish"), Err(ParseError::Usage(USAGE_FINISH)));
    }

    #[test]
    fn test_non_numeric_score_yields_usage() {
        assert_eq!(
            parse_line("update Germany Poland three 1"),
            Err(ParseError::Usage(USAGE_UPDATE))
        );
    }

    #[test]
    fn test_empty_and_unknown() {
        assert_eq!(parse_line(""), Err(ParseError::Empty));
        assert_eq!(parse_line("   "), Err(ParseError::Empty));
        assert_eq!(
            parse_line("restart Germany Poland"),
            Err(ParseError::Unknown("restart".to_string()))
        );
    }
}
