//! Command processor: tokenizes raw text lines, validates arguments, and
//! dispatches to a [`SafeRobot`].
//!
//! The entry point is [`CommandProcessor::process_line`]. Recognized keywords
//! are `place`, `move`, `left`, `right` and `report`, matched
//! case-insensitively; only `place` takes arguments.

use crate::safe::{RobotError, SafeRobot};
use crate::table;
use glam::IVec2;
use thiserror::Error;
use tracing::{debug, trace};

/// Heading used when PLACE is given without a direction word.
const DEFAULT_HEADING: &str = "EAST";

/// Command-line failures caught before or while touching the robot. The
/// `Display` forms are the exact strings returned to the user.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("That command allows no arguments")]
    UnexpectedArguments,

    #[error("Too few arguments")]
    TooFewArguments,

    #[error("Too many arguments")]
    TooManyArguments,

    #[error("Argument must be a nonnegative integer")]
    NonIntegerArgument,

    #[error("Argument must not exceed {max}")]
    CoordinateOutOfRange { max: i32 },

    #[error("Invalid keyword")]
    UnknownKeyword,

    #[error(transparent)]
    Robot(#[from] RobotError),
}

/// The recognized command verbs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Keyword {
    Left,
    Move,
    Place,
    Report,
    Right,
}

impl Keyword {
    /// Resolves an already lower-cased token; `None` for unrecognized verbs.
    fn resolve(token: &str) -> Option<Self> {
        match token {
            "left" => Some(Self::Left),
            "move" => Some(Self::Move),
            "place" => Some(Self::Place),
            "report" => Some(Self::Report),
            "right" => Some(Self::Right),
            _ => None,
        }
    }
}

/// Splits a raw line into lower-cased tokens.
///
/// Commas and spaces both separate tokens, surrounding whitespace is trimmed
/// and runs of separators collapse, so `"a,b"`, `"a b"` and `"a,  b"` all
/// tokenize to `["a", "b"]`. Empty input yields an empty vec.
pub fn tokenize(line: &str) -> Vec<String> {
    line.split([',', ' '])
        .map(|t| t.trim().to_ascii_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Owns a [`SafeRobot`] and drives it from text commands, one line at a time.
#[derive(Debug, Default)]
pub struct CommandProcessor {
    robot: SafeRobot,
}

impl CommandProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fixed welcome string naming the supported command set.
    pub fn startup_message(&self) -> String {
        "Welcome to the toy robot. Commands are Place, Left, Right, Move & Report.".to_owned()
    }

    /// Processes every line of a multi-line input, concatenating the replies.
    pub fn feed(&mut self, input: &str) -> String {
        input.lines().map(|line| self.process_line(line)).collect()
    }

    /// Validates and dispatches one raw command line.
    ///
    /// Returns the reply to print: empty for silent success (and for empty
    /// input), the report string for REPORT, or a fully formed error message.
    /// Validation fails fast in this order:
    ///
    /// 1. Non-PLACE keywords refuse any arguments.
    /// 2. PLACE accepts 0, 2 or 3 arguments (coordinates, optional direction).
    /// 3. When two or more arguments are present, the first two must be
    ///    all-digit tokens within the table's coordinate range, checked left
    ///    to right.
    /// 4. Unrecognized keywords fail at dispatch, after the argument checks.
    pub fn process_line(&mut self, line: &str) -> String {
        let tokens = tokenize(line.trim_end_matches(['\r', '\n']));
        trace!(?tokens, "tokenized command line");
        if tokens.is_empty() {
            return String::new();
        }
        match self.dispatch(&tokens) {
            Ok(reply) => reply,
            Err(err) => {
                debug!(line, %err, "command rejected");
                err.to_string()
            }
        }
    }

    fn dispatch(&mut self, tokens: &[String]) -> Result<String, CommandError> {
        let keyword = Keyword::resolve(&tokens[0]);

        if matches!(
            keyword,
            Some(Keyword::Left | Keyword::Move | Keyword::Report | Keyword::Right)
        ) && tokens.len() > 1
        {
            return Err(CommandError::UnexpectedArguments);
        }
        if keyword == Some(Keyword::Place) {
            match tokens.len() {
                2 => return Err(CommandError::TooFewArguments),
                n if n > 4 => return Err(CommandError::TooManyArguments),
                _ => {}
            }
        }

        let args = &tokens[1..];
        let mut position = IVec2::ZERO;
        if args.len() >= 2 {
            let x = parse_coordinate(&args[0])?;
            let y = parse_coordinate(&args[1])?;
            position = IVec2::new(x, y);
        }
        let heading = args.get(2).map(String::as_str).unwrap_or(DEFAULT_HEADING);

        match keyword {
            Some(Keyword::Left) => self.robot.turn_left()?,
            Some(Keyword::Move) => self.robot.advance()?,
            Some(Keyword::Place) => self.robot.place(position, heading)?,
            Some(Keyword::Report) => return Ok(self.robot.report()?),
            Some(Keyword::Right) => self.robot.turn_right()?,
            None => return Err(CommandError::UnknownKeyword),
        }
        Ok(String::new())
    }
}

/// Validates one coordinate token: digits only, within the table range.
fn parse_coordinate(token: &str) -> Result<i32, CommandError> {
    if !token.chars().all(|c| c.is_ascii_digit()) {
        return Err(CommandError::NonIntegerArgument);
    }
    let max = *table::COORDINATE_RANGE.end();
    // An all-digit token too large for i32 certainly exceeds the bound.
    match token.parse::<i32>() {
        Ok(value) if value <= max => Ok(value),
        _ => Err(CommandError::CoordinateOutOfRange { max }),
    }
}
