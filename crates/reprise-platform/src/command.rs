//! Script commands for the headless runner, one per line.
//!
//! ```text
//! # comments and blank lines are skipped
//! click Allow Toggling
//! click #5
//! tap 40 120
//! frame
//! stats
//! quit
//! ```

use std::fmt;

use reprise_core::Vec2;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("`{0}` needs a target")]
    MissingTarget(&'static str),
    #[error("invalid target id `{0}`")]
    BadId(String),
    #[error("`tap` expects two numbers, got `{0}`")]
    BadPoint(String),
    #[error("unknown command `{0}`")]
    Unknown(String),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Target {
    Id(u64),
    Label(String),
    Point(Vec2),
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Id(id) => write!(f, "#{id}"),
            Target::Label(label) => f.write_str(label),
            Target::Point(p) => write!(f, "({}, {})", p.x, p.y),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Click(Target),
    Frame,
    Stats,
    Quit,
}

impl Command {
    /// Parses one script line. Blank lines and `#` comments yield `None`.
    pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((w, r)) => (w, r.trim()),
            None => (line, ""),
        };

        let cmd = match word.to_ascii_lowercase().as_str() {
            "click" => Command::Click(parse_target(rest)?),
            "tap" => Command::Click(parse_point(rest)?),
            "frame" => Command::Frame,
            "stats" => Command::Stats,
            "quit" | "exit" => Command::Quit,
            _ => return Err(CommandError::Unknown(word.to_string())),
        };
        Ok(Some(cmd))
    }
}

fn parse_target(rest: &str) -> Result<Target, CommandError> {
    if rest.is_empty() {
        return Err(CommandError::MissingTarget("click"));
    }
    match rest.strip_prefix('#') {
        Some(id) => id
            .parse()
            .map(Target::Id)
            .map_err(|_| CommandError::BadId(id.to_string())),
        None => Ok(Target::Label(rest.to_string())),
    }
}

fn parse_point(rest: &str) -> Result<Target, CommandError> {
    if rest.is_empty() {
        return Err(CommandError::MissingTarget("tap"));
    }
    let bad = || CommandError::BadPoint(rest.to_string());
    let mut parts = rest.split_whitespace();
    let x = parts.next().and_then(|s| s.parse().ok()).ok_or_else(bad)?;
    let y = parts.next().and_then(|s| s.parse().ok()).ok_or_else(bad)?;
    if parts.next().is_some() {
        return Err(bad());
    }
    Ok(Target::Point(Vec2 { x, y }))
}
