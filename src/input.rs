//! Line command parsing for the terminal shell.
//!
//! Each line the user types becomes a [`Command`]. Most commands map straight
//! onto an [`Event`]; the rest (`open <row>`, bare `close`) need the current
//! screen to resolve and are finished off by the shell.
//!
//! # Commands
//!
//! | Input                                      | Result                          |
//! |--------------------------------------------|---------------------------------|
//! | `search <title> [author:<id>] [genre:<id>]`| `Event::SubmitSearch`           |
//! | `more`                                     | `Event::ShowMore`               |
//! | `open <row>` / `open <id>`                 | [`Command::Open`]               |
//! | `close [search\|settings\|detail]`         | `Event::CloseOverlay` / topmost |
//! | `find`                                     | open the search overlay         |
//! | `settings`                                 | open the settings overlay       |
//! | `theme <day\|night>`                       | `Event::SubmitTheme`            |
//! | `help`                                     | [`Command::Help`]               |
//! | `quit`                                     | [`Command::Quit`]               |
//!
//! Command words are case-insensitive; arguments are not.

use crate::app::{Event, FilterCriteria, Overlay};
use crate::ui::theme::ThemeMode;
use thiserror::Error;

pub const HELP: &str = "search <title> [author:<id>] [genre:<id>] · more · open <n|id> · \
                        close [overlay] · find · settings · theme <day|night> · quit";

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Ready to hand to the controller.
    Event(Event),
    /// Open the detail of a listed row or a book id.
    Open(Target),
    /// Close whichever overlay is on top.
    CloseTopmost,
    /// Empty line: just redraw.
    Redraw,
    Help,
    Quit,
}

/// What `open` refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// 1-based list position as shown on screen.
    Row(usize),
    /// Book identifier.
    Id(String),
}

/// Why a line could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command: {0} (type help)")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),
}

/// Parses one input line.
///
/// # Errors
///
/// Returns [`CommandError::Unknown`] for an unrecognized command word and
/// [`CommandError::Usage`] for a missing or invalid argument.
///
/// # Example
///
/// ```
/// use book_browser::app::Event;
/// use book_browser::input::{parse_command, Command, Target};
///
/// assert_eq!(parse_command("more"), Ok(Command::Event(Event::ShowMore)));
/// assert_eq!(parse_command("open 3"), Ok(Command::Open(Target::Row(3))));
/// ```
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    let (word, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(word, rest)| (word, rest.trim()));

    let command = match word.to_ascii_lowercase().as_str() {
        "" => Command::Redraw,
        "search" | "s" => Command::Event(Event::SubmitSearch(parse_search(rest))),
        "more" | "m" => Command::Event(Event::ShowMore),
        "open" | "o" => Command::Open(parse_target(rest)?),
        "close" | "c" => parse_close(rest)?,
        "find" | "/" => Command::Event(Event::OpenOverlay(Overlay::Search)),
        "settings" => Command::Event(Event::OpenOverlay(Overlay::Settings)),
        "theme" => Command::Event(Event::SubmitTheme(
            rest.parse::<ThemeMode>()
                .map_err(|_| CommandError::Usage("theme <day|night>"))?,
        )),
        "help" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };

    tracing::debug!(input = %line, command = ?command, "parsed command");
    Ok(command)
}

/// Splits search arguments into the title and the `author:`/`genre:`
/// selectors. A selector given twice keeps the last value.
fn parse_search(args: &str) -> FilterCriteria {
    let mut title = Vec::new();
    let mut author = "";
    let mut genre = "";

    for token in args.split_whitespace() {
        if let Some(id) = token.strip_prefix("author:") {
            author = id;
        } else if let Some(id) = token.strip_prefix("genre:") {
            genre = id;
        } else {
            title.push(token);
        }
    }

    FilterCriteria::from_form(&title.join(" "), author, genre)
}

fn parse_target(arg: &str) -> Result<Target, CommandError> {
    if arg.is_empty() || arg.contains(char::is_whitespace) {
        return Err(CommandError::Usage("open <row|id>"));
    }
    Ok(arg
        .parse::<usize>()
        .map_or_else(|_| Target::Id(arg.to_string()), Target::Row))
}

fn parse_close(arg: &str) -> Result<Command, CommandError> {
    if arg.is_empty() {
        return Ok(Command::CloseTopmost);
    }
    arg.parse::<Overlay>()
        .map(|overlay| Command::Event(Event::CloseOverlay(overlay)))
        .map_err(|_| CommandError::Usage("close [search|settings|detail]"))
}
