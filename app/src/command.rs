//! Command parsing for the interactive session.
//!
//! The grammar mirrors the screen: `add` takes the title words followed by
//! one due-date token, the id commands take the number printed next to each
//! row, and the remaining commands are bare words.

use tasklist_core::{DueDate, TaskId};
use thiserror::Error;

/// One line of user input, parsed
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Create a task from a title and a due-date token
    Add {
        /// Title, possibly several words
        title: String,
        /// Due date taken verbatim from the last token
        due_date: DueDate,
    },
    /// Invert the `done` flag of the task with this id
    Toggle {
        /// Target task id
        id: TaskId,
    },
    /// Remove the task with this id
    Remove {
        /// Target task id
        id: TaskId,
    },
    /// Keep only completed tasks
    ShowDone,
    /// Keep only open tasks
    ShowPending,
    /// Order the list by due-date text
    SortByDue,
    /// Reset the list to the sample set
    ShowAll,
    /// Print the current list
    List,
    /// Print the current list as JSON
    Json,
    /// Print the command reference
    Help,
    /// Leave the session
    Quit,
}

/// Errors produced while parsing a command line
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    /// The line contained no words
    #[error("empty input")]
    Empty,

    /// The first word is not a known command
    #[error("unknown command `{0}`, try `help`")]
    Unknown(String),

    /// `add` needs at least one title word and a due-date token
    #[error("usage: add <title> <dd/MM/yyyy>")]
    MissingAddArgs,

    /// The id commands need a plain number
    #[error("`{verb}` needs a numeric id, got `{got}`")]
    InvalidId {
        /// The command that was given the bad id
        verb: &'static str,
        /// What was found instead of a number
        got: String,
    },
}

/// Parses one input line into a [`Command`]
///
/// The due date is whatever the last `add` token holds; like the entry
/// screen, nothing checks that it is a date.
///
/// # Errors
///
/// Returns a [`CommandError`] naming the first problem found. A rejected
/// line leaves no trace on the task list.
pub fn parse(line: &str) -> Result<Command, CommandError> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Err(CommandError::Empty);
    };

    match verb {
        "add" => {
            let rest: Vec<&str> = words.collect();
            match rest.split_last() {
                Some((due, title)) if !title.is_empty() => Ok(Command::Add {
                    title: title.join(" "),
                    due_date: DueDate::new(*due),
                }),
                _ => Err(CommandError::MissingAddArgs),
            }
        }
        "toggle" => parse_id("toggle", words.next()).map(|id| Command::Toggle { id }),
        "remove" => parse_id("remove", words.next()).map(|id| Command::Remove { id }),
        "done" => Ok(Command::ShowDone),
        "pending" => Ok(Command::ShowPending),
        "sort" => Ok(Command::SortByDue),
        "all" => Ok(Command::ShowAll),
        "list" => Ok(Command::List),
        "json" => Ok(Command::Json),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(CommandError::Unknown(other.to_owned())),
    }
}

fn parse_id(verb: &'static str, word: Option<&str>) -> Result<TaskId, CommandError> {
    word.and_then(|w| w.parse::<u32>().ok())
        .map(TaskId::new)
        .ok_or_else(|| CommandError::InvalidId {
            verb,
            got: word.unwrap_or_default().to_owned(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_add_with_multiword_title() {
        let command = parse("add Buy fresh milk 01/02/2025");

        assert_eq!(
            command,
            Ok(Command::Add {
                title: "Buy fresh milk".to_owned(),
                due_date: DueDate::new("01/02/2025"),
            })
        );
    }

    #[test]
    fn add_takes_the_last_token_as_the_date_unchecked() {
        // No date validation anywhere, so a two-word add treats the second
        // word as the due date
        let command = parse("add Groceries tomorrow");

        assert_eq!(
            command,
            Ok(Command::Add {
                title: "Groceries".to_owned(),
                due_date: DueDate::new("tomorrow"),
            })
        );
    }

    #[test]
    fn add_without_title_is_rejected() {
        assert_eq!(parse("add 01/02/2025"), Err(CommandError::MissingAddArgs));
        assert_eq!(parse("add"), Err(CommandError::MissingAddArgs));
    }

    #[test]
    fn parses_id_commands() {
        assert_eq!(
            parse("toggle 3"),
            Ok(Command::Toggle { id: TaskId::new(3) })
        );
        assert_eq!(
            parse("remove 12"),
            Ok(Command::Remove { id: TaskId::new(12) })
        );
    }

    #[test]
    fn rejects_non_numeric_ids() {
        assert_eq!(
            parse("toggle seven"),
            Err(CommandError::InvalidId {
                verb: "toggle",
                got: "seven".to_owned(),
            })
        );
        assert_eq!(
            parse("remove"),
            Err(CommandError::InvalidId {
                verb: "remove",
                got: String::new(),
            })
        );
    }

    #[test]
    fn parses_bare_word_commands() {
        assert_eq!(parse("done"), Ok(Command::ShowDone));
        assert_eq!(parse("pending"), Ok(Command::ShowPending));
        assert_eq!(parse("sort"), Ok(Command::SortByDue));
        assert_eq!(parse("all"), Ok(Command::ShowAll));
        assert_eq!(parse("list"), Ok(Command::List));
        assert_eq!(parse("json"), Ok(Command::Json));
        assert_eq!(parse("help"), Ok(Command::Help));
    }

    #[test]
    fn quit_has_an_exit_alias() {
        assert_eq!(parse("quit"), Ok(Command::Quit));
        assert_eq!(parse("exit"), Ok(Command::Quit));
    }

    #[test]
    fn blank_lines_are_empty() {
        assert_eq!(parse(""), Err(CommandError::Empty));
        assert_eq!(parse("   "), Err(CommandError::Empty));
    }

    #[test]
    fn unknown_verbs_are_reported() {
        assert_eq!(parse("frobnicate"), Err(CommandError::Unknown("frobnicate".to_owned())));
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(
            parse("  toggle 1  "),
            Ok(Command::Toggle { id: TaskId::new(1) })
        );
    }
}
