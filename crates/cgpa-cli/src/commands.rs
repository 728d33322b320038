//! Interactive editor commands.

use cgpa_core::entry::{CandidateEntry, EntryField};
use cgpa_core::roster::RowId;
use cgpa_orchestration::sources::parse_course_spec;

/// Command list shown by `help`.
pub const HELP_TEXT: &str = "\
Commands:
  add [NAME,GRADE,CREDITS]     add a course (blank row if no spec)
  set ID name|grade|credits V  edit a field of course ID
  remove ID                    remove course ID
  list                         show all courses
  calc                         calculate the CGPA
  reset                        remove all courses and start over
  about                        about this calculator
  help                         show this list
  quit                         leave";

/// A parsed editor command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(Option<CandidateEntry>),
    Set {
        id: RowId,
        field: EntryField,
        value: String,
    },
    Remove(RowId),
    List,
    Calculate,
    Reset,
    About,
    Help,
    Quit,
    /// Blank line.
    Nothing,
}

/// Error parsing an editor command.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("unknown command {0:?}; type `help` for a list")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("invalid course id {0:?}")]
    InvalidId(String),

    #[error("unknown field {0:?}; expected name, grade or credits")]
    UnknownField(String),

    #[error("{0}")]
    Spec(String),
}

fn split_word(s: &str) -> (&str, &str) {
    let s = s.trim();
    s.split_once(char::is_whitespace)
        .map_or((s, ""), |(word, rest)| (word, rest.trim()))
}

fn parse_id(text: &str) -> Result<RowId, CommandError> {
    text.trim_start_matches('#')
        .parse()
        .map(RowId)
        .map_err(|_| CommandError::InvalidId(text.to_string()))
}

fn parse_field(text: &str) -> Result<EntryField, CommandError> {
    match text.to_ascii_lowercase().as_str() {
        "name" => Ok(EntryField::Name),
        "grade" => Ok(EntryField::Grade),
        "credits" | "credit" | "units" => Ok(EntryField::Credits),
        _ => Err(CommandError::UnknownField(text.to_string())),
    }
}

/// Parse one input line.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let (keyword, rest) = split_word(line);
    match keyword.to_ascii_lowercase().as_str() {
        "" => Ok(Command::Nothing),
        "add" => {
            if rest.is_empty() {
                Ok(Command::Add(None))
            } else {
                parse_course_spec(rest)
                    .map(|entry| Command::Add(Some(entry)))
                    .map_err(|e| CommandError::Spec(e.to_string()))
            }
        }
        "set" => {
            let (id, rest) = split_word(rest);
            let (field, value) = split_word(rest);
            if id.is_empty() || field.is_empty() {
                return Err(CommandError::Usage("set ID name|grade|credits VALUE"));
            }
            Ok(Command::Set {
                id: parse_id(id)?,
                field: parse_field(field)?,
                value: value.to_string(),
            })
        }
        "remove" | "rm" => {
            if rest.is_empty() {
                return Err(CommandError::Usage("remove ID"));
            }
            Ok(Command::Remove(parse_id(rest)?))
        }
        "list" | "ls" => Ok(Command::List),
        "calc" | "calculate" => Ok(Command::Calculate),
        "reset" => Ok(Command::Reset),
        "about" => Ok(Command::About),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_line() {
        assert_eq!(parse_command("   "), Ok(Command::Nothing));
    }

    #[test]
    fn add_variants() {
        assert_eq!(parse_command("add"), Ok(Command::Add(None)));
        assert_eq!(
            parse_command("ADD Linear Algebra, B, 4"),
            Ok(Command::Add(Some(CandidateEntry::new("Linear Algebra", "B", "4"))))
        );
        assert!(matches!(parse_command("add nope"), Err(CommandError::Spec(_))));
    }

    #[test]
    fn set_command() {
        assert_eq!(
            parse_command("set #2 name Organic Chemistry"),
            Ok(Command::Set {
                id: RowId(2),
                field: EntryField::Name,
                value: "Organic Chemistry".into()
            })
        );
        assert_eq!(
            parse_command("set 1 credits"),
            Ok(Command::Set {
                id: RowId(1),
                field: EntryField::Credits,
                value: String::new()
            })
        );
        assert!(matches!(parse_command("set 1"), Err(CommandError::Usage(_))));
        assert!(matches!(
            parse_command("set x name A"),
            Err(CommandError::InvalidId(_))
        ));
        assert!(matches!(
            parse_command("set 1 colour red"),
            Err(CommandError::UnknownField(_))
        ));
    }

    #[test]
    fn remove_command() {
        assert_eq!(parse_command("rm 4"), Ok(Command::Remove(RowId(4))));
        assert!(matches!(parse_command("remove"), Err(CommandError::Usage(_))));
    }

    #[test]
    fn simple_keywords() {
        assert_eq!(parse_command("list"), Ok(Command::List));
        assert_eq!(parse_command("calc"), Ok(Command::Calculate));
        assert_eq!(parse_command("Reset"), Ok(Command::Reset));
        assert_eq!(parse_command("about"), Ok(Command::About));
        assert_eq!(parse_command("?"), Ok(Command::Help));
        assert_eq!(parse_command("exit"), Ok(Command::Quit));
    }

    #[test]
    fn unknown_keyword() {
        let err = parse_command("frobnicate").unwrap_err();
        assert_eq!(err, CommandError::Unknown("frobnicate".into()));
        assert!(err.to_string().contains("help"));
    }
}
