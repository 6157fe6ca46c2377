//! Parsing of interactive session commands.

use std::str::FromStr;

/// A single user action in the interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ListStages,
    Select(String),
    Show,
    NextPage,
    PrevPage,
    /// Zero-based page index.
    GoToPage(usize),
    /// `number` is the 1-based question number as displayed.
    Answer { number: usize, text: String },
    AddQuestion(String),
    Commit,
    Progress,
    /// `None` uses the configured default.
    Export { committed_only: Option<bool> },
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseActionError {
    #[error("Unknown command '{0}'. Type 'help' for the list of commands")]
    UnknownCommand(String),

    #[error("Usage: {0}")]
    Usage(&'static str),
}

/// Split `line` into a lowercase command word and the trimmed remainder.
fn split_command(line: &str) -> (String, &str) {
    let line = line.trim();
    match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word.to_lowercase(), rest.trim()),
        None => (line.to_lowercase(), ""),
    }
}

impl FromStr for Action {
    type Err = ParseActionError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (command, rest) = split_command(line);

        match command.as_str() {
            "stages" | "ls" => Ok(Action::ListStages),
            "use" | "stage" => {
                if rest.is_empty() {
                    return Err(ParseActionError::Usage("use <stage name>"));
                }
                Ok(Action::Select(rest.to_string()))
            }
            "show" => Ok(Action::Show),
            "next" | "n" => Ok(Action::NextPage),
            "prev" | "p" => Ok(Action::PrevPage),
            "page" => match rest.parse::<usize>() {
                Ok(page) if page >= 1 => Ok(Action::GoToPage(page - 1)),
                _ => Err(ParseActionError::Usage("page <number, starting at 1>")),
            },
            "answer" | "a" => {
                let (number, text) = match rest.split_once(char::is_whitespace) {
                    Some((number, text)) => (number, text.trim_start()),
                    None => (rest, ""),
                };
                let number = number
                    .parse::<usize>()
                    .map_err(|_| ParseActionError::Usage("answer <question number> <text>"))?;
                Ok(Action::Answer {
                    number,
                    text: text.to_string(),
                })
            }
            "add" => Ok(Action::AddQuestion(rest.to_string())),
            "commit" => Ok(Action::Commit),
            "progress" => Ok(Action::Progress),
            "export" => match rest {
                "" => Ok(Action::Export {
                    committed_only: None,
                }),
                "--all" => Ok(Action::Export {
                    committed_only: Some(false),
                }),
                "--committed" => Ok(Action::Export {
                    committed_only: Some(true),
                }),
                _ => Err(ParseActionError::Usage("export [--all | --committed]")),
            },
            "help" | "?" => Ok(Action::Help),
            "quit" | "exit" | "q" => Ok(Action::Quit),
            _ => Err(ParseActionError::UnknownCommand(command)),
        }
    }
}
