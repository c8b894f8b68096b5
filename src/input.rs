use crate::commands::dispatcher::CommandDispatcher;
use crate::config::Config;
use crate::core::error::ScoutError;
use crate::session::Mode;

use console::style;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::{Hinter, HistoryHinter};
use rustyline::history::FileHistory;
use rustyline::validate::Validator;
use rustyline::{CompletionType, Config as EditorConfig, Context, EditMode, Editor, Helper};

/// Completes `/command` names
pub struct CommandCompleter {
    command_registry: CommandDispatcher,
}

impl CommandCompleter {
    pub fn new(command_registry: CommandDispatcher) -> Self {
        Self { command_registry }
    }

    fn candidates(&self, partial: &str) -> Vec<Pair> {
        self.command_registry
            .get_command_names()
            .into_iter()
            .filter(|cmd| cmd.starts_with(partial))
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: cmd,
            })
            .collect()
    }
}

impl Completer for CommandCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        if pos >= 1 && line.starts_with('/') && !line[1..pos].contains(' ') {
            return Ok((1, self.candidates(&line[1..pos])));
        }
        Ok((pos, Vec::new()))
    }
}

/// Helper struct that combines the rustyline components
pub struct ScoutHelper {
    completer: CommandCompleter,
    hinter: HistoryHinter,
}

impl ScoutHelper {
    pub fn new(command_registry: CommandDispatcher) -> Self {
        Self {
            completer: CommandCompleter::new(command_registry),
            hinter: HistoryHinter {},
        }
    }
}

impl Helper for ScoutHelper {}

impl Completer for ScoutHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        self.completer.complete(line, pos, ctx)
    }
}

impl Hinter for ScoutHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, ctx: &Context<'_>) -> Option<String> {
        self.hinter.hint(line, pos, ctx)
    }
}

impl Highlighter for ScoutHelper {}

impl Validator for ScoutHelper {}

/// Creates a configured rustyline editor
pub fn create_editor(
    command_registry: CommandDispatcher,
) -> Result<Editor<ScoutHelper, FileHistory>, ScoutError> {
    let config = EditorConfig::builder()
        .history_ignore_space(true)
        .completion_type(CompletionType::List)
        .edit_mode(EditMode::Emacs)
        .build();

    let mut editor = Editor::with_config(config)
        .map_err(|e| ScoutError::Input(format!("Failed to create line editor: {}", e)))?;

    editor.set_helper(Some(ScoutHelper::new(command_registry)));
    let _ = editor.load_history(&Config::history_path());

    Ok(editor)
}

fn prompt_for(mode: Mode) -> String {
    let label = match mode {
        Mode::Store => "search",
        Mode::Advisor => "ask",
    };
    if cfg!(windows) && std::env::var("PSModulePath").is_ok() {
        format!("{}> ", label)
    } else {
        format!("{}{} ", style(label).dim(), style(">").bold().cyan())
    }
}

/// Reads a line of input using rustyline. `None` means the user is done.
pub fn read_input(
    editor: &mut Editor<ScoutHelper, FileHistory>,
    mode: Mode,
) -> Result<Option<String>, ScoutError> {
    match editor.readline(&prompt_for(mode)) {
        Ok(line) => {
            if !line.trim().is_empty() {
                editor.add_history_entry(&line).map_err(|e| {
                    ScoutError::Input(format!("Failed to add history entry: {}", e))
                })?;
            }
            Ok(Some(line))
        }
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
            println!("Exiting...");
            Ok(None)
        }
        Err(err) => Err(ScoutError::Input(format!("Input error: {}", err))),
    }
}

/// Saves the editor history
pub fn save_history(editor: &mut Editor<ScoutHelper, FileHistory>) -> Result<(), ScoutError> {
    let history_path = Config::history_path();

    if let Some(parent) = history_path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ScoutError::Input(format!("Failed to create history directory: {}", e))
            })?;
        }
    }

    editor
        .save_history(&history_path)
        .map_err(|e| ScoutError::Input(format!("Failed to save history: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create_command_registry;
    use rustyline::history::DefaultHistory;

    #[test]
    fn completes_command_prefixes() {
        let completer = CommandCompleter::new(create_command_registry());
        let names: Vec<String> = completer
            .candidates("s")
            .into_iter()
            .map(|p| p.replacement)
            .collect();
        assert_eq!(names, vec!["search".to_string(), "show".into(), "store".into()]);
    }

    #[test]
    fn cursor_before_slash_offers_nothing() {
        let completer = CommandCompleter::new(create_command_registry());
        let history = DefaultHistory::new();
        let ctx = Context::new(&history);

        let (start, candidates) = completer.complete("/se", 0, &ctx).unwrap();
        assert_eq!(start, 0);
        assert!(candidates.is_empty());

        let (start, candidates) = completer.complete("/se", 3, &ctx).unwrap();
        assert_eq!(start, 1);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].replacement, "search");

        let (_, candidates) = completer.complete("/search us", 10, &ctx).unwrap();
        assert!(candidates.is_empty());
    }
}
