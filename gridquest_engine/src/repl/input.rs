//! Terminal input handling for the GridQuest REPL.
//!
//! Wraps rustyline configuration, history and completion tailored to the
//! game's command set, with a plain stdin fallback.

use std::fs;
use std::io::{self, BufRead, IsTerminal, StdinLock, Write};
use std::path::{Path, PathBuf};

use lazy_static::lazy_static;
use log::{info, warn};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use crate::command::COMMAND_HELP;
use crate::world::Direction;

/// Outcome of reading a line from the REPL input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Line(String),
    Eof,
    Interrupted,
}

lazy_static! {
    static ref COMMAND_TERMS: Vec<String> = build_command_terms();
}

/// Answers offered while the session asks whether to load a saved game.
const BOOTSTRAP_TERMS: &[&str] = &["yes", "no"];

type ReplEditor = rustyline::Editor<GridHelper, DefaultHistory>;

#[derive(Default)]
struct GridHelper;

impl Helper for GridHelper {}

impl Completer for GridHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Self::Candidate>)> {
        let (start, prefix) = current_prefix(line, pos);
        if prefix.is_empty() {
            return Ok((start, Vec::new()));
        }
        Ok((start, completions(&prefix.to_lowercase())))
    }
}

impl Hinter for GridHelper {
    type Hint = String;
}

impl Highlighter for GridHelper {}

impl Validator for GridHelper {}

fn current_prefix(line: &str, pos: usize) -> (usize, String) {
    let slice = &line[..pos];
    let trimmed = slice.trim_start_matches(char::is_whitespace);
    let start = pos - trimmed.len();
    (start, trimmed.to_string())
}

fn completions(lower: &str) -> Vec<Pair> {
    COMMAND_TERMS
        .iter()
        .filter(|term| term.starts_with(lower))
        .map(|term| Pair {
            display: term.clone(),
            replacement: term.clone(),
        })
        .collect()
}

/// Every command word sequence, with directional commands expanded per direction.
fn build_command_terms() -> Vec<String> {
    let mut terms: Vec<String> = BOOTSTRAP_TERMS.iter().map(ToString::to_string).collect();
    for (usage, _) in COMMAND_HELP {
        let base = usage.split(" (").next().unwrap_or(*usage);
        if usage.ends_with("(direction)") {
            terms.extend(Direction::ALL.iter().map(|dir| format!("{base} {dir}")));
        } else {
            terms.push(base.to_string());
        }
    }
    terms.sort_unstable();
    terms.dedup();
    terms
}

/// Where the REPL reads its lines from.
///
/// An interactive terminal gets a rustyline editor with completion and a
/// history file; anything else (pipes, redirected files) is read line by line.
pub enum GameInput {
    Editor(Box<EditorInput>),
    Piped(PipedInput<StdinLock<'static>>),
}

impl GameInput {
    /// Pick the editor for a terminal, piped input otherwise.
    pub fn open() -> Self {
        if !io::stdin().is_terminal() {
            info!("stdin is not a terminal, reading piped input");
            return GameInput::piped();
        }
        match EditorInput::new(HistoryFile::locate()) {
            Ok(editor) => GameInput::Editor(Box::new(editor)),
            Err(err) => {
                warn!("line editor unavailable ({err}), reading piped input");
                GameInput::piped()
            },
        }
    }

    fn piped() -> Self {
        GameInput::Piped(PipedInput::new(io::stdin().lock()))
    }

    /// Read one line. A failing editor is replaced by piped input for the
    /// rest of the session and the read is retried there.
    ///
    /// # Errors
    /// - if stdin itself cannot be read
    pub fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        let result = match self {
            GameInput::Editor(editor) => editor.read_line(prompt),
            GameInput::Piped(piped) => return piped.read_line(prompt),
        };
        result.or_else(|err| {
            warn!("line editor failed ({err}), reading piped input");
            *self = GameInput::piped();
            self.read_line(prompt)
        })
    }
}

/// Line editor with command completion and persistent history.
pub struct EditorInput {
    editor: ReplEditor,
    history: Option<HistoryFile>,
}

impl EditorInput {
    fn new(history: Option<HistoryFile>) -> io::Result<Self> {
        let mut editor = ReplEditor::new().map_err(readline_to_io)?;
        editor.set_helper(Some(GridHelper));
        if let Some(history) = &history {
            history.load_into(&mut editor);
        }
        Ok(Self { editor, history })
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        let line = match self.editor.readline(prompt) {
            Ok(line) => line,
            Err(err) => return readline_event(err),
        };
        if !line.trim().is_empty() {
            if let Err(err) = self.editor.add_history_entry(line.as_str()) {
                warn!("could not add '{line}' to history: {err}");
            }
            if let Some(history) = &self.history {
                history.store(&mut self.editor);
            }
        }
        Ok(InputEvent::Line(line))
    }
}

/// Plain buffered reader used when no terminal is attached.
pub struct PipedInput<R: BufRead> {
    reader: R,
    line: String,
}

impl<R: BufRead> PipedInput<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
        }
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        let mut stdout = io::stdout();
        write!(stdout, "{prompt}")?;
        stdout.flush()?;

        self.line.clear();
        if self.reader.read_line(&mut self.line)? == 0 {
            return Ok(InputEvent::Eof);
        }
        Ok(InputEvent::Line(trim_newline(&self.line).to_string()))
    }
}

/// Command history kept between sessions.
struct HistoryFile {
    path: PathBuf,
}

impl HistoryFile {
    /// `<data dir>/gridquest_engine/history.txt`, if the platform has a data dir.
    fn locate() -> Option<Self> {
        let base = dirs::data_dir().or_else(dirs::data_local_dir)?;
        Some(Self::under(&base))
    }

    fn under(base: &Path) -> Self {
        Self {
            path: base.join("gridquest_engine").join("history.txt"),
        }
    }

    fn load_into(&self, editor: &mut ReplEditor) {
        if let Some(dir) = self.path.parent()
            && let Err(err) = fs::create_dir_all(dir)
        {
            warn!("could not create {}: {err}", dir.display());
        }
        match editor.load_history(&self.path) {
            Ok(()) => info!("loaded history from {}", self.path.display()),
            Err(ReadlineError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {},
            Err(err) => warn!("could not load history from {}: {err}", self.path.display()),
        }
    }

    fn store(&self, editor: &mut ReplEditor) {
        if let Err(err) = editor.save_history(&self.path) {
            warn!("could not save history to {}: {err}", self.path.display());
        }
    }
}

fn trim_newline(line: &str) -> &str {
    line.trim_end_matches(['\n', '\r'])
}

fn readline_event(err: ReadlineError) -> io::Result<InputEvent> {
    match err {
        ReadlineError::Interrupted => Ok(InputEvent::Interrupted),
        ReadlineError::Eof => Ok(InputEvent::Eof),
        other => Err(readline_to_io(other)),
    }
}

fn readline_to_io(err: ReadlineError) -> io::Error {
    match err {
        ReadlineError::Io(err) => err,
        other => io::Error::other(other),
    }
}
