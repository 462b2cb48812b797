//! The command loop: show the list and the menu, read a letter, run it.

use std::fmt;
use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::{debug, warn};

use crate::command::{self, Cmd};
use crate::error::ListError;
use crate::larch::{LarchMinimal, Status};
use crate::listfile::{self, ListDir};
use crate::safe_input::SafeInput;
use crate::session::Session;

pub struct Menu<R, W> {
    input: SafeInput<R, W>,
    lists: ListDir,
}

impl<R: BufRead, W: Write> LarchMinimal for Menu<R, W> {
    /// A list read before the loop starts, with the path it came from.
    type Flags = Option<(PathBuf, Vec<String>)>;
    type Model = Session;
    type Msg = Cmd;
    type View = String;

    fn init(flags: Self::Flags) -> Session {
        match flags {
            Some((path, items)) => Session::from_file(path, items),
            None => Session::new(),
        }
    }

    fn update(&mut self, msg: Cmd, model: &mut Session) -> Result<Status, ListError> {
        match msg {
            Cmd::Add => self.add(model)?,
            Cmd::Delete => self.delete(model)?,
            Cmd::Insert => self.insert(model)?,
            Cmd::Move => self.move_item(model)?,
            Cmd::Open => self.open(model)?,
            Cmd::Save => self.save(model)?,
            Cmd::Clear => self.clear(model)?,
            Cmd::View => {
                let listing = model.render();
                self.say(format_args!("\n{}", listing.trim_end()))?;
            }
            Cmd::Quit => {
                if self.quit(model)? {
                    return Ok(Status::Quit);
                }
            }
        }
        Ok(Status::Running)
    }

    fn view(model: &Session) -> String {
        let file = match model.file().and_then(Path::file_name) {
            Some(name) => name.to_string_lossy().into_owned(),
            None => String::from("none"),
        };
        let synced = match model.synced_at() {
            Some(at) => format!(", saved {}", at.with_timezone(&Local).format("%H:%M:%S")),
            None => String::new(),
        };
        let mut out = format!("\nCurrent List (file: {}{}):\n{}", file, synced, model.render());
        out.push_str("\nMenu:\n");
        for cmd in Cmd::ALL.iter() {
            out = format!("{}{} - {}\n", out, cmd.letter(), cmd.label());
        }
        out
    }
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: SafeInput<R, W>, lists: ListDir) -> Menu<R, W> {
        Menu { input, lists }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.input.into_output()
    }

    /// Loop until quitting is approved or the input runs out.
    pub fn run(&mut self, model: &mut Session) -> Result<(), ListError> {
        loop {
            match self.step(model) {
                Ok(Status::Running) => {}
                Ok(Status::Quit) => break,
                Err(ListError::EndOfInput) => {
                    warn!(dirty = model.is_dirty(), "input closed");
                    self.say("End of input.")?;
                    return Ok(());
                }
                Err(e @ ListError::File { .. }) => {
                    warn!(error = %e, "file operation failed");
                    self.say(format_args!("File operation failed: {}", e))?;
                }
                Err(e) if e.is_recoverable() => {
                    warn!(error = %e, "command failed");
                    self.say(e)?;
                }
                Err(e) => return Err(e),
            }
        }
        self.say("Exiting. Goodbye.")
    }

    fn step(&mut self, model: &mut Session) -> Result<Status, ListError> {
        let screen = Self::view(model);
        write!(self.input.output(), "{}", screen)?;
        let answer = self.input.matching_string(&Cmd::prompt(), command::PATTERN)?;
        match Cmd::from_letter(&answer) {
            Some(cmd) => {
                debug!(?cmd, "dispatching");
                self.update(cmd, model)
            }
            None => Ok(Status::Running),
        }
    }

    fn say(&mut self, message: impl fmt::Display) -> Result<(), ListError> {
        writeln!(self.input.output(), "{}", message)?;
        Ok(())
    }

    fn add(&mut self, model: &mut Session) -> Result<(), ListError> {
        let item = self.input.non_empty_string("Enter item to add")?;
        model.add(item);
        Ok(())
    }

    fn insert(&mut self, model: &mut Session) -> Result<(), ListError> {
        let last = model.len() + 1;
        let position = self
            .input
            .ranged_int(&format!("Insert position (1-{})", last), 1, last)?;
        let item = self.input.non_empty_string("Enter item to insert")?;
        model.insert(position, item)
    }

    fn delete(&mut self, model: &mut Session) -> Result<(), ListError> {
        if model.is_empty() {
            return self.say("List empty.");
        }
        let len = model.len();
        let position = self
            .input
            .ranged_int(&format!("Delete item # (1-{})", len), 1, len)?;
        let removed = model.delete(position)?;
        self.say(format_args!("Removed: {}", removed))
    }

    fn move_item(&mut self, model: &mut Session) -> Result<(), ListError> {
        if model.is_empty() {
            return self.say("No items to move.");
        }
        let len = model.len();
        let from = self
            .input
            .ranged_int(&format!("Move which item (1-{})?", len), 1, len)?;
        let to = self
            .input
            .ranged_int(&format!("Move to position (1-{})?", len), 1, len)?;
        model.move_item(from, to)?;
        self.say("Moved item.")
    }

    fn open(&mut self, model: &mut Session) -> Result<(), ListError> {
        if model.is_dirty()
            && self
                .input
                .yes_no("Unsaved changes exist. Save before opening another file?")?
        {
            self.save(model)?;
        }
        let name = self
            .input
            .non_empty_string("Enter filename to open (no extension)")?;
        let path = self.lists.resolve(&name);
        let items = listfile::load(&path)?;
        model.replace(path.clone(), items);
        self.say(format_args!("Loaded {}", absolute(&path).display()))
    }

    fn save(&mut self, model: &mut Session) -> Result<(), ListError> {
        let path = match model.file() {
            Some(path) => path.to_path_buf(),
            None => {
                let name = self
                    .input
                    .non_empty_string("Enter base filename (no extension)")?;
                self.lists.resolve(&name)
            }
        };
        listfile::save(&path, model.items())?;
        model.mark_saved(path.clone());
        self.say(format_args!("Saved to {}", absolute(&path).display()))
    }

    fn clear(&mut self, model: &mut Session) -> Result<(), ListError> {
        if self.input.yes_no("Clear entire list?")? {
            model.clear();
            self.say("List cleared.")
        } else {
            self.say("Clear cancelled.")
        }
    }

    /// Whether quitting is approved.
    fn quit(&mut self, model: &mut Session) -> Result<bool, ListError> {
        if !model.is_dirty() {
            return self.input.yes_no("Are you sure you want to quit?");
        }
        if self.input.yes_no("Unsaved changes. Save before quitting?")? {
            self.save(model)?;
            return Ok(true);
        }
        self.input.yes_no("Quit and discard unsaved changes?")
    }
}

fn absolute(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
