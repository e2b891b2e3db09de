// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Read-eval loop and built-in dispatch for the msh shell.
// Author: Lukas Bower

//! Read-eval loop and built-in dispatch.
//!
//! [`Shell`] owns the session rings and an output writer; the spawner seam
//! and the writer are generic so dispatch can be tested with a
//! [`MockSpawner`](crate::spawn::MockSpawner) and an in-memory buffer.

use std::env;
use std::io::{BufRead, Write};

use anyhow::Result;
use log::debug;

use crate::command::{clip_line, parse_history_ref, tokenize, HistoryRef};
use crate::session::{PidRecord, SessionState};
use crate::spawn::{SpawnError, Spawner};

/// Result of processing a single command line.
#[derive(Debug, PartialEq, Eq)]
pub enum CommandStatus {
    /// Continue reading commands.
    Continue,
    /// Leave the read loop and exit with success.
    Quit,
}

/// Shell driver responsible for expansion, dispatch, and ring bookkeeping.
pub struct Shell<S: Spawner, W: Write> {
    spawner: S,
    state: SessionState,
    writer: W,
    prompt: String,
}

impl<S: Spawner, W: Write> Shell<S, W> {
    /// Create a shell with the given spawner, output writer, and prompt.
    pub fn new(spawner: S, writer: W, prompt: impl Into<String>) -> Self {
        Self {
            spawner,
            state: SessionState::new(),
            writer,
            prompt: prompt.into(),
        }
    }

    /// Session state accessor, used by tests to inspect the rings.
    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Consume the shell and return the owned spawner and writer.
    pub fn into_parts(self) -> (S, W) {
        (self.spawner, self.writer)
    }

    /// Read and process lines from `reader` until end of input or
    /// `exit`/`quit`. Returns `Ok(())` for both; only an unrecoverable
    /// spawn failure surfaces as an error.
    pub fn repl<R: BufRead>(&mut self, mut reader: R) -> Result<()> {
        let mut line = String::new();
        loop {
            write!(self.writer, "{}", self.prompt)?;
            self.writer.flush()?;
            line.clear();
            if reader.read_line(&mut line)? == 0 {
                // End of input reads as an implicit exit.
                writeln!(self.writer)?;
                return Ok(());
            }
            if line.ends_with('\n') {
                line.pop();
            }
            clip_line(&mut line);
            if self.process_line(&line)? == CommandStatus::Quit {
                return Ok(());
            }
        }
    }

    /// Process one raw command line: expand a history reference, tokenize,
    /// and dispatch to a built-in or an external command, updating the
    /// rings as each path requires.
    pub fn process_line(&mut self, raw: &str) -> Result<CommandStatus> {
        let line = match parse_history_ref(raw) {
            HistoryRef::NotARef => raw.to_owned(),
            HistoryRef::Index(index) => match self.state.entry(index).map(str::to_owned) {
                Some(entry) => {
                    debug!("expanded !{index} to {entry:?}");
                    entry
                }
                None => return self.reject_history_ref(raw),
            },
            HistoryRef::Invalid => return self.reject_history_ref(raw),
        };

        let tokens = tokenize(&line);
        let Some(head) = tokens.first() else {
            // Blank line: re-prompt without touching either ring.
            return Ok(CommandStatus::Continue);
        };

        match head.as_str() {
            "exit" | "quit" => Ok(CommandStatus::Quit),
            "cd" => self.change_dir(&line, tokens.get(1)),
            "history" => self.show_history(&line, tokens.get(1)),
            _ => self.run_external(&line, &tokens),
        }
    }

    /// Out-of-range or malformed reference: report it, record the literal
    /// line, and skip dispatch.
    fn reject_history_ref(&mut self, raw: &str) -> Result<CommandStatus> {
        writeln!(self.writer, "Command not in history.")?;
        self.state.record(raw, PidRecord::NoProcess);
        Ok(CommandStatus::Continue)
    }

    fn change_dir(&mut self, line: &str, dir: Option<&String>) -> Result<CommandStatus> {
        match dir {
            Some(dir) if env::set_current_dir(dir).is_ok() => {}
            Some(dir) => writeln!(self.writer, "{dir}: Directory not found.")?,
            None => writeln!(self.writer, "cd: Directory not found.")?,
        }
        self.state.record(line, PidRecord::NoProcess);
        Ok(CommandStatus::Continue)
    }

    fn show_history(&mut self, line: &str, option: Option<&String>) -> Result<CommandStatus> {
        // The listing command itself is recorded before printing, so it
        // appears as the final entry of its own listing.
        self.state.record(line, PidRecord::NoProcess);
        match option.map(String::as_str) {
            None => {
                for (index, entry) in self.state.history().iter().enumerate() {
                    writeln!(self.writer, "{index:2}: {entry}")?;
                }
            }
            Some("-p") => {
                for (index, entry) in self.state.history().iter().enumerate() {
                    let pid = self
                        .state
                        .pids()
                        .get(index)
                        .copied()
                        .unwrap_or(PidRecord::NoProcess);
                    writeln!(self.writer, "{index:2}: {entry:<12} {pid}")?;
                }
            }
            Some(other) => {
                writeln!(self.writer, "history: invalid option -- '{other}'")?;
            }
        }
        Ok(CommandStatus::Continue)
    }

    fn run_external(&mut self, line: &str, argv: &[String]) -> Result<CommandStatus> {
        match self.spawner.spawn_wait(argv) {
            Ok(outcome) => {
                self.state.record(line, PidRecord::Process(outcome.pid));
            }
            Err(SpawnError::NotFound(program)) => {
                writeln!(self.writer, "{program}: Command not found.")?;
                self.state.record(line, PidRecord::NoProcess);
            }
            Err(err) => return Err(err.into()),
        }
        self.writer.flush()?;
        Ok(CommandStatus::Continue)
    }
}
