// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Spawn-and-wait seam between the dispatcher and the OS.
// Author: Lukas Bower

//! Spawn-and-wait seam between the dispatcher and the OS.
//!
//! External commands go through the [`Spawner`] trait so the dispatcher can
//! be exercised against [`MockSpawner`] without creating real processes.

use std::io;
use std::process::Command;

use log::debug;
use thiserror::Error;

/// Errors surfaced while launching an external command.
#[derive(Debug, Error)]
pub enum SpawnError {
    /// The program name did not resolve to an executable on the search path.
    /// Recoverable; the shell reports it and keeps running.
    #[error("{0}: Command not found.")]
    NotFound(String),
    /// Process creation failed for a reason other than lookup, such as
    /// resource exhaustion. Fatal to the shell.
    #[error("failed to spawn {program}: {source}")]
    Spawn {
        /// Program name that was being launched.
        program: String,
        /// Underlying operating-system error.
        #[source]
        source: io::Error,
    },
}

/// Result of running one external command to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnOutcome {
    /// Process identifier of the spawned child.
    pub pid: u32,
    /// Exit code reported by the child, when it exited normally. Only used
    /// to unblock the loop; the shell does not inspect it.
    pub exit_code: Option<i32>,
}

/// Seam between the dispatcher and the platform spawn-and-wait primitive.
pub trait Spawner {
    /// Launch `argv[0]` with the remaining tokens as arguments and block
    /// until the child terminates. `argv` must be non-empty.
    fn spawn_wait(&mut self, argv: &[String]) -> Result<SpawnOutcome, SpawnError>;
}

/// Spawner backed by [`std::process::Command`], which resolves bare program
/// names through the platform executable search path.
#[derive(Debug, Default)]
pub struct SystemSpawner;

impl Spawner for SystemSpawner {
    fn spawn_wait(&mut self, argv: &[String]) -> Result<SpawnOutcome, SpawnError> {
        let program = &argv[0];
        let mut child = Command::new(program)
            .args(&argv[1..])
            .spawn()
            .map_err(|err| match err.kind() {
                io::ErrorKind::NotFound => SpawnError::NotFound(program.clone()),
                _ => SpawnError::Spawn {
                    program: program.clone(),
                    source: err,
                },
            })?;
        let pid = child.id();
        debug!("spawned {program} as pid {pid}");
        let status = child.wait().map_err(|err| SpawnError::Spawn {
            program: program.clone(),
            source: err,
        })?;
        Ok(SpawnOutcome {
            pid,
            exit_code: status.code(),
        })
    }
}

/// Scripted spawner used by dispatcher tests.
#[derive(Debug)]
pub struct MockSpawner {
    next_pid: u32,
    /// Argument vectors received, in call order.
    pub calls: Vec<Vec<String>>,
    /// Program names that should report "not found".
    pub missing: Vec<String>,
    /// When set, every spawn fails fatally.
    pub exhausted: bool,
}

impl MockSpawner {
    /// Create a mock handing out process ids from 100 upwards.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_pid: 100,
            calls: Vec::new(),
            missing: Vec::new(),
            exhausted: false,
        }
    }
}

impl Default for MockSpawner {
    fn default() -> Self {
        Self::new()
    }
}

impl Spawner for MockSpawner {
    fn spawn_wait(&mut self, argv: &[String]) -> Result<SpawnOutcome, SpawnError> {
        self.calls.push(argv.to_vec());
        let program = argv[0].clone();
        if self.exhausted {
            return Err(SpawnError::Spawn {
                program,
                source: io::Error::other("process table full"),
            });
        }
        if self.missing.iter().any(|name| *name == program) {
            return Err(SpawnError::NotFound(program));
        }
        let pid = self.next_pid;
        self.next_pid += 1;
        Ok(SpawnOutcome {
            pid,
            exit_code: Some(0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_hands_out_sequential_pids() {
        let mut spawner = MockSpawner::new();
        let argv = vec!["true".to_owned()];
        let first = spawner.spawn_wait(&argv).unwrap();
        let second = spawner.spawn_wait(&argv).unwrap();
        assert_eq!(first.pid, 100);
        assert_eq!(second.pid, 101);
        assert_eq!(spawner.calls.len(), 2);
    }

    #[test]
    fn mock_reports_missing_programs() {
        let mut spawner = MockSpawner::new();
        spawner.missing.push("nosuch".to_owned());
        let err = spawner
            .spawn_wait(&["nosuch".to_owned()])
            .unwrap_err();
        assert_eq!(err.to_string(), "nosuch: Command not found.");
    }
}
