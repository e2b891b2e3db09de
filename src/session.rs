// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Per-session history and PID bookkeeping for the shell loop.
// Author: Lukas Bower

//! Per-session history and PID bookkeeping for the shell loop.

use std::fmt;

use crate::ring::Ring;

/// Number of command lines retained for `history`.
pub const HISTORY_CAPACITY: usize = 15;
/// Number of process records retained for `history -p`.
pub const PID_CAPACITY: usize = 15;

/// Process outcome recorded for one processed command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PidRecord {
    /// An external command ran under this process identifier.
    Process(u32),
    /// The line was handled without spawning a process.
    NoProcess,
}

impl fmt::Display for PidRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Process(pid) => write!(f, "{pid}"),
            Self::NoProcess => write!(f, "-1"),
        }
    }
}

/// Mutable state carried across loop iterations: the bounded ring of raw
/// command lines and the parallel ring of process records.
///
/// Every processed line appends to both rings (built-ins record
/// [`PidRecord::NoProcess`]), so the rings stay index-aligned and the
/// `history -p` pairing is always well defined.
#[derive(Debug)]
pub struct SessionState {
    history: Ring<String>,
    pids: Ring<PidRecord>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    /// Create empty session state with the standard ring capacities.
    #[must_use]
    pub fn new() -> Self {
        Self {
            history: Ring::new(HISTORY_CAPACITY),
            pids: Ring::new(PID_CAPACITY),
        }
    }

    /// Record a processed line together with its process outcome.
    pub fn record(&mut self, line: &str, pid: PidRecord) {
        self.history.push(line.to_owned());
        self.pids.push(pid);
    }

    /// History entry at `index`, if one is stored.
    #[must_use]
    pub fn entry(&self, index: usize) -> Option<&str> {
        self.history.get(index).map(String::as_str)
    }

    /// Ring of stored command lines, oldest first.
    #[must_use]
    pub fn history(&self) -> &Ring<String> {
        &self.history
    }

    /// Ring of stored process records, oldest first.
    #[must_use]
    pub fn pids(&self) -> &Ring<PidRecord> {
        &self.pids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_keeps_rings_aligned() {
        let mut state = SessionState::new();
        state.record("cd /tmp", PidRecord::NoProcess);
        state.record("ls -l", PidRecord::Process(42));
        assert_eq!(state.history().len(), state.pids().len());
        assert_eq!(state.entry(1), Some("ls -l"));
        assert_eq!(state.pids().get(1), Some(&PidRecord::Process(42)));
    }

    #[test]
    fn rings_never_exceed_capacity() {
        let mut state = SessionState::new();
        for i in 0..(HISTORY_CAPACITY + 3) {
            state.record(&format!("cmd {i}"), PidRecord::Process(i as u32));
        }
        assert_eq!(state.history().len(), HISTORY_CAPACITY);
        assert_eq!(state.pids().len(), PID_CAPACITY);
        // Oldest three evicted.
        assert_eq!(state.entry(0), Some("cmd 3"));
    }

    #[test]
    fn sentinel_renders_as_minus_one() {
        assert_eq!(PidRecord::NoProcess.to_string(), "-1");
        assert_eq!(PidRecord::Process(123).to_string(), "123");
    }
}
