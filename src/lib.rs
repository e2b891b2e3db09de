// Author: Lukas Bower
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Minimal interactive command shell with bounded history and PID tracking.
//!
//! One synchronous read-eval loop: a line is read from standard input,
//! a `!`-prefixed history reference is expanded against a bounded ring of
//! recent lines, the line is tokenized into at most five whitespace-delimited
//! arguments, and the result is either handled by a built-in (`exit`/`quit`,
//! `cd`, `history`) or run as an external program that the shell waits on
//! before prompting again. The last fifteen lines and the matching process
//! ids are kept in parallel FIFO rings for `history` and `history -p`.

pub mod command;
pub mod ring;
pub mod session;
pub mod shell;
pub mod spawn;

pub use command::{clip_line, parse_history_ref, tokenize, HistoryRef, MAX_LINE_LEN, MAX_TOKENS};
pub use ring::Ring;
pub use session::{PidRecord, SessionState, HISTORY_CAPACITY, PID_CAPACITY};
pub use shell::{CommandStatus, Shell};
pub use spawn::{MockSpawner, SpawnError, SpawnOutcome, Spawner, SystemSpawner};
