//! Thin wrappers over the POSIX calls the demos exercise.
//!
//! Every wrapper is a single syscall. Failures come back as [`Error`] with the
//! raw [`Errno`] attached, so callers can print either a `perror`-style line
//! or a full context chain.

use std::io::Write;

pub use nix::errno::Errno;
pub use nix::unistd::Pid;

mod error;
mod exec;
mod fd;
mod process;

pub use error::{Error, Result};
pub use exec::{execl, perror, strerror};
pub use fd::{close, dup2, open_read_only, same_file, Fd, INVALID_FD};
pub use process::{fork, getpid, getppid, waitpid, ChildStatus, Fork};

/// Initialise the `env_logger` backend. Defaults to `warn`; `RUST_LOG` overrides.
pub fn init_logging() {
    init_logging_with_default("warn");
}

pub fn init_logging_with_default(filter: &str) {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter))
        .format_timestamp(None)
        .try_init();
}

/// Flush stdout, ignoring errors: a closed stdout is not worth failing a demo over.
pub(crate) fn flush_stdout() {
    let _ = std::io::stdout().flush();
}
