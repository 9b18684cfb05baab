use std::path::PathBuf;

use nix::errno::Errno;
use nix::unistd::Pid;
use thiserror::Error;

use crate::fd::Fd;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("open {}: {source}", path.display())]
    Open { path: PathBuf, source: Errno },

    #[error("dup2({old}, {new}): {source}")]
    Dup2 { old: Fd, new: Fd, source: Errno },

    #[error("close({fd}): {source}")]
    Close { fd: Fd, source: Errno },

    #[error("fstat({fd}): {source}")]
    Stat { fd: Fd, source: Errno },

    #[error("fork: {0}")]
    Fork(#[source] Errno),

    #[error("waitpid({pid}): {source}")]
    Wait { pid: Pid, source: Errno },

    #[error("exec {path}: {source}")]
    Exec { path: String, source: Errno },

    #[error("argument {0:?} contains an interior NUL byte")]
    InteriorNul(String),
}

impl Error {
    /// The errno behind this failure. Rejected arguments map to `EINVAL`,
    /// which is what the kernel would have said had they reached it.
    pub fn errno(&self) -> Errno {
        match self {
            Error::Open { source, .. }
            | Error::Dup2 { source, .. }
            | Error::Close { source, .. }
            | Error::Stat { source, .. }
            | Error::Wait { source, .. }
            | Error::Exec { source, .. } => *source,
            Error::Fork(source) => *source,
            Error::InteriorNul(_) => Errno::EINVAL,
        }
    }
}
