use log::debug;
use nix::sys::wait::{self, WaitStatus};
use nix::unistd::{self, ForkResult, Pid};

use crate::error::{Error, Result};
use crate::flush_stdout;

/// Which side of a [`fork`] the caller is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fork {
    Parent { child: Pid },
    Child,
}

/// How a waited-for child finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildStatus {
    Exited(i32),
    Signaled(i32),
    Other,
}

pub fn getpid() -> Pid {
    unistd::getpid()
}

pub fn getppid() -> Pid {
    unistd::getppid()
}

/// Create a child process. Pending stdout is flushed first so buffered text
/// is not written by both processes.
///
/// # Safety
///
/// Same contract as `fork(2)`: if the caller is multithreaded, the child may
/// only call async-signal-safe functions until it execs or exits.
pub unsafe fn fork() -> Result<Fork> {
    flush_stdout();
    match unistd::fork().map_err(Error::Fork)? {
        ForkResult::Parent { child } => {
            debug!("fork() = {}", child);
            Ok(Fork::Parent { child })
        }
        ForkResult::Child => Ok(Fork::Child),
    }
}

/// Block until `pid` changes state. Equivalent to `waitpid(pid, &status, 0)`.
pub fn waitpid(pid: Pid) -> Result<ChildStatus> {
    let status = wait::waitpid(pid, None).map_err(|source| Error::Wait { pid, source })?;
    debug!("waitpid({}) = {:?}", pid, status);
    Ok(match status {
        WaitStatus::Exited(_, code) => ChildStatus::Exited(code),
        WaitStatus::Signaled(_, signal, _) => ChildStatus::Signaled(signal as i32),
        _ => ChildStatus::Other,
    })
}
