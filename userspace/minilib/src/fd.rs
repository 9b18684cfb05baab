use std::os::unix::io::RawFd;
use std::path::Path;

use log::debug;
use nix::fcntl::{self, OFlag};
use nix::sys::stat::{self, Mode};
use nix::unistd;

use crate::error::{Error, Result};

pub type Fd = RawFd;

/// What `open(2)` and `dup2(2)` hand back on failure.
pub const INVALID_FD: Fd = -1;

pub fn open_read_only(path: impl AsRef<Path>) -> Result<Fd> {
    let path = path.as_ref();
    let fd = fcntl::open(path, OFlag::O_RDONLY, Mode::empty()).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("open({}) = {}", path.display(), fd);
    Ok(fd)
}

/// Duplicate `old` onto `new`, closing whatever `new` referred to first.
pub fn dup2(old: Fd, new: Fd) -> Result<Fd> {
    let fd = unistd::dup2(old, new).map_err(|source| Error::Dup2 { old, new, source })?;
    debug!("dup2({}, {}) = {}", old, new, fd);
    Ok(fd)
}

pub fn close(fd: Fd) -> Result<()> {
    unistd::close(fd).map_err(|source| Error::Close { fd, source })
}

/// True when both descriptors refer to the same file (same device and inode).
pub fn same_file(a: Fd, b: Fd) -> Result<bool> {
    let sa = stat::fstat(a).map_err(|source| Error::Stat { fd: a, source })?;
    let sb = stat::fstat(b).map_err(|source| Error::Stat { fd: b, source })?;
    Ok(sa.st_dev == sb.st_dev && sa.st_ino == sb.st_ino)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use nix::errno::Errno;

    use super::*;

    // Well clear of anything the test harness keeps open.
    const TARGET: Fd = 97;

    #[test]
    fn dup2_lands_on_requested_descriptor() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"dup").unwrap();

        let fd = open_read_only(file.path()).unwrap();
        let fd1 = dup2(fd, TARGET).unwrap();

        assert_eq!(fd1, TARGET);
        assert!(same_file(fd, fd1).unwrap());

        close(fd1).unwrap();
        close(fd).unwrap();
    }

    #[test]
    fn distinct_files_are_not_the_same() {
        let a = tempfile::NamedTempFile::new().unwrap();
        let b = tempfile::NamedTempFile::new().unwrap();

        let fa = open_read_only(a.path()).unwrap();
        let fb = open_read_only(b.path()).unwrap();
        assert!(!same_file(fa, fb).unwrap());

        close(fa).unwrap();
        close(fb).unwrap();
    }

    #[test]
    fn missing_file_reports_enoent() {
        let dir = tempfile::tempdir().unwrap();
        let err = open_read_only(dir.path().join("dup")).unwrap_err();
        assert_eq!(err.errno(), Errno::ENOENT);
    }

    #[test]
    fn dup2_of_invalid_descriptor_fails() {
        let err = dup2(INVALID_FD, TARGET + 1).unwrap_err();
        assert_eq!(err.errno(), Errno::EBADF);
    }
}
