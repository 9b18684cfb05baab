use std::ffi::{CStr, CString};
use std::io::Write;

use nix::errno::Errno;
use nix::unistd;

use crate::error::Error;
use crate::flush_stdout;

fn c_string(s: &str) -> Result<CString, Error> {
    CString::new(s).map_err(|_| Error::InteriorNul(s.to_string()))
}

/// Replace the current process image with `path`, passing `argv` verbatim
/// (`argv[0]` included). Only returns on failure.
pub fn execl(path: &str, argv: &[&str]) -> Error {
    let c_path = match c_string(path) {
        Ok(p) => p,
        Err(e) => return e,
    };
    let c_argv = match argv.iter().map(|a| c_string(a)).collect::<Result<Vec<_>, _>>() {
        Ok(a) => a,
        Err(e) => return e,
    };

    flush_stdout();
    match unistd::execv(&c_path, &c_argv) {
        Ok(never) => match never {},
        Err(source) => Error::Exec {
            path: path.to_string(),
            source,
        },
    }
}

/// Write `prefix: <strerror text>` to stderr, like `perror(3)`.
pub fn perror(prefix: &str, errno: &Errno) {
    let _ = writeln!(std::io::stderr(), "{}", perror_line(prefix, *errno));
}

fn perror_line(prefix: &str, errno: Errno) -> String {
    format!("{}: {}", prefix, strerror(errno))
}

/// The C library's message for `errno`, which can differ from nix's own table.
pub fn strerror(errno: Errno) -> String {
    let mut buf = [0 as libc::c_char; 256];
    // SAFETY: the buffer is valid for `buf.len()` bytes; the XSI variant
    // NUL-terminates on success.
    let rc = unsafe { libc::strerror_r(errno as i32, buf.as_mut_ptr(), buf.len()) };
    if rc != 0 {
        return format!("Unknown error {}", errno as i32);
    }
    // SAFETY: NUL-terminated by a successful strerror_r.
    unsafe { CStr::from_ptr(buf.as_ptr()) }
        .to_string_lossy()
        .into_owned()
}
