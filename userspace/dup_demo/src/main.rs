//! Open a file read-only and duplicate its descriptor onto a fixed number.
//!
//! Failures are not fatal: a failed call prints `-1` just as the raw syscall
//! would have returned, and the reason goes to the log.

use std::path::PathBuf;

use clap::Parser;
use log::{info, warn};
use minilib::{Fd, INVALID_FD};

#[derive(Parser)]
#[command(name = "dup_demo")]
#[command(about = "Duplicate a file descriptor with dup2", long_about = None)]
struct Args {
    /// File to open read-only
    #[arg(short, long, default_value = "dup")]
    path: PathBuf,

    /// Descriptor number to duplicate onto
    #[arg(short, long, default_value_t = 7, allow_negative_numbers = true)]
    target_fd: Fd,
}

fn main() {
    minilib::init_logging();
    let args = Args::parse();

    let fd = minilib::open_read_only(&args.path).unwrap_or_else(|e| {
        warn!("{}", e);
        INVALID_FD
    });
    println!("OLD File Descriptor: {}", fd);

    let fd1 = minilib::dup2(fd, args.target_fd).unwrap_or_else(|e| {
        warn!("{}", e);
        INVALID_FD
    });
    println!("NEW File Descriptor: {}", fd1);

    if fd != INVALID_FD && fd1 != INVALID_FD {
        match minilib::same_file(fd, fd1) {
            Ok(same) => info!("descriptors {} and {} share a file: {}", fd, fd1, same),
            Err(e) => warn!("{}", e),
        }
    }
}
