//! Fork two children from the same parent. The parent blocks on the first
//! child only; the second is left for the system to reap.

use anyhow::{Context, Result};
use log::{debug, warn};
use minilib::Fork;

fn main() -> Result<()> {
    minilib::init_logging();

    println!("Before fork");

    // SAFETY: single-threaded throughout.
    let first = match unsafe { minilib::fork() }.context("first fork failed")? {
        Fork::Child => {
            println!("I am first child havin id: {}", minilib::getpid());
            println!("My parent PID is: {}", minilib::getppid());
            return Ok(());
        }
        Fork::Parent { child } => child,
    };

    // SAFETY: as above.
    let second = match unsafe { minilib::fork() }.context("second fork failed")? {
        Fork::Child => {
            println!("I am second child having PID: {}", minilib::getpid());
            println!("Second child's parent PID is: {}", minilib::getppid());
            return Ok(());
        }
        Fork::Parent { child } => child,
    };

    match minilib::waitpid(first) {
        Ok(status) => debug!("first child {} finished: {:?}", first, status),
        Err(e) => warn!("{}", e),
    }

    println!("I am parent havin PID: {}", minilib::getpid());
    println!("My first child PID is: {}", first);
    println!("My second child PID is: {}", second);
    Ok(())
}
