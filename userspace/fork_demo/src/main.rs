//! Fork once and print from both sides. The parent does not wait.

use anyhow::{Context, Result};
use minilib::Fork;

fn main() -> Result<()> {
    minilib::init_logging();

    println!("Before fork");

    // SAFETY: nothing has spawned a thread yet.
    match unsafe { minilib::fork() }.context("fork failed")? {
        Fork::Child => {
            println!("I am child havin id: {}", minilib::getpid());
            println!("My parent id is: {}", minilib::getppid());
        }
        Fork::Parent { child } => {
            println!("My child id is: {}", child);
            println!("I am parent havin id: {}", minilib::getpid());
        }
    }

    println!("Common");
    Ok(())
}
