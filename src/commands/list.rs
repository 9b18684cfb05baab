//! List available demos.

use anyhow::Result;
use colored::Colorize;

use super::Demo;

pub fn list_demos() -> Result<()> {
    println!("{}\n", "Available demos".cyan().bold());

    for demo in Demo::ALL {
        println!(
            "  {} {} ({})",
            format!("{:<10}", demo.name()).green(),
            demo.description(),
            demo.binary().dimmed()
        );
    }

    Ok(())
}
