//! Launcher commands.

pub mod list;
pub mod run;

use crate::config::Config;

/// One runnable demo binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Demo {
    Dup,
    Fork,
    ForkTree,
    Exec,
}

impl Demo {
    pub const ALL: [Demo; 4] = [Demo::Dup, Demo::Fork, Demo::ForkTree, Demo::Exec];

    pub fn name(self) -> &'static str {
        match self {
            Demo::Dup => "dup",
            Demo::Fork => "fork",
            Demo::ForkTree => "fork-tree",
            Demo::Exec => "exec",
        }
    }

    pub fn binary(self) -> &'static str {
        match self {
            Demo::Dup => "dup_demo",
            Demo::Fork => "fork_demo",
            Demo::ForkTree => "fork_tree_demo",
            Demo::Exec => "exec_demo",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Demo::Dup => "open a file and dup2 its descriptor onto a fixed number",
            Demo::Fork => "fork once; parent and child both print, no wait (child may outlive parent)",
            Demo::ForkTree => "fork two children; parent waits on the first only (second may outlive it)",
            Demo::Exec => "print the PID, then replace the image with execl",
        }
    }

    pub fn from_name(name: &str) -> Option<Demo> {
        Demo::ALL.into_iter().find(|d| d.name() == name)
    }

    /// Command-line arguments carrying the configured values to the binary.
    pub fn args(self, config: &Config) -> Vec<String> {
        match self {
            Demo::Dup => vec![
                "--path".to_string(),
                config.dup.path.display().to_string(),
                "--target-fd".to_string(),
                config.dup.target_fd.to_string(),
            ],
            Demo::Exec => {
                let mut args = Vec::new();
                if let Some(program) = &config.exec.program {
                    args.push("--program".to_string());
                    args.push(program.clone());
                }
                if !config.exec.argv.is_empty() {
                    args.push("--".to_string());
                    args.extend(config.exec.argv.iter().cloned());
                }
                args
            }
            Demo::Fork | Demo::ForkTree => Vec::new(),
        }
    }
}
