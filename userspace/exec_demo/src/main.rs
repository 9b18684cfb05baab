//! Print our PID, then replace the process image. Nothing after the exec
//! runs unless it fails.

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;

const DEFAULT_PROGRAM: &str = "/bin/ls";
const DEFAULT_ARGV: [&str; 2] = ["ls", "-l"];

#[derive(Parser)]
#[command(name = "exec_demo")]
#[command(about = "Replace the process image with execl", long_about = None)]
struct Args {
    /// Program to exec
    #[arg(short, long)]
    program: Option<String>,

    /// Full argv for the new image, argv[0] included
    #[arg(last = true)]
    argv: Vec<String>,
}

impl Args {
    fn resolve(self) -> (String, Vec<String>) {
        match (self.program, self.argv) {
            (None, argv) if argv.is_empty() => (
                DEFAULT_PROGRAM.to_string(),
                DEFAULT_ARGV.iter().map(|s| s.to_string()).collect(),
            ),
            (None, argv) => (DEFAULT_PROGRAM.to_string(), argv),
            (Some(program), argv) if argv.is_empty() => {
                let name = Path::new(&program)
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| program.clone());
                (program, vec![name])
            }
            (Some(program), argv) => (program, argv),
        }
    }
}

fn main() -> ExitCode {
    minilib::init_logging();
    let (program, argv) = Args::parse().resolve();

    println!("Before execl: current process PID: {}", minilib::getpid());

    let argv: Vec<&str> = argv.iter().map(String::as_str).collect();
    let err = minilib::execl(&program, &argv);

    log::debug!("{}", err);
    minilib::perror("execl failed", &err.errno());
    ExitCode::FAILURE
}
