use clap::Parser;
use posrecon::cli::{Cli, run};

fn main() -> std::process::ExitCode {
    run(Cli::parse())
}
