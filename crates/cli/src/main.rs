use std::process::ExitCode;

use clap::Parser;

mod commands;
mod printer;

use commands::FindArgs;
use datefind_runtime::{PROGRAM_NAME, logging};

#[derive(Debug, Parser)]
#[command(
    name = PROGRAM_NAME,
    version,
    about = "Find files by creation, modification or access date"
)]
pub struct Cli {
    #[command(flatten)]
    pub find: FindArgs,
}

fn main() -> ExitCode {
    logging::init().ok();

    let cli = Cli::parse();
    commands::find::run(cli.find)
}
