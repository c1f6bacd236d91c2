mod cli;

use std::process;

use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Command::Eval { expression } => match calctek::calculate(&expression) {
            Ok(result) => println!("{result}"),
            Err(why) => {
                eprintln!("{why}");
                process::exit(1);
            }
        },
    }
}
