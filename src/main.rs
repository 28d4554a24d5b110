mod cli;

use clap::Parser;

fn main() {
    env_logger::init();

    let args = cli::Cli::parse();
    std::process::exit(cli::run(&args));
}
