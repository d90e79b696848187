use clap::Parser;
use dcmresidue_core::cli::Cli;
use dcmresidue_core::pipeline::run;
use log::error;
use std::process;

fn main() {
    let cli = Cli::parse();

    setup_logging();

    let directory = cli.directory();
    match run(&directory) {
        Ok(outcome) => {
            println!("{}", outcome);
            println!();
        }
        Err(e) => {
            error!("Failed to process {}: {}", directory.display(), e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn setup_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}
