mod assemble;
mod cli;
mod config;
mod ingest;
mod journal;
mod logging;
mod model;
mod storage;
mod totals;

use std::process;

use config::Config;

fn main() {
    logging::init();

    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            process::exit(1);
        }
    };

    if let Err(e) = cli::run(&config) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
