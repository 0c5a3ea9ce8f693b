mod app;
mod cli;
mod config;
mod consts;
mod error;
mod output;
mod tracker;
mod utils;

use clap::Parser;

use cli::Cli;
use config::Config;
use utils::init_logger;

fn main() {
    let config = Config::load();
    let cli = Cli::parse().with_config(&config);
    init_logger(cli.debug);

    if let Err(e) = app::run(cli, &config) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
