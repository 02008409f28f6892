//! genconf renders a configuration file from a MiniJinja template and the
//! top-level object of a JSON data file.
//!
//! The template is read from FILE, or stdin when FILE is omitted or `-`, and
//! the result is always written to stdout.

mod cli;
mod config;
mod data;
mod generate;
mod input;
mod logging;
mod template;

use std::io::{self, BufWriter};

use crate::config::Settings;

fn main() {
    let app = cli::Cli::build();
    let settings = Settings::from_cli(app);
    logging::init(settings.verbosity);

    let stdin = io::stdin().lock();
    let stdout = BufWriter::new(io::stdout().lock());
    let outcome = generate::run(&settings, stdin, stdout);

    if let Err(problem) = outcome {
        eprintln!("genconf: {problem:#}");
        std::process::exit(1);
    }
}
