use std::path::PathBuf;

use clap::{ArgAction, Parser};

#[derive(Parser, Clone, Debug)]
#[command(name = "genconf", version)]
#[command(
    about = "Generate a configuration file from a template and JSON data",
    long_about = "genconf reads a MiniJinja template from FILE (or stdin when FILE is omitted or `-`),\n\
renders it with the top-level object of a JSON data file, and writes the result to stdout."
)]
pub struct Cli {
    #[arg(
        value_name = "FILE",
        help = "Template file to render (reads stdin when omitted or `-`)"
    )]
    pub file: Option<PathBuf>,
    #[arg(
        long,
        value_name = "FILE",
        help = "Configuration data file",
        long_help = "Path to a JSON document whose top-level object is exposed to the template.\n\
When omitted or empty, the template is rendered with no data. Only the double-dash\n\
spelling is accepted; `-data` is rejected."
    )]
    pub data: Option<String>,
    #[arg(
        long,
        help = "Fail when the template references a missing key",
        long_help = "By default undefined variables render as empty text. With --strict, any reference\n\
to a key that is not present in the data aborts rendering with an error."
    )]
    pub strict: bool,
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        help = "Log progress to stderr (repeat for more detail)"
    )]
    pub verbose: u8,
}

impl Cli {
    pub fn build() -> Self {
        <Self as Parser>::parse()
    }
}
