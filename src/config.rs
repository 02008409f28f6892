use std::path::{Path, PathBuf};

use crate::cli::Cli;

/// Template name used when the source is read from stdin.
pub const STDIN_NAME: &str = "<stdin>";

/// Where the template text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// Both a missing argument and `-` select stdin.
    pub fn from_arg(arg: Option<PathBuf>) -> Self {
        match arg {
            None => InputSource::Stdin,
            Some(path) if path.as_os_str() == "-" => InputSource::Stdin,
            Some(path) => InputSource::File(path),
        }
    }

    /// Logical name the parsed template is registered under.
    pub fn name(&self) -> String {
        match self {
            InputSource::Stdin => STDIN_NAME.to_string(),
            InputSource::File(path) => path.display().to_string(),
        }
    }
}

/// Everything a single invocation needs, resolved once from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub input: InputSource,
    pub data_file: Option<PathBuf>,
    pub strict: bool,
    pub verbosity: u8,
}

impl Settings {
    pub fn from_cli(cli: Cli) -> Self {
        let data_file = cli
            .data
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);

        Self {
            input: InputSource::from_arg(cli.file),
            data_file,
            strict: cli.strict,
            verbosity: cli.verbose,
        }
    }

    pub fn data_path(&self) -> Option<&Path> {
        self.data_file.as_deref()
    }
}

#[cfg(test)]
impl Default for Settings {
    fn default() -> Self {
        Self {
            input: InputSource::Stdin,
            data_file: None,
            strict: false,
            verbosity: 0,
        }
    }
}
