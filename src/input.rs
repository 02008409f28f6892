use std::fs::File;
use std::io::Read;

use anyhow::{Context, Result};

use crate::config::InputSource;

/// Reads the whole template into memory. `stdin` is only consulted for
/// [`InputSource::Stdin`].
pub fn read_template(source: &InputSource, stdin: impl Read) -> Result<String> {
    match source {
        InputSource::Stdin => {
            tracing::debug!("reading template from stdin");
            read_all(stdin)
        }
        InputSource::File(path) => {
            tracing::debug!(path = %path.display(), "reading template file");
            let file = File::open(path)
                .with_context(|| format!("opening template file {}", path.display()))?;
            read_all(file)
        }
    }
}

fn read_all(mut reader: impl Read) -> Result<String> {
    let mut body = String::new();
    reader
        .read_to_string(&mut body)
        .context("reading template")?;
    Ok(body)
}
