use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::{Map, Value as JsonValue};

/// Top-level object of the data file, exposed to the template as its context.
pub type TemplateData = Map<String, JsonValue>;

pub fn load(path: Option<&Path>) -> Result<TemplateData> {
    let Some(path) = path else {
        tracing::debug!("no data file given; rendering with an empty context");
        return Ok(TemplateData::new());
    };

    let raw = fs::read(path).with_context(|| format!("reading data file {}", path.display()))?;
    let data =
        from_slice(&raw).with_context(|| format!("unmarshaling data file {}", path.display()))?;

    tracing::debug!(path = %path.display(), keys = data.len(), "loaded template data");
    Ok(data)
}

/// Decodes a JSON document that must be an object at the top level.
pub fn from_slice(raw: &[u8]) -> Result<TemplateData> {
    let data: TemplateData = serde_json::from_slice(raw)?;
    Ok(data)
}
