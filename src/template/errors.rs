use std::error::Error as StdError;
use std::fmt::Write;

use anyhow::anyhow;
use minijinja::Error as TemplateError;

/// Flattens a MiniJinja error into a single diagnostic line naming the
/// template, the line, the error kind and any nested cause.
pub(super) fn describe_template_error(template_name: &str, err: TemplateError) -> anyhow::Error {
    let actual_template = err.name().unwrap_or(template_name).to_string();

    let mut message = String::new();
    let _ = write!(&mut message, "template '{}'", actual_template);

    if let Some(line_no) = err.line() {
        let _ = write!(&mut message, " at line {}", line_no);
    }

    let _ = write!(&mut message, ": {}", err.kind());

    if let Some(detail) = err.detail() {
        let _ = write!(&mut message, ": {}", detail);
    }

    if let Some(source) = StdError::source(&err) {
        let _ = write!(&mut message, " (caused by: {})", source);
    }

    anyhow!(message)
}
