mod errors;

use std::fmt::Write as _;
use std::io::Write;

use anyhow::{Context, Result};
use minijinja::value::{Value, ValueKind};
use minijinja::{
    AutoEscape, Environment, Error as TemplateError, ErrorKind, Output, State, Template,
    UndefinedBehavior, escape_formatter,
};

use crate::config::Settings;
use crate::data::TemplateData;

use errors::describe_template_error;

/// Builds an engine tuned for plain-text configuration files: no escaping,
/// trailing newline preserved, JSON-style scalars, undefined handling
/// chosen by `--strict`.
pub fn environment<'source>(settings: &Settings) -> Environment<'source> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.set_auto_escape_callback(|_| AutoEscape::None);
    env.set_formatter(json_scalar_formatter);

    let undefined = if settings.strict {
        UndefinedBehavior::Strict
    } else {
        UndefinedBehavior::Lenient
    };
    env.set_undefined_behavior(undefined);

    env
}

/// Prints booleans as `true`/`false` and null as nothing, the way the values
/// are spelled in the data file. Everything else uses the default formatter.
fn json_scalar_formatter(
    out: &mut Output<'_>,
    state: &State<'_, '_>,
    value: &Value,
) -> Result<(), TemplateError> {
    match value.kind() {
        ValueKind::Bool => {
            let text = if value.is_true() { "true" } else { "false" };
            out.write_str(text).map_err(|err| {
                TemplateError::new(ErrorKind::WriteFailure, "failed to write value")
                    .with_source(err)
            })
        }
        ValueKind::None => Ok(()),
        _ => escape_formatter(out, state, value),
    }
}

pub fn parse<'env, 'source>(
    env: &'env Environment<'source>,
    name: &'source str,
    source: &'source str,
) -> Result<Template<'env, 'source>> {
    tracing::debug!(template = name, bytes = source.len(), "parsing template");
    env.template_from_named_str(name, source)
        .map_err(|err| describe_template_error(name, err))
        .context("parsing template")
}

/// Streams the rendered output straight into `out`; whatever was written
/// before a failure stays written.
pub fn execute(
    template: &Template<'_, '_>,
    data: &TemplateData,
    mut out: impl Write,
) -> Result<()> {
    tracing::debug!(template = template.name(), "executing template");
    template
        .render_captured_to(data, &mut out)
        .map_err(|err| describe_template_error(template.name(), err))
        .context("executing template")?;
    out.flush().context("executing template")?;
    Ok(())
}
