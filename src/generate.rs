use std::io::{Read, Write};

use anyhow::Result;

use crate::config::Settings;
use crate::{data, input, template};

/// Runs one invocation: read template, load data, parse, execute into `out`.
pub fn run(settings: &Settings, stdin: impl Read, out: impl Write) -> Result<()> {
    let name = settings.input.name();
    let source = input::read_template(&settings.input, stdin)?;
    let data = data::load(settings.data_path())?;

    let env = template::environment(settings);
    let parsed = template::parse(&env, &name, &source)?;
    template::execute(&parsed, &data, out)?;

    tracing::info!(template = %name, "rendered template to stdout");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InputSource;
    use std::fs;
    use std::io::{self, Cursor};
    use tempfile::TempDir;

    fn settings_with_data(dir: &TempDir, json: &str) -> Settings {
        let path = dir.path().join("data.json");
        fs::write(&path, json).unwrap();
        Settings {
            data_file: Some(path),
            ..Settings::default()
        }
    }

    #[test]
    fn renders_stdin_template_with_data_file() {
        let dir = TempDir::new().unwrap();
        let settings = settings_with_data(&dir, r#"{"Name":"World"}"#);

        let mut out = Vec::new();
        run(&settings, Cursor::new("Hello, {{ Name }}!"), &mut out).unwrap();
        assert_eq!(out, b"Hello, World!");
    }

    #[test]
    fn renders_template_file() {
        let dir = TempDir::new().unwrap();
        let template_path = dir.path().join("list.tmpl");
        fs::write(&template_path, "{% for item in Items %}{{ item }} {% endfor %}")
            .unwrap();
        let settings = Settings {
            input: InputSource::File(template_path),
            ..settings_with_data(&dir, r#"{"Items":["a","b","c"]}"#)
        };

        let mut out = Vec::new();
        run(&settings, io::empty(), &mut out).unwrap();
        assert_eq!(out, b"a b c ");
    }

    #[test]
    fn data_is_optional_for_static_templates() {
        let dir = TempDir::new().unwrap();
        let with_data = settings_with_data(&dir, r#"{"unused":1}"#);

        let mut plain = Vec::new();
        run(&Settings::default(), Cursor::new("static\n"), &mut plain).unwrap();
        let mut enriched = Vec::new();
        run(&with_data, Cursor::new("static\n"), &mut enriched).unwrap();

        assert_eq!(plain, b"static\n");
        assert_eq!(plain, enriched);
    }

    #[test]
    fn same_input_renders_identically() {
        let dir = TempDir::new().unwrap();
        let settings = settings_with_data(
            &dir,
            r#"{"n":3,"f":0.5,"ok":false,"nothing":null,"list":[1,2],"map":{"k":"v"}}"#,
        );
        let source = "{{ n }} {{ f }} {{ ok }} {{ nothing }} {{ list|length }} {{ map.k }}";

        let mut first = Vec::new();
        run(&settings, Cursor::new(source), &mut first).unwrap();
        let mut second = Vec::new();
        run(&settings, Cursor::new(source), &mut second).unwrap();

        assert_eq!(first, second);
        assert_eq!(String::from_utf8(first).unwrap(), "3 0.5 false  2 v");
    }

    #[test]
    fn malformed_data_stops_before_rendering() {
        let dir = TempDir::new().unwrap();
        let settings = settings_with_data(&dir, "{not json");

        let mut out = Vec::new();
        let error = run(&settings, Cursor::new("static"), &mut out).unwrap_err();
        assert!(error.to_string().starts_with("unmarshaling data file"));
        assert!(out.is_empty());
    }

    #[test]
    fn missing_template_file_is_not_a_data_error() {
        let dir = TempDir::new().unwrap();
        let settings = Settings {
            input: InputSource::File(dir.path().join("absent.tmpl")),
            ..Settings::default()
        };

        let error = run(&settings, io::empty(), Vec::new()).unwrap_err();
        let message = error.to_string();
        assert!(message.starts_with("opening template file"));
        assert!(!message.contains("data file"));
    }
}
