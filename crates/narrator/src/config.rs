//! Narrator run configuration from CLI arguments and environment variables

use std::env;
use std::path::PathBuf;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputSource {
    /// Notation passed as positional arguments, joined with spaces
    Args(String),

    /// Notation read from a file
    File(PathBuf),

    /// Interactive prompt reading stdin lines
    Stdin,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Debug)]
pub struct NarratorConfig {
    pub input: InputSource,
    pub format: OutputFormat,
}

impl NarratorConfig {
    /// Build config from the process arguments: `--file <path>`, `--json`,
    /// anything else is positional notation. `NARRATOR_FORMAT=json` sets the
    /// default output format.
    pub fn load() -> Self {
        let env_json = env::var("NARRATOR_FORMAT")
            .map(|v| v.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        Self::from_args(env::args().skip(1), env_json)
    }

    fn from_args<I>(args: I, mut json: bool) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut file = None;
        let mut positional: Vec<String> = Vec::new();

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--json" => json = true,
                "--file" => file = args.next().map(PathBuf::from),
                _ => positional.push(arg),
            }
        }

        let input = if let Some(path) = file {
            InputSource::File(path)
        } else if !positional.is_empty() {
            InputSource::Args(positional.join(" "))
        } else {
            InputSource::Stdin
        };

        let format = if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        };

        NarratorConfig { input, format }
    }
}
