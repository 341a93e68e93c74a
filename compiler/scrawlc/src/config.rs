//! Command-line options.
//!
//! Flags take a single dash (`--` works too). Value flags accept both
//! `-protocol file.txt` and `-protocol=file.txt`; boolean flags are set by
//! their bare name or explicitly with `-verbose=false`.

use std::path::{Path, PathBuf};

use scrawl_parse::Allowlist;
use thiserror::Error;

pub const DEFAULT_PROTOCOL: &str = "protocol.txt";

/// Host component type allowed in archetypes when `-allow` is not given.
pub const DEFAULT_COMPONENT_TYPE: &str = "WorldPosition";

pub const USAGE: &str = "\
Usage: scrawl [options]

Validates a scrawl protocol file.

Options:
  -protocol <file>     Protocol definition (default: protocol.txt)
  -output <file>       File written by -beautify (default: the protocol file)
  -beautify            Rewrite the protocol in canonical form
  -verbose             Print a summary of the definition tree
  -json                Print the definition tree as JSON
  -color               Force colored output
  -allow <type>        Host component type usable in archetypes (repeatable,
                       default: WorldPosition)
  -allow-field <type>  Allowed component field type (repeatable; when given,
                       component fields must use these or declared types)
  -help                Show this help message";

/// Settings for one validation run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerifyConfig {
    pub protocol: PathBuf,
    pub output: Option<PathBuf>,
    pub verbose: bool,
    pub color: bool,
    pub beautify: bool,
    pub json: bool,
    pub component_types: Vec<String>,
    pub component_fields: Vec<String>,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        VerifyConfig {
            protocol: PathBuf::from(DEFAULT_PROTOCOL),
            output: None,
            verbose: false,
            color: false,
            beautify: false,
            json: false,
            component_types: vec![DEFAULT_COMPONENT_TYPE.to_owned()],
            component_fields: Vec::new(),
        }
    }
}

impl VerifyConfig {
    /// Where `-beautify` writes: `-output`, else the protocol file itself.
    pub fn output_path(&self) -> &Path {
        self.output.as_deref().unwrap_or(&self.protocol)
    }

    pub fn allowlist(&self) -> Allowlist {
        Allowlist::new()
            .with_component_types(self.component_types.iter().cloned())
            .with_component_fields(self.component_fields.iter().cloned())
    }
}

/// What the command line asks for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Invocation {
    Help,
    Verify(VerifyConfig),
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ArgsError {
    #[error("flag provided but not defined: -{0}")]
    UnknownFlag(String),
    #[error("flag needs an argument: -{0}")]
    MissingValue(String),
    #[error("invalid boolean value \"{value}\" for -{flag}")]
    InvalidBool { flag: String, value: String },
    #[error("unexpected argument: {0}")]
    UnexpectedArgument(String),
    #[error("must specify a protocol file")]
    EmptyProtocol,
}

fn bool_value(flag: &str, inline: Option<&str>) -> Result<bool, ArgsError> {
    match inline {
        None | Some("1" | "t" | "T" | "true" | "TRUE" | "True") => Ok(true),
        Some("0" | "f" | "F" | "false" | "FALSE" | "False") => Ok(false),
        Some(value) => Err(ArgsError::InvalidBool {
            flag: flag.to_owned(),
            value: value.to_owned(),
        }),
    }
}

fn string_value(
    flag: &str,
    inline: Option<&str>,
    rest: &mut impl Iterator<Item = String>,
) -> Result<String, ArgsError> {
    match inline {
        Some(value) => Ok(value.to_owned()),
        None => rest
            .next()
            .ok_or_else(|| ArgsError::MissingValue(flag.to_owned())),
    }
}

/// Parse the arguments following the program name.
pub fn parse_args<I, S>(args: I) -> Result<Invocation, ArgsError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut config = VerifyConfig::default();
    let mut component_types = Vec::new();
    let mut args = args.into_iter().map(Into::into);

    while let Some(arg) = args.next() {
        let Some(flag) = arg.strip_prefix("--").or_else(|| arg.strip_prefix('-')) else {
            return Err(ArgsError::UnexpectedArgument(arg));
        };
        let (name, inline) = match flag.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (flag, None),
        };
        match name {
            "help" | "h" => return Ok(Invocation::Help),
            "verbose" => config.verbose = bool_value(name, inline)?,
            "color" => config.color = bool_value(name, inline)?,
            "beautify" => config.beautify = bool_value(name, inline)?,
            "json" => config.json = bool_value(name, inline)?,
            "protocol" => config.protocol = PathBuf::from(string_value(name, inline, &mut args)?),
            "output" => {
                let output = string_value(name, inline, &mut args)?;
                config.output = (!output.is_empty()).then(|| PathBuf::from(output));
            }
            "allow" => component_types.push(string_value(name, inline, &mut args)?),
            "allow-field" => config
                .component_fields
                .push(string_value(name, inline, &mut args)?),
            _ => return Err(ArgsError::UnknownFlag(name.to_owned())),
        }
    }

    if !component_types.is_empty() {
        config.component_types = component_types;
    }
    if config.protocol.as_os_str().is_empty() {
        return Err(ArgsError::EmptyProtocol);
    }
    Ok(Invocation::Verify(config))
}

#[cfg(test)]
mod tests;
