use std::env;
use std::ffi::OsString;
use std::path::PathBuf;
use std::str::FromStr;

use pico_args::Arguments;
use thiserror::Error;

use crate::constants::{defaults, envvars};

#[derive(Error, Debug)]
pub enum ArgsError {
    #[error("unknown output format '{0}', expected 'text' or 'json'")]
    UnknownFormat(String),
    #[error("expected field=value, got '{0}'")]
    BadAssignment(String),
    #[error("argument {0:?} is not valid UTF-8")]
    NotUtf8(OsString),
    #[error(transparent)]
    Parse(#[from] pico_args::Error),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ArgsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ArgsError::UnknownFormat(s.to_string())),
        }
    }
}

impl OutputFormat {
    /// Format configured through the environment, `text` when unset
    pub fn from_env() -> Result<Self, ArgsError> {
        env::var(envvars::OUTPUT_FORMAT)
            .unwrap_or_else(|_| defaults::OUTPUT_FORMAT.to_string())
            .parse()
    }
}

pub struct FieldsArgs {
    pub type_name: String,
}

pub struct DecodeArgs {
    pub type_name: String,
    pub list: bool,
    pub format: OutputFormat,
    pub path: Option<PathBuf>,
}

impl DecodeArgs {
    pub fn parse(args: &mut Arguments) -> Result<Self, ArgsError> {
        // flags go first; pico-args hands out free arguments in order
        let list = args.contains("--list");
        let format = if args.contains("--json") {
            OutputFormat::Json
        } else if args.contains("--text") {
            OutputFormat::Text
        } else {
            OutputFormat::from_env()?
        };
        Ok(DecodeArgs {
            type_name: args.free_from_str()?,
            list,
            format,
            path: args.opt_free_from_str()?,
        })
    }
}

pub struct PatchArgs {
    pub type_name: String,
    pub assignments: Vec<(String, String)>,
}

impl PatchArgs {
    pub fn parse(mut args: Arguments) -> Result<Self, ArgsError> {
        let type_name = args.free_from_str()?;
        let assignments = args
            .finish()
            .into_iter()
            .map(|arg| {
                let arg = arg.into_string().map_err(ArgsError::NotUtf8)?;
                split_assignment(&arg)
            })
            .collect::<Result<_, _>>()?;
        Ok(PatchArgs {
            type_name,
            assignments,
        })
    }
}

fn split_assignment(arg: &str) -> Result<(String, String), ArgsError> {
    match arg.split_once('=') {
        Some((field, value)) if !field.is_empty() => Ok((field.to_string(), value.to_string())),
        _ => Err(ArgsError::BadAssignment(arg.to_string())),
    }
}
