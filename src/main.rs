use anyhow::{anyhow, Result};
use env_logger::Env;

use singdto::argsets::{DecodeArgs, FieldsArgs, PatchArgs};
use singdto::command;
use singdto::constants::{defaults, envvars};
use singdto::helpers::load_dotenv;

const CMD_TYPES: &str = "types";
const CMD_FIELDS: &str = "fields";
const CMD_DECODE: &str = "decode";
const CMD_PATCH: &str = "patch";

fn main() -> Result<()> {
    let dotenv_files = load_dotenv();
    env_logger::Builder::from_env(Env::default().filter_or(envvars::LOG_LEVEL, defaults::LOG_LEVEL))
        .init();
    for path in dotenv_files {
        log::debug!("Loaded {}", path.display());
    }

    let mut args = pico_args::Arguments::from_env();
    match args.subcommand()?.as_deref() {
        Some(CMD_TYPES) => command::types(),
        Some(CMD_FIELDS) => command::fields(FieldsArgs {
            type_name: args.free_from_str()?,
        }),
        Some(CMD_DECODE) => command::decode(DecodeArgs::parse(&mut args)?),
        Some(CMD_PATCH) => command::patch(PatchArgs::parse(args)?),
        _ => Err(anyhow!(
            "Subcommand must be one of 'types', 'fields', 'decode', 'patch'"
        )),
    }
}
