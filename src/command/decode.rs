use anyhow::{Context, Result};
use fielder::{Record, RecordList, Schema, StringList};

use super::{schema_for, STRING_LIST};
use crate::argsets::{DecodeArgs, OutputFormat};
use crate::helpers::open_input;

pub fn decode(args: DecodeArgs) -> Result<()> {
    let text = if args.type_name == STRING_LIST {
        render_strings(open_input(args.path.as_deref())?, args.format)?
    } else {
        let schema = schema_for(&args.type_name)?;
        render(schema, open_input(args.path.as_deref())?, args.list, args.format)?
    };
    print!("{text}");
    Ok(())
}

/// Bare array of strings, one per line as text
fn render_strings(input: impl std::io::Read, format: OutputFormat) -> Result<String> {
    let list = StringList::decode(input).with_context(|| format!("could not decode {STRING_LIST}"))?;
    log::info!("Decoded {} strings", list.len());
    let text = match format {
        OutputFormat::Text if list.is_empty() => String::new(),
        OutputFormat::Text => list.format_display() + "\n",
        OutputFormat::Json => list.format_json() + "\n",
    };
    Ok(text)
}

fn render(
    schema: &'static Schema,
    input: impl std::io::Read,
    list: bool,
    format: OutputFormat,
) -> Result<String> {
    let context = || format!("could not decode {}", schema.name());
    let text = if list {
        let records = RecordList::decode(schema, input).with_context(context)?;
        log::info!("Decoded {} {} records", records.len(), schema.name());
        match format {
            OutputFormat::Text => records.format_display(),
            OutputFormat::Json => records.format_json() + "\n",
        }
    } else {
        let record = Record::decode(schema, input).with_context(context)?;
        log::info!("Decoded {} with fields {:?}", schema.name(), record.fields_present());
        match format {
            OutputFormat::Text => record.format_display() + "\n",
            OutputFormat::Json => record.format_json() + "\n",
        }
    };
    Ok(text)
}
