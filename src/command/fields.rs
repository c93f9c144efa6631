use anyhow::Result;
use fielder::Schema;
use itertools::Itertools;

use super::{schema_for, STRING_LIST};
use crate::argsets::FieldsArgs;
use crate::dtos;

pub fn types() -> Result<()> {
    let names = dtos::ALL.iter().map(|s| s.name()).chain([STRING_LIST]);
    println!("{}", names.sorted().join("\n"));
    Ok(())
}

pub fn fields(args: FieldsArgs) -> Result<()> {
    let schema = schema_for(&args.type_name)?;
    print!("{}", render_fields(schema));
    Ok(())
}

/// One line per field: wire name, identifier, declared type
fn render_fields(schema: &Schema) -> String {
    let wire_width = schema.fields().iter().map(|f| f.wire.len()).max().unwrap_or(0);
    let ident_width = schema.fields().iter().map(|f| f.ident.len()).max().unwrap_or(0);
    schema
        .fields()
        .iter()
        .map(|f| format!("{:wire_width$}  {:ident_width$}  {}\n", f.wire, f.ident, f.ty))
        .join("")
}
