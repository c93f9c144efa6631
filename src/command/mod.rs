mod decode;
mod fields;
mod patch;

use anyhow::{anyhow, Result};
use fielder::Schema;

use crate::dtos;

pub use decode::decode;
pub use fields::{fields, types};
pub use patch::patch;

/// Type name for endpoints answering with a bare array of strings
const STRING_LIST: &str = "StringList";

fn schema_for(type_name: &str) -> Result<&'static Schema> {
    dtos::lookup(type_name).ok_or_else(|| {
        anyhow!("Unknown type '{type_name}'; run 'singdto types' for the list")
    })
}
