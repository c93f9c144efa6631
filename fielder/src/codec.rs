//! Byte stream to JSON map plumbing shared by [`Record`](crate::Record) and
//! [`RecordList`](crate::RecordList).
//!
//! Parse errors are handed back untouched as [`FieldError::Decode`].

use std::io::Read;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{FieldError, Result};

const READ_CHUNK: usize = 1024;

/// Reads the whole stream into memory
pub fn read_all<R: Read>(mut reader: R) -> Result<Vec<u8>> {
    let mut data = Vec::with_capacity(READ_CHUNK);
    reader.read_to_end(&mut data)?;
    log::debug!("Read {} bytes of JSON", data.len());
    Ok(data)
}

fn parse<T: DeserializeOwned, R: Read>(reader: R) -> Result<Option<T>> {
    let data = read_all(reader)?;
    if data.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    serde_json::from_slice(&data)
        .map(Some)
        .map_err(FieldError::Decode)
}

/// Parses a single JSON object; `None` for an empty stream
pub fn decode_object<R: Read>(reader: R) -> Result<Option<Map<String, Value>>> {
    parse(reader)
}

/// Parses a JSON array of objects; `None` for an empty stream
pub fn decode_array<R: Read>(reader: R) -> Result<Option<Vec<Map<String, Value>>>> {
    parse(reader)
}

/// Parses a JSON array of strings; `None` for an empty stream
pub fn decode_strings<R: Read>(reader: R) -> Result<Option<Vec<String>>> {
    parse(reader)
}

/// Two-space indented rendering
pub fn pretty(value: &Value) -> String {
    format!("{value:#}")
}
