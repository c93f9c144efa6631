use std::io::Read;

use serde::ser::{Serialize, SerializeSeq, Serializer};
use serde_json::Value;

use crate::codec;
use crate::error::{FieldError, Result};
use crate::loader;
use crate::record::Record;
use crate::schema::Schema;

/// Ordered list of records sharing one schema
#[derive(Clone, Debug)]
pub struct RecordList {
    schema: &'static Schema,
    records: Vec<Record>,
}

impl RecordList {
    pub fn new(schema: &'static Schema) -> Self {
        RecordList {
            schema,
            records: Vec::new(),
        }
    }

    /// Reads a JSON array of objects from `reader`, keeping array order.
    /// An empty stream gives an empty list.
    pub fn decode<R: Read>(schema: &'static Schema, reader: R) -> Result<Self> {
        let mut list = RecordList::new(schema);
        list.populate(reader)?;
        Ok(list)
    }

    /// Replaces the contents of this list with the array read from `reader`
    pub fn populate<R: Read>(&mut self, reader: R) -> Result<()> {
        if let Some(items) = codec::decode_array(reader)? {
            *self = loader::list_from_maps(self.schema, &items)?;
        }
        Ok(())
    }

    pub fn schema(&self) -> &'static Schema {
        self.schema
    }

    pub fn push(&mut self, record: Record) -> Result<()> {
        if !record.schema().same_as(self.schema) {
            return Err(FieldError::SchemaMismatch {
                expected: self.schema.name,
                found: record.type_name(),
            });
        }
        self.records.push(record);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&Record> {
        self.records.get(idx)
    }

    pub fn get_mut(&mut self, idx: usize) -> Option<&mut Record> {
        self.records.get_mut(idx)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn to_json(&self) -> Value {
        Value::Array(self.records.iter().map(Record::to_json).collect())
    }

    pub fn encode_json(&self) -> String {
        self.to_json().to_string()
    }

    pub fn format_json(&self) -> String {
        codec::pretty(&self.to_json())
    }

    /// One display line per record, each terminated by a newline
    pub fn format_display(&self) -> String {
        let mut text = String::new();
        for record in &self.records {
            text.push_str(&record.format_display());
            text.push('\n');
        }
        text
    }
}

impl PartialEq for RecordList {
    fn eq(&self, other: &Self) -> bool {
        self.schema.same_as(other.schema) && self.records == other.records
    }
}

impl Serialize for RecordList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.records.len()))?;
        for record in &self.records {
            seq.serialize_element(record)?;
        }
        seq.end()
    }
}

impl IntoIterator for RecordList {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a RecordList {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
