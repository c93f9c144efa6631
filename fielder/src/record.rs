use std::fmt;
use std::io::Read;

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

use crate::codec;
use crate::error::{FieldError, Result};
use crate::loader;
use crate::presence::PresenceSet;
use crate::schema::{FieldDef, Schema};
use crate::value::FieldValue;

/// One JSON object of a declared schema, with per-field presence.
///
/// Replacing a record wholesale is plain assignment of a clone; there is no
/// merge operation.
#[derive(Clone, Debug)]
pub struct Record {
    schema: &'static Schema,
    presence: PresenceSet,
}

impl Record {
    pub fn new(schema: &'static Schema) -> Self {
        Record {
            schema,
            presence: PresenceSet::with_fields(schema.fields.len()),
        }
    }

    /// Builds a record from a decoded JSON object
    pub fn from_map(schema: &'static Schema, from: &Map<String, Value>) -> Result<Self> {
        let mut record = Record::new(schema);
        record.load_map(from)?;
        Ok(record)
    }

    /// Reads one JSON object from `reader`. An empty stream gives an empty record.
    pub fn decode<R: Read>(schema: &'static Schema, reader: R) -> Result<Self> {
        let mut record = Record::new(schema);
        record.populate(reader)?;
        Ok(record)
    }

    pub fn schema(&self) -> &'static Schema {
        self.schema
    }

    pub fn type_name(&self) -> &'static str {
        self.schema.name
    }

    fn lookup(&self, name: &str) -> Result<(usize, &'static FieldDef)> {
        self.schema
            .position(name)
            .map(|idx| (idx, &self.schema.fields[idx]))
            .ok_or_else(|| FieldError::UnknownField {
                record: self.schema.name,
                field: name.to_string(),
            })
    }

    /// Stores `value` under `name` (wire name or identifier) and marks it present
    pub fn set_field(&mut self, name: &str, value: impl Into<FieldValue>) -> Result<()> {
        let (idx, def) = self.lookup(name)?;
        let value = value.into();
        if !value.conforms_to(&def.ty) {
            return Err(FieldError::TypeMismatch {
                field: def.wire,
                value: value.to_string(),
                actual: value.type_name(),
                expected: def.ty.to_string(),
            });
        }
        self.presence.mark_present(idx, value);
        Ok(())
    }

    /// Converts a JSON value to the declared type of `name` and stores it.
    ///
    /// Unlike [`load_map`](Self::load_map) an unknown name is an error. A JSON
    /// `null` clears the field.
    pub fn set_json_field(&mut self, name: &str, value: &Value) -> Result<()> {
        let (_, def) = self.lookup(name)?;
        if value.is_null() {
            return self.clear_field(name);
        }
        self.set_field(name, loader::convert(def, value)?)
    }

    pub fn get_field(&self, name: &str) -> Result<&FieldValue> {
        let (idx, def) = self.lookup(name)?;
        self.presence
            .get(idx)
            .ok_or_else(|| FieldError::FieldNotSet {
                field: def.wire,
                state: self.to_string(),
            })
    }

    pub fn clear_field(&mut self, name: &str) -> Result<()> {
        let (idx, _) = self.lookup(name)?;
        self.presence.mark_absent(idx);
        Ok(())
    }

    pub fn is_present(&self, name: &str) -> Result<bool> {
        let (idx, _) = self.lookup(name)?;
        Ok(self.presence.is_present(idx))
    }

    /// Wire names of the present fields, in declaration order
    pub fn fields_present(&self) -> Vec<&'static str> {
        self.presence
            .present_fields()
            .map(|idx| self.schema.fields[idx].wire)
            .collect()
    }

    /// Present fields with their declarations, in declaration order
    pub fn present(&self) -> impl Iterator<Item = (&'static FieldDef, &FieldValue)> + '_ {
        let fields = self.schema.fields;
        self.presence.present().map(move |(idx, v)| (&fields[idx], v))
    }

    /// Assigns every key of `from` that names a declared field.
    ///
    /// Unknown keys are skipped, as are nulls. The first value that doesn't
    /// fit its declared type aborts the load; fields assigned before it stay set.
    pub fn load_map(&mut self, from: &Map<String, Value>) -> Result<()> {
        loader::load_map(self, from)
    }

    /// Reads one JSON object from `reader` into this record
    pub fn populate<R: Read>(&mut self, reader: R) -> Result<()> {
        match codec::decode_object(reader)? {
            Some(map) => self.load_map(&map),
            None => Ok(()),
        }
    }

    /// JSON object holding only the present fields
    pub fn to_json(&self) -> Value {
        Value::Object(
            self.present()
                .map(|(def, v)| (def.wire.to_string(), v.to_json()))
                .collect(),
        )
    }

    pub fn encode_json(&self) -> String {
        self.to_json().to_string()
    }

    pub fn format_json(&self) -> String {
        codec::pretty(&self.to_json())
    }

    pub fn format_display(&self) -> String {
        self.to_string()
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.schema.same_as(other.schema) && self.presence == other.presence
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for (def, value) in self.present() {
            map.serialize_entry(def.wire, value)?;
        }
        map.end()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.presence.is_empty() {
            return write!(f, "{} {{}}", self.schema.name);
        }
        write!(f, "{} {{ ", self.schema.name)?;
        for (i, (def, value)) in self.present().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", def.wire, value)?;
        }
        f.write_str(" }")
    }
}
