use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::error::{FieldError, Result};
use crate::list::RecordList;
use crate::record::Record;
use crate::schema::{FieldDef, FieldType, Schema};
use crate::value::FieldValue;

pub(crate) fn load_map(record: &mut Record, from: &Map<String, Value>) -> Result<()> {
    let schema = record.schema();
    for (key, value) in from {
        let Some(def) = schema.field(key) else {
            log::trace!("Ignoring unknown key '{}' for {}", key, schema.name());
            continue;
        };
        if value.is_null() {
            log::trace!("Leaving {}.{} absent (null)", schema.name(), def.wire);
            continue;
        }
        record.set_field(key, convert(def, value)?)?;
    }
    Ok(())
}

pub(crate) fn list_from_maps(
    schema: &'static Schema,
    items: &[Map<String, Value>],
) -> Result<RecordList> {
    let mut list = RecordList::new(schema);
    for item in items {
        list.push(Record::from_map(schema, item)?)?;
    }
    Ok(list)
}

/// Converts a JSON value into the representation declared for `def`
pub(crate) fn convert(def: &FieldDef, value: &Value) -> Result<FieldValue> {
    let converted = match def.ty {
        FieldType::String => value.as_str().map(FieldValue::from),
        FieldType::Enum(constants) => value
            .as_str()
            .filter(|s| constants.iter().any(|c| c == s))
            .map(FieldValue::from),
        FieldType::Int32 => value
            .as_i64()
            .and_then(|n| i32::try_from(n).ok())
            .map(FieldValue::Int32),
        FieldType::Int64 => value.as_i64().map(FieldValue::Int64),
        FieldType::Float => value.as_f64().map(FieldValue::Float),
        FieldType::Bool => value.as_bool().map(FieldValue::Bool),
        FieldType::StringList => value.as_array().and_then(|items| {
            items
                .iter()
                .map(|v| v.as_str().map(String::from))
                .collect::<Option<Vec<_>>>()
                .map(FieldValue::StringList)
        }),
        FieldType::StringMap => value.as_object().and_then(|obj| {
            obj.iter()
                .map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
                .collect::<Option<BTreeMap<_, _>>>()
                .map(FieldValue::StringMap)
        }),
        FieldType::Record(schema) => match value.as_object() {
            Some(obj) => Some(FieldValue::Record(Record::from_map(schema, obj)?)),
            None => None,
        },
        FieldType::RecordList(schema) => match value.as_array() {
            Some(items) => {
                let mut list = RecordList::new(schema);
                for item in items {
                    let obj = item.as_object().ok_or_else(|| mismatch(def, value))?;
                    list.push(Record::from_map(schema, obj)?)?;
                }
                Some(FieldValue::RecordList(list))
            }
            None => None,
        },
    };
    converted.ok_or_else(|| mismatch(def, value))
}

fn mismatch(def: &FieldDef, value: &Value) -> FieldError {
    FieldError::TypeMismatch {
        field: def.wire,
        value: value.to_string(),
        actual: json_type_name(value).to_string(),
        expected: def.ty.to_string(),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
