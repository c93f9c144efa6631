use std::collections::BTreeMap;
use std::fmt;

use serde::ser::{Serialize, Serializer};
use serde_json::Value;

use crate::list::RecordList;
use crate::record::Record;
use crate::schema::FieldType;

/// Runtime value held by a present field
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    String(String),
    Int32(i32),
    Int64(i64),
    Float(f64),
    Bool(bool),
    StringList(Vec<String>),
    StringMap(BTreeMap<String, String>),
    Record(Record),
    RecordList(RecordList),
}

impl FieldValue {
    /// Name of the runtime type, as reported in type mismatch errors
    pub fn type_name(&self) -> String {
        match self {
            FieldValue::String(_) => "string".into(),
            FieldValue::Int32(_) => "i32".into(),
            FieldValue::Int64(_) => "i64".into(),
            FieldValue::Float(_) => "f64".into(),
            FieldValue::Bool(_) => "bool".into(),
            FieldValue::StringList(_) => "list<string>".into(),
            FieldValue::StringMap(_) => "map<string, string>".into(),
            FieldValue::Record(r) => r.type_name().into(),
            FieldValue::RecordList(l) => format!("list<{}>", l.schema().name()),
        }
    }

    /// Whether this value can be stored in a field declared as `ty`
    pub fn conforms_to(&self, ty: &FieldType) -> bool {
        match (ty, self) {
            (FieldType::String, FieldValue::String(_))
            | (FieldType::Int32, FieldValue::Int32(_))
            | (FieldType::Int64, FieldValue::Int64(_))
            | (FieldType::Bool, FieldValue::Bool(_))
            | (FieldType::StringList, FieldValue::StringList(_))
            | (FieldType::StringMap, FieldValue::StringMap(_)) => true,
            // JSON has no literal for NaN or infinity
            (FieldType::Float, FieldValue::Float(f)) => f.is_finite(),
            (FieldType::Enum(constants), FieldValue::String(s)) => {
                constants.iter().any(|c| *c == s.as_str())
            }
            (FieldType::Record(schema), FieldValue::Record(r)) => r.schema().same_as(schema),
            (FieldType::RecordList(schema), FieldValue::RecordList(l)) => {
                l.schema().same_as(schema)
            }
            _ => false,
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            FieldValue::String(s) => Value::from(s.as_str()),
            FieldValue::Int32(i) => Value::from(*i),
            FieldValue::Int64(i) => Value::from(*i),
            FieldValue::Float(f) => Value::from(*f),
            FieldValue::Bool(b) => Value::from(*b),
            FieldValue::StringList(list) => Value::from(list.clone()),
            FieldValue::StringMap(map) => Value::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), Value::from(v.as_str())))
                    .collect(),
            ),
            FieldValue::Record(r) => r.to_json(),
            FieldValue::RecordList(l) => l.to_json(),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i32(&self) -> Option<i32> {
        match self {
            FieldValue::Int32(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FieldValue::Int64(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_string_list(&self) -> Option<&[String]> {
        match self {
            FieldValue::StringList(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_string_map(&self) -> Option<&BTreeMap<String, String>> {
        match self {
            FieldValue::StringMap(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            FieldValue::Record(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&RecordList> {
        match self {
            FieldValue::RecordList(l) => Some(l),
            _ => None,
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::String(s) => serializer.serialize_str(s),
            FieldValue::Int32(i) => serializer.serialize_i32(*i),
            FieldValue::Int64(i) => serializer.serialize_i64(*i),
            FieldValue::Float(f) => serializer.serialize_f64(*f),
            FieldValue::Bool(b) => serializer.serialize_bool(*b),
            FieldValue::StringList(list) => list.serialize(serializer),
            FieldValue::StringMap(map) => map.serialize(serializer),
            FieldValue::Record(r) => r.serialize(serializer),
            FieldValue::RecordList(l) => l.serialize(serializer),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::String(s) => write!(f, "{s:?}"),
            FieldValue::Int32(i) => write!(f, "{i}"),
            FieldValue::Int64(i) => write!(f, "{i}"),
            FieldValue::Float(x) => write!(f, "{x}"),
            FieldValue::Bool(b) => write!(f, "{b}"),
            FieldValue::StringList(list) => write!(f, "{list:?}"),
            FieldValue::StringMap(map) => write!(f, "{map:?}"),
            FieldValue::Record(r) => write!(f, "{r}"),
            FieldValue::RecordList(l) => {
                f.write_str("[")?;
                for (i, r) in l.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{r}")?;
                }
                f.write_str("]")
            }
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<i32> for FieldValue {
    fn from(i: i32) -> Self {
        FieldValue::Int32(i)
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Int64(i)
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        FieldValue::Float(f)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(list: Vec<String>) -> Self {
        FieldValue::StringList(list)
    }
}

impl From<BTreeMap<String, String>> for FieldValue {
    fn from(map: BTreeMap<String, String>) -> Self {
        FieldValue::StringMap(map)
    }
}

impl From<Record> for FieldValue {
    fn from(r: Record) -> Self {
        FieldValue::Record(r)
    }
}

impl From<RecordList> for FieldValue {
    fn from(l: RecordList) -> Self {
        FieldValue::RecordList(l)
    }
}
