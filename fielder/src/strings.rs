use std::io::Read;

use serde::ser::{Serialize, Serializer};
use serde_json::Value;

use crate::codec;
use crate::error::Result;

/// Bare JSON array of strings, as returned by listing endpoints
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StringList(Vec<String>);

impl StringList {
    pub fn new() -> Self {
        StringList(Vec::new())
    }

    /// Reads a JSON array of strings from `reader`. An empty stream gives an
    /// empty list.
    pub fn decode<R: Read>(reader: R) -> Result<Self> {
        let mut list = StringList::new();
        list.populate(reader)?;
        Ok(list)
    }

    /// Replaces the contents with the array read from `reader`
    pub fn populate<R: Read>(&mut self, reader: R) -> Result<()> {
        if let Some(items) = codec::decode_strings(reader)? {
            self.0 = items;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }

    pub fn to_json(&self) -> Value {
        Value::from(self.0.clone())
    }

    pub fn encode_json(&self) -> String {
        self.to_json().to_string()
    }

    pub fn format_json(&self) -> String {
        codec::pretty(&self.to_json())
    }

    /// The strings joined by newlines, without a trailing one
    pub fn format_display(&self) -> String {
        self.0.join("\n")
    }
}

impl From<Vec<String>> for StringList {
    fn from(items: Vec<String>) -> Self {
        StringList(items)
    }
}

impl Serialize for StringList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl IntoIterator for StringList {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a StringList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FieldError;

    #[test]
    fn test_decode_and_render() {
        let list = StringList::decode(r#"["web", "worker", "cron"]"#.as_bytes()).unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(list.format_display(), "web\nworker\ncron");
        assert_eq!(list.encode_json(), r#"["web","worker","cron"]"#);
        assert_eq!(
            list.format_json(),
            "[\n  \"web\",\n  \"worker\",\n  \"cron\"\n]"
        );
        assert_eq!(serde_json::to_string(&list).unwrap(), list.encode_json());
    }

    #[test]
    fn test_empty_stream_leaves_list_untouched() {
        let mut list = StringList::from(vec!["kept".to_string()]);
        list.populate("".as_bytes()).unwrap();
        assert_eq!(list.as_slice(), ["kept".to_string()]);

        list.populate("[]".as_bytes()).unwrap();
        assert!(list.is_empty());
        assert_eq!(list.format_display(), "");
        assert_eq!(list.encode_json(), "[]");
    }

    #[test]
    fn test_non_string_element_is_a_decode_error() {
        assert!(matches!(
            StringList::decode(r#"["a", 1]"#.as_bytes()),
            Err(FieldError::Decode(_))
        ));
        assert!(matches!(
            StringList::decode(r#"{"a": "b"}"#.as_bytes()),
            Err(FieldError::Decode(_))
        ));
    }

    #[test]
    fn test_snapshot_assignment() {
        let source = StringList::from(vec!["a".to_string(), "b".to_string()]);
        let mut target = StringList::from(vec!["old".to_string()]);
        assert_ne!(target, source);
        target = source.clone();
        assert_eq!(target, source);
    }
}
