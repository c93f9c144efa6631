use std::fmt;

/// Declared type of a field, fixed per record type.
#[derive(Clone, Copy)]
pub enum FieldType {
    String,
    Int32,
    Int64,
    Float,
    Bool,
    /// String restricted to a fixed set of named constants
    Enum(&'static [&'static str]),
    StringList,
    StringMap,
    /// Nested record of another schema
    Record(&'static Schema),
    /// List of nested records of another schema
    RecordList(&'static Schema),
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::String => f.write_str("string"),
            FieldType::Int32 => f.write_str("i32"),
            FieldType::Int64 => f.write_str("i64"),
            FieldType::Float => f.write_str("f64"),
            FieldType::Bool => f.write_str("bool"),
            FieldType::Enum(constants) => write!(f, "enum[{}]", constants.join("|")),
            FieldType::StringList => f.write_str("list<string>"),
            FieldType::StringMap => f.write_str("map<string, string>"),
            FieldType::Record(schema) => f.write_str(schema.name),
            FieldType::RecordList(schema) => write!(f, "list<{}>", schema.name),
        }
    }
}

// Schemas may refer to each other, so Debug stays shallow
impl fmt::Debug for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// One entry of a record type's static field table
#[derive(Clone, Copy, Debug)]
pub struct FieldDef {
    /// lowerCamelCase key used on the wire
    pub wire: &'static str,
    /// snake_case identifier, accepted as a synonym of the wire name
    pub ident: &'static str,
    pub ty: FieldType,
}

impl FieldDef {
    pub fn answers_to(&self, name: &str) -> bool {
        self.wire == name || self.ident == name
    }
}

/// Static description of a record type: its name and declared fields.
///
/// Schemas are declared as `static` items and referenced as
/// `&'static Schema`; see [`schema!`](crate::schema!) for the usual way of
/// writing one.
#[derive(Debug)]
pub struct Schema {
    pub name: &'static str,
    pub fields: &'static [FieldDef],
}

impl Schema {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn fields(&self) -> &'static [FieldDef] {
        self.fields
    }

    /// Position of the field answering to `name`, by wire name or identifier
    pub fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|def| def.answers_to(name))
    }

    pub fn field(&self, name: &str) -> Option<&'static FieldDef> {
        self.fields.iter().find(|def| def.answers_to(name))
    }

    pub(crate) fn same_as(&self, other: &Schema) -> bool {
        std::ptr::eq(self, other) || self.name == other.name
    }
}

/// Declares a `static` [`Schema`] from a compact field table.
///
/// ```
/// use fielder::{schema, FieldType};
///
/// schema! {
///     pub static PAUSE = "SingularityExpiringPause" {
///         action_id: "actionId" => FieldType::String,
///         start_millis: "startMillis" => FieldType::Int64,
///     }
/// }
///
/// assert_eq!(PAUSE.position("start_millis"), Some(1));
/// ```
#[macro_export]
macro_rules! schema {
    ($vis:vis static $id:ident = $name:literal {
        $($ident:ident : $wire:literal => $ty:expr),* $(,)?
    }) => {
        $vis static $id: $crate::Schema = $crate::Schema {
            name: $name,
            fields: &[
                $($crate::FieldDef {
                    wire: $wire,
                    ident: stringify!($ident),
                    ty: $ty,
                }),*
            ],
        };
    };
}
