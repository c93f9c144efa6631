//! Presence-aware records for JSON APIs
//!
//! A [`Record`] holds one JSON object of a statically declared [`Schema`] and
//! remembers which fields were explicitly assigned. Only those fields are
//! encoded, so a record set to `{"instances": 0}` and an empty record produce
//! different request bodies. That distinction is what PATCH-style partial
//! updates need.
//!
//! - [`Record::set_field`] / [`Record::get_field`] / [`Record::clear_field`]
//!   accept either the wire name (`durationMillis`) or the identifier
//!   (`duration_millis`).
//! - [`Record::load_map`] fills a record from a decoded JSON object, skipping
//!   keys the schema doesn't declare.
//! - [`Record::decode`] and [`RecordList::decode`] read from any
//!   [`std::io::Read`]; [`StringList`] covers endpoints returning a bare
//!   array of strings.

mod error;
mod list;
mod loader;
mod presence;
mod record;
mod schema;
mod strings;
mod value;

pub mod codec;

pub use error::{FieldError, Result};
pub use list::RecordList;
pub use record::Record;
pub use schema::{FieldDef, FieldType, Schema};
pub use strings::StringList;
pub use value::FieldValue;
