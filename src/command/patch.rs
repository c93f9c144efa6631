use anyhow::{Context, Result};
use fielder::{FieldType, Record, Schema};
use serde_json::Value;

use super::schema_for;
use crate::argsets::PatchArgs;

pub fn patch(args: PatchArgs) -> Result<()> {
    let schema = schema_for(&args.type_name)?;
    let record = build(schema, &args.assignments)?;
    println!("{}", record.encode_json());
    Ok(())
}

/// Builds a partial update carrying only the assigned fields
fn build(schema: &'static Schema, assignments: &[(String, String)]) -> Result<Record> {
    let mut record = Record::new(schema);
    for (field, raw) in assignments {
        let value = parse_value(schema, field, raw);
        record
            .set_json_field(field, &value)
            .with_context(|| format!("could not assign {field}={raw}"))?;
    }
    Ok(record)
}

// Text fields take the argument as typed; everything else is read as JSON,
// falling back to a string so the type error names what was given
fn parse_value(schema: &Schema, field: &str, raw: &str) -> Value {
    let textual = matches!(
        schema.field(field).map(|def| def.ty),
        Some(FieldType::String | FieldType::Enum(_))
    );
    if textual && !raw.starts_with('"') {
        return Value::String(raw.to_string());
    }
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dtos;

    fn pairs(list: &[(&str, &str)]) -> Vec<(String, String)> {
        list.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_build_scale_request() {
        let record = build(
            &dtos::SINGULARITY_SCALE_REQUEST,
            &pairs(&[("instances", "0"), ("message", "123"), ("skip_healthchecks", "true")]),
        )
        .unwrap();
        assert_eq!(
            record.encode_json(),
            r#"{"instances":0,"message":"123","skipHealthchecks":true}"#
        );
    }

    #[test]
    fn test_build_nested_values() {
        let record = build(
            &dtos::SINGULARITY_REQUEST,
            &pairs(&[("owners", r#"["a@example.com"]"#), ("requestType", "WORKER")]),
        )
        .unwrap();
        assert_eq!(
            record.encode_json(),
            r#"{"owners":["a@example.com"],"requestType":"WORKER"}"#
        );
    }

    #[test]
    fn test_null_unsets_earlier_assignment() {
        let record = build(
            &dtos::SINGULARITY_PAUSE_REQUEST,
            &pairs(&[("killTasks", "false"), ("killTasks", "null")]),
        )
        .unwrap();
        assert_eq!(record.encode_json(), "{}");
    }

    #[test]
    fn test_bad_assignment() {
        let err = build(&dtos::SINGULARITY_PAUSE_REQUEST, &pairs(&[("durationMillis", "soon")]))
            .unwrap_err();
        assert_eq!(err.to_string(), "could not assign durationMillis=soon");

        let err = build(&dtos::SINGULARITY_PAUSE_REQUEST, &pairs(&[("bogus", "1")])).unwrap_err();
        assert_eq!(
            err.root_cause().to_string(),
            "no such field bogus on SingularityPauseRequest"
        );
    }
}
