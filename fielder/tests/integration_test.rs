use anyhow::Result;
use fielder::{schema, FieldError, FieldType, FieldValue, Record, RecordList};
use once_cell::sync::Lazy;
use serde_json::{json, Map, Value};

const NETWORKS: &[&str] = &["HOST", "BRIDGE", "NONE"];

schema! {
    static DOCKER_INFO = "SingularityDockerInfo" {
        image: "image" => FieldType::String,
        network: "network" => FieldType::Enum(NETWORKS),
        privileged: "privileged" => FieldType::Bool,
        parameters: "parameters" => FieldType::StringMap,
    }
}

schema! {
    static BOUNCE = "SingularityBounceRequest" {
        action_id: "actionId" => FieldType::String,
        duration_millis: "durationMillis" => FieldType::Int64,
        incremental: "incremental" => FieldType::Bool,
        message: "message" => FieldType::String,
        skip_healthchecks: "skipHealthchecks" => FieldType::Bool,
    }
}

schema! {
    static DEPLOY = "SingularityDeploy" {
        id: "id" => FieldType::String,
        request_id: "requestId" => FieldType::String,
        instances: "instances" => FieldType::Int32,
        cpus: "cpus" => FieldType::Float,
        uris: "uris" => FieldType::StringList,
        docker: "docker" => FieldType::Record(&DOCKER_INFO),
        history: "history" => FieldType::RecordList(&BOUNCE),
    }
}

static FULL_DEPLOY: Lazy<Value> = Lazy::new(|| {
    json!({
        "id": "d1",
        "requestId": "r1",
        "instances": 0,
        "cpus": 0.5,
        "uris": [],
        "docker": {
            "image": "registry/app:1.2",
            "network": "BRIDGE",
            "privileged": false,
            "parameters": {"memory-swap": "0"}
        },
        "history": [
            {"actionId": "a1", "durationMillis": 60000},
            {"message": "second"}
        ]
    })
});

fn as_map(value: &Value) -> &Map<String, Value> {
    value.as_object().expect("fixture is an object")
}

#[test]
fn round_trip_preserves_presence_and_values() -> Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();

    let original = Record::from_map(&DEPLOY, as_map(&FULL_DEPLOY))?;
    let encoded = original.encode_json();
    let decoded = Record::decode(&DEPLOY, encoded.as_bytes())?;

    assert_eq!(decoded.fields_present(), original.fields_present());
    for name in original.fields_present() {
        assert_eq!(decoded.get_field(name)?, original.get_field(name)?);
    }
    assert_eq!(decoded, original);
    assert_eq!(serde_json::from_str::<Value>(&encoded)?, *FULL_DEPLOY);
    Ok(())
}

#[test]
fn partial_update_only_carries_assigned_fields() -> Result<()> {
    let mut patch = Record::new(&DEPLOY);
    patch.set_field("instances", 0i32)?;
    patch.set_field("request_id", "r1")?;
    assert_eq!(patch.encode_json(), r#"{"requestId":"r1","instances":0}"#);

    patch.clear_field("instances")?;
    assert_eq!(patch.encode_json(), r#"{"requestId":"r1"}"#);
    Ok(())
}

#[test]
fn load_map_ignores_unknown_keys() -> Result<()> {
    let map = json!({"message": "hi", "bogus": 1});
    let mut bounce = Record::new(&BOUNCE);
    bounce.load_map(as_map(&map))?;
    assert_eq!(bounce.get_field("message")?, &FieldValue::from("hi"));
    assert_eq!(bounce.fields_present(), vec!["message"]);
    Ok(())
}

#[test]
fn set_field_rejects_text_for_integer() {
    let mut bounce = Record::new(&BOUNCE);
    let err = bounce
        .set_field("durationMillis", "not-a-number")
        .unwrap_err();
    assert!(matches!(
        err,
        FieldError::TypeMismatch {
            field: "durationMillis",
            ..
        }
    ));
    assert_eq!(
        err.to_string(),
        r#"field durationMillis: value "not-a-number" (string) couldn't be cast to type i64"#
    );
}

#[test]
fn nested_records_are_presence_aware() -> Result<()> {
    let deploy = Record::from_map(&DEPLOY, as_map(&FULL_DEPLOY))?;
    let docker = deploy.get_field("docker")?.as_record().unwrap();
    assert_eq!(docker.get_field("network")?.as_str(), Some("BRIDGE"));
    assert_eq!(docker.get_field("privileged")?.as_bool(), Some(false));

    let history = deploy.get_field("history")?.as_list().unwrap();
    let second = history.get(1).unwrap();
    assert!(matches!(
        second.get_field("durationMillis"),
        Err(FieldError::FieldNotSet { .. })
    ));
    assert_eq!(
        history.format_display(),
        "SingularityBounceRequest { actionId: \"a1\", durationMillis: 60000 }\n\
         SingularityBounceRequest { message: \"second\" }\n"
    );
    Ok(())
}

#[test]
fn nested_record_must_match_declared_schema() -> Result<()> {
    let mut deploy = Record::new(&DEPLOY);
    let err = deploy.set_field("docker", Record::new(&BOUNCE)).unwrap_err();
    assert!(matches!(err, FieldError::TypeMismatch { field: "docker", .. }));

    let mut docker = Record::new(&DOCKER_INFO);
    docker.set_field("image", "app")?;
    deploy.set_field("docker", docker)?;
    assert_eq!(deploy.encode_json(), r#"{"docker":{"image":"app"}}"#);
    Ok(())
}

#[test]
fn list_decode_of_empty_array() -> Result<()> {
    let list = RecordList::decode(&BOUNCE, "[]".as_bytes())?;
    assert_eq!(list.len(), 0);
    assert_eq!(list.encode_json(), "[]");
    assert_eq!(list.format_display(), "");
    Ok(())
}

#[test]
fn list_round_trip_keeps_order() -> Result<()> {
    let input = r#"[{"message":"one"},{"incremental":true},{"message":"three"}]"#;
    let list = RecordList::decode(&BOUNCE, input.as_bytes())?;
    let again = RecordList::decode(&BOUNCE, list.encode_json().as_bytes())?;
    assert_eq!(again, list);
    assert_eq!(again.encode_json(), input);
    assert_eq!(serde_json::to_string(&again)?, input);
    Ok(())
}

#[test]
fn malformed_stream_is_a_decode_error() {
    assert!(matches!(
        Record::decode(&BOUNCE, "{\"message\": \"hi\"".as_bytes()),
        Err(FieldError::Decode(_))
    ));
}

#[test]
fn empty_stream_decodes_to_empty_record() -> Result<()> {
    let bounce = Record::decode(&BOUNCE, std::io::empty())?;
    assert!(bounce.fields_present().is_empty());
    assert_eq!(bounce.encode_json(), "{}");
    Ok(())
}

#[test]
fn format_json_is_indented() -> Result<()> {
    let mut bounce = Record::new(&BOUNCE);
    bounce.set_field("skipHealthchecks", true)?;
    assert_eq!(bounce.format_json(), "{\n  \"skipHealthchecks\": true\n}");
    Ok(())
}
