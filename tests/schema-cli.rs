use assert_cmd::Command;
use once_cell::sync::Lazy;
use predicates::prelude::*;

static SCALE_PATCH: Lazy<String> =
    Lazy::new(|| r#"{"instances":0,"message":"scale down for the night"}"#.to_string());

fn singdto() -> Command {
    Command::cargo_bin("singdto").unwrap()
}

#[test]
fn types_lists_every_schema() {
    singdto()
        .arg("types")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Resources\nSingularityBounceRequest\n"))
        .stdout(predicate::str::contains("SingularityTaskId\n"))
        .stdout(predicate::str::ends_with("StringList\n"));
}

#[test]
fn fields_prints_table() {
    singdto()
        .args(["fields", "PauseRequest"])
        .assert()
        .success()
        .stdout(
            "actionId        action_id        string\n\
             durationMillis  duration_millis  i64\n\
             killTasks       kill_tasks       bool\n\
             message         message          string\n",
        );
}

#[test]
fn patch_emits_only_assigned_fields() {
    singdto()
        .args([
            "patch",
            "ScaleRequest",
            "instances=0",
            "message=scale down for the night",
        ])
        .assert()
        .success()
        .stdout(format!("{}\n", *SCALE_PATCH));
}

#[test]
fn patch_rejects_unknown_field() {
    singdto()
        .args(["patch", "ScaleRequest", "replicas=2"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains(
            "no such field replicas on SingularityScaleRequest",
        ));
}

#[test]
fn patch_rejects_malformed_assignment() {
    singdto()
        .args(["patch", "ScaleRequest", "instances"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected field=value, got 'instances'"));
}

#[test]
fn missing_subcommand_fails() {
    singdto()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Subcommand must be one of"));
}
