use fielder::{schema, FieldType};

use super::deploy::SINGULARITY_DEPLOY;

pub const REQUEST_TYPES: &[&str] = &["SERVICE", "WORKER", "SCHEDULED", "ON_DEMAND", "RUN_ONCE"];

schema! {
    pub static SINGULARITY_REQUEST = "SingularityRequest" {
        allowed_slave_attributes: "allowedSlaveAttributes" => FieldType::StringMap,
        bounce_after_scale: "bounceAfterScale" => FieldType::Bool,
        group: "group" => FieldType::String,
        id: "id" => FieldType::String,
        instances: "instances" => FieldType::Int32,
        kill_old_non_long_running_tasks_after_millis: "killOldNonLongRunningTasksAfterMillis" => FieldType::Int64,
        load_balanced: "loadBalanced" => FieldType::Bool,
        num_retries_on_failure: "numRetriesOnFailure" => FieldType::Int32,
        owners: "owners" => FieldType::StringList,
        quartz_schedule: "quartzSchedule" => FieldType::String,
        rack_affinity: "rackAffinity" => FieldType::StringList,
        rack_sensitive: "rackSensitive" => FieldType::Bool,
        read_only_groups: "readOnlyGroups" => FieldType::StringList,
        request_type: "requestType" => FieldType::Enum(REQUEST_TYPES),
        required_slave_attributes: "requiredSlaveAttributes" => FieldType::StringMap,
        schedule: "schedule" => FieldType::String,
        scheduled_expected_runtime_millis: "scheduledExpectedRuntimeMillis" => FieldType::Int64,
        skip_healthchecks: "skipHealthchecks" => FieldType::Bool,
        wait_at_least_millis_after_task_finishes_for_reschedule: "waitAtLeastMillisAfterTaskFinishesForReschedule" => FieldType::Int64,
    }
}

schema! {
    pub static SINGULARITY_DEPLOY_REQUEST = "SingularityDeployRequest" {
        deploy: "deploy" => FieldType::Record(&SINGULARITY_DEPLOY),
        message: "message" => FieldType::String,
        unpause_on_successful_deploy: "unpauseOnSuccessfulDeploy" => FieldType::Bool,
    }
}

schema! {
    pub static SINGULARITY_BOUNCE_REQUEST = "SingularityBounceRequest" {
        action_id: "actionId" => FieldType::String,
        duration_millis: "durationMillis" => FieldType::Int64,
        incremental: "incremental" => FieldType::Bool,
        message: "message" => FieldType::String,
        skip_healthchecks: "skipHealthchecks" => FieldType::Bool,
    }
}

schema! {
    pub static SINGULARITY_PAUSE_REQUEST = "SingularityPauseRequest" {
        action_id: "actionId" => FieldType::String,
        duration_millis: "durationMillis" => FieldType::Int64,
        kill_tasks: "killTasks" => FieldType::Bool,
        message: "message" => FieldType::String,
    }
}

schema! {
    pub static SINGULARITY_SCALE_REQUEST = "SingularityScaleRequest" {
        action_id: "actionId" => FieldType::String,
        duration_millis: "durationMillis" => FieldType::Int64,
        instances: "instances" => FieldType::Int32,
        message: "message" => FieldType::String,
        skip_healthchecks: "skipHealthchecks" => FieldType::Bool,
    }
}
