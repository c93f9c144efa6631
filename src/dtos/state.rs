use fielder::{schema, FieldType};

use super::deploy::{SINGULARITY_DEPLOY, SINGULARITY_DEPLOY_MARKER};
use super::requests::SINGULARITY_REQUEST;

pub const REQUEST_STATES: &[&str] = &[
    "ACTIVE",
    "DELETED",
    "PAUSED",
    "SYSTEM_COOLDOWN",
    "FINISHED",
    "DEPLOYING_TO_UNPAUSE",
];
pub const DEPLOY_STATES: &[&str] = &[
    "SUCCEEDED",
    "FAILED_INTERNAL_STATE",
    "CANCELING",
    "WAITING",
    "OVERDUE",
    "FAILED",
    "CANCELED",
];

schema! {
    pub static SINGULARITY_TASK_ID = "SingularityTaskId" {
        deploy_id: "deployId" => FieldType::String,
        host: "host" => FieldType::String,
        id: "id" => FieldType::String,
        instance_no: "instanceNo" => FieldType::Int32,
        rack_id: "rackId" => FieldType::String,
        request_id: "requestId" => FieldType::String,
        sanitized_host: "sanitizedHost" => FieldType::String,
        sanitized_rack_id: "sanitizedRackId" => FieldType::String,
        started_at: "startedAt" => FieldType::Int64,
    }
}

schema! {
    pub static SINGULARITY_EXPIRING_BOUNCE = "SingularityExpiringBounce" {
        action_id: "actionId" => FieldType::String,
        deploy_id: "deployId" => FieldType::String,
        request_id: "requestId" => FieldType::String,
        start_millis: "startMillis" => FieldType::Int64,
        user: "user" => FieldType::String,
    }
}

schema! {
    pub static SINGULARITY_EXPIRING_PAUSE = "SingularityExpiringPause" {
        action_id: "actionId" => FieldType::String,
        request_id: "requestId" => FieldType::String,
        start_millis: "startMillis" => FieldType::Int64,
        user: "user" => FieldType::String,
    }
}

schema! {
    pub static SINGULARITY_EXPIRING_SCALE = "SingularityExpiringScale" {
        action_id: "actionId" => FieldType::String,
        request_id: "requestId" => FieldType::String,
        revert_to_instances: "revertToInstances" => FieldType::Int32,
        start_millis: "startMillis" => FieldType::Int64,
        user: "user" => FieldType::String,
    }
}

schema! {
    pub static SINGULARITY_REQUEST_DEPLOY_STATE = "SingularityRequestDeployState" {
        active_deploy: "activeDeploy" => FieldType::Record(&SINGULARITY_DEPLOY_MARKER),
        pending_deploy: "pendingDeploy" => FieldType::Record(&SINGULARITY_DEPLOY_MARKER),
        request_id: "requestId" => FieldType::String,
    }
}

schema! {
    pub static SINGULARITY_PENDING_DEPLOY = "SingularityPendingDeploy" {
        current_deploy_state: "currentDeployState" => FieldType::Enum(DEPLOY_STATES),
        deploy_marker: "deployMarker" => FieldType::Record(&SINGULARITY_DEPLOY_MARKER),
    }
}

schema! {
    pub static SINGULARITY_REQUEST_PARENT = "SingularityRequestParent" {
        active_deploy: "activeDeploy" => FieldType::Record(&SINGULARITY_DEPLOY),
        expiring_bounce: "expiringBounce" => FieldType::Record(&SINGULARITY_EXPIRING_BOUNCE),
        expiring_pause: "expiringPause" => FieldType::Record(&SINGULARITY_EXPIRING_PAUSE),
        expiring_scale: "expiringScale" => FieldType::Record(&SINGULARITY_EXPIRING_SCALE),
        pending_deploy: "pendingDeploy" => FieldType::Record(&SINGULARITY_DEPLOY),
        pending_deploy_state: "pendingDeployState" => FieldType::Record(&SINGULARITY_PENDING_DEPLOY),
        request: "request" => FieldType::Record(&SINGULARITY_REQUEST),
        request_deploy_state: "requestDeployState" => FieldType::Record(&SINGULARITY_REQUEST_DEPLOY_STATE),
        state: "state" => FieldType::Enum(REQUEST_STATES),
    }
}
