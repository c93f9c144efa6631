use fielder::{schema, FieldType};

pub const CONTAINER_TYPES: &[&str] = &["MESOS", "DOCKER"];
pub const DOCKER_NETWORK_TYPES: &[&str] = &["HOST", "BRIDGE", "NONE"];
pub const PORT_MAPPING_TYPES: &[&str] = &["LITERAL", "FROM_OFFER"];
pub const VOLUME_MODES: &[&str] = &["RO", "RW"];

schema! {
    pub static RESOURCES = "Resources" {
        cpus: "cpus" => FieldType::Float,
        memory_mb: "memoryMb" => FieldType::Float,
        num_ports: "numPorts" => FieldType::Int32,
    }
}

schema! {
    pub static SINGULARITY_DOCKER_PORT_MAPPING = "SingularityDockerPortMapping" {
        container_port: "containerPort" => FieldType::Int32,
        container_port_type: "containerPortType" => FieldType::Enum(PORT_MAPPING_TYPES),
        host_port: "hostPort" => FieldType::Int32,
        host_port_type: "hostPortType" => FieldType::Enum(PORT_MAPPING_TYPES),
        protocol: "protocol" => FieldType::String,
    }
}

schema! {
    pub static SINGULARITY_DOCKER_INFO = "SingularityDockerInfo" {
        force_pull_image: "forcePullImage" => FieldType::Bool,
        image: "image" => FieldType::String,
        network: "network" => FieldType::Enum(DOCKER_NETWORK_TYPES),
        parameters: "parameters" => FieldType::StringMap,
        port_mappings: "portMappings" => FieldType::RecordList(&SINGULARITY_DOCKER_PORT_MAPPING),
        privileged: "privileged" => FieldType::Bool,
    }
}

schema! {
    pub static SINGULARITY_VOLUME = "SingularityVolume" {
        container_path: "containerPath" => FieldType::String,
        host_path: "hostPath" => FieldType::String,
        mode: "mode" => FieldType::Enum(VOLUME_MODES),
    }
}

schema! {
    pub static SINGULARITY_CONTAINER_INFO = "SingularityContainerInfo" {
        docker: "docker" => FieldType::Record(&SINGULARITY_DOCKER_INFO),
        type_: "type" => FieldType::Enum(CONTAINER_TYPES),
        volumes: "volumes" => FieldType::RecordList(&SINGULARITY_VOLUME),
    }
}

schema! {
    pub static SINGULARITY_DEPLOY = "SingularityDeploy" {
        arguments: "arguments" => FieldType::StringList,
        auto_advance_deploy_steps: "autoAdvanceDeploySteps" => FieldType::Bool,
        command: "command" => FieldType::String,
        consider_healthy_after_running_for_seconds: "considerHealthyAfterRunningForSeconds" => FieldType::Int64,
        container_info: "containerInfo" => FieldType::Record(&SINGULARITY_CONTAINER_INFO),
        custom_executor_cmd: "customExecutorCmd" => FieldType::String,
        custom_executor_id: "customExecutorId" => FieldType::String,
        custom_executor_resources: "customExecutorResources" => FieldType::Record(&RESOURCES),
        custom_executor_source: "customExecutorSource" => FieldType::String,
        custom_executor_user: "customExecutorUser" => FieldType::String,
        deploy_health_timeout_seconds: "deployHealthTimeoutSeconds" => FieldType::Int64,
        deploy_instance_count_per_step: "deployInstanceCountPerStep" => FieldType::Int32,
        deploy_step_wait_time_ms: "deployStepWaitTimeMs" => FieldType::Int32,
        env: "env" => FieldType::StringMap,
        healthcheck_interval_seconds: "healthcheckIntervalSeconds" => FieldType::Int64,
        healthcheck_max_retries: "healthcheckMaxRetries" => FieldType::Int32,
        healthcheck_max_total_timeout_seconds: "healthcheckMaxTotalTimeoutSeconds" => FieldType::Int64,
        healthcheck_port_index: "healthcheckPortIndex" => FieldType::Int32,
        healthcheck_timeout_seconds: "healthcheckTimeoutSeconds" => FieldType::Int64,
        healthcheck_uri: "healthcheckUri" => FieldType::String,
        id: "id" => FieldType::String,
        labels: "labels" => FieldType::StringMap,
        load_balancer_groups: "loadBalancerGroups" => FieldType::StringList,
        load_balancer_port_index: "loadBalancerPortIndex" => FieldType::Int32,
        max_task_retries: "maxTaskRetries" => FieldType::Int32,
        metadata: "metadata" => FieldType::StringMap,
        request_id: "requestId" => FieldType::String,
        resources: "resources" => FieldType::Record(&RESOURCES),
        service_base_path: "serviceBasePath" => FieldType::String,
        skip_healthchecks_on_deploy: "skipHealthchecksOnDeploy" => FieldType::Bool,
        timestamp: "timestamp" => FieldType::Int64,
        uris: "uris" => FieldType::StringList,
        version: "version" => FieldType::String,
    }
}

schema! {
    pub static SINGULARITY_DEPLOY_MARKER = "SingularityDeployMarker" {
        deploy_id: "deployId" => FieldType::String,
        message: "message" => FieldType::String,
        request_id: "requestId" => FieldType::String,
        timestamp: "timestamp" => FieldType::Int64,
        user: "user" => FieldType::String,
    }
}
