#![allow(dead_code)]
// Each test binary pulls in only the fixtures it needs

pub const REQUEST_PARENT: &str = r#"
{
    "state": "ACTIVE",
    "request": {
        "id": "github.com-opentable-sous-demo",
        "requestType": "SERVICE",
        "instances": 3,
        "owners": ["platform@example.com"],
        "rackSensitive": false,
        "loadBalanced": false
    },
    "activeDeploy": {
        "id": "0_2_1",
        "requestId": "github.com-opentable-sous-demo",
        "resources": {"cpus": 0.25, "memoryMb": 512, "numPorts": 1},
        "containerInfo": {
            "type": "DOCKER",
            "docker": {
                "image": "docker.example.com/sous-demo:0.2.1",
                "network": "BRIDGE",
                "portMappings": [
                    {"containerPort": 8080, "hostPort": 0, "hostPortType": "FROM_OFFER", "protocol": "tcp"}
                ],
                "parameters": {}
            }
        },
        "env": {"GREETING": "hello"},
        "timestamp": 1490000000000
    },
    "pendingDeploy": null,
    "requestDeployState": {
        "requestId": "github.com-opentable-sous-demo",
        "activeDeploy": {"requestId": "github.com-opentable-sous-demo", "deployId": "0_2_1", "timestamp": 1490000000000, "user": "sous"}
    },
    "someFieldFromANewerServer": [1, 2, 3]
}
"#;

pub const TASK_IDS: &str = r#"
[
    {"requestId": "app", "deployId": "d1", "instanceNo": 1, "host": "agent-1", "startedAt": 1490000000001},
    {"requestId": "app", "deployId": "d1", "instanceNo": 2, "host": "agent-2", "startedAt": 1490000000002}
]
"#;

pub const BAD_TASK_ID: &str = r#"{"requestId": "app", "instanceNo": "first"}"#;

pub const MALFORMED: &str = r#"{"requestId": "app", "#;
