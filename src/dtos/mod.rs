//! Field tables for the Singularity API types
//!
//! Each table mirrors one type of the scheduler's REST schema:
//! - `deploy`: deploys, containers and their resources
//! - `requests`: request definitions and the action bodies sent to them
//! - `state`: request state, pending deploys and expiring actions
//!
//! Look a schema up by type name with [`lookup`]; [`ALL`] lists every
//! known type.

mod deploy;
mod requests;
mod state;

use fielder::Schema;

pub use deploy::{
    RESOURCES, SINGULARITY_CONTAINER_INFO, SINGULARITY_DEPLOY, SINGULARITY_DEPLOY_MARKER,
    SINGULARITY_DOCKER_INFO, SINGULARITY_DOCKER_PORT_MAPPING, SINGULARITY_VOLUME,
};
pub use requests::{
    SINGULARITY_BOUNCE_REQUEST, SINGULARITY_DEPLOY_REQUEST, SINGULARITY_PAUSE_REQUEST,
    SINGULARITY_REQUEST, SINGULARITY_SCALE_REQUEST,
};
pub use state::{
    SINGULARITY_EXPIRING_BOUNCE, SINGULARITY_EXPIRING_PAUSE, SINGULARITY_EXPIRING_SCALE,
    SINGULARITY_PENDING_DEPLOY, SINGULARITY_REQUEST_DEPLOY_STATE, SINGULARITY_REQUEST_PARENT,
    SINGULARITY_TASK_ID,
};

pub static ALL: &[&Schema] = &[
    &RESOURCES,
    &SINGULARITY_BOUNCE_REQUEST,
    &SINGULARITY_CONTAINER_INFO,
    &SINGULARITY_DEPLOY,
    &SINGULARITY_DEPLOY_MARKER,
    &SINGULARITY_DEPLOY_REQUEST,
    &SINGULARITY_DOCKER_INFO,
    &SINGULARITY_DOCKER_PORT_MAPPING,
    &SINGULARITY_EXPIRING_BOUNCE,
    &SINGULARITY_EXPIRING_PAUSE,
    &SINGULARITY_EXPIRING_SCALE,
    &SINGULARITY_PAUSE_REQUEST,
    &SINGULARITY_PENDING_DEPLOY,
    &SINGULARITY_REQUEST,
    &SINGULARITY_REQUEST_DEPLOY_STATE,
    &SINGULARITY_REQUEST_PARENT,
    &SINGULARITY_SCALE_REQUEST,
    &SINGULARITY_TASK_ID,
    &SINGULARITY_VOLUME,
];

/// Finds a schema by its type name; the `Singularity` prefix may be omitted
pub fn lookup(type_name: &str) -> Option<&'static Schema> {
    ALL.iter().copied().find(|schema| {
        schema.name() == type_name
            || schema.name().strip_prefix("Singularity") == Some(type_name)
    })
}
