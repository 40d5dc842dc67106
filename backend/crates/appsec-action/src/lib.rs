//! Conviso AppSecFlow project creation action.
//!
//! [`CreateProjectAction`] validates template input, sends one `createProject`
//! GraphQL mutation through [`AppSecFlowClient`] and reports `projectId`,
//! `projectApiCode`, `projectPid` and `projectUrl` as outputs.

pub(crate) mod client;
pub(crate) mod create_project_action;
pub(crate) mod error;
pub(crate) mod graphql;

#[cfg(test)]
mod tests;

pub use client::app_sec_flow_client::AppSecFlowClient;
pub use create_project_action::{
    ACTION_DESCRIPTION, CreateProjectAction, DEFAULT_ACTION_ID, OUTPUT_PROJECT_API_CODE,
    OUTPUT_PROJECT_ID, OUTPUT_PROJECT_PID, OUTPUT_PROJECT_URL,
};
pub use error::{ActionError, Result as ActionErrorResult};
pub use graphql::create_project_mutation::{
    CREATE_PROJECT_MUTATION, CreateProjectVariables, GraphQlRequest,
};
pub use graphql::graphql_response::{
    CreateProjectData, CreateProjectPayload, GraphQlError, GraphQlResponse, MutationOutcome,
};
