use appsec_core::CreatedProject;

use serde::Deserialize;

/// Standard GraphQL envelope
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectData {
    #[serde(default)]
    pub create_project: Option<CreateProjectPayload>,
}

/// Mutation payload: field-level errors are plain strings
#[derive(Debug, Deserialize)]
pub struct CreateProjectPayload {
    #[serde(default)]
    pub errors: Option<Vec<String>>,
    #[serde(default)]
    pub project: Option<CreatedProject>,
}

/// What a 2xx `createProject` response means
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome {
    Created(CreatedProject),
    /// Top-level GraphQL error (`errors[0].message`)
    Rejected(String),
    /// Mutation-level error (`data.createProject.errors[0]`)
    FieldErrors(String),
    /// Neither a project nor an error
    Empty,
}

impl GraphQlResponse<CreateProjectData> {
    /// Top-level errors take precedence over mutation errors, which take
    /// precedence over the project.
    pub fn into_outcome(self) -> MutationOutcome {
        let top_level = self
            .errors
            .and_then(|errors| errors.into_iter().next())
            .and_then(|error| error.message)
            .filter(|message| !message.is_empty());
        if let Some(message) = top_level {
            return MutationOutcome::Rejected(message);
        }

        let Some(payload) = self.data.and_then(|data| data.create_project) else {
            return MutationOutcome::Empty;
        };

        let field_error = payload
            .errors
            .and_then(|errors| errors.into_iter().next())
            .filter(|message| !message.is_empty());
        if let Some(message) = field_error {
            return MutationOutcome::FieldErrors(message);
        }

        match payload.project {
            Some(project) => MutationOutcome::Created(project),
            None => MutationOutcome::Empty,
        }
    }
}
