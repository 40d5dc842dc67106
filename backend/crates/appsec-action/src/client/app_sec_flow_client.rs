use crate::{
    ActionError, ActionErrorResult, CreateProjectData, GraphQlRequest, GraphQlResponse,
    MutationOutcome,
};

use appsec_config::ConvisoConfig;
use appsec_core::{CreatedProject, NewProject};

use std::panic::Location;

use error_location::ErrorLocation;
use hyper::ext::ReasonPhrase;
use log::{debug, warn};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client as ReqwestClient, StatusCode, Url};
use serde::{Deserialize, Serialize};

const API_KEY_HEADER: &str = "x-api-key";
const JSON_CONTENT_TYPE: &str = "application/json";

const UNAUTHORIZED_MESSAGE: &str = "Unauthorized, please use a valid token";
const NOT_FOUND_MESSAGE: &str = "Backend URL Not Found. please check the correct graphql URL";
const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error";

/// Error body returned by the platform's HTTP layer, e.g. `{"errors":[{"msg":"..."}]}`
#[derive(Debug, Deserialize)]
struct HttpErrorBody {
    #[serde(default)]
    errors: Vec<HttpErrorEntry>,
}

#[derive(Debug, Deserialize)]
struct HttpErrorEntry {
    #[serde(default)]
    msg: Option<String>,
}

/// GraphQL client for the Conviso AppSecFlow API
pub struct AppSecFlowClient {
    graphql_url: Url,
    api_key: String,
    client: ReqwestClient,
}

impl AppSecFlowClient {
    /// Create a client with its own connection pool
    pub fn new(config: &ConvisoConfig) -> ActionErrorResult<Self> {
        Self::with_http_client(config, ReqwestClient::new())
    }

    /// Create a client that shares an existing reqwest pool
    pub fn with_http_client(
        config: &ConvisoConfig,
        client: ReqwestClient,
    ) -> ActionErrorResult<Self> {
        let raw_url = config.graphql_url();
        let graphql_url = Url::parse(&raw_url).map_err(|e| ActionError::InvalidUrl {
            url: raw_url.clone(),
            location: ErrorLocation::from(Location::caller()),
            source: e,
        })?;

        Ok(Self {
            graphql_url,
            api_key: config.api_key.clone(),
            client,
        })
    }

    pub fn graphql_url(&self) -> &Url {
        &self.graphql_url
    }

    /// Build a POST to the GraphQL endpoint with the platform headers
    fn request<B: Serialize>(&self, body: &B) -> reqwest::RequestBuilder {
        self.client
            .post(self.graphql_url.clone())
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .header(ACCEPT, JSON_CONTENT_TYPE)
            .header(API_KEY_HEADER, &self.api_key)
            .json(body)
    }

    /// Send the `createProject` mutation and map the response.
    pub async fn create_project(
        &self,
        company_id: i64,
        project: &NewProject,
    ) -> ActionErrorResult<CreatedProject> {
        let body = GraphQlRequest::create_project(company_id, project);
        debug!(
            "POST {} createProject label={} company={}",
            self.graphql_url, project.label, company_id
        );

        let response: GraphQlResponse<CreateProjectData> = self.execute(&body).await?;

        match response.into_outcome() {
            MutationOutcome::Created(created) => Ok(created),
            MutationOutcome::Rejected(message) | MutationOutcome::FieldErrors(message) => {
                warn!("createProject rejected: {message}");
                Err(ActionError::rejected(message))
            }
            MutationOutcome::Empty => Err(ActionError::rejected(
                "response did not include a project",
            )),
        }
    }

    /// Execute request and handle HTTP-level errors
    async fn execute<B: Serialize, T: for<'de> Deserialize<'de>>(
        &self,
        body: &B,
    ) -> ActionErrorResult<T> {
        let response = self.request(body).send().await?;
        let status = response.status();

        if !status.is_success() {
            let wire_reason = response
                .extensions()
                .get::<ReasonPhrase>()
                .map(|reason| reason.as_bytes());
            let status_text = Self::status_text(status, wire_reason);

            let error_body = if Self::needs_error_body(status, &status_text) {
                Some(response.bytes().await?)
            } else {
                None
            };
            let message = Self::http_failure_message(status, &status_text, error_body.as_deref());
            warn!("createProject failed with HTTP {}: {message}", status.as_u16());
            return Err(ActionError::http_status(status.as_u16(), message));
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Reason phrase as sent by the server.
    ///
    /// hyper only records the phrase when it differs from the canonical one,
    /// so an absent phrase means the canonical reason was on the wire.
    pub(crate) fn status_text(status: StatusCode, wire_reason: Option<&[u8]>) -> String {
        match wire_reason {
            Some(bytes) => String::from_utf8_lossy(bytes).trim().to_string(),
            None => status.canonical_reason().unwrap_or_default().to_string(),
        }
    }

    /// Only responses with an empty status text carry their message in the body
    pub(crate) fn needs_error_body(status: StatusCode, status_text: &str) -> bool {
        status != StatusCode::UNAUTHORIZED
            && status != StatusCode::NOT_FOUND
            && status_text.is_empty()
    }

    pub(crate) fn http_failure_message(
        status: StatusCode,
        status_text: &str,
        body: Option<&[u8]>,
    ) -> String {
        match status {
            StatusCode::UNAUTHORIZED => UNAUTHORIZED_MESSAGE.to_string(),
            StatusCode::NOT_FOUND => NOT_FOUND_MESSAGE.to_string(),
            _ if !status_text.is_empty() => status_text.to_string(),
            _ => body
                .and_then(|bytes| serde_json::from_slice::<HttpErrorBody>(bytes).ok())
                .and_then(|parsed| parsed.errors.into_iter().next())
                .and_then(|entry| entry.msg)
                .unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_string()),
        }
    }
}
