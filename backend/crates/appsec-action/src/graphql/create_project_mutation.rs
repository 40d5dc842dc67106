use appsec_core::NewProject;

use serde::Serialize;

/// `createProject` mutation. Playbook 1 is always attached.
pub const CREATE_PROJECT_MUTATION: &str = "mutation createProject ($companyId: Int!, $label: String!, $goal: String!, $scope: String!, $typeId: Int!,$startDate: ISO8601Date!, $tags: [String!]) { createProject( input: { companyId: $companyId label: $label goal: $goal playbooksIds: [1] scope: $scope typeId: $typeId startDate: $startDate tags: $tags } ) { errors project { apiCode id pid } } }";

const DEFAULT_PLAYBOOK_IDS: &[i64] = &[1];

/// `{query, variables}` POST body
#[derive(Debug, Serialize)]
pub struct GraphQlRequest<'a, V: Serialize> {
    pub query: &'a str,
    pub variables: V,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectVariables<'a> {
    pub company_id: i64,
    pub label: &'a str,
    pub goal: &'a str,
    pub scope: &'a str,
    pub type_id: i64,
    pub playbooks_ids: &'static [i64],
    /// Omitted from the body when the template gave no start date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<&'a str>,
    pub tags: &'a [String],
}

impl<'a> CreateProjectVariables<'a> {
    pub fn new(company_id: i64, project: &'a NewProject) -> Self {
        Self {
            company_id,
            label: &project.label,
            goal: &project.goal,
            scope: &project.scope,
            type_id: project.type_id,
            playbooks_ids: DEFAULT_PLAYBOOK_IDS,
            start_date: project.start_date.as_deref(),
            tags: &project.tags,
        }
    }
}

impl<'a> GraphQlRequest<'a, CreateProjectVariables<'a>> {
    pub fn create_project(company_id: i64, project: &'a NewProject) -> Self {
        Self {
            query: CREATE_PROJECT_MUTATION,
            variables: CreateProjectVariables::new(company_id, project),
        }
    }
}
