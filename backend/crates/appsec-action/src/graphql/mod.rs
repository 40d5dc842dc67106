pub(crate) mod create_project_mutation;
pub(crate) mod graphql_response;
