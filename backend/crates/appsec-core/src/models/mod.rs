pub mod create_project_input;
pub mod created_project;
