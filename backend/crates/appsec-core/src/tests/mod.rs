mod create_project_input;
