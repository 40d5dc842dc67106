pub(crate) mod app_sec_flow_client;
