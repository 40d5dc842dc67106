mod http_failure;
