pub mod log_test;
pub mod request_body_json;
pub mod request_body_string;
pub mod request_param;
