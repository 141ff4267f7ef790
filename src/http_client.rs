use std::time::Duration;

pub fn new_http_client() -> ureq::Agent {
    ureq::Agent::config_builder()
        .timeout_connect(Some(Duration::from_secs(5)))
        .timeout_global(Some(Duration::from_secs(30)))
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION"),
        ))
        .https_only(true)
        // Non-2xx responses are inspected by the caller.
        .http_status_as_error(false)
        .build()
        .new_agent()
}
