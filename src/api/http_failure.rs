use std::fmt::Display;

use crate::api::def::SourceError;

pub fn handle_response_fail(
    response: ureq::http::Response<ureq::Body>,
    message: impl Display,
) -> SourceError {
    let status = response.status();
    match response.into_body().read_to_string() {
        Ok(upstream_error) => SourceError::Upstream {
            message: format!("{}: {} ({})", message, status, upstream_error.trim()),
        },
        Err(error) => SourceError::HttpIo(error),
    }
}
