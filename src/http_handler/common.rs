use super::http_request::request_common::RequestError;
use super::http_response::response_common::ResponseError;
use strum_macros::Display;

/// Any failure of a request/response round-trip.
///
/// The `Display` output is the single human-readable message shown in place of
/// the map; network, decode and server errors are not distinguished there.
#[derive(Debug, Display)]
pub enum HTTPError {
    #[strum(to_string = "{source}")]
    HTTPRequestError { source: RequestError },
    #[strum(to_string = "{source}")]
    HTTPResponseError { source: ResponseError },
}

impl std::error::Error for HTTPError {}

impl From<RequestError> for HTTPError {
    fn from(source: RequestError) -> Self { HTTPError::HTTPRequestError { source } }
}

impl From<ResponseError> for HTTPError {
    fn from(source: ResponseError) -> Self { HTTPError::HTTPResponseError { source } }
}
