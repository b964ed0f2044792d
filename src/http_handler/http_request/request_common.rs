use crate::http_handler::{
    common::HTTPError, http_client::HTTPClient, http_response::response_common::HTTPResponseType,
};
use strum_macros::Display;

/// The HTTP methods used by the station backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub(crate) enum HTTPRequestMethod {
    Get,
    Post,
}

impl From<HTTPRequestMethod> for reqwest::Method {
    fn from(value: HTTPRequestMethod) -> Self {
        match value {
            HTTPRequestMethod::Get => reqwest::Method::GET,
            HTTPRequestMethod::Post => reqwest::Method::POST,
        }
    }
}

/// Common description of an endpoint: where it lives, how it is called
/// and which response type decodes its answer.
pub(crate) trait HTTPRequestType {
    /// Type of the expected response.
    type Response: HTTPResponseType;
    /// Endpoint path relative to the API root.
    fn endpoint(&self) -> &str;
    /// The corresponding HTTP Request Method.
    fn request_method(&self) -> HTTPRequestMethod;
    /// Query string parameters appended to the endpoint.
    fn query_params(&self) -> Vec<(&'static str, String)> { Vec::new() }
    fn header_params(&self) -> reqwest::header::HeaderMap { reqwest::header::HeaderMap::new() }
}

pub(crate) trait NoBodyHTTPRequestType: HTTPRequestType {
    async fn send_request(
        &self,
        client: &HTTPClient,
    ) -> Result<<Self::Response as HTTPResponseType>::ParsedResponseType, HTTPError> {
        let response = compose_request(client, self).send().await.map_err(RequestError::from)?;
        Ok(Self::Response::read_response(response).await?)
    }
}

pub(crate) trait JSONBodyHTTPRequestType: HTTPRequestType {
    /// The type of the json body.
    type Body: serde::Serialize;
    /// Returns the serializable object.
    fn body(&self) -> &Self::Body;

    async fn send_request(
        &self,
        client: &HTTPClient,
    ) -> Result<<Self::Response as HTTPResponseType>::ParsedResponseType, HTTPError> {
        let response = compose_request(client, self)
            .json(self.body())
            .send()
            .await
            .map_err(RequestError::from)?;
        Ok(Self::Response::read_response(response).await?)
    }
}

fn compose_request<T>(client: &HTTPClient, request: &T) -> reqwest::RequestBuilder
where T: HTTPRequestType + ?Sized {
    let mut builder = client
        .client()
        .request(request.request_method().into(), format!("{}{}", client.url(), request.endpoint()))
        .headers(request.header_params());
    let query = request.query_params();
    if !query.is_empty() {
        builder = builder.query(&query);
    }
    builder
}

/// Failures that happen before any response reached us.
#[derive(Debug, Display)]
pub enum RequestError {
    #[strum(to_string = "The station server could not be reached")]
    NoConnection,
    #[strum(to_string = "The request to the station server timed out")]
    Timeout,
    #[strum(to_string = "The request could not be sent: {reason}")]
    Invalid { reason: String },
}

impl std::error::Error for RequestError {}

impl From<reqwest::Error> for RequestError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_timeout() {
            RequestError::Timeout
        } else if value.is_connect() {
            RequestError::NoConnection
        } else {
            RequestError::Invalid { reason: value.to_string() }
        }
    }
}
