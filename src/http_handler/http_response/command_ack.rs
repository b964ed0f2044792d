use crate::http_handler::http_response::response_common::{HTTPResponseType, ResponseError};

/// Response type for the control endpoints. The payload is opaque and only
/// kept for logging.
pub(crate) struct CommandAckResponse {}

impl HTTPResponseType for CommandAckResponse {
    type ParsedResponseType = String;

    async fn read_response(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError> {
        let resp = Self::unwrap_return_code(response).await?;
        Ok(resp.text().await?)
    }
}
