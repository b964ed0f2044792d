use super::command_ack::CommandAckResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};

/// Request type for the /Station/linearSpeed endpoint.
#[derive(serde::Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LinearSpeedRequest {
    /// The desired linear speed of the station.
    pub(crate) required_linear_speed: f64,
}

impl JSONBodyHTTPRequestType for LinearSpeedRequest {
    type Body = LinearSpeedRequest;
    fn body(&self) -> &Self::Body { self }
}

impl HTTPRequestType for LinearSpeedRequest {
    type Response = CommandAckResponse;
    fn endpoint(&self) -> &'static str { "/Station/linearSpeed" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}
