use super::command_ack::CommandAckResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};

/// Request type for the /Station/rotationSpeed endpoint.
#[derive(serde::Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RotationSpeedRequest {
    /// The desired clockwise rotation rate in degrees.
    pub(crate) required_rotation_speed_clockwise_degrees: f64,
}

impl JSONBodyHTTPRequestType for RotationSpeedRequest {
    type Body = RotationSpeedRequest;
    fn body(&self) -> &Self::Body { self }
}

impl HTTPRequestType for RotationSpeedRequest {
    type Response = CommandAckResponse;
    fn endpoint(&self) -> &'static str { "/Station/rotationSpeed" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}
