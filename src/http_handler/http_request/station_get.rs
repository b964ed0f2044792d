use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use super::station_state::StationStateResponse;

/// Request type for the /Station endpoint.
#[derive(Debug)]
pub struct StationRequest {}

impl NoBodyHTTPRequestType for StationRequest {}

impl HTTPRequestType for StationRequest {
    type Response = StationStateResponse;
    fn endpoint(&self) -> &'static str { "/Station" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}
