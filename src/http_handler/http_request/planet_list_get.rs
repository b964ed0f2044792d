use super::planet_list::PlanetListResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};

/// Request type for the /Station/planets endpoint.
#[derive(Debug)]
pub struct PlanetListRequest {
    /// Only planets within this distance from the station are returned.
    pub scan_radius: u32,
}

impl NoBodyHTTPRequestType for PlanetListRequest {}

impl HTTPRequestType for PlanetListRequest {
    type Response = PlanetListResponse;
    fn endpoint(&self) -> &'static str { "/Station/planets" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
    fn query_params(&self) -> Vec<(&'static str, String)> {
        vec![("scanRadius", self.scan_radius.to_string())]
    }
}
