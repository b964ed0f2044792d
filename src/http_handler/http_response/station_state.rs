use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;

/// Response type for the /Station endpoint.
#[derive(serde::Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct StationStateResponse {
    pub(crate) name: Option<String>,
    pub(crate) battery: Option<BatteryResponse>,
    pub(crate) linear_speed_acceleration: Option<f64>,
    pub(crate) rotation_speed_degrees_acceleration: Option<f64>,
    pub(crate) transform: StationTransformResponse,
}

impl SerdeJSONBodyHTTPResponseType for StationStateResponse {}

#[derive(serde::Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct StationTransformResponse {
    pub(crate) x: f64,
    pub(crate) y: f64,
    pub(crate) required_linear_speed: Option<f64>,
    pub(crate) linear_speed: Option<f64>,
    pub(crate) required_rotation_speed_clockwise_degrees: Option<f64>,
    pub(crate) rotation_speed_clockwise_degrees: Option<f64>,
    pub(crate) direction_angle_degrees: Option<f64>,
}

#[derive(serde::Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BatteryResponse {
    pub(crate) level: Option<f64>,
    pub(crate) passive_degradation_rate: Option<f64>,
    /// The backend spells this field `loadDegrationRate`.
    #[serde(alias = "loadDegrationRate")]
    pub(crate) load_degradation_rate: Option<f64>,
}
