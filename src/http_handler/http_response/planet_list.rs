use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;

/// Response type for the /Station/planets endpoint, a bare json array.
#[derive(serde::Deserialize, Debug)]
#[serde(transparent)]
pub struct PlanetListResponse {
    planets: Vec<PlanetResponse>,
}

impl SerdeJSONBodyHTTPResponseType for PlanetListResponse {}

impl PlanetListResponse {
    pub fn into_planets(self) -> Vec<PlanetResponse> { self.planets }
}

#[derive(serde::Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PlanetResponse {
    pub(crate) id: i64,
    pub(crate) name: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) discovery_date: Option<String>,
    /// Host-relative path of the planet image below `/api/StaticData/`.
    pub(crate) image_url: Option<String>,
    pub(crate) radius: Option<f64>,
    pub(crate) mass: Option<f64>,
    pub(crate) position: PlanetPositionResponse,
}

#[derive(serde::Deserialize, Debug, Clone, Copy)]
pub struct PlanetPositionResponse {
    pub(crate) x: f64,
    pub(crate) y: f64,
}
