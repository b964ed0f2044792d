use super::{Planet, StationState};
use crate::http_handler::{
    HTTPError,
    http_client::HTTPClient,
    http_request::{
        linear_speed_post::LinearSpeedRequest,
        planet_list_get::PlanetListRequest,
        request_common::{JSONBodyHTTPRequestType, NoBodyHTTPRequestType},
        rotation_speed_post::RotationSpeedRequest,
        station_get::StationRequest,
    },
};
use std::future::Future;

/// The backend operations the poller and the command sender rely on.
///
/// [`HTTPClient`] is the production implementation; anything else can stand
/// in for it when no server is at hand.
pub trait StationLink: Send + Sync + 'static {
    /// Fetches the current station state.
    fn station(&self) -> impl Future<Output = Result<StationState, HTTPError>> + Send;
    /// Fetches the planets within `scan_radius` of the station.
    fn planets(&self, scan_radius: u32) -> impl Future<Output = Result<Vec<Planet>, HTTPError>> + Send;
    /// Requests a new linear speed, returns the opaque acknowledgement.
    fn set_linear_speed(&self, speed: f64) -> impl Future<Output = Result<String, HTTPError>> + Send;
    /// Requests a new clockwise rotation rate in degrees.
    fn set_rotation_speed(&self, deg: f64) -> impl Future<Output = Result<String, HTTPError>> + Send;
}

impl StationLink for HTTPClient {
    async fn station(&self) -> Result<StationState, HTTPError> {
        Ok(StationRequest {}.send_request(self).await?.into())
    }

    async fn planets(&self, scan_radius: u32) -> Result<Vec<Planet>, HTTPError> {
        let response = PlanetListRequest { scan_radius }.send_request(self).await?;
        Ok(response
            .into_planets()
            .into_iter()
            .map(|p| Planet::from_response(p, self.host()))
            .collect())
    }

    async fn set_linear_speed(&self, speed: f64) -> Result<String, HTTPError> {
        LinearSpeedRequest { required_linear_speed: speed }.send_request(self).await
    }

    async fn set_rotation_speed(&self, deg: f64) -> Result<String, HTTPError> {
        RotationSpeedRequest { required_rotation_speed_clockwise_degrees: deg }
            .send_request(self)
            .await
    }
}
