use crate::http_handler::http_response::planet_list::PlanetResponse;
use crate::util::Vec2D;

/// A planet of the scanned neighbourhood.
///
/// Everything except `coordinates` is fixed once fetched. `coordinates` is
/// the offset from the station and is recomputed from the absolute position
/// on every station sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Planet {
    id: i64,
    name: Option<String>,
    description: Option<String>,
    discovery_date: Option<String>,
    image_url: Option<String>,
    radius: Option<f64>,
    mass: Option<f64>,
    abs_pos: Vec2D<f64>,
    coordinates: Vec2D<f64>,
}

impl Planet {
    /// Path below the server host where planet images are served.
    const STATIC_DATA_PATH: &'static str = "/api/StaticData/";

    #[cfg(test)]
    /// Creates a bare planet at an absolute position, relative coordinates
    /// start out equal to the absolute ones.
    pub fn new(id: i64, name: &str, abs_pos: Vec2D<f64>) -> Self {
        Self {
            id,
            name: Some(name.to_string()),
            description: None,
            discovery_date: None,
            image_url: None,
            radius: None,
            mass: None,
            abs_pos,
            coordinates: abs_pos,
        }
    }

    /// Maps the wire representation, resolving the image path against `host`.
    pub fn from_response(value: PlanetResponse, host: &str) -> Self {
        let abs_pos = Vec2D::new(value.position.x, value.position.y);
        let image_url = value
            .image_url
            .filter(|p| !p.is_empty())
            .map(|p| format!("{}{}{}", host.trim_end_matches('/'), Self::STATIC_DATA_PATH, p.trim_start_matches('/')));
        Self {
            id: value.id,
            name: value.name,
            description: value.description,
            discovery_date: value.discovery_date,
            image_url,
            radius: value.radius,
            mass: value.mass,
            abs_pos,
            coordinates: abs_pos,
        }
    }

    pub fn id(&self) -> i64 { self.id }
    pub fn name(&self) -> Option<&str> { self.name.as_deref() }
    pub fn description(&self) -> Option<&str> { self.description.as_deref() }
    pub fn discovery_date(&self) -> Option<&str> { self.discovery_date.as_deref() }
    pub fn image_url(&self) -> Option<&str> { self.image_url.as_deref() }
    pub fn radius(&self) -> Option<f64> { self.radius }
    pub fn mass(&self) -> Option<f64> { self.mass }
    #[cfg(test)]
    pub fn abs_pos(&self) -> Vec2D<f64> { self.abs_pos }
    /// Offset from the station at the time of the last relocation.
    pub fn coordinates(&self) -> Vec2D<f64> { self.coordinates }

    /// Recomputes the display coordinates as `absolute - station`.
    pub fn relocate(&mut self, station_pos: Vec2D<f64>) { self.coordinates = self.abs_pos - station_pos; }
}

/// Moves every planet so that the station sits at the origin.
pub fn relocate_all(planets: &mut [Planet], station_pos: Vec2D<f64>) {
    planets.iter_mut().for_each(|p| p.relocate(station_pos));
}
