use crate::http_handler::http_response::station_state::{
    BatteryResponse, StationStateResponse, StationTransformResponse,
};
use crate::util::Vec2D;

/// Placeholder shown for values the server did not report.
pub const UNKNOWN: &str = "unknown";

/// Formats an optional reading, using [`UNKNOWN`] for absent values.
pub fn fmt_reading(value: Option<f64>) -> String {
    value.map_or_else(|| UNKNOWN.to_string(), |v| format!("{v:.2}"))
}

/// Snapshot of the station as last reported by the server.
///
/// A new sample always replaces the previous one as a whole.
#[derive(Debug, Clone, PartialEq)]
pub struct StationState {
    name: Option<String>,
    battery: Option<BatteryState>,
    linear_speed_acceleration: Option<f64>,
    rotation_speed_degrees_acceleration: Option<f64>,
    transform: StationTransform,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BatteryState {
    level: Option<f64>,
    passive_degradation_rate: Option<f64>,
    load_degradation_rate: Option<f64>,
}

/// Position and motion of the station.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StationTransform {
    pos: Vec2D<f64>,
    required_linear_speed: Option<f64>,
    linear_speed: Option<f64>,
    required_rotation_speed_cw_deg: Option<f64>,
    rotation_speed_cw_deg: Option<f64>,
    direction_angle_deg: Option<f64>,
}

impl StationState {
    #[cfg(test)]
    /// Creates a station sample that only knows its position.
    pub fn at(pos: Vec2D<f64>) -> Self {
        Self {
            name: None,
            battery: None,
            linear_speed_acceleration: None,
            rotation_speed_degrees_acceleration: None,
            transform: StationTransform::at(pos),
        }
    }

    #[cfg(test)]
    #[must_use]
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    #[cfg(test)]
    #[must_use]
    pub fn with_transform(mut self, transform: StationTransform) -> Self {
        self.transform = transform;
        self
    }

    pub fn name(&self) -> Option<&str> { self.name.as_deref() }
    pub fn battery(&self) -> Option<&BatteryState> { self.battery.as_ref() }
    pub fn linear_speed_acceleration(&self) -> Option<f64> { self.linear_speed_acceleration }
    pub fn rotation_speed_degrees_acceleration(&self) -> Option<f64> {
        self.rotation_speed_degrees_acceleration
    }
    pub fn transform(&self) -> &StationTransform { &self.transform }
    pub fn pos(&self) -> Vec2D<f64> { self.transform.pos }
}

impl BatteryState {
    pub fn level(&self) -> Option<f64> { self.level }
    pub fn passive_degradation_rate(&self) -> Option<f64> { self.passive_degradation_rate }
    pub fn load_degradation_rate(&self) -> Option<f64> { self.load_degradation_rate }
}

impl StationTransform {
    #[cfg(test)]
    pub fn at(pos: Vec2D<f64>) -> Self {
        Self {
            pos,
            required_linear_speed: None,
            linear_speed: None,
            required_rotation_speed_cw_deg: None,
            rotation_speed_cw_deg: None,
            direction_angle_deg: None,
        }
    }

    #[cfg(test)]
    #[must_use]
    pub fn with_linear_speed(mut self, required: Option<f64>, actual: Option<f64>) -> Self {
        self.required_linear_speed = required;
        self.linear_speed = actual;
        self
    }

    #[cfg(test)]
    #[must_use]
    pub fn with_rotation(mut self, required_cw_deg: Option<f64>, direction_deg: Option<f64>) -> Self {
        self.required_rotation_speed_cw_deg = required_cw_deg;
        self.direction_angle_deg = direction_deg;
        self
    }

    #[cfg(test)]
    #[must_use]
    pub fn with_measured_rotation(mut self, cw_deg: Option<f64>) -> Self {
        self.rotation_speed_cw_deg = cw_deg;
        self
    }

    pub fn pos(&self) -> Vec2D<f64> { self.pos }
    pub fn required_linear_speed(&self) -> Option<f64> { self.required_linear_speed }
    pub fn linear_speed(&self) -> Option<f64> { self.linear_speed }
    pub fn required_rotation_speed_cw_deg(&self) -> Option<f64> {
        self.required_rotation_speed_cw_deg
    }
    pub fn rotation_speed_cw_deg(&self) -> Option<f64> { self.rotation_speed_cw_deg }
    pub fn direction_angle_deg(&self) -> Option<f64> { self.direction_angle_deg }
}

impl From<StationStateResponse> for StationState {
    fn from(value: StationStateResponse) -> Self {
        Self {
            name: value.name,
            battery: value.battery.map(BatteryState::from),
            linear_speed_acceleration: value.linear_speed_acceleration,
            rotation_speed_degrees_acceleration: value.rotation_speed_degrees_acceleration,
            transform: StationTransform::from(value.transform),
        }
    }
}

impl From<BatteryResponse> for BatteryState {
    fn from(value: BatteryResponse) -> Self {
        Self {
            level: value.level,
            passive_degradation_rate: value.passive_degradation_rate,
            load_degradation_rate: value.load_degradation_rate,
        }
    }
}

impl From<StationTransformResponse> for StationTransform {
    fn from(value: StationTransformResponse) -> Self {
        Self {
            pos: Vec2D::new(value.x, value.y),
            required_linear_speed: value.required_linear_speed,
            linear_speed: value.linear_speed,
            required_rotation_speed_cw_deg: value.required_rotation_speed_clockwise_degrees,
            rotation_speed_cw_deg: value.rotation_speed_clockwise_degrees,
            direction_angle_deg: value.direction_angle_degrees,
        }
    }
}
