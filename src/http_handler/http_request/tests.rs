use super::{
    linear_speed_post::LinearSpeedRequest,
    planet_list_get::PlanetListRequest,
    request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType},
    rotation_speed_post::RotationSpeedRequest,
    station_get::StationRequest,
};
use crate::http_handler::http_client::HTTPClient;

#[test]
fn test_station_request_shape() {
    let req = StationRequest {};
    assert_eq!(req.endpoint(), "/Station");
    assert_eq!(req.request_method(), HTTPRequestMethod::Get);
    assert!(req.query_params().is_empty());
}

#[test]
fn test_planet_list_request_carries_scan_radius() {
    let req = PlanetListRequest { scan_radius: 1500 };
    assert_eq!(req.endpoint(), "/Station/planets");
    assert_eq!(req.request_method(), HTTPRequestMethod::Get);
    assert_eq!(req.query_params(), vec![("scanRadius", "1500".to_string())]);
}

#[test]
fn test_command_bodies_use_server_field_names() {
    let lin = LinearSpeedRequest { required_linear_speed: 20.0 };
    assert_eq!(lin.request_method(), HTTPRequestMethod::Post);
    assert_eq!(lin.endpoint(), "/Station/linearSpeed");
    assert_eq!(
        serde_json::to_value(lin.body()).unwrap(),
        serde_json::json!({ "requiredLinearSpeed": 20.0 })
    );

    let rot = RotationSpeedRequest { required_rotation_speed_clockwise_degrees: -10.0 };
    assert_eq!(rot.endpoint(), "/Station/rotationSpeed");
    assert_eq!(
        serde_json::to_value(rot.body()).unwrap(),
        serde_json::json!({ "requiredRotationSpeedClockwiseDegrees": -10.0 })
    );
}

#[test]
fn test_client_splits_host_and_api_root() {
    let client = HTTPClient::new("http://192.168.1.37:2023/");
    assert_eq!(client.host(), "http://192.168.1.37:2023");
    assert_eq!(client.url(), "http://192.168.1.37:2023/api");
}
