use super::{
    planet_list::PlanetListResponse, response_common::ResponseError,
    station_state::StationStateResponse,
};
use crate::http_handler::{HTTPError, http_client::HTTPClient, http_request::request_common::RequestError};
use crate::station::StationLink;
use crate::util::Vec2D;
use std::time::Duration;
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::{TcpListener, TcpStream},
    task::JoinHandle,
};

const FULL_STATION: &str = r#"{
    "name": "Mir-2",
    "battery": { "level": 1000, "passiveDegradationRate": 0.5, "loadDegrationRate": 2.0 },
    "linearSpeedAcceleration": 123,
    "rotationSpeedDegreesAcceleration": 4.5,
    "transform": {
        "x": 10, "y": 40,
        "requiredLinearSpeed": 20, "linearSpeed": 18.5,
        "requiredRotationSpeedClockwiseDegrees": 10,
        "rotationSpeedClockwiseDegrees": 9.0,
        "directionAngleDegrees": 123
    }
}"#;

#[test]
fn test_station_state_full_payload() {
    let st: StationStateResponse = serde_json::from_str(FULL_STATION).unwrap();
    assert_eq!(st.name.as_deref(), Some("Mir-2"));
    let battery = st.battery.unwrap();
    assert_eq!(battery.level, Some(1000.0));
    assert_eq!(battery.load_degradation_rate, Some(2.0));
    assert_eq!(st.transform.x, 10.0);
    assert_eq!(st.transform.y, 40.0);
    assert_eq!(st.transform.linear_speed, Some(18.5));
    assert_eq!(st.transform.direction_angle_degrees, Some(123.0));
}

#[test]
fn test_station_state_sparse_payload() {
    let st: StationStateResponse =
        serde_json::from_str(r#"{ "transform": { "x": -3.5, "y": 0 } }"#).unwrap();
    assert!(st.name.is_none());
    assert!(st.battery.is_none());
    assert!(st.linear_speed_acceleration.is_none());
    assert!(st.transform.required_linear_speed.is_none());
    assert!(st.transform.required_rotation_speed_clockwise_degrees.is_none());
}

#[test]
fn test_station_state_requires_position() {
    let res = serde_json::from_str::<StationStateResponse>(r#"{ "transform": { "x": 1 } }"#);
    assert!(res.is_err());
}

#[test]
fn test_planet_list_is_bare_array() {
    let planets = serde_json::from_str::<PlanetListResponse>(
        r#"[
            { "id": 3, "name": "Saturn", "imageUrl": "saturn.png", "radius": 3600,
              "position": { "x": -100, "y": -250 } },
            { "id": 4, "position": { "x": 350, "y": 0 } }
        ]"#,
    )
    .unwrap()
    .into_planets();
    assert_eq!(planets.len(), 2);
    let saturn = &planets[0];
    assert_eq!(saturn.id, 3);
    assert_eq!(saturn.image_url.as_deref(), Some("saturn.png"));
    assert_eq!(saturn.position.x, -100.0);
    assert!(planets[1].name.is_none());
}

/// Reads one request head plus its body, if any.
async fn read_request(socket: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        let text = String::from_utf8_lossy(&buf);
        if let Some(head_end) = text.find("\r\n\r\n") {
            let content_len = text[..head_end]
                .lines()
                .find_map(|l| {
                    l.to_ascii_lowercase()
                        .strip_prefix("content-length:")
                        .map(|v| v.trim().parse::<usize>().unwrap())
                })
                .unwrap_or(0);
            if buf.len() >= head_end + 4 + content_len {
                break;
            }
        }
    }
    String::from_utf8(buf).unwrap()
}

/// Serves a single canned answer, the handle yields the raw request received.
async fn serve_once(status: &'static str, body: &'static str) -> (HTTPClient, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let host = format!("http://{}", listener.local_addr().unwrap());
    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let request = read_request(&mut socket).await;
        let reply = format!(
            "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(reply.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;
        request
    });
    (HTTPClient::new(&host), handle)
}

#[tokio::test]
async fn test_station_get_round_trip() {
    let (client, server) = serve_once("200 OK", FULL_STATION).await;
    let station = client.station().await.unwrap();
    assert_eq!(station.pos(), Vec2D::new(10.0, 40.0));
    assert_eq!(station.name(), Some("Mir-2"));
    let request = server.await.unwrap();
    assert!(request.starts_with("GET /api/Station HTTP/1.1\r\n"));
}

#[tokio::test]
async fn test_planet_list_round_trip_resolves_images() {
    let (client, server) = serve_once(
        "200 OK",
        r#"[{ "id": 3, "name": "Saturn", "imageUrl": "saturn.png", "position": { "x": -100, "y": -250 } },
            { "id": 4, "imageUrl": "", "position": { "x": 350, "y": 0 } }]"#,
    )
    .await;
    let planets = client.planets(1500).await.unwrap();
    assert_eq!(planets.len(), 2);
    assert_eq!(planets[0].id(), 3);
    assert_eq!(planets[0].abs_pos(), Vec2D::new(-100.0, -250.0));
    assert_eq!(
        planets[0].image_url().map(str::to_string),
        Some(format!("{}/StaticData/saturn.png", client.url()))
    );
    assert!(planets[1].image_url().is_none());
    let request = server.await.unwrap();
    assert!(request.starts_with("GET /api/Station/planets?scanRadius=1500 HTTP/1.1\r\n"));
}

#[tokio::test]
async fn test_command_ack_is_returned_as_text() {
    let (client, server) = serve_once("200 OK", "\"ok\"").await;
    assert_eq!(client.set_rotation_speed(-10.0).await.unwrap(), "\"ok\"");
    let request = server.await.unwrap();
    assert!(request.starts_with("POST /api/Station/rotationSpeed HTTP/1.1\r\n"));
    assert!(request.ends_with(r#"{"requiredRotationSpeedClockwiseDegrees":-10.0}"#));
}

#[tokio::test]
async fn test_server_error_status() {
    let (client, _server) = serve_once("500 Internal Server Error", "").await;
    let err = client.station().await.unwrap_err();
    assert!(matches!(
        err,
        HTTPError::HTTPResponseError { source: ResponseError::InternalServer { status: 500 } }
    ));
    assert_eq!(err.to_string(), "The station server failed with status 500");
}

#[tokio::test]
async fn test_client_error_keeps_server_detail() {
    let (client, server) = serve_once("400 Bad Request", "speed out of range").await;
    let err = client.set_linear_speed(52.0).await.unwrap_err();
    assert!(matches!(
        &err,
        HTTPError::HTTPResponseError { source: ResponseError::BadRequest { status: 400, detail } }
            if detail == "speed out of range"
    ));
    assert_eq!(
        err.to_string(),
        "The station server rejected the request (400): speed out of range"
    );
    let request = server.await.unwrap();
    assert!(request.starts_with("POST /api/Station/linearSpeed HTTP/1.1\r\n"));
    assert!(request.ends_with(r#"{"requiredLinearSpeed":52.0}"#));
}

#[tokio::test]
async fn test_malformed_json_is_a_decode_error() {
    let (client, _server) = serve_once("200 OK", r#"{ "transform": { "x": "#).await;
    let err = client.station().await.unwrap_err();
    assert!(matches!(err, HTTPError::HTTPResponseError { source: ResponseError::Decode { .. } }));
    assert!(err.to_string().starts_with("The station server sent an unreadable answer: "));
}

#[tokio::test]
async fn test_refused_connection() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let host = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);
    let err = HTTPClient::new(&host).station().await.unwrap_err();
    assert!(matches!(err, HTTPError::HTTPRequestError { source: RequestError::NoConnection }));
    assert_eq!(err.to_string(), "The station server could not be reached");
}

#[tokio::test]
async fn test_silent_server_times_out() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let host = format!("http://{}", listener.local_addr().unwrap());
    let _server = tokio::spawn(async move {
        let (_socket, _) = listener.accept().await.unwrap();
        tokio::time::sleep(Duration::from_secs(5)).await;
    });
    let client = HTTPClient::with_timeout(&host, Duration::from_millis(100));
    let err = client.planets(1500).await.unwrap_err();
    assert!(matches!(err, HTTPError::HTTPRequestError { source: RequestError::Timeout }));
    assert_eq!(err.to_string(), "The request to the station server timed out");
}
