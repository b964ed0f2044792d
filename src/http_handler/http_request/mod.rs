use super::http_response::{command_ack, planet_list, station_state};

pub mod linear_speed_post;
pub mod planet_list_get;
pub mod request_common;
pub mod rotation_speed_post;
pub mod station_get;

#[cfg(test)]
mod tests;
