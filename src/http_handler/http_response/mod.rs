pub mod command_ack;
pub mod planet_list;
pub mod response_common;
pub mod station_state;

#[cfg(test)]
mod tests;
