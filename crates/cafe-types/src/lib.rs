//! cafe-types: domain model and ports shared by the cafe kiosk crates

pub mod domain;
pub mod ports;
