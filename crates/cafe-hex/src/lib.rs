//! cafe-hex: hexagonal cafe kiosk API library (core + inbound HTTP)

pub mod config;
pub mod errors;

pub mod application;

pub use cafe_types::{domain, ports};

pub mod inbound; // HTTP adapter (server + handlers)
