//! MCP server exposing OpenWeatherMap current weather as tools.

pub mod client;
pub mod compass;
pub mod config;
pub mod constants;
pub mod error;
pub mod formatters;
pub mod models;
pub mod service;

pub use compass::CompassDirection;
pub use config::Config;
pub use error::ForecastError;
pub use models::ForecastReport;
pub use service::Weather;
