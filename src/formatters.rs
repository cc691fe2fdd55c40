use crate::constants::{FORECAST_ERROR_PREFIX, TEMPERATURE_UNIT, WIND_SPEED_UNIT};
use crate::error::ForecastError;
use crate::models::ForecastReport;

/// Formats current weather into the four-line text returned to the caller
pub fn format_forecast(report: &ForecastReport) -> String {
    format!(
        "Temperature: {} {}\nWind speed: {} {}\nWind direction: {}\nDetailed forecast: {}",
        format_decimal(report.temperature),
        TEMPERATURE_UNIT,
        report.wind_speed,
        WIND_SPEED_UNIT,
        report.wind_direction,
        report.description
    )
}

/// Formats a retrieval failure as tool output
pub fn format_forecast_error(error: &ForecastError) -> String {
    format!("{}{}", FORECAST_ERROR_PREFIX, error)
}

/// Whole numbers keep a trailing `.0` (`20.0`, not `20`).
fn format_decimal(value: f64) -> String {
    format!("{:?}", value)
}
