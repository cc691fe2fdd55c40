/// User agent string for HTTP requests
pub const USER_AGENT: &str = "szfilep@gmail.com";

/// OpenWeatherMap API base URL
pub const OPENWEATHER_API_BASE: &str = "https://api.openweathermap.org";

/// Current weather endpoint of the 2.5 API
pub const CURRENT_WEATHER_PATH: &str = "/data/2.5/weather";

/// Unit system requested from OpenWeatherMap; `metric` means Celsius and m/s
pub const UNITS: &str = "metric";

pub const TEMPERATURE_UNIT: &str = "C";

pub const WIND_SPEED_UNIT: &str = "m/s";

pub const NO_DESCRIPTION: &str = "No description";

pub const FORECAST_ERROR_PREFIX: &str = "Error retrieving weather forecast: ";

pub const ALERTS_UNAVAILABLE: &str =
    "Weather alerts are not available with the current API (OpenWeatherMap 2.5).";

/// Environment variable holding the OpenWeatherMap API key
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

/// Environment variable overriding the HTTP client timeout, in seconds
pub const TIMEOUT_ENV: &str = "OPENWEATHER_TIMEOUT_SECS";

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
