use schemars::JsonSchema;
use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::compass::CompassDirection;
use crate::constants::NO_DESCRIPTION;

// ============================================================================
// OpenWeatherMap Current Weather (2.5) Models
// ============================================================================

/// Subset of the current weather document this server reads.
///
/// Nothing in here fails on shape: a level of the wrong JSON type reads as
/// absent, and scalars stay raw JSON until an accessor converts them with a
/// zero or empty fallback.
#[derive(Debug, Default, Deserialize)]
pub struct CurrentWeatherResponse {
    #[serde(default, deserialize_with = "lenient")]
    pub main: Option<MainReadings>,
    #[serde(default, deserialize_with = "lenient")]
    pub wind: Option<WindReadings>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub weather: Option<Vec<WeatherCondition>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct MainReadings {
    pub temp: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
pub struct WindReadings {
    /// Rendered as text rather than reformatted.
    pub speed: Option<Value>,
    pub deg: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
pub struct WeatherCondition {
    pub description: Option<Value>,
}

/// Reads `T`, or `None` when the value has another shape.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).ok())
}

/// Reads a JSON array of `T`; elements of another shape become `T::default()`.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(Some(
            items
                .into_iter()
                .map(|item| T::deserialize(item).unwrap_or_default())
                .collect(),
        )),
        _ => Ok(None),
    }
}

/// Numbers as-is, numeric strings parsed, booleans as 1/0, anything else 0.
fn number_or_zero(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or_default(),
        Some(Value::String(s)) => s.trim().parse().unwrap_or_default(),
        Some(Value::Bool(b)) => f64::from(u8::from(*b)),
        _ => 0.0,
    }
}

/// Scalars in their JSON text form; null, arrays and objects read as empty.
fn text_or_empty(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

impl CurrentWeatherResponse {
    /// Reads a parsed body. A root that is not an object has no fields.
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Object(_) => Self::deserialize(value).unwrap_or_default(),
            _ => Self::default(),
        }
    }

    /// `main.temp`, or 0.0
    pub fn temperature(&self) -> f64 {
        number_or_zero(self.main.as_ref().and_then(|main| main.temp.as_ref()))
    }

    /// `wind.speed` as text, passed through verbatim; empty when absent.
    pub fn wind_speed_text(&self) -> String {
        text_or_empty(self.wind.as_ref().and_then(|wind| wind.speed.as_ref()))
    }

    /// `wind.deg`, or 0.0
    pub fn wind_degrees(&self) -> f64 {
        number_or_zero(self.wind.as_ref().and_then(|wind| wind.deg.as_ref()))
    }

    /// `weather[0].description`; `"No description"` unless `weather` is a non-empty array.
    pub fn description(&self) -> String {
        match self.weather.as_deref().and_then(|conditions| conditions.first()) {
            Some(condition) => text_or_empty(condition.description.as_ref()),
            None => NO_DESCRIPTION.to_string(),
        }
    }
}

/// Fields of a current weather response, ready to be formatted.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastReport {
    /// Degrees Celsius
    pub temperature: f64,
    pub wind_speed: String,
    pub wind_direction: CompassDirection,
    pub description: String,
}

impl From<&CurrentWeatherResponse> for ForecastReport {
    fn from(response: &CurrentWeatherResponse) -> Self {
        Self {
            temperature: response.temperature(),
            wind_speed: response.wind_speed_text(),
            wind_direction: CompassDirection::from_degrees(response.wind_degrees()),
            description: response.description(),
        }
    }
}

// ============================================================================
// MCP Tool Request Models
// ============================================================================

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetWeatherRequest {
    #[schemars(description = "Latitude")]
    pub latitude: f64,
    #[schemars(description = "Longitude")]
    pub longitude: f64,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetAlertsRequest {
    #[schemars(description = "Latitude")]
    pub latitude: f64,
    #[schemars(description = "Longitude")]
    pub longitude: f64,
}
