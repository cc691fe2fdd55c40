use anyhow::Result;
use rmcp::{
    handler::server::{tool::ToolRouter, wrapper::Parameters, ServerHandler},
    model::{CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
    ErrorData as McpError,
};

use crate::client::OpenWeatherClient;
use crate::config::Config;
use crate::constants::ALERTS_UNAVAILABLE;
use crate::error::ForecastError;
use crate::formatters::{format_forecast, format_forecast_error};
use crate::models::{ForecastReport, GetAlertsRequest, GetWeatherRequest};

/// Main weather service that handles MCP requests
#[derive(Clone)]
pub struct Weather {
    client: OpenWeatherClient,
    tool_router: ToolRouter<Self>,
}

impl Weather {
    /// Creates a new Weather service instance
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            client: OpenWeatherClient::new(config)?,
            tool_router: Self::tool_router(),
        })
    }

    /// Current weather at a coordinate, without converting failures to text
    pub async fn forecast(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<ForecastReport, ForecastError> {
        let response = self.client.current_weather(latitude, longitude).await?;
        Ok(ForecastReport::from(&response))
    }

    /// Forecast text for a coordinate; failures become an error message, never a fault
    pub async fn forecast_text(&self, latitude: f64, longitude: f64) -> String {
        match self.forecast(latitude, longitude).await {
            Ok(report) => format_forecast(&report),
            Err(e) => {
                tracing::warn!("Forecast retrieval failed: {}", e);
                format_forecast_error(&e)
            }
        }
    }

    /// Alerts text for a coordinate. The 2.5 API has no alerts endpoint.
    pub fn alerts_text(&self, _latitude: f64, _longitude: f64) -> String {
        ALERTS_UNAVAILABLE.to_string()
    }
}

#[tool_handler]
impl ServerHandler for Weather {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "mcp-openweather-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some(
                "A weather information service powered by the OpenWeatherMap 2.5 API. \
                Provides current weather for any latitude/longitude."
                    .to_string(),
            ),
        }
    }
}

#[tool_router]
impl Weather {
    /// Gets current weather for a location
    #[tool(
        name = "getWeatherForecastByLocation",
        description = "Get weather forecast by location"
    )]
    pub async fn get_weather_forecast_by_location(
        &self,
        Parameters(request): Parameters<GetWeatherRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            "Getting forecast for coordinates: {}, {}",
            request.latitude,
            request.longitude
        );

        let text = self.forecast_text(request.latitude, request.longitude).await;

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Gets weather alerts for a location
    #[tool(name = "getAlerts", description = "Get weather alerts by location")]
    pub async fn get_alerts(
        &self,
        Parameters(request): Parameters<GetAlertsRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            "Getting alerts for coordinates: {}, {}",
            request.latitude,
            request.longitude
        );

        let text = self.alerts_text(request.latitude, request.longitude);

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}
