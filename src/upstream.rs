//! Passthrough proxies to the two real weather providers, so the client
//! under audit can be pointed at honest data and at the simulator without
//! changing shape. Provider endpoints and credentials come from env vars.

use axum::http::StatusCode;
use serde_json::Value;

use crate::envelope::SimOutcome;

/// Which third-party provider a passthrough request goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    WeatherApi,
    OpenWeather,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::WeatherApi => "weatherapi",
            Provider::OpenWeather => "openweather",
        }
    }
}

pub struct UpstreamClient {
    http: reqwest::Client,
}

impl Default for UpstreamClient {
    fn default() -> Self {
        Self::new()
    }
}

impl UpstreamClient {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }

    /// Forward a current-weather lookup and wrap whatever comes back in the
    /// usual envelope. Provider errors map to a failure with the provider's
    /// status; transport errors map to 502.
    pub async fn fetch(&self, provider: Provider, location: &str) -> SimOutcome {
        let url = match request_url(provider, location) {
            Ok(url) => url,
            Err(missing) => {
                log::error!("{} passthrough not configured: {missing} unset", provider.as_str());
                return SimOutcome::failure(
                    format!("Weather provider {} is not configured", provider.as_str()),
                    StatusCode::INTERNAL_SERVER_ERROR,
                );
            }
        };

        let response = match self.http.get(&url).send().await {
            Ok(response) => response,
            Err(err) => {
                log::error!("{} request failed: {err}", provider.as_str());
                return SimOutcome::failure(
                    format!("Upstream weather provider {} unreachable", provider.as_str()),
                    StatusCode::BAD_GATEWAY,
                );
            }
        };

        // reqwest and axum sit on different http major versions; carry the
        // code across by value.
        let status = StatusCode::from_u16(response.status().as_u16())
            .unwrap_or(StatusCode::BAD_GATEWAY);

        match response.json::<Value>().await {
            Ok(body) if status.is_success() => SimOutcome::success(body, status),
            Ok(body) => {
                let message = body
                    .get("message")
                    .and_then(Value::as_str)
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("Upstream error fetching weather for {location}"));
                SimOutcome::failure(message, status)
            }
            Err(err) => {
                log::error!("{} returned an unreadable body: {err}", provider.as_str());
                SimOutcome::failure(
                    format!("Upstream weather provider {} returned garbage", provider.as_str()),
                    StatusCode::BAD_GATEWAY,
                )
            }
        }
    }
}

fn request_url(provider: Provider, location: &str) -> Result<String, &'static str> {
    let query = urlencoding::encode(location);
    match provider {
        Provider::WeatherApi => {
            let base = std::env::var("WEATHER_URL").map_err(|_| "WEATHER_URL")?;
            let key = std::env::var("WEATHER_SECRET").map_err(|_| "WEATHER_SECRET")?;
            Ok(format!("{base}/current.json?key={key}&q={query}&aqi=no"))
        }
        Provider::OpenWeather => {
            let base = std::env::var("OPENWEATHER_BASE_URL").map_err(|_| "OPENWEATHER_BASE_URL")?;
            let key = std::env::var("OPENWEATHER_KEY").map_err(|_| "OPENWEATHER_KEY")?;
            Ok(format!("{base}/weather?q={query}&appid={key}"))
        }
    }
}
