use async_trait::async_trait;
use reqwest::{Client, Url};
use std::time::Duration;

use crate::{ForecastResponse, UnitSystem, error::ForecastError};

use super::ForecastProvider;

/// Client for the Visual Crossing timeline endpoint.
#[derive(Debug, Clone)]
pub struct VisualCrossingClient {
    endpoint: Url,
    api_key: String,
    http: Client,
}

impl VisualCrossingClient {
    pub fn new(endpoint: &str, api_key: &str, timeout: Duration) -> Result<Self, ForecastError> {
        let endpoint = Url::parse(endpoint)
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| ForecastError::InvalidEndpoint(endpoint.to_string()))?;

        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            endpoint,
            api_key: api_key.to_string(),
            http,
        })
    }

    /// Timeline URL for `location`, which becomes a single percent-encoded path segment.
    pub fn timeline_url(&self, location: &str) -> Result<Url, ForecastError> {
        let mut url = self.endpoint.clone();
        url.path_segments_mut()
            .map_err(|_| ForecastError::InvalidEndpoint(self.endpoint.to_string()))?
            .pop_if_empty()
            .push(location);
        Ok(url)
    }

    pub async fn fetch_forecast(
        &self,
        location: &str,
        units: UnitSystem,
    ) -> Result<ForecastResponse, ForecastError> {
        let url = self.timeline_url(location)?;

        tracing::debug!(%url, %units, "requesting forecast");

        let res = self
            .http
            .get(url)
            .query(&[
                ("unitGroup", units.as_str()),
                ("key", self.api_key.as_str()),
                ("contentType", "json"),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            tracing::warn!(%status, location, "forecast request failed");
            return Err(ForecastError::status(status, &body));
        }

        tracing::debug!(body = %body, "forecast response");

        let parsed: ForecastResponse = serde_json::from_str(&body)?;

        tracing::info!(
            address = %parsed.resolved_address,
            days = parsed.days.len(),
            "forecast received"
        );

        Ok(parsed)
    }
}

#[async_trait]
impl ForecastProvider for VisualCrossingClient {
    async fn fetch_forecast(
        &self,
        location: &str,
        units: UnitSystem,
    ) -> Result<ForecastResponse, ForecastError> {
        VisualCrossingClient::fetch_forecast(self, location, units).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_ENDPOINT;

    fn client(endpoint: &str) -> VisualCrossingClient {
        VisualCrossingClient::new(endpoint, "KEY", Duration::from_secs(1)).expect("valid endpoint")
    }

    #[test]
    fn location_is_appended_as_encoded_segment() {
        let url = client(DEFAULT_ENDPOINT).timeline_url("New York, NY").unwrap();
        assert_eq!(
            url.as_str(),
            "https://weather.visualcrossing.com/VisualCrossingWebServices/rest/services/timeline/New%20York,%20NY"
        );
    }

    #[test]
    fn slashes_in_location_stay_in_one_segment() {
        let url = client("http://localhost/timeline/").timeline_url("a/b").unwrap();
        assert_eq!(url.path(), "/timeline/a%2Fb");
    }

    #[test]
    fn non_base_endpoint_is_rejected() {
        let err = VisualCrossingClient::new("mailto:me@example.com", "KEY", Duration::from_secs(1))
            .unwrap_err();
        assert!(matches!(err, ForecastError::InvalidEndpoint(_)));
    }
}
