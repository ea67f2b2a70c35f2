use crate::{
    Config, ForecastResponse, UnitSystem, error::ForecastError,
    provider::visualcrossing::VisualCrossingClient,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod visualcrossing;

/// Source of forecasts for the controller.
#[async_trait]
pub trait ForecastProvider: Send + Sync + Debug {
    async fn fetch_forecast(
        &self,
        location: &str,
        units: UnitSystem,
    ) -> Result<ForecastResponse, ForecastError>;
}

/// Construct the forecast client from config.
pub fn provider_from_config(config: &Config) -> Result<Box<dyn ForecastProvider>, ForecastError> {
    let client = VisualCrossingClient::new(config.endpoint(), config.api_key(), config.timeout())?;
    Ok(Box::new(client))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_from_default_config_works() {
        let cfg = Config::default();
        assert!(provider_from_config(&cfg).is_ok());
    }

    #[test]
    fn provider_from_config_rejects_bad_endpoint() {
        let cfg = Config {
            endpoint: Some("not a url".into()),
            ..Config::default()
        };
        let err = provider_from_config(&cfg).unwrap_err();
        assert!(matches!(err, ForecastError::InvalidEndpoint(_)));
    }
}
