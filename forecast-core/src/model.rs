use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;

/// Unit system requested from the provider and used for display suffixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum UnitSystem {
    #[default]
    Metric,
    /// Imperial units, named after the provider's `us` unit group.
    Us,
}

impl UnitSystem {
    /// Token sent as the provider's `unitGroup` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "metric",
            UnitSystem::Us => "us",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            UnitSystem::Metric => UnitSystem::Us,
            UnitSystem::Us => UnitSystem::Metric,
        }
    }

    /// Label shown on the toggle control while this unit system is active.
    pub fn label(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "Metric Units",
            UnitSystem::Us => "US Units",
        }
    }

    pub const fn all() -> &'static [UnitSystem] {
        &[UnitSystem::Metric, UnitSystem::Us]
    }
}

impl std::fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for UnitSystem {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.trim().to_lowercase();

        match lower.as_str() {
            "metric" => Ok(UnitSystem::Metric),
            "us" | "imperial" => Ok(UnitSystem::Us),
            _ => Err(anyhow::anyhow!(
                "Unknown unit system '{value}'. Supported unit systems: metric, us."
            )),
        }
    }
}

impl TryFrom<String> for UnitSystem {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        UnitSystem::try_from(value.as_str())
    }
}

impl From<UnitSystem> for String {
    fn from(value: UnitSystem) -> Self {
        value.as_str().to_string()
    }
}

/// What the dashboard is currently showing: a free-text location and a unit system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastQuery {
    pub location: String,
    pub units: UnitSystem,
}

impl ForecastQuery {
    pub const DEFAULT_LOCATION: &'static str = "london";

    pub fn new(location: impl Into<String>, units: UnitSystem) -> Self {
        Self {
            location: location.into(),
            units,
        }
    }
}

impl Default for ForecastQuery {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LOCATION, UnitSystem::default())
    }
}

/// Timeline response as returned by the provider. Only the consumed fields are kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastResponse {
    /// "<city>, <region>, <country>"
    pub resolved_address: String,
    pub days: Vec<DayRecord>,
}

/// One forecast day. The provider reports `null` for several of these in practice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayRecord {
    pub datetime: NaiveDate,
    pub icon: String,
    pub tempmax: f64,
    pub tempmin: f64,
    #[serde(default)]
    pub precip: Option<f64>,
    #[serde(default)]
    pub windspeed: Option<f64>,
    #[serde(default)]
    pub windgust: Option<f64>,
    #[serde(default)]
    pub sunrise: Option<String>,
    #[serde(default)]
    pub sunset: Option<String>,
    #[serde(default)]
    pub uvindex: Option<f64>,
}
