//! Pure helpers turning provider fields into display strings.

use chrono::NaiveDate;

use crate::model::UnitSystem;

/// Weather condition icons the dashboard ships assets for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    ClearDay,
    ClearNight,
    Cloudy,
    PartlyCloudyDay,
    PartlyCloudyNight,
    Rain,
    Snow,
    /// Any condition code outside the known set.
    Unknown,
}

impl Icon {
    pub const KNOWN: [Icon; 7] = [
        Icon::ClearDay,
        Icon::ClearNight,
        Icon::Cloudy,
        Icon::PartlyCloudyDay,
        Icon::PartlyCloudyNight,
        Icon::Rain,
        Icon::Snow,
    ];

    /// Provider condition code for this icon, `None` for the placeholder.
    pub fn code(&self) -> Option<&'static str> {
        match self {
            Icon::ClearDay => Some("clear-day"),
            Icon::ClearNight => Some("clear-night"),
            Icon::Cloudy => Some("cloudy"),
            Icon::PartlyCloudyDay => Some("partly-cloudy-day"),
            Icon::PartlyCloudyNight => Some("partly-cloudy-night"),
            Icon::Rain => Some("rain"),
            Icon::Snow => Some("snow"),
            Icon::Unknown => None,
        }
    }

    pub fn asset(&self) -> &'static str {
        match self {
            Icon::ClearDay => "icons/weather/clear-day.png",
            Icon::ClearNight => "icons/weather/clear-night.png",
            Icon::Cloudy => "icons/weather/cloudy.png",
            Icon::PartlyCloudyDay => "icons/weather/partly-cloudy-day.png",
            Icon::PartlyCloudyNight => "icons/weather/partly-cloudy-night.png",
            Icon::Rain => "icons/weather/rain.png",
            Icon::Snow => "icons/weather/snow.png",
            Icon::Unknown => "icons/weather/unknown.png",
        }
    }
}

/// General-purpose icons heading each section of a day card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeneralIcon {
    Temperature,
    Precipitation,
    Wind,
    Sunrise,
    UvIndex,
}

impl GeneralIcon {
    pub fn asset(&self) -> &'static str {
        match self {
            GeneralIcon::Temperature => "icons/general/temperature.png",
            GeneralIcon::Precipitation => "icons/general/umbrella.png",
            GeneralIcon::Wind => "icons/general/wind.png",
            GeneralIcon::Sunrise => "icons/general/sunrise.png",
            GeneralIcon::UvIndex => "icons/general/uv-index.png",
        }
    }
}

/// Map a provider condition code to its icon. Unknown codes get the placeholder.
pub fn icon_for(code: &str) -> Icon {
    match code {
        "clear-day" => Icon::ClearDay,
        "clear-night" => Icon::ClearNight,
        "cloudy" => Icon::Cloudy,
        "partly-cloudy-day" => Icon::PartlyCloudyDay,
        "partly-cloudy-night" => Icon::PartlyCloudyNight,
        "rain" => Icon::Rain,
        "snow" => Icon::Snow,
        other => {
            tracing::warn!(code = other, "unrecognized condition code, using placeholder icon");
            Icon::Unknown
        }
    }
}

/// "Today", "Tomorrow", or the weekday name of `date`, relative to `today`.
pub fn day_label(date: NaiveDate, today: NaiveDate) -> String {
    match (date - today).num_days() {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        _ => date.format("%A").to_string(),
    }
}

/// "Oct 5"
pub fn short_date(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitSuffix {
    pub temperature: &'static str,
    pub wind: &'static str,
    pub precipitation: &'static str,
}

pub fn unit_suffix(units: UnitSystem) -> UnitSuffix {
    match units {
        UnitSystem::Metric => UnitSuffix {
            temperature: "°C",
            wind: "m/s",
            precipitation: "mm",
        },
        UnitSystem::Us => UnitSuffix {
            temperature: "°F",
            wind: "mph",
            precipitation: "in",
        },
    }
}

/// "06:45:00" -> "06.45"
pub fn clock_time(time: &str) -> String {
    time.split(':').take(2).collect::<Vec<_>>().join(".")
}

/// Split "<city>, <region>, <country>" into city and country.
///
/// With two segments the second one is taken as the country; a single segment
/// yields an empty country.
pub fn split_address(resolved: &str) -> (String, String) {
    let parts: Vec<&str> = resolved.split(", ").collect();
    let city = parts.first().copied().unwrap_or_default();
    let country = match parts.len() {
        0 | 1 => "",
        2 => parts[1],
        _ => parts[2],
    };
    (city.to_string(), country.to_string())
}

/// Value followed by its unit, or "-" when the provider sent nothing.
pub fn measurement(value: Option<f64>, suffix: &str) -> String {
    match value {
        Some(v) => format!("{v} {suffix}"),
        None => "-".to_string(),
    }
}
