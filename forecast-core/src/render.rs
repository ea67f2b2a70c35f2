//! Page model of the dashboard and the clear-and-rebuild render step.

use chrono::NaiveDate;

use crate::{
    format::{self, GeneralIcon, Icon, day_label, measurement, short_date, unit_suffix},
    model::{DayRecord, UnitSystem},
};

/// One rendered forecast day.
#[derive(Debug, Clone, PartialEq)]
pub struct DayCard {
    pub icon: Icon,
    pub weekday: String,
    pub date: String,
    pub max_temp: String,
    pub min_temp: String,
    pub precip: String,
    pub wind_speed: String,
    pub wind_gust: String,
    pub sunrise: String,
    pub sunset: String,
    pub uv_index: String,
}

impl DayCard {
    pub fn from_record(day: &DayRecord, units: UnitSystem, today: NaiveDate) -> Self {
        let suffix = unit_suffix(units);

        Self {
            icon: format::icon_for(&day.icon),
            weekday: day_label(day.datetime, today),
            date: short_date(day.datetime),
            max_temp: measurement(Some(day.tempmax), suffix.temperature),
            min_temp: measurement(Some(day.tempmin), suffix.temperature),
            precip: measurement(day.precip, suffix.precipitation),
            wind_speed: measurement(day.windspeed, suffix.wind),
            wind_gust: measurement(day.windgust, suffix.wind),
            sunrise: day.sunrise.as_deref().map(format::clock_time).unwrap_or_else(missing),
            sunset: day.sunset.as_deref().map(format::clock_time).unwrap_or_else(missing),
            uv_index: day.uvindex.map(|uv| uv.to_string()).unwrap_or_else(missing),
        }
    }

    /// Value groups below the day header, in display order.
    pub fn sections(&self) -> [CardSection<'_>; 5] {
        [
            CardSection {
                icon: GeneralIcon::Temperature,
                values: vec![self.max_temp.as_str(), self.min_temp.as_str()],
            },
            CardSection {
                icon: GeneralIcon::Precipitation,
                values: vec![self.precip.as_str()],
            },
            CardSection {
                icon: GeneralIcon::Wind,
                values: vec![self.wind_speed.as_str(), self.wind_gust.as_str()],
            },
            CardSection {
                icon: GeneralIcon::Sunrise,
                values: vec![self.sunrise.as_str(), self.sunset.as_str()],
            },
            CardSection {
                icon: GeneralIcon::UvIndex,
                values: vec![self.uv_index.as_str()],
            },
        ]
    }
}

/// One icon-headed group of values on a day card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardSection<'a> {
    pub icon: GeneralIcon,
    pub values: Vec<&'a str>,
}

fn missing() -> String {
    "-".to_string()
}

/// Everything the dashboard displays. Front ends draw this as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub city: String,
    pub country: String,
    pub toggle_label: String,
    pub cards: Vec<DayCard>,
    /// Inline message for the last failed cycle.
    pub error: Option<String>,
}

impl Page {
    pub fn new(units: UnitSystem) -> Self {
        Self {
            city: String::new(),
            country: String::new(),
            toggle_label: units.label().to_string(),
            cards: Vec::new(),
            error: None,
        }
    }

    pub fn clear_cards(&mut self) {
        self.cards.clear();
    }

    pub fn set_header(&mut self, city: &str, country: &str) {
        self.city = city.to_string();
        self.country = country.to_string();
    }

    pub fn append_card(&mut self, card: DayCard) {
        self.cards.push(card);
    }

    pub fn set_toggle_label(&mut self, units: UnitSystem) {
        self.toggle_label = units.label().to_string();
    }

    /// Show `message` without touching the cards already on the page.
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }
}

/// Replace every card on `page` with one card per day, in provider order.
pub fn render(
    page: &mut Page,
    city: &str,
    country: &str,
    days: &[DayRecord],
    units: UnitSystem,
    today: NaiveDate,
) {
    page.clear_cards();
    page.set_header(city, country);

    for day in days {
        page.append_card(DayCard::from_record(day, units, today));
    }

    page.error = None;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 15).unwrap()
    }

    fn record(offset: u64, icon: &str) -> DayRecord {
        DayRecord {
            datetime: today() + chrono::Days::new(offset),
            icon: icon.to_string(),
            tempmax: 15.0,
            tempmin: 9.0,
            precip: Some(0.0),
            windspeed: Some(10.0),
            windgust: Some(18.0),
            sunrise: Some("06:45:00".into()),
            sunset: Some("19:30:00".into()),
            uvindex: Some(3.0),
        }
    }

    #[test]
    fn card_fields_are_formatted() {
        let card = DayCard::from_record(&record(0, "cloudy"), UnitSystem::Metric, today());

        assert_eq!(card.icon, Icon::Cloudy);
        assert_eq!(card.weekday, "Today");
        assert_eq!(card.date, "Oct 15");
        assert_eq!(card.max_temp, "15 °C");
        assert_eq!(card.min_temp, "9 °C");
        assert_eq!(card.precip, "0 mm");
        assert_eq!(card.wind_speed, "10 m/s");
        assert_eq!(card.wind_gust, "18 m/s");
        assert_eq!(card.sunrise, "06.45");
        assert_eq!(card.sunset, "19.30");
        assert_eq!(card.uv_index, "3");
    }

    #[test]
    fn sections_carry_general_icons_and_values() {
        let card = DayCard::from_record(&record(0, "cloudy"), UnitSystem::Metric, today());
        let sections = card.sections();

        let icons: Vec<&str> = sections.iter().map(|s| s.icon.asset()).collect();
        assert_eq!(
            icons,
            vec![
                "icons/general/temperature.png",
                "icons/general/umbrella.png",
                "icons/general/wind.png",
                "icons/general/sunrise.png",
                "icons/general/uv-index.png",
            ]
        );
        assert_eq!(sections[0].values, vec!["15 °C", "9 °C"]);
        assert_eq!(sections[1].values, vec!["0 mm"]);
        assert_eq!(sections[2].values, vec!["10 m/s", "18 m/s"]);
        assert_eq!(sections[3].values, vec!["06.45", "19.30"]);
        assert_eq!(sections[4].values, vec!["3"]);
    }

    #[test]
    fn missing_optional_fields_render_as_dash() {
        let mut day = record(1, "snow");
        day.windgust = None;
        day.sunrise = None;
        day.uvindex = None;

        let card = DayCard::from_record(&day, UnitSystem::Us, today());
        assert_eq!(card.weekday, "Tomorrow");
        assert_eq!(card.max_temp, "15 °F");
        assert_eq!(card.wind_gust, "-");
        assert_eq!(card.sunrise, "-");
        assert_eq!(card.uv_index, "-");
    }

    #[test]
    fn render_keeps_provider_order() {
        let mut page = Page::new(UnitSystem::Metric);
        let days = vec![record(0, "rain"), record(1, "snow"), record(2, "clear-day")];

        render(&mut page, "Oslo", "Norway", &days, UnitSystem::Metric, today());

        let icons: Vec<Icon> = page.cards.iter().map(|c| c.icon).collect();
        assert_eq!(icons, vec![Icon::Rain, Icon::Snow, Icon::ClearDay]);
        assert_eq!(page.city, "Oslo");
        assert_eq!(page.country, "Norway");
    }

    #[test]
    fn rendering_twice_is_idempotent() {
        let mut page = Page::new(UnitSystem::Metric);
        let days = vec![record(0, "rain"), record(1, "snow")];

        render(&mut page, "Oslo", "Norway", &days, UnitSystem::Metric, today());
        let once = page.clone();
        render(&mut page, "Oslo", "Norway", &days, UnitSystem::Metric, today());

        assert_eq!(page, once);
        assert_eq!(page.cards.len(), 2);
    }

    #[test]
    fn render_replaces_previous_cards_and_clears_error() {
        let mut page = Page::new(UnitSystem::Metric);
        let days = [record(0, "rain"), record(1, "rain")];
        render(&mut page, "A", "X", &days, UnitSystem::Metric, today());
        page.show_error("boom");

        render(&mut page, "B", "Y", &[record(0, "snow")], UnitSystem::Metric, today());

        assert_eq!(page.cards.len(), 1);
        assert_eq!(page.cards[0].icon, Icon::Snow);
        assert_eq!(page.error, None);
    }

    #[test]
    fn show_error_keeps_cards() {
        let mut page = Page::new(UnitSystem::Metric);
        render(&mut page, "A", "X", &[record(0, "rain")], UnitSystem::Metric, today());

        page.show_error("offline");

        assert_eq!(page.cards.len(), 1);
        assert_eq!(page.error.as_deref(), Some("offline"));
    }

    #[test]
    fn empty_forecast_clears_page() {
        let mut page = Page::new(UnitSystem::Metric);
        render(&mut page, "A", "X", &[record(0, "rain")], UnitSystem::Metric, today());
        render(&mut page, "A", "X", &[], UnitSystem::Metric, today());
        assert!(page.cards.is_empty());
    }
}
