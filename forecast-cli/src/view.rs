//! Plain-text drawing of the dashboard page.

use forecast_core::{
    DayCard, Page,
    format::{GeneralIcon, Icon},
};
use std::fmt;

/// Short glyph standing in for each condition icon asset.
fn glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::ClearDay => "☀",
        Icon::ClearNight => "☾",
        Icon::Cloudy => "☁",
        Icon::PartlyCloudyDay => "⛅",
        Icon::PartlyCloudyNight => "☁☾",
        Icon::Rain => "☂",
        Icon::Snow => "❄",
        Icon::Unknown => "?",
    }
}

fn section_glyph(icon: GeneralIcon) -> &'static str {
    match icon {
        GeneralIcon::Temperature => "🌡",
        GeneralIcon::Precipitation => "☂",
        GeneralIcon::Wind => "≋",
        GeneralIcon::Sunrise => "☼",
        GeneralIcon::UvIndex => "UV",
    }
}

/// Terminal rendering of a [`Page`].
pub struct Dashboard<'a>(pub &'a Page);

impl fmt::Display for Dashboard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let page = self.0;

        match (page.city.is_empty(), page.country.is_empty()) {
            (true, _) => write!(f, "(no location)")?,
            (false, true) => write!(f, "{}", page.city)?,
            (false, false) => write!(f, "{}, {}", page.city, page.country)?,
        }
        writeln!(f, "    [{}]", page.toggle_label)?;

        if let Some(err) = &page.error {
            writeln!(f, "! {err}")?;
        }

        for card in &page.cards {
            draw_card(f, card)?;
        }

        Ok(())
    }
}

fn draw_card(f: &mut fmt::Formatter<'_>, card: &DayCard) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "{} {} {}", glyph(card.icon), card.weekday, card.date)?;
    for section in card.sections() {
        writeln!(
            f,
            "  {:<3} {}",
            section_glyph(section.icon),
            section.values.join(" / ")
        )?;
    }
    Ok(())
}
