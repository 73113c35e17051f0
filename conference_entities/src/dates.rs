use chrono::{Datelike, NaiveDate};
use tracing::debug;


const RUSSIAN_MONTHS_GENITIVE: [&str; 12] = [
    "января", "февраля", "марта", "апреля", "мая", "июня",
    "июля", "августа", "сентября", "октября", "ноября", "декабря",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// `15 марта`
    DayMonth,
    /// `15 марта 2024 г.`
    DayMonthYear,
}

/// Formats an ISO date for display. Strings that are not a `YYYY-MM-DD`
/// date are returned unchanged.
pub fn format_date_russian(date: &str, style: DateStyle) -> String {
    let parsed = match NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d") {
        Ok(parsed) => parsed,
        Err(e) => {
            if !date.is_empty() {
                debug!("Leaving date {:?} as is: {}", date, e);
            }
            return date.to_string();
        }
    };

    let month = RUSSIAN_MONTHS_GENITIVE[parsed.month0() as usize];
    match style {
        DateStyle::DayMonth => format!("{} {}", parsed.day(), month),
        DateStyle::DayMonthYear => format!("{} {} {} г.", parsed.day(), month, parsed.year()),
    }
}
