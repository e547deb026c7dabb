//! Text helpers shared by every view: escaping, paragraphs and date labels.
use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::labels::TODAY;

const DISPLAY_DATE_TIME: &str = "%Y/%-m/%-d %H:%M:%S";

/// Escapes the five HTML-sensitive characters. `&` goes first so the entities
/// produced for the others are left alone.
pub fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// One `<p>` per line; blank lines keep their height with `&nbsp;`.
pub fn multiline_to_blocks(text: Option<&str>) -> String {
    escape_text(text.unwrap_or_default())
        .split('\n')
        .map(|line| {
            if line.is_empty() {
                "<p>&nbsp;</p>".to_string()
            } else {
                format!("<p>{line}</p>")
            }
        })
        .collect()
}

/// Short label for a date control entry: "today" for the newest date,
/// `M/D` for the rest.
pub fn date_label(date: &str, index: usize) -> String {
    if index == 0 {
        return TODAY.to_string();
    }
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(day) => day.format("%-m/%-d").to_string(),
        Err(_) => escape_text(date),
    }
}

/// Long label used for the options of the date select.
pub fn date_option_label(date: &str, index: usize) -> String {
    if index == 0 {
        format!("{TODAY} ({})", escape_text(date))
    } else {
        format!("{} ({})", escape_text(date), date_label(date, index))
    }
}

/// Renders an ISO timestamp as `YYYY/M/D HH:MM:SS` in the offset it was
/// written with, not the viewer's local zone: a `Z` timestamp shows UTC clock
/// time. Unparseable input is shown as-is (escaped).
pub fn date_time(iso: Option<&str>) -> String {
    let Some(iso) = iso.filter(|s| !s.is_empty()) else {
        return String::new();
    };
    if let Ok(parsed) = DateTime::parse_from_rfc3339(iso) {
        return parsed.format(DISPLAY_DATE_TIME).to_string();
    }
    match NaiveDateTime::parse_from_str(iso, "%Y-%m-%dT%H:%M:%S%.f") {
        Ok(parsed) => parsed.format(DISPLAY_DATE_TIME).to_string(),
        Err(_) => escape_text(iso),
    }
}
