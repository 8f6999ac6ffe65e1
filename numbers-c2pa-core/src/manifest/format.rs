//! Value formatting for manifest fields.
//!
//! Every formatter that can reject its input returns `Option` so that the
//! builder can drop the field instead of writing a malformed value.

use chrono::{DateTime, Utc};

/// IPTC namespace for digital source type codes.
pub const IPTC_DIGITAL_SOURCE_TYPE_NS: &str = "http://cv.iptc.org/newscodes/digitalsourcetype/";

const MICRO_MINUTES_PER_DEGREE: u64 = 60 * 1_000_000;

/// Output form for GPS coordinates in the EXIF assertion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GeoFormat {
    /// Signed decimal degrees with 12 fractional digits, e.g. `25.033964000000`.
    #[default]
    Decimal,
    /// XMP GPSCoordinate form `DDD,MM.mmmmmmK`, e.g. `25,2.037840N`.
    DegreesMinutes,
}

/// Format a claim generator name as underscore-separated Pascal case.
///
/// `"numbers-protocol"` and `"Numbers Protocol"` both become `"Numbers_Protocol"`.
pub fn format_claim_generator(name: &str) -> String {
    name.split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join("_")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Format a timestamp as `YYYY-MM-DDTHH:MM:SSZ`.
pub fn format_datetime(date: &DateTime<Utc>) -> String {
    date.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

/// Unix timestamp in whole seconds.
pub fn format_timestamp(date: &DateTime<Utc>) -> i64 {
    date.timestamp()
}

/// Format a latitude, or `None` if it is not a finite value in [-90, 90].
pub fn format_latitude(value: f64, format: GeoFormat) -> Option<String> {
    format_coordinate(value, 90.0, ('N', 'S'), format)
}

/// Format a longitude, or `None` if it is not a finite value in [-180, 180].
pub fn format_longitude(value: f64, format: GeoFormat) -> Option<String> {
    format_coordinate(value, 180.0, ('E', 'W'), format)
}

fn format_coordinate(
    value: f64,
    limit: f64,
    (positive, negative): (char, char),
    format: GeoFormat,
) -> Option<String> {
    if !value.is_finite() || value.abs() > limit {
        return None;
    }
    // Normalize -0.0 so it never renders with a sign.
    let value = if value == 0.0 { 0.0 } else { value };

    match format {
        GeoFormat::Decimal => Some(format!("{value:.12}")),
        GeoFormat::DegreesMinutes => {
            let direction = if value < 0.0 { negative } else { positive };
            let micro_minutes = (value.abs() * MICRO_MINUTES_PER_DEGREE as f64).round() as u64;
            let degrees = micro_minutes / MICRO_MINUTES_PER_DEGREE;
            let remainder = micro_minutes % MICRO_MINUTES_PER_DEGREE;
            Some(format!(
                "{},{}.{:06}{}",
                degrees,
                remainder / 1_000_000,
                remainder % 1_000_000,
                direction
            ))
        }
    }
}

/// Expand a digital source type code into its IPTC URI.
///
/// Values that are already `http(s)` URIs pass through unchanged.
pub fn digital_source_type_uri(value: &str) -> String {
    if value.starts_with("http://") || value.starts_with("https://") {
        value.to_string()
    } else {
        format!("{IPTC_DIGITAL_SOURCE_TYPE_NS}{value}")
    }
}
