//! Period descriptors derived from source filenames.
//!
//! Filenames follow `<year>_<ordinal>_<season>.json`. Parsing never reads file
//! contents; the name alone determines the descriptor.
use serde::Serialize;
use std::cmp::Ordering;
use thiserror::Error;

/// Extension that marks a source file as part of the manifest.
pub const SOURCE_EXTENSION: &str = ".json";

const SEASON_GLYPHS: [(&str, &str); 4] = [
    ("winter", "冬"),
    ("spring", "春"),
    ("summer", "夏"),
    ("fall", "秋"),
];

/// One year/season period as it appears in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeriodDescriptor {
    pub key: String,
    pub year: i64,
    pub season: String,
    pub label: String,
}

/// Reasons a source filename cannot become a descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("filename has an empty key")]
    EmptyKey,
    #[error("expected <year>_<ordinal>_<season>, found {found} segment(s)")]
    MissingSegments { found: usize },
    #[error("year segment {segment:?} is not an integer")]
    InvalidYear { segment: String },
    #[error("filename is not valid UTF-8")]
    NonUtf8Name,
}

/// Display glyph for a season code, falling back to the code itself.
///
/// Lookup is case-sensitive: only the lowercase codes used in filenames map.
pub fn season_glyph(season_raw: &str) -> &str {
    SEASON_GLYPHS
        .iter()
        .find(|(code, _)| *code == season_raw)
        .map(|(_, glyph)| *glyph)
        .unwrap_or(season_raw)
}

/// Parse a source filename (with or without the `.json` extension).
pub fn parse_descriptor(file_name: &str) -> Result<PeriodDescriptor, ParseError> {
    let key = file_name
        .strip_suffix(SOURCE_EXTENSION)
        .unwrap_or(file_name);
    if key.is_empty() {
        return Err(ParseError::EmptyKey);
    }

    let segments: Vec<&str> = key.split('_').collect();
    if segments.len() < 3 {
        return Err(ParseError::MissingSegments {
            found: segments.len(),
        });
    }
    let year_segment = segments[0];
    let season_raw = segments[2];

    let year = year_segment
        .parse::<i64>()
        .map_err(|_| ParseError::InvalidYear {
            segment: year_segment.to_string(),
        })?;

    Ok(PeriodDescriptor {
        key: key.to_string(),
        year,
        season: season_raw.to_uppercase(),
        label: format!("{year_segment}年 {}", season_glyph(season_raw)),
    })
}

/// Manifest ordering: newest year first, then season code ascending.
///
/// Season codes compare ordinally so output does not depend on the host locale.
pub fn compare_periods(a: &PeriodDescriptor, b: &PeriodDescriptor) -> Ordering {
    b.year
        .cmp(&a.year)
        .then_with(|| a.season.as_str().cmp(b.season.as_str()))
}

/// Stable sort into manifest order; equal periods keep their input order.
pub fn sort_periods(periods: &mut [PeriodDescriptor]) {
    periods.sort_by(compare_periods);
}

#[cfg(test)]
#[path = "period_tests.rs"]
mod tests;
