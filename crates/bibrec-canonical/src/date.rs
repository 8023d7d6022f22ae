//! Free-form bibliographic dates.
//!
//! [`parse_date`] tries, in order: ISO-like `YYYY[-MM[-DD]]` (also with `/`),
//! month-name forms (`March 5, 1923`, `5 March 1923`, `March 1923`), a season
//! with a year (`Spring 1923`), and finally a range of two of those joined by a
//! hyphen or dash. A leading `circa`, `ca.` or `c.` marker sets the circa flag
//! and is stripped before matching. Input with no recognizable structure is
//! kept verbatim as `literal`, and [`format_date`] returns a literal unchanged.

use crate::validation::ValidationError;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Month names used for both parsing and formatting, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const RANGE_SEPARATORS: [char; 3] = ['-', '\u{2013}', '\u{2014}'];

static ISO_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{4})(?:[-/](\d{1,2})(?:[-/](\d{1,2}))?)?$").expect("invalid regex")
});
static MONTH_DAY_YEAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z]+)\.?\s+(\d{1,2})(?:st|nd|rd|th)?,?\s+(\d{4})$").expect("invalid regex")
});
static DAY_MONTH_YEAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{1,2})(?:st|nd|rd|th)?\s+([A-Za-z]+)\.?,?\s+(\d{4})$").expect("invalid regex")
});
static WORD_YEAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z]+)\.?,?\s+(\d{4})$").expect("invalid regex"));
static CIRCA_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:circa\s+|ca\.\s*|ca\s+|c\.\s*)").expect("invalid regex"));

/// Season of publication, numbered 1 (spring) through 4 (winter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Season {
    /// Season 1.
    Spring = 1,
    /// Season 2.
    Summer = 2,
    /// Season 3 (also parsed from "Fall").
    Autumn = 3,
    /// Season 4.
    Winter = 4,
}

impl Season {
    /// Display name used when formatting.
    pub fn name(self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Autumn => "Autumn",
            Season::Winter => "Winter",
        }
    }

    /// Case-insensitive lookup by name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "spring" => Some(Season::Spring),
            "summer" => Some(Season::Summer),
            "autumn" | "fall" => Some(Season::Autumn),
            "winter" => Some(Season::Winter),
            _ => None,
        }
    }
}

impl TryFrom<u8> for Season {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Season::Spring),
            2 => Ok(Season::Summer),
            3 => Ok(Season::Autumn),
            4 => Ok(Season::Winter),
            _ => Err(ValidationError::OutOfBounds {
                field: "season",
                value: value.to_string(),
            }),
        }
    }
}

impl From<Season> for u8 {
    fn from(season: Season) -> Self {
        season as u8
    }
}

/// One `[year, month?, day?]` point. A day is only present with a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<i32>", into = "Vec<i32>")]
pub struct DatePart {
    year: i32,
    month: Option<u8>,
    day: Option<u8>,
}

impl DatePart {
    /// Year-only precision.
    pub fn from_year(year: i32) -> Self {
        Self {
            year,
            month: None,
            day: None,
        }
    }

    /// Month precision; `month` must be 1..=12.
    pub fn from_year_month(year: i32, month: u8) -> Result<Self, ValidationError> {
        if !(1..=12).contains(&month) {
            return Err(ValidationError::OutOfBounds {
                field: "month",
                value: month.to_string(),
            });
        }
        Ok(Self {
            year,
            month: Some(month),
            day: None,
        })
    }

    /// Day precision; the date must exist in the proleptic Gregorian calendar.
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Result<Self, ValidationError> {
        let part = Self::from_year_month(year, month)?;
        if NaiveDate::from_ymd_opt(year, u32::from(month), u32::from(day)).is_none() {
            return Err(ValidationError::OutOfBounds {
                field: "day",
                value: day.to_string(),
            });
        }
        Ok(Self {
            day: Some(day),
            ..part
        })
    }

    /// Year component.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month component (1-based), if present.
    pub fn month(&self) -> Option<u8> {
        self.month
    }

    /// Day component, if present.
    pub fn day(&self) -> Option<u8> {
        self.day
    }
}

impl TryFrom<Vec<i32>> for DatePart {
    type Error = ValidationError;

    fn try_from(values: Vec<i32>) -> Result<Self, Self::Error> {
        let component = |field: &'static str, value: i32| {
            u8::try_from(value).map_err(|_| ValidationError::OutOfBounds {
                field,
                value: value.to_string(),
            })
        };
        match values.as_slice() {
            [year] => Ok(Self::from_year(*year)),
            [year, month] => Self::from_year_month(*year, component("month", *month)?),
            [year, month, day] => Self::from_ymd(
                *year,
                component("month", *month)?,
                component("day", *day)?,
            ),
            _ => Err(ValidationError::WrongArity {
                field: "dateParts",
                len: values.len(),
                expected: "1 to 3",
            }),
        }
    }
}

impl From<DatePart> for Vec<i32> {
    fn from(part: DatePart) -> Self {
        let mut out = vec![part.year];
        out.extend(part.month.map(i32::from));
        out.extend(part.day.map(i32::from));
        out
    }
}

/// Structured form of a bibliographic date.
///
/// One entry in `date_parts` is a point in time, two are a range. When
/// `literal` is set it is authoritative and formatting reproduces it exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateValue {
    /// Parsed points, empty for literal-only values.
    #[serde(default)]
    pub date_parts: Vec<DatePart>,
    /// Season, rendered in place of a missing month.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<Season>,
    /// Approximate date marker.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub circa: bool,
    /// Unparsed text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub literal: Option<String>,
}

impl DateValue {
    /// A literal-only value.
    pub fn literal(text: impl Into<String>) -> Self {
        Self {
            literal: Some(text.into()),
            ..Self::default()
        }
    }

    /// A single point in time.
    pub fn point(part: DatePart) -> Self {
        Self {
            date_parts: vec![part],
            ..Self::default()
        }
    }

    /// A range between two points.
    pub fn range(start: DatePart, end: DatePart) -> Self {
        Self {
            date_parts: vec![start, end],
            ..Self::default()
        }
    }

    /// True when parsing fell back to the literal text.
    pub fn is_literal(&self) -> bool {
        self.literal.is_some()
    }

    /// True when the value spans two points.
    pub fn is_range(&self) -> bool {
        self.literal.is_none() && self.date_parts.len() == 2
    }

    /// Year of the first point, if any.
    pub fn year(&self) -> Option<i32> {
        self.date_parts.first().map(DatePart::year)
    }
}

impl fmt::Display for DateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_date(self))
    }
}

/// Parses free-form date text. Never fails: unrecognized input becomes a literal.
pub fn parse_date(input: &str) -> DateValue {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return DateValue::default();
    }
    let normalized = trimmed.split_whitespace().collect::<Vec<_>>().join(" ");

    let (circa, body) = match CIRCA_MARKER.find(&normalized) {
        Some(marker) => (true, &normalized[marker.end()..]),
        None => (false, normalized.as_str()),
    };
    if body.is_empty() {
        return DateValue::literal(trimmed);
    }

    match parse_point(body)
        .map(|(part, season)| (vec![part], season))
        .or_else(|| parse_range(body))
    {
        Some((date_parts, season)) => DateValue {
            date_parts,
            season,
            circa,
            literal: None,
        },
        None => DateValue::literal(trimmed),
    }
}

/// Renders a date for display. Literal values are returned unchanged.
pub fn format_date(value: &DateValue) -> String {
    if let Some(literal) = &value.literal {
        return literal.clone();
    }
    if value.date_parts.is_empty() {
        return String::new();
    }

    // `1950-1955` only when both sides are plain four-digit years; anything
    // else is spaced so it cannot be read back as `YYYY-MM`.
    let bare_years = value.season.is_none()
        && value
            .date_parts
            .iter()
            .all(|part| part.month.is_none() && (1000..=9999).contains(&part.year));
    let separator = if bare_years { "-" } else { " - " };

    let body = value
        .date_parts
        .iter()
        .map(|part| render_part(part, value.season))
        .collect::<Vec<_>>()
        .join(separator);

    if value.circa {
        format!("circa {}", body)
    } else {
        body
    }
}

fn render_part(part: &DatePart, season: Option<Season>) -> String {
    match (part.month, part.day) {
        (Some(month), Some(day)) => {
            format!("{} {}, {}", month_name(month), day, part.year)
        }
        (Some(month), None) => format!("{} {}", month_name(month), part.year),
        (None, _) => match season {
            Some(season) => format!("{} {}", season.name(), part.year),
            None => part.year.to_string(),
        },
    }
}

fn month_name(month: u8) -> &'static str {
    MONTH_NAMES[usize::from(month.clamp(1, 12)) - 1]
}

fn month_from_name(word: &str) -> Option<u8> {
    let lower = word.to_ascii_lowercase();
    if lower == "sept" {
        return Some(9);
    }
    MONTH_NAMES
        .iter()
        .position(|name| {
            let name = name.to_ascii_lowercase();
            name == lower || (lower.len() == 3 && name.starts_with(&lower))
        })
        .and_then(|idx| u8::try_from(idx + 1).ok())
}

fn parse_point(text: &str) -> Option<(DatePart, Option<Season>)> {
    if let Some(caps) = ISO_DATE.captures(text) {
        let year = caps[1].parse().ok()?;
        let month = caps.get(2).map(|m| m.as_str().parse::<u8>().ok());
        let day = caps.get(3).map(|d| d.as_str().parse::<u8>().ok());
        let part = match (month, day) {
            (None, _) => DatePart::from_year(year),
            (Some(month), None) => DatePart::from_year_month(year, month?).ok()?,
            (Some(month), Some(day)) => DatePart::from_ymd(year, month?, day?).ok()?,
        };
        return Some((part, None));
    }
    if let Some(caps) = MONTH_DAY_YEAR.captures(text) {
        let month = month_from_name(&caps[1])?;
        let day = caps[2].parse().ok()?;
        let year = caps[3].parse().ok()?;
        return DatePart::from_ymd(year, month, day).ok().map(|p| (p, None));
    }
    if let Some(caps) = DAY_MONTH_YEAR.captures(text) {
        let day = caps[1].parse().ok()?;
        let month = month_from_name(&caps[2])?;
        let year = caps[3].parse().ok()?;
        return DatePart::from_ymd(year, month, day).ok().map(|p| (p, None));
    }
    if let Some(caps) = WORD_YEAR.captures(text) {
        let year = caps[2].parse().ok()?;
        if let Some(month) = month_from_name(&caps[1]) {
            return DatePart::from_year_month(year, month).ok().map(|p| (p, None));
        }
        let season = Season::from_name(&caps[1])?;
        return Some((DatePart::from_year(year), Some(season)));
    }
    None
}

fn parse_range(text: &str) -> Option<(Vec<DatePart>, Option<Season>)> {
    for (idx, separator) in text
        .char_indices()
        .filter(|(_, c)| RANGE_SEPARATORS.contains(c))
    {
        let left = text[..idx].trim();
        let right = text[idx + separator.len_utf8()..].trim();
        if left.is_empty() || right.is_empty() {
            continue;
        }
        let (Some((start, start_season)), Some((end, end_season))) =
            (parse_point(left), parse_point(right))
        else {
            continue;
        };
        let season = match (start_season, end_season) {
            (None, None) => None,
            (Some(a), Some(b)) if a == b => Some(a),
            _ => continue,
        };
        return Some((vec![start, end], season));
    }
    None
}
