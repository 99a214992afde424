//! Identifier parser.
//!
//! Turns a free-text spreadsheet cell into a title plus at most one qualifier:
//! - `Lost - S2` selects season 2, `Lost - S` selects every season
//! - `Dune - 2021` and `Amélie (2001)` pin the release year
//!
//! Anything else is taken verbatim as the title.

use crate::models::media::SeasonSelector;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// A parsed spreadsheet identifier.
///
/// At most one of `year` and `season` is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedIdentifier {
    /// Title to search for.
    pub title: String,
    /// Four-digit release year.
    pub year: Option<String>,
    /// Season selector for TV rows.
    pub season: Option<SeasonSelector>,
}

impl ParsedIdentifier {
    /// A bare title with no qualifiers.
    pub fn title_only(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// No year and no season: several candidates may be legitimate.
    pub fn is_ambiguous(&self) -> bool {
        self.year.is_none() && self.season.is_none()
    }
}

impl std::fmt::Display for ParsedIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.year, &self.season) {
            (Some(year), _) => write!(f, "{} ({})", self.title, year),
            (None, Some(season)) => write!(f, "{} [{}]", self.title, season),
            (None, None) => write!(f, "{}", self.title),
        }
    }
}

/// Parse a raw identifier. Never fails; unrecognized input becomes the title.
pub fn parse_identifier(raw: &str) -> ParsedIdentifier {
    let text = raw.trim();

    parse_season(text)
        .or_else(|| parse_dash_year(text))
        .or_else(|| parse_paren_year(text))
        .unwrap_or_else(|| ParsedIdentifier::title_only(text))
}

/// `<title> - s<digits>` or `<title> - s`, case-insensitive.
fn parse_season(text: &str) -> Option<ParsedIdentifier> {
    let re = Regex::new(r"(?i)^(.+?)\s*-\s*s(\d*)\s*$").ok()?;
    let caps = re.captures(text)?;

    let digits = caps.get(2)?.as_str();
    let season = if digits.is_empty() {
        SeasonSelector::All
    } else {
        SeasonSelector::Number(digits.parse().ok()?)
    };

    Some(ParsedIdentifier {
        title: caps.get(1)?.as_str().trim().to_string(),
        year: None,
        season: Some(season),
    })
}

/// `<title> - <yyyy>`.
fn parse_dash_year(text: &str) -> Option<ParsedIdentifier> {
    let re = Regex::new(r"^(.+?)\s*-\s*(\d{4})\s*$").ok()?;
    year_qualified(&re, text)
}

/// `<title> (<yyyy>)`.
fn parse_paren_year(text: &str) -> Option<ParsedIdentifier> {
    let re = Regex::new(r"^(.+?)\s*\((\d{4})\)\s*$").ok()?;
    year_qualified(&re, text)
}

fn year_qualified(re: &Regex, text: &str) -> Option<ParsedIdentifier> {
    let caps = re.captures(text)?;
    Some(ParsedIdentifier {
        title: caps.get(1)?.as_str().trim().to_string(),
        year: Some(caps.get(2)?.as_str().to_string()),
        season: None,
    })
}
