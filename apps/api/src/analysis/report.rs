//! Keyword Report readers: best-effort extraction of structure from the
//! model's free-text report.
//!
//! The model is only *asked* to follow the report layout, so every reader here
//! is fallible. Callers use the results to enrich responses and never fail a
//! request because a reader came back empty.

use thiserror::Error;

use crate::generation::markup::strip_markup;

#[derive(Debug, Error, PartialEq)]
pub enum ReportParseError {
    #[error("report has no matching score")]
    ScoreNotFound,

    #[error("matching score {0} is outside 0-100")]
    ScoreOutOfRange(f64),
}

/// Reads the "Candidate Matching Score" percentage from a report.
///
/// The number may sit on the heading line or on the next non-empty line.
/// Fractional scores are rounded.
pub fn parse_match_score(report: &str) -> Result<u8, ReportParseError> {
    let lines: Vec<String> = report.lines().map(strip_markup).collect();

    let heading = lines
        .iter()
        .position(|l| {
            let lower = l.to_ascii_lowercase();
            lower.contains("matching score") || lower.contains("match score")
        })
        .ok_or(ReportParseError::ScoreNotFound)?;

    let after_heading = lines[heading]
        .to_ascii_lowercase()
        .find("score")
        .map(|i| lines[heading][i + "score".len()..].to_string())
        .unwrap_or_default();

    let value = first_number(&after_heading)
        .or_else(|| {
            lines[heading + 1..]
                .iter()
                .find(|l| !l.trim().is_empty())
                .and_then(|l| first_number(l))
        })
        .ok_or(ReportParseError::ScoreNotFound)?;

    if !(0.0..=100.0).contains(&value) {
        return Err(ReportParseError::ScoreOutOfRange(value));
    }
    Ok(value.round() as u8)
}

/// Lists the items under the report's "Missing Keywords" heading.
///
/// Accepts `-`, `*`, `•` and numbered bullets, or a comma-separated list on the
/// heading line itself. Returns an empty list when the section is absent.
pub fn missing_keywords(report: &str) -> Vec<String> {
    let mut lines = report.lines();

    let inline = loop {
        let Some(line) = lines.next() else {
            return Vec::new();
        };
        let cleaned = strip_markup(line);
        let heading = cleaned.trim().trim_start_matches('#').trim();
        if heading.contains('|') {
            continue;
        }
        if heading.to_ascii_lowercase().starts_with("missing keywords") {
            break heading["missing keywords".len()..]
                .trim_start_matches(':')
                .trim()
                .to_string();
        }
    };

    if !inline.is_empty() {
        return inline
            .split(',')
            .map(|k| k.trim().trim_end_matches('.').to_string())
            .filter(|k| !k.is_empty())
            .collect();
    }

    let mut keywords = Vec::new();
    for line in lines {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        match bullet_item(trimmed) {
            Some(item) if !item.is_empty() => keywords.push(item),
            Some(_) => {}
            // Lead-in text between the heading and the first bullet.
            None if keywords.is_empty() && !starts_next_section(trimmed) => {}
            None => break,
        }
    }
    keywords
}

/// Headings of the report sections that follow "Missing Keywords".
const FOLLOWING_SECTIONS: [&str; 2] = ["educational links", "suggestions for optimization"];

fn starts_next_section(line: &str) -> bool {
    let heading = strip_markup(line).trim_start_matches('#').trim().to_ascii_lowercase();
    FOLLOWING_SECTIONS
        .iter()
        .any(|section| heading.starts_with(section))
}

/// Returns the text of a bullet line, or `None` if the line is not a bullet.
fn bullet_item(line: &str) -> Option<String> {
    let rest = ["- ", "* ", "• "]
        .iter()
        .find_map(|marker| line.strip_prefix(marker))
        .or_else(|| {
            let digits = line.chars().take_while(char::is_ascii_digit).count();
            if digits == 0 {
                return None;
            }
            line[digits..]
                .strip_prefix(". ")
                .or_else(|| line[digits..].strip_prefix(") "))
        })?;
    Some(strip_markup(rest).trim().to_string())
}

fn first_number(text: &str) -> Option<f64> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let number: String = text[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    number.trim_end_matches('.').parse().ok()
}
