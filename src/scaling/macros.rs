//! Macro summary scaling
//!
//! Rescales summaries like "Calories: 100, Protein: 10g". Summaries produced by
//! the recipe detail backend put one macro per line; each line is scaled on its
//! own and line breaks are kept.

use super::amount::{format_amount, split_leading_number};

/// Returned when a recipe has no macro summary
pub const NO_MACROS_PLACEHOLDER: &str = "No macros data";

/// One `label: value[unit]` entry
#[derive(Debug, Clone, PartialEq)]
pub struct MacroEntry {
    pub label: String,
    pub value: f64,
    /// Text following the number, including any leading space (e.g. "g", " kcal")
    pub unit: String,
}

impl MacroEntry {
    /// Render this entry with its value multiplied by `factor`
    pub fn scaled(&self, factor: f64) -> String {
        format!("{}: {}{}", self.label, format_amount(self.value * factor), self.unit)
    }
}

/// A comma-delimited segment of a macro summary
#[derive(Debug, Clone, PartialEq)]
pub enum MacroSegment {
    Entry(MacroEntry),
    /// Segment without a `label: number` shape, kept as written (trimmed)
    Verbatim(String),
}

/// Parse one segment of a macro summary
///
/// The label runs up to the first colon that is followed by optional whitespace
/// and a number, so "Note: see: 5g" has the label "Note: see".
pub fn parse_macro_segment(segment: &str) -> MacroSegment {
    let trimmed = segment.trim();

    for (idx, _) in trimmed.match_indices(':') {
        let after = trimmed[idx + 1..].trim_start();
        if let Some((number, unit)) = split_leading_number(after) {
            return MacroSegment::Entry(MacroEntry {
                label: trimmed[..idx].to_string(),
                value: number.parse().unwrap_or(0.0),
                unit: unit.to_string(),
            });
        }
    }

    MacroSegment::Verbatim(trimmed.to_string())
}

fn scale_line(line: &str, factor: f64) -> String {
    line.split(',')
        .map(|segment| match parse_macro_segment(segment) {
            MacroSegment::Entry(entry) => entry.scaled(factor),
            MacroSegment::Verbatim(text) => text,
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Scale every macro value in `summary` by `factor`
///
/// Missing or blank summaries yield [`NO_MACROS_PLACEHOLDER`].
pub fn scale_macros(summary: Option<&str>, factor: f64) -> String {
    let summary = match summary {
        Some(s) if !s.trim().is_empty() => s,
        _ => return NO_MACROS_PLACEHOLDER.to_string(),
    };

    summary
        .split('\n')
        .map(|line| {
            let (body, cr) = match line.strip_suffix('\r') {
                Some(body) => (body, "\r"),
                None => (line, ""),
            };
            format!("{}{}", scale_line(body, factor), cr)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
