//! Experience timeline model: date-range parsing and card ordering.
//!
//! DESIGN
//! ======
//! Cards are authored in arbitrary order in `content`; this module derives a
//! month-precision [`DateRange`] from each card's raw date label and computes
//! the display order (latest end first, ties by latest start). Computing the
//! order is deliberately separate from applying it: nothing here touches the
//! document, `components::experience_section` consumes the sorted list.

#[cfg(test)]
#[path = "experience_test.rs"]
mod experience_test;

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Calendar month, ordered January through December.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    /// Resolve a month name case-insensitively.
    ///
    /// Lookup goes through the fixed three-letter abbreviations `jan`..`dec`,
    /// so full names resolve by prefix (`September` and `sept` both land on
    /// `sep`). Anything else is `None`.
    pub fn from_name(raw: &str) -> Option<Self> {
        let key: String = raw.trim().chars().take(3).map(|c| c.to_ascii_lowercase()).collect();
        match key.as_str() {
            "jan" => Some(Self::January),
            "feb" => Some(Self::February),
            "mar" => Some(Self::March),
            "apr" => Some(Self::April),
            "may" => Some(Self::May),
            "jun" => Some(Self::June),
            "jul" => Some(Self::July),
            "aug" => Some(Self::August),
            "sep" => Some(Self::September),
            "oct" => Some(Self::October),
            "nov" => Some(Self::November),
            "dec" => Some(Self::December),
            _ => None,
        }
    }
}

/// A month-precision point in time. Ordering is by year, then month.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct MonthDate {
    pub year: i32,
    pub month: Month,
}

/// Ordering sentinel for open-ended ranges. Never rendered; card labels are
/// always shown verbatim.
pub const FAR_FUTURE: MonthDate = MonthDate {
    year: 9999,
    month: Month::January,
};

/// Derived attributes of one card's raw date label.
///
/// `None` endpoints mean the text could not be resolved; they compare as the
/// earliest possible value so unparseable cards sink to the bottom.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<MonthDate>,
    pub end: Option<MonthDate>,
    pub ongoing: bool,
}

impl DateRange {
    /// Parse a raw label such as `"Jun 2019 – Dec 2021 · Globex"`.
    ///
    /// Text after the first `·` separator (company/location free text) is
    /// ignored. The remaining segment splits on the first en-dash or hyphen;
    /// a missing second endpoint means a single-month engagement, so `end`
    /// mirrors `start`. `present`/`current` endpoints resolve to the
    /// far-future sentinel and mark the range ongoing. Parse misses degrade
    /// to `None` endpoints; this never fails.
    pub fn parse(label: &str) -> Self {
        let segment = label.split_once('·').map_or(label, |(head, _)| head).trim();
        let (start_text, end_text) = match segment.split_once(['–', '-']) {
            Some((start, end)) => (start.trim(), end.trim()),
            None => (segment, segment),
        };

        let start = parse_month_year(start_text);
        let end = parse_month_year(end_text);
        let ongoing = is_open_ended(start_text) || is_open_ended(end_text);

        if start.is_none() || end.is_none() {
            log::warn!("unrecognized date range in label {label:?}");
        }

        Self { start, end, ongoing }
    }
}

/// Parse a single `"Month YYYY"` endpoint, or `present`/`current`.
///
/// Scans adjacent whitespace-separated tokens for a month name followed by a
/// four-digit year, matching labels like `"Jun 2020"` or `"September 2021"`.
pub fn parse_month_year(text: &str) -> Option<MonthDate> {
    let trimmed = text.trim();
    if is_open_ended(trimmed) {
        return Some(FAR_FUTURE);
    }

    let tokens: Vec<&str> = trimmed.split_whitespace().collect();
    for pair in tokens.windows(2) {
        let Some(month) = Month::from_name(pair[0]) else {
            continue;
        };
        let Some(year) = parse_year(pair[1]) else {
            continue;
        };
        return Some(MonthDate { year, month });
    }
    None
}

/// `present` / `current` (any case) mark an open-ended engagement.
fn is_open_ended(text: &str) -> bool {
    let token = text.trim();
    token.eq_ignore_ascii_case("present") || token.eq_ignore_ascii_case("current")
}

/// Accept a four-digit year token, tolerating trailing punctuation.
fn parse_year(token: &str) -> Option<i32> {
    let digits = token.trim_matches(|c: char| !c.is_ascii_digit());
    if digits.len() == 4 && digits.chars().all(|c| c.is_ascii_digit()) {
        digits.parse().ok()
    } else {
        None
    }
}

/// One experience card as authored in `content`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceItem {
    pub role: String,
    pub organization: String,
    /// Raw date-range label, rendered verbatim
    /// (e.g. `"Jan 2022 – Present · Remote"`).
    pub dates_label: String,
    pub summary: String,
    pub tags: Vec<String>,
}

/// An authored card annotated with its derived [`DateRange`].
///
/// Entries are rebuilt from `content` on every page load, consumed once by
/// [`sort_entries`], then handed to the card renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct ExperienceEntry {
    pub item: ExperienceItem,
    pub range: DateRange,
}

/// Annotate authored items with parsed date ranges, preserving input order.
pub fn build_entries(items: Vec<ExperienceItem>) -> Vec<ExperienceEntry> {
    items
        .into_iter()
        .map(|item| {
            let range = DateRange::parse(&item.dates_label);
            ExperienceEntry { item, range }
        })
        .collect()
}

/// Compare two entries for display: latest `end` first (ongoing ranges carry
/// the far-future sentinel, so they lead), ties broken by latest `start`.
/// Missing endpoints compare as the earliest possible value.
pub fn compare_entries(a: &ExperienceEntry, b: &ExperienceEntry) -> Ordering {
    let a_key = (a.range.end, a.range.start);
    let b_key = (b.range.end, b.range.start);
    b_key.cmp(&a_key)
}

/// Stable-sort entries into display order; equal keys keep authored order.
pub fn sort_entries(entries: &mut [ExperienceEntry]) {
    entries.sort_by(compare_entries);
}
