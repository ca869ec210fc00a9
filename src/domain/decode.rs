//! Positional row decoding.
//!
//! Each record type names its column layout once in [`DecodeRow::FIELDS`] and reads
//! cells through [`Cells`], which turns short rows into per-field defaults instead of
//! errors. The first row of every table is a header and is never decoded.

use crate::domain::model::{BlogPost, Project, SkillRow, TabularResponse, PRESENT};

/// Read-only view over one row of string cells.
#[derive(Debug, Clone, Copy)]
pub struct Cells<'a> {
    row: &'a [String],
}

impl<'a> Cells<'a> {
    pub fn new(row: &'a [String]) -> Self {
        Self { row }
    }

    /// Cell text, or `""` past the end of the row.
    pub fn text(&self, index: usize) -> &'a str {
        self.row.get(index).map(String::as_str).unwrap_or("")
    }

    /// Cell text, or `default` when the cell is missing or empty.
    pub fn text_or(&self, index: usize, default: &'a str) -> &'a str {
        match self.text(index) {
            "" => default,
            value => value,
        }
    }

    pub fn optional(&self, index: usize) -> Option<String> {
        match self.text(index) {
            "" => None,
            value => Some(value.to_string()),
        }
    }

    /// Leading integer of the cell, the way spreadsheet users type numbers
    /// ("5", " 12 ", "8 people"). `None` when the cell has no leading digits.
    pub fn integer(&self, index: usize) -> Option<i64> {
        parse_leading_integer(self.text(index))
    }
}

fn parse_leading_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let value: i64 = digits[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}

pub trait DecodeRow: Sized {
    /// Column names in positional order, as they appear in the header row.
    const FIELDS: &'static [&'static str];

    fn decode(cells: &Cells<'_>) -> Self;
}

/// Decode every row after the header, preserving row order.
pub fn decode_table<T: DecodeRow>(table: &TabularResponse) -> Vec<T> {
    if !header_matches::<T>(table) {
        tracing::warn!(
            "Header row of '{}' does not match the expected layout [{}]; decoding by position",
            table.range,
            T::FIELDS.join(", ")
        );
    }

    table
        .values
        .iter()
        .skip(1)
        .map(|row| T::decode(&Cells::new(row)))
        .collect()
}

/// Case-insensitive comparison of the header row against `T::FIELDS`.
/// Extra trailing header columns are allowed; an absent header counts as a match.
pub fn header_matches<T: DecodeRow>(table: &TabularResponse) -> bool {
    let Some(header) = table.values.first() else {
        return true;
    };

    T::FIELDS.iter().enumerate().all(|(index, expected)| {
        header
            .get(index)
            .map(|actual| actual.trim().eq_ignore_ascii_case(expected))
            .unwrap_or(false)
    })
}

mod project_col {
    pub const ID: usize = 0;
    pub const TITLE: usize = 1;
    pub const DESCRIPTION: usize = 2;
    pub const FULL_DESCRIPTION: usize = 3;
    pub const STACK: usize = 4;
    pub const FROM: usize = 5;
    pub const TO: usize = 6;
    pub const GITHUB_URL: usize = 7;
    pub const DEMO_URL: usize = 8;
    pub const CUSTOMER: usize = 9;
    pub const TEAM_SIZE: usize = 10;
}

impl DecodeRow for Project {
    const FIELDS: &'static [&'static str] = &[
        "id",
        "title",
        "description",
        "fullDescription",
        "stack",
        "from",
        "to",
        "githubUrl",
        "demoUrl",
        "customer",
        "teamSize",
    ];

    fn decode(cells: &Cells<'_>) -> Self {
        use project_col::*;

        let description = cells.text(DESCRIPTION);
        let full_description = match cells.text_or(FULL_DESCRIPTION, description) {
            "" => None,
            text => Some(text.to_string()),
        };

        Project {
            id: cells.text(ID).to_string(),
            title: cells.text(TITLE).to_string(),
            description: description.to_string(),
            full_description,
            stack: cells.text(STACK).to_string(),
            from: cells.text(FROM).to_string(),
            to: cells.text_or(TO, PRESENT).to_string(),
            github_url: cells.optional(GITHUB_URL),
            demo_url: cells.optional(DEMO_URL),
            customer: cells.optional(CUSTOMER),
            team_size: cells
                .integer(TEAM_SIZE)
                .and_then(|n| u32::try_from(n).ok()),
        }
    }
}

impl DecodeRow for BlogPost {
    const FIELDS: &'static [&'static str] =
        &["id", "title", "description", "content", "createdAt", "image"];

    fn decode(cells: &Cells<'_>) -> Self {
        BlogPost {
            id: cells.integer(0).unwrap_or(0),
            title: cells.text(1).to_string(),
            description: cells.text(2).to_string(),
            content: cells.text(3).to_string(),
            created_at: cells.text(4).to_string(),
            image: cells.text(5).to_string(),
        }
    }
}

impl DecodeRow for SkillRow {
    const FIELDS: &'static [&'static str] = &["id", "name", "parent_id"];

    fn decode(cells: &Cells<'_>) -> Self {
        SkillRow {
            id: cells.text(0).to_string(),
            name: cells.text(1).to_string(),
            parent_id: cells.optional(2),
        }
    }
}
