use crate::domain::model::{Project, PRESENT};
use crate::i18n::Translations;
use chrono::{Datelike, NaiveDate};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    /// Parses `YYYY-MM` (a single-digit month is accepted).
    pub fn parse(raw: &str) -> Option<Self> {
        let (year, month) = raw.trim().split_once('-')?;
        let year: i32 = year.parse().ok()?;
        let month: u32 = month.parse().ok()?;
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn months_until(self, later: YearMonth) -> i32 {
        (later.year - self.year) * 12 + (later.month as i32 - self.month as i32)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Month(YearMonth),
    Present,
}

impl Period {
    pub fn parse(raw: &str) -> Option<Self> {
        if raw == PRESENT {
            Some(Period::Present)
        } else {
            YearMonth::parse(raw).map(Period::Month)
        }
    }

    fn resolve(self, today: NaiveDate) -> YearMonth {
        match self {
            Period::Month(ym) => ym,
            Period::Present => YearMonth::from_date(today),
        }
    }
}

/// Newest start period first. Projects whose start does not parse keep their
/// relative order at the end.
pub fn sort_newest_first(projects: &mut [Project]) {
    projects.sort_by(|a, b| {
        match (YearMonth::parse(&a.from), YearMonth::parse(&b.from)) {
            (Some(a), Some(b)) => b.cmp(&a),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    });
}

pub fn find_by_id<'a>(projects: &'a [Project], id: &str) -> Option<&'a Project> {
    projects.iter().find(|project| project.id == id)
}

pub fn technologies(project: &Project) -> Vec<&str> {
    project
        .stack
        .split(',')
        .map(str::trim)
        .filter(|tech| !tech.is_empty())
        .collect()
}

/// Links the sheet leaves blank or as a `#` placeholder are not shown.
pub fn is_valid_link(url: Option<&str>) -> bool {
    matches!(url.map(str::trim), Some(u) if !u.is_empty() && u != "#")
}

pub fn duration_months(from: &str, to: &str, today: NaiveDate) -> Option<i32> {
    let start = YearMonth::parse(from)?;
    let end = Period::parse(to)?.resolve(today);
    Some(start.months_until(end))
}

pub fn format_duration(from: &str, to: &str, today: NaiveDate, t: &Translations) -> Option<String> {
    let months = duration_months(from, to, today)?;
    let p = &t.projects;

    let unit = |n: i32, one: &str, many: &str| {
        format!("{} {}", n, if n == 1 { one } else { many })
    };

    let text = if months < 1 {
        p.less_than_month.to_string()
    } else if months < 12 {
        unit(months, p.month, p.months)
    } else {
        let years = unit(months / 12, p.year, p.years);
        match months % 12 {
            0 => years,
            rest => format!("{} {}", years, unit(rest, p.month, p.months)),
        }
    };
    Some(text)
}

pub fn format_date_range(from: &str, to: &str, t: &Translations) -> String {
    let month = |raw: &str| {
        YearMonth::parse(raw)
            .and_then(|ym| t.date.month_year(ym.year, ym.month))
            .unwrap_or_else(|| raw.to_string())
    };

    let end = if to == PRESENT {
        t.projects.present.to_string()
    } else {
        month(to)
    };
    format!("{} – {}", month(from), end)
}
