//! Typed translation tables.
//!
//! Every language fills the same [`Translations`] structure, so a string missing
//! from one table fails to compile instead of rendering blank.

mod en;
mod vi;

use crate::utils::error::SyncError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Vi,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Vi];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Vi => "vi",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(code.trim()))
    }

    pub fn translations(self) -> &'static Translations {
        translations(self)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = SyncError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s).ok_or_else(|| SyncError::UnsupportedLanguageError {
            code: s.to_string(),
        })
    }
}

pub fn translations(language: Language) -> &'static Translations {
    match language {
        Language::En => &en::EN,
        Language::Vi => &vi::VI,
    }
}

#[derive(Debug)]
pub struct Translations {
    pub nav: NavStrings,
    pub hero: HeroStrings,
    pub about: AboutStrings,
    pub skills: SkillsStrings,
    pub projects: ProjectsStrings,
    pub blog: BlogStrings,
    pub contact: ContactStrings,
    pub footer: FooterStrings,
    pub not_found: NotFoundStrings,
    pub language: LanguageStrings,
    pub date: DateStrings,
}

#[derive(Debug)]
pub struct NavStrings {
    pub about: &'static str,
    pub skills: &'static str,
    pub projects: &'static str,
    pub blog: &'static str,
    pub contact: &'static str,
}

#[derive(Debug)]
pub struct HeroStrings {
    pub greeting: &'static str,
    pub name: &'static str,
    pub view_projects: &'static str,
    pub contact_me: &'static str,
}

#[derive(Debug)]
pub struct AboutStrings {
    pub title: &'static str,
    pub heading: &'static str,
    pub paragraph1: &'static str,
    pub paragraph2: &'static str,
    pub download_cv: &'static str,
}

#[derive(Debug)]
pub struct SkillsStrings {
    pub title: &'static str,
    pub heading: &'static str,
    pub backend: &'static str,
    pub database: &'static str,
    pub devops: &'static str,
}

#[derive(Debug)]
pub struct ProjectsStrings {
    pub title: &'static str,
    pub heading: &'static str,
    pub code: &'static str,
    pub demo: &'static str,
    pub preview: &'static str,
    pub month: &'static str,
    pub months: &'static str,
    pub year: &'static str,
    pub years: &'static str,
    pub present: &'static str,
    pub less_than_month: &'static str,
    pub overview: &'static str,
    pub project_info: &'static str,
    pub customer: &'static str,
    pub team_size: &'static str,
    pub members: &'static str,
    pub technologies: &'static str,
    pub back_to_home: &'static str,
    pub project_not_found: &'static str,
    pub project_not_found_desc: &'static str,
}

#[derive(Debug)]
pub struct BlogStrings {
    pub title: &'static str,
    pub heading: &'static str,
    pub latest_articles: &'static str,
    pub subtitle: &'static str,
    pub read_more: &'static str,
    pub min_read: &'static str,
    pub previous: &'static str,
    pub next: &'static str,
}

#[derive(Debug)]
pub struct ContactStrings {
    pub title: &'static str,
    pub heading: &'static str,
    pub subtitle: &'static str,
    pub name: &'static str,
    pub name_placeholder: &'static str,
    pub email: &'static str,
    pub email_placeholder: &'static str,
    pub message: &'static str,
    pub message_placeholder: &'static str,
    pub send: &'static str,
    pub success_message: &'static str,
}

#[derive(Debug)]
pub struct FooterStrings {
    pub built_with: &'static str,
    pub rights: &'static str,
}

#[derive(Debug)]
pub struct NotFoundStrings {
    pub title: &'static str,
    pub heading: &'static str,
    pub description: &'static str,
    pub back_home: &'static str,
}

#[derive(Debug)]
pub struct LanguageStrings {
    pub english: &'static str,
    pub vietnamese: &'static str,
    pub code: &'static str,
    pub code_vi: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub enum FullDateOrder {
    /// "January 15, 2025"
    MonthDayYear,
    /// "15 tháng 1, 2025"
    DayMonthYear,
}

#[derive(Debug)]
pub struct DateStrings {
    pub locale: &'static str,
    pub short_months: [&'static str; 12],
    pub long_months: [&'static str; 12],
    pub full_date_order: FullDateOrder,
}

impl DateStrings {
    /// Short month and year, e.g. "Oct 2024". `month` is 1-based.
    pub fn month_year(&self, year: i32, month: u32) -> Option<String> {
        let name = self.short_months.get(month.checked_sub(1)? as usize)?;
        Some(format!("{} {}", name, year))
    }

    pub fn full_date(&self, date: NaiveDate) -> String {
        let month = self.long_months[date.month0() as usize];
        match self.full_date_order {
            FullDateOrder::MonthDayYear => format!("{} {}, {}", month, date.day(), date.year()),
            FullDateOrder::DayMonthYear => format!("{} {}, {}", date.day(), month, date.year()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::from_code("en"), Some(Language::En));
        assert_eq!(Language::from_code(" VI "), Some(Language::Vi));
        assert_eq!(Language::from_code("fr"), None);
        assert_eq!(Language::default(), Language::En);
        assert!("de".parse::<Language>().is_err());
        assert_eq!("vi".parse::<Language>().unwrap().to_string(), "vi");
    }

    #[test]
    fn test_tables_are_distinct() {
        assert_eq!(translations(Language::En).nav.skills, "Skills");
        assert_eq!(translations(Language::Vi).nav.skills, "Kỹ năng");
        assert_eq!(translations(Language::Vi).date.locale, "vi-VN");
    }

    #[test]
    fn test_month_year() {
        let en = &translations(Language::En).date;
        assert_eq!(en.month_year(2024, 10).as_deref(), Some("Oct 2024"));
        assert_eq!(en.month_year(2024, 0), None);
        assert_eq!(en.month_year(2024, 13), None);

        let vi = &translations(Language::Vi).date;
        assert_eq!(vi.month_year(2024, 1).as_deref(), Some("thg 1 2024"));
    }

    #[test]
    fn test_full_date() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        assert_eq!(translations(Language::En).date.full_date(date), "January 15, 2025");
        assert_eq!(translations(Language::Vi).date.full_date(date), "15 tháng 1, 2025");
    }
}
