pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod i18n;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliArgs;

pub use adapters::{FilePreferenceStore, MemoryPreferenceStore, SheetsClient};
pub use app::{AppContext, Portfolio, PortfolioSnapshot, Theme};
pub use config::PortfolioConfig;
pub use crate::core::sync::{ContentDomain, ContentLoader, DegradePolicy};
pub use domain::model::{BlogPost, Project, SkillCategory};
pub use i18n::Language;
pub use utils::error::{Result, SyncError};
