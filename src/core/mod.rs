pub mod cache;
pub mod sync;

pub use crate::domain::model::{BlogPost, Project, SkillCategory, TabularResponse};
pub use crate::domain::ports::{Clock, ConfigProvider, PreferenceStore, TableSource};
pub use crate::utils::error::Result;
