use crate::config::toml_config::PortfolioConfig;
use crate::domain::decode::decode_table;
use crate::domain::model::{BlogPost, Project, SkillCategory, SkillRow};
use crate::domain::ports::TableSource;
use crate::domain::{fallback, skills};
use crate::utils::error::{Result, SyncError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentDomain {
    Projects,
    Skills,
    BlogPosts,
}

impl ContentDomain {
    pub const ALL: [ContentDomain; 3] = [
        ContentDomain::Projects,
        ContentDomain::Skills,
        ContentDomain::BlogPosts,
    ];

    /// Cache key.
    pub fn label(self) -> &'static str {
        match self {
            ContentDomain::Projects => "projects",
            ContentDomain::Skills => "skills",
            ContentDomain::BlogPosts => "blogPosts",
        }
    }

    pub fn config_key(self) -> &'static str {
        match self {
            ContentDomain::Projects => "projects",
            ContentDomain::Skills => "skills",
            ContentDomain::BlogPosts => "posts",
        }
    }

    pub fn default_range(self) -> &'static str {
        match self {
            ContentDomain::Projects => "projects",
            ContentDomain::Skills => "commons",
            ContentDomain::BlogPosts => "posts",
        }
    }

    pub fn default_policy(self) -> DegradePolicy {
        match self {
            ContentDomain::Projects | ContentDomain::Skills => DegradePolicy::Fallback,
            ContentDomain::BlogPosts => DegradePolicy::Empty,
        }
    }
}

impl fmt::Display for ContentDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ContentDomain {
    type Err = SyncError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "projects" => Ok(ContentDomain::Projects),
            "skills" | "commons" => Ok(ContentDomain::Skills),
            "posts" | "blog" | "blogPosts" => Ok(ContentDomain::BlogPosts),
            other => Err(SyncError::UnknownDomainError {
                label: other.to_string(),
            }),
        }
    }
}

/// What a domain shows when its remote read fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DegradePolicy {
    Fallback,
    Empty,
}

#[derive(Debug, Clone)]
struct DomainSettings {
    range: String,
    policy: DegradePolicy,
}

/// Reads each content domain from a [`TableSource`] and turns it into records.
///
/// `try_load_*` propagate every failure. `load_*` never fail: errors are logged
/// and replaced according to the domain's [`DegradePolicy`].
pub struct ContentLoader<S: TableSource> {
    source: S,
    projects: DomainSettings,
    skills: DomainSettings,
    posts: DomainSettings,
}

impl<S: TableSource> ContentLoader<S> {
    pub fn new(source: S) -> Self {
        Self::from_config(source, &PortfolioConfig::default())
    }

    pub fn from_config(source: S, config: &PortfolioConfig) -> Self {
        let settings = |domain| DomainSettings {
            range: config.range(domain).to_string(),
            policy: config.degrade_policy(domain),
        };

        Self {
            source,
            projects: settings(ContentDomain::Projects),
            skills: settings(ContentDomain::Skills),
            posts: settings(ContentDomain::BlogPosts),
        }
    }

    pub fn with_policy(mut self, domain: ContentDomain, policy: DegradePolicy) -> Self {
        self.settings_mut(domain).policy = policy;
        self
    }

    pub fn policy(&self, domain: ContentDomain) -> DegradePolicy {
        self.settings(domain).policy
    }

    fn settings(&self, domain: ContentDomain) -> &DomainSettings {
        match domain {
            ContentDomain::Projects => &self.projects,
            ContentDomain::Skills => &self.skills,
            ContentDomain::BlogPosts => &self.posts,
        }
    }

    fn settings_mut(&mut self, domain: ContentDomain) -> &mut DomainSettings {
        match domain {
            ContentDomain::Projects => &mut self.projects,
            ContentDomain::Skills => &mut self.skills,
            ContentDomain::BlogPosts => &mut self.posts,
        }
    }

    pub async fn try_load_projects(&self) -> Result<Vec<Project>> {
        let table = self.source.fetch_table(&self.projects.range).await?;
        Ok(decode_table(&table))
    }

    pub async fn try_load_skills(&self) -> Result<Vec<SkillCategory>> {
        let table = self.source.fetch_table(&self.skills.range).await?;
        let rows: Vec<SkillRow> = decode_table(&table);
        Ok(skills::reconstruct(&rows))
    }

    pub async fn try_load_blog_posts(&self) -> Result<Vec<BlogPost>> {
        let table = self.source.fetch_table(&self.posts.range).await?;
        Ok(decode_table(&table))
    }

    pub async fn load_projects(&self) -> Vec<Project> {
        let result = self.try_load_projects().await;
        self.settle(ContentDomain::Projects, result, fallback::projects)
    }

    pub async fn load_skills(&self) -> Vec<SkillCategory> {
        let result = self.try_load_skills().await;
        self.settle(ContentDomain::Skills, result, fallback::skills)
    }

    pub async fn load_blog_posts(&self) -> Vec<BlogPost> {
        let result = self.try_load_blog_posts().await;
        self.settle(ContentDomain::BlogPosts, result, fallback::blog_posts)
    }

    fn settle<T>(
        &self,
        domain: ContentDomain,
        result: Result<Vec<T>>,
        fallback: fn() -> Vec<T>,
    ) -> Vec<T> {
        match result {
            Ok(records) => {
                tracing::info!("📥 Loaded {} {} from remote", records.len(), domain);
                records
            }
            Err(e) => {
                let policy = self.policy(domain);
                tracing::error!(
                    "❌ Error fetching {}: {} (Category: {:?}, retryable: {})",
                    domain,
                    e,
                    e.category(),
                    e.is_retryable()
                );
                match policy {
                    DegradePolicy::Fallback => {
                        let records = fallback();
                        tracing::warn!("📝 Using {} fallback {}", records.len(), domain);
                        records
                    }
                    DegradePolicy::Empty => {
                        tracing::warn!("📝 Showing no {} after failed read", domain);
                        Vec::new()
                    }
                }
            }
        }
    }
}
