use crate::config::toml_config::PortfolioConfig;
use crate::core::cache::QueryCache;
use crate::core::sync::{ContentDomain, ContentLoader};
use crate::domain::model::{BlogPost, Project, SkillCategory};
use crate::domain::ports::{Clock, SystemClock, TableSource};
use crate::domain::{blog, fallback, projects};
use std::sync::Arc;
use std::time::Duration;

/// Everything the site reads, loaded independently per domain and cached for the
/// staleness window.
pub struct Portfolio<S: TableSource> {
    loader: ContentLoader<S>,
    projects: QueryCache<Project>,
    skills: QueryCache<SkillCategory>,
    posts: QueryCache<BlogPost>,
}

#[derive(Debug, Clone)]
pub struct PortfolioSnapshot {
    pub projects: Arc<Vec<Project>>,
    pub skills: Arc<Vec<SkillCategory>>,
    pub blog_posts: Arc<Vec<BlogPost>>,
}

impl<S: TableSource> Portfolio<S> {
    pub fn new(source: S, config: &PortfolioConfig) -> Self {
        Self::with_clock(source, config, Arc::new(SystemClock))
    }

    pub fn with_clock(source: S, config: &PortfolioConfig, clock: Arc<dyn Clock>) -> Self {
        let stale_after = config.stale_after();
        Self::from_parts(ContentLoader::from_config(source, config), stale_after, clock)
    }

    pub fn from_parts(loader: ContentLoader<S>, stale_after: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            loader,
            projects: QueryCache::with_clock(stale_after, Arc::clone(&clock)),
            skills: QueryCache::with_clock(stale_after, Arc::clone(&clock)),
            posts: QueryCache::with_clock(stale_after, clock),
        }
    }

    pub async fn projects(&self) -> Arc<Vec<Project>> {
        self.projects
            .get_or_load(ContentDomain::Projects.label(), || self.loader.load_projects())
            .await
    }

    pub async fn skills(&self) -> Arc<Vec<SkillCategory>> {
        self.skills
            .get_or_load(ContentDomain::Skills.label(), || self.loader.load_skills())
            .await
    }

    pub async fn blog_posts(&self) -> Arc<Vec<BlogPost>> {
        self.posts
            .get_or_load(ContentDomain::BlogPosts.label(), || self.loader.load_blog_posts())
            .await
    }

    pub async fn project(&self, id: &str) -> Option<Project> {
        projects::find_by_id(&self.projects().await, id).cloned()
    }

    pub async fn blog_post(&self, id: i64) -> Option<BlogPost> {
        blog::find_by_id(&self.blog_posts().await, id).cloned()
    }

    /// Projects newest first, as the timeline shows them.
    pub async fn timeline(&self) -> Vec<Project> {
        let mut ordered = self.projects().await.as_ref().clone();
        projects::sort_newest_first(&mut ordered);
        ordered
    }

    /// Loads all three domains concurrently; none waits on another.
    pub async fn refresh_all(&self) -> PortfolioSnapshot {
        let (projects, skills, blog_posts) =
            tokio::join!(self.projects(), self.skills(), self.blog_posts());
        PortfolioSnapshot {
            projects,
            skills,
            blog_posts,
        }
    }

    /// What to render right now, without waiting: cached data, or fallback
    /// content for a domain whose first load has not resolved.
    pub fn snapshot(&self) -> PortfolioSnapshot {
        PortfolioSnapshot {
            projects: self
                .projects
                .snapshot_or(ContentDomain::Projects.label(), fallback::projects),
            skills: self
                .skills
                .snapshot_or(ContentDomain::Skills.label(), fallback::skills),
            blog_posts: self
                .posts
                .snapshot_or(ContentDomain::BlogPosts.label(), fallback::blog_posts),
        }
    }

    pub fn is_loading(&self, domain: ContentDomain) -> bool {
        match domain {
            ContentDomain::Projects => self.projects.is_fetching(domain.label()),
            ContentDomain::Skills => self.skills.is_fetching(domain.label()),
            ContentDomain::BlogPosts => self.posts.is_fetching(domain.label()),
        }
    }

    pub fn invalidate(&self, domain: ContentDomain) {
        match domain {
            ContentDomain::Projects => self.projects.invalidate(domain.label()),
            ContentDomain::Skills => self.skills.invalidate(domain.label()),
            ContentDomain::BlogPosts => self.posts.invalidate(domain.label()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::TabularResponse;
    use crate::domain::ports::ManualClock;
    use crate::utils::error::Result;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    struct CountingSource {
        calls: Mutex<HashMap<String, usize>>,
        total: AtomicUsize,
    }

    impl CountingSource {
        fn calls(&self, range: &str) -> usize {
            self.calls.lock().unwrap().get(range).copied().unwrap_or(0)
        }
    }

    #[async_trait]
    impl TableSource for CountingSource {
        async fn fetch_table(&self, range: &str) -> Result<TabularResponse> {
            self.total.fetch_add(1, Ordering::SeqCst);
            *self.calls.lock().unwrap().entry(range.to_string()).or_default() += 1;

            let rows: Vec<Vec<&str>> = match range {
                "projects" => vec![
                    vec!["id", "title", "description", "fullDescription", "stack", "from"],
                    vec!["older", "Older", "", "", "", "2022-05"],
                    vec!["newer", "Newer", "", "", "", "2024-03"],
                ],
                "commons" => vec![
                    vec!["id", "name", "parent_id"],
                    vec!["c1", "Languages", ""],
                    vec!["s1", "Rust", "c1"],
                ],
                _ => vec![
                    vec!["id", "title"],
                    vec!["10", "Post ten"],
                ],
            };
            Ok(TabularResponse::new(
                rows.into_iter()
                    .map(|r| r.into_iter().map(String::from).collect())
                    .collect(),
            ))
        }
    }

    fn portfolio() -> (Portfolio<Arc<CountingSource>>, Arc<CountingSource>, Arc<ManualClock>) {
        let source = Arc::new(CountingSource::default());
        let clock = Arc::new(ManualClock::new());
        let portfolio = Portfolio::with_clock(
            Arc::clone(&source),
            &PortfolioConfig::default(),
            clock.clone(),
        );
        (portfolio, source, clock)
    }

    #[tokio::test]
    async fn test_snapshot_is_fallback_before_first_load() {
        let (portfolio, source, _clock) = portfolio();
        let snapshot = portfolio.snapshot();

        assert_eq!(*snapshot.projects, fallback::projects());
        assert_eq!(*snapshot.skills, fallback::skills());
        assert_eq!(*snapshot.blog_posts, fallback::blog_posts());
        assert_eq!(source.total.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_refresh_all_loads_each_domain_once() {
        let (portfolio, source, _clock) = portfolio();

        let loaded = portfolio.refresh_all().await;
        assert_eq!(loaded.projects.len(), 2);
        assert_eq!(loaded.skills[0].skills, vec!["Rust".to_string()]);
        assert_eq!(loaded.blog_posts[0].id, 10);

        portfolio.refresh_all().await;
        assert_eq!(source.calls("projects"), 1);
        assert_eq!(source.calls("commons"), 1);
        assert_eq!(source.calls("posts"), 1);

        assert_eq!(*portfolio.snapshot().projects, *loaded.projects);
    }

    #[tokio::test]
    async fn test_window_expiry_refetches() {
        let (portfolio, source, clock) = portfolio();

        portfolio.projects().await;
        clock.advance(Duration::from_secs(5 * 60 + 1));
        portfolio.projects().await;

        assert_eq!(source.calls("projects"), 2);
        assert_eq!(source.calls("commons"), 0);
    }

    #[tokio::test]
    async fn test_lookups_and_timeline() {
        let (portfolio, source, _clock) = portfolio();

        assert_eq!(portfolio.project("newer").await.map(|p| p.title), Some("Newer".to_string()));
        assert!(portfolio.project("missing").await.is_none());
        assert_eq!(portfolio.blog_post(10).await.map(|p| p.title), Some("Post ten".to_string()));

        let ids: Vec<_> = portfolio.timeline().await.into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["newer".to_string(), "older".to_string()]);
        assert_eq!(source.calls("projects"), 1);
    }

    #[tokio::test]
    async fn test_invalidate_one_domain() {
        let (portfolio, source, _clock) = portfolio();

        portfolio.refresh_all().await;
        portfolio.invalidate(ContentDomain::Skills);
        portfolio.refresh_all().await;

        assert_eq!(source.calls("commons"), 2);
        assert_eq!(source.calls("projects"), 1);
        assert!(!portfolio.is_loading(ContentDomain::Skills));
    }
}
