//! Plain-text and CSV renderings of portfolio content for the command line.

use crate::domain::decode::DecodeRow;
use crate::domain::model::{BlogPost, Project, SkillCategory};
use crate::domain::{blog, projects};
use crate::i18n::Translations;
use crate::utils::error::{Result, SyncError};
use chrono::NaiveDate;
use std::fmt::Write as _;

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<String> {
    let bytes = writer.into_inner().map_err(|e| SyncError::ProcessingError {
        message: format!("Could not flush CSV output: {}", e),
    })?;
    String::from_utf8(bytes).map_err(|e| SyncError::ProcessingError {
        message: format!("CSV output is not valid UTF-8: {}", e),
    })
}

/// Columns follow the sheet layout, so the output can be pasted back in.
pub fn projects_csv(items: &[Project]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(Project::FIELDS)?;
    for project in items {
        let team_size = project.team_size.map(|n| n.to_string()).unwrap_or_default();
        writer.write_record([
            project.id.as_str(),
            project.title.as_str(),
            project.description.as_str(),
            project.full_description.as_deref().unwrap_or_default(),
            project.stack.as_str(),
            project.from.as_str(),
            project.to.as_str(),
            project.github_url.as_deref().unwrap_or_default(),
            project.demo_url.as_deref().unwrap_or_default(),
            project.customer.as_deref().unwrap_or_default(),
            team_size.as_str(),
        ])?;
    }
    finish(writer)
}

/// The header is written even for an empty list.
pub fn blog_posts_csv(items: &[BlogPost]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(BlogPost::FIELDS)?;
    for post in items {
        writer.serialize(post)?;
    }
    finish(writer)
}

/// One row per skill, so the file can be loaded back as a flat table.
pub fn skills_csv(categories: &[SkillCategory]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["category", "skill"])?;
    for category in categories {
        for skill in &category.skills {
            writer.write_record([category.category.as_str(), skill.as_str()])?;
        }
    }
    finish(writer)
}

pub fn render_project(project: &Project, today: NaiveDate, t: &Translations) -> String {
    let p = &t.projects;
    let mut out = String::new();

    let _ = writeln!(out, "{}", project.title);
    let _ = write!(out, "{}", projects::format_date_range(&project.from, &project.to, t));
    match projects::format_duration(&project.from, &project.to, today, t) {
        Some(duration) => {
            let _ = writeln!(out, " ({})", duration);
        }
        None => out.push('\n'),
    }

    let _ = writeln!(out, "\n{}", p.overview);
    let _ = writeln!(
        out,
        "{}",
        project.full_description.as_deref().unwrap_or(&project.description)
    );

    let _ = writeln!(out, "\n{}", p.project_info);
    if let Some(customer) = project.customer.as_deref().filter(|c| !c.is_empty()) {
        let _ = writeln!(out, "  {}: {}", p.customer, customer);
    }
    if let Some(size) = project.team_size {
        let _ = writeln!(out, "  {}: {} {}", p.team_size, size, p.members);
    }
    let stack = projects::technologies(project);
    if !stack.is_empty() {
        let _ = writeln!(out, "  {}: {}", p.technologies, stack.join(", "));
    }
    if projects::is_valid_link(project.github_url.as_deref()) {
        let _ = writeln!(out, "  {}: {}", p.code, project.github_url.as_deref().unwrap_or_default());
    }
    if projects::is_valid_link(project.demo_url.as_deref()) {
        let _ = writeln!(out, "  {}: {}", p.demo, project.demo_url.as_deref().unwrap_or_default());
    }
    out
}

/// A post followed by links to its list neighbours.
pub fn render_post(posts: &[BlogPost], post: &BlogPost, t: &Translations) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", post.title);
    let date = blog::created_date(post)
        .map(|d| t.date.full_date(d))
        .unwrap_or_else(|| post.created_at.clone());
    let _ = writeln!(
        out,
        "{} · {} {}",
        date,
        blog::estimate_read_minutes(&post.content),
        t.blog.min_read
    );
    let _ = writeln!(out, "\n{}", post.content);

    let (previous, next) = blog::neighbors(posts, post.id);
    if let Some(previous) = previous {
        let _ = writeln!(out, "\n← {}: {}", t.blog.previous, previous.title);
    }
    if let Some(next) = next {
        let _ = writeln!(out, "→ {}: {}", t.blog.next, next.title);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fallback;
    use crate::i18n::{translations, Language};

    #[test]
    fn test_skills_csv_is_one_row_per_skill() {
        let csv = skills_csv(&[SkillCategory::new("Frontend", &["React", "Next.js"])]).unwrap();
        assert_eq!(csv, "category,skill\nFrontend,React\nFrontend,Next.js\n");
    }

    #[test]
    fn test_projects_csv_header_uses_sheet_names() {
        let csv = projects_csv(&fallback::projects()).unwrap();
        assert!(csv.starts_with("id,title,description,fullDescription,stack,from,to,"));

        let mut reader = csv::Reader::from_reader(csv.as_bytes());
        assert_eq!(reader.records().count(), fallback::projects().len());
    }

    #[test]
    fn test_blog_posts_csv_quotes_multiline_content() {
        let posts = fallback::blog_posts();
        let csv = blog_posts_csv(&posts[..1]).unwrap();

        let mut reader = csv::Reader::from_reader(csv.as_bytes());
        let rows: Vec<csv::StringRecord> = reader.records().collect::<std::result::Result<_, _>>().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][1], posts[0].title);
    }

    #[test]
    fn test_empty_blog_posts_csv_keeps_header() {
        let csv = blog_posts_csv(&[]).unwrap();
        assert_eq!(csv, "id,title,description,content,createdAt,image\n");
    }

    #[test]
    fn test_render_project_skips_placeholder_links() {
        let project = Project {
            id: "p".to_string(),
            title: "Shop".to_string(),
            description: "Short".to_string(),
            full_description: None,
            stack: "Rust, Tokio".to_string(),
            from: "2024-01".to_string(),
            to: "2025-03".to_string(),
            github_url: Some("#".to_string()),
            demo_url: Some("https://shop.example".to_string()),
            customer: None,
            team_size: Some(3),
        };
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let text = render_project(&project, today, translations(Language::En));

        assert!(text.contains("Jan 2024 – Mar 2025 (1 year 2 months)"));
        assert!(text.contains("Short"));
        assert!(text.contains("Rust, Tokio"));
        assert!(text.contains("https://shop.example"));
        assert!(!text.contains('#'));
    }

    #[test]
    fn test_render_post_links_neighbours() {
        let posts = fallback::blog_posts();
        let text = render_post(&posts, &posts[1], translations(Language::En));

        assert!(text.starts_with(&posts[1].title));
        assert!(text.contains(&posts[0].title));
        assert!(text.contains(&posts[2].title));
    }
}
