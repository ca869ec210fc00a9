use crate::domain::model::{SkillCategory, SkillRow};
use std::collections::HashMap;

/// Rebuild the category -> skills hierarchy from flat parent/child rows.
///
/// Categories come out in the order their rows first appear. A category id that
/// repeats keeps its first position and takes the later name. Skills whose parent is
/// not a known category are dropped, and so are categories left without skills.
pub fn reconstruct(rows: &[SkillRow]) -> Vec<SkillCategory> {
    let mut category_order: Vec<&str> = Vec::new();
    let mut category_names: HashMap<&str, &str> = HashMap::new();
    let mut skills_by_parent: HashMap<&str, Vec<String>> = HashMap::new();

    for row in rows {
        match row.parent_id.as_deref() {
            None => {
                if category_names.insert(&row.id, &row.name).is_none() {
                    category_order.push(&row.id);
                }
            }
            Some(parent) => skills_by_parent
                .entry(parent)
                .or_default()
                .push(row.name.clone()),
        }
    }

    category_order
        .into_iter()
        .filter_map(|id| {
            let skills = skills_by_parent.remove(id)?;
            Some(SkillCategory {
                category: category_names[id].to_string(),
                skills,
            })
        })
        .filter(|category| !category.skills.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str, name: &str, parent: &str) -> SkillRow {
        SkillRow {
            id: id.to_string(),
            name: name.to_string(),
            parent_id: (!parent.is_empty()).then(|| parent.to_string()),
        }
    }

    #[test]
    fn test_empty_category_is_dropped() {
        let rows = vec![
            row("c1", "Backend", ""),
            row("s1", "Java", "c1"),
            row("s2", "SQL", "c1"),
            row("c2", "Empty", ""),
        ];

        assert_eq!(
            reconstruct(&rows),
            vec![SkillCategory::new("Backend", &["Java", "SQL"])]
        );
    }

    #[test]
    fn test_categories_keep_first_seen_order() {
        let rows = vec![
            row("s1", "Docker", "c2"),
            row("c2", "DevOps", ""),
            row("c1", "Backend", ""),
            row("s2", "Java", "c1"),
            row("s3", "Nginx", "c2"),
        ];

        let categories = reconstruct(&rows);
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0], SkillCategory::new("DevOps", &["Docker", "Nginx"]));
        assert_eq!(categories[1], SkillCategory::new("Backend", &["Java"]));
    }

    #[test]
    fn test_orphan_skills_never_surface() {
        let rows = vec![
            row("c1", "Database", ""),
            row("s1", "PostgreSQL", "c1"),
            row("s2", "Kafka", "missing"),
        ];

        let categories = reconstruct(&rows);
        assert_eq!(categories, vec![SkillCategory::new("Database", &["PostgreSQL"])]);
    }

    #[test]
    fn test_repeated_category_id_takes_latest_name() {
        let rows = vec![
            row("c1", "Back end", ""),
            row("c2", "Tools", ""),
            row("s1", "Git", "c2"),
            row("s2", "Java", "c1"),
            row("c1", "Backend", ""),
        ];

        let categories = reconstruct(&rows);
        assert_eq!(categories[0].category, "Backend");
        assert_eq!(categories[1].category, "Tools");
    }

    #[test]
    fn test_no_rows() {
        assert!(reconstruct(&[]).is_empty());
    }
}
