use serde::{Deserialize, Serialize};

/// Body of a spreadsheet values read: a 2D array of string cells.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabularResponse {
    #[serde(default)]
    pub range: String,
    #[serde(default)]
    pub major_dimension: String,
    /// Required: a body without it is not a table.
    pub values: Vec<Vec<String>>,
}

impl TabularResponse {
    pub fn new(values: Vec<Vec<String>>) -> Self {
        Self {
            range: String::new(),
            major_dimension: "ROWS".to_string(),
            values,
        }
    }
}

/// Sentinel stored in `Project::to` for work that has not ended.
pub const PRESENT: &str = "Present";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_description: Option<String>,
    /// Comma-joined technology names.
    pub stack: String,
    /// `YYYY-MM`.
    pub from: String,
    /// `YYYY-MM` or [`PRESENT`].
    pub to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_size: Option<u32>,
}

impl Project {
    pub fn is_ongoing(&self) -> bool {
        self.to == PRESENT
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: i64,
    pub title: String,
    pub description: String,
    /// Markdown body.
    pub content: String,
    /// `YYYY-MM-DD`.
    pub created_at: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    pub skills: Vec<String>,
}

impl SkillCategory {
    pub fn new(category: &str, skills: &[&str]) -> Self {
        Self {
            category: category.to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// One flat row of the skills table; categories have no parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRow {
    pub id: String,
    pub name: String,
    pub parent_id: Option<String>,
}

impl SkillRow {
    pub fn is_category(&self) -> bool {
        self.parent_id.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabular_response_from_sheets_json() {
        let body = serde_json::json!({
            "range": "projects!A1:K3",
            "majorDimension": "ROWS",
            "values": [["id", "title"], ["p1", "One"]]
        });

        let table: TabularResponse = serde_json::from_value(body).unwrap();
        assert_eq!(table.range, "projects!A1:K3");
        assert_eq!(table.major_dimension, "ROWS");
        assert_eq!(table.values.len(), 2);
    }

    #[test]
    fn test_body_without_values_is_rejected() {
        let body = serde_json::json!({"range": "posts!A1:Z1000", "majorDimension": "ROWS"});
        assert!(serde_json::from_value::<TabularResponse>(body).is_err());
    }

    #[test]
    fn test_project_serializes_camel_case_without_empty_options() {
        let project = Project {
            id: "p1".to_string(),
            title: "Demo".to_string(),
            description: "Desc".to_string(),
            full_description: None,
            stack: "Rust".to_string(),
            from: "2024-01".to_string(),
            to: PRESENT.to_string(),
            github_url: None,
            demo_url: Some("https://demo.example.com".to_string()),
            customer: None,
            team_size: Some(3),
        };

        let value = serde_json::to_value(&project).unwrap();
        assert_eq!(value["demoUrl"], "https://demo.example.com");
        assert_eq!(value["teamSize"], 3);
        assert!(value.get("githubUrl").is_none());
        assert!(project.is_ongoing());
    }
}
