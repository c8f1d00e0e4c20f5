use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One ingested piece of course content: a syllabus, extracted lecture text,
/// lab handout, and so on. Content is already plain text by the time it gets
/// here; extraction happens upstream.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct CourseMaterial {
    pub id: String,
    pub course_id: String,
    pub title: String,
    pub content: Option<String>,
    /// Link to the canonical origin file. Often discovered by a later sync
    /// pass, hence settable after creation. The only mutable field.
    pub file_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl CourseMaterial {
    pub fn new(
        course_id: &str,
        title: &str,
        content: Option<String>,
        file_url: Option<String>,
    ) -> Self {
        CourseMaterial {
            id: Uuid::new_v4().to_string(),
            course_id: course_id.to_string(),
            title: title.to_string(),
            content,
            file_url,
            created_at: Utc::now(),
        }
    }

    pub fn has_content(&self) -> bool {
        self.content
            .as_deref()
            .is_some_and(|content| !content.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_content_rejects_missing_and_blank_bodies() {
        let missing = CourseMaterial::new("c1", "Syllabus", None, None);
        assert!(!missing.has_content());

        let blank = CourseMaterial::new("c1", "Syllabus", Some("   ".to_string()), None);
        assert!(!blank.has_content());

        let filled = CourseMaterial::new("c1", "Syllabus", Some("week one".to_string()), None);
        assert!(filled.has_content());
    }

    #[test]
    fn material_round_trip_serialization() {
        let material = CourseMaterial::new(
            "c1",
            "Lab 1",
            Some("socket programming".to_string()),
            Some("https://example.com/lab1.pdf".to_string()),
        );

        let json = serde_json::to_string(&material).expect("material should serialize");
        let parsed: CourseMaterial =
            serde_json::from_str(&json).expect("material should deserialize");
        assert_eq!(material, parsed);
    }
}
