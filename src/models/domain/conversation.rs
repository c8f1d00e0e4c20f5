use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A pre-created tutoring session slot. Rows are inserted unassigned in bulk
/// and handed to users one at a time; the unassigned → assigned transition
/// happens exactly once and never reverts.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Conversation {
    pub id: String,
    pub course_id: String,
    /// Opaque handle returned to clients; internal ids stay internal.
    pub remote_id: String,
    pub user_id: Option<String>,
    pub assigned: bool,
    pub created_at: DateTime<Utc>,
}

impl Conversation {
    pub fn new_blank(course_id: &str) -> Self {
        Conversation {
            id: Uuid::new_v4().to_string(),
            course_id: course_id.to_string(),
            remote_id: format!("conv-{}", Uuid::new_v4()),
            user_id: None,
            assigned: false,
            created_at: Utc::now(),
        }
    }
}
