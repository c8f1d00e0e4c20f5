use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One turn in a conversation, append-only, ordered by `sent_at`. The first
/// tutor message of a conversation is the seeded baseline context and is kept
/// out of ordinary history retrieval.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Message {
    pub id: String,
    pub conversation_id: String,
    pub from_tutor: bool,
    pub body: String,
    pub sent_at: DateTime<Utc>,
}

impl Message {
    pub fn tutor(conversation_id: &str, body: &str) -> Self {
        Self::new(conversation_id, true, body)
    }

    pub fn student(conversation_id: &str, body: &str) -> Self {
        Self::new(conversation_id, false, body)
    }

    fn new(conversation_id: &str, from_tutor: bool, body: &str) -> Self {
        Message {
            id: Uuid::new_v4().to_string(),
            conversation_id: conversation_id.to_string(),
            from_tutor,
            body: body.to_string(),
            sent_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_authorship() {
        let tutor = Message::tutor("conv-1", "welcome");
        let student = Message::student("conv-1", "hello");

        assert!(tutor.from_tutor);
        assert!(!student.from_tutor);
        assert_eq!(tutor.conversation_id, "conv-1");
        assert_eq!(student.body, "hello");
    }
}
