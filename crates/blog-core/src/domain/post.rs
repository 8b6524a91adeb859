use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Post entity - a blog entry whose id doubles as its URL slug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post stamped with the current time.
    pub fn new(id: String, title: String, content: String) -> Self {
        Self {
            id,
            title,
            content,
            created_at: Utc::now(),
        }
    }
}

/// The user-editable part of a post. The id and creation time never change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostChanges {
    pub title: String,
    pub content: String,
}

impl PostChanges {
    pub fn apply_to(self, post: &mut Post) {
        post.title = self.title;
        post.content = self.content;
    }
}
