//! In-memory post store - used when no database is configured.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use blog_core::domain::{Post, PostChanges};
use blog_core::error::RepoError;
use blog_core::ports::{BaseRepository, PostRepository};

/// In-memory post repository using a HashMap behind an async RwLock.
///
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    store: RwLock<HashMap<String, Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Post, String> for InMemoryPostRepository {
    async fn find_by_id(&self, id: String) -> Result<Option<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.get(&id).cloned())
    }

    async fn insert(&self, post: Post) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;

        if store.contains_key(&post.id) {
            return Err(RepoError::Constraint(format!(
                "post with id {} already exists",
                post.id
            )));
        }

        store.insert(post.id.clone(), post.clone());
        Ok(post)
    }

    async fn delete(&self, id: String) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        store.remove(&id).map(|_| ()).ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_page(&self, offset: u64, limit: u64) -> Result<Vec<Post>, RepoError> {
        let store = self.store.read().await;

        let mut posts: Vec<&Post> = store.values().collect();
        posts.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });

        Ok(posts
            .into_iter()
            .skip(usize::try_from(offset).unwrap_or(usize::MAX))
            .take(usize::try_from(limit).unwrap_or(usize::MAX))
            .cloned()
            .collect())
    }

    async fn count(&self) -> Result<u64, RepoError> {
        let store = self.store.read().await;
        Ok(store.len() as u64)
    }

    async fn update_content(&self, id: String, changes: PostChanges) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        let post = store.get_mut(&id).ok_or(RepoError::NotFound)?;
        changes.apply_to(post);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::*;

    fn post_at(id: &str, minutes_ago: i64) -> Post {
        Post {
            id: id.to_string(),
            title: format!("Title {id}"),
            content: "content".to_string(),
            created_at: Utc::now() - Duration::minutes(minutes_ago),
        }
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let repo = InMemoryPostRepository::new();
        repo.insert(post_at("first", 0)).await.unwrap();

        let found = repo.find_by_id("first".to_string()).await.unwrap();
        assert_eq!(found.map(|p| p.title), Some("Title first".to_string()));
        assert!(repo.find_by_id("missing".to_string()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_id_is_rejected() {
        let repo = InMemoryPostRepository::new();
        repo.insert(post_at("same", 0)).await.unwrap();

        let err = repo.insert(post_at("same", 1)).await.unwrap_err();
        assert!(matches!(err, RepoError::Constraint(_)));
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_page_is_newest_first() {
        let repo = InMemoryPostRepository::new();
        for (id, age) in [("old", 30), ("new", 1), ("mid", 10)] {
            repo.insert(post_at(id, age)).await.unwrap();
        }

        let ids: Vec<String> = repo
            .find_page(0, 2)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, ["new", "mid"]);

        let rest = repo.find_page(2, 2).await.unwrap();
        assert_eq!(rest.len(), 1);
        assert!(repo.find_page(10, 2).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_content_keeps_id_and_timestamp() {
        let repo = InMemoryPostRepository::new();
        let original = repo.insert(post_at("post", 5)).await.unwrap();

        repo.update_content(
            "post".to_string(),
            PostChanges {
                title: "New title".to_string(),
                content: "New content".to_string(),
            },
        )
        .await
        .unwrap();

        let updated = repo.find_by_id("post".to_string()).await.unwrap().unwrap();
        assert_eq!(updated.title, "New title");
        assert_eq!(updated.content, "New content");
        assert_eq!(updated.created_at, original.created_at);
    }

    #[tokio::test]
    async fn test_missing_post_reports_not_found() {
        let repo = InMemoryPostRepository::new();
        let changes = PostChanges {
            title: "t".to_string(),
            content: "c".to_string(),
        };

        assert!(matches!(
            repo.update_content("nope".to_string(), changes).await,
            Err(RepoError::NotFound)
        ));
        assert!(matches!(
            repo.delete("nope".to_string()).await,
            Err(RepoError::NotFound)
        ));
    }
}
