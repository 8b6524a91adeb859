use async_trait::async_trait;

use crate::domain::{Post, PostChanges};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Insert a new entity. Fails with `RepoError::Constraint` if the ID is taken.
    async fn insert(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, String> {
    /// Newest posts first, ties broken by id.
    async fn find_page(&self, offset: u64, limit: u64) -> Result<Vec<Post>, RepoError>;

    async fn count(&self) -> Result<u64, RepoError>;

    /// Replace the title and content of an existing post.
    async fn update_content(&self, id: String, changes: PostChanges) -> Result<(), RepoError>;
}
