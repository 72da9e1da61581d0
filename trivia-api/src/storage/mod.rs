use crate::models::NewQuestion;
use async_trait::async_trait;
use shared_types::{Category, Question};
use std::sync::Arc;

mod memory;
pub mod migrations;
mod sqlite;

pub use memory::InMemoryStorage;
pub use sqlite::SqliteStorage;

/// Storage handle shared across workers as application data.
pub type SharedStorage = Arc<dyn TriviaStorage>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryOrder {
    ById,
    ByType,
}

#[async_trait]
pub trait TriviaStorage: Send + Sync {
    async fn list_categories(&self, order: CategoryOrder) -> Result<Vec<Category>, StorageError>;
    async fn create_category(&self, kind: &str) -> Result<i64, StorageError>;

    /// All questions ordered by id.
    async fn list_questions(&self) -> Result<Vec<Question>, StorageError>;
    async fn get_question(&self, id: i64) -> Result<Option<Question>, StorageError>;
    async fn create_question(&self, question: NewQuestion) -> Result<i64, StorageError>;
    /// Returns whether a question was removed.
    async fn delete_question(&self, id: i64) -> Result<bool, StorageError>;

    /// Case-insensitive substring match on the question text. The term is
    /// matched literally, `%` and `_` included.
    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, StorageError>;
    async fn questions_in_category(&self, category: &str) -> Result<Vec<Question>, StorageError>;
    /// Questions in `category` (or any category when `None`) whose id is not in `exclude`.
    async fn quiz_candidates(
        &self,
        category: Option<&str>,
        exclude: &[i64],
    ) -> Result<Vec<Question>, StorageError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage operation failed: {0}")]
    OperationFailed(String),

    #[error("Lock error: {0}")]
    Lock(String),
}

impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        StorageError::OperationFailed(err.to_string())
    }
}
