use super::{CategoryOrder, StorageError, TriviaStorage};
use crate::models::NewQuestion;
use shared_types::{Category, Question};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Default)]
struct Tables {
    categories: Vec<Category>,
    questions: BTreeMap<i64, Question>,
    last_category_id: i64,
    last_question_id: i64,
}

/// Process-local storage with the same semantics as [`super::SqliteStorage`].
#[derive(Clone, Default)]
pub struct InMemoryStorage {
    tables: Arc<Mutex<Tables>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Tables>, StorageError> {
        self.tables
            .lock()
            .map_err(|e| StorageError::Lock(e.to_string()))
    }

    fn filter_questions<F>(&self, keep: F) -> Result<Vec<Question>, StorageError>
    where
        F: Fn(&Question) -> bool,
    {
        let tables = self.lock()?;
        Ok(tables
            .questions
            .values()
            .filter(|q| keep(q))
            .cloned()
            .collect())
    }
}

#[async_trait::async_trait]
impl TriviaStorage for InMemoryStorage {
    async fn list_categories(&self, order: CategoryOrder) -> Result<Vec<Category>, StorageError> {
        let mut categories = self.lock()?.categories.clone();
        match order {
            CategoryOrder::ById => categories.sort_by_key(|c| c.id),
            CategoryOrder::ByType => {
                categories.sort_by(|a, b| a.kind.cmp(&b.kind).then(a.id.cmp(&b.id)))
            }
        }
        Ok(categories)
    }

    async fn create_category(&self, kind: &str) -> Result<i64, StorageError> {
        let mut tables = self.lock()?;
        tables.last_category_id += 1;
        let id = tables.last_category_id;
        tables.categories.push(Category {
            id,
            kind: kind.to_string(),
        });
        Ok(id)
    }

    async fn list_questions(&self) -> Result<Vec<Question>, StorageError> {
        self.filter_questions(|_| true)
    }

    async fn get_question(&self, id: i64) -> Result<Option<Question>, StorageError> {
        Ok(self.lock()?.questions.get(&id).cloned())
    }

    async fn create_question(&self, question: NewQuestion) -> Result<i64, StorageError> {
        let mut tables = self.lock()?;
        tables.last_question_id += 1;
        let id = tables.last_question_id;
        tables.questions.insert(
            id,
            Question {
                id,
                question: question.question,
                answer: question.answer,
                category: question.category,
                difficulty: question.difficulty,
            },
        );
        Ok(id)
    }

    async fn delete_question(&self, id: i64) -> Result<bool, StorageError> {
        Ok(self.lock()?.questions.remove(&id).is_some())
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, StorageError> {
        // ASCII folding keeps results identical to the SQLite backend.
        let needle = term.to_ascii_lowercase();
        self.filter_questions(|q| q.question.to_ascii_lowercase().contains(&needle))
    }

    async fn questions_in_category(&self, category: &str) -> Result<Vec<Question>, StorageError> {
        self.filter_questions(|q| q.category == category)
    }

    async fn quiz_candidates(
        &self,
        category: Option<&str>,
        exclude: &[i64],
    ) -> Result<Vec<Question>, StorageError> {
        self.filter_questions(|q| {
            category.map_or(true, |c| q.category == c) && !exclude.contains(&q.id)
        })
    }
}
