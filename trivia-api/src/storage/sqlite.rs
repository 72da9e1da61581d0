use super::{migrations, CategoryOrder, StorageError, TriviaStorage};
use crate::models::NewQuestion;
use crate::DbConnection;
use async_trait::async_trait;
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};
use shared_types::{Category, Question};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::debug;

const QUESTION_COLUMNS: &str = "id, question, answer, category, difficulty";

pub struct SqliteStorage {
    connection: DbConnection,
}

impl SqliteStorage {
    pub fn new(connection: DbConnection) -> Self {
        Self { connection }
    }

    /// Open (or create) the database at `path` and run migrations.
    ///
    /// `:memory:` opens a private in-memory database.
    pub fn open(path: &Path) -> anyhow::Result<Self> {
        if path != Path::new(":memory:") {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
        }

        let mut conn = Connection::open(path)?;
        conn.execute("PRAGMA foreign_keys = ON", [])?;
        migrations::run_migrations(&mut conn)?;

        debug!(path = %path.display(), "Opened trivia database");
        Ok(Self::new(Arc::new(Mutex::new(conn))))
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, StorageError> {
        self.connection
            .lock()
            .map_err(|e| StorageError::Lock(e.to_string()))
    }
}

fn question_from_row(row: &Row<'_>) -> rusqlite::Result<Question> {
    Ok(Question {
        id: row.get(0)?,
        question: row.get(1)?,
        answer: row.get(2)?,
        category: row.get(3)?,
        difficulty: row.get(4)?,
    })
}

fn query_questions(
    conn: &Connection,
    sql: &str,
    values: Vec<Value>,
) -> Result<Vec<Question>, StorageError> {
    let questions = conn
        .prepare(sql)?
        .query_map(params_from_iter(values), question_from_row)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(questions)
}

/// Escape LIKE wildcards so the term matches literally under `ESCAPE '\'`.
fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

#[async_trait]
impl TriviaStorage for SqliteStorage {
    async fn list_categories(&self, order: CategoryOrder) -> Result<Vec<Category>, StorageError> {
        let conn = self.lock()?;

        let sql = match order {
            CategoryOrder::ById => "SELECT id, type FROM categories ORDER BY id",
            CategoryOrder::ByType => "SELECT id, type FROM categories ORDER BY type, id",
        };

        let categories = conn
            .prepare(sql)?
            .query_map([], |row| {
                Ok(Category {
                    id: row.get(0)?,
                    kind: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(categories)
    }

    async fn create_category(&self, kind: &str) -> Result<i64, StorageError> {
        let conn = self.lock()?;
        conn.execute("INSERT INTO categories (type) VALUES (?1)", params![kind])?;
        Ok(conn.last_insert_rowid())
    }

    async fn list_questions(&self) -> Result<Vec<Question>, StorageError> {
        let conn = self.lock()?;
        query_questions(
            &conn,
            &format!("SELECT {QUESTION_COLUMNS} FROM questions ORDER BY id"),
            Vec::new(),
        )
    }

    async fn get_question(&self, id: i64) -> Result<Option<Question>, StorageError> {
        let conn = self.lock()?;
        let question = conn
            .query_row(
                &format!("SELECT {QUESTION_COLUMNS} FROM questions WHERE id = ?1"),
                params![id],
                question_from_row,
            )
            .optional()?;
        Ok(question)
    }

    async fn create_question(&self, question: NewQuestion) -> Result<i64, StorageError> {
        let conn = self.lock()?;
        conn.execute(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES (?1, ?2, ?3, ?4)
            "#,
            params![
                question.question,
                question.answer,
                question.category,
                question.difficulty,
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    async fn delete_question(&self, id: i64) -> Result<bool, StorageError> {
        let conn = self.lock()?;
        let removed = conn.execute("DELETE FROM questions WHERE id = ?1", params![id])?;
        Ok(removed > 0)
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, StorageError> {
        let conn = self.lock()?;
        // SQLite's LIKE folds ASCII case only.
        query_questions(
            &conn,
            &format!(
                "SELECT {QUESTION_COLUMNS} FROM questions WHERE question LIKE ?1 ESCAPE '\\' ORDER BY id"
            ),
            vec![Value::Text(like_pattern(term))],
        )
    }

    async fn questions_in_category(&self, category: &str) -> Result<Vec<Question>, StorageError> {
        let conn = self.lock()?;
        query_questions(
            &conn,
            &format!("SELECT {QUESTION_COLUMNS} FROM questions WHERE category = ?1 ORDER BY id"),
            vec![Value::Text(category.to_string())],
        )
    }

    async fn quiz_candidates(
        &self,
        category: Option<&str>,
        exclude: &[i64],
    ) -> Result<Vec<Question>, StorageError> {
        let mut sql = format!("SELECT {QUESTION_COLUMNS} FROM questions WHERE 1 = 1");
        let mut values = Vec::with_capacity(exclude.len() + 1);

        if let Some(category) = category {
            sql.push_str(" AND category = ?");
            values.push(Value::Text(category.to_string()));
        }

        if !exclude.is_empty() {
            let placeholders = vec!["?"; exclude.len()].join(", ");
            sql.push_str(&format!(" AND id NOT IN ({placeholders})"));
            values.extend(exclude.iter().map(|id| Value::Integer(*id)));
        }

        sql.push_str(" ORDER BY id");

        let conn = self.lock()?;
        query_questions(&conn, &sql, values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_question(question: &str, category: &str) -> NewQuestion {
        NewQuestion {
            question: question.to_string(),
            answer: "answer".to_string(),
            category: category.to_string(),
            difficulty: 1,
        }
    }

    #[test]
    fn like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("title"), "%title%");
        assert_eq!(like_pattern("100%"), "%100\\%%");
        assert_eq!(like_pattern("a_b"), "%a\\_b%");
    }

    #[tokio::test]
    async fn migrations_create_empty_tables() {
        let storage = SqliteStorage::open(Path::new(":memory:")).unwrap();
        assert!(storage.list_questions().await.unwrap().is_empty());
        assert!(storage
            .list_categories(CategoryOrder::ById)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn categories_order_by_id_or_type() {
        let storage = SqliteStorage::open(Path::new(":memory:")).unwrap();
        storage.create_category("Science").await.unwrap();
        storage.create_category("Art").await.unwrap();

        let by_id = storage.list_categories(CategoryOrder::ById).await.unwrap();
        assert_eq!(by_id[0].kind, "Science");

        let by_type = storage.list_categories(CategoryOrder::ByType).await.unwrap();
        assert_eq!(by_type[0].kind, "Art");
        assert_eq!(by_type[0].id, 2);
    }

    #[tokio::test]
    async fn search_is_case_insensitive_and_literal() {
        let storage = SqliteStorage::open(Path::new(":memory:")).unwrap();
        storage
            .create_question(new_question("What is the TITLE of the book?", "1"))
            .await
            .unwrap();
        storage
            .create_question(new_question("Who scored 100% on the test?", "1"))
            .await
            .unwrap();
        storage
            .create_question(new_question("Who scored 1000 points?", "1"))
            .await
            .unwrap();

        assert_eq!(storage.search_questions("title").await.unwrap().len(), 1);
        let percent = storage.search_questions("100%").await.unwrap();
        assert_eq!(percent.len(), 1);
        assert!(percent[0].question.contains("100%"));
    }

    #[tokio::test]
    async fn quiz_candidates_filter_category_and_exclusions() {
        let storage = SqliteStorage::open(Path::new(":memory:")).unwrap();
        let a = storage.create_question(new_question("a", "1")).await.unwrap();
        let b = storage.create_question(new_question("b", "1")).await.unwrap();
        let c = storage.create_question(new_question("c", "2")).await.unwrap();

        let all = storage.quiz_candidates(None, &[]).await.unwrap();
        assert_eq!(all.len(), 3);

        let in_one = storage.quiz_candidates(Some("1"), &[a]).await.unwrap();
        assert_eq!(in_one.iter().map(|q| q.id).collect::<Vec<_>>(), vec![b]);

        let none_left = storage.quiz_candidates(None, &[a, b, c]).await.unwrap();
        assert!(none_left.is_empty());
    }

    #[tokio::test]
    async fn delete_reports_whether_a_row_was_removed() {
        let storage = SqliteStorage::open(Path::new(":memory:")).unwrap();
        let id = storage.create_question(new_question("a", "1")).await.unwrap();

        assert!(storage.delete_question(id).await.unwrap());
        assert!(!storage.delete_question(id).await.unwrap());
        assert!(storage.get_question(id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn deleted_ids_are_not_reused() {
        let storage = SqliteStorage::open(Path::new(":memory:")).unwrap();
        let first = storage.create_question(new_question("a", "1")).await.unwrap();
        storage.delete_question(first).await.unwrap();
        let second = storage.create_question(new_question("b", "1")).await.unwrap();
        assert!(second > first);
    }
}
