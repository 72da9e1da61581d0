#![allow(dead_code)]

use actix_web::{test, web, App};
use async_trait::async_trait;
use shared_types::{Category, Question};
use std::path::Path;
use std::sync::Arc;
use trivia_api::app::{build_cors, configure};
use trivia_api::config::ApiConfig;
use trivia_api::middleware::AccessControlHeaders;
use trivia_api::models::NewQuestion;
use trivia_api::pagination::Pagination;
use trivia_api::storage::{
    CategoryOrder, SharedStorage, SqliteStorage, StorageError, TriviaStorage,
};

pub struct TestApp<S> {
    pub storage: SharedStorage,
    pub app: S,
}

pub fn setup_test_storage() -> anyhow::Result<SharedStorage> {
    Ok(Arc::new(SqliteStorage::open(Path::new(":memory:"))?))
}

pub async fn setup_test_app() -> anyhow::Result<
    TestApp<
        impl actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse<
                actix_web::body::EitherBody<actix_web::body::BoxBody>,
            >,
            Error = actix_web::Error,
        >,
    >,
> {
    let storage = setup_test_storage()?;
    Ok(setup_test_app_with(storage, Pagination::default()).await)
}

pub async fn setup_test_app_with(
    storage: SharedStorage,
    pagination: Pagination,
) -> TestApp<
    impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse<
                actix_web::body::EitherBody<actix_web::body::BoxBody>,
            >,
        Error = actix_web::Error,
    >,
> {
    let cors = ApiConfig::default().cors;

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(storage.clone()))
            .app_data(web::Data::new(pagination))
            .wrap(build_cors(&cors))
            .wrap(AccessControlHeaders)
            .configure(configure),
    )
    .await;

    TestApp { storage, app }
}

/// Science, Art, Geography, History, Entertainment, Sports as ids 1..=6.
pub async fn seed_categories(storage: &SharedStorage) -> anyhow::Result<()> {
    for kind in trivia_api::seed::DEFAULT_CATEGORIES {
        storage.create_category(kind).await?;
    }
    Ok(())
}

pub async fn insert_question(
    storage: &SharedStorage,
    question: &str,
    category: &str,
) -> anyhow::Result<i64> {
    Ok(storage
        .create_question(NewQuestion {
            question: question.to_string(),
            answer: format!("answer to {}", question),
            category: category.to_string(),
            difficulty: 1,
        })
        .await?)
}

/// Inserts `count` questions named "Question 1".."Question N" in `category`.
pub async fn insert_questions(
    storage: &SharedStorage,
    count: usize,
    category: &str,
) -> anyhow::Result<Vec<i64>> {
    let mut ids = Vec::with_capacity(count);
    for n in 1..=count {
        ids.push(insert_question(storage, &format!("Question {}", n), category).await?);
    }
    Ok(ids)
}

/// Storage whose every operation fails, for exercising error mapping.
pub struct FailingStorage;

fn failure() -> StorageError {
    StorageError::OperationFailed("database is unavailable".to_string())
}

#[async_trait]
impl TriviaStorage for FailingStorage {
    async fn list_categories(&self, _order: CategoryOrder) -> Result<Vec<Category>, StorageError> {
        Err(failure())
    }

    async fn create_category(&self, _kind: &str) -> Result<i64, StorageError> {
        Err(failure())
    }

    async fn list_questions(&self) -> Result<Vec<Question>, StorageError> {
        Err(failure())
    }

    async fn get_question(&self, _id: i64) -> Result<Option<Question>, StorageError> {
        Err(failure())
    }

    async fn create_question(&self, _question: NewQuestion) -> Result<i64, StorageError> {
        Err(failure())
    }

    async fn delete_question(&self, _id: i64) -> Result<bool, StorageError> {
        Err(failure())
    }

    async fn search_questions(&self, _term: &str) -> Result<Vec<Question>, StorageError> {
        Err(failure())
    }

    async fn questions_in_category(&self, _category: &str) -> Result<Vec<Question>, StorageError> {
        Err(failure())
    }

    async fn quiz_candidates(
        &self,
        _category: Option<&str>,
        _exclude: &[i64],
    ) -> Result<Vec<Question>, StorageError> {
        Err(failure())
    }
}
