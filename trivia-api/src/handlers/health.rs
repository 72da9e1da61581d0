use crate::storage::{CategoryOrder, SharedStorage, StorageError};
use actix_web::{web, HttpResponse};
use chrono::Utc;
use shared_types::HealthResponse;
use tracing::{debug, error};

/// `GET /health`: reads both tables and reports their sizes. Answers 503
/// when the database cannot be read.
pub async fn health_check(storage: web::Data<SharedStorage>) -> HttpResponse {
    let timestamp = Utc::now().to_rfc3339();

    match table_sizes(storage.get_ref()).await {
        Ok((categories, questions)) => {
            debug!(categories, questions, "Health check passed");
            HttpResponse::Ok().json(HealthResponse {
                status: "ok".to_string(),
                database: "reachable".to_string(),
                total_categories: Some(categories),
                total_questions: Some(questions),
                timestamp,
            })
        }
        Err(e) => {
            error!(error = %e, "Health check could not read the database");
            HttpResponse::ServiceUnavailable().json(HealthResponse {
                status: "unavailable".to_string(),
                database: "unreachable".to_string(),
                total_categories: None,
                total_questions: None,
                timestamp,
            })
        }
    }
}

async fn table_sizes(storage: &SharedStorage) -> Result<(usize, usize), StorageError> {
    let categories = storage.list_categories(CategoryOrder::ById).await?;
    let questions = storage.list_questions().await?;
    Ok((categories.len(), questions.len()))
}
