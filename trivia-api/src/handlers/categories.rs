use crate::error::{ApiError, ApiResult, ResultExt};
use crate::storage::{CategoryOrder, SharedStorage};
use actix_web::{web, HttpResponse};
use shared_types::{CategoriesResponse, QuestionListResponse};
use tracing::{info, warn};

/// `GET /categories`: every category keyed by id, in id order.
pub async fn list_categories(storage: web::Data<SharedStorage>) -> ApiResult<HttpResponse> {
    info!("Retrieving categories");

    let categories = storage
        .list_categories(CategoryOrder::ById)
        .await
        .or_api_error(ApiError::NotFound, "Failed to retrieve categories")?;

    if categories.is_empty() {
        warn!("No categories found");
        return Err(ApiError::NotFound);
    }

    Ok(HttpResponse::Ok().json(CategoriesResponse {
        success: true,
        categories: categories.into(),
    }))
}

/// `GET /categories/{category_id}/questions`
///
/// Matches the stored category text against the id rendered as text. An
/// unknown category yields an empty list, not a 404.
pub async fn questions_by_category(
    category_id: web::Path<String>,
    storage: web::Data<SharedStorage>,
) -> ApiResult<HttpResponse> {
    let category_id: i64 = category_id
        .parse()
        .or_reject(ApiError::NotFound, "Category id out of range")?;
    info!(category_id, "Retrieving questions for category");

    let questions = storage
        .questions_in_category(&category_id.to_string())
        .await
        .or_api_error(ApiError::NotFound, "Failed to retrieve questions for category")?;

    let total_questions = questions.len();
    Ok(HttpResponse::Ok().json(QuestionListResponse {
        success: true,
        questions,
        total_questions,
        current_category: Some(category_id),
    }))
}
