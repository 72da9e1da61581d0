use super::JsonBody;
use crate::error::{ApiError, ApiResult, ResultExt};
use crate::models::NewQuestion;
use crate::pagination::{PageQuery, Pagination};
use crate::storage::{CategoryOrder, SharedStorage};
use actix_web::{web, HttpResponse};
use shared_types::{
    CreateQuestionRequest, DeleteQuestionResponse, QuestionListResponse, QuestionPageResponse,
    SearchQuestionsRequest,
};
use tracing::{info, warn};

/// `GET /questions?page=N`
///
/// Fails with 404 when the requested page is empty, which includes an empty
/// question table. Categories here are ordered by type.
pub async fn list_questions(
    query: web::Query<PageQuery>,
    pagination: web::Data<Pagination>,
    storage: web::Data<SharedStorage>,
) -> ApiResult<HttpResponse> {
    let page = query.page();
    info!(page, "Retrieving questions");

    let all_questions = storage
        .list_questions()
        .await
        .or_api_error(ApiError::NotFound, "Failed to retrieve questions")?;

    let questions = pagination.paginate(page, &all_questions);
    if questions.is_empty() {
        warn!(page, total = all_questions.len(), "Requested page is empty");
        return Err(ApiError::NotFound);
    }

    let categories = storage
        .list_categories(CategoryOrder::ByType)
        .await
        .or_api_error(ApiError::NotFound, "Failed to retrieve categories")?;

    Ok(HttpResponse::Ok().json(QuestionPageResponse {
        success: true,
        questions,
        total_questions: all_questions.len(),
        categories: categories.into(),
        current_category: None,
    }))
}

/// `DELETE /questions/{id}`. Every failure, a missing question or an id
/// too large for storage included, is reported as 422.
pub async fn delete_question(
    question_id: web::Path<String>,
    storage: web::Data<SharedStorage>,
) -> ApiResult<HttpResponse> {
    let id: i64 = question_id
        .parse()
        .or_reject(ApiError::Unprocessable, "Question id out of range")?;
    info!(question_id = id, "Deleting question");

    let existing = storage
        .get_question(id)
        .await
        .or_api_error(ApiError::Unprocessable, "Failed to look up question")?;

    if existing.is_none() {
        warn!(question_id = id, "Question not found");
        return Err(ApiError::Unprocessable);
    }

    let removed = storage
        .delete_question(id)
        .await
        .or_api_error(ApiError::Unprocessable, "Failed to delete question")?;

    if !removed {
        warn!(question_id = id, "Question was removed before it could be deleted");
        return Err(ApiError::Unprocessable);
    }

    info!(question_id = id, "Question deleted");
    Ok(HttpResponse::Ok().json(DeleteQuestionResponse { success: true, id }))
}

/// `POST /questions`
///
/// All four keys must be present; their values are coerced rather than
/// validated. Responds with the full, unpaginated question list.
pub async fn create_question(
    body: web::Bytes,
    storage: web::Data<SharedStorage>,
) -> ApiResult<HttpResponse> {
    let body = JsonBody::parse(&body)
        .or_reject(ApiError::Unprocessable, "Failed to parse question body")?;

    if let Some(key) = body.missing_key(&CreateQuestionRequest::REQUIRED_KEYS) {
        warn!(key, "Question body is missing a required key");
        return Err(ApiError::Unprocessable);
    }

    let request: CreateQuestionRequest = body
        .decode()
        .or_reject(ApiError::Unprocessable, "Failed to decode question body")?;
    let new_question = NewQuestion::try_from(request)
        .or_reject(ApiError::Unprocessable, "Invalid question")?;

    let id = storage
        .create_question(new_question)
        .await
        .or_api_error(ApiError::Unprocessable, "Failed to insert question")?;
    info!(question_id = id, "Question created");

    let questions = storage
        .list_questions()
        .await
        .or_api_error(ApiError::Unprocessable, "Failed to retrieve questions")?;

    let total_questions = questions.len();
    Ok(HttpResponse::Ok().json(QuestionListResponse {
        success: true,
        questions,
        total_questions,
        current_category: None,
    }))
}

/// `POST /questions/search`
///
/// A missing or falsy `searchTerm` is a 400; any other failure is a 404.
pub async fn search_questions(
    body: web::Bytes,
    storage: web::Data<SharedStorage>,
) -> ApiResult<HttpResponse> {
    let request: SearchQuestionsRequest = JsonBody::parse(&body)
        .and_then(JsonBody::decode)
        .or_reject(ApiError::NotFound, "Failed to parse search body")?;

    let term = match request.search_term {
        Some(term) if term.is_truthy() => term.to_text(),
        _ => {
            warn!("Search requested without a search term");
            return Err(ApiError::BadRequest);
        }
    };
    info!(search_term = %term, "Searching questions");

    let questions = storage
        .search_questions(&term)
        .await
        .or_api_error(ApiError::NotFound, "Failed to search questions")?;

    let total_questions = questions.len();
    Ok(HttpResponse::Ok().json(QuestionListResponse {
        success: true,
        questions,
        total_questions,
        current_category: None,
    }))
}
