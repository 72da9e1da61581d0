use super::JsonBody;
use crate::error::{ApiError, ApiResult, ResultExt};
use crate::storage::SharedStorage;
use actix_web::{web, HttpResponse};
use rand::seq::IndexedRandom;
use shared_types::{QuizRequest, QuizResponse};
use tracing::{info, warn};

/// `POST /quizzes`: a random question not in `previous_questions`, or
/// `question: null` once the pool is exhausted.
pub async fn next_question(
    body: web::Bytes,
    storage: web::Data<SharedStorage>,
) -> ApiResult<HttpResponse> {
    let body = JsonBody::parse(&body).or_reject(ApiError::NotFound, "Failed to parse quiz body")?;

    if let Some(key) = body.missing_key(&QuizRequest::REQUIRED_KEYS) {
        warn!(key, "Quiz body is missing a required key");
        return Err(ApiError::Unprocessable);
    }

    let request: QuizRequest = body
        .decode()
        .or_reject(ApiError::NotFound, "Failed to decode quiz body")?;

    let category = if request.quiz_category.is_all() {
        None
    } else {
        Some(request.quiz_category.id.to_text())
    };

    info!(
        category = category.as_deref().unwrap_or("all"),
        previous_questions = request.previous_questions.len(),
        "Drawing quiz question"
    );

    let candidates = storage
        .quiz_candidates(category.as_deref(), &request.previous_questions)
        .await
        .or_api_error(ApiError::NotFound, "Failed to retrieve quiz candidates")?;

    let question = candidates.choose(&mut rand::rng()).cloned();
    if question.is_none() {
        info!("No quiz questions left");
    }

    Ok(HttpResponse::Ok().json(QuizResponse {
        success: true,
        question,
    }))
}
