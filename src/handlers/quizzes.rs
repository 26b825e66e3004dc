use axum::extract::State;
use axum::routing::post;
use axum::Router;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::extractors::Json;
use crate::quiz;
use crate::rejections::AppError;
use crate::AppState;

/// Sentinel category id meaning "draw from every category".
const ALL_CATEGORIES: i64 = 0;

pub fn routes() -> Router<AppState> {
    Router::new().route("/quizzes", post(next_quiz_question))
}

#[derive(Debug, Deserialize)]
struct QuizBody {
    quiz_category: Option<QuizCategory>,
    previous_questions: Option<Vec<i64>>,
}

/// Clients send `{id, type}`; only the id matters here.
#[derive(Debug, Deserialize)]
struct QuizCategory {
    id: i64,
}

async fn next_quiz_question(
    State(state): State<AppState>,
    Json(body): Json<QuizBody>,
) -> Result<Json<Value>, AppError> {
    let category = body
        .quiz_category
        .ok_or(AppError::Input("missing quiz_category"))?;
    let previous = body
        .previous_questions
        .ok_or(AppError::Input("missing previous_questions"))?;

    let pool = if category.id == ALL_CATEGORIES {
        state.db.all_questions().await?
    } else {
        state.db.questions_in_category(category.id).await?
    };

    if pool.is_empty() {
        return Err(AppError::NotFound("no questions in category"));
    }

    match quiz::draw(pool, &previous) {
        Some(question) => Ok(Json(json!({
            "success": true,
            "question": question,
        }))),
        // Every question has been served: the quiz is complete.
        None => Ok(Json(json!({ "success": true }))),
    }
}
