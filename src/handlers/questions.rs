use axum::extract::State;
use axum::routing::{delete, get, post};
use axum::Router;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::db::NewQuestion;
use crate::extractors::{Json, Path, Query};
use crate::pagination;
use crate::rejections::AppError;
use crate::AppState;

use super::categories::categories_map;
use super::PageQuery;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/questions", get(all_questions).post(create_question))
        .route("/questions/{id}", delete(delete_question))
        .route("/questions/search", post(search_questions))
}

async fn all_questions(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Value>, AppError> {
    let selection = state.db.all_questions().await?;
    let current = pagination::paginate(&selection, query.page.unwrap_or(1));

    if current.is_empty() {
        return Err(AppError::NotFound("no questions on this page"));
    }

    let categories = state.db.all_categories().await?;

    Ok(Json(json!({
        "success": true,
        "questions": current,
        "total_questions": selection.len(),
        "categories": categories_map(&categories),
        "current_category": null,
    })))
}

#[derive(Debug, Deserialize)]
struct CreateQuestionBody {
    question: Option<String>,
    answer: Option<String>,
    difficulty: Option<i64>,
    category: Option<i64>,
}

async fn create_question(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
    Json(body): Json<CreateQuestionBody>,
) -> Result<Json<Value>, AppError> {
    let (Some(question), Some(answer), Some(difficulty), Some(category)) =
        (body.question, body.answer, body.difficulty, body.category)
    else {
        return Err(AppError::Unprocessable("missing required question field"));
    };

    let created = state
        .db
        .create_question(NewQuestion {
            question,
            answer,
            difficulty,
            category,
        })
        .await?;

    let selection = state.db.all_questions().await?;
    let current = pagination::paginate(&selection, query.page.unwrap_or(1));

    Ok(Json(json!({
        "success": true,
        "created": created,
        "questions": current,
        "total_questions": selection.len(),
    })))
}

async fn delete_question(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    state.db.delete_question(id).await?;

    let selection = state.db.all_questions().await?;

    Ok(Json(json!({
        "success": true,
        "deleted": id,
        "total_questions": selection.len(),
    })))
}

#[derive(Debug, Deserialize)]
struct SearchBody {
    #[serde(rename = "searchTerm")]
    search_term: Option<String>,
}

async fn search_questions(
    State(state): State<AppState>,
    Json(body): Json<SearchBody>,
) -> Result<Json<Value>, AppError> {
    // An absent or empty term is a missing resource, not a zero-match search.
    let term = body
        .search_term
        .filter(|term| !term.is_empty())
        .ok_or(AppError::NotFound("missing search term"))?;

    let selection = state.db.search_questions(&term).await?;

    Ok(Json(json!({
        "success": true,
        "questions": selection,
        "total_questions": selection.len(),
        "current_category": null,
    })))
}
