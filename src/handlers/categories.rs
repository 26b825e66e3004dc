use std::collections::BTreeMap;

use axum::extract::State;
use axum::routing::get;
use axum::Router;
use serde_json::{json, Value};

use crate::db::Category;
use crate::extractors::{Json, Path, Query};
use crate::pagination;
use crate::rejections::AppError;
use crate::AppState;

use super::PageQuery;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(all_categories))
        .route("/categories/{category_id}/questions", get(questions_in_category))
}

/// The wire shape for categories is a single object keyed by id.
pub(crate) fn categories_map(categories: &[Category]) -> BTreeMap<i64, String> {
    categories
        .iter()
        .map(|category| (category.id, category.kind.clone()))
        .collect()
}

async fn all_categories(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let categories = state.db.all_categories().await?;

    if categories.is_empty() {
        return Err(AppError::NotFound("no categories exist"));
    }

    Ok(Json(json!({
        "success": true,
        "categories": categories_map(&categories),
        "total_categories": categories.len(),
    })))
}

async fn questions_in_category(
    State(state): State<AppState>,
    Path(category_id): Path<i64>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Value>, AppError> {
    let selection = state.db.questions_in_category(category_id).await?;
    let current = pagination::paginate(&selection, query.page.unwrap_or(1));

    if current.is_empty() {
        return Err(AppError::NotFound("no questions on this page"));
    }

    Ok(Json(json!({
        "success": true,
        "questions": current,
        "total_questions": selection.len(),
        "current_category": category_id,
    })))
}
