pub mod categories;
pub mod questions;
pub mod quizzes;

use serde::Deserialize;

/// `?page=N` query, shared by the paginated listing endpoints.
#[derive(Debug, Deserialize)]
pub(crate) struct PageQuery {
    pub page: Option<u32>,
}
