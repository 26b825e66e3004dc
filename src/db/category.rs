use super::models::Category;
use super::{Db, DbError};

impl Db {
    pub async fn all_categories(&self) -> Result<Vec<Category>, DbError> {
        let categories = sqlx::query_as::<_, Category>(
            "SELECT id, type FROM categories ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(categories)
    }

    /// Insert a category with a caller-chosen id. The API surface is
    /// read-only for categories; this exists for seeding and tests.
    pub async fn create_category(&self, id: i64, kind: &str) -> Result<(), DbError> {
        sqlx::query("INSERT INTO categories (id, type) VALUES (?, ?)")
            .bind(id)
            .bind(kind)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
