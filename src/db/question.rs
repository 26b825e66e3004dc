use super::models::{NewQuestion, Question};
use super::{Db, DbError};

impl Db {
    /// All questions, ascending by id.
    pub async fn all_questions(&self) -> Result<Vec<Question>, DbError> {
        let questions = sqlx::query_as::<_, Question>(
            "SELECT id, question, answer, category, difficulty FROM questions ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    pub async fn questions_in_category(&self, category: i64) -> Result<Vec<Question>, DbError> {
        let questions = sqlx::query_as::<_, Question>(
            "SELECT id, question, answer, category, difficulty FROM questions WHERE category = ? ORDER BY id",
        )
        .bind(category)
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    /// Case-insensitive substring match against the question text. SQLite's
    /// `LIKE` only folds ASCII, so the fold happens here instead.
    pub async fn search_questions(&self, term: &str) -> Result<Vec<Question>, DbError> {
        let needle = term.to_lowercase();
        let questions = self
            .all_questions()
            .await?
            .into_iter()
            .filter(|q| q.question.to_lowercase().contains(&needle))
            .collect();

        Ok(questions)
    }

    pub async fn get_question(&self, id: i64) -> Result<Option<Question>, DbError> {
        let question = sqlx::query_as::<_, Question>(
            "SELECT id, question, answer, category, difficulty FROM questions WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(question)
    }

    /// Insert a question and return the id the store assigned to it.
    pub async fn create_question(&self, new: NewQuestion) -> Result<i64, DbError> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO questions (question, answer, difficulty, category)
            VALUES (?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(&new.question)
        .bind(&new.answer)
        .bind(new.difficulty)
        .bind(new.category)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!("new question created with id: {id}");
        Ok(id)
    }

    /// Delete a question by id. Errors with `DbError::NotFound` if no row
    /// matched.
    pub async fn delete_question(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM questions WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound);
        }

        Ok(())
    }
}
