use trivia::db::{Db, NewQuestion};

pub async fn create_test_db() -> Db {
    use std::sync::atomic::{AtomicU32, Ordering};
    static COUNTER: AtomicU32 = AtomicU32::new(0);
    let id = COUNTER.fetch_add(1, Ordering::SeqCst);
    let path = std::env::temp_dir().join(format!("trivia_test_{}_{}.db", std::process::id(), id));
    // Clean up leftover file from previous runs
    let _ = std::fs::remove_file(&path);
    let url = format!("sqlite:{}", path.display());
    Db::new(&url).await.expect("failed to create test database")
}

#[allow(dead_code)]
pub fn sample_question(n: usize, category: i64) -> NewQuestion {
    NewQuestion {
        question: format!("Question {n}?"),
        answer: format!("Answer {n}"),
        difficulty: (n as i64 % 5) + 1,
        category,
    }
}

/// Insert `n` questions into `category`, returning their ids in insertion order.
#[allow(dead_code)]
pub async fn seed_questions(db: &Db, n: usize, category: i64) -> Vec<i64> {
    let mut ids = Vec::with_capacity(n);
    for i in 0..n {
        let id = db
            .create_question(sample_question(i + 1, category))
            .await
            .expect("failed to seed question");
        ids.push(id);
    }
    ids
}
