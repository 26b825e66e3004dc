//! Quiz question selection.
//!
//! Given the eligible pool for a category and the ids already served in the
//! current session, pick one unseen question uniformly at random. Filtering
//! first and then shuffling keeps the draw bounded: once the pool is
//! exhausted there is nothing left to loop over.

use std::collections::HashSet;

use rand::seq::SliceRandom;

use crate::db::Question;

/// Draw one question from `pool` that is not in `previous`. Returns `None`
/// when every pool member has already been served (or the pool was empty to
/// begin with, which callers should rule out beforehand).
pub fn draw(pool: Vec<Question>, previous: &[i64]) -> Option<Question> {
    let seen: HashSet<i64> = previous.iter().copied().collect();

    let mut remaining: Vec<Question> = pool
        .into_iter()
        .filter(|question| !seen.contains(&question.id))
        .collect();

    remaining.shuffle(&mut rand::thread_rng());
    remaining.pop()
}
