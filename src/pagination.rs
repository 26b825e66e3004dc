//! Fixed-size pagination over an ordered, already-fetched list.

pub const QUESTIONS_PER_PAGE: usize = 10;

/// Slice out the 1-based `page` of `items`. Pages past the end come back
/// empty; callers decide whether that is a not-found condition.
pub fn paginate<T>(items: &[T], page: u32) -> &[T] {
    let start = (page.max(1) as usize - 1).saturating_mul(QUESTIONS_PER_PAGE);
    let end = start.saturating_add(QUESTIONS_PER_PAGE);

    if start >= items.len() {
        return &[];
    }
    &items[start..end.min(items.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_holds_ten_items() {
        let items: Vec<i64> = (1..=25).collect();
        assert_eq!(paginate(&items, 1), (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn last_page_is_partial() {
        let items: Vec<i64> = (1..=25).collect();
        assert_eq!(paginate(&items, 3), (21..=25).collect::<Vec<_>>());
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let items: Vec<i64> = (1..=25).collect();
        assert!(paginate(&items, 4).is_empty());
        assert!(paginate(&items, 100).is_empty());
    }

    #[test]
    fn page_zero_behaves_like_page_one() {
        let items: Vec<i64> = (1..=25).collect();
        assert_eq!(paginate(&items, 0), paginate(&items, 1));
    }

    #[test]
    fn empty_input_yields_empty_page() {
        let items: Vec<i64> = Vec::new();
        assert!(paginate(&items, 1).is_empty());
    }
}
