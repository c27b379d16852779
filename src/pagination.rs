pub const PAGE_SIZE: usize = 10;

/// Slices `items` into the 1-based page window of at most [`PAGE_SIZE`]
/// entries, preserving order. Page 0 and pages past the end come back
/// empty; validating the page number against the total count is the
/// caller's job.
pub fn paginate<T>(page: usize, items: &[T]) -> &[T] {
    let start = match page.checked_sub(1) {
        Some(p) => p.saturating_mul(PAGE_SIZE),
        None => return &[],
    };
    if start >= items.len() {
        return &[];
    }
    let end = (start + PAGE_SIZE).min(items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_never_exceed_page_size() {
        let items: Vec<i64> = (0..35).collect();
        for page in 1..=6 {
            assert!(paginate(page, &items).len() <= PAGE_SIZE);
        }
    }

    #[test]
    fn concatenated_pages_reconstruct_the_input() {
        let items: Vec<i64> = (0..23).collect();
        let mut rebuilt = Vec::new();
        let mut page = 1;
        loop {
            let chunk = paginate(page, &items);
            if chunk.is_empty() {
                break;
            }
            rebuilt.extend_from_slice(chunk);
            page += 1;
        }
        assert_eq!(rebuilt, items);
    }

    #[test]
    fn full_page_then_remainder() {
        let items: Vec<i64> = (0..12).collect();
        assert_eq!(paginate(1, &items), (0..10).collect::<Vec<_>>());
        assert_eq!(paginate(2, &items), [10, 11]);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let items: Vec<i64> = (0..5).collect();
        assert!(paginate(2, &items).is_empty());
        assert!(paginate(100, &items).is_empty());
        assert!(paginate(1, &Vec::<i64>::new()).is_empty());
    }

    #[test]
    fn page_zero_is_empty() {
        let items: Vec<i64> = (0..5).collect();
        assert!(paginate(0, &items).is_empty());
    }
}
