use serde::Serialize;

/// One batch of results plus what the "Load more" control needs.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub current_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub next_page: Option<usize>,
}

/// Slices out the 1-based `requested_page`. Page 0 is read as page 1; a page
/// past the end is an empty batch so appended cards are never sent twice.
pub fn page_of<T>(items: Vec<T>, requested_page: usize, per_page: usize) -> Page<T> {
    let per_page = per_page.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(per_page);
    let current_page = requested_page.max(1);

    let offset = per_page.saturating_mul(current_page - 1);
    let items: Vec<T> = items.into_iter().skip(offset).take(per_page).collect();

    Page {
        next_page: (current_page < total_pages).then_some(current_page + 1),
        items,
        current_page,
        total_items,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::page_of;

    #[test]
    fn middle_page_points_at_the_next() {
        let page = page_of((1..=25).collect(), 2, 10);

        assert_eq!(page.items, (11..=20).collect::<Vec<_>>());
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.next_page, Some(3));
    }

    #[test]
    fn last_page_has_no_next() {
        let page = page_of((1..=5).collect(), 3, 2);

        assert_eq!(page.items, vec![5]);
        assert_eq!(page.next_page, None);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let page = page_of((1..=5).collect::<Vec<u8>>(), 40, 2);

        assert_eq!(page.current_page, 40);
        assert!(page.items.is_empty());
        assert_eq!(page.total_items, 5);
        assert_eq!(page.next_page, None);
    }

    #[test]
    fn page_zero_is_the_first_page() {
        let page = page_of((1..=5).collect::<Vec<u8>>(), 0, 2);

        assert_eq!(page.current_page, 1);
        assert_eq!(page.items, vec![1, 2]);
        assert_eq!(page.next_page, Some(2));
    }

    #[test]
    fn empty_list_is_a_single_empty_page() {
        let page = page_of(Vec::<u8>::new(), 1, 10);

        assert!(page.items.is_empty());
        assert_eq!(page.current_page, 1);
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.next_page, None);
    }

    #[test]
    fn zero_page_size_is_treated_as_one() {
        let page = page_of(vec!['a', 'b'], 1, 0);
        assert_eq!(page.items, vec!['a']);
        assert_eq!(page.next_page, Some(2));
    }
}
