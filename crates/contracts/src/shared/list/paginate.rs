use super::PageState;

/// Количество страниц; 0 для пустого списка
pub fn total_pages(total_items: usize, items_per_page: usize) -> usize {
    if items_per_page == 0 {
        return 0;
    }
    total_items.div_ceil(items_per_page)
}

/// Срез текущей страницы `[(page-1)*n, page*n)`.
///
/// Номер страницы не ограничивается сверху: страница за концом списка
/// дает пустой срез, исправлять номер должен вызывающий код.
pub fn paginate<'a, T>(items: &'a [T], page: &PageState) -> &'a [T] {
    let start = page.offset();
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page.items_per_page).min(items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(25, 10), 3);
        assert_eq!(total_pages(25, 0), 0);
    }

    #[test]
    fn test_huge_page_size_is_one_page() {
        assert_eq!(total_pages(2, usize::MAX), 1);
        assert_eq!(total_pages(usize::MAX, usize::MAX), 1);
        assert_eq!(total_pages(usize::MAX, 1), usize::MAX);

        let items: Vec<u32> = (1..=2).collect();
        assert_eq!(paginate(&items, &PageState::new(1, usize::MAX)), &[1, 2]);
        assert!(paginate(&items, &PageState::new(2, usize::MAX)).is_empty());
    }

    #[test]
    fn test_pages_of_25_by_10() {
        let items: Vec<u32> = (1..=25).collect();
        assert_eq!(paginate(&items, &PageState::new(1, 10)).len(), 10);
        assert_eq!(paginate(&items, &PageState::new(2, 10))[0], 11);
        let last = paginate(&items, &PageState::new(3, 10));
        assert_eq!(last, &[21, 22, 23, 24, 25]);
    }

    #[test]
    fn test_stale_page_is_empty() {
        let items: Vec<u32> = (1..=25).collect();
        assert!(paginate(&items, &PageState::new(4, 10)).is_empty());
        assert!(paginate(&items, &PageState::new(usize::MAX, 10)).is_empty());
    }
}
