use crate::shared::api_utils::MY_ORDERS_PAGE_SIZE;
use contracts::domain::a001_order::MyOrdersPage;

/// Pagination state of the "My orders" page (zero-based page index)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MyOrdersState {
    pub page: usize,
    pub page_size: usize,
    pub has_next: bool,
}

impl Default for MyOrdersState {
    fn default() -> Self {
        Self {
            page: 0,
            page_size: MY_ORDERS_PAGE_SIZE,
            has_next: false,
        }
    }
}

impl MyOrdersState {
    pub fn can_prev(&self) -> bool {
        self.page > 0
    }

    pub fn can_next(&self) -> bool {
        self.has_next
    }

    /// Step back one page; no-op on the first page
    pub fn prev(&mut self) -> bool {
        if !self.can_prev() {
            return false;
        }
        self.page -= 1;
        true
    }

    /// Step forward one page; no-op when the last page was reached
    pub fn next(&mut self) -> bool {
        if !self.can_next() {
            return false;
        }
        self.page += 1;
        true
    }

    /// Remember whether the loaded page has a successor
    pub fn apply_page(&mut self, page: &MyOrdersPage) {
        self.has_next = page.has_next(self.page_size);
    }

    /// Human-readable page indicator, e.g. "Page 2 of 5"
    pub fn page_label(&self, total_pages: usize) -> String {
        if total_pages > 0 {
            format!("Page {} of {}", self.page + 1, total_pages)
        } else {
            format!("Page {}", self.page + 1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = MyOrdersState::default();
        assert_eq!(state.page, 0);
        assert_eq!(state.page_size, 3);
        assert!(!state.can_prev());
        assert!(!state.can_next());
    }

    #[test]
    fn test_prev_is_noop_on_first_page() {
        let mut state = MyOrdersState::default();
        assert!(!state.prev());
        assert_eq!(state.page, 0);
    }

    #[test]
    fn test_next_follows_loaded_page() {
        let mut state = MyOrdersState::default();
        state.apply_page(&MyOrdersPage {
            current_page: 0,
            total_pages: 2,
            ..Default::default()
        });
        assert!(state.next());
        assert_eq!(state.page, 1);

        state.apply_page(&MyOrdersPage {
            current_page: 1,
            total_pages: 2,
            ..Default::default()
        });
        assert!(!state.next());
        assert_eq!(state.page, 1);
        assert!(state.prev());
        assert_eq!(state.page, 0);
    }

    #[test]
    fn test_page_label() {
        let state = MyOrdersState {
            page: 1,
            ..Default::default()
        };
        assert_eq!(state.page_label(5), "Page 2 of 5");
        assert_eq!(state.page_label(0), "Page 2");
    }
}
