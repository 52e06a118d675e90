//! Page cursor and keyboard navigation
//!
//! The cursor only tracks numbers; rendering is requested by the controller
//! whenever a step actually moves.

/// Keys that move between pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Previous,
    Next,
}

impl NavKey {
    /// Map a `KeyboardEvent.key` value
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Self::Previous),
            "ArrowRight" => Some(Self::Next),
            _ => None,
        }
    }
}

/// Current page within the loaded document (1-indexed)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    current: u32,
    page_count: u32,
}

impl Default for PageCursor {
    fn default() -> Self {
        Self {
            current: 1,
            page_count: 0,
        }
    }
}

impl PageCursor {
    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn page_count(&self) -> u32 {
        self.page_count
    }

    pub fn is_loaded(&self) -> bool {
        self.page_count > 0
    }

    /// Start over on page 1 of a freshly loaded document
    pub fn reset(&mut self, page_count: u32) {
        self.current = 1;
        self.page_count = page_count;
    }

    pub fn contains(&self, page: u32) -> bool {
        page >= 1 && page <= self.page_count
    }

    /// Move back one page; `None` when already on the first page
    pub fn step_back(&mut self) -> Option<u32> {
        if self.current <= 1 {
            return None;
        }
        self.current -= 1;
        Some(self.current)
    }

    /// Move forward one page; `None` on the last page or with nothing loaded
    pub fn step_forward(&mut self) -> Option<u32> {
        if !self.is_loaded() || self.current >= self.page_count {
            return None;
        }
        self.current += 1;
        Some(self.current)
    }

    pub fn step(&mut self, key: NavKey) -> Option<u32> {
        match key {
            NavKey::Previous => self.step_back(),
            NavKey::Next => self.step_forward(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(NavKey::from_key("ArrowLeft"), Some(NavKey::Previous));
        assert_eq!(NavKey::from_key("ArrowRight"), Some(NavKey::Next));
        assert_eq!(NavKey::from_key("ArrowUp"), None);
        assert_eq!(NavKey::from_key("arrowleft"), None);
    }

    #[test]
    fn test_unloaded_cursor_does_not_move() {
        let mut cursor = PageCursor::default();
        assert_eq!(cursor.step_back(), None);
        assert_eq!(cursor.step_forward(), None);
        assert_eq!(cursor.current(), 1);
    }

    #[test]
    fn test_walks_to_both_ends() {
        let mut cursor = PageCursor::default();
        cursor.reset(3);

        assert_eq!(cursor.step_forward(), Some(2));
        assert_eq!(cursor.step_forward(), Some(3));
        assert_eq!(cursor.step_forward(), None);
        assert_eq!(cursor.current(), 3);

        assert_eq!(cursor.step_back(), Some(2));
        assert_eq!(cursor.step_back(), Some(1));
        assert_eq!(cursor.step_back(), None);
        assert_eq!(cursor.current(), 1);
    }

    #[test]
    fn test_reset_returns_to_first_page() {
        let mut cursor = PageCursor::default();
        cursor.reset(10);
        cursor.step_forward();
        cursor.step_forward();
        cursor.reset(4);
        assert_eq!(cursor.current(), 1);
        assert_eq!(cursor.page_count(), 4);
        assert!(cursor.contains(4));
        assert!(!cursor.contains(0));
        assert!(!cursor.contains(5));
    }

    proptest! {
        #[test]
        fn prop_cursor_stays_in_bounds(
            page_count in 1u32..50,
            steps in proptest::collection::vec(any::<bool>(), 0..200),
        ) {
            let mut cursor = PageCursor::default();
            cursor.reset(page_count);

            for forward in steps {
                let before = cursor.current();
                let key = if forward { NavKey::Next } else { NavKey::Previous };
                let moved = cursor.step(key);

                prop_assert!(cursor.current() >= 1);
                prop_assert!(cursor.current() <= page_count);
                match moved {
                    Some(page) => {
                        prop_assert_eq!(page, cursor.current());
                        prop_assert_eq!(before.abs_diff(page), 1);
                    }
                    None => prop_assert_eq!(before, cursor.current()),
                }
            }
        }
    }
}
