/// Presentation mode of the product list. A pure toggle; switching never
/// triggers a reload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Grid,
    Table,
}

/// Page-bounds arithmetic for the product list.
///
/// The page index is only ever moved through [`prev`](Pager::prev) and
/// [`next`](Pager::next), which clamp to `[0, total_pages - 1]`, and the
/// matching `has_*` predicates drive the disabled state of the navigation
/// controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pager {
    pub page: u32,
    pub total: u32,
    pub limit: u32,
}

impl Pager {
    pub fn total_pages(&self) -> u32 {
        if self.limit == 0 {
            0
        } else {
            self.total.div_ceil(self.limit)
        }
    }

    pub fn has_prev(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self) -> bool {
        self.page + 1 < self.total_pages()
    }

    /// Previous page index, clamped at 0.
    pub fn prev(&self) -> u32 {
        if self.has_prev() {
            self.page - 1
        } else {
            self.page
        }
    }

    /// Next page index, clamped at the last page.
    pub fn next(&self) -> u32 {
        if self.has_next() {
            self.page + 1
        } else {
            self.page
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(Pager { page: 0, total: 100, limit: 10 }.total_pages(), 10);
        assert_eq!(Pager { page: 0, total: 101, limit: 10 }.total_pages(), 11);
        assert_eq!(Pager { page: 0, total: 9, limit: 10 }.total_pages(), 1);
        assert_eq!(Pager { page: 0, total: 0, limit: 10 }.total_pages(), 0);
    }

    #[test]
    fn test_prev_clamps_at_zero() {
        let pager = Pager { page: 0, total: 100, limit: 10 };
        assert!(!pager.has_prev());
        assert_eq!(pager.prev(), 0);
    }

    #[test]
    fn test_next_clamps_at_last_page() {
        let pager = Pager { page: 9, total: 100, limit: 10 };
        assert!(!pager.has_next());
        assert_eq!(pager.next(), 9);

        let inner = Pager { page: 8, total: 100, limit: 10 };
        assert!(inner.has_next());
        assert_eq!(inner.next(), 9);
    }

    #[test]
    fn test_empty_list_disables_both_directions() {
        let pager = Pager { page: 0, total: 0, limit: 10 };
        assert!(!pager.has_prev());
        assert!(!pager.has_next());
        assert_eq!(pager.next(), 0);
    }
}
