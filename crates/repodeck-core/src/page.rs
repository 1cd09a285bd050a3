/// Page-size choices offered by the view.
pub const PAGE_SIZES: [usize; 3] = [10, 20, 30];

/// Client-side pagination over the already-sorted result list.
///
/// The pager does no clamping on page changes - the view keeps the prev/next
/// controls disabled at the bounds, so out-of-range pages are only reachable
/// when the result set shrinks under a fixed `current_page`. That stale state
/// is deliberate; `page_slice` just comes back empty for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    pub current_page: usize,
    pub rows_per_page: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Self {
            current_page: 1,
            rows_per_page: PAGE_SIZES[0],
        }
    }
}

impl Pager {
    /// ceil(total / rows_per_page); zero when there is nothing to page.
    pub fn total_pages(&self, total_items: usize) -> usize {
        total_items.div_ceil(self.rows_per_page)
    }

    /// Jump to `page`. Bounds are the caller's responsibility.
    pub fn set_page(&mut self, page: usize) {
        self.current_page = page;
    }

    /// Change the page size and unconditionally go back to page 1.
    pub fn set_rows_per_page(&mut self, rows: usize) {
        self.rows_per_page = rows;
        self.current_page = 1;
    }

    /// Step to the next size in `PAGE_SIZES`, wrapping around.
    pub fn cycle_rows_per_page(&mut self) {
        let next = PAGE_SIZES
            .iter()
            .position(|&s| s == self.rows_per_page)
            .map(|i| PAGE_SIZES[(i + 1) % PAGE_SIZES.len()])
            .unwrap_or(PAGE_SIZES[0]);
        self.set_rows_per_page(next);
    }

    /// The visible window of `items` for the current page.
    pub fn page_slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = (self.current_page - 1) * self.rows_per_page;
        let end = (start + self.rows_per_page).min(items.len());
        if start >= items.len() {
            return &[];
        }
        &items[start..end]
    }
}
