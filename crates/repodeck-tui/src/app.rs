// TUI application state and event handling
use ratatui::widgets::TableState;
use repodeck_core::{sort, Pager, Repository, SortKey, SortState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,    // Navigating results
    Searching, // Typing in the search box
}

/// Lifecycle of the one in-flight fetch. A fresh submission moves any state
/// back to Loading; only Loading can resolve to Success or Error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchPhase {
    Idle,
    Loading,
    Success,
    Error(String),
}

pub struct App {
    pub should_quit: bool,
    pub input_mode: InputMode,
    pub search_input: String,
    pub phase: SearchPhase,
    pub repos: Vec<Repository>,
    pub sort: SortState,
    pub pager: Pager,
    // Owned clone, so it survives the record vanishing from a fresh search.
    pub selected: Option<Repository>,
    pub cursor: usize,
    pub table_state: TableState,
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            input_mode: InputMode::Searching,
            search_input: String::new(),
            phase: SearchPhase::Idle,
            repos: Vec::new(),
            sort: SortState::default(),
            pager: Pager::default(),
            selected: None,
            cursor: 0,
            table_state: TableState::default(),
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn enter_search_mode(&mut self) {
        self.input_mode = InputMode::Searching;
    }

    pub fn enter_normal_mode(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    /// Consume the search box. The input is cleared either way; only a
    /// non-empty trimmed query comes back, so whitespace submissions issue
    /// no request at all.
    pub fn take_query(&mut self) -> Option<String> {
        let query = self.search_input.trim().to_string();
        self.search_input.clear();
        if query.is_empty() {
            None
        } else {
            Some(query)
        }
    }

    /// Submit transition: Loading, with any prior error message dropped.
    pub fn begin_search(&mut self) {
        self.phase = SearchPhase::Loading;
    }

    /// A fetch resolved: the record set is replaced wholesale. Sort, page,
    /// and selection are left alone - stale values are the documented
    /// behavior when the new set is smaller.
    pub fn apply_results(&mut self, repos: Vec<Repository>) {
        self.repos = repos;
        self.phase = SearchPhase::Success;
        self.clamp_cursor();
    }

    pub fn apply_error(&mut self, message: String) {
        self.phase = SearchPhase::Error(message);
    }

    pub fn is_loading(&self) -> bool {
        self.phase == SearchPhase::Loading
    }

    /// The renderable window: current sort applied, then the current page.
    pub fn visible(&self) -> Vec<Repository> {
        let ordered = sort::sorted(&self.repos, &self.sort);
        self.pager.page_slice(&ordered).to_vec()
    }

    pub fn toggle_sort(&mut self, key: SortKey) {
        self.sort.toggle(key);
    }

    pub fn total_pages(&self) -> usize {
        self.pager.total_pages(self.repos.len())
    }

    /// Prev/next are no-ops at the bounds; the pager itself never clamps.
    pub fn next_page(&mut self) {
        if self.pager.current_page < self.total_pages() {
            self.pager.set_page(self.pager.current_page + 1);
            self.reset_cursor();
        }
    }

    pub fn previous_page(&mut self) {
        if self.pager.current_page > 1 {
            self.pager.set_page(self.pager.current_page - 1);
            self.reset_cursor();
        }
    }

    pub fn cycle_rows_per_page(&mut self) {
        self.pager.cycle_rows_per_page();
        self.reset_cursor();
    }

    pub fn next_row(&mut self) {
        let len = self.visible().len();
        if len > 0 {
            self.cursor = (self.cursor + 1).min(len - 1);
            self.table_state.select(Some(self.cursor));
        }
    }

    pub fn previous_row(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.table_state.select(Some(self.cursor));
        }
    }

    /// Pin the row under the cursor into the detail pane. There is no
    /// deselect; a later search never resets this implicitly.
    pub fn select_current(&mut self) {
        if let Some(repo) = self.visible().get(self.cursor) {
            self.selected = Some(repo.clone());
        }
    }

    fn reset_cursor(&mut self) {
        self.cursor = 0;
        self.table_state.select(if self.visible().is_empty() {
            None
        } else {
            Some(0)
        });
    }

    fn clamp_cursor(&mut self) {
        let len = self.visible().len();
        if len == 0 {
            self.cursor = 0;
            self.table_state.select(None);
        } else {
            self.cursor = self.cursor.min(len - 1);
            self.table_state.select(Some(self.cursor));
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use repodeck_core::SortOrder;

    fn repo(id: u64, stars: u32) -> Repository {
        Repository {
            id,
            name: format!("repo-{id}"),
            language: Some("Rust".to_string()),
            stars,
            forks: 0,
            updated_at: "2023-03-05T00:00:00Z".to_string(),
            license: None,
        }
    }

    fn repos(n: u64) -> Vec<Repository> {
        (1..=n).map(|id| repo(id, id as u32)).collect()
    }

    #[test]
    fn take_query_trims_and_clears() {
        let mut app = App::new();
        app.search_input = "  octocat  ".to_string();
        assert_eq!(app.take_query().as_deref(), Some("octocat"));
        assert!(app.search_input.is_empty());
    }

    #[test]
    fn whitespace_query_is_rejected_but_still_cleared() {
        let mut app = App::new();
        app.search_input = "   ".to_string();
        assert!(app.take_query().is_none());
        assert!(app.search_input.is_empty());
    }

    #[test]
    fn submit_clears_prior_error() {
        let mut app = App::new();
        app.apply_error("Not Found".to_string());
        app.begin_search();
        assert_eq!(app.phase, SearchPhase::Loading);
    }

    #[test]
    fn fetch_lifecycle_transitions() {
        let mut app = App::new();
        assert_eq!(app.phase, SearchPhase::Idle);

        app.begin_search();
        assert!(app.is_loading());

        app.apply_results(repos(2));
        assert_eq!(app.phase, SearchPhase::Success);
        assert_eq!(app.repos.len(), 2);

        app.begin_search();
        app.apply_error("Not Found".to_string());
        assert_eq!(app.phase, SearchPhase::Error("Not Found".to_string()));
        // The previous result set stays on screen behind the error.
        assert_eq!(app.repos.len(), 2);
    }

    #[test]
    fn results_replace_wholesale() {
        let mut app = App::new();
        app.apply_results(repos(5));
        app.apply_results(vec![repo(99, 0)]);
        assert_eq!(app.repos.len(), 1);
        assert_eq!(app.repos[0].id, 99);
    }

    #[test]
    fn empty_success_differs_from_never_searched() {
        let mut app = App::new();
        assert_eq!(app.phase, SearchPhase::Idle);
        app.begin_search();
        app.apply_results(Vec::new());
        assert_eq!(app.phase, SearchPhase::Success);
        assert!(app.repos.is_empty());
    }

    #[test]
    fn page_controls_stop_at_bounds() {
        let mut app = App::new();
        app.apply_results(repos(25));

        app.previous_page();
        assert_eq!(app.pager.current_page, 1);

        app.next_page();
        app.next_page();
        assert_eq!(app.pager.current_page, 3);
        app.next_page();
        assert_eq!(app.pager.current_page, 3);
    }

    #[test]
    fn visible_follows_sort_and_page() {
        let mut app = App::new();
        app.apply_results(repos(25));

        app.toggle_sort(SortKey::Stars);
        assert_eq!(app.sort.order, SortOrder::Ascending);
        let first_page = app.visible();
        assert_eq!(first_page.len(), 10);
        assert_eq!(first_page[0].stars, 1);

        app.toggle_sort(SortKey::Stars);
        let first_page = app.visible();
        assert_eq!(first_page[0].stars, 25);

        app.next_page();
        app.next_page();
        assert_eq!(app.visible().len(), 5);
    }

    #[test]
    fn rows_cycle_resets_page() {
        let mut app = App::new();
        app.apply_results(repos(25));
        app.next_page();
        app.cycle_rows_per_page();
        assert_eq!(app.pager.rows_per_page, 20);
        assert_eq!(app.pager.current_page, 1);
    }

    #[test]
    fn selection_survives_shrinking_result_set() {
        let mut app = App::new();
        app.apply_results(repos(3));
        app.next_row();
        app.select_current();
        let picked = app.selected.clone().unwrap();

        app.apply_results(vec![repo(50, 1)]);
        // The old record is gone from the results but still pinned.
        assert_eq!(app.selected, Some(picked));
    }

    #[test]
    fn stale_page_renders_empty_after_shrink() {
        let mut app = App::new();
        app.apply_results(repos(25));
        app.next_page();
        app.next_page();
        assert_eq!(app.pager.current_page, 3);

        app.apply_results(repos(5));
        // current_page is not re-clamped; the slice just comes up empty.
        assert_eq!(app.pager.current_page, 3);
        assert!(app.visible().is_empty());
    }

    #[test]
    fn cursor_stops_at_last_visible_row() {
        let mut app = App::new();
        app.apply_results(repos(3));
        for _ in 0..10 {
            app.next_row();
        }
        assert_eq!(app.cursor, 2);
        app.previous_row();
        assert_eq!(app.cursor, 1);
    }

    #[test]
    fn select_on_empty_page_is_a_no_op() {
        let mut app = App::new();
        app.select_current();
        assert!(app.selected.is_none());
    }
}
