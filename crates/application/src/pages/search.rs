use bookrack_domain::BookEntry;

use crate::{
    ApplicationError, EntryProvider, ItemTap, LoadOptions, Navigator, PageLifecycle, PageStatus,
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchViewState {
    pub query: String,
    pub matches: Vec<BookEntry>,
}

/// The search page: filters the catalog on demand and routes taps on a
/// match to the detail page, exactly like the list page does.
pub struct SearchPage {
    provider: Box<dyn EntryProvider>,
    navigator: Box<dyn Navigator>,
    status: PageStatus,
    state: SearchViewState,
}

impl SearchPage {
    pub fn new(provider: Box<dyn EntryProvider>, navigator: Box<dyn Navigator>) -> Self {
        Self {
            provider,
            navigator,
            status: PageStatus::Unloaded,
            state: SearchViewState::default(),
        }
    }

    pub fn status(&self) -> PageStatus {
        self.status
    }

    pub fn view_state(&self) -> &SearchViewState {
        &self.state
    }

    /// Case-insensitive match over title, author, and tag. Matches keep
    /// catalog order. A blank query clears the result list.
    pub fn search(&mut self, query: &str) -> Result<(), ApplicationError> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            self.state = SearchViewState::default();
            return Ok(());
        }

        let needle = trimmed.to_lowercase();
        let matches = self
            .provider
            .book_list()?
            .into_iter()
            .filter(|entry| {
                entry.title.to_lowercase().contains(&needle)
                    || entry.author.to_lowercase().contains(&needle)
                    || entry.tag.to_lowercase().contains(&needle)
            })
            .collect();

        self.state = SearchViewState {
            query: trimmed.to_string(),
            matches,
        };
        Ok(())
    }

    pub fn to_detail(&self, tap: &ItemTap) -> Result<(), ApplicationError> {
        let entry = super::entry_from_tap(tap)?;
        let route = super::detail_route(&entry)?;
        self.navigator.request_navigation(route);
        Ok(())
    }
}

impl PageLifecycle for SearchPage {
    fn on_load(&mut self, _options: &LoadOptions) -> Result<(), ApplicationError> {
        self.state = SearchViewState::default();
        self.status = PageStatus::Loaded;
        Ok(())
    }

    fn on_unload(&mut self) {
        self.state = SearchViewState::default();
        self.status = PageStatus::Unloaded;
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use bookrack_domain::Route;
    use serde_json::json;

    use super::*;

    struct FakeProvider {
        books: Vec<BookEntry>,
    }

    impl EntryProvider for FakeProvider {
        fn book_list(&self) -> Result<Vec<BookEntry>, ApplicationError> {
            Ok(self.books.clone())
        }
    }

    #[derive(Clone, Default)]
    struct RecordingNavigator {
        requests: Rc<RefCell<Vec<Route>>>,
    }

    impl Navigator for RecordingNavigator {
        fn request_navigation(&self, route: Route) {
            self.requests.borrow_mut().push(route);
        }
    }

    fn catalog() -> Vec<BookEntry> {
        serde_json::from_value(json!([
            { "id": 1, "title": "The Three-Body Problem", "author": "Liu Cixin", "tag": "science fiction" },
            { "id": 2, "title": "Norwegian Wood", "author": "Haruki Murakami", "tag": "fiction" },
            { "id": 3, "title": "Death's End", "author": "Liu Cixin", "tag": "science fiction" },
        ]))
        .expect("catalog")
    }

    fn loaded_page() -> (SearchPage, RecordingNavigator) {
        let navigator = RecordingNavigator::default();
        let mut page = SearchPage::new(
            Box::new(FakeProvider { books: catalog() }),
            Box::new(navigator.clone()),
        );
        page.on_load(&LoadOptions::none()).expect("load");
        (page, navigator)
    }

    #[test]
    fn loads_with_empty_results() {
        let (page, _) = loaded_page();
        assert_eq!(page.status(), PageStatus::Loaded);
        assert_eq!(page.view_state(), &SearchViewState::default());
    }

    #[test]
    fn matches_title_author_and_tag_case_insensitively() {
        let (mut page, _) = loaded_page();

        page.search("liu cixin").expect("search");
        let ids: Vec<i64> = page
            .view_state()
            .matches
            .iter()
            .map(|entry| entry.id.get())
            .collect();
        assert_eq!(ids, vec![1, 3]);

        page.search("NORWEGIAN").expect("search");
        assert_eq!(page.view_state().matches.len(), 1);

        page.search("science").expect("search");
        assert_eq!(page.view_state().matches.len(), 2);
    }

    #[test]
    fn blank_query_clears_results() {
        let (mut page, _) = loaded_page();
        page.search("fiction").expect("search");
        assert!(!page.view_state().matches.is_empty());

        page.search("   ").expect("blank search");
        assert_eq!(page.view_state(), &SearchViewState::default());
    }

    #[test]
    fn unmatched_query_yields_no_results() {
        let (mut page, _) = loaded_page();
        page.search("cookbook").expect("search");
        assert_eq!(page.view_state().query, "cookbook");
        assert!(page.view_state().matches.is_empty());
    }

    #[test]
    fn tap_on_a_match_navigates_to_detail() {
        let (mut page, navigator) = loaded_page();
        page.search("norwegian").expect("search");
        let hit = page.view_state().matches[0].clone();

        page.to_detail(&ItemTap::new(json!(hit))).expect("tap");

        let requests = navigator.requests.borrow();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].path(), "detail");
    }
}
