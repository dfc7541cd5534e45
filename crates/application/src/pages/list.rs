use bookrack_domain::{BookEntry, Route, PAGE_SEARCH};

use crate::{
    ApplicationError, EntryProvider, ItemTap, LoadOptions, Navigator, PageLifecycle, PageStatus,
};

/// View state of the catalog list. The host renders from this; the page
/// replaces it wholesale and never edits it in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListViewState {
    pub books: Vec<BookEntry>,
}

/// The catalog list page: shows the full entry list and routes the two
/// user gestures, to the search page and to the detail page.
pub struct ListPage {
    provider: Box<dyn EntryProvider>,
    navigator: Box<dyn Navigator>,
    status: PageStatus,
    state: ListViewState,
}

impl ListPage {
    pub fn new(provider: Box<dyn EntryProvider>, navigator: Box<dyn Navigator>) -> Self {
        Self {
            provider,
            navigator,
            status: PageStatus::Unloaded,
            state: ListViewState::default(),
        }
    }

    pub fn status(&self) -> PageStatus {
        self.status
    }

    pub fn view_state(&self) -> &ListViewState {
        &self.state
    }

    /// Requests navigation to the search page. Nothing travels with it.
    pub fn to_search(&self) {
        self.navigator
            .request_navigation(Route::to_page(PAGE_SEARCH));
    }

    /// Requests navigation to the detail page for the tapped entry. A
    /// payload that fails validation or serialization aborts the call
    /// before any navigation request is issued.
    pub fn to_detail(&self, tap: &ItemTap) -> Result<(), ApplicationError> {
        let entry = super::entry_from_tap(tap)?;
        let route = super::detail_route(&entry)?;
        self.navigator.request_navigation(route);
        Ok(())
    }

    fn replace_books(&mut self, books: Vec<BookEntry>) {
        self.state = ListViewState { books };
    }
}

impl PageLifecycle for ListPage {
    fn on_load(&mut self, _options: &LoadOptions) -> Result<(), ApplicationError> {
        let books = self.provider.book_list()?;
        self.replace_books(books);
        self.status = PageStatus::Loaded;
        Ok(())
    }

    fn on_unload(&mut self) {
        self.replace_books(Vec::new());
        self.status = PageStatus::Unloaded;
    }
}
