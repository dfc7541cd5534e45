use bookrack_adapters::{BundledBookList, FileBookList, RouteQueue};
use bookrack_application::{
    ApplicationError, DetailPage, EntryProvider, ItemTap, ListPage, LoadOptions, PageLifecycle,
    SearchPage,
};
use bookrack_domain::{EntryId, Route};
use tracing::{debug, info};

use crate::config::AppConfig;

/// The host runtime: builds pages with their injected collaborators,
/// drives lifecycle hooks in framework order, and follows queued
/// navigation requests.
pub struct PageHost {
    config: AppConfig,
    routes: RouteQueue,
}

impl PageHost {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            routes: RouteQueue::new(),
        }
    }

    fn provider(&self) -> Box<dyn EntryProvider> {
        match &self.config.book_list_path {
            Some(path) => Box::new(FileBookList::new(path.clone())),
            None => Box::new(BundledBookList),
        }
    }

    pub fn open_list_page(&self) -> Result<ListPage, ApplicationError> {
        let mut page = ListPage::new(self.provider(), Box::new(self.routes.clone()));
        page.on_load(&LoadOptions::none())?;
        page.on_ready();
        page.on_show();
        info!(books = page.view_state().books.len(), "list page loaded");
        Ok(page)
    }

    pub fn open_search_page(&self) -> Result<SearchPage, ApplicationError> {
        let mut page = SearchPage::new(self.provider(), Box::new(self.routes.clone()));
        page.on_load(&LoadOptions::none())?;
        page.on_ready();
        page.on_show();
        info!("search page loaded");
        Ok(page)
    }

    pub fn open_detail_page(&self, options: &LoadOptions) -> Result<DetailPage, ApplicationError> {
        let mut page = DetailPage::new();
        page.on_load(options)?;
        page.on_ready();
        page.on_show();
        info!("detail page loaded");
        Ok(page)
    }

    /// Simulates a tap on the listed entry with the given id, the way
    /// the UI would deliver it: the entry bound to the tapped element,
    /// as JSON.
    pub fn tap_entry(&self, page: &ListPage, id: EntryId) -> Result<(), ApplicationError> {
        let entry = page
            .view_state()
            .books
            .iter()
            .find(|entry| entry.id == id)
            .cloned()
            .ok_or_else(|| {
                ApplicationError::NotFound(format!("no entry with id={}", id.get()))
            })?;
        let item = serde_json::to_value(&entry)
            .map_err(|error| ApplicationError::Serialization(error.to_string()))?;
        page.to_detail(&ItemTap::new(item))
    }

    /// Pops the next queued navigation request and re-parses its
    /// rendered form, the way the receiving side of the host does.
    pub fn follow_navigation(&self) -> Result<Option<Route>, ApplicationError> {
        let Some(route) = self.routes.take_next() else {
            return Ok(None);
        };
        debug!(route = %route.render(), "navigation requested");
        let parsed = Route::parse(&route.render())?;
        Ok(Some(parsed))
    }
}
