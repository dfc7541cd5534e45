use bookrack_domain::{BookEntry, ITEM_PARAM};

use crate::{ApplicationError, LoadOptions, PageLifecycle, PageStatus};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailViewState {
    pub book: Option<BookEntry>,
}

/// The detail page: consumes the `item` parameter produced by the list
/// and search pages and shows the decoded entry.
#[derive(Debug, Default)]
pub struct DetailPage {
    status: PageStatus,
    state: DetailViewState,
}

impl DetailPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> PageStatus {
        self.status
    }

    pub fn view_state(&self) -> &DetailViewState {
        &self.state
    }
}

impl PageLifecycle for DetailPage {
    fn on_load(&mut self, options: &LoadOptions) -> Result<(), ApplicationError> {
        let raw = options.param(ITEM_PARAM).ok_or_else(|| {
            ApplicationError::InvalidInput(format!("missing {ITEM_PARAM} parameter"))
        })?;
        let book: BookEntry = serde_json::from_str(raw)
            .map_err(|error| ApplicationError::Payload(error.to_string()))?;

        self.state = DetailViewState { book: Some(book) };
        self.status = PageStatus::Loaded;
        Ok(())
    }

    fn on_unload(&mut self) {
        self.state = DetailViewState::default();
        self.status = PageStatus::Unloaded;
    }
}
