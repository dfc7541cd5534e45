mod detail;
mod list;
mod search;

pub use detail::{DetailPage, DetailViewState};
pub use list::{ListPage, ListViewState};
pub use search::{SearchPage, SearchViewState};

use bookrack_domain::{BookEntry, Route, ITEM_PARAM, PAGE_DETAIL};

use crate::{ApplicationError, ItemTap};

/// Builds the detail navigation request for one entry: serialize to
/// JSON, bind as the `item` query parameter. Percent-encoding happens
/// when the route is rendered.
fn detail_route(entry: &BookEntry) -> Result<Route, ApplicationError> {
    let payload = serde_json::to_string(entry)
        .map_err(|error| ApplicationError::Serialization(error.to_string()))?;
    Ok(Route::with_param(PAGE_DETAIL, ITEM_PARAM, &payload))
}

/// Validates the tapped element's payload into a typed entry instead of
/// letting an untyped value flow onward.
fn entry_from_tap(tap: &ItemTap) -> Result<BookEntry, ApplicationError> {
    serde_json::from_value(tap.item.clone())
        .map_err(|error| ApplicationError::Payload(error.to_string()))
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use bookrack_domain::{BookEntry, Route};
    use serde_json::json;

    use crate::{
        ApplicationError, EntryProvider, ItemTap, LoadOptions, Navigator, PageLifecycle,
    };

    use super::{DetailPage, ListPage};

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

    fn entry(id: i64, title: &str) -> BookEntry {
        serde_json::from_value(json!({ "id": id, "title": title })).expect("entry")
    }

    // The producing page and the consuming page agree on the wire form:
    // tap an entry on the list, follow the request, and the detail page
    // decodes an equal value.
    #[test]
    fn detail_page_reproduces_the_tapped_entry() {
        let tapped = entry(1, "A");
        let navigator = RecordingNavigator::default();
        let mut list = ListPage::new(
            Box::new(FakeProvider {
                books: vec![tapped.clone(), entry(2, "B")],
            }),
            Box::new(navigator.clone()),
        );
        list.on_load(&LoadOptions::none()).expect("load");
        list.to_detail(&ItemTap::new(json!(tapped.clone())))
            .expect("tap");

        let requested = navigator.requests.borrow_mut().pop().expect("one request");
        let reparsed = Route::parse(&requested.render()).expect("parse rendered route");

        let mut detail = DetailPage::new();
        detail
            .on_load(&LoadOptions::from_query(reparsed.query()))
            .expect("detail load");
        assert_eq!(detail.view_state().book.as_ref(), Some(&tapped));
    }
}
