use bookrack_domain::{BookEntry, Route};

use crate::ApplicationError;

/// The static data provider behind the pages. Implementations return
/// the catalog in document order; pages install it untransformed.
pub trait EntryProvider {
    fn book_list(&self) -> Result<Vec<BookEntry>, ApplicationError>;
}

/// Host navigation service. Requests are fire-and-forget: a page never
/// blocks on, retries, or observes the transition.
pub trait Navigator {
    fn request_navigation(&self, route: Route);
}
