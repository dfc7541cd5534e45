mod entry;
mod error;
mod route;

pub use entry::{BookEntry, EntryId};
pub use error::DomainError;
pub use route::{decode_component, encode_component, Route, ITEM_PARAM, PAGE_DETAIL, PAGE_SEARCH};
