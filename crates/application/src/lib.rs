mod error;
mod events;
mod lifecycle;
mod pages;
mod ports;

pub use error::ApplicationError;
pub use events::ItemTap;
pub use lifecycle::{LoadOptions, PageLifecycle, PageStatus};
pub use pages::{
    DetailPage, DetailViewState, ListPage, ListViewState, SearchPage, SearchViewState,
};
pub use ports::{EntryProvider, Navigator};
