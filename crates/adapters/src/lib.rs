pub mod data;
pub mod nav;
pub mod presenters;

pub use data::{BundledBookList, FileBookList};
pub use nav::RouteQueue;
pub use presenters::{present_book_detail, present_book_row, present_route};
