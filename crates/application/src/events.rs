use serde_json::Value;

/// A tap on a rendered entry. The host delivers the entry bound to the
/// tapped element as an untyped JSON value; pages validate it into a
/// `BookEntry` before acting on it.
#[derive(Debug, Clone)]
pub struct ItemTap {
    pub item: Value,
}

impl ItemTap {
    pub fn new(item: Value) -> Self {
        Self { item }
    }
}
