use std::collections::BTreeMap;

use crate::ApplicationError;

/// Decoded query parameters of the route that opened a page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadOptions {
    params: BTreeMap<String, String>,
}

impl LoadOptions {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn from_query(query: &[(String, String)]) -> Self {
        Self {
            params: query.iter().cloned().collect(),
        }
    }

    pub fn with_param(key: &str, value: &str) -> Self {
        let mut params = BTreeMap::new();
        params.insert(key.to_string(), value.to_string());
        Self { params }
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PageStatus {
    #[default]
    Unloaded,
    Loaded,
}

/// The host-invoked hook set. The host instantiates a page, calls
/// `on_load` once, then drives the remaining hooks as the page gains
/// and loses the screen. Every hook defaults to a no-op so a page only
/// spells out the events it reacts to.
pub trait PageLifecycle {
    fn on_load(&mut self, options: &LoadOptions) -> Result<(), ApplicationError> {
        let _ = options;
        Ok(())
    }

    fn on_ready(&mut self) {}

    fn on_show(&mut self) {}

    fn on_hide(&mut self) {}

    fn on_unload(&mut self) {}

    fn on_pull_down_refresh(&mut self) {}

    fn on_reach_bottom(&mut self) {}

    fn on_share_app_message(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_options_expose_query_pairs() {
        let options = LoadOptions::from_query(&[
            ("item".to_string(), "{}".to_string()),
            ("from".to_string(), "list".to_string()),
        ]);
        assert_eq!(options.param("item"), Some("{}"));
        assert_eq!(options.param("from"), Some("list"));
        assert_eq!(options.param("missing"), None);
    }

    #[test]
    fn default_hooks_are_accepted_noops() {
        struct Bare;
        impl PageLifecycle for Bare {}

        let mut page = Bare;
        page.on_load(&LoadOptions::none()).expect("default on_load");
        page.on_ready();
        page.on_show();
        page.on_hide();
        page.on_pull_down_refresh();
        page.on_reach_bottom();
        page.on_share_app_message();
        page.on_unload();
    }
}
