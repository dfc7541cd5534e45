use std::fmt::{Display, Formatter};

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::DomainError;

pub const PAGE_SEARCH: &str = "search";
pub const PAGE_DETAIL: &str = "detail";

/// Query parameter carrying the serialized entry on the detail route.
pub const ITEM_PARAM: &str = "item";

// The host's URI-component set: everything except ASCII alphanumerics
// and `- _ . ! ~ * ' ( )` is escaped.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// A navigation target: a page path plus ordered query parameters.
/// Values are held decoded; encoding happens at the rendering boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    path: String,
    query: Vec<(String, String)>,
}

impl Route {
    pub fn to_page(path: &str) -> Self {
        Self {
            path: path.to_string(),
            query: Vec::new(),
        }
    }

    pub fn with_param(path: &str, key: &str, value: &str) -> Self {
        Self {
            path: path.to_string(),
            query: vec![(key.to_string(), value.to_string())],
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }

    /// Renders the navigable form, percent-encoding every key and value.
    pub fn render(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }
        let pairs: Vec<String> = self
            .query
            .iter()
            .map(|(key, value)| format!("{}={}", encode_component(key), encode_component(value)))
            .collect();
        format!("{}?{}", self.path, pairs.join("&"))
    }

    /// Parses a rendered route back into a path and decoded query pairs.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let (path, query_raw) = match raw.split_once('?') {
            Some((path, rest)) => (path, Some(rest)),
            None => (raw, None),
        };
        if path.is_empty() {
            return Err(DomainError::MalformedRoute("empty path".to_string()));
        }

        let mut query = Vec::new();
        if let Some(query_raw) = query_raw {
            for pair in query_raw.split('&') {
                let (key, value) = pair.split_once('=').ok_or_else(|| {
                    DomainError::MalformedRoute(format!("query pair without '=': {pair}"))
                })?;
                if key.is_empty() {
                    return Err(DomainError::MalformedRoute(format!(
                        "query pair with empty key: {pair}"
                    )));
                }
                query.push((decode_component(key)?, decode_component(value)?));
            }
        }

        Ok(Self {
            path: path.to_string(),
            query,
        })
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

pub fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, COMPONENT).to_string()
}

pub fn decode_component(raw: &str) -> Result<String, DomainError> {
    percent_decode_str(raw)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|_| DomainError::MalformedRoute(format!("query text is not utf-8: {raw}")))
}
