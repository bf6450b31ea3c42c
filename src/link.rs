//! Page URLs: a base URL plus a form-encoded query carrying the page number
//! and the caller's extra parameters.

use std::collections::BTreeMap;

/// Builds the query string for `page`.
///
/// `page` always comes first; extra parameters follow in key order. An extra
/// parameter named `page` is dropped so it cannot override the page number.
pub fn page_query(page: usize, params: &BTreeMap<String, String>) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    query.append_pair("page", &page.to_string());
    for (key, value) in params.iter().filter(|(k, _)| k.as_str() != "page") {
        query.append_pair(key, value);
    }
    query.finish()
}

/// Builds the full URL for `page` under `base`.
///
/// ```rust
/// use std::collections::BTreeMap;
/// use bubbletea_pagelist::link::page_url;
///
/// let mut params = BTreeMap::new();
/// params.insert("q".to_string(), "rust tui".to_string());
/// assert_eq!(page_url("/search", 3, &params), "/search?page=3&q=rust+tui");
/// ```
pub fn page_url(base: &str, page: usize, params: &BTreeMap<String, String>) -> String {
    let separator = if base.contains('?') { '&' } else { '?' };
    format!("{base}{separator}{}", page_query(page, params))
}
