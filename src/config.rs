//! Page-list options.
//!
//! Options can be set with builder methods or parsed from a JSON options
//! object using camel-case option names:
//!
//! ```rust
//! use bubbletea_pagelist::config::{Config, Language, PaginationStyle};
//!
//! let config = Config::from_json(r#"{
//!     "paginationStyle": "allPagesShrink",
//!     "visiblePagesCount": 7,
//!     "language": "en-US",
//!     "urlParameters": { "sort": "name", "size": 20 }
//! }"#).unwrap();
//!
//! assert_eq!(config.pagination_style, PaginationStyle::AllPagesShrink);
//! assert_eq!(config.visible_pages_count, 7);
//! assert_eq!(config.language.load_more_label(), "Load more");
//! assert_eq!(config.url_parameters["size"], "20");
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{Error, Result};

/// How the page list is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaginationStyle {
    /// Every page is shown; nothing overflows.
    #[default]
    AllPages,
    /// A window of pages around the current one, with the rest behind `…`
    /// overflow controls and `<`/`>` navigation entries.
    AllPagesShrink,
}

impl PaginationStyle {
    /// The option name of this style.
    pub fn name(self) -> &'static str {
        match self {
            PaginationStyle::AllPages => "allPages",
            PaginationStyle::AllPagesShrink => "allPagesShrink",
        }
    }
}

impl FromStr for PaginationStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "allPages" => Ok(PaginationStyle::AllPages),
            "allPagesShrink" => Ok(PaginationStyle::AllPagesShrink),
            other => Err(Error::UnknownStyle(other.to_string())),
        }
    }
}

impl fmt::Display for PaginationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Locale of the control's labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// `uk-UA`
    #[default]
    Ukrainian,
    /// `ru-RU`
    Russian,
    /// `en-US`
    English,
}

impl Language {
    /// The locale key.
    pub fn code(self) -> &'static str {
        match self {
            Language::Ukrainian => "uk-UA",
            Language::Russian => "ru-RU",
            Language::English => "en-US",
        }
    }

    /// Label of the "load more" button.
    pub fn load_more_label(self) -> &'static str {
        match self {
            Language::Ukrainian => "Завантажити ще",
            Language::Russian => "Загрузить еще",
            Language::English => "Load more",
        }
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "uk-UA" => Ok(Language::Ukrainian),
            "ru-RU" => Ok(Language::Russian),
            "en-US" => Ok(Language::English),
            other => Err(Error::UnknownLanguage(other.to_string())),
        }
    }
}

/// Options for one page list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Page shown first (links mode; fetch mode always starts at page 1).
    pub current_page: usize,
    /// Extra query parameters added to every page URL.
    pub url_parameters: BTreeMap<String, String>,
    /// Ignore selection of pages that are already active or disabled.
    pub dont_load_active_or_disabled_page: bool,
    /// Layout style.
    pub pagination_style: PaginationStyle,
    /// Refit the window whenever the available width changes.
    pub pagination_style_flexible: bool,
    /// Visible page budget for [`PaginationStyle::AllPagesShrink`].
    pub visible_pages_count: usize,
    /// Name of the content target loaded pages are written to.
    pub data_element_selector: String,
    /// Label locale.
    pub language: Language,
    /// Show a "load more" button (fetch mode only).
    pub load_more_button: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            current_page: 1,
            url_parameters: BTreeMap::new(),
            dont_load_active_or_disabled_page: true,
            pagination_style: PaginationStyle::AllPages,
            pagination_style_flexible: false,
            visible_pages_count: 5,
            data_element_selector: "#pageData".to_string(),
            language: Language::Ukrainian,
            load_more_button: false,
        }
    }
}

impl Config {
    /// Creates options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a JSON options object. Missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawConfig = serde_json::from_str(json)?;
        raw.try_into()
    }

    /// Sets the layout style (builder pattern).
    pub fn with_style(mut self, style: PaginationStyle) -> Self {
        self.pagination_style = style;
        self
    }

    /// Enables or disables live reflow (builder pattern).
    pub fn with_flexible(mut self, flexible: bool) -> Self {
        self.pagination_style_flexible = flexible;
        self
    }

    /// Sets the visible page budget (builder pattern).
    pub fn with_visible_pages(mut self, count: usize) -> Self {
        self.visible_pages_count = count;
        self
    }

    /// Sets the first page shown (builder pattern).
    pub fn with_current_page(mut self, page: usize) -> Self {
        self.current_page = page;
        self
    }

    /// Adds an extra query parameter (builder pattern).
    pub fn with_url_parameter(mut self, key: &str, value: &str) -> Self {
        self.url_parameters
            .insert(key.to_string(), value.to_string());
        self
    }

    /// Sets the label locale (builder pattern).
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Shows or hides the "load more" button (builder pattern).
    pub fn with_load_more_button(mut self, enabled: bool) -> Self {
        self.load_more_button = enabled;
        self
    }

    /// Checks the options that cannot be clamped into something sensible.
    pub fn validate(&self) -> Result<()> {
        if self.visible_pages_count == 0 {
            return Err(Error::InvalidVisibleCount);
        }
        Ok(())
    }

    /// Whether live reflow applies: only the shrink style reflows.
    pub fn reflows(&self) -> bool {
        self.pagination_style == PaginationStyle::AllPagesShrink && self.pagination_style_flexible
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawConfig {
    current_page: usize,
    url_parameters: BTreeMap<String, serde_json::Value>,
    dont_load_active_or_disabled_page: bool,
    pagination_style: String,
    pagination_style_flexible: bool,
    visible_pages_count: usize,
    data_element_selector: String,
    language: String,
    load_more_button: bool,
}

impl Default for RawConfig {
    fn default() -> Self {
        let d = Config::default();
        Self {
            current_page: d.current_page,
            url_parameters: BTreeMap::new(),
            dont_load_active_or_disabled_page: d.dont_load_active_or_disabled_page,
            pagination_style: d.pagination_style.name().to_string(),
            pagination_style_flexible: d.pagination_style_flexible,
            visible_pages_count: d.visible_pages_count,
            data_element_selector: d.data_element_selector,
            language: d.language.code().to_string(),
            load_more_button: d.load_more_button,
        }
    }
}

impl TryFrom<RawConfig> for Config {
    type Error = Error;

    fn try_from(raw: RawConfig) -> Result<Self> {
        let url_parameters = raw
            .url_parameters
            .into_iter()
            .map(|(k, v)| {
                let v = match v {
                    serde_json::Value::String(s) => s,
                    serde_json::Value::Null => String::new(),
                    other => other.to_string(),
                };
                (k, v)
            })
            .collect();

        let config = Config {
            current_page: raw.current_page,
            url_parameters,
            dont_load_active_or_disabled_page: raw.dont_load_active_or_disabled_page,
            pagination_style: raw.pagination_style.parse()?,
            pagination_style_flexible: raw.pagination_style_flexible,
            visible_pages_count: raw.visible_pages_count,
            data_element_selector: raw.data_element_selector,
            language: raw.language.parse()?,
            load_more_button: raw.load_more_button,
        };
        config.validate()?;
        Ok(config)
    }
}
