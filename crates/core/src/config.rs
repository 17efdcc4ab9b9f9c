//! Site configuration loaded from a YAML document.

use crate::document::ParseOptions;
use crate::search::{self, SearchLink};
use serde::Deserialize;
use thiserror::Error;

/// Errors emitted while reading the site configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The YAML document failed to parse or did not fit the schema.
    #[error("Config parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Content collection location.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DocsCollection {
    /// Directory holding the collection's content files.
    pub dir: String,
}

impl Default for DocsCollection {
    fn default() -> Self {
        Self {
            dir: "content/blog".to_string(),
        }
    }
}

/// Markdown parsing toggles, mirroring [`ParseOptions`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ParseConfig {
    /// Enable GitHub Flavored Markdown constructs.
    pub gfm: bool,
    /// Enable math constructs.
    pub math: bool,
    /// Pass raw HTML and component tags through to the rewrite pass.
    #[serde(alias = "rawHtml")]
    pub raw_html: bool,
}

impl Default for ParseConfig {
    fn default() -> Self {
        let ParseOptions {
            gfm,
            math,
            raw_html,
        } = ParseOptions::mdx();
        Self {
            gfm,
            math,
            raw_html,
        }
    }
}

impl ParseConfig {
    /// Convert to the compiler's [`ParseOptions`].
    pub fn to_options(self) -> ParseOptions {
        ParseOptions {
            gfm: self.gfm,
            math: self.math,
            raw_html: self.raw_html,
        }
    }
}

/// Top-level site configuration with full defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site title used by the layout and home page.
    pub title: String,
    /// `lang` attribute of the document element.
    pub lang: String,
    /// Content collection settings.
    pub docs: DocsCollection,
    /// Markdown parsing toggles.
    pub parse: ParseConfig,
    /// Navigation links surfaced in search and the header.
    #[serde(alias = "searchLinks")]
    pub search_links: Vec<SearchLink>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Sven".to_string(),
            lang: "en".to_string(),
            docs: DocsCollection::default(),
            parse: ParseConfig::default(),
            search_links: search::static_links(),
        }
    }
}

impl SiteConfig {
    /// Parses a configuration from YAML; an empty document yields defaults.
    pub fn from_yaml(input: &str) -> Result<Self, ConfigError> {
        if input.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(input)?)
    }
}
