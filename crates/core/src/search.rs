//! Search navigation links and the page-level search index.

use crate::document::Document;
use serde::{Deserialize, Serialize};

/// A fixed navigation link surfaced in the site search dialog and header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchLink {
    /// Visible label.
    pub label: String,
    /// Link target.
    pub href: String,
}

impl SearchLink {
    /// Creates a link.
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// Built-in links shown even before any page is indexed.
pub fn static_links() -> Vec<SearchLink> {
    vec![
        SearchLink::new("Home", "/"),
        SearchLink::new("Blog", "/blog"),
    ]
}

/// One searchable target: a page, or a heading anchor within a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchEntry {
    /// Display title (page title or heading text).
    pub title: String,
    /// Page URL.
    pub url: String,
    /// Anchor slug for heading entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor: Option<String>,
}

/// Maximum heading depth indexed per page.
const MAX_INDEXED_DEPTH: u8 = 3;

/// Builds the search index for a set of built pages.
///
/// Each page contributes one title entry plus one anchored entry per heading
/// of depth <= 3. Draft pages are skipped entirely.
pub fn build_search_index(pages: &[(String, Document)]) -> Vec<SearchEntry> {
    let mut entries = Vec::new();

    for (slug, doc) in pages {
        if doc.meta.draft {
            continue;
        }

        let title = doc.meta.title.clone().unwrap_or_else(|| slug.clone());
        let url = format!("/blog/{slug}");
        entries.push(SearchEntry {
            title,
            url: url.clone(),
            anchor: None,
        });

        for heading in &doc.headings {
            if heading.depth > MAX_INDEXED_DEPTH {
                continue;
            }
            entries.push(SearchEntry {
                title: heading.text.clone(),
                url: url.clone(),
                anchor: Some(heading.slug.clone()),
            });
        }
    }

    entries
}
