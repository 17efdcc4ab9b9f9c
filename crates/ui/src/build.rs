//! Parallel page build over caller-provided sources.
//!
//! The build never touches the filesystem: callers hand in `(id, source)`
//! pairs and receive rendered pages, per-page errors, statistics, and the
//! search index for the batch.

use crate::layout::RootLayout;
use crate::registry::RegistryConfig;
use crate::rewrite::rewrite_components;
use mdsite_core::{Document, ParseOptions, SearchEntry, SiteConfig, build_search_index, compile_document};
use rayon::prelude::*;

/// A single content file to build.
#[derive(Debug, Clone)]
pub struct PageInput {
    /// Page identifier (typically the content-relative slug).
    pub id: String,
    /// MDX-flavored source content.
    pub source: String,
}

impl PageInput {
    /// Creates an input from an identifier and its source.
    pub fn new(id: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
        }
    }
}

/// A fully rendered page.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    /// Final HTML document.
    pub html: String,
    /// Compiled document the page was rendered from.
    pub document: Document,
}

/// Build outcome for one page.
#[derive(Debug, Clone)]
pub struct PageResult {
    /// Identifier matching the input.
    pub id: String,
    /// Rendered page (present on success).
    pub page: Option<RenderedPage>,
    /// Error message (present on failure).
    pub error: Option<String>,
}

/// Statistics for a batch build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Total number of pages processed.
    pub total: usize,
    /// Number of successfully rendered pages.
    pub succeeded: usize,
    /// Number of failed pages.
    pub failed: usize,
}

/// Result of building a batch of pages.
#[derive(Debug)]
pub struct BuildReport {
    /// Individual results for each input, in input order.
    pub results: Vec<PageResult>,
    /// Aggregate statistics.
    pub stats: BuildStats,
    /// Search entries for the successfully built, non-draft pages.
    pub search_index: Vec<SearchEntry>,
}

/// Builds every input page: compile, expand components, wrap in the layout.
///
/// Pages build in parallel. A failing page records its error string and
/// never aborts the batch.
pub fn build_pages(
    inputs: &[PageInput],
    config: &SiteConfig,
    registry: &RegistryConfig,
) -> BuildReport {
    let layout = RootLayout::from_config(config);
    let options = config.parse.to_options();

    let results: Vec<PageResult> = inputs
        .par_iter()
        .map(|input| match build_page(input, &options, registry, &layout) {
            Ok(page) => PageResult {
                id: input.id.clone(),
                page: Some(page),
                error: None,
            },
            Err(error) => {
                log::debug!("page {} failed: {error}", input.id);
                PageResult {
                    id: input.id.clone(),
                    page: None,
                    error: Some(error),
                }
            }
        })
        .collect();

    let mut stats = BuildStats {
        total: results.len(),
        ..BuildStats::default()
    };
    let mut indexed = Vec::new();
    for result in &results {
        match &result.page {
            Some(page) => {
                stats.succeeded += 1;
                indexed.push((result.id.clone(), page.document.clone()));
            }
            None => stats.failed += 1,
        }
    }

    BuildReport {
        search_index: build_search_index(&indexed),
        results,
        stats,
    }
}

fn build_page(
    input: &PageInput,
    options: &ParseOptions,
    registry: &RegistryConfig,
    layout: &RootLayout,
) -> Result<RenderedPage, String> {
    let document = compile_document(&input.source, options).map_err(|err| err.to_string())?;
    let body = rewrite_components(&document.html, registry).map_err(|err| err.to_string())?;
    let html = layout.render(&body);
    Ok(RenderedPage { html, document })
}
