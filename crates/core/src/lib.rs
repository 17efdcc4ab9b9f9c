#![deny(missing_docs)]
//! mdsite core: content compilation, frontmatter, slugs, search, and config.

/// Site configuration loaded from YAML.
pub mod config;
/// Content compilation to documents.
pub mod document;
/// Core error and location types.
pub mod error;
/// YAML frontmatter extraction and typed blog metadata.
pub mod frontmatter;
/// Search links and index building.
pub mod search;
/// Heading slug generation.
pub mod slug;

pub use config::{ConfigError, DocsCollection, ParseConfig, SiteConfig};
pub use document::{Document, Heading, ParseOptions, compile_document};
pub use error::{CoreError, SourceLocation};
pub use frontmatter::{
    FrontmatterError, FrontmatterExtraction, PostMeta, extract_frontmatter,
};
pub use search::{SearchEntry, SearchLink, build_search_index, static_links};
pub use slug::{Slugger, slugify};
