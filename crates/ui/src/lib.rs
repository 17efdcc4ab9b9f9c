#![deny(missing_docs)]
//! mdsite rendering layer: component registry, renderers, layout, and build.

/// Parallel page build over caller-provided sources.
pub mod build;
/// Component renderers (inline SVG, diagram blocks).
pub mod components;
/// Shared root layout and the home page.
pub mod layout;
/// Component registry for tag/renderer mappings.
pub mod registry;
/// Streaming component expansion over compiled HTML.
pub mod rewrite;

pub use build::{BuildReport, BuildStats, PageInput, PageResult, RenderedPage, build_pages};
pub use components::svg::{InlineSvg, RESPONSIVE_STYLE, inject_responsive_style};
pub use layout::{RootLayout, home_page};
pub use registry::{ComponentBinding, RegistryConfig, RendererKind, default_registry};
pub use rewrite::{RewriteError, rewrite_components};
