//! Component renderers invoked by the rewrite pass.

/// Client-deferred diagram blocks.
pub mod mermaid;
/// Inline SVG with responsive sizing.
pub mod svg;
