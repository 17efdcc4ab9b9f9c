//! Streaming component expansion over compiled HTML.
//!
//! Runs a lol_html pass that replaces registered component tags with their
//! rendered markup. Component attribute values are trusted author content
//! and are injected without sanitization. Component tags must be explicitly
//! closed (`<Svg source="..."></Svg>`): HTML has no self-closing custom
//! elements, so a bare `<Svg ... />` would swallow the rest of the page as
//! element content.

use crate::components::mermaid::diagram_block;
use crate::components::svg::InlineSvg;
use crate::registry::{RegistryConfig, RendererKind};
use lol_html::html_content::{ContentType, Element};
use lol_html::{ElementContentHandlers, HandlerResult, RewriteStrSettings, Selector};
use std::borrow::Cow;
use thiserror::Error;

/// Errors surfaced by the rewrite pass.
#[derive(Debug, Error)]
pub enum RewriteError {
    /// The underlying streaming rewriter failed.
    #[error("Component rewrite error: {0}")]
    Rewrite(String),
}

/// Expands registered component tags in compiled HTML.
///
/// Unregistered capitalized tags are left untouched and logged.
pub fn rewrite_components(html: &str, registry: &RegistryConfig) -> Result<String, RewriteError> {
    warn_unregistered_components(html, registry);

    lol_html::rewrite_str(
        html,
        RewriteStrSettings {
            element_content_handlers: registry_handlers(registry),
            ..RewriteStrSettings::default()
        },
    )
    .map_err(|err| RewriteError::Rewrite(err.to_string()))
}

fn registry_handlers(
    registry: &RegistryConfig,
) -> Vec<(Cow<'static, Selector>, ElementContentHandlers<'static>)> {
    let mut handlers = Vec::with_capacity(registry.components.len());

    for binding in &registry.components {
        let selector: Selector = match binding.name.parse() {
            Ok(selector) => selector,
            Err(err) => {
                log::warn!(
                    "skipping component {:?}: invalid selector ({err})",
                    binding.name
                );
                continue;
            }
        };

        let element_handlers = match binding.renderer {
            RendererKind::InlineSvg => ElementContentHandlers::default().element(expand_svg),
            RendererKind::MermaidDiagram => ElementContentHandlers::default().element(expand_mermaid),
            RendererKind::ZoomableImage => ElementContentHandlers::default().element(upgrade_image),
        };

        handlers.push((Cow::Owned(selector), element_handlers));
    }

    handlers
}

/// Replaces an `<Svg>` component with a container holding the author's
/// markup, responsive sizing injected. Elements without a `source` attribute
/// are left alone (plain inline `<svg>` drawings also match the selector).
fn expand_svg(el: &mut Element) -> HandlerResult {
    let Some(source) = el.get_attribute("source") else {
        return Ok(());
    };

    let mut svg = InlineSvg::mount();
    svg.set_source(&source);
    el.replace(&format!("<div>{}</div>", svg.html()), ContentType::Html);
    Ok(())
}

fn expand_mermaid(el: &mut Element) -> HandlerResult {
    let chart = el.get_attribute("chart").unwrap_or_default();
    el.replace(&diagram_block(&chart), ContentType::Html);
    Ok(())
}

fn upgrade_image(el: &mut Element) -> HandlerResult {
    if el.get_attribute("loading").is_none() {
        el.set_attribute("loading", "lazy")?;
    }
    el.set_attribute("data-zoomable", "")?;
    Ok(())
}

/// Logs capitalized tags that look like component invocations but have no
/// registered renderer.
fn warn_unregistered_components(html: &str, registry: &RegistryConfig) {
    let mut rest = html;
    while let Some(pos) = rest.find('<') {
        rest = &rest[pos + 1..];
        let name_len = rest
            .bytes()
            .take_while(|b| b.is_ascii_alphanumeric())
            .count();
        if name_len == 0 {
            continue;
        }
        let name = &rest[..name_len];
        if name.starts_with(|c: char| c.is_ascii_uppercase()) && !registry.is_registered(name) {
            log::warn!("unregistered component tag: <{name}>");
        }
        rest = &rest[name_len..];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::default_registry;

    fn rewrite(html: &str) -> String {
        rewrite_components(html, &default_registry()).expect("rewrite should succeed")
    }

    #[test]
    fn expands_svg_component_into_styled_container() {
        let html = "<Svg source='<svg viewBox=\"0 0 4 4\"><rect/></svg>'></Svg>";
        assert_eq!(
            rewrite(html),
            "<div><svg viewBox=\"0 0 4 4\" style=\"max-width: 100%; height: auto;\"><rect/></svg></div>"
        );
    }

    #[test]
    fn svg_component_with_empty_source_renders_empty_container() {
        assert_eq!(rewrite("<Svg source=''></Svg>"), "<div></div>");
    }

    #[test]
    fn plain_inline_svg_is_left_alone() {
        let html = "<svg width=\"8\"><rect/></svg>";
        assert_eq!(rewrite(html), html);
    }

    #[test]
    fn expands_mermaid_component() {
        let html = "<Mermaid chart=\"graph TD; A-->B\"></Mermaid>";
        assert_eq!(
            rewrite(html),
            "<pre class=\"mermaid\">graph TD; A--&gt;B</pre>"
        );
    }

    #[test]
    fn upgrades_plain_images() {
        let html = "<img src=\"/hero.png\" alt=\"hero\">";
        let out = rewrite(html);
        assert!(out.contains("loading=\"lazy\""), "{out}");
        assert!(out.contains("data-zoomable"), "{out}");
    }

    #[test]
    fn existing_loading_attribute_is_kept() {
        let out = rewrite("<img src=\"/a.png\" loading=\"eager\">");
        assert!(out.contains("loading=\"eager\""), "{out}");
        assert!(!out.contains("loading=\"lazy\""), "{out}");
    }

    #[test]
    fn unregistered_component_passes_through() {
        let html = "<p>before</p><Callout kind=\"tip\">text</Callout>";
        assert_eq!(rewrite(html), html);
    }

    #[test]
    fn surrounding_markup_is_untouched() {
        let html = "<p>before</p><Svg source='<svg></svg>'></Svg><p>after</p>";
        let out = rewrite(html);
        assert!(out.starts_with("<p>before</p><div>"), "{out}");
        assert!(out.ends_with("</div><p>after</p>"), "{out}");
    }
}
