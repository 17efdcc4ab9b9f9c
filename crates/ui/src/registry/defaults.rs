//! Default registry wiring for the site's MDX components.

use super::types::{ComponentBinding, RegistryConfig, RendererKind};

/// Creates the default component registry.
///
/// This registry includes:
/// - `Svg`: raw SVG markup republished with responsive sizing
/// - `Mermaid`: diagram source deferred to the client-side renderer
/// - `img`: plain images upgraded with lazy loading and zoom affordances
///
/// # Example
///
/// ```
/// use mdsite_ui::registry::defaults::default_registry;
/// use mdsite_ui::registry::RendererKind;
///
/// let registry = default_registry();
/// assert!(registry.is_registered("Svg"));
/// assert_eq!(registry.renderer_for("Mermaid"), Some(RendererKind::MermaidDiagram));
/// ```
pub fn default_registry() -> RegistryConfig {
    RegistryConfig {
        components: vec![
            ComponentBinding {
                name: "Svg".to_string(),
                renderer: RendererKind::InlineSvg,
            },
            ComponentBinding {
                name: "Mermaid".to_string(),
                renderer: RendererKind::MermaidDiagram,
            },
            ComponentBinding {
                name: "img".to_string(),
                renderer: RendererKind::ZoomableImage,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_registry_binds_svg() {
        let registry = default_registry();
        assert_eq!(registry.renderer_for("Svg"), Some(RendererKind::InlineSvg));
    }

    #[test]
    fn default_registry_binds_diagram_and_images() {
        let registry = default_registry();
        assert_eq!(
            registry.renderer_for("Mermaid"),
            Some(RendererKind::MermaidDiagram)
        );
        assert_eq!(
            registry.renderer_for("img"),
            Some(RendererKind::ZoomableImage)
        );
        assert!(!registry.is_registered("ImageZoom"));
    }
}
