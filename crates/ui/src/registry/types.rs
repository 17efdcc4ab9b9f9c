//! Registry type definitions for component bindings.

use serde::{Deserialize, Serialize};

/// Renderer implementations the rewrite pass can attach to a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RendererKind {
    /// Raw SVG markup republished with responsive sizing injected.
    InlineSvg,
    /// Diagram source deferred to the client-side renderer.
    MermaidDiagram,
    /// Images upgraded with lazy loading and zoom affordances.
    ZoomableImage,
}

/// Binds a content tag name to a renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentBinding {
    /// Tag name as written in content (e.g., "Svg").
    pub name: String,
    /// Renderer attached to the tag.
    pub renderer: RendererKind,
}

/// The component registry consumed by the rewrite pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryConfig {
    /// Registered component bindings.
    pub components: Vec<ComponentBinding>,
}

impl RegistryConfig {
    /// Check if a tag name has a registered renderer.
    pub fn is_registered(&self, name: &str) -> bool {
        self.components.iter().any(|c| c.name == name)
    }

    /// Get the renderer for a tag name.
    pub fn renderer_for(&self, name: &str) -> Option<RendererKind> {
        self.components
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.renderer)
    }
}
