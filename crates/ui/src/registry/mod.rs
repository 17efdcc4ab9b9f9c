//! Component registry mapping content tags to renderers.

/// Default registry wiring for the site's components.
pub mod defaults;
/// Registry type definitions.
pub mod types;

pub use defaults::default_registry;
pub use types::{ComponentBinding, RegistryConfig, RendererKind};
