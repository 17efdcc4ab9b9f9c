//! Diagram blocks rendered on the client.
//!
//! Diagram sources are emitted as `<pre class="mermaid">` blocks for the
//! client-side diagram library to lay out; no layout happens at build time.

use html_escape::encode_text;

/// Renders a diagram definition as a client-rendered block.
pub fn diagram_block(chart: &str) -> String {
    format!("<pre class=\"mermaid\">{}</pre>", encode_text(chart))
}
