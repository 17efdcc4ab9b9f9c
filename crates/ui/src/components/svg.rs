//! Inline SVG rendering.
//!
//! Content authors hand this component a complete `<svg>...</svg>` fragment
//! as a string. The renderer injects a sizing style into the first opening
//! tag so the image never overflows its container, then publishes the result
//! as live markup. The input is trusted author content: nothing here
//! sanitizes or validates it, and malformed markup passes through verbatim.

use std::borrow::Cow;

/// Style declaration injected into the first `<svg>` opening tag.
pub const RESPONSIVE_STYLE: &str = "max-width: 100%; height: auto;";

/// Inserts a `style` attribute fixing responsive sizing into the first
/// `<svg ...>` opening tag.
///
/// The attribute lands immediately before the `>` that closes the first
/// `<svg` prefix; a truncated opening tag extends to the end of the input.
/// Later `<svg>` tags are left alone, and input without an `<svg` substring
/// is returned unchanged.
///
/// ```
/// use mdsite_ui::components::svg::inject_responsive_style;
///
/// let styled = inject_responsive_style(r#"<svg viewBox="0 0 10 10"><rect/></svg>"#);
/// assert_eq!(
///     styled,
///     r#"<svg viewBox="0 0 10 10" style="max-width: 100%; height: auto;"><rect/></svg>"#
/// );
/// ```
pub fn inject_responsive_style(source: &str) -> Cow<'_, str> {
    let Some(open) = source.find("<svg") else {
        return Cow::Borrowed(source);
    };
    let insert_at = source[open..]
        .find('>')
        .map_or(source.len(), |close| open + close);

    let mut styled = String::with_capacity(source.len() + RESPONSIVE_STYLE.len() + 10);
    styled.push_str(&source[..insert_at]);
    styled.push_str(" style=\"");
    styled.push_str(RESPONSIVE_STYLE);
    styled.push('"');
    styled.push_str(&source[insert_at..]);
    Cow::Owned(styled)
}

/// A mounted inline-SVG instance.
///
/// Owns the container content it renders into. Every observed change of the
/// `source` input rederives the styled markup from the latest input alone
/// and replaces the container content; an empty input leaves whatever was
/// last rendered in place. Dropping the instance unmounts it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineSvg {
    html: String,
}

impl InlineSvg {
    /// Mounts an instance with an empty container.
    pub fn mount() -> Self {
        Self::default()
    }

    /// Observes a change of the `source` input and rerenders.
    pub fn set_source(&mut self, source: &str) {
        if source.is_empty() {
            return;
        }
        self.html = inject_responsive_style(source).into_owned();
    }

    /// Current container content.
    pub fn html(&self) -> &str {
        &self.html
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn injects_style_into_opening_tag() {
        let styled = inject_responsive_style(r#"<svg viewBox="0 0 10 10"><rect/></svg>"#);
        assert_eq!(
            styled,
            r#"<svg viewBox="0 0 10 10" style="max-width: 100%; height: auto;"><rect/></svg>"#
        );
    }

    #[test]
    fn remainder_is_byte_identical() {
        let source = r#"prefix <svg width="4"><circle r="1"/></svg> suffix"#;
        let styled = inject_responsive_style(source);
        assert!(styled.starts_with(r#"prefix <svg width="4""#));
        assert!(styled.ends_with(r#"><circle r="1"/></svg> suffix"#));
    }

    #[test]
    fn markup_without_svg_passes_through_borrowed() {
        let source = "<div>no image here</div>";
        let styled = inject_responsive_style(source);
        assert!(matches!(styled, Cow::Borrowed(_)));
        assert_eq!(styled, source);
    }

    #[test]
    fn only_first_tag_is_augmented() {
        let styled = inject_responsive_style("<svg width=\"1\"></svg><svg width=\"2\"></svg>");
        assert_eq!(
            styled,
            "<svg width=\"1\" style=\"max-width: 100%; height: auto;\"></svg><svg width=\"2\"></svg>"
        );
    }

    #[test]
    fn bare_tag_without_attributes() {
        assert_eq!(
            inject_responsive_style("<svg></svg>"),
            "<svg style=\"max-width: 100%; height: auto;\"></svg>"
        );
    }

    #[test]
    fn truncated_opening_tag_gets_style_at_end() {
        assert_eq!(
            inject_responsive_style("<svg width=\"3\""),
            "<svg width=\"3\" style=\"max-width: 100%; height: auto;\""
        );
    }

    #[test]
    fn derivation_is_stable_over_repeated_input() {
        let source = "<svg><rect/></svg>";
        let first = inject_responsive_style(source).into_owned();
        let second = inject_responsive_style(source).into_owned();
        assert_eq!(first, second);
    }

    #[test]
    fn mounted_instance_starts_empty() {
        let svg = InlineSvg::mount();
        assert_eq!(svg.html(), "");
    }

    #[test]
    fn mounted_instance_tracks_source_changes() {
        let mut svg = InlineSvg::mount();
        svg.set_source("<svg id=\"a\"></svg>");
        assert_eq!(
            svg.html(),
            "<svg id=\"a\" style=\"max-width: 100%; height: auto;\"></svg>"
        );

        svg.set_source("<svg id=\"b\"></svg>");
        assert_eq!(
            svg.html(),
            "<svg id=\"b\" style=\"max-width: 100%; height: auto;\"></svg>"
        );
    }

    #[test]
    fn empty_source_keeps_previous_content() {
        let mut svg = InlineSvg::mount();
        svg.set_source("<svg></svg>");
        let before = svg.html().to_string();

        svg.set_source("");
        assert_eq!(svg.html(), before);
    }

    #[test]
    fn malformed_markup_is_not_validated() {
        let mut svg = InlineSvg::mount();
        svg.set_source("<svg><unclosed");
        assert_eq!(
            svg.html(),
            "<svg style=\"max-width: 100%; height: auto;\"><unclosed"
        );
    }
}
