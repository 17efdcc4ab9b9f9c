//! End-to-end pipeline tests: MDX-flavored source in, finished page out.

use mdsite_core::SiteConfig;
use mdsite_ui::registry::default_registry;
use mdsite_ui::rewrite::rewrite_components;
use mdsite_ui::{PageInput, build_pages};
use once_cell::sync::Lazy;

static CONFIG: Lazy<SiteConfig> = Lazy::new(SiteConfig::default);

const POST: &str = r#"---
title: Drawing with SVG
date: 2024-05-04
tags:
  - graphics
---

# Drawing with SVG

Inline vector art stays sharp at any size.

<Svg source='<svg viewBox="0 0 10 10"><rect/></svg>'></Svg>

## Diagrams

<Mermaid chart="graph TD; A-->B"></Mermaid>
"#;

fn build_one(id: &str, source: &str) -> String {
    let report = build_pages(
        &[PageInput::new(id, source)],
        &CONFIG,
        &default_registry(),
    );
    assert_eq!(report.stats.failed, 0, "{:?}", report.results[0].error);
    report.results[0]
        .page
        .as_ref()
        .expect("page should render")
        .html
        .clone()
}

#[test]
fn renders_a_post_end_to_end() {
    let html = build_one("drawing-with-svg", POST);

    // Document shell from the layout
    assert!(html.starts_with("<!DOCTYPE html><html lang=\"en\">"));
    assert!(html.contains("<title>Sven</title>"));
    assert!(html.contains("<a href=\"/blog\">Blog</a>"));

    // Compiled body
    assert!(html.contains("<h1>Drawing with SVG</h1>"));
    assert!(html.contains("Inline vector art stays sharp at any size."));

    // Components expanded
    assert!(html.contains(
        "<div><svg viewBox=\"0 0 10 10\" style=\"max-width: 100%; height: auto;\"><rect/></svg></div>"
    ));
    assert!(html.contains("<pre class=\"mermaid\">graph TD; A--&gt;B</pre>"));

    // Frontmatter never leaks into the page
    assert!(!html.contains("title: Drawing"));
}

#[test]
fn search_index_tracks_the_post() {
    let report = build_pages(
        &[PageInput::new("drawing-with-svg", POST)],
        &CONFIG,
        &default_registry(),
    );

    let titles: Vec<&str> = report
        .search_index
        .iter()
        .map(|entry| entry.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Drawing with SVG", "Drawing with SVG", "Diagrams"]);
    assert_eq!(
        report.search_index[2].anchor.as_deref(),
        Some("diagrams")
    );
}

#[test]
fn component_rewrite_snapshot() {
    let fragment = "<Svg source='<svg viewBox=\"0 0 4 4\"><circle r=\"1\"/></svg>'></Svg>";
    let out = rewrite_components(fragment, &default_registry()).expect("rewrite");
    insta::assert_snapshot!(out, @r#"<div><svg viewBox="0 0 4 4" style="max-width: 100%; height: auto;"><circle r="1"/></svg></div>"#);
}

#[test]
fn page_without_components_is_plain_markdown() {
    let html = build_one("notes", "# Notes\n\nJust text.\n");
    assert!(html.contains("<h1>Notes</h1>"));
    assert!(html.contains("<p>Just text.</p>"));
    assert!(!html.contains("<div><svg"));
}
