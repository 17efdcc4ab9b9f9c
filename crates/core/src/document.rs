//! Content compilation: one MDX-flavored source file to a [`Document`].

use crate::error::{CoreError, SourceLocation};
use crate::frontmatter::{FrontmatterExtraction, PostMeta, extract_frontmatter};
use crate::slug::Slugger;
use markdown::mdast::Node;
use markdown::message::{Message, Place};
use serde_json::Value as JsonValue;

/// Parser options for content compilation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseOptions {
    /// Enable GitHub Flavored Markdown constructs.
    pub gfm: bool,
    /// Enable math constructs ($inline$ and $$block$$).
    pub math: bool,
    /// Pass raw HTML (and component tags) through to the output.
    pub raw_html: bool,
}

impl ParseOptions {
    /// Content defaults: GFM on, raw HTML on so component tags reach the
    /// rewrite pass untouched.
    pub const fn mdx() -> Self {
        Self {
            gfm: true,
            math: false,
            raw_html: true,
        }
    }

    /// Convert to markdown-rs `ParseOptions`.
    ///
    /// Frontmatter is stripped before parsing, so the frontmatter construct
    /// stays off and a body that opens with `---` reads as a thematic break.
    fn to_markdown(self) -> markdown::ParseOptions {
        let mut constructs = markdown::Constructs {
            html_flow: self.raw_html,
            html_text: self.raw_html,
            ..Default::default()
        };

        if self.gfm {
            constructs.gfm_autolink_literal = true;
            constructs.gfm_footnote_definition = true;
            constructs.gfm_label_start_footnote = true;
            constructs.gfm_strikethrough = true;
            constructs.gfm_table = true;
            constructs.gfm_task_list_item = true;
        }

        if self.math {
            constructs.math_flow = true;
            constructs.math_text = true;
        }

        markdown::ParseOptions {
            constructs,
            math_text_single_dollar: self.math,
            ..markdown::ParseOptions::default()
        }
    }

    fn to_compile(self) -> markdown::CompileOptions {
        markdown::CompileOptions {
            allow_dangerous_html: self.raw_html,
            ..markdown::CompileOptions::default()
        }
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::mdx()
    }
}

/// A heading collected from the document body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// The heading level (1-6).
    pub depth: u8,
    /// The URL-safe anchor slug, unique within the document.
    pub slug: String,
    /// The text content of the heading.
    pub text: String,
}

/// A compiled content file.
#[derive(Debug, Clone)]
pub struct Document {
    /// Typed blog metadata from the frontmatter.
    pub meta: PostMeta,
    /// Raw frontmatter as a JSON value.
    pub frontmatter: JsonValue,
    /// Headings in document order.
    pub headings: Vec<Heading>,
    /// Compiled HTML body with raw component tags preserved.
    pub html: String,
}

/// Compiles a content file to a [`Document`].
///
/// Frontmatter is extracted and stripped, headings are collected from the
/// syntax tree with unique slugs, and the body is compiled to HTML with raw
/// HTML passthrough so the component rewrite pass sees the author's tags.
pub fn compile_document(source: &str, options: &ParseOptions) -> Result<Document, CoreError> {
    let FrontmatterExtraction {
        value,
        meta,
        body_start,
    } = extract_frontmatter(source)?;
    let body = &source[body_start..];

    let parse = options.to_markdown();
    let root = markdown::to_mdast(body, &parse).map_err(markdown_error)?;

    let mut slugger = Slugger::new();
    let mut headings = Vec::new();
    collect_headings(&root, &mut slugger, &mut headings);

    let compile_options = markdown::Options {
        parse,
        compile: options.to_compile(),
    };
    let html = markdown::to_html_with_options(body, &compile_options).map_err(markdown_error)?;

    Ok(Document {
        meta,
        frontmatter: value,
        headings,
        html,
    })
}

fn collect_headings(node: &Node, slugger: &mut Slugger, out: &mut Vec<Heading>) {
    if let Node::Heading(heading) = node {
        let text = inline_text(&heading.children);
        out.push(Heading {
            depth: heading.depth,
            slug: slugger.next_slug(&text),
            text,
        });
        return;
    }
    if let Some(children) = node.children() {
        for child in children {
            collect_headings(child, slugger, out);
        }
    }
}

/// Extracts the plain text of inline nodes (for slugs and search entries).
fn inline_text(nodes: &[Node]) -> String {
    let mut text = String::new();
    for node in nodes {
        push_inline_text(node, &mut text);
    }
    text.trim().to_string()
}

fn push_inline_text(node: &Node, buffer: &mut String) {
    match node {
        Node::Text(t) => buffer.push_str(&t.value),
        Node::InlineCode(code) => buffer.push_str(&code.value),
        _ => {
            if let Some(children) = node.children() {
                for child in children {
                    push_inline_text(child, buffer);
                }
            }
        }
    }
}

fn markdown_error(message: Message) -> CoreError {
    let location = match &message.place {
        Some(place) => match place.as_ref() {
            Place::Point(point) => SourceLocation::new(point.line, point.column),
            Place::Position(position) => {
                SourceLocation::new(position.start.line, position.start.column)
            }
        },
        None => SourceLocation::new(1, 1),
    };
    CoreError::Markdown {
        message: message.to_string(),
        location,
    }
}
