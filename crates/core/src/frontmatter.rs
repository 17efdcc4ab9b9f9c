use serde::Deserialize;
use serde_json::Value as JsonValue;
use thiserror::Error;

/// Typed view of the blog fields a post commonly carries.
///
/// Unknown keys stay available through the raw JSON value on
/// [`FrontmatterExtraction`]; this struct only lifts the fields the layout
/// and search index care about.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PostMeta {
    /// Page title shown in listings and the search index.
    pub title: Option<String>,
    /// Short summary for listings.
    pub description: Option<String>,
    /// Publication date as written by the author (not parsed).
    pub date: Option<String>,
    /// Draft posts are rendered but excluded from the search index.
    pub draft: bool,
    /// Freeform tag list.
    pub tags: Vec<String>,
}

/// Result returned after splitting a content file into frontmatter and body.
#[derive(Debug)]
pub struct FrontmatterExtraction {
    /// Parsed frontmatter as a JSON value (empty object when absent).
    pub value: JsonValue,
    /// Typed blog fields extracted from the mapping.
    pub meta: PostMeta,
    /// Byte offset inside the original input where the body begins.
    pub body_start: usize,
}

impl FrontmatterExtraction {
    fn empty() -> Self {
        Self {
            value: JsonValue::Object(Default::default()),
            meta: PostMeta::default(),
            body_start: 0,
        }
    }
}

/// Errors emitted while locating or parsing frontmatter.
#[derive(Debug, Error)]
pub enum FrontmatterError {
    /// Unclosed YAML fence (e.g., missing terminating `---`).
    #[error("Unterminated YAML frontmatter block: expected closing '---'")]
    Unterminated,
    /// YAML failed to parse, or the mapping did not fit the typed fields.
    #[error("Frontmatter parse error: {0}")]
    Parse(String),
    /// Top-level YAML node was not a mapping.
    #[error("Frontmatter must be a YAML mapping at the top level")]
    InvalidRootType,
}

/// Extracts YAML frontmatter from an input document.
///
/// Blank lines and a UTF-8 BOM before the opening fence are tolerated.
/// `body_start` always indexes into the original input.
pub fn extract_frontmatter(input: &str) -> Result<FrontmatterExtraction, FrontmatterError> {
    let Some((block, body_start)) = locate_block(input)? else {
        return Ok(FrontmatterExtraction::empty());
    };

    let value = parse_block(block)?;
    let meta = PostMeta::deserialize(&value).map_err(|err| FrontmatterError::Parse(err.to_string()))?;
    Ok(FrontmatterExtraction {
        value,
        meta,
        body_start,
    })
}

fn parse_block(block: &str) -> Result<JsonValue, FrontmatterError> {
    if block.trim().is_empty() {
        return Ok(JsonValue::Object(Default::default()));
    }

    let yaml: serde_yaml::Value =
        serde_yaml::from_str(block).map_err(|err| FrontmatterError::Parse(err.to_string()))?;
    let json =
        serde_json::to_value(yaml).map_err(|err| FrontmatterError::Parse(err.to_string()))?;

    match json {
        JsonValue::Null => Ok(JsonValue::Object(Default::default())),
        JsonValue::Object(_) => Ok(json),
        _ => Err(FrontmatterError::InvalidRootType),
    }
}

fn locate_block(input: &str) -> Result<Option<(&str, usize)>, FrontmatterError> {
    let (text, bom_len) = strip_bom(input);

    let mut offset = 0;
    let block_start = loop {
        let Some((line, next)) = line_span(text, offset) else {
            return Ok(None);
        };
        if line.trim().is_empty() {
            offset = next;
            continue;
        }
        if is_fence(line) {
            break next;
        }
        return Ok(None);
    };

    let mut cursor = block_start;
    loop {
        let Some((line, next)) = line_span(text, cursor) else {
            return Err(FrontmatterError::Unterminated);
        };
        if is_fence(line) {
            let block = text[block_start..cursor].trim_end_matches(['\r', '\n']);
            return Ok(Some((block, bom_len + next)));
        }
        cursor = next;
    }
}

fn strip_bom(input: &str) -> (&str, usize) {
    match input.strip_prefix('\u{feff}') {
        Some(rest) => (rest, '\u{feff}'.len_utf8()),
        None => (input, 0),
    }
}

fn line_span(text: &str, start: usize) -> Option<(&str, usize)> {
    if start >= text.len() {
        return None;
    }
    match text[start..].find('\n') {
        Some(pos) => Some((&text[start..start + pos], start + pos + 1)),
        None => Some((&text[start..], text.len())),
    }
}

fn is_fence(line: &str) -> bool {
    line.trim_end_matches('\r') == "---"
}
