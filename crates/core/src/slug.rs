use std::collections::HashMap;

/// Github-slugger compatible slug generator for heading anchors.
///
/// Lowercases, turns spaces into hyphens, drops ASCII punctuation, and keeps
/// Unicode letters and digits. Repeated headings get `-1`, `-2`, ... suffixes.
#[derive(Debug, Default)]
pub struct Slugger {
    counts: HashMap<String, usize>,
}

impl Slugger {
    /// Creates a new slugger.
    pub fn new() -> Self {
        Self {
            counts: HashMap::new(),
        }
    }

    /// Generates the next slug for the given heading text.
    pub fn next_slug(&mut self, text: &str) -> String {
        slugify(text, &mut self.counts)
    }
}

/// Slugify the given text, updating counts to ensure uniqueness.
pub fn slugify(text: &str, counts: &mut HashMap<String, usize>) -> String {
    let mut slug = String::with_capacity(text.len());

    for ch in text.chars() {
        if ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' {
            slug.push(ch.to_ascii_lowercase());
        } else if ch == ' ' {
            slug.push('-');
        } else if !ch.is_ascii() && ch.is_alphanumeric() {
            for lower in ch.to_lowercase() {
                slug.push(lower);
            }
        }
        // everything else (punctuation, tabs, control characters) is dropped
    }

    if slug.is_empty() {
        slug.push_str("section");
    }

    let seen = counts.entry(slug.clone()).or_insert(0);
    if *seen > 0 {
        slug = format!("{slug}-{seen}");
    }
    *seen += 1;

    slug
}
