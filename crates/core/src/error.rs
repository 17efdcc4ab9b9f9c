use crate::frontmatter::FrontmatterError;
use thiserror::Error;

/// Source location information for error reporting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    /// Optional file path
    pub file: Option<String>,
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
}

impl SourceLocation {
    /// Create a new source location
    pub fn new(line: usize, column: usize) -> Self {
        Self {
            file: None,
            line,
            column,
        }
    }

    /// Create a source location with file information
    pub fn with_file(file: String, line: usize, column: usize) -> Self {
        Self {
            file: Some(file),
            line,
            column,
        }
    }
}

impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(file) = &self.file {
            write!(f, "{}:{}:{}", file, self.line, self.column)
        } else {
            write!(f, "{}:{}", self.line, self.column)
        }
    }
}

/// Errors that can occur while compiling content.
#[derive(Debug, Error)]
pub enum CoreError {
    /// markdown-rs parser or compiler error surfaced through the adapter.
    #[error("Markdown error at {location}: {message}")]
    Markdown {
        /// Error message
        message: String,
        /// Source location
        location: SourceLocation,
    },
    /// Frontmatter extraction failed.
    #[error(transparent)]
    Frontmatter(#[from] FrontmatterError),
}

impl CoreError {
    /// Create a markdown error with location
    pub fn markdown(message: impl Into<String>, line: usize, column: usize) -> Self {
        Self::Markdown {
            message: message.into(),
            location: SourceLocation::new(line, column),
        }
    }
}
