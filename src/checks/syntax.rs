//! Dart syntax sniffing.
//!
//! Character counting, not parsing. Nesting order, string literals and
//! comments are ignored, so `"{"` inside a string unbalances a file and
//! balanced-but-misplaced braces pass. Results are informational only.

use super::display_name;
use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Classification of one readable source file. First match wins, in
/// declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SyntaxVerdict {
    /// `{` and `}` counts differ
    UnmatchedBraces,
    /// `(` and `)` counts differ
    UnmatchedParentheses,
    /// Balanced, and both `import ` and `class ` occur
    Ok,
    /// Balanced, but lacking `import ` or `class `
    Suspicious,
}

impl fmt::Display for SyntaxVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyntaxVerdict::UnmatchedBraces => write!(f, "unmatched braces"),
            SyntaxVerdict::UnmatchedParentheses => write!(f, "unmatched parentheses"),
            SyntaxVerdict::Ok => write!(f, "syntax OK"),
            SyntaxVerdict::Suspicious => write!(f, "suspicious content"),
        }
    }
}

/// What happened to one sniffed file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SniffOutcome {
    NotFound,
    ReadError { message: String },
    Classified { verdict: SyntaxVerdict },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SniffedFile {
    pub path: PathBuf,
    /// File name used in messages
    pub name: String,
    #[serde(flatten)]
    pub outcome: SniffOutcome,
}

impl SniffedFile {
    /// Anything other than a clean `Ok` classification
    pub fn has_issue(&self) -> bool {
        !matches!(
            self.outcome,
            SniffOutcome::Classified {
                verdict: SyntaxVerdict::Ok
            }
        )
    }
}

/// Classify source text
pub fn classify(content: &str) -> SyntaxVerdict {
    if count(content, '{') != count(content, '}') {
        SyntaxVerdict::UnmatchedBraces
    } else if count(content, '(') != count(content, ')') {
        SyntaxVerdict::UnmatchedParentheses
    } else if content.contains("import ") && content.contains("class ") {
        SyntaxVerdict::Ok
    } else {
        SyntaxVerdict::Suspicious
    }
}

fn count(content: &str, c: char) -> usize {
    content.chars().filter(|&ch| ch == c).count()
}

/// Sniff one file. Missing and unreadable files are recorded, not raised.
pub fn sniff_file(path: &Path) -> SniffedFile {
    let name = display_name(path);

    let outcome = if !path.exists() {
        debug!(path = %path.display(), "sniffed file not found");
        SniffOutcome::NotFound
    } else {
        match fs::read_to_string(path) {
            Ok(content) => {
                let verdict = classify(&content);
                debug!(path = %path.display(), %verdict, "classified");
                SniffOutcome::Classified { verdict }
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to read source file");
                SniffOutcome::ReadError {
                    message: e.to_string(),
                }
            }
        }
    };

    SniffedFile {
        path: path.to_path_buf(),
        name,
        outcome,
    }
}

/// Sniff every file in order; one bad file never stops the rest
pub fn sniff_files(paths: &[PathBuf]) -> Vec<SniffedFile> {
    paths.iter().map(|p| sniff_file(p)).collect()
}
