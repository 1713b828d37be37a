use std::fs;
use std::path::Path;

use crate::model::Metadata;

/// Error type for front matter parsing
#[derive(Debug, thiserror::Error)]
pub enum FrontmatterError {
    #[error("no front matter block")]
    Missing,
    #[error("front matter block is not terminated")]
    Unterminated,
    #[error("invalid front matter: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

const DELIMITER: &str = "---";

/// Split a document into its front matter block and body.
///
/// The block must open on the first line with `---` and close with a line
/// containing only `---` (or `...`). Returns `(header, body)` where the
/// header excludes both delimiter lines.
pub fn split_frontmatter(text: &str) -> Result<(&str, &str), FrontmatterError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let first_end = text.find('\n').unwrap_or(text.len());
    if text[..first_end].trim_end() != DELIMITER {
        return Err(FrontmatterError::Missing);
    }
    let header_start = (first_end + 1).min(text.len());

    let mut offset = header_start;
    for line in text[header_start..].split_inclusive('\n') {
        let trimmed = line.trim_end();
        if trimmed == DELIMITER || trimmed == "..." {
            let header = &text[header_start..offset];
            let body = &text[offset + line.len()..];
            return Ok((header, body));
        }
        offset += line.len();
    }
    Err(FrontmatterError::Unterminated)
}

/// Parse the front matter of a document into [`Metadata`].
pub fn parse_metadata(text: &str) -> Result<Metadata, FrontmatterError> {
    let (header, _) = split_frontmatter(text)?;
    if header.trim().is_empty() {
        return Ok(Metadata::default());
    }
    Ok(serde_yaml::from_str(header)?)
}

/// Read a file's metadata. A file without front matter, with malformed
/// front matter, or that cannot be read yields empty metadata.
pub fn read_metadata(path: &Path) -> Metadata {
    let text = match fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "could not read task file");
            return Metadata::default();
        }
    };
    match parse_metadata(&text) {
        Ok(meta) => meta,
        Err(FrontmatterError::Missing) => Metadata::default(),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "ignoring front matter");
            Metadata::default()
        }
    }
}

/// Render a document from metadata and a body
pub fn render_document(meta: &Metadata, body: &str) -> Result<String, FrontmatterError> {
    let yaml = serde_yaml::to_string(meta)?;
    Ok(format!("{DELIMITER}\n{yaml}{DELIMITER}\n\n{body}"))
}
