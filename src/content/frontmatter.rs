//! YAML frontmatter block splitting.

/// Why a document failed frontmatter splitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitError {
    /// Document does not start with a `---` line.
    Missing,
    /// Opening `---` found but no closing delimiter.
    Unterminated,
}

/// Split a raw document into its YAML frontmatter and markdown body.
///
/// The document must start with a `---` line; the frontmatter runs until
/// the next `---` line. Returns `(yaml, body)`.
pub fn split_frontmatter(raw: &str) -> Result<(&str, &str), SplitError> {
    let rest = raw.strip_prefix("---").ok_or(SplitError::Missing)?;
    // Delimiter must be a full line
    let rest = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))
        .ok_or(SplitError::Missing)?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            let yaml = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return Ok((yaml, body));
        }
        offset += line.len();
    }
    Err(SplitError::Unterminated)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_basic() {
        let raw = "---\ntitle: Hello\n---\n# Body\n";
        let (yaml, body) = split_frontmatter(raw).unwrap();
        assert_eq!(yaml, "title: Hello\n");
        assert_eq!(body, "# Body\n");
    }

    #[test]
    fn test_split_crlf() {
        let raw = "---\r\ntitle: Hello\r\n---\r\nBody";
        let (yaml, body) = split_frontmatter(raw).unwrap();
        assert_eq!(yaml, "title: Hello\r\n");
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_split_empty_body() {
        let raw = "---\ntitle: Hello\n---\n";
        let (_, body) = split_frontmatter(raw).unwrap();
        assert_eq!(body, "");
    }

    #[test]
    fn test_missing_opening_delimiter() {
        assert_eq!(split_frontmatter("title: Hello\n"), Err(SplitError::Missing));
    }

    #[test]
    fn test_inline_dashes_are_not_a_delimiter() {
        assert_eq!(split_frontmatter("--- title\n"), Err(SplitError::Missing));
    }

    #[test]
    fn test_unterminated_block() {
        assert_eq!(
            split_frontmatter("---\ntitle: Hello\n"),
            Err(SplitError::Unterminated)
        );
    }

    #[test]
    fn test_dashes_inside_body_not_confused() {
        let raw = "---\ntitle: Hello\n---\nsome --- dashes\n";
        let (_, body) = split_frontmatter(raw).unwrap();
        assert_eq!(body, "some --- dashes\n");
    }
}
