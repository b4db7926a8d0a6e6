//! Fenced-code-block extraction and language vetting.
//!
//! The embedding page hands the client a chunk of content that is
//! supposed to be a single fenced code block tagged with the expected
//! language. Anything else is rejected locally, before any network
//! call, with a descriptive message.

use thiserror::Error;

/// Language tag the playback client accepts.
pub const GO_LANG: &str = "go";

/// Local rejections of page-supplied content. These are displayed as
/// placeholder messages, never raised across the network boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnippetError {
    #[error("the wrapped data is not a codeblock")]
    NotACodeBlock,

    #[error("only {expected} code supported")]
    WrongLanguage { expected: String },
}

/// A validated code block: its declared language and trimmed source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    pub language: String,
    pub source: String,
}

impl Snippet {
    /// Extract the single fenced code block from `input` and check its
    /// language tag against `expected_lang`.
    ///
    /// The input must be one fenced block, optionally surrounded by
    /// blank lines. Info-string extras after the language tag (line
    /// highlighting, titles) are ignored. The extracted source is
    /// trimmed.
    pub fn from_markdown(input: &str, expected_lang: &str) -> Result<Self, SnippetError> {
        let mut lines = input.lines();

        let mut info = None;
        for line in lines.by_ref() {
            let trimmed = line.trim();
            if let Some(rest) = trimmed.strip_prefix("```") {
                info = Some(rest.trim());
                break;
            }
            if !trimmed.is_empty() {
                return Err(SnippetError::NotACodeBlock);
            }
        }
        let Some(info) = info else {
            return Err(SnippetError::NotACodeBlock);
        };

        let language = info.split_whitespace().next().unwrap_or("");
        if language != expected_lang {
            return Err(SnippetError::WrongLanguage {
                expected: expected_lang.to_string(),
            });
        }

        let mut body = Vec::new();
        let mut closed = false;
        for line in lines.by_ref() {
            if line.trim() == "```" {
                closed = true;
                break;
            }
            body.push(line);
        }
        if !closed {
            return Err(SnippetError::NotACodeBlock);
        }
        for line in lines {
            if !line.trim().is_empty() {
                return Err(SnippetError::NotACodeBlock);
            }
        }

        Ok(Snippet {
            language: language.to_string(),
            source: body.join("\n").trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HELLO: &str = "```go\npackage main\n\nfunc main() {}\n```\n";

    #[test]
    fn test_extracts_go_block() {
        let snippet = Snippet::from_markdown(HELLO, GO_LANG).unwrap();
        assert_eq!(snippet.language, "go");
        assert_eq!(snippet.source, "package main\n\nfunc main() {}");
    }

    #[test]
    fn test_blank_lines_around_fence_allowed() {
        let input = "\n\n```go\nfunc main() {}\n```\n\n";
        assert!(Snippet::from_markdown(input, GO_LANG).is_ok());
    }

    #[test]
    fn test_info_string_extras_ignored() {
        let input = "```go title=\"main.go\" showLineNumbers\nfunc main() {}\n```";
        let snippet = Snippet::from_markdown(input, GO_LANG).unwrap();
        assert_eq!(snippet.language, "go");
    }

    #[test]
    fn test_plain_prose_rejected() {
        let err = Snippet::from_markdown("just some prose", GO_LANG).unwrap_err();
        assert_eq!(err, SnippetError::NotACodeBlock);
    }

    #[test]
    fn test_wrong_language_rejected() {
        let err = Snippet::from_markdown("```rust\nfn main() {}\n```", GO_LANG).unwrap_err();
        assert_eq!(
            err,
            SnippetError::WrongLanguage {
                expected: "go".to_string()
            }
        );
        assert_eq!(err.to_string(), "only go code supported");
    }

    #[test]
    fn test_untagged_block_rejected() {
        let err = Snippet::from_markdown("```\nfunc main() {}\n```", GO_LANG).unwrap_err();
        assert!(matches!(err, SnippetError::WrongLanguage { .. }));
    }

    #[test]
    fn test_unclosed_fence_rejected() {
        let err = Snippet::from_markdown("```go\nfunc main() {}", GO_LANG).unwrap_err();
        assert_eq!(err, SnippetError::NotACodeBlock);
    }

    #[test]
    fn test_trailing_prose_rejected() {
        let input = "```go\nfunc main() {}\n```\nand then some prose";
        let err = Snippet::from_markdown(input, GO_LANG).unwrap_err();
        assert_eq!(err, SnippetError::NotACodeBlock);
    }
}
