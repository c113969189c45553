//! `%alias%` token scanning for path templates.

use std::collections::BTreeSet;
use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;

/// Pattern matching one `%alias%` reference.
pub const TOKEN_PATTERN: &str = r"%([^%]+)%";

static TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(TOKEN_PATTERN).expect("valid token pattern"));

/// One `%alias%` reference found in a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    /// The referenced alias name, without the surrounding `%`.
    pub alias: &'a str,
    /// Byte range of the whole token, `%` included.
    pub range: Range<usize>,
    /// Whether the template starts with this exact token.
    ///
    /// A leading reference resolves to an absolute path. This is decided by
    /// the token text rather than the match position, so a token repeated
    /// later in the template is leading too if its first occurrence is at
    /// offset 0.
    pub is_leading: bool,
}

/// Format an alias name as a template token.
///
/// # Examples
///
/// ```
/// use aliaspath::path::template::token_for;
///
/// assert_eq!(token_for("web"), "%web%");
/// ```
#[must_use]
pub fn token_for(alias: &str) -> String {
    format!("%{alias}%")
}

/// Scan a template for `%alias%` tokens, left to right.
///
/// # Examples
///
/// ```
/// use aliaspath::path::template::tokens;
///
/// let found = tokens("%web%/files/%site%");
/// assert_eq!(found.len(), 2);
/// assert_eq!(found[0].alias, "web");
/// assert!(found[0].is_leading);
/// assert!(!found[1].is_leading);
/// ```
#[must_use]
pub fn tokens(template: &str) -> Vec<Token<'_>> {
    TOKEN
        .captures_iter(template)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let alias = caps.get(1)?.as_str();
            Some(Token {
                alias,
                range: whole.range(),
                is_leading: template.starts_with(whole.as_str()),
            })
        })
        .collect()
}

/// Distinct alias names referenced by a template.
///
/// # Examples
///
/// ```
/// use aliaspath::path::template::references;
///
/// let refs = references("%var%/cache/%var%/%site%");
/// assert_eq!(refs.into_iter().collect::<Vec<_>>(), vec!["site", "var"]);
/// ```
#[must_use]
pub fn references(template: &str) -> BTreeSet<String> {
    tokens(template)
        .into_iter()
        .map(|token| token.alias.to_string())
        .collect()
}

/// Check whether a template contains the literal token for `alias`.
#[must_use]
pub fn contains_token(template: &str, alias: &str) -> bool {
    template.contains(&token_for(alias))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_tokens() {
        assert!(tokens("public/files").is_empty());
        assert!(tokens("100%").is_empty());
        assert!(tokens("%%").is_empty());
    }

    #[test]
    fn test_single_leading_token() {
        let found = tokens("%web%/files");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].alias, "web");
        assert_eq!(found[0].range, 0..5);
        assert!(found[0].is_leading);
    }

    #[test]
    fn test_embedded_token_is_not_leading() {
        let found = tokens("static/%web%");
        assert_eq!(found.len(), 1);
        assert!(!found[0].is_leading);
    }

    #[test]
    fn test_repeated_leading_token_is_leading_everywhere() {
        let found = tokens("%web%/x/%web%");
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|token| token.is_leading));
    }

    #[test]
    fn test_tokens_do_not_span_each_other() {
        let found = tokens("%a%%b%");
        let aliases: Vec<_> = found.iter().map(|t| t.alias).collect();
        assert_eq!(aliases, vec!["a", "b"]);
    }

    #[test]
    fn test_contains_token() {
        assert!(contains_token("%a%/x", "a"));
        assert!(!contains_token("%ab%/x", "a"));
        assert!(!contains_token("a/x", "a"));
    }

    #[test]
    fn test_references_deduplicates() {
        let refs = references("%a%/%b%/%a%");
        assert_eq!(refs.len(), 2);
        assert!(refs.contains("a"));
        assert!(refs.contains("b"));
    }
}
