//! Regex-based token-splitting front end.
//!
//! Splits raw source text into token strings with one combined pattern.
//! Comments are matched so they can be dropped as units; everything the
//! pattern does not match (whitespace included) separates tokens. The
//! output is plain strings: classification against the automaton core
//! happens downstream.

use regex::Regex;
use std::sync::LazyLock;

/// Combined token pattern, alternatives in match-priority order:
/// block comments, line comments, booleans, signed numbers (fractional
/// part capped at five digits), character literals, operators,
/// assignment/delimiters, lowercase identifiers.
const COMBINED_PATTERN: &str = r"(/\*.*?\*/)|(//.*)|\b(true|false)\b|[+-]?([0-9]+\.[0-9]{1,5}|\.[0-9]{1,5}|[0-9]+)|'[a-z]'|[+\-*/%^<>]=?|[=;,(){}\[\]]|[a-z]+";

static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(COMBINED_PATTERN).expect("token pattern is valid"));

/// Split source code into raw token strings, dropping comments.
pub fn tokenize(input: &str) -> Vec<String> {
    TOKEN_PATTERN
        .find_iter(input)
        .map(|m| m.as_str().trim())
        .filter(|token| !token.is_empty() && !token.starts_with("//") && !token.starts_with("/*"))
        .map(str::to_owned)
        .collect()
}
