//! Heuristic source checks.
//!
//! Pattern-matches raw source text for naming-convention violations,
//! over-precise decimal literals, and confusingly similar variable names.
//! Purely advisory: nothing here feeds back into automaton construction.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

static ASSIGNMENT_TARGET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([a-zA-Z]+)\s*=").expect("target pattern is valid"));

static LOWERCASE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]+$").expect("name pattern is valid"));

static ASSIGNED_DECIMAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"=\s*([0-9]+\.([0-9]+))").expect("decimal pattern is valid"));

/// Collects diagnostics over source text, statement by statement.
#[derive(Debug, Default)]
pub struct SourceChecker {
    diagnostics: Vec<String>,
}

impl SourceChecker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check one line of source, split into statements at semicolons.
    pub fn check(&mut self, code: &str) {
        let mut declared: HashSet<String> = HashSet::new();

        for statement in code.split(';') {
            let statement = statement.trim();
            if statement.is_empty() {
                continue;
            }

            let target = ASSIGNMENT_TARGET
                .captures(statement)
                .map(|captures| captures[1].to_owned());

            if let Some(name) = &target {
                if !LOWERCASE_NAME.is_match(name) {
                    self.diagnostics.push(format!(
                        "error: variable '{name}' contains uppercase letters"
                    ));
                }
            }

            if let Some(captures) = ASSIGNED_DECIMAL.captures(statement) {
                if captures[2].len() > 5 {
                    self.diagnostics.push(format!(
                        "error: decimal '{}' exceeds 5 decimal places",
                        &captures[1]
                    ));
                }
            }

            if let Some(name) = target {
                for existing in &declared {
                    if existing.eq_ignore_ascii_case(&name) && *existing != name {
                        self.diagnostics.push(format!(
                            "warning: similar variable '{name}' might cause confusion"
                        ));
                    }
                }
                declared.insert(name);
            }
        }
    }

    pub fn diagnostics(&self) -> &[String] {
        &self.diagnostics
    }

    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_uppercase_variable() {
        let mut checker = SourceChecker::new();
        checker.check("xAz = 10;");
        assert_eq!(checker.diagnostics().len(), 1);
        assert!(checker.diagnostics()[0].contains("xAz"));
        assert!(checker.diagnostics()[0].contains("uppercase"));
    }

    #[test]
    fn test_flags_overlong_decimal() {
        let mut checker = SourceChecker::new();
        checker.check("y = 3.141596;");
        assert_eq!(checker.diagnostics().len(), 1);
        assert!(checker.diagnostics()[0].contains("3.141596"));
    }

    #[test]
    fn test_accepts_five_decimal_places() {
        let mut checker = SourceChecker::new();
        checker.check("y = 3.14159;");
        assert!(checker.is_clean());
    }

    #[test]
    fn test_flags_similar_names() {
        let mut checker = SourceChecker::new();
        checker.check("value = 1; Value = 2;");
        // "Value" is flagged both for the uppercase letter and for
        // shadowing "value" up to case.
        assert_eq!(checker.diagnostics().len(), 2);
        assert!(checker.diagnostics()[1].contains("confusion"));
    }

    #[test]
    fn test_clean_source() {
        let mut checker = SourceChecker::new();
        checker.check("x = 1; y = 2.5; z = x + y;");
        assert!(checker.is_clean());
    }
}
