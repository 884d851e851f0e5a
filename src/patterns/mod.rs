//! Pattern engine for recognizing identifiers and checking naming rules
//!
//! Architecture: Service Layer - Two fixed line recognizers feed caller-supplied rules
//! - LineDetectors extracts candidate identifiers from raw line text
//! - NamingRule decides whether an extracted identifier is acceptable
//! - Both are plain regex matching; there is deliberately no lexer behind them

use crate::domain::{SentinelError, SentinelResult};
use lazy_static::lazy_static;
use regex::Regex;

/// Default naming rule: lowercase identifier starting with a letter,
/// followed by lowercase letters, digits, or underscores (snake_case).
pub const DEFAULT_NAME_PATTERN: &str = "^[a-z][a-z0-9_]*$";

lazy_static! {
    // Maximal run of word characters ending right before an optional-whitespace `=`.
    static ref ASSIGNMENT: Regex =
        Regex::new(r"(\w+)\s*=").expect("assignment detector pattern compiles");
}

/// A compiled naming rule describing acceptable identifier spellings
#[derive(Debug, Clone)]
pub struct NamingRule {
    pattern: String,
    regex: Regex,
}

impl NamingRule {
    /// Compile a rule from a pattern string.
    ///
    /// Any pattern the regex engine accepts is taken verbatim, including
    /// patterns that are vacuously true or false for all inputs.
    pub fn new(pattern: &str) -> SentinelResult<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| SentinelError::pattern(pattern, e.to_string()))?;
        Ok(Self { pattern: pattern.to_string(), regex })
    }

    /// The default snake_case rule
    pub fn snake_case() -> Self {
        Self::new(DEFAULT_NAME_PATTERN).expect("default naming pattern compiles")
    }

    /// Anchored-match test: the match must begin at the first character of
    /// the candidate, but only consumes the whole string if the pattern
    /// itself anchors the end.
    pub fn accepts(&self, name: &str) -> bool {
        self.regex.find(name).map_or(false, |m| m.start() == 0)
    }

    /// The source pattern this rule was compiled from
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl Default for NamingRule {
    fn default() -> Self {
        Self::snake_case()
    }
}

/// The two per-line recognizers: assignment targets and declared function names
#[derive(Debug, Clone)]
pub struct LineDetectors {
    function: Regex,
}

impl LineDetectors {
    /// Build detectors for the given function-declaration keyword.
    ///
    /// The keyword is escaped and matched as a literal token of the target
    /// language's surface syntax (`def` for Python, `fn` for Rust, ...).
    pub fn new(declaration_keyword: &str) -> SentinelResult<Self> {
        if declaration_keyword.trim().is_empty() {
            return Err(SentinelError::config("declaration keyword must not be empty"));
        }

        let pattern = format!(r"{}\s+(\w+)\s*\(", regex::escape(declaration_keyword));
        let function = Regex::new(&pattern)
            .map_err(|e| SentinelError::pattern(&pattern, e.to_string()))?;

        Ok(Self { function })
    }

    /// First assignment-style identifier on the line, if any.
    ///
    /// Only a literal `=` after the token is required, so the left operand
    /// of a `==` comparison is recognized too. That over-match is part of
    /// the tool's observable behavior, not something to correct here.
    pub fn assigned_name<'l>(&self, line: &'l str) -> Option<&'l str> {
        ASSIGNMENT.captures(line).and_then(|c| c.get(1)).map(|m| m.as_str())
    }

    /// Declared function name on the line, if any: the keyword token,
    /// whitespace, an identifier, optional whitespace, `(`.
    pub fn declared_function<'l>(&self, line: &'l str) -> Option<&'l str> {
        self.function.captures(line).and_then(|c| c.get(1)).map(|m| m.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("my_var", true)]
    #[case("x", true)]
    #[case("value_2", true)]
    #[case("myVar", false)]
    #[case("MyVar", false)]
    #[case("_private", false)]
    #[case("2fast", false)]
    #[case("", false)]
    fn test_snake_case_rule(#[case] name: &str, #[case] accepted: bool) {
        let rule = NamingRule::snake_case();
        assert_eq!(rule.accepts(name), accepted, "name: {name}");
    }

    #[test]
    fn test_anchored_match_semantics() {
        // Without an end anchor the rule only has to match a prefix.
        let rule = NamingRule::new("[a-z]+").unwrap();
        assert!(rule.accepts("abc123"));
        // A match that starts past the first character is not a match.
        assert!(!rule.accepts("Xyz"));
        assert!(!rule.accepts("1abc"));
    }

    #[test]
    fn test_invalid_pattern_is_rejected() {
        let err = NamingRule::new("[unclosed").unwrap_err();
        assert!(matches!(err, SentinelError::Pattern { .. }));
        assert!(err.to_string().contains("[unclosed"));
    }

    #[rstest]
    #[case("x = 5", Some("x"))]
    #[case("myVar = compute()", Some("myVar"))]
    #[case("a.b = c", Some("b"))]
    #[case("if x == 5:", Some("x"))]
    #[case("return value", None)]
    #[case("", None)]
    fn test_assignment_detector(#[case] line: &str, #[case] expected: Option<&str>) {
        let detectors = LineDetectors::new("def").unwrap();
        assert_eq!(detectors.assigned_name(line), expected, "line: {line}");
    }

    #[rstest]
    #[case("def my_func():", Some("my_func"))]
    #[case("def myFunc(a, b):", Some("myFunc"))]
    #[case("    def indented ():", Some("indented"))]
    #[case("define = 3", None)]
    #[case("def missing_paren:", None)]
    #[case("return my_func()", None)]
    fn test_function_detector(#[case] line: &str, #[case] expected: Option<&str>) {
        let detectors = LineDetectors::new("def").unwrap();
        assert_eq!(detectors.declared_function(line), expected, "line: {line}");
    }

    #[test]
    fn test_custom_declaration_keyword() {
        let detectors = LineDetectors::new("fn").unwrap();
        assert_eq!(detectors.declared_function("fn scan_file(path) {"), Some("scan_file"));
        assert_eq!(detectors.declared_function("def scan_file(path):"), None);
    }

    #[test]
    fn test_empty_keyword_is_rejected() {
        assert!(matches!(LineDetectors::new("  "), Err(SentinelError::Config { .. })));
    }
}
