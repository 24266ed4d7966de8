//! Fixture files: YAML lists of cases, each a markdown input and the events
//! it must produce.
//!
//! ```yaml
//! - id: unordered_single
//!   desc: One bullet item
//!   markdown: "- a"
//!   events:
//!     - +listUnordered
//!     - [-data, "a"]
//! ```
//!
//! Event names are checked when the file is loaded, so a typo in a fixture
//! fails there instead of as a confusing mismatch.

use std::fmt;
use std::path::Path;

use mdtoken_core::{EventKind, TokenType};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct TestCase {
    pub id: String,
    #[allow(dead_code)]
    pub desc: String,
    pub markdown: String,
    pub events: Vec<ExpectedEvent>,
}

/// One expected event. `content`, when present, pins the text the token
/// spans; only exits carry it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawEvent")]
pub struct ExpectedEvent {
    pub kind: EventKind,
    pub token: TokenType,
    pub content: Option<String>,
}

/// `+type` / `-type`, or `[-type, "text"]`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawEvent {
    Bare(String),
    WithContent(String, String),
}

impl TryFrom<RawEvent> for ExpectedEvent {
    type Error = String;

    fn try_from(raw: RawEvent) -> Result<Self, Self::Error> {
        let (name, content) = match raw {
            RawEvent::Bare(name) => (name, None),
            RawEvent::WithContent(name, content) => (name, Some(content)),
        };

        let (kind, type_name) = if let Some(rest) = name.strip_prefix('+') {
            (EventKind::Enter, rest)
        } else if let Some(rest) = name.strip_prefix('-') {
            (EventKind::Exit, rest)
        } else {
            return Err(format!("event `{}` must start with `+` or `-`", name));
        };
        let token = TokenType::from_name(type_name)
            .ok_or_else(|| format!("unknown token type `{}`", type_name))?;
        if kind == EventKind::Enter && content.is_some() {
            return Err(format!("`{}`: only exits can pin content", name));
        }

        Ok(ExpectedEvent {
            kind,
            token,
            content,
        })
    }
}

impl fmt::Display for ExpectedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = match self.kind {
            EventKind::Enter => '+',
            EventKind::Exit => '-',
        };
        write!(f, "{}{}", sign, self.token)?;
        match &self.content {
            Some(content) => write!(f, " {:?}", content),
            None => Ok(()),
        }
    }
}

pub fn load_fixtures(path: &Path) -> Vec<TestCase> {
    let content = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read fixture file {:?}: {}", path, e));
    serde_yaml::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture file {:?}: {}", path, e))
}

/// Load `tests/fixtures/{name}.yaml`.
pub fn load_fixtures_by_name(name: &str) -> Vec<TestCase> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(format!("{}.yaml", name));
    load_fixtures(&path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> Result<Vec<ExpectedEvent>, serde_yaml::Error> {
        serde_yaml::from_str(source)
    }

    #[test]
    fn test_every_fixture_loads() {
        for name in ["flow", "lists", "code_fenced", "setext", "definitions"] {
            let cases = load_fixtures_by_name(name);
            assert!(!cases.is_empty(), "{}", name);
        }
        let cases = load_fixtures_by_name("lists");
        assert!(cases.iter().any(|c| c.id == "unordered_single"));
    }

    #[test]
    fn test_expected_event_forms() {
        let events = parse("- +content\n- [-data, a]\n").unwrap();
        assert_eq!(events[0].kind, EventKind::Enter);
        assert_eq!(events[0].token, TokenType::Content);
        assert_eq!(events[0].content, None);
        assert_eq!(events[1].kind, EventKind::Exit);
        assert_eq!(events[1].token, TokenType::Data);
        assert_eq!(events[1].content.as_deref(), Some("a"));
        assert_eq!(events[1].to_string(), "-data \"a\"");
    }

    #[test]
    fn test_rejects_bad_events() {
        assert!(parse("- content\n").is_err());
        assert!(parse("- \"*content\"\n").is_err());
        assert!(parse("- +paragraf\n").is_err());
        assert!(parse("- [+data, a]\n").is_err());
        assert!(parse("- \"\"\n").is_err());
    }
}
