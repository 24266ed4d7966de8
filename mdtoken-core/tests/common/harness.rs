//! Test harness for running fixtures with stochastic variations

use crate::common::{ExpectedEvent, Gen, TestCase};
use mdtoken_core::{tokenize, EventKind, TokenType};

/// Result of running a test
#[derive(Debug)]
pub struct TestResult {
    pub passed: bool,
    pub input: String,
    pub expected: Vec<String>,
    pub actual: Vec<String>,
    pub seed: u64,
    pub errors: Vec<String>,
}

/// One tokenized event, simplified to its kind, type and the text spanned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Simple {
    pub kind: EventKind,
    pub token: TokenType,
    pub content: String,
}

/// Tokenize and simplify, or the error message
pub fn events_of(input: &str) -> Result<Vec<Simple>, String> {
    let tokenized = tokenize(input).map_err(|e| e.to_string())?;
    Ok(tokenized
        .events()
        .iter()
        .map(|event| Simple {
            kind: event.kind,
            token: event.token.kind,
            content: tokenized.slice_serialize(&event.token),
        })
        .collect())
}

fn matches(actual: &Simple, expected: &ExpectedEvent) -> bool {
    actual.kind == expected.kind
        && actual.token == expected.token
        && expected
            .content
            .as_ref()
            .map_or(true, |content| *content == actual.content)
}

fn format_actual(event: &Simple) -> String {
    match event.kind {
        EventKind::Enter => format!("+{}", event.token),
        EventKind::Exit => format!("-{} {:?}", event.token, event.content),
    }
}

fn format_expected(event: &ExpectedEvent) -> String {
    event.to_string()
}

/// Run a single test case (canonical, no variations)
pub fn run_test(case: &TestCase) -> TestResult {
    let expected: Vec<String> = case.events.iter().map(format_expected).collect();
    let mut errors = Vec::new();

    let actual = match events_of(&case.markdown) {
        Ok(actual) => actual,
        Err(error) => {
            errors.push(format!("Tokenizing failed: {}", error));
            Vec::new()
        }
    };

    if errors.is_empty() && actual.len() != case.events.len() {
        errors.push(format!(
            "Event count mismatch: expected {}, got {}",
            case.events.len(),
            actual.len()
        ));
    }

    for (i, (act, exp)) in actual.iter().zip(case.events.iter()).enumerate() {
        if !matches(act, exp) {
            errors.push(format!(
                "Event {}: expected '{}', got '{}'",
                i,
                format_expected(exp),
                format_actual(act)
            ));
        }
    }

    TestResult {
        passed: errors.is_empty(),
        input: case.markdown.clone(),
        expected,
        actual: actual.iter().map(format_actual).collect(),
        seed: 0,
        errors,
    }
}

/// Run test with stochastic variations
///
/// Applies independent variations:
/// - 40% chance of a block above, separated by blank lines
/// - 40% chance of a block below, separated by blank lines
///
/// The fixture's events must then appear, in order, among the events of
/// the whole document.
pub fn run_with_variations(case: &TestCase, gen: &mut Gen) -> TestResult {
    let mut input = String::new();

    if gen.chance(0.4) {
        input.push_str(&gen.block());
        input.push('\n');
        input.push_str(&gen.blank_lines());
    }

    input.push_str(&case.markdown);

    if gen.chance(0.4) {
        if !case.markdown.ends_with('\n') {
            input.push('\n');
        }
        input.push_str(&gen.blank_lines());
        input.push_str(&gen.block());
    }

    let expected: Vec<String> = case.events.iter().map(format_expected).collect();
    let mut errors = Vec::new();

    let actual = match events_of(&input) {
        Ok(actual) => actual,
        Err(error) => {
            errors.push(format!("Tokenizing failed: {}", error));
            Vec::new()
        }
    };

    // Subsequence match: the wrapping context adds events of its own.
    let mut exp_idx = 0;
    for act in &actual {
        if exp_idx < case.events.len() && matches(act, &case.events[exp_idx]) {
            exp_idx += 1;
        }
    }

    if errors.is_empty() && exp_idx < case.events.len() {
        errors.push(format!(
            "Missing expected events starting at index {}: {:?}",
            exp_idx,
            &expected[exp_idx..]
        ));
    }

    TestResult {
        passed: errors.is_empty(),
        input,
        expected,
        actual: actual.iter().map(format_actual).collect(),
        seed: gen.seed,
        errors,
    }
}

impl TestResult {
    /// Print detailed failure info
    pub fn print_failure(&self, case_id: &str) {
        eprintln!("\n=== FAILED: {} ===", case_id);
        eprintln!(
            "Seed: {} (set MDTOKEN_TEST_SEED={} to reproduce)",
            self.seed, self.seed
        );
        eprintln!("\nInput:");
        eprintln!("{:?}", self.input);
        eprintln!("\nExpected events:");
        for (i, e) in self.expected.iter().enumerate() {
            eprintln!("  {}: {}", i, e);
        }
        eprintln!("\nActual events:");
        for (i, e) in self.actual.iter().enumerate() {
            eprintln!("  {}: {}", i, e);
        }
        eprintln!("\nErrors:");
        for e in &self.errors {
            eprintln!("  - {}", e);
        }
    }
}
