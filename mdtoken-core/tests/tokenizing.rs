//! Integration tests for tokenizing.
//!
//! Organized by construct. Whole-document tests compare simplified events;
//! construct-level tests run one construct alone through `probe`.

use mdtoken_core::{
    probe, serialize, tokenize, tokenize_codes, tokenize_with_options, Chunk, Code, Construct,
    ContainerState, ContentType, EventKind, ListKind, Options, Probe, ProbeContext, TokenType,
    TokenizeError, Tokenized,
};

// =============================================================================
// Test Helpers
// =============================================================================

fn doc(input: &str) -> Tokenized {
    tokenize(input).unwrap_or_else(|e| panic!("{:?}: {}", input, e))
}

/// Token types of the enter events, in order.
fn entered(input: &str) -> Vec<TokenType> {
    doc(input)
        .events()
        .iter()
        .filter(|event| event.is_enter())
        .map(|event| event.token.kind)
        .collect()
}

/// Text of every token of `kind`, in order.
fn texts(input: &str, kind: TokenType) -> Vec<String> {
    let tokenized = doc(input);
    tokenized
        .events()
        .iter()
        .filter(|event| event.is_enter() && event.token.kind == kind)
        .map(|event| tokenized.slice_serialize(&event.token))
        .collect()
}

fn count(input: &str, kind: TokenType) -> usize {
    entered(input).iter().filter(|k| **k == kind).count()
}

fn position(tokenized: &Tokenized, kind: EventKind, token: TokenType) -> usize {
    tokenized
        .events()
        .iter()
        .position(|event| event.kind == kind && event.token.kind == token)
        .unwrap_or_else(|| panic!("no {:?} of {}", kind, token))
}

fn run(input: &str, construct: Construct, context: ProbeContext) -> Probe {
    probe(input, construct, &context, &Options::default())
        .unwrap_or_else(|e| panic!("{} on {:?}: {}", construct.name(), input, e))
}

fn run_with(input: &str, construct: Construct, options: &Options) -> Probe {
    probe(input, construct, &ProbeContext::default(), options)
        .unwrap_or_else(|e| panic!("{} on {:?}: {}", construct.name(), input, e))
}

fn interrupting() -> ProbeContext {
    ProbeContext {
        interrupt: true,
        ..ProbeContext::default()
    }
}

fn in_item(size: usize) -> ProbeContext {
    ProbeContext {
        container: Some(ContainerState {
            kind: Some(ListKind::Unordered),
            marker: Some('-'),
            size,
            ..ContainerState::default()
        }),
        ..ProbeContext::default()
    }
}

// =============================================================================
// Destination
// =============================================================================

mod destination {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn raw_balanced() {
        let result = run("a(b)c", Construct::Destination, ProbeContext::default());
        assert!(result.matched);
        assert_eq!(result.consumed, 5);
    }

    #[test]
    fn raw_unbalanced_at_end() {
        let result = run("a(b", Construct::Destination, ProbeContext::default());
        assert!(!result.matched);
        assert_eq!(result.consumed, 0);
        assert!(result.events.is_empty());
    }

    #[test]
    fn raw_limit_zero() {
        let options = Options {
            destination_balance_max: Some(0),
            ..Options::default()
        };
        assert!(!run_with("a(b)", Construct::Destination, &options).matched);
        assert!(run_with("ab", Construct::Destination, &options).matched);
    }

    #[test]
    fn raw_limit_counts_depth() {
        let options = Options {
            destination_balance_max: Some(2),
            ..Options::default()
        };
        assert!(run_with("a((b))", Construct::Destination, &options).matched);
        assert!(!run_with("a(((b)))", Construct::Destination, &options).matched);
    }

    #[test]
    fn raw_leaves_closing_paren() {
        let result = run("ab)", Construct::Destination, ProbeContext::default());
        assert!(result.matched);
        assert_eq!(result.consumed, 2);
    }

    #[test]
    fn raw_escapes() {
        let result = run("a\\(b", Construct::Destination, ProbeContext::default());
        assert!(result.matched);
        assert_eq!(result.consumed, 4);
    }

    #[test]
    fn start_rejects() {
        for input in ["", ")", "\na", "\ta", "\u{1}a"] {
            let result = run(input, Construct::Destination, ProbeContext::default());
            assert!(!result.matched, "{:?}", input);
        }
    }

    #[test]
    fn raw_empty_before_space() {
        let result = run(" a", Construct::Destination, ProbeContext::default());
        assert!(result.matched);
        assert_eq!(result.consumed, 0);

        let kinds: Vec<_> = result.events.iter().map(|event| event.token.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenType::DefinitionDestination,
                TokenType::DefinitionDestinationRaw,
                TokenType::DefinitionDestinationString,
                TokenType::DefinitionDestinationString,
                TokenType::DefinitionDestinationRaw,
                TokenType::DefinitionDestination,
            ]
        );
    }

    #[test]
    fn enclosed() {
        let result = run("<a b>", Construct::Destination, ProbeContext::default());
        assert!(result.matched);
        assert_eq!(result.consumed, 5);

        let kinds: Vec<_> = result
            .events
            .iter()
            .filter(|event| event.is_enter())
            .map(|event| event.token.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                TokenType::DefinitionDestination,
                TokenType::DefinitionDestinationLiteral,
                TokenType::DefinitionDestinationLiteralMarker,
                TokenType::DefinitionDestinationString,
                TokenType::DefinitionDestinationLiteralMarker,
            ]
        );
    }

    #[test]
    fn enclosed_empty() {
        let result = run("<>", Construct::Destination, ProbeContext::default());
        assert!(result.matched);
        assert_eq!(result.consumed, 2);
    }

    #[test]
    fn enclosed_escaped_marker() {
        let result = run("<a\\>b>", Construct::Destination, ProbeContext::default());
        assert!(result.matched);
        assert_eq!(result.consumed, 6);
    }

    #[test]
    fn enclosed_rejects() {
        for input in ["<a", "<a\nb>", "<a<b>"] {
            let result = run(input, Construct::Destination, ProbeContext::default());
            assert!(!result.matched, "{:?}", input);
            assert!(result.events.is_empty());
        }
    }
}

// =============================================================================
// Fenced code
// =============================================================================

mod code_fenced {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn shorter_sequence_does_not_close() {
        let input = "```js\n``\n````";
        assert_eq!(count(input, TokenType::CodeFencedFence), 2);
        assert_eq!(texts(input, TokenType::CodeFlowValue), vec!["``"]);
    }

    #[test]
    fn longer_sequence_closes() {
        let input = "```\na\n````\nb";
        assert_eq!(count(input, TokenType::CodeFencedFence), 2);
        assert_eq!(texts(input, TokenType::Paragraph), vec!["b"]);
    }

    #[test]
    fn other_marker_does_not_close() {
        let input = "~~~\n```";
        assert_eq!(count(input, TokenType::CodeFencedFence), 1);
        assert_eq!(texts(input, TokenType::CodeFlowValue), vec!["```"]);
    }

    #[test]
    fn closing_fence_takes_only_whitespace() {
        let input = "```\n``` x";
        assert_eq!(count(input, TokenType::CodeFencedFence), 1);
        assert_eq!(texts(input, TokenType::CodeFlowValue), vec!["``` x"]);

        let input = "```\n```  ";
        assert_eq!(count(input, TokenType::CodeFencedFence), 2);
    }

    #[test]
    fn closing_fence_indent() {
        assert_eq!(count("```\n   ```", TokenType::CodeFencedFence), 2);

        let input = "```\n    ```";
        assert_eq!(count(input, TokenType::CodeFencedFence), 1);
        assert_eq!(texts(input, TokenType::CodeFlowValue), vec!["    ```"]);
    }

    #[test]
    fn backtick_in_info() {
        assert_eq!(count("``` a`b", TokenType::CodeFenced), 0);
        assert_eq!(texts("~~~ a`b", TokenType::CodeFencedFenceInfo), vec!["a`b"]);

        let options = Options {
            forbid_backtick_in_fence_info: false,
            ..Options::default()
        };
        let tokenized = tokenize_with_options("``` a`b", &options).unwrap();
        assert!(tokenized
            .events()
            .iter()
            .any(|event| event.token.kind == TokenType::CodeFencedFenceInfo));
    }

    #[test]
    fn sequence_minimum() {
        assert_eq!(count("``\nx", TokenType::CodeFenced), 0);

        let options = Options {
            code_fenced_sequence_size_min: 4,
            ..Options::default()
        };
        let tokenized = tokenize_with_options("```\nx", &options).unwrap();
        assert!(!tokenized
            .events()
            .iter()
            .any(|event| event.token.kind == TokenType::CodeFenced));
    }

    #[test]
    fn info_is_string_content() {
        let tokenized = doc("```a\\-b c\n```");
        let info = tokenized
            .events()
            .iter()
            .find(|event| event.token.kind == TokenType::CharacterEscapeValue)
            .unwrap();
        assert_eq!(info.context, ContentType::String);
        assert_eq!(tokenized.slice_serialize(&info.token), "-");
    }

    #[test]
    fn content_keeps_tabs() {
        assert_eq!(texts("```\n\tx\n```", TokenType::CodeFlowValue), vec!["\tx"]);
    }

    #[test]
    fn blank_lines_inside() {
        let input = "```\na\n\nb\n```";
        assert_eq!(texts(input, TokenType::CodeFlowValue), vec!["a", "b"]);
        assert_eq!(count(input, TokenType::CodeFenced), 1);
    }

    #[test]
    fn interrupts_paragraph() {
        let input = "a\n```\nb";
        assert_eq!(texts(input, TokenType::Paragraph), vec!["a"]);
        assert_eq!(texts(input, TokenType::CodeFlowValue), vec!["b"]);
    }

    #[test]
    fn ends_with_its_item() {
        let input = "- ```\nb";
        let tokenized = doc(input);
        let fence_exit = position(&tokenized, EventKind::Exit, TokenType::CodeFenced);
        let list_exit = position(&tokenized, EventKind::Exit, TokenType::ListUnordered);
        let paragraph = position(&tokenized, EventKind::Enter, TokenType::Paragraph);
        assert!(fence_exit < list_exit);
        assert!(list_exit < paragraph);
    }
}

// =============================================================================
// List
// =============================================================================

mod list {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn prefix_size() {
        let result = run("-   a", Construct::List, ProbeContext::default());
        assert!(result.matched);
        assert_eq!(result.container.size, 4);
        assert_eq!(result.container.kind, Some(ListKind::Unordered));
        assert_eq!(result.container.marker, Some('-'));

        let result = run("10) a", Construct::List, ProbeContext::default());
        assert_eq!(result.container.size, 4);
        assert_eq!(result.container.marker, Some(')'));
    }

    #[test]
    fn continuation_needs_full_indent() {
        assert!(run("    b", Construct::ListContinuation, in_item(4)).matched);
        assert!(!run("   b", Construct::ListContinuation, in_item(4)).matched);
    }

    #[test]
    fn continuation_indent_in_document() {
        let tokenized = doc("-   a\n    b");
        assert_eq!(
            texts("-   a\n    b", TokenType::ListItemIndent),
            vec!["    "]
        );
        assert_eq!(
            position(&tokenized, EventKind::Exit, TokenType::ListUnordered),
            tokenized.events().len() - 1
        );

        // Three columns: not the item's, but the paragraph goes on lazily.
        let input = "-   a\n   b";
        assert_eq!(count(input, TokenType::ListItemIndent), 0);
        assert_eq!(texts(input, TokenType::Paragraph), vec!["a\n   b"]);
    }

    #[test]
    fn next_item() {
        let result = run("- b", Construct::ListContinuation, in_item(2));
        assert!(result.matched);
        assert!(result.container.close_flow);

        let result = run("* b", Construct::ListContinuation, in_item(2));
        assert!(!result.matched);
    }

    #[test]
    fn other_marker_starts_other_list() {
        let tokenized = doc("- a\n* b");
        let first_exit = position(&tokenized, EventKind::Exit, TokenType::ListUnordered);
        let enters: Vec<_> = tokenized
            .events()
            .iter()
            .enumerate()
            .filter(|(_, event)| event.is_enter() && event.token.kind == TokenType::ListUnordered)
            .map(|(index, _)| index)
            .collect();
        assert_eq!(enters.len(), 2);
        assert!(first_exit < enters[1]);
    }

    #[test]
    fn nested() {
        let input = "- a\n  - b";
        assert_eq!(count(input, TokenType::ListUnordered), 2);
        assert_eq!(texts(input, TokenType::Paragraph), vec!["a", "b"]);
    }

    #[test]
    fn empty_item_alone() {
        let result = run("-\n", Construct::List, ProbeContext::default());
        assert!(result.matched);
        assert!(result.container.initial_blank_line);

        assert_eq!(count("-\n", TokenType::ListUnordered), 1);
    }

    #[test]
    fn empty_item_cannot_interrupt() {
        assert!(!run("-\n", Construct::List, interrupting()).matched);
        assert!(run("- a", Construct::List, interrupting()).matched);
    }

    #[test]
    fn ordered_interrupt_starts_at_one() {
        assert!(run("1. a", Construct::List, interrupting()).matched);
        assert!(!run("2. a", Construct::List, interrupting()).matched);
        assert!(!run("12. a", Construct::List, interrupting()).matched);
        assert!(run("12. a", Construct::List, ProbeContext::default()).matched);
    }

    #[test]
    fn ordered_digit_cap() {
        assert!(run("123456789. a", Construct::List, ProbeContext::default()).matched);
        assert!(!run("1234567890. a", Construct::List, ProbeContext::default()).matched);
    }

    #[test]
    fn thematic_break_wins() {
        assert!(!run("- - -", Construct::List, ProbeContext::default()).matched);
        assert!(!run("***", Construct::List, ProbeContext::default()).matched);
        assert!(run("+ + +", Construct::List, ProbeContext::default()).matched);
        assert_eq!(count("- - -", TokenType::ThematicBreak), 1);
    }

    #[test]
    fn needs_padding() {
        assert!(!run("-a", Construct::List, ProbeContext::default()).matched);
        assert!(!run("1.a", Construct::List, ProbeContext::default()).matched);
    }

    #[test]
    fn blank_after_blank_start() {
        let mut context = in_item(2);
        if let Some(container) = context.container.as_mut() {
            container.initial_blank_line = true;
        }
        let result = run("\n", Construct::ListContinuation, context);
        assert!(result.matched);
        assert!(result.container.further_blank_lines);

        let result = run("\n", Construct::ListContinuation, in_item(2));
        assert!(result.matched);
        assert!(!result.container.further_blank_lines);
    }

    #[test]
    fn filled_after_further_blank() {
        let mut context = in_item(2);
        if let Some(container) = context.container.as_mut() {
            container.further_blank_lines = true;
        }
        assert!(!run("  b", Construct::ListContinuation, context).matched);
    }

    #[test]
    fn empty_item_then_blank_ends_item() {
        let tokenized = doc("-\n\n  a");
        let list_exit = position(&tokenized, EventKind::Exit, TokenType::ListUnordered);
        let content = position(&tokenized, EventKind::Enter, TokenType::Content);
        assert!(list_exit < content);
    }

    #[test]
    fn filled_item_keeps_lines_after_blank() {
        let tokenized = doc("- a\n\n  b");
        let list_exit = position(&tokenized, EventKind::Exit, TokenType::ListUnordered);
        assert_eq!(list_exit, tokenized.events().len() - 1);
        assert_eq!(texts("- a\n\n  b", TokenType::Paragraph), vec!["a", "b"]);
    }

    #[test]
    fn contexts() {
        let tokenized = doc("- a");
        let events = tokenized.events();
        assert_eq!(events[0].token.kind, TokenType::ListUnordered);
        assert_eq!(events[0].context, ContentType::Document);
        let content = position(&tokenized, EventKind::Enter, TokenType::Content);
        assert_eq!(events[content].context, ContentType::Flow);
    }
}

// =============================================================================
// Setext underline
// =============================================================================

mod setext {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn heading_spans() {
        let input = "Title\n===\n";
        let tokenized = doc(input);
        let headings: Vec<_> = tokenized
            .events()
            .iter()
            .filter(|event| event.is_enter() && event.token.kind == TokenType::SetextHeading)
            .collect();
        assert_eq!(headings.len(), 1);
        assert_eq!(headings[0].token.start.offset, 0);
        assert_eq!(headings[0].token.end.offset, 9);

        assert_eq!(texts(input, TokenType::SetextHeadingText), vec!["Title"]);
        assert_eq!(count(input, TokenType::Paragraph), 0);
        assert_eq!(count(input, TokenType::Content), 0);
    }

    #[test]
    fn no_paragraph_no_heading() {
        let input = "---\n";
        assert_eq!(count(input, TokenType::SetextHeading), 0);
        assert_eq!(count(input, TokenType::ThematicBreak), 1);

        let result = run("===", Construct::SetextUnderline, ProbeContext::default());
        assert!(!result.matched);
        assert_eq!(entered("==="), vec![TokenType::Content, TokenType::Paragraph, TokenType::Data]);
    }

    #[test]
    fn interrupting_underline() {
        assert!(run("===", Construct::SetextUnderline, interrupting()).matched);

        let lazy = ProbeContext {
            interrupt: true,
            lazy: true,
            ..ProbeContext::default()
        };
        assert!(!run("===", Construct::SetextUnderline, lazy).matched);
    }

    #[test]
    fn underline_is_one_run() {
        let input = "a\n= =";
        assert_eq!(count(input, TokenType::SetextHeading), 0);
        assert_eq!(texts(input, TokenType::Data), vec!["a", "= ="]);
    }

    #[test]
    fn inside_item() {
        let input = "- a\n  =";
        let tokenized = doc(input);
        let heading = position(&tokenized, EventKind::Exit, TokenType::SetextHeading);
        let list = position(&tokenized, EventKind::Exit, TokenType::ListUnordered);
        assert!(heading < list);
        assert_eq!(texts(input, TokenType::SetextHeadingText), vec!["a"]);
    }

    #[test]
    fn after_definition() {
        let input = "[a]: b\nc\n=";
        assert_eq!(texts(input, TokenType::Content), vec!["[a]: b"]);
        assert_eq!(texts(input, TokenType::SetextHeadingText), vec!["c"]);
        assert_eq!(texts(input, TokenType::SetextHeading), vec!["c\n="]);
    }

    #[test]
    fn definitions_alone_are_not_underlined() {
        let input = "[a]: b\n=";
        assert_eq!(count(input, TokenType::SetextHeading), 0);
        assert_eq!(count(input, TokenType::Definition), 1);
        assert_eq!(texts(input, TokenType::Paragraph), vec!["="]);
    }
}

// =============================================================================
// Flow
// =============================================================================

mod flow {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_input() {
        assert!(doc("").events().is_empty());
    }

    #[test]
    fn blank_lines_only() {
        assert_eq!(
            entered("\n\n"),
            vec![TokenType::LineEndingBlank, TokenType::LineEndingBlank]
        );
    }

    #[test]
    fn thematic_break_options() {
        let options = Options::from_toml_str("thematic_break_marker_count_min = 4").unwrap();
        let tokenized = tokenize_with_options("***", &options).unwrap();
        assert!(!tokenized
            .events()
            .iter()
            .any(|event| event.token.kind == TokenType::ThematicBreak));
        assert!(tokenize_with_options("****", &options)
            .unwrap()
            .events()
            .iter()
            .any(|event| event.token.kind == TokenType::ThematicBreak));
    }

    #[test]
    fn thematic_break_mixed_markers() {
        assert_eq!(count("*-*", TokenType::ThematicBreak), 0);
        assert_eq!(count("_ _ _", TokenType::ThematicBreak), 1);
    }

    #[test]
    fn codes_match_text() {
        let codes = mdtoken_core::preprocess("a\n- b", 4);
        let from_codes = tokenize_codes(&codes, &Options::default()).unwrap();
        assert_eq!(from_codes.events(), doc("a\n- b").events());
    }

    #[test]
    fn label_size() {
        let options = Options {
            label_size_max: 3,
            ..Options::default()
        };
        let has_definition = |input: &str| {
            tokenize_with_options(input, &options)
                .unwrap()
                .events()
                .iter()
                .any(|event| event.token.kind == TokenType::Definition)
        };
        assert!(has_definition("[abc]: d"));
        assert!(!has_definition("[abcd]: e"));
    }

    #[test]
    fn token_names() {
        assert_eq!(TokenType::ListItemPrefix.as_str(), "listItemPrefix");
        assert_eq!(
            TokenType::from_name("codeFencedFenceInfo"),
            Some(TokenType::CodeFencedFenceInfo)
        );
        assert_eq!(TokenType::from_name("nope"), None);
    }
}

// =============================================================================
// Serializer
// =============================================================================

mod serializer {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn chunks() {
        let chunks = [
            Chunk::Str("a"),
            Chunk::Code(Code::HorizontalTab),
            Chunk::Code(Code::VirtualSpace),
            Chunk::Code(Code::VirtualSpace),
            Chunk::Str("b"),
            Chunk::Code(Code::CarriageReturnLineFeed),
            Chunk::Code(Code::VirtualSpace),
        ];
        assert_eq!(serialize(&chunks), "a\tb\r\n ");
    }

    #[test]
    fn virtual_space() {
        assert_eq!(
            serialize(&[Chunk::Code(Code::HorizontalTab), Chunk::Code(Code::VirtualSpace)]),
            "\t"
        );
        assert_eq!(serialize(&[Chunk::Code(Code::VirtualSpace)]), " ");
        assert_eq!(
            serialize(&[Chunk::Str("x"), Chunk::Code(Code::VirtualSpace)]),
            "x "
        );
    }

    #[test]
    fn fallback() {
        assert_eq!(
            serialize(&[Chunk::Code(Code::from_u32(0xD800))]),
            "\u{FFFD}"
        );
        assert_eq!(serialize(&[Chunk::Code(Code::Eof)]), "");
    }

    #[test]
    fn line_endings() {
        assert_eq!(
            serialize(&[
                Chunk::Code(Code::CarriageReturn),
                Chunk::Code(Code::LineFeed),
                Chunk::Code(Code::CarriageReturnLineFeed),
            ]),
            "\r\n\r\n"
        );
    }
}

// =============================================================================
// Errors
// =============================================================================

mod errors {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn violation_escapes_the_attempt() {
        let result = probe(
            "a",
            Construct::SetextUnderline,
            &ProbeContext::default(),
            &Options::default(),
        );
        match result {
            Err(TokenizeError::Unexpected { found, point, .. }) => {
                assert_eq!(found, Code::Char('a'));
                assert_eq!(point.index, 0);
            }
            other => panic!("expected a fatal error, got {:?}", other),
        }
    }

    #[test]
    fn zero_tab_size_is_rejected() {
        let options = Options {
            tab_size: 0,
            ..Options::default()
        };

        let error = tokenize_with_options("- a\n  b", &options).unwrap_err();
        assert!(matches!(
            error,
            TokenizeError::InvalidOptions { name: "tab_size", .. }
        ));
        assert_eq!(error.to_string(), "1:1: invalid option `tab_size`: must be at least 1");

        let codes = mdtoken_core::preprocess("```\n a", 4);
        assert!(tokenize_codes(&codes, &options).is_err());
        assert!(probe("- a", Construct::List, &ProbeContext::default(), &options).is_err());
    }

    #[test]
    fn degenerate_limits_are_rejected() {
        let options = Options {
            code_fenced_sequence_size_min: 0,
            ..Options::default()
        };
        assert!(matches!(
            tokenize_with_options("```", &options),
            Err(TokenizeError::InvalidOptions {
                name: "code_fenced_sequence_size_min",
                ..
            })
        ));
    }
}
