//! Resolvers: rewrites of the event list once tokenizing is done.
//!
//! Constructs register a resolver when they match; registrations made inside
//! an attempt that fails are rolled back with it. Resolvers then run in
//! registration order over the complete event list, finding their events by
//! token id, so no resolver depends on where the others put things.

use tracing::trace;

use crate::error::TokenizeError;
use crate::event::{ContentType, EventKind, Token, TokenType};
use crate::state::StateName;
use crate::tokenizer::{EventSlot, State, TokenId, TokenSlot, Tokenizer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Resolver {
    /// Turn the paragraph above a setext underline into a heading.
    SetextUnderline(TokenId),
    /// Tokenize fence info and meta as string content.
    CodeFenced(TokenId),
}

pub(crate) fn run(tokenizer: &mut Tokenizer) -> Result<(), TokenizeError> {
    let resolvers = std::mem::take(&mut tokenizer.resolvers);
    for resolver in resolvers {
        trace!(target: "mdtoken::resolve", ?resolver, "resolve");
        match resolver {
            Resolver::SetextUnderline(line) => setext_underline(tokenizer, line)?,
            Resolver::CodeFenced(code) => code_fenced(tokenizer, code)?,
        }
    }
    Ok(())
}

fn position(tokenizer: &Tokenizer, kind: EventKind, token: TokenId) -> Option<usize> {
    tokenizer
        .events
        .iter()
        .rposition(|event| event.kind == kind && event.token == token)
}

fn missing(tokenizer: &Tokenizer, expected: &'static str) -> TokenizeError {
    TokenizeError::Unexpected {
        expected,
        found: tokenizer.current(),
        point: tokenizer.now(),
    }
}

/// ```text
/// before:  content( paragraph( ... ) ) lineEnding setextHeadingLine( ... )
/// after:   setextHeading( setextHeadingText( ... ) lineEnding setextHeadingLine( ... ) )
/// ```
///
/// Definitions at the start of the content stay in it, the content then
/// ends where the last definition does.
fn setext_underline(tokenizer: &mut Tokenizer, line: TokenId) -> Result<(), TokenizeError> {
    let line_exit = position(tokenizer, EventKind::Exit, line)
        .ok_or_else(|| missing(tokenizer, "the exit of a setext underline"))?;

    let mut index = line_exit;
    let mut content = None;
    let mut text = None;
    let mut definition = None;

    while index > 0 {
        index -= 1;
        let event = tokenizer.events[index];
        match (event.kind, tokenizer.event_type(index)) {
            (EventKind::Enter, TokenType::Content) => {
                content = Some(index);
                break;
            }
            (EventKind::Enter, TokenType::Paragraph) => text = Some(index),
            (EventKind::Exit, TokenType::Content) => {
                tokenizer.events.remove(index);
            }
            (EventKind::Exit, TokenType::Definition) if definition.is_none() => {
                definition = Some(index);
            }
            _ => {}
        }
    }

    let (Some(content), Some(text)) = (content, text) else {
        return Err(missing(tokenizer, "a paragraph above a setext underline"));
    };

    let paragraph = tokenizer.events[text].token;
    let start = tokenizer.tokens[paragraph.0].token.start;
    let end = tokenizer.tokens[line.0].token.end;
    let heading = TokenId(tokenizer.tokens.len());
    tokenizer.tokens.push(TokenSlot {
        token: Token {
            kind: TokenType::SetextHeading,
            start,
            end,
        },
        size: 0,
    });
    tokenizer.tokens[paragraph.0].token.kind = TokenType::SetextHeadingText;

    let context = tokenizer.events[content].context;
    let enter = EventSlot {
        kind: EventKind::Enter,
        token: heading,
        context,
    };

    match definition {
        Some(definition) => {
            tokenizer.events.insert(text, enter);
            let content_token = tokenizer.events[content].token;
            let definition_token = tokenizer.events[definition].token;
            tokenizer.events.insert(
                definition + 1,
                EventSlot {
                    kind: EventKind::Exit,
                    token: content_token,
                    context,
                },
            );
            let end = tokenizer.tokens[definition_token.0].token.end;
            tokenizer.tokens[content_token.0].token.end = end;
        }
        None => tokenizer.events[content] = enter,
    }

    let line_exit = position(tokenizer, EventKind::Exit, line)
        .ok_or_else(|| missing(tokenizer, "the exit of a setext underline"))?;
    tokenizer.events.insert(
        line_exit + 1,
        EventSlot {
            kind: EventKind::Exit,
            token: heading,
            context,
        },
    );
    Ok(())
}

fn code_fenced(tokenizer: &mut Tokenizer, code: TokenId) -> Result<(), TokenizeError> {
    let Some(enter) = position(tokenizer, EventKind::Enter, code) else {
        return Err(missing(tokenizer, "the start of fenced code"));
    };

    let mut strings = Vec::new();
    for index in enter + 1..tokenizer.events.len() {
        let event = tokenizer.events[index];
        match tokenizer.event_type(index) {
            TokenType::CodeFencedFenceInfo | TokenType::CodeFencedFenceMeta
                if event.kind == EventKind::Enter =>
            {
                strings.push(event.token);
            }
            TokenType::CodeFencedFence if event.kind == EventKind::Exit => break,
            _ => {}
        }
    }

    // Meta first: inserting after it leaves the info's position alone.
    for token in strings.into_iter().rev() {
        let events = subtokenize_string(tokenizer, token)?;
        let Some(at) = position(tokenizer, EventKind::Enter, token) else {
            return Err(missing(tokenizer, "fence info or meta"));
        };
        tokenizer.events.splice(at + 1..at + 1, events);
    }
    Ok(())
}

/// Tokenize the span of `token` as string content, with ids pointing into
/// this tokenizer's arena.
fn subtokenize_string(
    tokenizer: &mut Tokenizer,
    token: TokenId,
) -> Result<Vec<EventSlot>, TokenizeError> {
    let span = tokenizer.tokens[token.0].token;
    let codes = tokenizer.codes();
    let end = span.end.index.min(codes.len());

    let mut child = Tokenizer::new(&codes[..end], tokenizer.options, span.start);
    child.context = ContentType::String;
    child.run(State::Retry(StateName::StringBefore))?;
    child.ensure_closed()?;

    let offset = tokenizer.tokens.len();
    tokenizer.tokens.extend(child.tokens.iter().copied());
    Ok(child
        .events
        .iter()
        .map(|event| EventSlot {
            token: TokenId(event.token.0 + offset),
            ..*event
        })
        .collect())
}
