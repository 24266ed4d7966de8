//! Setext heading underline.
//!
//! ```text
//! setext_underline ::= 1*'=' [whitespace] | 1*'-' [whitespace]
//! ```
//!
//! Only an underline directly under a paragraph (or one interrupting it)
//! counts, and never on a lazy line. The underline itself emits only its
//! own tokens: turning the paragraph above into heading text happens in
//! [`crate::resolve`], once the whole document is tokenized.

use crate::construct::{partial_space, Resolver};
use crate::event::TokenType;
use crate::state::StateName;
use crate::tokenizer::{State, Tokenizer};

/// Tokens that may sit between a paragraph and its underline.
const SKIP: [TokenType; 4] = [
    TokenType::LineEnding,
    TokenType::LinePrefix,
    TokenType::Content,
    TokenType::ListItemIndent,
];

fn after_paragraph(tokenizer: &Tokenizer) -> bool {
    (0..tokenizer.events.len())
        .rev()
        .map(|index| tokenizer.event_type(index))
        .find(|kind| !SKIP.contains(kind))
        == Some(TokenType::Paragraph)
}

pub fn start(tokenizer: &mut Tokenizer) -> State {
    let marker = match tokenizer.current().char() {
        Some(marker @ ('=' | '-')) => marker,
        _ => return tokenizer.fail("`=` or `-` to start a setext underline"),
    };

    if tokenizer.lazy || !(tokenizer.interrupt || after_paragraph(tokenizer)) {
        return State::Nok;
    }

    let line = tokenizer.enter(TokenType::SetextHeadingLine);
    tokenizer.register(Resolver::SetextUnderline(line));
    tokenizer.enter(TokenType::SetextHeadingLineSequence);
    State::Retry(StateName::SetextUnderlineSequence { marker })
}

pub fn sequence(tokenizer: &mut Tokenizer, marker: char) -> State {
    if tokenizer.current().is(marker) {
        tokenizer.consume();
        State::Next(StateName::SetextUnderlineSequence { marker })
    } else {
        tokenizer.exit(TokenType::SetextHeadingLineSequence);
        partial_space::attempt(
            tokenizer,
            TokenType::LineSuffix,
            usize::MAX,
            State::Next(StateName::SetextUnderlineAfter),
        )
    }
}

pub fn after(tokenizer: &mut Tokenizer) -> State {
    if tokenizer.current().is_ending() {
        tokenizer.exit(TokenType::SetextHeadingLine);
        State::Ok
    } else {
        State::Nok
    }
}
