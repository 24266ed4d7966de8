//! Content: the flow fallback.
//!
//! ```text
//! content ::= *(definition eol) [paragraph]
//! paragraph ::= data *(eol [line_prefix] data)
//! ```
//!
//! Anything no other flow construct takes is content, so content always
//! matches. It starts with zero or more definitions; the first line that is
//! not one starts the paragraph, which then runs until the document driver
//! closes it (blank line, interruption, or a container that ends).

use crate::construct::partial_space;
use crate::document::{self, FlowKind};
use crate::event::TokenType;
use crate::state::StateName;
use crate::tokenizer::{State, Tokenizer};

pub fn start(tokenizer: &mut Tokenizer) -> State {
    tokenizer.enter(TokenType::Content);
    State::Retry(StateName::ContentDefinitionBefore)
}

pub fn definition_before(tokenizer: &mut Tokenizer) -> State {
    tokenizer.attempt(
        State::Next(StateName::ContentDefinitionAfter),
        State::Next(StateName::ContentParagraphStart),
    );
    State::Retry(StateName::DefinitionStart)
}

pub fn definition_after(tokenizer: &mut Tokenizer) -> State {
    let code = tokenizer.current();

    if code.is_eof() {
        tokenizer.exit(TokenType::Content);
        State::Ok
    } else if code.is_line_ending() {
        document::suspend(
            tokenizer,
            FlowKind::Definitions,
            StateName::ContentLineStart { paragraph: false },
        )
    } else {
        tokenizer.fail("end of line or end of input after a definition")
    }
}

pub fn paragraph_start(tokenizer: &mut Tokenizer) -> State {
    tokenizer.enter(TokenType::Paragraph);
    State::Retry(StateName::ContentDataStart)
}

pub fn data_start(tokenizer: &mut Tokenizer) -> State {
    if tokenizer.current().is_ending() {
        line_end(tokenizer)
    } else {
        tokenizer.enter(TokenType::Data);
        State::Retry(StateName::ContentData)
    }
}

pub fn data(tokenizer: &mut Tokenizer) -> State {
    if tokenizer.current().is_ending() {
        tokenizer.exit(TokenType::Data);
        line_end(tokenizer)
    } else {
        tokenizer.consume();
        State::Next(StateName::ContentData)
    }
}

/// Every line of content after the first.
pub fn line_start(tokenizer: &mut Tokenizer, paragraph: bool) -> State {
    let after = if paragraph {
        StateName::ContentDataStart
    } else {
        StateName::ContentDefinitionBefore
    };
    partial_space::attempt(tokenizer, TokenType::LinePrefix, usize::MAX, State::Next(after))
}

fn line_end(tokenizer: &mut Tokenizer) -> State {
    if tokenizer.current().is_eof() {
        tokenizer.exit(TokenType::Paragraph);
        tokenizer.exit(TokenType::Content);
        State::Ok
    } else {
        document::suspend(
            tokenizer,
            FlowKind::Paragraph,
            StateName::ContentLineStart { paragraph: true },
        )
    }
}
