//! Definition.
//!
//! ```text
//! definition ::= label ':' [whitespace] destination [whitespace title] [whitespace]
//! ```
//!
//! The whole definition sits on one line. Tried at the start of every
//! content line until a line is not a definition.

use crate::construct::partial_space;
use crate::event::TokenType;
use crate::state::StateName;
use crate::tokenizer::{State, Tokenizer};

pub fn start(tokenizer: &mut Tokenizer) -> State {
    if tokenizer.current().is('[') {
        tokenizer.enter(TokenType::Definition);
        tokenizer.attempt(State::Next(StateName::DefinitionLabelAfter), State::Nok);
        State::Retry(StateName::LabelStart)
    } else {
        State::Nok
    }
}

pub fn label_after(tokenizer: &mut Tokenizer) -> State {
    if tokenizer.current().is(':') {
        tokenizer.enter(TokenType::DefinitionMarker);
        tokenizer.consume();
        tokenizer.exit(TokenType::DefinitionMarker);
        State::Next(StateName::DefinitionMarkerAfter)
    } else {
        State::Nok
    }
}

pub fn marker_after(tokenizer: &mut Tokenizer) -> State {
    partial_space::attempt(
        tokenizer,
        TokenType::Whitespace,
        usize::MAX,
        State::Next(StateName::DefinitionDestinationBefore),
    )
}

pub fn destination_before(tokenizer: &mut Tokenizer) -> State {
    tokenizer.attempt(State::Next(StateName::DefinitionDestinationAfter), State::Nok);
    State::Retry(StateName::DestinationStart)
}

pub fn destination_after(tokenizer: &mut Tokenizer) -> State {
    tokenizer.attempt(
        State::Next(StateName::DefinitionAfter),
        State::Next(StateName::DefinitionAfter),
    );
    State::Retry(StateName::DefinitionTitleBefore)
}

/// A title needs whitespace before it and nothing but whitespace after it.
pub fn title_before(tokenizer: &mut Tokenizer) -> State {
    if tokenizer.current().is_space() {
        partial_space::attempt(
            tokenizer,
            TokenType::Whitespace,
            usize::MAX,
            State::Next(StateName::DefinitionTitleBeforeMarker),
        )
    } else {
        State::Nok
    }
}

pub fn title_before_marker(tokenizer: &mut Tokenizer) -> State {
    tokenizer.attempt(State::Next(StateName::DefinitionTitleAfter), State::Nok);
    State::Retry(StateName::TitleStart)
}

pub fn title_after(tokenizer: &mut Tokenizer) -> State {
    partial_space::attempt(
        tokenizer,
        TokenType::Whitespace,
        usize::MAX,
        State::Next(StateName::DefinitionTitleAfterWhitespace),
    )
}

pub fn title_after_whitespace(tokenizer: &mut Tokenizer) -> State {
    if tokenizer.current().is_ending() {
        State::Ok
    } else {
        State::Nok
    }
}

pub fn after(tokenizer: &mut Tokenizer) -> State {
    partial_space::attempt(
        tokenizer,
        TokenType::Whitespace,
        usize::MAX,
        State::Next(StateName::DefinitionAfterWhitespace),
    )
}

pub fn after_whitespace(tokenizer: &mut Tokenizer) -> State {
    if tokenizer.current().is_ending() {
        tokenizer.exit(TokenType::Definition);
        State::Ok
    } else {
        State::Nok
    }
}
