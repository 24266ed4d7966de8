//! Title.
//!
//! ```text
//! title ::= '"' *(escape | not('"' | eol)) '"'
//!         | "'" *(escape | not("'" | eol)) "'"
//!         | '(' *(escape | not(')' | eol)) ')'
//! ```

use crate::event::TokenType;
use crate::state::StateName;
use crate::tokenizer::{State, Tokenizer};

pub fn start(tokenizer: &mut Tokenizer) -> State {
    let marker = match tokenizer.current().char() {
        Some(c @ ('"' | '\'')) => c,
        Some('(') => ')',
        _ => return State::Nok,
    };

    tokenizer.enter(TokenType::DefinitionTitle);
    tokenizer.enter(TokenType::DefinitionTitleMarker);
    tokenizer.consume();
    tokenizer.exit(TokenType::DefinitionTitleMarker);
    State::Next(StateName::TitleBegin { marker })
}

pub fn begin(tokenizer: &mut Tokenizer, marker: char) -> State {
    if tokenizer.current().is(marker) {
        tokenizer.enter(TokenType::DefinitionTitleMarker);
        tokenizer.consume();
        tokenizer.exit(TokenType::DefinitionTitleMarker);
        tokenizer.exit(TokenType::DefinitionTitle);
        State::Ok
    } else {
        tokenizer.enter(TokenType::DefinitionTitleString);
        State::Retry(StateName::TitleInside { marker })
    }
}

pub fn inside(tokenizer: &mut Tokenizer, marker: char) -> State {
    let code = tokenizer.current();

    if code.is(marker) {
        tokenizer.exit(TokenType::DefinitionTitleString);
        State::Retry(StateName::TitleBegin { marker })
    } else if code.is_ending() {
        State::Nok
    } else {
        tokenizer.consume();
        if code.is('\\') {
            State::Next(StateName::TitleEscape { marker })
        } else {
            State::Next(StateName::TitleInside { marker })
        }
    }
}

pub fn escape(tokenizer: &mut Tokenizer, marker: char) -> State {
    let code = tokenizer.current();

    if code.is(marker) || code.is('\\') {
        tokenizer.consume();
        State::Next(StateName::TitleInside { marker })
    } else {
        State::Retry(StateName::TitleInside { marker })
    }
}
