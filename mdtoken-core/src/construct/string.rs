//! String content: plain text with character escapes.
//!
//! Used for the info and meta of fenced code, tokenized again after the
//! document run.

use crate::event::TokenType;
use crate::state::StateName;
use crate::tokenizer::{State, Tokenizer};

pub fn before(tokenizer: &mut Tokenizer) -> State {
    let code = tokenizer.current();

    if code.is_eof() {
        State::Ok
    } else if code.is('\\') {
        tokenizer.attempt(
            State::Next(StateName::StringBefore),
            State::Next(StateName::StringDataStart),
        );
        State::Retry(StateName::CharacterEscapeStart)
    } else {
        State::Retry(StateName::StringDataStart)
    }
}

/// Data always takes its first code, so a `\` that is not an escape
/// becomes data.
pub fn data_start(tokenizer: &mut Tokenizer) -> State {
    tokenizer.enter(TokenType::Data);
    tokenizer.consume();
    State::Next(StateName::StringData)
}

pub fn data(tokenizer: &mut Tokenizer) -> State {
    let code = tokenizer.current();

    if code.is_eof() || code.is('\\') {
        tokenizer.exit(TokenType::Data);
        State::Retry(StateName::StringBefore)
    } else {
        tokenizer.consume();
        State::Next(StateName::StringData)
    }
}
