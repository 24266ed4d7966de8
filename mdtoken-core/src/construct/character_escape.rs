//! Character escape: `\` followed by ASCII punctuation.

use crate::event::TokenType;
use crate::state::StateName;
use crate::tokenizer::{State, Tokenizer};

pub fn start(tokenizer: &mut Tokenizer) -> State {
    if tokenizer.current().is('\\') {
        tokenizer.enter(TokenType::CharacterEscape);
        tokenizer.enter(TokenType::CharacterEscapeMarker);
        tokenizer.consume();
        tokenizer.exit(TokenType::CharacterEscapeMarker);
        State::Next(StateName::CharacterEscapeInside)
    } else {
        State::Nok
    }
}

pub fn inside(tokenizer: &mut Tokenizer) -> State {
    if tokenizer.current().is_ascii_punctuation() {
        tokenizer.enter(TokenType::CharacterEscapeValue);
        tokenizer.consume();
        tokenizer.exit(TokenType::CharacterEscapeValue);
        tokenizer.exit(TokenType::CharacterEscape);
        State::Ok
    } else {
        State::Nok
    }
}
