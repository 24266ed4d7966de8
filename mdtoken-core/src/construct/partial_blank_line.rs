//! Blank line: optional whitespace, then the end of the line.
//!
//! Only ever used through a check or an attempt; the whitespace it takes is
//! a `linePrefix`.

use crate::construct::partial_space;
use crate::event::TokenType;
use crate::state::StateName;
use crate::tokenizer::{State, Tokenizer};

pub fn start(tokenizer: &mut Tokenizer) -> State {
    partial_space::attempt(
        tokenizer,
        TokenType::LinePrefix,
        usize::MAX,
        State::Next(StateName::BlankLineAfter),
    )
}

pub fn after(tokenizer: &mut Tokenizer) -> State {
    if tokenizer.current().is_ending() {
        State::Ok
    } else {
        State::Nok
    }
}
