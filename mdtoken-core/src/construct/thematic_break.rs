//! Thematic break.
//!
//! ```text
//! thematic_break ::= marker *(whitespace | marker)
//! marker ::= '*' | '-' | '_'
//! ```
//!
//! One marker kind throughout, at least `thematic_break_marker_count_min` of
//! them, nothing else on the line but whitespace.

use crate::construct::partial_space;
use crate::event::TokenType;
use crate::state::StateName;
use crate::tokenizer::{State, Tokenizer};

pub fn start(tokenizer: &mut Tokenizer) -> State {
    match tokenizer.current().char() {
        Some(marker @ ('*' | '-' | '_')) => {
            tokenizer.enter(TokenType::ThematicBreak);
            State::Retry(StateName::ThematicBreakAtBreak { marker, size: 0 })
        }
        _ => State::Nok,
    }
}

pub fn at_break(tokenizer: &mut Tokenizer, marker: char, size: usize) -> State {
    let code = tokenizer.current();

    if code.is(marker) {
        tokenizer.enter(TokenType::ThematicBreakSequence);
        State::Retry(StateName::ThematicBreakSequence { marker, size })
    } else if code.is_space() {
        partial_space::attempt(
            tokenizer,
            TokenType::Whitespace,
            usize::MAX,
            State::Next(StateName::ThematicBreakAtBreak { marker, size }),
        )
    } else if code.is_ending() && size >= tokenizer.options.thematic_break_marker_count_min {
        tokenizer.exit(TokenType::ThematicBreak);
        State::Ok
    } else {
        State::Nok
    }
}

pub fn sequence(tokenizer: &mut Tokenizer, marker: char, size: usize) -> State {
    if tokenizer.current().is(marker) {
        tokenizer.consume();
        State::Next(StateName::ThematicBreakSequence {
            marker,
            size: size + 1,
        })
    } else {
        tokenizer.exit(TokenType::ThematicBreakSequence);
        State::Retry(StateName::ThematicBreakAtBreak { marker, size })
    }
}
