//! Label.
//!
//! ```text
//! label ::= '[' 1*(escape | not('[' | ']' | eol)) ']'
//! escape ::= '\\' ('[' | ']' | '\\')
//! ```
//!
//! At most `label_size_max` characters, at least one of them not
//! whitespace, all on one line.

use crate::event::TokenType;
use crate::state::StateName;
use crate::tokenizer::{State, Tokenizer};

pub fn start(tokenizer: &mut Tokenizer) -> State {
    if tokenizer.current().is('[') {
        tokenizer.enter(TokenType::DefinitionLabel);
        tokenizer.enter(TokenType::DefinitionLabelMarker);
        tokenizer.consume();
        tokenizer.exit(TokenType::DefinitionLabelMarker);
        tokenizer.enter(TokenType::DefinitionLabelString);
        State::Next(StateName::LabelInside {
            size: 0,
            data: false,
        })
    } else {
        State::Nok
    }
}

pub fn inside(tokenizer: &mut Tokenizer, size: usize, data: bool) -> State {
    let code = tokenizer.current();

    if code.is(']') {
        if !data {
            return State::Nok;
        }
        tokenizer.exit(TokenType::DefinitionLabelString);
        tokenizer.enter(TokenType::DefinitionLabelMarker);
        tokenizer.consume();
        tokenizer.exit(TokenType::DefinitionLabelMarker);
        tokenizer.exit(TokenType::DefinitionLabel);
        return State::Ok;
    }

    if code.is_ending() || code.is('[') || size >= tokenizer.options.label_size_max {
        return State::Nok;
    }

    tokenizer.consume();
    let size = size + 1;
    let data = data || !code.is_space();
    if code.is('\\') {
        State::Next(StateName::LabelEscape { size, data })
    } else {
        State::Next(StateName::LabelInside { size, data })
    }
}

pub fn escape(tokenizer: &mut Tokenizer, size: usize, data: bool) -> State {
    let code = tokenizer.current();

    if (code.is('[') || code.is('\\') || code.is(']')) && size < tokenizer.options.label_size_max {
        tokenizer.consume();
        State::Next(StateName::LabelInside {
            size: size + 1,
            data,
        })
    } else {
        State::Retry(StateName::LabelInside { size, data })
    }
}
