//! Destination.
//!
//! ```text
//! destination ::= '<' *(escape | not('<' | '>' | '\\' | eol)) '>'
//!               | raw
//! raw ::= *(escape | '(' raw ')' | not(control | space | eol | '(' | ')'))
//! escape ::= '\\' ('<' | '>' | '(' | ')' | '\\')
//! ```
//!
//! A raw destination starting at a space is empty. The enclosed form cannot
//! span lines. The raw form counts unmatched `(`;
//! an unmatched `)` ends it without being consumed, and whitespace or the
//! end of input end it only when every `(` is closed. `destination_balance_max`
//! bounds the nesting.

use crate::event::TokenType;
use crate::state::StateName;
use crate::tokenizer::{State, Tokenizer};

pub fn start(tokenizer: &mut Tokenizer) -> State {
    let code = tokenizer.current();

    if code.is('<') {
        tokenizer.enter(TokenType::DefinitionDestination);
        tokenizer.enter(TokenType::DefinitionDestinationLiteral);
        tokenizer.enter(TokenType::DefinitionDestinationLiteralMarker);
        tokenizer.consume();
        tokenizer.exit(TokenType::DefinitionDestinationLiteralMarker);
        State::Next(StateName::DestinationEnclosedBefore)
    } else if code.is_eof() || code.is(')') || code.is_ascii_control() {
        State::Nok
    } else {
        tokenizer.enter(TokenType::DefinitionDestination);
        tokenizer.enter(TokenType::DefinitionDestinationRaw);
        tokenizer.enter(TokenType::DefinitionDestinationString);
        State::Retry(StateName::DestinationRaw { balance: 0 })
    }
}

pub fn enclosed_before(tokenizer: &mut Tokenizer) -> State {
    if tokenizer.current().is('>') {
        tokenizer.enter(TokenType::DefinitionDestinationLiteralMarker);
        tokenizer.consume();
        tokenizer.exit(TokenType::DefinitionDestinationLiteralMarker);
        tokenizer.exit(TokenType::DefinitionDestinationLiteral);
        tokenizer.exit(TokenType::DefinitionDestination);
        State::Ok
    } else {
        tokenizer.enter(TokenType::DefinitionDestinationString);
        State::Retry(StateName::DestinationEnclosed)
    }
}

pub fn enclosed(tokenizer: &mut Tokenizer) -> State {
    let code = tokenizer.current();

    if code.is('>') {
        tokenizer.exit(TokenType::DefinitionDestinationString);
        State::Retry(StateName::DestinationEnclosedBefore)
    } else if code.is_ending() || code.is('<') {
        State::Nok
    } else {
        tokenizer.consume();
        if code.is('\\') {
            State::Next(StateName::DestinationEnclosedEscape)
        } else {
            State::Next(StateName::DestinationEnclosed)
        }
    }
}

pub fn enclosed_escape(tokenizer: &mut Tokenizer) -> State {
    let code = tokenizer.current();

    if code.is('<') || code.is('>') || code.is('\\') {
        tokenizer.consume();
        State::Next(StateName::DestinationEnclosed)
    } else {
        State::Retry(StateName::DestinationEnclosed)
    }
}

pub fn raw(tokenizer: &mut Tokenizer, balance: usize) -> State {
    let code = tokenizer.current();

    if balance == 0 && (code.is_ending() || code.is_space() || code.is(')')) {
        tokenizer.exit(TokenType::DefinitionDestinationString);
        tokenizer.exit(TokenType::DefinitionDestinationRaw);
        tokenizer.exit(TokenType::DefinitionDestination);
        return State::Ok;
    }

    if code.is('(') {
        if tokenizer
            .options
            .destination_balance_max
            .is_some_and(|limit| balance >= limit)
        {
            return State::Nok;
        }
        tokenizer.consume();
        State::Next(StateName::DestinationRaw {
            balance: balance + 1,
        })
    } else if code.is(')') {
        tokenizer.consume();
        State::Next(StateName::DestinationRaw {
            balance: balance - 1,
        })
    } else if code.is_ending() || code.is_line_ending_or_space() || code.is_ascii_control() {
        State::Nok
    } else {
        tokenizer.consume();
        if code.is('\\') {
            State::Next(StateName::DestinationRawEscape { balance })
        } else {
            State::Next(StateName::DestinationRaw { balance })
        }
    }
}

pub fn raw_escape(tokenizer: &mut Tokenizer, balance: usize) -> State {
    let code = tokenizer.current();

    if code.is('(') || code.is(')') || code.is('\\') {
        tokenizer.consume();
        State::Next(StateName::DestinationRaw { balance })
    } else {
        State::Retry(StateName::DestinationRaw { balance })
    }
}
