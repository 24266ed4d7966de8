//! Flow: what starts a block.
//!
//! A blank line, or the first flow construct for the line's first
//! character that matches (see [`FLOW`]), or else content. The same table
//! decides whether a line interrupts an open paragraph.

use crate::construct::{partial_space, FLOW};
use crate::event::TokenType;
use crate::state::StateName;
use crate::tokenizer::{State, Tokenizer};

pub fn start(tokenizer: &mut Tokenizer) -> State {
    tokenizer.attempt(
        State::Next(StateName::FlowBlankLineAfter),
        State::Next(StateName::FlowPrefix),
    );
    State::Retry(StateName::BlankLineStart)
}

pub fn blank_line_after(tokenizer: &mut Tokenizer) -> State {
    tokenizer.document.blank_line = true;
    State::Ok
}

pub fn prefix(tokenizer: &mut Tokenizer) -> State {
    partial_space::attempt(
        tokenizer,
        TokenType::LinePrefix,
        usize::MAX,
        State::Next(StateName::FlowBefore { index: 0 }),
    )
}

pub fn before(tokenizer: &mut Tokenizer, index: usize) -> State {
    match construct_at(tokenizer, index) {
        Some(construct) => {
            tokenizer.attempt(State::Ok, State::Next(StateName::FlowBefore { index: index + 1 }));
            State::Retry(construct)
        }
        None => State::Retry(StateName::ContentStart),
    }
}

/// Whether the line starts a flow construct that ends an open paragraph.
/// Only ever run as a check.
pub fn interrupt_start(tokenizer: &mut Tokenizer) -> State {
    partial_space::attempt(
        tokenizer,
        TokenType::LinePrefix,
        usize::MAX,
        State::Next(StateName::FlowInterruptBefore { index: 0 }),
    )
}

pub fn interrupt_before(tokenizer: &mut Tokenizer, index: usize) -> State {
    // Indented lines continue the paragraph.
    if index == 0 && tokenizer.prefix_size(TokenType::LinePrefix) >= tokenizer.options.tab_size {
        return State::Nok;
    }

    match construct_at(tokenizer, index) {
        Some(construct) => {
            tokenizer.attempt(
                State::Ok,
                State::Next(StateName::FlowInterruptBefore { index: index + 1 }),
            );
            State::Retry(construct)
        }
        None => State::Nok,
    }
}

fn construct_at(tokenizer: &Tokenizer, index: usize) -> Option<StateName> {
    let c = tokenizer.current().char()?;
    FLOW.get(&c)?.get(index).map(|construct| construct.start())
}
