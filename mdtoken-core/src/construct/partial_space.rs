//! Space or tab.
//!
//! ```text
//! space ::= 1*max(' ' | '\t')
//! ```
//!
//! Never fails: with no space at the cursor nothing is emitted. Tabs count
//! with their padding, so `max` is in columns.

use crate::event::TokenType;
use crate::state::StateName;
use crate::tokenizer::{State, Tokenizer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Space {
    pub kind: TokenType,
    /// Most columns to take. `usize::MAX` is unbounded.
    pub max: usize,
}

/// Take optional whitespace as `kind`, then continue at `after`.
pub fn attempt(tokenizer: &mut Tokenizer, kind: TokenType, max: usize, after: State) -> State {
    tokenizer.attempt(after, after);
    State::Retry(StateName::SpaceStart(Space { kind, max }))
}

pub fn start(tokenizer: &mut Tokenizer, space: Space) -> State {
    if tokenizer.current().is_space() && space.max > 0 {
        tokenizer.enter(space.kind);
        State::Retry(StateName::SpaceInside { space, size: 0 })
    } else {
        State::Ok
    }
}

pub fn inside(tokenizer: &mut Tokenizer, space: Space, size: usize) -> State {
    if tokenizer.current().is_space() && size < space.max {
        tokenizer.consume();
        State::Next(StateName::SpaceInside {
            space,
            size: size + 1,
        })
    } else {
        tokenizer.exit(space.kind);
        State::Ok
    }
}
