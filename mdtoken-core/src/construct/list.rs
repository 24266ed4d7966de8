//! List.
//!
//! ```text
//! list_item_prefix ::= [line_prefix] (unordered | ordered) (whitespace | &blank_line)
//! unordered ::= '*' | '+' | '-'
//! ordered ::= 1*9digit ('.' | ')')
//! ```
//!
//! A list is a container: one `listOrdered`/`listUnordered` token spans all
//! of its items, each item starting with a `listItemPrefix`. The prefix
//! width (indent, value, marker and padding) becomes
//! [`ContainerState::size`], the indent every later line of the item needs.
//!
//! Per later line, [`cont_start`] decides whether the line still belongs to
//! the list:
//!
//! ```text
//! blank ─────────────────────────────▶ continue (flag furtherBlankLines
//!                                                after an empty first line)
//! filled ─┬─ indent == size ─────────▶ continue
//!         └─ next item at this level ▶ continue, close the open flow
//! otherwise ─────────────────────────▶ not in this list
//! ```

use crate::construct::partial_space;
use crate::document::{ContainerState, ListKind};
use crate::event::TokenType;
use crate::state::StateName;
use crate::tokenizer::{State, Tokenizer, TokenId};

pub fn start(tokenizer: &mut Tokenizer) -> State {
    let initial = tokenizer.prefix_size(TokenType::LinePrefix);
    let code = tokenizer.current();
    let bullet = matches!(code.char(), Some('*' | '+' | '-'));
    let kind = tokenizer.container.kind.unwrap_or(if bullet {
        ListKind::Unordered
    } else {
        ListKind::Ordered
    });

    let opens = match kind {
        ListKind::Unordered => bullet && tokenizer.container.marker.map_or(true, |m| code.is(m)),
        ListKind::Ordered => code.is_ascii_digit(),
    };
    if !opens {
        return State::Nok;
    }

    if tokenizer.container.kind.is_none() {
        tokenizer.container.kind = Some(kind);
        tokenizer.enter(kind.token_type());
    }

    match kind {
        ListKind::Unordered => {
            tokenizer.enter(TokenType::ListItemPrefix);
            if code.is('*') || code.is('-') {
                tokenizer.check(State::Nok, State::Next(StateName::ListAtMarker { initial }));
                State::Retry(StateName::ThematicBreakStart)
            } else {
                State::Retry(StateName::ListAtMarker { initial })
            }
        }
        ListKind::Ordered if !tokenizer.interrupt || code.is('1') => {
            tokenizer.enter(TokenType::ListItemPrefix);
            let value = tokenizer.enter(TokenType::ListItemValue);
            State::Retry(StateName::ListValue { initial, value })
        }
        ListKind::Ordered => State::Nok,
    }
}

pub fn value(tokenizer: &mut Tokenizer, initial: usize, value: TokenId) -> State {
    let code = tokenizer.current();
    let size = tokenizer.size(value);

    if code.is_ascii_digit() {
        if size >= tokenizer.options.list_item_value_digits_max() {
            return State::Nok;
        }
        tokenizer.set_size(value, size + 1);
        tokenizer.consume();
        return State::Next(StateName::ListValue { initial, value });
    }

    let delimiter = match tokenizer.container.marker {
        Some(marker) => code.is(marker),
        None => code.is('.') || code.is(')'),
    };

    // An interrupting item may only be `1`.
    if delimiter && (!tokenizer.interrupt || size < 2) {
        tokenizer.exit(TokenType::ListItemValue);
        State::Retry(StateName::ListAtMarker { initial })
    } else {
        State::Nok
    }
}

pub fn at_marker(tokenizer: &mut Tokenizer, initial: usize) -> State {
    let Some(marker) = tokenizer.current().char() else {
        return tokenizer.fail("a list item marker");
    };

    tokenizer.enter(TokenType::ListItemMarker);
    tokenizer.consume();
    tokenizer.exit(TokenType::ListItemMarker);
    tokenizer.container.marker.get_or_insert(marker);
    State::Next(StateName::ListMarkerAfter { initial })
}

pub fn marker_after(tokenizer: &mut Tokenizer, initial: usize) -> State {
    let on_blank = if tokenizer.interrupt {
        State::Nok
    } else {
        State::Next(StateName::ListOnBlank { initial })
    };
    tokenizer.check(
        on_blank,
        State::Next(StateName::ListPrefixWhitespaceBefore { initial }),
    );
    State::Retry(StateName::BlankLineStart)
}

pub fn prefix_whitespace_before(tokenizer: &mut Tokenizer, initial: usize) -> State {
    tokenizer.attempt(
        State::Next(StateName::ListPrefixEnd { initial }),
        State::Next(StateName::ListPrefixOther { initial }),
    );
    State::Retry(StateName::ListPrefixWhitespaceStart)
}

pub fn on_blank(tokenizer: &mut Tokenizer, initial: usize) -> State {
    tokenizer.container.initial_blank_line = true;
    State::Retry(StateName::ListPrefixEnd {
        initial: initial + 1,
    })
}

/// Padding that is too wide: take one column of it, the rest is content.
pub fn prefix_other(tokenizer: &mut Tokenizer, initial: usize) -> State {
    if tokenizer.current().is_space() {
        tokenizer.enter(TokenType::ListItemPrefixWhitespace);
        tokenizer.consume();
        tokenizer.exit(TokenType::ListItemPrefixWhitespace);
        State::Next(StateName::ListPrefixEnd { initial })
    } else {
        State::Nok
    }
}

pub fn prefix_end(tokenizer: &mut Tokenizer, initial: usize) -> State {
    tokenizer.exit(TokenType::ListItemPrefix);
    tokenizer.container.size = initial + tokenizer.prefix_size(TokenType::ListItemPrefix);
    State::Ok
}

pub fn prefix_whitespace_start(tokenizer: &mut Tokenizer) -> State {
    let max = tokenizer.options.tab_size;
    partial_space::attempt(
        tokenizer,
        TokenType::ListItemPrefixWhitespace,
        max,
        State::Next(StateName::ListPrefixWhitespaceAfter),
    )
}

pub fn prefix_whitespace_after(tokenizer: &mut Tokenizer) -> State {
    if !tokenizer.current().is_space()
        && tokenizer.prefix_size(TokenType::ListItemPrefixWhitespace) > 0
    {
        State::Ok
    } else {
        State::Nok
    }
}

// ===== Continuation =====

pub fn cont_start(tokenizer: &mut Tokenizer) -> State {
    tokenizer.container.close_flow = false;
    tokenizer.check(
        State::Next(StateName::ListContBlank),
        State::Next(StateName::ListContFilled),
    );
    State::Retry(StateName::BlankLineStart)
}

pub fn cont_blank(tokenizer: &mut Tokenizer) -> State {
    let container = &mut tokenizer.container;
    container.further_blank_lines |= container.initial_blank_line;
    let size = container.size;
    partial_space::attempt(tokenizer, TokenType::ListItemIndent, size, State::Ok)
}

pub fn cont_filled(tokenizer: &mut Tokenizer) -> State {
    let indent = !tokenizer.container.further_blank_lines && tokenizer.current().is_space();
    tokenizer.container.further_blank_lines = false;
    tokenizer.container.initial_blank_line = false;

    if indent {
        tokenizer.attempt(State::Ok, State::Next(StateName::ListContNotInItem));
        State::Retry(StateName::ListIndentStart)
    } else {
        State::Retry(StateName::ListContNotInItem)
    }
}

pub fn cont_not_in_item(tokenizer: &mut Tokenizer) -> State {
    tokenizer.attempt(State::Next(StateName::ListContOnItem), State::Nok);
    State::Retry(StateName::ListNextItemStart)
}

pub fn cont_on_item(tokenizer: &mut Tokenizer) -> State {
    tokenizer.container.close_flow = true;
    State::Ok
}

pub fn indent_start(tokenizer: &mut Tokenizer) -> State {
    let size = tokenizer.container.size;
    partial_space::attempt(
        tokenizer,
        TokenType::ListItemIndent,
        size,
        State::Next(StateName::ListIndentAfter),
    )
}

pub fn indent_after(tokenizer: &mut Tokenizer) -> State {
    if tokenizer.prefix_size(TokenType::ListItemIndent) == tokenizer.container.size {
        State::Ok
    } else {
        State::Nok
    }
}

pub fn next_item_start(tokenizer: &mut Tokenizer) -> State {
    let max = tokenizer.options.tab_size - 1;
    partial_space::attempt(
        tokenizer,
        TokenType::LinePrefix,
        max,
        State::Next(StateName::ListStart),
    )
}

pub fn exit(tokenizer: &mut Tokenizer, state: &ContainerState) {
    match state.kind {
        Some(kind) => tokenizer.exit(kind.token_type()),
        None => {
            tokenizer.fail("an open list to close");
        }
    }
}
