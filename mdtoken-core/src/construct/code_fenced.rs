//! Fenced code.
//!
//! ```text
//! code_fenced ::= fence_open *(eol line) [eol fence_close]
//! fence_open ::= sequence [whitespace info [whitespace meta]] [whitespace]
//! fence_close ::= [line_prefix] sequence [whitespace]
//! ```
//!
//! The opening sequence is at least `code_fenced_sequence_size_min` backticks
//! or tildes. Each later line first tries to close the block: up to
//! `tab_size - 1` columns of indent, the same marker at least as many times
//! as the opener, then nothing but whitespace. Otherwise the line is content,
//! with the opener's indent stripped.
//!
//! The block stays open across lines as the open flow of the document, so
//! each line after the opener starts at [`line_start`].
//!
//! Info and meta are tokenized again as string content once the run is over
//! (see [`crate::resolve`]).

use crate::construct::{partial_space, Resolver};
use crate::document::{self, FlowKind};
use crate::event::TokenType;
use crate::state::StateName;
use crate::tokenizer::{State, Tokenizer};

/// What every line of a fenced block needs to know about its opener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fence {
    pub marker: char,
    pub size_open: usize,
    /// Indent of the opener, stripped from content lines.
    pub prefix: usize,
}

impl Fence {
    fn forbids(&self, tokenizer: &Tokenizer) -> bool {
        self.marker == '`'
            && tokenizer.options.forbid_backtick_in_fence_info
            && tokenizer.current().is('`')
    }
}

pub fn start(tokenizer: &mut Tokenizer) -> State {
    let prefix = tokenizer.prefix_size(TokenType::LinePrefix);

    match tokenizer.current().char() {
        Some(marker @ ('`' | '~')) => {
            let code = tokenizer.enter(TokenType::CodeFenced);
            tokenizer.register(Resolver::CodeFenced(code));
            tokenizer.enter(TokenType::CodeFencedFence);
            tokenizer.enter(TokenType::CodeFencedFenceSequence);
            State::Retry(StateName::CodeFencedSequenceOpen(Fence {
                marker,
                size_open: 0,
                prefix,
            }))
        }
        _ => State::Nok,
    }
}

pub fn sequence_open(tokenizer: &mut Tokenizer, fence: Fence) -> State {
    if tokenizer.current().is(fence.marker) {
        tokenizer.consume();
        return State::Next(StateName::CodeFencedSequenceOpen(Fence {
            size_open: fence.size_open + 1,
            ..fence
        }));
    }

    if fence.size_open < tokenizer.options.code_fenced_sequence_size_min {
        return State::Nok;
    }

    tokenizer.exit(TokenType::CodeFencedFenceSequence);
    partial_space::attempt(
        tokenizer,
        TokenType::Whitespace,
        usize::MAX,
        State::Next(StateName::CodeFencedInfoBefore(fence)),
    )
}

pub fn info_before(tokenizer: &mut Tokenizer, fence: Fence) -> State {
    if tokenizer.current().is_ending() {
        State::Retry(StateName::CodeFencedOpenAfter(fence))
    } else {
        tokenizer.enter(TokenType::CodeFencedFenceInfo);
        State::Retry(StateName::CodeFencedInfo(fence))
    }
}

pub fn info(tokenizer: &mut Tokenizer, fence: Fence) -> State {
    let code = tokenizer.current();

    if code.is_ending() {
        tokenizer.exit(TokenType::CodeFencedFenceInfo);
        State::Retry(StateName::CodeFencedOpenAfter(fence))
    } else if code.is_space() {
        tokenizer.exit(TokenType::CodeFencedFenceInfo);
        partial_space::attempt(
            tokenizer,
            TokenType::Whitespace,
            usize::MAX,
            State::Next(StateName::CodeFencedMetaBefore(fence)),
        )
    } else if fence.forbids(tokenizer) {
        State::Nok
    } else {
        tokenizer.consume();
        State::Next(StateName::CodeFencedInfo(fence))
    }
}

pub fn meta_before(tokenizer: &mut Tokenizer, fence: Fence) -> State {
    if tokenizer.current().is_ending() {
        State::Retry(StateName::CodeFencedOpenAfter(fence))
    } else {
        tokenizer.enter(TokenType::CodeFencedFenceMeta);
        State::Retry(StateName::CodeFencedMeta(fence))
    }
}

pub fn meta(tokenizer: &mut Tokenizer, fence: Fence) -> State {
    if tokenizer.current().is_ending() {
        tokenizer.exit(TokenType::CodeFencedFenceMeta);
        State::Retry(StateName::CodeFencedOpenAfter(fence))
    } else if fence.forbids(tokenizer) {
        State::Nok
    } else {
        tokenizer.consume();
        State::Next(StateName::CodeFencedMeta(fence))
    }
}

pub fn open_after(tokenizer: &mut Tokenizer, fence: Fence) -> State {
    tokenizer.exit(TokenType::CodeFencedFence);
    line_end(tokenizer, fence)
}

/// Every line after the opener.
pub fn line_start(tokenizer: &mut Tokenizer, fence: Fence) -> State {
    tokenizer.repeat_attempt(
        State::Next(StateName::CodeFencedAfterClose),
        State::Next(StateName::CodeFencedContentStart(fence)),
    );
    State::Retry(StateName::CodeFencedCloseStart(fence))
}

pub fn close_start(tokenizer: &mut Tokenizer, fence: Fence) -> State {
    let max = tokenizer.options.tab_size - 1;
    partial_space::attempt(
        tokenizer,
        TokenType::LinePrefix,
        max,
        State::Next(StateName::CodeFencedCloseSequenceBefore(fence)),
    )
}

pub fn close_sequence_before(tokenizer: &mut Tokenizer, fence: Fence) -> State {
    if tokenizer.current().is(fence.marker) {
        tokenizer.enter(TokenType::CodeFencedFence);
        tokenizer.enter(TokenType::CodeFencedFenceSequence);
        State::Retry(StateName::CodeFencedCloseSequence { fence, size: 0 })
    } else {
        State::Nok
    }
}

pub fn close_sequence(tokenizer: &mut Tokenizer, fence: Fence, size: usize) -> State {
    if tokenizer.current().is(fence.marker) {
        tokenizer.consume();
        State::Next(StateName::CodeFencedCloseSequence {
            fence,
            size: size + 1,
        })
    } else if size >= fence.size_open {
        tokenizer.exit(TokenType::CodeFencedFenceSequence);
        partial_space::attempt(
            tokenizer,
            TokenType::Whitespace,
            usize::MAX,
            State::Next(StateName::CodeFencedCloseSequenceAfter),
        )
    } else {
        State::Nok
    }
}

pub fn close_sequence_after(tokenizer: &mut Tokenizer) -> State {
    if tokenizer.current().is_ending() {
        tokenizer.exit(TokenType::CodeFencedFence);
        State::Ok
    } else {
        State::Nok
    }
}

pub fn after_close(tokenizer: &mut Tokenizer) -> State {
    tokenizer.exit(TokenType::CodeFenced);
    State::Ok
}

pub fn content_start(tokenizer: &mut Tokenizer, fence: Fence) -> State {
    partial_space::attempt(
        tokenizer,
        TokenType::LinePrefix,
        fence.prefix,
        State::Next(StateName::CodeFencedContentBefore(fence)),
    )
}

pub fn content_before(tokenizer: &mut Tokenizer, fence: Fence) -> State {
    if tokenizer.current().is_ending() {
        line_end(tokenizer, fence)
    } else {
        tokenizer.enter(TokenType::CodeFlowValue);
        State::Retry(StateName::CodeFencedContentData(fence))
    }
}

pub fn content_data(tokenizer: &mut Tokenizer, fence: Fence) -> State {
    if tokenizer.current().is_ending() {
        tokenizer.exit(TokenType::CodeFlowValue);
        line_end(tokenizer, fence)
    } else {
        tokenizer.consume();
        State::Next(StateName::CodeFencedContentData(fence))
    }
}

fn line_end(tokenizer: &mut Tokenizer, fence: Fence) -> State {
    let code = tokenizer.current();

    if code.is_eof() {
        tokenizer.exit(TokenType::CodeFenced);
        State::Ok
    } else if code.is_line_ending() {
        document::suspend(tokenizer, FlowKind::CodeFenced, StateName::CodeFencedLineStart(fence))
    } else {
        tokenizer.fail("end of line or end of input after fenced code")
    }
}
