//! The document: containers, and the flow inside them, line by line.
//!
//! Every line goes through the same steps:
//!
//! ```text
//! line start
//!   ├─ continue open containers, outermost first, until one fails
//!   ├─ open new containers (unless the line is lazy or the flow is code)
//!   ├─ flow: resume the open flow construct, or start a new one
//!   └─ line ending
//!        ├─ inspect the next line (a check, never kept):
//!        │    which containers continue, does the open flow end,
//!        │    is the line a lazy paragraph continuation?
//!        ├─ close the flow if it ends, close containers that do not continue
//!        └─ emit the line ending
//! ```
//!
//! Looking at the next line before emitting the line ending keeps the event
//! stream in order: a paragraph closes before the containers around it, and
//! both close before the line ending that follows them.
//!
//! Flow constructs that span lines stop at each line ending with
//! [`suspend`], naming the state to resume at on the next line.

use tracing::trace;

use crate::construct::{partial_space, ContainerConstruct, LIST};
use crate::event::{ContentType, TokenType};
use crate::state::StateName;
use crate::tokenizer::{State, Tokenizer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    Ordered,
    Unordered,
}

impl ListKind {
    pub fn token_type(self) -> TokenType {
        match self {
            Self::Ordered => TokenType::ListOrdered,
            Self::Unordered => TokenType::ListUnordered,
        }
    }
}

/// State of one open container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContainerState {
    pub kind: Option<ListKind>,
    pub marker: Option<char>,
    /// Columns of indent a line needs to continue the current item.
    pub size: usize,
    /// The current item started with a blank line.
    pub initial_blank_line: bool,
    /// A blank line followed an item that started blank.
    pub further_blank_lines: bool,
    /// The line starts a new item, so the flow of the previous one ends.
    pub close_flow: bool,
}

/// Flow constructs that stay open across lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlowKind {
    /// Fenced code: every line belongs to it until it closes.
    CodeFenced,
    /// Content that so far holds only definitions.
    Definitions,
    /// Content with a paragraph.
    Paragraph,
}

impl FlowKind {
    /// Lines are the construct's own until it says otherwise.
    pub fn is_concrete(self) -> bool {
        self == Self::CodeFenced
    }

    pub fn is_interruptible(self) -> bool {
        !self.is_concrete()
    }

    /// Lines that do not continue every container may still continue it.
    pub fn is_lazy(self) -> bool {
        self == Self::Paragraph
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct OpenFlow {
    kind: FlowKind,
    resume: StateName,
    /// Open tokens below the flow's own.
    depth: usize,
}

/// What inspecting the next line found.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Inspect {
    continued: usize,
    flow_end: bool,
    lazy: bool,
    interrupt: bool,
}

#[derive(Debug, Clone, Copy)]
struct OpenContainer {
    construct: &'static ContainerConstruct,
    state: ContainerState,
}

#[derive(Debug, Default)]
pub(crate) struct DocumentState {
    containers: Vec<OpenContainer>,
    continued: usize,
    flow: Option<OpenFlow>,
    pending: Option<OpenFlow>,
    flow_depth: usize,
    inspect: Inspect,
    pub(crate) blank_line: bool,
}

/// End the line inside an open flow construct, to go on at `resume`.
pub(crate) fn suspend(tokenizer: &mut Tokenizer, kind: FlowKind, resume: StateName) -> State {
    tokenizer.document.pending = Some(OpenFlow {
        kind,
        resume,
        depth: tokenizer.document.flow_depth,
    });
    State::Ok
}

fn close_flow(tokenizer: &mut Tokenizer) {
    if let Some(flow) = tokenizer.document.flow.take() {
        trace!(target: "mdtoken::document", kind = ?flow.kind, at = %tokenizer.now(), "close flow");
        while tokenizer.stack_len() > flow.depth {
            tokenizer.exit_innermost();
        }
    }
}

fn close_containers(tokenizer: &mut Tokenizer, keep: usize) {
    tokenizer.context = ContentType::Document;
    while tokenizer.document.containers.len() > keep {
        let Some(open) = tokenizer.document.containers.pop() else {
            break;
        };
        trace!(
            target: "mdtoken::document",
            container = open.construct.name,
            at = %tokenizer.now(),
            "close container"
        );
        (open.construct.exit)(tokenizer, &open.state);
    }
}

fn all_continued(tokenizer: &Tokenizer, continued: usize) -> bool {
    continued >= tokenizer.document.containers.len()
}

pub fn start(tokenizer: &mut Tokenizer) -> State {
    tokenizer.document = DocumentState::default();
    State::Retry(StateName::DocumentLineStart)
}

pub fn line_start(tokenizer: &mut Tokenizer) -> State {
    tokenizer.context = ContentType::Document;
    tokenizer.document.continued = 0;
    tokenizer.document.blank_line = false;
    tokenizer.lazy = false;
    State::Retry(StateName::DocumentContainerExistingBefore)
}

// ===== Containers =====

pub fn container_existing_before(tokenizer: &mut Tokenizer) -> State {
    let index = tokenizer.document.continued;
    match tokenizer.document.containers.get(index).copied() {
        Some(open) => {
            tokenizer.container = open.state;
            tokenizer.attempt(
                State::Next(StateName::DocumentContainerExistingAfter),
                State::Next(StateName::DocumentContainerExistingMissing),
            );
            State::Retry(open.construct.continuation)
        }
        None => State::Retry(StateName::DocumentContainersDone),
    }
}

fn store_container(tokenizer: &mut Tokenizer) {
    let index = tokenizer.document.continued;
    let state = tokenizer.container;
    if let Some(open) = tokenizer.document.containers.get_mut(index) {
        open.state = state;
    }
}

pub fn container_existing_after(tokenizer: &mut Tokenizer) -> State {
    store_container(tokenizer);
    tokenizer.document.continued += 1;
    State::Retry(StateName::DocumentContainerExistingBefore)
}

pub fn container_existing_missing(tokenizer: &mut Tokenizer) -> State {
    store_container(tokenizer);
    State::Retry(StateName::DocumentContainersDone)
}

pub fn containers_done(tokenizer: &mut Tokenizer) -> State {
    let continued = tokenizer.document.continued;
    let inspect = tokenizer.document.inspect;

    if !all_continued(tokenizer, continued) {
        if inspect.lazy {
            tokenizer.lazy = true;
            return State::Retry(StateName::DocumentFlowStart);
        }
        // Only when the inspection disagrees with this pass.
        close_flow(tokenizer);
        close_containers(tokenizer, continued);
    }

    if tokenizer.document.flow.is_some_and(|flow| flow.kind.is_concrete()) {
        return State::Retry(StateName::DocumentFlowStart);
    }

    tokenizer.interrupt = inspect.interrupt;
    State::Retry(StateName::DocumentContainerNewBefore)
}

pub fn container_new_before(tokenizer: &mut Tokenizer) -> State {
    tokenizer.container = ContainerState::default();
    tokenizer.attempt(
        State::Next(StateName::DocumentContainerNewAfter),
        State::Next(StateName::DocumentContainerNewMissing),
    );
    State::Retry(StateName::DocumentContainerNewStart)
}

/// Optional indent, then the container itself.
pub fn container_new_start(tokenizer: &mut Tokenizer) -> State {
    let max = tokenizer.options.tab_size - 1;
    partial_space::attempt(
        tokenizer,
        TokenType::LinePrefix,
        max,
        State::Next(LIST.tokenize),
    )
}

pub fn container_new_after(tokenizer: &mut Tokenizer) -> State {
    tokenizer.interrupt = false;
    trace!(
        target: "mdtoken::document",
        container = LIST.name,
        depth = tokenizer.document.containers.len(),
        at = %tokenizer.now(),
        "open container"
    );
    tokenizer.document.containers.push(OpenContainer {
        construct: &LIST,
        state: tokenizer.container,
    });
    tokenizer.document.continued = tokenizer.document.containers.len();
    State::Retry(StateName::DocumentContainerNewBefore)
}

pub fn container_new_missing(tokenizer: &mut Tokenizer) -> State {
    tokenizer.interrupt = false;
    State::Retry(StateName::DocumentFlowStart)
}

// ===== Flow =====

pub fn flow_start(tokenizer: &mut Tokenizer) -> State {
    if tokenizer.current().is_eof() {
        return State::Retry(StateName::DocumentEof);
    }

    tokenizer.context = ContentType::Flow;
    let next = State::Next(StateName::DocumentFlowEnd);
    tokenizer.attempt(next, next);

    match tokenizer.document.flow.take() {
        Some(flow) => {
            tokenizer.document.flow_depth = flow.depth;
            State::Retry(flow.resume)
        }
        None => {
            tokenizer.document.flow_depth = tokenizer.stack_len();
            State::Retry(StateName::FlowStart)
        }
    }
}

pub fn flow_end(tokenizer: &mut Tokenizer) -> State {
    tokenizer.document.flow = tokenizer.document.pending.take();
    tokenizer.context = ContentType::Document;
    let code = tokenizer.current();

    if code.is_eof() {
        State::Retry(StateName::DocumentEof)
    } else if code.is_line_ending() {
        State::Retry(StateName::DocumentLineEnd)
    } else {
        tokenizer.fail("end of line or end of input after flow")
    }
}

// ===== Line endings =====

pub fn line_end(tokenizer: &mut Tokenizer) -> State {
    let next = State::Next(StateName::DocumentLineEndAfterInspect);
    tokenizer.check(next, next);
    State::Retry(StateName::DocumentInspectStart)
}

pub fn line_end_after_inspect(tokenizer: &mut Tokenizer) -> State {
    let inspect = tokenizer.document.inspect;

    if inspect.flow_end {
        close_flow(tokenizer);
    }
    if !inspect.lazy {
        close_containers(tokenizer, inspect.continued);
    }

    tokenizer.context = if tokenizer.document.flow.is_some() {
        ContentType::Flow
    } else {
        ContentType::Document
    };
    let kind = if tokenizer.document.blank_line {
        TokenType::LineEndingBlank
    } else {
        TokenType::LineEnding
    };
    tokenizer.enter(kind);
    tokenizer.consume();
    tokenizer.exit(kind);
    State::Next(StateName::DocumentLineStart)
}

pub fn eof(tokenizer: &mut Tokenizer) -> State {
    close_flow(tokenizer);
    close_containers(tokenizer, 0);
    State::Ok
}

// ===== Inspecting the next line =====

pub fn inspect_start(tokenizer: &mut Tokenizer) -> State {
    tokenizer.document.inspect = Inspect::default();
    tokenizer.enter(TokenType::LineEnding);
    tokenizer.consume();
    tokenizer.exit(TokenType::LineEnding);
    State::Next(StateName::DocumentInspectExistingBefore)
}

pub fn inspect_existing_before(tokenizer: &mut Tokenizer) -> State {
    let index = tokenizer.document.inspect.continued;
    match tokenizer.document.containers.get(index).copied() {
        Some(open) => {
            tokenizer.container = open.state;
            tokenizer.attempt(
                State::Next(StateName::DocumentInspectExistingAfter),
                State::Next(StateName::DocumentInspectContainersDone),
            );
            State::Retry(open.construct.continuation)
        }
        None => State::Retry(StateName::DocumentInspectContainersDone),
    }
}

pub fn inspect_existing_after(tokenizer: &mut Tokenizer) -> State {
    tokenizer.document.inspect.continued += 1;
    if tokenizer.container.close_flow {
        tokenizer.document.inspect.flow_end = true;
        State::Retry(StateName::DocumentInspectDone)
    } else {
        State::Retry(StateName::DocumentInspectExistingBefore)
    }
}

pub fn inspect_containers_done(tokenizer: &mut Tokenizer) -> State {
    let all = all_continued(tokenizer, tokenizer.document.inspect.continued);
    let flow = tokenizer.document.flow.map(|flow| flow.kind);

    if all && flow.is_some_and(FlowKind::is_concrete) {
        return State::Retry(StateName::DocumentInspectDone);
    }

    let interrupt = flow.is_some_and(FlowKind::is_interruptible);
    tokenizer.document.inspect.interrupt = interrupt;
    tokenizer.interrupt = interrupt;
    tokenizer.container = ContainerState::default();
    tokenizer.check(
        State::Next(StateName::DocumentInspectFlowEnd),
        State::Next(StateName::DocumentInspectNoNewContainer),
    );
    State::Retry(StateName::DocumentContainerNewStart)
}

pub fn inspect_no_new_container(tokenizer: &mut Tokenizer) -> State {
    tokenizer.interrupt = false;
    let all = all_continued(tokenizer, tokenizer.document.inspect.continued);

    match tokenizer.document.flow.map(|flow| flow.kind) {
        None => State::Retry(StateName::DocumentInspectDone),
        Some(kind) if all || kind.is_lazy() => {
            tokenizer.check(
                State::Next(StateName::DocumentInspectFlowEnd),
                State::Next(StateName::DocumentInspectInterrupt),
            );
            State::Retry(StateName::BlankLineStart)
        }
        Some(_) => State::Retry(StateName::DocumentInspectFlowEnd),
    }
}

pub fn inspect_interrupt(tokenizer: &mut Tokenizer) -> State {
    let all = all_continued(tokenizer, tokenizer.document.inspect.continued);
    tokenizer.interrupt = true;
    tokenizer.lazy = !all;
    tokenizer.check(
        State::Next(StateName::DocumentInspectFlowEnd),
        State::Next(StateName::DocumentInspectFlowContinue),
    );
    State::Retry(StateName::FlowInterruptStart)
}

pub fn inspect_flow_continue(tokenizer: &mut Tokenizer) -> State {
    tokenizer.document.inspect.lazy = tokenizer.lazy;
    tokenizer.interrupt = false;
    tokenizer.lazy = false;
    State::Retry(StateName::DocumentInspectDone)
}

pub fn inspect_flow_end(tokenizer: &mut Tokenizer) -> State {
    tokenizer.interrupt = false;
    tokenizer.lazy = false;
    tokenizer.document.inspect.flow_end = true;
    State::Retry(StateName::DocumentInspectDone)
}

pub fn inspect_done(tokenizer: &mut Tokenizer) -> State {
    tokenizer.interrupt = false;
    tokenizer.lazy = false;
    tokenizer.document.pending = None;
    State::Ok
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flow_kinds() {
        assert!(FlowKind::CodeFenced.is_concrete());
        assert!(!FlowKind::CodeFenced.is_interruptible());
        assert!(FlowKind::Definitions.is_interruptible());
        assert!(!FlowKind::Definitions.is_lazy());
        assert!(FlowKind::Paragraph.is_lazy());
    }

    #[test]
    fn test_list_kind_tokens() {
        assert_eq!(ListKind::Ordered.token_type(), TokenType::ListOrdered);
        assert_eq!(ListKind::Unordered.token_type(), TokenType::ListUnordered);
    }
}
