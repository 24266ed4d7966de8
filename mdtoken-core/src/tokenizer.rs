//! The tokenizer engine.
//!
//! A run feeds one code at a time into the current state. Each state looks
//! at [`Tokenizer::current`], may emit boundaries and consume at most one
//! code, then names the next [`State`]. `Ok`/`Nok` end the innermost
//! speculative run started by [`Tokenizer::attempt`], [`Tokenizer::check`]
//! or [`Tokenizer::repeat_attempt`]:
//!
//! ```text
//!           attempt(ok, nok)                 snapshot: point, #events,
//!   state ─────────────────▶ construct ...   #tokens, open stack, #resolvers
//!                               │
//!            ┌──── Ok ──────────┴────── Nok ────┐
//!            ▼                                  ▼
//!   attempt: keep events, go to ok     restore snapshot, go to nok
//!   check:   restore snapshot, go to ok
//! ```
//!
//! Rollback is truncation: events, tokens and resolvers are append-only
//! while scanning forward, so restoring a snapshot is a few `truncate`
//! calls and a cursor reset.
//!
//! Invariant violations (mismatched exit, consuming past the end, a state
//! asserting something that does not hold) are recorded as a
//! [`TokenizeError`] and end the run before any pending attempt can treat
//! them as `Nok`.

use tracing::{debug, trace};

use crate::code::Code;
use crate::construct::{Construct, Resolver};
use crate::document::{ContainerState, DocumentState};
use crate::error::TokenizeError;
use crate::event::{ContentType, Event, EventKind, Point, Token, TokenType};
use crate::options::Options;
use crate::resolve;
use crate::state::{call, StateName};

/// What a state hands back to the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Continue at this state with the next code (after a consume).
    Next(StateName),
    /// Continue at this state with the same code.
    Retry(StateName),
    /// The current construct matched.
    Ok,
    /// The current construct does not match here.
    Nok,
}

/// Index of a token in the tokenizer's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenId(pub(crate) usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AttemptKind {
    Attempt,
    Check,
    Repeat,
}

#[derive(Debug)]
struct Snapshot {
    point: Point,
    events: usize,
    tokens: usize,
    stack: Vec<TokenId>,
    resolvers: usize,
}

#[derive(Debug)]
struct Attempt {
    kind: AttemptKind,
    ok: State,
    nok: State,
    snapshot: Snapshot,
}

/// A token while tokenizing: its span plus scratch space constructs may use
/// while the token is open. The scratch is cleared on exit and never reaches
/// an emitted [`Event`].
#[derive(Debug, Clone, Copy)]
pub(crate) struct TokenSlot {
    pub token: Token,
    pub size: usize,
}

/// An event while tokenizing. Refers to its token by id, so a resolver that
/// retypes or resizes a token changes both its enter and its exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct EventSlot {
    pub kind: EventKind,
    pub token: TokenId,
    pub context: ContentType,
}

/// Engine state for one run. Constructs receive `&mut Tokenizer` as their
/// only context.
#[derive(Debug)]
pub struct Tokenizer<'a> {
    codes: &'a [Code],
    pub(crate) options: &'a Options,
    point: Point,
    consumed: bool,
    pub(crate) events: Vec<EventSlot>,
    pub(crate) tokens: Vec<TokenSlot>,
    stack: Vec<TokenId>,
    attempts: Vec<Attempt>,
    pub(crate) resolvers: Vec<Resolver>,
    /// Set while a construct is trying to interrupt an open paragraph.
    pub(crate) interrupt: bool,
    /// Set while the current line is a lazy paragraph continuation.
    pub(crate) lazy: bool,
    /// State of the container whose protocol is running.
    pub(crate) container: ContainerState,
    pub(crate) document: DocumentState,
    /// Content type stamped on new events.
    pub(crate) context: ContentType,
    fatal: Option<TokenizeError>,
}

impl<'a> Tokenizer<'a> {
    /// A tokenizer over `codes`, starting at `start`. Reading past the end
    /// of `codes` yields [`Code::Eof`].
    pub(crate) fn new(codes: &'a [Code], options: &'a Options, start: Point) -> Self {
        Self {
            codes,
            options,
            point: start,
            consumed: false,
            events: Vec::new(),
            tokens: Vec::new(),
            stack: Vec::new(),
            attempts: Vec::new(),
            resolvers: Vec::new(),
            interrupt: false,
            lazy: false,
            container: ContainerState::default(),
            document: DocumentState::default(),
            context: ContentType::Document,
            fatal: None,
        }
    }

    #[inline]
    pub(crate) fn codes(&self) -> &'a [Code] {
        self.codes
    }

    /// The code under the cursor.
    #[inline]
    pub fn current(&self) -> Code {
        self.codes.get(self.point.index).copied().unwrap_or(Code::Eof)
    }

    /// The cursor position.
    #[inline]
    pub fn now(&self) -> Point {
        self.point
    }

    #[inline]
    pub(crate) fn stack_len(&self) -> usize {
        self.stack.len()
    }

    // ===== Effects =====

    /// Open a token at the cursor.
    pub fn enter(&mut self, kind: TokenType) -> TokenId {
        let id = TokenId(self.tokens.len());
        self.tokens.push(TokenSlot {
            token: Token {
                kind,
                start: self.point,
                end: self.point,
            },
            size: 0,
        });
        self.events.push(EventSlot {
            kind: EventKind::Enter,
            token: id,
            context: self.context,
        });
        self.stack.push(id);
        id
    }

    /// Close the innermost open token, which must be of type `kind`.
    pub fn exit(&mut self, kind: TokenType) {
        let Some(&id) = self.stack.last() else {
            self.violation(TokenizeError::ExitWithoutEnter {
                expected: kind,
                point: self.point,
            });
            return;
        };

        let found = self.tokens[id.0].token.kind;
        if found != kind {
            self.violation(TokenizeError::ExitMismatch {
                expected: kind,
                found,
                point: self.point,
            });
            return;
        }

        self.close(id);
    }

    /// Close the innermost open token, whatever its type.
    pub(crate) fn exit_innermost(&mut self) {
        if let Some(&id) = self.stack.last() {
            self.close(id);
        }
    }

    fn close(&mut self, id: TokenId) {
        let slot = &mut self.tokens[id.0];
        slot.token.end = self.point;
        slot.size = 0;
        self.events.push(EventSlot {
            kind: EventKind::Exit,
            token: id,
            context: self.context,
        });
        self.stack.pop();
    }

    /// Move past the current code.
    pub fn consume(&mut self) {
        if self.consumed {
            self.violation(TokenizeError::DoubleConsume { point: self.point });
            return;
        }

        let code = self.current();
        if code == Code::Eof {
            self.violation(TokenizeError::ConsumeEof { point: self.point });
            return;
        }

        if code.is_line_ending() {
            self.point.line += 1;
            self.point.column = 1;
        } else {
            self.point.column += 1;
        }
        self.point.offset += code.byte_len();
        self.point.index += 1;
        self.consumed = true;
    }

    /// Run a construct; keep what it produced if it matches.
    pub fn attempt(&mut self, ok: State, nok: State) {
        self.push_attempt(AttemptKind::Attempt, ok, nok);
    }

    /// Run a construct purely as lookahead: whatever happens, nothing it
    /// produced is kept.
    pub fn check(&mut self, ok: State, nok: State) {
        self.push_attempt(AttemptKind::Check, ok, nok);
    }

    /// Same contract as [`Tokenizer::attempt`], for constructs tried again
    /// on every line (such as a closing fence).
    pub fn repeat_attempt(&mut self, ok: State, nok: State) {
        self.push_attempt(AttemptKind::Repeat, ok, nok);
    }

    fn push_attempt(&mut self, kind: AttemptKind, ok: State, nok: State) {
        if self.attempts.len() >= self.options.attempt_depth_max {
            self.violation(TokenizeError::AttemptDepth {
                limit: self.options.attempt_depth_max,
                point: self.point,
            });
            return;
        }

        trace!(
            target: "mdtoken::tokenizer",
            kind = ?kind,
            depth = self.attempts.len(),
            at = %self.point,
            "attempt"
        );

        self.attempts.push(Attempt {
            kind,
            ok,
            nok,
            snapshot: Snapshot {
                point: self.point,
                events: self.events.len(),
                tokens: self.tokens.len(),
                stack: self.stack.clone(),
                resolvers: self.resolvers.len(),
            },
        });
    }

    fn restore(&mut self, snapshot: Snapshot) {
        self.point = snapshot.point;
        self.events.truncate(snapshot.events);
        self.tokens.truncate(snapshot.tokens);
        self.stack = snapshot.stack;
        self.resolvers.truncate(snapshot.resolvers);
    }

    fn settle(&mut self, attempt: Attempt, ok: bool) -> State {
        trace!(
            target: "mdtoken::tokenizer",
            kind = ?attempt.kind,
            depth = self.attempts.len(),
            ok,
            at = %self.point,
            "settled"
        );

        if ok {
            if attempt.kind == AttemptKind::Check {
                self.restore(attempt.snapshot);
            }
            attempt.ok
        } else {
            self.restore(attempt.snapshot);
            attempt.nok
        }
    }

    // ===== Construct Helpers =====

    /// Scratch size of an open token.
    #[inline]
    pub(crate) fn size(&self, id: TokenId) -> usize {
        self.tokens[id.0].size
    }

    #[inline]
    pub(crate) fn set_size(&mut self, id: TokenId, size: usize) {
        self.tokens[id.0].size = size;
    }

    /// Columns covered by the last event's token when that token is of type
    /// `kind`, otherwise zero.
    pub(crate) fn prefix_size(&self, kind: TokenType) -> usize {
        match self.events.last() {
            Some(event) if self.tokens[event.token.0].token.kind == kind => {
                self.tokens[event.token.0].token.columns()
            }
            _ => 0,
        }
    }

    /// Type of the token behind event `index`.
    #[inline]
    pub(crate) fn event_type(&self, index: usize) -> TokenType {
        self.tokens[self.events[index].token.0].token.kind
    }

    pub(crate) fn register(&mut self, resolver: Resolver) {
        self.resolvers.push(resolver);
    }

    /// Report a broken expectation about the current code.
    pub(crate) fn fail(&mut self, expected: &'static str) -> State {
        self.violation(TokenizeError::Unexpected {
            expected,
            found: self.current(),
            point: self.point,
        });
        State::Nok
    }

    fn violation(&mut self, error: TokenizeError) {
        if self.fatal.is_none() {
            self.fatal = Some(error);
        }
    }

    // ===== Driver =====

    /// Drive states until the outermost construct settles. Returns whether
    /// it matched.
    pub(crate) fn run(&mut self, mut state: State) -> Result<bool, TokenizeError> {
        loop {
            if let Some(error) = self.fatal.take() {
                return Err(error);
            }

            state = match state {
                State::Next(name) | State::Retry(name) => {
                    self.consumed = false;
                    call(self, name)
                }
                State::Ok | State::Nok => {
                    let ok = state == State::Ok;
                    match self.attempts.pop() {
                        Some(attempt) => self.settle(attempt, ok),
                        None => return Ok(ok),
                    }
                }
            };
        }
    }

    /// Every token opened during the run must be closed.
    pub(crate) fn ensure_closed(&self) -> Result<(), TokenizeError> {
        match self.stack.last() {
            Some(id) => Err(TokenizeError::Unclosed {
                kind: self.tokens[id.0].token.kind,
                point: self.point,
            }),
            None => Ok(()),
        }
    }

    /// Freeze the provisional events into their final form.
    pub(crate) fn into_events(self) -> Vec<Event> {
        let tokens = self.tokens;
        self.events
            .into_iter()
            .map(|event| Event {
                kind: event.kind,
                token: tokens[event.token.0].token,
                context: event.context,
            })
            .collect()
    }
}

/// The outcome of a tokenizer run over a whole document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokenized {
    codes: Vec<Code>,
    events: Vec<Event>,
}

impl Tokenized {
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn codes(&self) -> &[Code] {
        &self.codes
    }

    /// The codes `token` spans.
    pub fn slice(&self, token: &Token) -> &[Code] {
        let end = token.end.index.min(self.codes.len());
        let start = token.start.index.min(end);
        &self.codes[start..end]
    }

    /// The text `token` spans.
    pub fn slice_serialize(&self, token: &Token) -> String {
        crate::chunk::serialize_codes(self.slice(token))
    }

    pub fn into_events(self) -> Vec<Event> {
        self.events
    }
}

/// Tokenize an already-normalized code sequence. Codes after the first
/// [`Code::Eof`] are ignored.
pub fn tokenize_codes(codes: &[Code], options: &Options) -> Result<Tokenized, TokenizeError> {
    tokenize_owned(codes.to_vec(), options)
}

pub(crate) fn tokenize_owned(
    codes: Vec<Code>,
    options: &Options,
) -> Result<Tokenized, TokenizeError> {
    options.validate()?;
    debug!(target: "mdtoken", codes = codes.len(), "tokenize");

    let events = {
        let mut tokenizer = Tokenizer::new(&codes, options, Point::START);
        let matched = tokenizer.run(State::Retry(StateName::DocumentStart))?;
        if !matched || tokenizer.current() != Code::Eof {
            return Err(TokenizeError::Incomplete {
                point: tokenizer.now(),
            });
        }
        tokenizer.ensure_closed()?;
        resolve::run(&mut tokenizer)?;
        tokenizer.into_events()
    };

    debug!(target: "mdtoken", events = events.len(), "tokenized");
    Ok(Tokenized { codes, events })
}

/// Flags and container state a standalone construct run starts with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProbeContext {
    pub interrupt: bool,
    pub lazy: bool,
    pub container: Option<ContainerState>,
}

/// The outcome of running one construct on its own.
///
/// Constructs that span lines stop at the first line ending, so tokens they
/// keep open for the next line are still open here. Resolvers do not run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Probe {
    pub matched: bool,
    /// Codes consumed from the start of the input.
    pub consumed: usize,
    pub events: Vec<Event>,
    /// The container state after the run.
    pub container: ContainerState,
}

/// Run `construct` alone at the start of `input`, inside an attempt.
pub fn probe(
    input: &str,
    construct: Construct,
    context: &ProbeContext,
    options: &Options,
) -> Result<Probe, TokenizeError> {
    options.validate()?;
    let codes = crate::preprocess::preprocess(input, options.tab_size);
    let mut tokenizer = Tokenizer::new(&codes, options, Point::START);
    tokenizer.interrupt = context.interrupt;
    tokenizer.lazy = context.lazy;
    tokenizer.container = context.container.unwrap_or_default();
    tokenizer.context = construct.content_type();

    tokenizer.attempt(State::Ok, State::Nok);
    let matched = tokenizer.run(State::Retry(construct.start()))?;

    let consumed = tokenizer.now().index;
    let container = tokenizer.container;
    Ok(Probe {
        matched,
        consumed,
        events: tokenizer.into_events(),
        container,
    })
}
