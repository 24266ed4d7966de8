//! mdtoken core tokenizer
//!
//! Character-driven markdown tokenizer. Turns text into a flat, well-nested
//! list of enter/exit events; compiling those events to anything else is up
//! to the caller.
//!
//! # Architecture
//!
//! - **preprocess.rs** - Text to [`Code`]s: atomic line endings, tab padding
//! - **tokenizer.rs** - The engine: states, attempts/checks with rollback
//! - **state.rs** - Every construct state and its dispatch
//! - **document.rs** - Containers and flow, line by line
//! - **construct/** - List, fenced code, setext underline, content, ...
//! - **resolve.rs** - Rewrites after the run (setext headings, fence info)
//! - **chunk.rs** - Codes and text back to a string
//!
//! # Example
//!
//! ```
//! use mdtoken_core::{tokenize, TokenType};
//!
//! let tokenized = tokenize("- a\n").unwrap();
//! let first = &tokenized.events()[0];
//! assert_eq!(first.token.kind, TokenType::ListUnordered);
//! ```

pub mod chunk;
pub mod code;
pub mod construct;
pub mod document;
pub mod error;
pub mod event;
pub mod options;
pub mod preprocess;
mod resolve;
pub mod state;
pub mod tokenizer;

pub use chunk::{serialize, serialize_codes, Chunk, Serializer};
pub use code::Code;
pub use construct::Construct;
pub use document::{ContainerState, ListKind};
pub use error::{ConfigError, TokenizeError};
pub use event::{ContentType, Event, EventKind, Point, Token, TokenType};
pub use options::Options;
pub use preprocess::preprocess;
pub use tokenizer::{probe, tokenize_codes, Probe, ProbeContext, Tokenized};

/// Tokenize `value` with the default options.
pub fn tokenize(value: &str) -> Result<Tokenized, TokenizeError> {
    tokenize_with_options(value, &Options::default())
}

pub fn tokenize_with_options(value: &str, options: &Options) -> Result<Tokenized, TokenizeError> {
    tokenizer::tokenize_owned(preprocess(value, options.tab_size), options)
}
