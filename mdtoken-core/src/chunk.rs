//! Chunks and their serialization back to text.
//!
//! A chunk is either a literal run of text or a single synthetic [`Code`].
//! Serialization is the inverse of preprocessing: line endings come back
//! exactly as they were written, a tab comes back as one `\t`, and the
//! virtual spaces that padded it out to the tab stop vanish.
//!
//! ```text
//! chunks:  "a"  HT  VS  VS  "b"  CRLF  VS
//! output:  "a"  "\t"          "b"  "\r\n" " "
//! ```
//!
//! A virtual space that does not follow a tab (for example when a slice
//! starts in the middle of a tab's padding) is rendered as a plain space.

use crate::code::Code;

/// One unit of serializer input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chunk<'a> {
    /// Literal text, passed through unchanged.
    Str(&'a str),
    /// A single code.
    Code(Code),
}

impl From<Code> for Chunk<'_> {
    fn from(code: Code) -> Self {
        Chunk::Code(code)
    }
}

impl<'a> From<&'a str> for Chunk<'a> {
    fn from(value: &'a str) -> Self {
        Chunk::Str(value)
    }
}

/// Incremental serializer.
///
/// Tracks whether the previous chunk was a tab (or padding of one) so that
/// the padding codes following it are suppressed.
#[derive(Debug, Default)]
pub struct Serializer {
    out: String,
    at_tab: bool,
}

impl Serializer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            out: String::with_capacity(capacity),
            at_tab: false,
        }
    }

    pub fn push(&mut self, chunk: Chunk<'_>) {
        match chunk {
            Chunk::Str(value) => {
                self.out.push_str(value);
                self.at_tab = false;
            }
            Chunk::Code(code) => self.push_code(code),
        }
    }

    pub fn push_code(&mut self, code: Code) {
        match code {
            Code::VirtualSpace => {
                if !self.at_tab {
                    self.out.push(' ');
                }
                // Suppressed padding keeps `at_tab` set for the rest of the run.
                return;
            }
            Code::Eof => {}
            Code::CarriageReturn => self.out.push('\r'),
            Code::LineFeed => self.out.push('\n'),
            Code::CarriageReturnLineFeed => self.out.push_str("\r\n"),
            Code::HorizontalTab => self.out.push('\t'),
            Code::Char(c) => self.out.push(c),
        }
        self.at_tab = code == Code::HorizontalTab;
    }

    pub fn finish(self) -> String {
        self.out
    }
}

/// Serialize a run of chunks.
pub fn serialize(chunks: &[Chunk<'_>]) -> String {
    let mut serializer = Serializer::with_capacity(chunks.len());
    for chunk in chunks {
        serializer.push(*chunk);
    }
    serializer.finish()
}

/// Serialize a run of codes.
pub fn serialize_codes(codes: &[Code]) -> String {
    let mut serializer = Serializer::with_capacity(codes.len());
    for code in codes {
        serializer.push_code(*code);
    }
    serializer.finish()
}
