//! The normalized input alphabet.
//!
//! Input reaches the tokenizer as a sequence of [`Code`]s: literal characters
//! plus a closed set of synthetic markers for line endings, tabs, tab-stop
//! padding and end of input. The classification predicates used by every
//! construct live here too.

use std::fmt;

/// One unit of the normalized input.
///
/// `CarriageReturnLineFeed` is a single code: a CR+LF pair is never split.
/// `VirtualSpace` pads a horizontal tab out to the next tab stop so that
/// every code advances the column by exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Code {
    /// End of input.
    Eof,
    /// `\r` on its own.
    CarriageReturn,
    /// `\n` on its own.
    LineFeed,
    /// `\r\n`.
    CarriageReturnLineFeed,
    /// `\t`.
    HorizontalTab,
    /// Zero-width column placeholder following a tab.
    VirtualSpace,
    /// A literal character.
    Char(char),
}

impl Code {
    /// Numeric fallback: anything that is not a Unicode scalar value becomes
    /// U+FFFD instead of being dropped.
    pub fn from_u32(value: u32) -> Self {
        match char::from_u32(value) {
            Some(c) => Code::Char(c),
            None => Code::Char(char::REPLACEMENT_CHARACTER),
        }
    }

    /// The literal character, if this is one.
    #[inline]
    pub fn char(self) -> Option<char> {
        match self {
            Code::Char(c) => Some(c),
            _ => None,
        }
    }

    #[inline]
    pub fn is(self, c: char) -> bool {
        self == Code::Char(c)
    }

    #[inline]
    pub fn is_eof(self) -> bool {
        self == Code::Eof
    }

    /// CR, LF, or CR+LF.
    #[inline]
    pub fn is_line_ending(self) -> bool {
        matches!(
            self,
            Code::CarriageReturn | Code::LineFeed | Code::CarriageReturnLineFeed
        )
    }

    /// End of input or a line ending.
    #[inline]
    pub fn is_ending(self) -> bool {
        self == Code::Eof || self.is_line_ending()
    }

    /// Space, tab, or tab padding.
    #[inline]
    pub fn is_space(self) -> bool {
        matches!(
            self,
            Code::HorizontalTab | Code::VirtualSpace | Code::Char(' ')
        )
    }

    #[inline]
    pub fn is_line_ending_or_space(self) -> bool {
        self.is_line_ending() || self.is_space()
    }

    #[inline]
    pub fn is_ascii_digit(self) -> bool {
        matches!(self, Code::Char(c) if c.is_ascii_digit())
    }

    /// C0 controls and DEL. Synthetic codes other than end of input count as
    /// controls.
    #[inline]
    pub fn is_ascii_control(self) -> bool {
        match self {
            Code::Eof => false,
            Code::Char(c) => c < ' ' || c == '\u{7f}',
            _ => true,
        }
    }

    #[inline]
    pub fn is_ascii_punctuation(self) -> bool {
        matches!(self, Code::Char(c) if c.is_ascii_punctuation())
    }

    /// Bytes this code occupies in the original text.
    #[inline]
    pub fn byte_len(self) -> usize {
        match self {
            Code::Eof | Code::VirtualSpace => 0,
            Code::CarriageReturn | Code::LineFeed | Code::HorizontalTab => 1,
            Code::CarriageReturnLineFeed => 2,
            Code::Char(c) => c.len_utf8(),
        }
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Code::Eof => f.write_str("end of input"),
            Code::CarriageReturn => f.write_str("carriage return"),
            Code::LineFeed => f.write_str("line feed"),
            Code::CarriageReturnLineFeed => f.write_str("carriage return + line feed"),
            Code::HorizontalTab => f.write_str("tab"),
            Code::VirtualSpace => f.write_str("virtual space"),
            Code::Char(c) => write!(f, "`{}`", c.escape_debug()),
        }
    }
}
