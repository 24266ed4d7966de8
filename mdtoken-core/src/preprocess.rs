//! Turn raw text into the code alphabet.
//!
//! Line endings become single codes (`\r\n` stays one code), tabs are padded
//! with virtual spaces out to the next tab stop, NUL becomes U+FFFD, a
//! leading byte order mark is dropped, and the result always ends in
//! [`Code::Eof`].

use memchr::memchr3;

use crate::code::Code;

/// Preprocess `value` with tab stops every `tab_size` columns.
pub fn preprocess(value: &str, tab_size: usize) -> Vec<Code> {
    let tab_size = tab_size.max(1);
    let value = value.strip_prefix('\u{FEFF}').unwrap_or(value);
    let bytes = value.as_bytes();
    let mut codes = Vec::with_capacity(value.len() + 1);
    let mut column: usize = 1;
    let mut start = 0;

    while start < bytes.len() {
        let special = memchr3(b'\t', b'\r', b'\n', &bytes[start..]).map(|at| start + at);
        let end = special.unwrap_or(bytes.len());

        // The special bytes are ASCII, so `end` is always a char boundary.
        for c in value[start..end].chars() {
            codes.push(if c == '\0' {
                Code::Char(char::REPLACEMENT_CHARACTER)
            } else {
                Code::Char(c)
            });
            column += 1;
        }

        let Some(at) = special else { break };

        match bytes[at] {
            b'\t' => {
                let stop = column.div_ceil(tab_size) * tab_size;
                codes.push(Code::HorizontalTab);
                while column < stop {
                    codes.push(Code::VirtualSpace);
                    column += 1;
                }
                column += 1;
                start = at + 1;
            }
            b'\r' if bytes.get(at + 1) == Some(&b'\n') => {
                codes.push(Code::CarriageReturnLineFeed);
                column = 1;
                start = at + 2;
            }
            b'\r' => {
                codes.push(Code::CarriageReturn);
                column = 1;
                start = at + 1;
            }
            _ => {
                codes.push(Code::LineFeed);
                column = 1;
                start = at + 1;
            }
        }
    }

    codes.push(Code::Eof);
    codes
}
