//! Tokenizer events - the output of a tokenizer run.
//!
//! The output is a flat list of enter/exit pairs. Every enter of a token is
//! matched by exactly one later exit of the same token and the pairs nest
//! like a stack. Positions never go backwards in document order.
//!
//! `"- a\n"` produces:
//! ```text
//! enter listUnordered
//!   enter listItemPrefix
//!     enter listItemMarker / exit listItemMarker
//!     enter listItemPrefixWhitespace / exit listItemPrefixWhitespace
//!   exit listItemPrefix
//!   enter content
//!     enter paragraph
//!       enter data / exit data
//!     exit paragraph
//!   exit content
//!   enter lineEnding / exit lineEnding
//! exit listUnordered
//! ```

use std::fmt;

use phf::phf_map;

/// A position in the source.
///
/// `line` and `column` are 1-based; `column` counts codes, so a tab and its
/// padding span to the next tab stop. `offset` is the byte offset into the
/// original text and `index` the position in the code sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
    pub index: usize,
}

impl Point {
    /// The start of a document.
    pub const START: Point = Point {
        line: 1,
        column: 1,
        offset: 0,
        index: 0,
    };
}

impl Default for Point {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Token types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    // ========== Containers ==========
    ListOrdered,
    ListUnordered,
    ListItemPrefix,
    ListItemValue,
    ListItemMarker,
    ListItemPrefixWhitespace,
    ListItemIndent,

    // ========== Whitespace & Line Endings ==========
    LinePrefix,
    LineSuffix,
    LineEnding,
    LineEndingBlank,
    Whitespace,

    // ========== Flow ==========
    ThematicBreak,
    ThematicBreakSequence,
    CodeFenced,
    CodeFencedFence,
    CodeFencedFenceSequence,
    CodeFencedFenceInfo,
    CodeFencedFenceMeta,
    CodeFlowValue,
    SetextHeading,
    SetextHeadingText,
    SetextHeadingLine,
    SetextHeadingLineSequence,
    Content,
    Paragraph,

    // ========== Definitions ==========
    Definition,
    DefinitionLabel,
    DefinitionLabelMarker,
    DefinitionLabelString,
    DefinitionMarker,
    DefinitionDestination,
    DefinitionDestinationLiteral,
    DefinitionDestinationLiteralMarker,
    DefinitionDestinationRaw,
    DefinitionDestinationString,
    DefinitionTitle,
    DefinitionTitleMarker,
    DefinitionTitleString,

    // ========== String Content ==========
    Data,
    CharacterEscape,
    CharacterEscapeMarker,
    CharacterEscapeValue,
}

static TOKEN_TYPES: phf::Map<&'static str, TokenType> = phf_map! {
    "listOrdered" => TokenType::ListOrdered,
    "listUnordered" => TokenType::ListUnordered,
    "listItemPrefix" => TokenType::ListItemPrefix,
    "listItemValue" => TokenType::ListItemValue,
    "listItemMarker" => TokenType::ListItemMarker,
    "listItemPrefixWhitespace" => TokenType::ListItemPrefixWhitespace,
    "listItemIndent" => TokenType::ListItemIndent,
    "linePrefix" => TokenType::LinePrefix,
    "lineSuffix" => TokenType::LineSuffix,
    "lineEnding" => TokenType::LineEnding,
    "lineEndingBlank" => TokenType::LineEndingBlank,
    "whitespace" => TokenType::Whitespace,
    "thematicBreak" => TokenType::ThematicBreak,
    "thematicBreakSequence" => TokenType::ThematicBreakSequence,
    "codeFenced" => TokenType::CodeFenced,
    "codeFencedFence" => TokenType::CodeFencedFence,
    "codeFencedFenceSequence" => TokenType::CodeFencedFenceSequence,
    "codeFencedFenceInfo" => TokenType::CodeFencedFenceInfo,
    "codeFencedFenceMeta" => TokenType::CodeFencedFenceMeta,
    "codeFlowValue" => TokenType::CodeFlowValue,
    "setextHeading" => TokenType::SetextHeading,
    "setextHeadingText" => TokenType::SetextHeadingText,
    "setextHeadingLine" => TokenType::SetextHeadingLine,
    "setextHeadingLineSequence" => TokenType::SetextHeadingLineSequence,
    "content" => TokenType::Content,
    "paragraph" => TokenType::Paragraph,
    "definition" => TokenType::Definition,
    "definitionLabel" => TokenType::DefinitionLabel,
    "definitionLabelMarker" => TokenType::DefinitionLabelMarker,
    "definitionLabelString" => TokenType::DefinitionLabelString,
    "definitionMarker" => TokenType::DefinitionMarker,
    "definitionDestination" => TokenType::DefinitionDestination,
    "definitionDestinationLiteral" => TokenType::DefinitionDestinationLiteral,
    "definitionDestinationLiteralMarker" => TokenType::DefinitionDestinationLiteralMarker,
    "definitionDestinationRaw" => TokenType::DefinitionDestinationRaw,
    "definitionDestinationString" => TokenType::DefinitionDestinationString,
    "definitionTitle" => TokenType::DefinitionTitle,
    "definitionTitleMarker" => TokenType::DefinitionTitleMarker,
    "definitionTitleString" => TokenType::DefinitionTitleString,
    "data" => TokenType::Data,
    "characterEscape" => TokenType::CharacterEscape,
    "characterEscapeMarker" => TokenType::CharacterEscapeMarker,
    "characterEscapeValue" => TokenType::CharacterEscapeValue,
};

impl TokenType {
    /// Stable camelCase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ListOrdered => "listOrdered",
            Self::ListUnordered => "listUnordered",
            Self::ListItemPrefix => "listItemPrefix",
            Self::ListItemValue => "listItemValue",
            Self::ListItemMarker => "listItemMarker",
            Self::ListItemPrefixWhitespace => "listItemPrefixWhitespace",
            Self::ListItemIndent => "listItemIndent",
            Self::LinePrefix => "linePrefix",
            Self::LineSuffix => "lineSuffix",
            Self::LineEnding => "lineEnding",
            Self::LineEndingBlank => "lineEndingBlank",
            Self::Whitespace => "whitespace",
            Self::ThematicBreak => "thematicBreak",
            Self::ThematicBreakSequence => "thematicBreakSequence",
            Self::CodeFenced => "codeFenced",
            Self::CodeFencedFence => "codeFencedFence",
            Self::CodeFencedFenceSequence => "codeFencedFenceSequence",
            Self::CodeFencedFenceInfo => "codeFencedFenceInfo",
            Self::CodeFencedFenceMeta => "codeFencedFenceMeta",
            Self::CodeFlowValue => "codeFlowValue",
            Self::SetextHeading => "setextHeading",
            Self::SetextHeadingText => "setextHeadingText",
            Self::SetextHeadingLine => "setextHeadingLine",
            Self::SetextHeadingLineSequence => "setextHeadingLineSequence",
            Self::Content => "content",
            Self::Paragraph => "paragraph",
            Self::Definition => "definition",
            Self::DefinitionLabel => "definitionLabel",
            Self::DefinitionLabelMarker => "definitionLabelMarker",
            Self::DefinitionLabelString => "definitionLabelString",
            Self::DefinitionMarker => "definitionMarker",
            Self::DefinitionDestination => "definitionDestination",
            Self::DefinitionDestinationLiteral => "definitionDestinationLiteral",
            Self::DefinitionDestinationLiteralMarker => "definitionDestinationLiteralMarker",
            Self::DefinitionDestinationRaw => "definitionDestinationRaw",
            Self::DefinitionDestinationString => "definitionDestinationString",
            Self::DefinitionTitle => "definitionTitle",
            Self::DefinitionTitleMarker => "definitionTitleMarker",
            Self::DefinitionTitleString => "definitionTitleString",
            Self::Data => "data",
            Self::CharacterEscape => "characterEscape",
            Self::CharacterEscapeMarker => "characterEscapeMarker",
            Self::CharacterEscapeValue => "characterEscapeValue",
        }
    }

    /// Look a type up by its camelCase name.
    pub fn from_name(name: &str) -> Option<Self> {
        TOKEN_TYPES.get(name).copied()
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed span of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenType,
    pub start: Point,
    pub end: Point,
}

impl Token {
    /// Width in columns. Only meaningful for tokens on a single line.
    #[inline]
    pub fn columns(&self) -> usize {
        self.end.column.saturating_sub(self.start.column)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Enter,
    Exit,
}

/// The content type an event was tokenized in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    /// Containers and the line endings between blocks.
    Document,
    /// Block-level constructs.
    Flow,
    /// Plain text inside a block (fence info/meta).
    String,
}

/// One enter or exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    pub kind: EventKind,
    pub token: Token,
    pub context: ContentType,
}

impl Event {
    #[inline]
    pub fn is_enter(&self) -> bool {
        self.kind == EventKind::Enter
    }

    #[inline]
    pub fn is_exit(&self) -> bool {
        self.kind == EventKind::Exit
    }

    /// Position of this boundary: the start for an enter, the end for an exit.
    #[inline]
    pub fn point(&self) -> Point {
        match self.kind {
            EventKind::Enter => self.token.start,
            EventKind::Exit => self.token.end,
        }
    }
}
