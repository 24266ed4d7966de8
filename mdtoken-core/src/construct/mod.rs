//! Constructs.
//!
//! A construct is a group of states that recognizes one markdown thing and
//! emits its events. Constructs never see each other's internals: they
//! communicate through the events already emitted, the tokenizer flags
//! (`interrupt`, `lazy`) and, for containers, [`ContainerState`].
//!
//! | Construct          | Kind      | Entry                        |
//! |--------------------|-----------|------------------------------|
//! | blank line         | partial   | [`partial_blank_line`]       |
//! | space or tab       | partial   | [`partial_space`]            |
//! | label              | partial   | [`partial_label`]            |
//! | destination        | partial   | [`partial_destination`]      |
//! | title              | partial   | [`partial_title`]            |
//! | list               | container | [`list`]                     |
//! | thematic break     | flow      | [`thematic_break`]           |
//! | code (fenced)      | flow      | [`code_fenced`]              |
//! | setext underline   | flow      | [`setext_underline`]         |
//! | content/definition | flow      | [`content`], [`definition`]  |
//! | character escape   | string    | [`character_escape`]         |

use phf::phf_map;

use crate::document::ContainerState;
use crate::event::ContentType;
use crate::state::StateName;
use crate::tokenizer::Tokenizer;

pub mod character_escape;
pub mod code_fenced;
pub mod content;
pub mod definition;
pub mod flow;
pub mod list;
pub mod partial_blank_line;
pub mod partial_destination;
pub mod partial_label;
pub mod partial_space;
pub mod partial_title;
pub mod setext_underline;
pub mod string;
pub mod thematic_break;

pub(crate) use crate::resolve::Resolver;

/// Constructs that can be run on their own with [`crate::probe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Construct {
    BlankLine,
    CharacterEscape,
    CodeFenced,
    Content,
    Definition,
    Destination,
    Label,
    List,
    ListContinuation,
    SetextUnderline,
    ThematicBreak,
    Title,
}

impl Construct {
    pub const ALL: [Construct; 12] = [
        Construct::BlankLine,
        Construct::CharacterEscape,
        Construct::CodeFenced,
        Construct::Content,
        Construct::Definition,
        Construct::Destination,
        Construct::Label,
        Construct::List,
        Construct::ListContinuation,
        Construct::SetextUnderline,
        Construct::ThematicBreak,
        Construct::Title,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::BlankLine => "blankLine",
            Self::CharacterEscape => "characterEscape",
            Self::CodeFenced => "codeFenced",
            Self::Content => "content",
            Self::Definition => "definition",
            Self::Destination => "destination",
            Self::Label => "label",
            Self::List => "list",
            Self::ListContinuation => "listContinuation",
            Self::SetextUnderline => "setextUnderline",
            Self::ThematicBreak => "thematicBreak",
            Self::Title => "title",
        }
    }

    /// Partial constructs only ever run as pieces of other constructs.
    pub fn partial(self) -> bool {
        matches!(
            self,
            Self::BlankLine | Self::Destination | Self::Label | Self::Title
        )
    }

    pub(crate) fn start(self) -> StateName {
        match self {
            Self::BlankLine => StateName::BlankLineStart,
            Self::CharacterEscape => StateName::CharacterEscapeStart,
            Self::CodeFenced => StateName::CodeFencedStart,
            Self::Content => StateName::ContentStart,
            Self::Definition => StateName::DefinitionStart,
            Self::Destination => StateName::DestinationStart,
            Self::Label => StateName::LabelStart,
            Self::List => LIST.tokenize,
            Self::ListContinuation => LIST.continuation,
            Self::SetextUnderline => StateName::SetextUnderlineStart,
            Self::ThematicBreak => StateName::ThematicBreakStart,
            Self::Title => StateName::TitleStart,
        }
    }

    pub(crate) fn content_type(self) -> ContentType {
        match self {
            Self::List | Self::ListContinuation => ContentType::Document,
            Self::CharacterEscape => ContentType::String,
            _ => ContentType::Flow,
        }
    }
}

/// The protocol every container implements.
///
/// `tokenize` opens the container on a line, `continuation` decides whether
/// an open container goes on for another line and `exit` closes it.
#[derive(Debug)]
pub struct ContainerConstruct {
    pub name: &'static str,
    pub tokenize: StateName,
    pub continuation: StateName,
    pub exit: fn(&mut Tokenizer<'_>, &ContainerState),
}

pub static LIST: ContainerConstruct = ContainerConstruct {
    name: "list",
    tokenize: StateName::ListStart,
    continuation: StateName::ListContStart,
    exit: list::exit,
};

const THEMATIC_BREAK: &[Construct] = &[Construct::ThematicBreak];
const DASH: &[Construct] = &[Construct::SetextUnderline, Construct::ThematicBreak];
const EQUALS: &[Construct] = &[Construct::SetextUnderline];
const FENCE: &[Construct] = &[Construct::CodeFenced];

/// Flow constructs by first character, tried in order. Anything else (or
/// nothing matching) is content.
pub(crate) static FLOW: phf::Map<char, &'static [Construct]> = phf_map! {
    '*' => THEMATIC_BREAK,
    '-' => DASH,
    '=' => EQUALS,
    '_' => THEMATIC_BREAK,
    '`' => FENCE,
    '~' => FENCE,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<_> = Construct::ALL.iter().map(|c| c.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Construct::ALL.len());
    }

    #[test]
    fn test_flow_table() {
        assert_eq!(
            FLOW.get(&'-').copied(),
            Some(&[Construct::SetextUnderline, Construct::ThematicBreak][..])
        );
        assert!(FLOW.get(&'a').is_none());
        assert!(FLOW.values().flat_map(|list| list.iter()).all(|c| !c.partial()));
    }
}
