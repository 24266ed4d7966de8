//! Every state of every construct, and the dispatch from name to code.
//!
//! Locals a construct needs across codes travel as variant fields, so a
//! state name is everything needed to resume a construct.

use crate::construct::code_fenced::Fence;
use crate::construct::partial_space::Space;
use crate::construct::{
    character_escape, code_fenced, content, definition, flow, list, partial_blank_line,
    partial_destination, partial_label, partial_space, partial_title, setext_underline, string,
    thematic_break,
};
use crate::document;
use crate::tokenizer::{State, TokenId, Tokenizer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateName {
    SpaceStart(Space),
    SpaceInside { space: Space, size: usize },

    BlankLineStart,
    BlankLineAfter,

    ThematicBreakStart,
    ThematicBreakAtBreak { marker: char, size: usize },
    ThematicBreakSequence { marker: char, size: usize },

    CodeFencedStart,
    CodeFencedSequenceOpen(Fence),
    CodeFencedInfoBefore(Fence),
    CodeFencedInfo(Fence),
    CodeFencedMetaBefore(Fence),
    CodeFencedMeta(Fence),
    CodeFencedOpenAfter(Fence),
    CodeFencedLineStart(Fence),
    CodeFencedCloseStart(Fence),
    CodeFencedCloseSequenceBefore(Fence),
    CodeFencedCloseSequence { fence: Fence, size: usize },
    CodeFencedCloseSequenceAfter,
    CodeFencedAfterClose,
    CodeFencedContentStart(Fence),
    CodeFencedContentBefore(Fence),
    CodeFencedContentData(Fence),

    SetextUnderlineStart,
    SetextUnderlineSequence { marker: char },
    SetextUnderlineAfter,

    ListStart,
    ListValue { initial: usize, value: TokenId },
    ListAtMarker { initial: usize },
    ListMarkerAfter { initial: usize },
    ListPrefixWhitespaceBefore { initial: usize },
    ListOnBlank { initial: usize },
    ListPrefixOther { initial: usize },
    ListPrefixEnd { initial: usize },
    ListPrefixWhitespaceStart,
    ListPrefixWhitespaceAfter,
    ListContStart,
    ListContBlank,
    ListContFilled,
    ListContNotInItem,
    ListContOnItem,
    ListIndentStart,
    ListIndentAfter,
    ListNextItemStart,

    ContentStart,
    ContentDefinitionBefore,
    ContentDefinitionAfter,
    ContentParagraphStart,
    ContentDataStart,
    ContentData,
    ContentLineStart { paragraph: bool },

    DefinitionStart,
    DefinitionLabelAfter,
    DefinitionMarkerAfter,
    DefinitionDestinationBefore,
    DefinitionDestinationAfter,
    DefinitionTitleBefore,
    DefinitionTitleBeforeMarker,
    DefinitionTitleAfter,
    DefinitionTitleAfterWhitespace,
    DefinitionAfter,
    DefinitionAfterWhitespace,

    DestinationStart,
    DestinationEnclosedBefore,
    DestinationEnclosed,
    DestinationEnclosedEscape,
    DestinationRaw { balance: usize },
    DestinationRawEscape { balance: usize },

    LabelStart,
    LabelInside { size: usize, data: bool },
    LabelEscape { size: usize, data: bool },

    TitleStart,
    TitleBegin { marker: char },
    TitleInside { marker: char },
    TitleEscape { marker: char },

    StringBefore,
    StringDataStart,
    StringData,

    CharacterEscapeStart,
    CharacterEscapeInside,

    FlowStart,
    FlowBlankLineAfter,
    FlowPrefix,
    FlowBefore { index: usize },
    FlowInterruptStart,
    FlowInterruptBefore { index: usize },

    DocumentStart,
    DocumentLineStart,
    DocumentContainerExistingBefore,
    DocumentContainerExistingAfter,
    DocumentContainerExistingMissing,
    DocumentContainersDone,
    DocumentContainerNewBefore,
    DocumentContainerNewStart,
    DocumentContainerNewAfter,
    DocumentContainerNewMissing,
    DocumentFlowStart,
    DocumentFlowEnd,
    DocumentLineEnd,
    DocumentLineEndAfterInspect,
    DocumentEof,
    DocumentInspectStart,
    DocumentInspectExistingBefore,
    DocumentInspectExistingAfter,
    DocumentInspectContainersDone,
    DocumentInspectNoNewContainer,
    DocumentInspectInterrupt,
    DocumentInspectFlowContinue,
    DocumentInspectFlowEnd,
    DocumentInspectDone,
}

/// Run one state.
pub fn call(tokenizer: &mut Tokenizer, name: StateName) -> State {
    use StateName::*;

    match name {
        SpaceStart(space) => partial_space::start(tokenizer, space),
        SpaceInside { space, size } => partial_space::inside(tokenizer, space, size),

        BlankLineStart => partial_blank_line::start(tokenizer),
        BlankLineAfter => partial_blank_line::after(tokenizer),

        ThematicBreakStart => thematic_break::start(tokenizer),
        ThematicBreakAtBreak { marker, size } => thematic_break::at_break(tokenizer, marker, size),
        ThematicBreakSequence { marker, size } => thematic_break::sequence(tokenizer, marker, size),

        CodeFencedStart => code_fenced::start(tokenizer),
        CodeFencedSequenceOpen(fence) => code_fenced::sequence_open(tokenizer, fence),
        CodeFencedInfoBefore(fence) => code_fenced::info_before(tokenizer, fence),
        CodeFencedInfo(fence) => code_fenced::info(tokenizer, fence),
        CodeFencedMetaBefore(fence) => code_fenced::meta_before(tokenizer, fence),
        CodeFencedMeta(fence) => code_fenced::meta(tokenizer, fence),
        CodeFencedOpenAfter(fence) => code_fenced::open_after(tokenizer, fence),
        CodeFencedLineStart(fence) => code_fenced::line_start(tokenizer, fence),
        CodeFencedCloseStart(fence) => code_fenced::close_start(tokenizer, fence),
        CodeFencedCloseSequenceBefore(fence) => code_fenced::close_sequence_before(tokenizer, fence),
        CodeFencedCloseSequence { fence, size } => code_fenced::close_sequence(tokenizer, fence, size),
        CodeFencedCloseSequenceAfter => code_fenced::close_sequence_after(tokenizer),
        CodeFencedAfterClose => code_fenced::after_close(tokenizer),
        CodeFencedContentStart(fence) => code_fenced::content_start(tokenizer, fence),
        CodeFencedContentBefore(fence) => code_fenced::content_before(tokenizer, fence),
        CodeFencedContentData(fence) => code_fenced::content_data(tokenizer, fence),

        SetextUnderlineStart => setext_underline::start(tokenizer),
        SetextUnderlineSequence { marker } => setext_underline::sequence(tokenizer, marker),
        SetextUnderlineAfter => setext_underline::after(tokenizer),

        ListStart => list::start(tokenizer),
        ListValue { initial, value } => list::value(tokenizer, initial, value),
        ListAtMarker { initial } => list::at_marker(tokenizer, initial),
        ListMarkerAfter { initial } => list::marker_after(tokenizer, initial),
        ListPrefixWhitespaceBefore { initial } => list::prefix_whitespace_before(tokenizer, initial),
        ListOnBlank { initial } => list::on_blank(tokenizer, initial),
        ListPrefixOther { initial } => list::prefix_other(tokenizer, initial),
        ListPrefixEnd { initial } => list::prefix_end(tokenizer, initial),
        ListPrefixWhitespaceStart => list::prefix_whitespace_start(tokenizer),
        ListPrefixWhitespaceAfter => list::prefix_whitespace_after(tokenizer),
        ListContStart => list::cont_start(tokenizer),
        ListContBlank => list::cont_blank(tokenizer),
        ListContFilled => list::cont_filled(tokenizer),
        ListContNotInItem => list::cont_not_in_item(tokenizer),
        ListContOnItem => list::cont_on_item(tokenizer),
        ListIndentStart => list::indent_start(tokenizer),
        ListIndentAfter => list::indent_after(tokenizer),
        ListNextItemStart => list::next_item_start(tokenizer),

        ContentStart => content::start(tokenizer),
        ContentDefinitionBefore => content::definition_before(tokenizer),
        ContentDefinitionAfter => content::definition_after(tokenizer),
        ContentParagraphStart => content::paragraph_start(tokenizer),
        ContentDataStart => content::data_start(tokenizer),
        ContentData => content::data(tokenizer),
        ContentLineStart { paragraph } => content::line_start(tokenizer, paragraph),

        DefinitionStart => definition::start(tokenizer),
        DefinitionLabelAfter => definition::label_after(tokenizer),
        DefinitionMarkerAfter => definition::marker_after(tokenizer),
        DefinitionDestinationBefore => definition::destination_before(tokenizer),
        DefinitionDestinationAfter => definition::destination_after(tokenizer),
        DefinitionTitleBefore => definition::title_before(tokenizer),
        DefinitionTitleBeforeMarker => definition::title_before_marker(tokenizer),
        DefinitionTitleAfter => definition::title_after(tokenizer),
        DefinitionTitleAfterWhitespace => definition::title_after_whitespace(tokenizer),
        DefinitionAfter => definition::after(tokenizer),
        DefinitionAfterWhitespace => definition::after_whitespace(tokenizer),

        DestinationStart => partial_destination::start(tokenizer),
        DestinationEnclosedBefore => partial_destination::enclosed_before(tokenizer),
        DestinationEnclosed => partial_destination::enclosed(tokenizer),
        DestinationEnclosedEscape => partial_destination::enclosed_escape(tokenizer),
        DestinationRaw { balance } => partial_destination::raw(tokenizer, balance),
        DestinationRawEscape { balance } => partial_destination::raw_escape(tokenizer, balance),

        LabelStart => partial_label::start(tokenizer),
        LabelInside { size, data } => partial_label::inside(tokenizer, size, data),
        LabelEscape { size, data } => partial_label::escape(tokenizer, size, data),

        TitleStart => partial_title::start(tokenizer),
        TitleBegin { marker } => partial_title::begin(tokenizer, marker),
        TitleInside { marker } => partial_title::inside(tokenizer, marker),
        TitleEscape { marker } => partial_title::escape(tokenizer, marker),

        StringBefore => string::before(tokenizer),
        StringDataStart => string::data_start(tokenizer),
        StringData => string::data(tokenizer),

        CharacterEscapeStart => character_escape::start(tokenizer),
        CharacterEscapeInside => character_escape::inside(tokenizer),

        FlowStart => flow::start(tokenizer),
        FlowBlankLineAfter => flow::blank_line_after(tokenizer),
        FlowPrefix => flow::prefix(tokenizer),
        FlowBefore { index } => flow::before(tokenizer, index),
        FlowInterruptStart => flow::interrupt_start(tokenizer),
        FlowInterruptBefore { index } => flow::interrupt_before(tokenizer, index),

        DocumentStart => document::start(tokenizer),
        DocumentLineStart => document::line_start(tokenizer),
        DocumentContainerExistingBefore => document::container_existing_before(tokenizer),
        DocumentContainerExistingAfter => document::container_existing_after(tokenizer),
        DocumentContainerExistingMissing => document::container_existing_missing(tokenizer),
        DocumentContainersDone => document::containers_done(tokenizer),
        DocumentContainerNewBefore => document::container_new_before(tokenizer),
        DocumentContainerNewStart => document::container_new_start(tokenizer),
        DocumentContainerNewAfter => document::container_new_after(tokenizer),
        DocumentContainerNewMissing => document::container_new_missing(tokenizer),
        DocumentFlowStart => document::flow_start(tokenizer),
        DocumentFlowEnd => document::flow_end(tokenizer),
        DocumentLineEnd => document::line_end(tokenizer),
        DocumentLineEndAfterInspect => document::line_end_after_inspect(tokenizer),
        DocumentEof => document::eof(tokenizer),
        DocumentInspectStart => document::inspect_start(tokenizer),
        DocumentInspectExistingBefore => document::inspect_existing_before(tokenizer),
        DocumentInspectExistingAfter => document::inspect_existing_after(tokenizer),
        DocumentInspectContainersDone => document::inspect_containers_done(tokenizer),
        DocumentInspectNoNewContainer => document::inspect_no_new_container(tokenizer),
        DocumentInspectInterrupt => document::inspect_interrupt(tokenizer),
        DocumentInspectFlowContinue => document::inspect_flow_continue(tokenizer),
        DocumentInspectFlowEnd => document::inspect_flow_end(tokenizer),
        DocumentInspectDone => document::inspect_done(tokenizer),
    }
}
