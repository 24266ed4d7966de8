//! Dialect configuration.
//!
//! The numeric limits below are policy, not grammar: they pin the tokenizer
//! to one markdown dialect. Defaults follow CommonMark.

use serde::Deserialize;

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Options {
    /// Columns per tab stop.
    pub tab_size: usize,
    /// One more than the number of digits an ordered list item may have.
    pub list_item_value_size_max: usize,
    /// Fewest markers that open a fenced code block.
    pub code_fenced_sequence_size_min: usize,
    /// Fewest markers in a thematic break.
    pub thematic_break_marker_count_min: usize,
    /// Most characters in a definition label.
    pub label_size_max: usize,
    /// Most unbalanced `(` in a raw destination. `None` is unbounded.
    pub destination_balance_max: Option<usize>,
    /// Reject a backtick in the info or meta of a backtick fence.
    pub forbid_backtick_in_fence_info: bool,
    /// Most attempts/checks nested inside each other.
    pub attempt_depth_max: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            tab_size: 4,
            list_item_value_size_max: 10,
            code_fenced_sequence_size_min: 3,
            thematic_break_marker_count_min: 3,
            label_size_max: 999,
            destination_balance_max: None,
            forbid_backtick_in_fence_info: true,
            attempt_depth_max: 64,
        }
    }
}

impl Options {
    /// Load options from a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let options: Options = toml::from_str(source)?;
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.invalid() {
            Some((name, reason)) => Err(ConfigError::Invalid { name, reason }),
            None => Ok(()),
        }
    }

    /// The first option that makes the grammar degenerate, with the reason.
    pub(crate) fn invalid(&self) -> Option<(&'static str, &'static str)> {
        if self.tab_size == 0 {
            return Some(("tab_size", "must be at least 1"));
        }
        if self.list_item_value_size_max < 2 {
            return Some(("list_item_value_size_max", "must allow at least one digit"));
        }
        if self.code_fenced_sequence_size_min == 0 {
            return Some(("code_fenced_sequence_size_min", "must be at least 1"));
        }
        if self.thematic_break_marker_count_min == 0 {
            return Some(("thematic_break_marker_count_min", "must be at least 1"));
        }
        if self.attempt_depth_max < 8 {
            return Some(("attempt_depth_max", "must be at least 8"));
        }
        None
    }

    /// Most digits in an ordered list item value.
    #[inline]
    pub(crate) fn list_item_value_digits_max(&self) -> usize {
        self.list_item_value_size_max.saturating_sub(1)
    }
}
