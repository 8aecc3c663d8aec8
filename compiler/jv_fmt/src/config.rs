//! Formatter configuration.

use crate::ops::Indent;

/// Grammar revision whose dispatch table the formatter uses.
///
/// Each level layers its handlers over the previous one.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub enum LanguageLevel {
    /// Switch expressions and arrow rules; no pattern nodes.
    ///
    /// Pattern nodes reaching this level get the default walk of their
    /// children, with no parentheses or separators.
    Java14,
    /// Adds record deconstruction, parenthesized patterns and label guards.
    Java19,
    /// Adds case-level guards and atomic parenthesized expressions.
    #[default]
    Java21,
}

impl LanguageLevel {
    /// Levels from oldest to newest.
    pub const ALL: [LanguageLevel; 3] = [
        LanguageLevel::Java14,
        LanguageLevel::Java19,
        LanguageLevel::Java21,
    ];

    /// The level this one extends.
    pub fn parent(self) -> Option<LanguageLevel> {
        match self {
            LanguageLevel::Java14 => None,
            LanguageLevel::Java19 => Some(LanguageLevel::Java14),
            LanguageLevel::Java21 => Some(LanguageLevel::Java19),
        }
    }
}

/// Configuration for one formatter.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FormatConfig {
    /// Scales every relative indent. 1 for the default style, 2 for AOSP.
    pub indent_multiplier: u32,

    pub level: LanguageLevel,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            indent_multiplier: 1,
            level: LanguageLevel::default(),
        }
    }
}

impl FormatConfig {
    /// AOSP style: doubled indentation.
    pub fn aosp() -> Self {
        Self::with_indent_multiplier(2)
    }

    pub fn with_indent_multiplier(indent_multiplier: u32) -> Self {
        Self {
            indent_multiplier,
            ..Default::default()
        }
    }

    pub fn with_level(level: LanguageLevel) -> Self {
        Self {
            level,
            ..Default::default()
        }
    }

    /// Indents derived from the multiplier.
    pub fn indents(&self) -> Indents {
        Indents::new(self.indent_multiplier)
    }
}

/// Relative indents used by the handlers.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Indents {
    pub zero: Indent,
    pub plus_two: Indent,
    pub plus_four: Indent,
}

impl Indents {
    pub fn new(multiplier: u32) -> Self {
        Indents {
            zero: Indent::ZERO,
            plus_two: Indent::spaces(2 * multiplier),
            plus_four: Indent::spaces(4 * multiplier),
        }
    }
}

impl Default for Indents {
    fn default() -> Self {
        Self::new(1)
    }
}
