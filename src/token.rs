/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use crate::tag::Marshaller;

pub type Slice<'a> = std::borrow::Cow<'a, str>;

/// Tokens that may be emitted by the YAML scanner
#[derive(Debug, Clone, PartialEq)]
pub enum Token<'a>
{
    /// The stream's start {virtual}
    StreamStart,
    /// The stream's end {virtual}
    StreamEnd,
    /// A `---` at column 0
    DocumentStart,
    /// A `...` at column 0
    DocumentEnd,
    /// A `%NAME rest` line, (name, rest)
    Directive(Slice<'a>, Slice<'a>),
    /// A '-'
    BlockEntry,
    /// A ':' terminating a key scalar on the same line,
    /// carrying the key text when one preceded it
    Key(Option<Slice<'a>>),
    /// A scalar (value, style)
    Scalar(Slice<'a>, ScalarStyle),
    /// An anchor (&name)
    Anchor(Slice<'a>),
    /// An alias (*name)
    Alias(Slice<'a>),
    /// A tag as written (!name or !!name), with the
    /// marshaller it resolved to (if any)
    Tag(Slice<'a>, Option<Marshaller>),
    /// A '{'
    FlowMappingStart,
    /// A '['
    FlowSequenceStart,
    /// A '}' or ']'
    FlowEnd,
    /// A ','
    FlowEntry,
    /// A '#' span, only produced when comments are kept
    Comment(Slice<'a>),
    /// A line with no content
    EmptyLine,
}

/// Payload free mirror of [Token], mostly useful for
/// comparing kinds without caring about content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker
{
    StreamStart,
    StreamEnd,
    DocumentStart,
    DocumentEnd,
    Directive,
    BlockEntry,
    Key,
    Scalar,
    Anchor,
    Alias,
    Tag,
    FlowMappingStart,
    FlowSequenceStart,
    FlowEnd,
    FlowEntry,
    Comment,
    EmptyLine,
}

impl Marker
{
    /// The kind's name, as used in rendered token streams
    pub fn as_str(self) -> &'static str
    {
        match self
        {
            Self::StreamStart => "StreamStart",
            Self::StreamEnd => "StreamEnd",
            Self::DocumentStart => "DocumentStart",
            Self::DocumentEnd => "DocumentEnd",
            Self::Directive => "Directive",
            Self::BlockEntry => "BlockEntry",
            Self::Key => "Key",
            Self::Scalar => "Scalar",
            Self::Anchor => "Anchor",
            Self::Alias => "Alias",
            Self::Tag => "Tag",
            Self::FlowMappingStart => "FlowMappingStart",
            Self::FlowSequenceStart => "FlowSequenceStart",
            Self::FlowEnd => "FlowEnd",
            Self::FlowEntry => "FlowEntry",
            Self::Comment => "Comment",
            Self::EmptyLine => "EmptyLine",
        }
    }

    fn from_token(t: &Token<'_>) -> Self
    {
        use Token::*;

        match t
        {
            StreamStart => Self::StreamStart,
            StreamEnd => Self::StreamEnd,
            DocumentStart => Self::DocumentStart,
            DocumentEnd => Self::DocumentEnd,
            Directive(_, _) => Self::Directive,
            BlockEntry => Self::BlockEntry,
            Key(_) => Self::Key,
            Scalar(_, _) => Self::Scalar,
            Anchor(_) => Self::Anchor,
            Alias(_) => Self::Alias,
            Tag(_, _) => Self::Tag,
            FlowMappingStart => Self::FlowMappingStart,
            FlowSequenceStart => Self::FlowSequenceStart,
            FlowEnd => Self::FlowEnd,
            FlowEntry => Self::FlowEntry,
            Comment(_) => Self::Comment,
            EmptyLine => Self::EmptyLine,
        }
    }
}

impl From<&'_ Token<'_>> for Marker
{
    fn from(t: &'_ Token<'_>) -> Self
    {
        Self::from_token(t)
    }
}

impl PartialEq<Token<'_>> for Marker
{
    fn eq(&self, other: &Token<'_>) -> bool
    {
        self == &Self::from(other)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarStyle
{
    Plain,
    SingleQuote,
    DoubleQuote,
    Literal,
    Folded,
}

impl ScalarStyle
{
    /// The style's indicator character, None for plain
    /// scalars
    pub fn indicator(self) -> Option<char>
    {
        match self
        {
            Self::Plain => None,
            Self::SingleQuote => Some('\''),
            Self::DoubleQuote => Some('"'),
            Self::Literal => Some('|'),
            Self::Folded => Some('>'),
        }
    }
}
