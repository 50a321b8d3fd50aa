/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::fmt;

/// Result typedef used throughout this library's public API
pub type Result<T> = std::result::Result<T, Error>;

/// An error raised while scanning or assembling a YAML
/// document.
///
/// Carries the failure kind plus the position at which it
/// occurred, when one is known. Both coordinates are 1
/// based; a missing coordinate is back filled by the
/// topmost handler from the scanner's cursor.
#[derive(Debug)]
pub struct Error
{
    kind:   ErrorKind,
    line:   Option<u64>,
    column: Option<u64>,
}

impl Error
{
    /// The line at which the error occurred, if known
    pub fn line(&self) -> Option<u64>
    {
        self.line
    }

    /// The column into the line at which the error
    /// occurred, if known
    pub fn column(&self) -> Option<u64>
    {
        self.column
    }

    /// The failure description, without any positional
    /// suffix
    pub fn message(&self) -> String
    {
        self.kind.to_string()
    }

    pub(crate) fn new(kind: ErrorKind) -> Self
    {
        Self {
            kind,
            line: None,
            column: None,
        }
    }

    pub(crate) fn with_position(kind: ErrorKind, line: u64, column: u64) -> Self
    {
        Self {
            kind,
            line: Some(line),
            column: Some(column),
        }
    }

    /// Fill any missing coordinate from the given position,
    /// keeping those already set
    pub(crate) fn complete(&mut self, line: u64, column: u64)
    {
        if self.line.is_none()
        {
            self.line = Some(line);
        }

        if self.column.is_none()
        {
            self.column = Some(column);
        }
    }
}

impl fmt::Display for Error
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match (self.line, self.column)
        {
            (Some(line), Some(column)) =>
            {
                write!(f, "{}, line {} column {}", self.kind, line, column)
            },
            _ => fmt::Display::fmt(&self.kind, f),
        }
    }
}

impl std::error::Error for Error {}

impl From<ErrorKind> for Error
{
    fn from(kind: ErrorKind) -> Self
    {
        Self::new(kind)
    }
}

/// Every failure the scanner or tree builder can raise.
/// One public error kind (above) wraps these; the variants
/// exist so call sites stay terse and tests can match on
/// causes.
#[derive(Debug)]
pub(crate) enum ErrorKind
{
    /// A %directive line was preceded by whitespace
    DirectiveIndented,

    /// A flow collection was closed with the wrong ender,
    /// (found, expected-by-stack)
    MismatchedFlowEnder(char, char),

    /// A flow ender arrived with no collection open
    UnmatchedFlowEnder(char),

    /// A quoted scalar hit the end of the stream before its
    /// closing quote; payload is the opening line
    RunawayString(u64),

    /// A block scalar header longer than three characters
    OverlongBlockHeader(String),

    /// A block scalar header with both chomping indicators
    AmbiguousChomping(String),

    /// A block scalar header with junk where an indicator
    /// belongs
    InvalidBlockHeader(String),

    /// An explicit block scalar indent outside 1..=9
    IndentOutOfRange,

    /// A malformed \x, \u or \U sequence in a double quoted
    /// scalar
    InvalidEscape,

    /// Two tag tokens with no value between them
    ConsecutiveTags,

    /// A tag with no registered marshaller was applied
    UnknownTag(String),

    /// A block entry under-shot an open node's indent
    UnderIndented(usize),

    /// A key arrived at a node that cannot hold one
    KeyNotAllowed,

    /// A key was staged while the previous one was still
    /// unapplied
    KeyNotConsumed(String),

    /// A flow ender token arrived with no node on the stack
    FlowEndWithoutNode,

    /// !!map applied to something that is not a mapping
    NotAMap,

    /// !!seq applied to a scalar
    NotAListOrMap,

    /// !!set applied to something that is not a mapping
    SetNeedsMap,

    /// A scalar tag applied to a sequence
    ScalarGotList,

    /// A scalar tag applied to a mapping
    ScalarGotMap,

    /// !!bool applied to unrecognized text
    NotABool(String),

    /// !!int applied to unparsable text
    NotAnInt(String),

    /// The underlying file could not be read
    Io(std::io::Error),
}

impl fmt::Display for ErrorKind
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        use ErrorKind::*;

        match self
        {
            DirectiveIndented => f.write_str("Directive must not be indented"),
            MismatchedFlowEnder(found, expected) =>
            {
                write!(f, "Expecting '{}', but found '{}'", found, expected)
            },
            UnmatchedFlowEnder(ender) =>
            {
                write!(f, "'{}' without corresponding opener", ender)
            },
            RunawayString(line) =>
            {
                write!(f, "Unexpected end, runaway string at line {}?", line)
            },
            OverlongBlockHeader(style) =>
            {
                write!(
                    f,
                    "Invalid literal style '{}', should be less than 3 chars",
                    style
                )
            },
            AmbiguousChomping(style) => write!(f, "Ambiguous literal style '{}'", style),
            InvalidBlockHeader(style) => write!(f, "Invalid literal style '{}'", style),
            IndentOutOfRange => f.write_str("Indent must be between 1 and 9"),
            InvalidEscape => f.write_str("invalid escape sequence in double quoted scalar"),
            ConsecutiveTags => f.write_str("2 consecutive tags given"),
            UnknownTag(handle) => write!(f, "unknown tag '{}'", handle),
            UnderIndented(min) =>
            {
                write!(f, "Line should be indented at least {} chars", min)
            },
            KeyNotAllowed => f.write_str("Key not allowed here"),
            KeyNotConsumed(key) =>
            {
                write!(f, "Internal error, previous key '{}' was not consumed", key)
            },
            FlowEndWithoutNode => f.write_str("flow end without an open collection"),
            NotAMap => f.write_str("not a map"),
            NotAListOrMap => f.write_str("not a list or map"),
            SetNeedsMap => f.write_str("not a map, !!set applies to maps"),
            ScalarGotList => f.write_str("scalar needed, got list instead"),
            ScalarGotMap => f.write_str("scalar needed, got map instead"),
            NotABool(text) => write!(f, "'{}' is not a boolean", text),
            NotAnInt(text) => write!(f, "'{}' is not an integer", text),
            Io(error) => fmt::Display::fmt(error, f),
        }
    }
}
