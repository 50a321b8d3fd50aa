/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! This module contains the pieces of literal ('|') and
//! folded ('>') block scalar handling that are independent
//! of the Scanner's line cursor: header parsing, the
//! per-line fold rules, and the final chomp.
//!
//! The Scanner pulls the scalar's raw lines itself, since
//! the block only ends at a line it must then hand back
//! for normal tokenization.

use atoi::atoi;

use crate::error::{Error, ErrorKind, Result};

/// How trailing line breaks of a block scalar are handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(in crate::scanner) enum ChompStyle
{
    /// Exactly one trailing line break (the default)
    Clip,
    /// No trailing line breaks ('-')
    Strip,
    /// All trailing line breaks ('+')
    Keep,
}

/// A parsed block scalar header: '|' or '>', optionally
/// followed by a chomping indicator and/or an explicit
/// indent digit, in either order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(in crate::scanner) struct Header
{
    pub folded: bool,
    pub chomp:  ChompStyle,
    pub indent: Option<usize>,
}

/// Parse a block scalar header from the decommented text
/// following the cursor. At most three characters; '-' and
/// '+' are mutually exclusive; an explicit indent must be a
/// digit between 1 and 9.
pub(in crate::scanner) fn scan_header(text: &str, line: u64, column: usize) -> Result<Header>
{
    let at = |kind| Error::with_position(kind, line, column as u64 + 1);

    let original = text;
    let mut style: String = text.trim_end().into();

    if style.chars().count() > 3
    {
        return Err(at(ErrorKind::OverlongBlockHeader(original.into())));
    }

    let mut chomp = None;

    if let Some(i) = style.find('-')
    {
        style.remove(i);
        chomp = Some(ChompStyle::Strip);
    }

    if let Some(i) = style.find('+')
    {
        if chomp.is_some()
        {
            return Err(at(ErrorKind::AmbiguousChomping(original.into())));
        }

        style.remove(i);
        chomp = Some(ChompStyle::Keep);
    }

    let mut indent = None;

    if style.chars().count() == 2
    {
        let digit = &style.as_bytes()[1..];

        if !digit[0].is_ascii_digit()
        {
            return Err(at(ErrorKind::InvalidBlockHeader(original.into())));
        }

        let explicit: usize = atoi(digit).ok_or_else(|| {
            at(ErrorKind::InvalidBlockHeader(original.into()))
        })?;

        if explicit < 1
        {
            return Err(at(ErrorKind::IndentOutOfRange));
        }

        indent = Some(explicit);
        style.truncate(1);
    }

    let folded = match style.as_str()
    {
        ">" => true,
        "|" => false,
        _ => return Err(at(ErrorKind::InvalidBlockHeader(original.into()))),
    };

    Ok(Header {
        folded,
        chomp: chomp.unwrap_or(ChompStyle::Clip),
        indent,
    })
}

/// Record one content line. Folded style joins onto the
/// previous line with a single space, unless either side
/// starts with a space (more indented lines stay literal);
/// a line following a blank replaces the blank, which is
/// how folded blanks become line breaks.
pub(in crate::scanner) fn push_line(lines: &mut Vec<String>, value: &str, folded: bool)
{
    match lines.last_mut()
    {
        Some(last) if folded && !value.starts_with(' ') && !last.starts_with(' ') =>
        {
            if !last.is_empty()
            {
                last.push(' ');
            }
            last.push_str(value);
        },
        _ => lines.push(value.into()),
    }
}

/// Join the collected lines and apply the chomp
pub(in crate::scanner) fn apply_chomp(lines: Vec<String>, chomp: ChompStyle) -> String
{
    let text = lines.join("\n");

    match chomp
    {
        ChompStyle::Clip => format!("{}\n", text.trim_end()),
        ChompStyle::Strip => text.trim_end().into(),
        ChompStyle::Keep => format!("{}\n", text),
    }
}
