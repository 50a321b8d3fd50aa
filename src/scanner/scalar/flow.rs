/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! This module contains the line level machinery for
//! quoted (flow) scalars: locating the closing quote on a
//! line, and assembling the collected line pieces into the
//! scalar's final value.
//!
//! The Scanner drives the line pulls itself, as a quoted
//! scalar may run over any number of physical lines; the
//! pieces it collects land here.

use crate::{
    error::Result,
    scanner::scalar::escape::unescape_double,
    token::Slice,
};

const SINGLE: u8 = b'\'';
const DOUBLE: u8 = b'"';
const ESCAPE: u8 = b'\\';

/// Find the closing quote at or after .from on the given
/// line. A double quote closer must be unescaped; a single
/// quote closer must not start a '' pair, which is the
/// escaped form of a literal apostrophe. The character
/// following the closer is never consumed.
pub(in crate::scanner) fn find_closer(line: &str, from: usize, single: bool) -> Option<usize>
{
    let bytes = line.as_bytes();
    let mut i = from;

    while i < bytes.len()
    {
        match (single, bytes[i])
        {
            (false, ESCAPE) => i += 2,
            (false, DOUBLE) => return Some(i),
            (true, SINGLE) =>
            {
                if bytes.get(i + 1) == Some(&SINGLE)
                {
                    i += 2;
                }
                else
                {
                    return Some(i);
                }
            },
            _ => i += 1,
        }
    }

    None
}

/// Assemble the collected pieces of a quoted scalar into
/// its value: pieces from successive lines fold with a
/// single space, then the style's escape form is decoded.
/// A piece that needs no decoding borrows from the input.
pub(in crate::scanner) fn assemble<'a>(pieces: Vec<&'a str>, single: bool) -> Result<Slice<'a>>
{
    if let [piece] = *pieces.as_slice()
    {
        return match single
        {
            true if !piece.contains("''") => Ok(Slice::Borrowed(piece)),
            true => Ok(Slice::Owned(piece.replace("''", "'"))),
            false if !piece.contains('\\') => Ok(Slice::Borrowed(piece)),
            false => unescape_double(piece).map(Slice::Owned),
        };
    }

    let joined = pieces.join(" ");

    match single
    {
        true => Ok(Slice::Owned(joined.replace("''", "'"))),
        false => unescape_double(&joined).map(Slice::Owned),
    }
}
