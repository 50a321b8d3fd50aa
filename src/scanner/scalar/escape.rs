/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! This module exports the function handling escape
//! sequences in double quoted scalars.

use std::{iter::Peekable, str::Chars};

use crate::error::{Error, ErrorKind, Result};

/// Decode the escape sequences of a double quoted scalar,
/// after its lines have been joined. Handles the C-like
/// single character escapes, octal escapes, and the \xHH,
/// \uHHHH and \UHHHHHHHH unicode point forms. An escape
/// that is none of those passes through untouched,
/// backslash included.
pub(in crate::scanner) fn unescape_double(raw: &str) -> Result<String>
{
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next()
    {
        if c != '\\'
        {
            out.push(c);
            continue;
        }

        match chars.next()
        {
            // A trailing backslash stays literal
            None => out.push('\\'),
            Some(escape) => match escape
            {
                'a' => out.push('\x07'),
                'b' => out.push('\x08'),
                't' => out.push('\t'),
                'n' => out.push('\n'),
                'v' => out.push('\x0B'),
                'f' => out.push('\x0C'),
                'r' => out.push('\r'),
                '"' => out.push('"'),
                '\'' => out.push('\''),
                '\\' => out.push('\\'),
                digit @ '0'..='7' => octal(&mut chars, digit, &mut out),
                'x' => unicode_point(&mut chars, 2, &mut out)?,
                'u' => unicode_point(&mut chars, 4, &mut out)?,
                'U' => unicode_point(&mut chars, 8, &mut out)?,
                other =>
                {
                    out.push('\\');
                    out.push(other);
                },
            },
        }
    }

    Ok(out)
}

/// Consume up to two further octal digits, pushing the
/// addressed code point
fn octal(chars: &mut Peekable<Chars>, first: char, out: &mut String)
{
    let mut value = first as u32 - '0' as u32;

    for _ in 0..2
    {
        match chars.peek()
        {
            Some(c @ '0'..='7') =>
            {
                value = (value << 3) + (*c as u32 - '0' as u32);
                chars.next();
            },
            _ => break,
        }
    }

    // Three octal digits max out at 511, always a valid
    // code point
    if let Some(c) = std::char::from_u32(value)
    {
        out.push(c);
    }
}

/// Consume exactly .len hex digits, pushing the addressed
/// code point
fn unicode_point(chars: &mut Peekable<Chars>, len: u32, out: &mut String) -> Result<()>
{
    let mut value: u32 = 0;

    for _ in 0..len
    {
        let digit = chars
            .next()
            .and_then(|c| c.to_digit(16))
            .ok_or_else(|| Error::new(ErrorKind::InvalidEscape))?;

        value = (value << 4) + digit;
    }

    match std::char::from_u32(value)
    {
        Some(c) =>
        {
            out.push(c);
            Ok(())
        },
        None => Err(Error::new(ErrorKind::InvalidEscape)),
    }
}
