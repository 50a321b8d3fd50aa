/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use crate::token::{Marker, Token};

/// A scanned token paired with the position it started at.
///
/// The line number is 1 based; the indent is the 0 based
/// column of the token's first character and is what the
/// tree builder's indentation arithmetic runs on.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenEntry<'a>
{
    token:  Token<'a>,
    line:   u64,
    indent: usize,
}

impl<'a> TokenEntry<'a>
{
    pub(crate) fn new(token: Token<'a>, line: u64, indent: usize) -> Self
    {
        Self {
            token,
            line,
            indent,
        }
    }

    /// The wrapped token
    pub fn token(&self) -> &Token<'a>
    {
        &self.token
    }

    /// Unwrap into the token, discarding position
    pub fn into_token(self) -> Token<'a>
    {
        self.token
    }

    /// 1 based line this token started on
    pub fn line(&self) -> u64
    {
        self.line
    }

    /// 0 based column of the token's first character
    pub fn indent(&self) -> usize
    {
        self.indent
    }
}

impl fmt::Display for TokenEntry<'_>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(
            f,
            "{}[{},{}]",
            Marker::from(&self.token).as_str(),
            self.line,
            self.indent + 1
        )?;

        match &self.token
        {
            Token::Directive(name, rest) => write!(f, " {} {}", name, rest),
            Token::Key(Some(key)) => write!(f, " {}", key),
            Token::Scalar(value, style) => match style.indicator()
            {
                Some(indicator) => write!(f, " {} {}", indicator, value),
                None => write!(f, " {}", value),
            },
            Token::Anchor(name) => write!(f, " &{}", name),
            Token::Alias(name) => write!(f, " *{}", name),
            Token::Tag(handle, _) => write!(f, " {}", handle),
            Token::Comment(text) => write!(f, " {}", text),
            _ => Ok(()),
        }
    }
}
