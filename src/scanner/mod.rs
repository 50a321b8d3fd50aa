/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! The scanner: a stateful, line oriented lexer over a
//! fully materialized character buffer.
//!
//! Lines are classified at intake; when a line's leader
//! does not decide its token, a context dependent pattern
//! locates the next structural separator ahead of the
//! cursor and the scanner dispatches on its first
//! character. Multi line constructs (quoted and block
//! scalars) pull further raw lines themselves.

pub mod entry;
pub mod flag;

mod context;
mod patterns;
mod scalar;

#[cfg(test)]
mod tests;

use log::trace;

use crate::{
    error::{Error, ErrorKind, Result},
    scanner::{
        context::Context,
        entry::TokenEntry,
        flag::{Flags, O_COMMENTS},
        patterns::{BLOCK_SEP, FLOW_SEP, KEY_COLON_BLOCK, KEY_COLON_FLOW, LINE_SPLIT},
        scalar::{
            block::{apply_chomp, push_line, scan_header},
            flow::{assemble, find_closer},
        },
    },
    tag::Marshaller,
    token::{ScalarStyle, Slice, Token},
};

/// Current state of the token stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StreamState
{
    Start,
    Stream,
    Done,
}

/// The scanning logic: a cursor over the current physical
/// line, a queue slot for a separator span split off a
/// plain scalar, and the stack of open flow collections
#[derive(Debug)]
struct Scanner<'a>
{
    /// Remaining physical lines of the buffer
    lines: std::str::Lines<'a>,

    /// Current line and the cursor into it
    line_text:   &'a str,
    line_number: u64,
    line_pos:    usize,
    line_size:   usize,

    /// A structural span found while splitting off a
    /// leading plain scalar, served on the next call
    pending: Option<(usize, usize)>,

    /// Classify the current line again instead of pulling
    /// the next one (set when a block scalar ends)
    reprocess: bool,

    /// Open flow collection enders
    context: Context,

    opts: Flags,
}

impl<'a> Scanner<'a>
{
    fn new(base: &'a str, opts: Flags) -> Self
    {
        Self {
            lines: base.lines(),
            line_text: "",
            line_number: 0,
            line_pos: 0,
            line_size: 0,
            pending: None,
            reprocess: false,
            context: Context::new(),
            opts,
        }
    }

    /// Position of the cursor, for error completion
    fn cursor(&self) -> (u64, u64)
    {
        (self.line_number.max(1), self.line_pos as u64 + 1)
    }

    /// Produce the next token, or None once the buffer is
    /// exhausted
    fn next_token(&mut self) -> Result<Option<TokenEntry<'a>>>
    {
        loop
        {
            if let Some((start, end)) = self.pending.take()
            {
                self.line_pos = end;

                match self.dispatch(start, end)?
                {
                    Some(entry) => return Ok(Some(entry)),
                    None => continue,
                }
            }

            if self.reprocess || self.line_pos >= self.line_size
            {
                if !self.reprocess && !self.advance_line()
                {
                    return Ok(None);
                }
                self.reprocess = false;

                if let Some(entry) = self.classify_line()?
                {
                    return Ok(Some(entry));
                }

                // The line may have been consumed whole
                // (comment), or left for in-line work
                if self.line_pos >= self.line_size
                {
                    continue;
                }
            }

            match self.tokenize_line()?
            {
                Some(entry) => return Ok(Some(entry)),
                None => continue,
            }
        }
    }

    /// Pull the next physical line, false at end of buffer
    fn advance_line(&mut self) -> bool
    {
        match self.lines.next()
        {
            Some(line) =>
            {
                self.line_number += 1;
                self.line_text = line;
                self.line_pos = 0;
                self.line_size = line.len();

                true
            },
            None => false,
        }
    }

    /// Classify a fresh line by its leader: directive,
    /// comment, block entry, document marker and blank
    /// lines are decided whole; any other line is left for
    /// in-line tokenization
    fn classify_line(&mut self) -> Result<Option<TokenEntry<'a>>>
    {
        let line = self.line_text;

        let caps = match LINE_SPLIT.captures(line)
        {
            Some(caps) => caps,
            None =>
            {
                if line.trim().is_empty()
                {
                    self.line_pos = self.line_size;

                    return Ok(Some(self.entry(Token::EmptyLine, 0)));
                }

                return Ok(None);
            },
        };

        let leader = match caps.get(2).or_else(|| caps.get(3))
        {
            Some(leader) => leader.as_str().trim(),
            None => return Ok(None),
        };

        match leader
        {
            "#" =>
            {
                self.line_pos = self.line_size;

                match self.opts.contains(O_COMMENTS)
                {
                    true =>
                    {
                        let indent = indent_of(line);

                        Ok(Some(self.entry(
                            Token::Comment(Slice::Borrowed(line.trim())),
                            indent,
                        )))
                    },
                    false => Ok(None),
                }
            },
            "%" => self.fetch_directive().map(Some),
            "-" =>
            {
                let indent = indent_of(line);

                // Leave the cursor behind the '- '
                self.line_pos = indent + 2;

                Ok(Some(self.entry(Token::BlockEntry, indent)))
            },
            "---" =>
            {
                self.line_pos = 4;

                Ok(Some(self.entry(Token::DocumentStart, 0)))
            },
            "..." =>
            {
                self.line_pos = 4;

                Ok(Some(self.entry(Token::DocumentEnd, 0)))
            },
            _ => Ok(None),
        }
    }

    /// Consume a whole %directive line, recording its name
    /// and decommented remainder
    fn fetch_directive(&mut self) -> Result<TokenEntry<'a>>
    {
        let line = self.line_text;

        if line.starts_with(char::is_whitespace)
        {
            return Err(Error::with_position(
                ErrorKind::DirectiveIndented,
                self.line_number,
                1,
            ));
        }

        self.line_pos = self.line_size;

        let text = decommented(line);

        let (name, rest) = if text.starts_with("%YAML")
        {
            ("%YAML", text[5..].trim())
        }
        else if text.starts_with("%TAG")
        {
            ("%TAG", text[4..].trim())
        }
        else
        {
            match text.split_once(' ')
            {
                Some((name, rest)) => (name, rest.trim()),
                None => (text, ""),
            }
        };

        Ok(self.entry(
            Token::Directive(Slice::Borrowed(name), Slice::Borrowed(rest)),
            0,
        ))
    }

    /// Tokenize within the current line: find the next
    /// structural separator, splitting off any plain
    /// scalar (or key) text preceding it
    fn tokenize_line(&mut self) -> Result<Option<TokenEntry<'a>>>
    {
        let regex = match self.context.is_flow()
        {
            true => &*FLOW_SEP,
            false => &*BLOCK_SEP,
        };

        let start = self.line_pos;

        let sep = match regex
            .captures_at(self.line_text, start)
            .and_then(|caps| match (caps.get(1), caps.get(2))
            {
                (Some(gap), Some(sep)) => Some((gap.start(), sep.start(), sep.end())),
                _ => None,
            })
        {
            Some(found) => found,
            None =>
            {
                // No separator: the remainder is a plain
                // scalar
                self.line_pos = self.line_size;

                return Ok(Some(self.plain_scalar(start, self.line_size)));
            },
        };

        let (gap, sep_start, sep_end) = sep;

        if gap > start
        {
            // Text precedes the separator
            if self.line_text.as_bytes()[sep_start] == b':'
            {
                // ..which makes that text a key
                self.line_pos = self.colon_end(sep_start, sep_end);

                return Ok(Some(self.key_from(start, gap)));
            }

            self.pending = Some((sep_start, sep_end));
            self.line_pos = sep_start;

            return Ok(Some(self.plain_scalar(start, sep_start)));
        }

        self.line_pos = sep_end;

        self.dispatch(sep_start, sep_end)
    }

    /// Dispatch on the first character of a structural span
    fn dispatch(&mut self, start: usize, end: usize) -> Result<Option<TokenEntry<'a>>>
    {
        match self.line_text.as_bytes()[start]
        {
            // A trailing comment, discarded unless comments
            // are kept
            b'#' => match self.opts.contains(O_COMMENTS)
            {
                true => Ok(Some(self.entry(
                    Token::Comment(Slice::Borrowed(&self.line_text[start..end])),
                    start,
                ))),
                false => Ok(None),
            },
            // A ':' with no key text on its line
            b':' =>
            {
                self.line_pos = self.colon_end(start, end);

                Ok(Some(self.entry(Token::Key(None), start)))
            },
            b'!' =>
            {
                let text = &self.line_text[start..end];

                Ok(Some(self.entry(
                    Token::Tag(Slice::Borrowed(text), Marshaller::resolve(text)),
                    start,
                )))
            },
            b'&' => Ok(Some(self.entry(
                Token::Anchor(Slice::Borrowed(&self.line_text[start + 1..end])),
                start,
            ))),
            b'*' => Ok(Some(self.entry(
                Token::Alias(Slice::Borrowed(&self.line_text[start + 1..end])),
                start,
            ))),
            b'{' =>
            {
                self.context.push('}');

                Ok(Some(self.entry(Token::FlowMappingStart, start)))
            },
            b'[' =>
            {
                self.context.push(']');

                Ok(Some(self.entry(Token::FlowSequenceStart, start)))
            },
            ender @ b'}' | ender @ b']' =>
            {
                self.context.pop(ender as char)?;

                Ok(Some(self.entry(Token::FlowEnd, start)))
            },
            b',' => Ok(Some(self.entry(Token::FlowEntry, start))),
            b'"' | b'\'' => self.fetch_flow_scalar(start).map(Some),
            b'>' | b'|' => self.fetch_block_scalar(start).map(Some),
            // Unreachable through the separator patterns,
            // but harmless: treat like any other remainder
            _ => Ok(Some(self.plain_scalar(start, end))),
        }
    }

    /// Collect a quoted scalar opening at .start, pulling
    /// further raw lines as needed. A quoted scalar
    /// followed on its closing line by a ':' becomes a Key.
    fn fetch_flow_scalar(&mut self, start: usize) -> Result<TokenEntry<'a>>
    {
        let single = self.line_text.as_bytes()[start] == b'\'';
        let style = match single
        {
            true => ScalarStyle::SingleQuote,
            false => ScalarStyle::DoubleQuote,
        };

        let opened_at = self.line_number;
        let mut pieces: Vec<&'a str> = Vec::new();
        let mut from = start + 1;

        loop
        {
            match find_closer(self.line_text, from, single)
            {
                Some(closer) =>
                {
                    pieces.push(&self.line_text[from..closer]);
                    self.line_pos = closer + 1;

                    break;
                },
                None =>
                {
                    pieces.push(&self.line_text[from..self.line_size]);

                    if !self.advance_line()
                    {
                        return Err(Error::with_position(
                            ErrorKind::RunawayString(opened_at),
                            opened_at,
                            start as u64 + 1,
                        ));
                    }

                    from = 0;
                },
            }
        }

        let value = assemble(pieces, single)?;

        // A same line ':' promotes the scalar to a key
        if self.take_key_colon()
        {
            return Ok(TokenEntry::new(Token::Key(Some(value)), opened_at, start));
        }

        Ok(TokenEntry::new(Token::Scalar(value, style), opened_at, start))
    }

    /// Collect a literal or folded block scalar whose
    /// header starts at .start. The terminating line is
    /// handed back for normal classification; end of
    /// stream completes the scalar.
    fn fetch_block_scalar(&mut self, start: usize) -> Result<TokenEntry<'a>>
    {
        let header_text = decommented(&self.line_text[start..]);
        let header = scan_header(header_text, self.line_number, start)?;

        let style = match header.folded
        {
            true => ScalarStyle::Folded,
            false => ScalarStyle::Literal,
        };

        let opened_at = self.line_number;
        let mut indent = header.indent;
        let mut lines: Vec<String> = Vec::new();

        // The header owns the rest of its line
        self.line_pos = self.line_size;

        loop
        {
            if !self.advance_line()
            {
                break;
            }

            if self.line_text.is_empty()
            {
                lines.push(String::new());
                continue;
            }

            let found = indent_of(self.line_text);

            // The first non empty line decides the block's
            // indent when the header didn't
            let indent = *indent.get_or_insert(match found
            {
                0 => 1,
                nonzero => nonzero,
            });

            if found < indent
            {
                // This line belongs to whatever follows
                self.reprocess = true;
                break;
            }

            let content = &self.line_text[indent..];
            push_line(&mut lines, content, header.folded);
        }

        let value = apply_chomp(lines, header.chomp);

        Ok(TokenEntry::new(
            Token::Scalar(Slice::Owned(value), style),
            opened_at,
            start,
        ))
    }

    /// Where the cursor lands after a ':' separator: its
    /// whitespace run is consumed, a butted flow delimiter
    /// is not
    fn colon_end(&self, sep_start: usize, sep_end: usize) -> usize
    {
        let text = &self.line_text.as_bytes()[sep_start..sep_end];

        match text.last().copied()
        {
            Some(b',') | Some(b']') | Some(b'}') if text.len() > 1 => sep_start + 1,
            _ => sep_end,
        }
    }

    /// True if a ':' immediately follows the cursor (modulo
    /// blanks), consuming it
    fn take_key_colon(&mut self) -> bool
    {
        let regex = match self.context.is_flow()
        {
            true => &*KEY_COLON_FLOW,
            false => &*KEY_COLON_BLOCK,
        };

        let rest = &self.line_text[self.line_pos..self.line_size];

        match regex.find(rest)
        {
            Some(found) =>
            {
                let consumed = match found.as_str().as_bytes().last().copied()
                {
                    Some(b',') | Some(b']') | Some(b'}') => found.end() - 1,
                    _ => found.end(),
                };

                self.line_pos += consumed;

                true
            },
            None => false,
        }
    }

    /// A Key token carrying the text in [start, gap) as its
    /// payload
    fn key_from(&self, start: usize, gap: usize) -> TokenEntry<'a>
    {
        let raw = &self.line_text[start..gap];
        let indent = start + (raw.len() - raw.trim_start().len());

        self.entry(Token::Key(Some(Slice::Borrowed(raw.trim()))), indent)
    }

    /// A plain scalar over [start, end), right trimmed; a
    /// blank slice never alters shape and becomes an empty
    /// line
    fn plain_scalar(&self, start: usize, end: usize) -> TokenEntry<'a>
    {
        let raw = &self.line_text[start..end];
        let trimmed = raw.trim();

        if trimmed.is_empty()
        {
            return self.entry(Token::EmptyLine, start);
        }

        let indent = start + (raw.len() - raw.trim_start().len());

        self.entry(
            Token::Scalar(Slice::Borrowed(trimmed), ScalarStyle::Plain),
            indent,
        )
    }

    /// Wrap a token with the current line and the given
    /// indent
    fn entry(&self, token: Token<'a>, indent: usize) -> TokenEntry<'a>
    {
        TokenEntry::new(token, self.line_number, indent)
    }
}

/// Count of leading spaces
fn indent_of(text: &str) -> usize
{
    text.as_bytes().iter().take_while(|b| **b == b' ').count()
}

/// Strip a trailing ' #..' comment; a leading '#' comments
/// the whole text
fn decommented(text: &str) -> &str
{
    if text.starts_with('#')
    {
        return "";
    }

    match text.find(" #")
    {
        Some(i) => text[..i].trim_end(),
        None => text,
    }
}

/// Iterator over the token stream of a character buffer.
/// The stream always opens with StreamStart and closes
/// with a single StreamEnd; scan errors end the stream.
pub struct ScanIter<'a>
{
    scan:  Scanner<'a>,
    state: StreamState,
}

impl<'a> ScanIter<'a>
{
    pub(crate) fn new(base: &'a str, opts: Flags) -> Self
    {
        Self {
            scan:  Scanner::new(base, opts),
            state: StreamState::Start,
        }
    }

    /// Position of the scan cursor (1 based), for error
    /// completion
    pub(crate) fn cursor(&self) -> (u64, u64)
    {
        self.scan.cursor()
    }
}

impl<'a> Iterator for ScanIter<'a>
{
    type Item = Result<TokenEntry<'a>>;

    fn next(&mut self) -> Option<Self::Item>
    {
        match self.state
        {
            StreamState::Done => None,
            StreamState::Start =>
            {
                self.state = StreamState::Stream;

                Some(Ok(TokenEntry::new(Token::StreamStart, 1, 0)))
            },
            StreamState::Stream => match self.scan.next_token()
            {
                Ok(Some(entry)) =>
                {
                    trace!("token {}", entry);

                    Some(Ok(entry))
                },
                Ok(None) =>
                {
                    self.state = StreamState::Done;

                    Some(Ok(TokenEntry::new(
                        Token::StreamEnd,
                        self.scan.line_number.max(1),
                        0,
                    )))
                },
                Err(mut error) =>
                {
                    let (line, column) = self.scan.cursor();
                    error.complete(line, column);

                    self.state = StreamState::Done;

                    Some(Err(error))
                },
            },
        }
    }
}
