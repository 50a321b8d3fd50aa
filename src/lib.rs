/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! This library deserializes YAML character buffers into
//! plain values: ordered mappings, sequences and typed
//! scalars.
//!
//! Two layers are exposed. [scan] and [scan_with] produce
//! the raw token stream of a buffer, bracketed by stream
//! start/end sentinels; [load], [load_all] and [load_path]
//! fold that stream into document values. Scanning is line
//! oriented and eager: the whole buffer is materialized
//! before the first token is produced.

pub mod error;
pub mod scanner;
pub mod tag;
pub mod token;
pub mod value;

mod tree;

pub use crate::{
    error::{Error, Result},
    scanner::{
        entry::TokenEntry,
        flag::{Flags, O_COMMENTS, O_ZEROED},
        ScanIter,
    },
    token::{Marker, ScalarStyle, Token},
    value::{Mapping, Value},
};

use crate::{error::ErrorKind, tree::Root};

/// Deserialize every document in .text, returning a lone
/// document's value directly and the document list
/// otherwise.
///
/// ```
/// # fn main() -> yamlet::Result<()> {
/// let value = yamlet::load("a: 1")?;
///
/// assert_eq!(value.get("a"), Some(&yamlet::Value::Int(1)));
/// # Ok(())
/// # }
/// ```
pub fn load(text: &str) -> Result<Value>
{
    let mut docs = load_all(text)?;

    match docs.len()
    {
        1 => Ok(docs.remove(0)),
        _ => Ok(Value::Seq(docs)),
    }
}

/// Deserialize .text, always returning the full document
/// list
pub fn load_all(text: &str) -> Result<Vec<Value>>
{
    let mut root = Root::new();
    let mut stream = scan(text);

    while let Some(entry) = stream.next()
    {
        let entry = entry?;
        let (line, column) = (entry.line(), entry.indent() as u64 + 1);

        if let Err(mut error) = root.consume(entry)
        {
            // Builder errors know what went wrong but not
            // always where; the offending token does, and
            // failing that the cursor
            error.complete(line, column);

            let (line, column) = stream.cursor();
            error.complete(line, column);

            return Err(error);
        }
    }

    Ok(root.into_docs())
}

/// Deserialize the UTF-8 file at .path
pub fn load_path<P>(path: P) -> Result<Value>
where
    P: AsRef<std::path::Path>,
{
    let text = std::fs::read_to_string(path).map_err(|error| Error::new(ErrorKind::Io(error)))?;

    load(&text)
}

/// Produce the token stream of .text
pub fn scan(text: &str) -> ScanIter<'_>
{
    scan_with(text, O_ZEROED)
}

/// Produce the token stream of .text, honoring the given
/// behavior flags (e.g [O_COMMENTS])
pub fn scan_with(text: &str, opts: Flags) -> ScanIter<'_>
{
    ScanIter::new(text, opts)
}
