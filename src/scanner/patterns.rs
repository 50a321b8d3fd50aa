/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! The compiled patterns driving the scanner.
//!
//! Lines are classified by a single pattern whose leader
//! group decides the token; in-line tokenization searches
//! for the next structural separator with one of two
//! patterns, block or flow, selected by the current
//! context. Group 1 is always the whitespace gap before
//! the separator, group 2 the separator itself.

use once_cell::sync::Lazy;
use regex::Regex;

/// Classifies whole lines at intake: directive and comment
/// lines, block entries and document markers. Anything that
/// does not match is tokenized in-line.
pub(in crate::scanner) static LINE_SPLIT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^((\s*[%#]).*|(\s*-|---|\.\.\.)(\s.*)?)$").expect("line pattern compiles")
});

/// Finds the next structural separator in block context
pub(in crate::scanner) static BLOCK_SEP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(\s*)(#.*|[!&*]\S+|[\[\]{}"'>|]|:(\s+|$))"#).expect("block pattern compiles")
});

/// Finds the next structural separator in flow context.
/// Unlike block context, ':' may also sit directly against
/// a closing delimiter, and anchor/alias/tag names stop at
/// flow delimiters.
pub(in crate::scanner) static FLOW_SEP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(\s*)(#.*|[!&*][^\s,\[\]{}]+|[\[\]{}"',]|:(\s+|$|[,\]}]))"#)
        .expect("flow pattern compiles")
});

/// A ':' ending a key directly after a quoted scalar,
/// block context
pub(in crate::scanner) static KEY_COLON_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*:(\s+|$)").expect("key pattern compiles"));

/// A ':' ending a key directly after a quoted scalar, flow
/// context
pub(in crate::scanner) static KEY_COLON_FLOW: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*:(\s+|$|[,\]}])").expect("key pattern compiles"));
