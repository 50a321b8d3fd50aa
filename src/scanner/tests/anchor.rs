/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Test cases for anchors and aliases

use pretty_assertions::assert_eq;

use super::*;

#[test]
fn anchor_then_alias()
{
    tokens!("a: &x 7\nb: *x" =>
        | StreamStart,
        | Key(Some(cow!("a"))),
        | Anchor(cow!("x")) => "anchors carry the bare identifier",
        | Scalar(cow!("7"), Plain),
        | Key(Some(cow!("b"))),
        | Alias(cow!("x")) => "aliases carry the bare identifier",
        | StreamEnd,
    );
}

#[test]
fn anchor_on_own_line()
{
    tokens!("&top\na: 1" =>
        | StreamStart,
        | Anchor(cow!("top")),
        | Key(Some(cow!("a"))),
        | Scalar(cow!("1"), Plain),
        | StreamEnd,
    );
}

#[test]
fn alias_in_flow()
{
    tokens!("[*x, 2]" =>
        | StreamStart,
        | FlowSequenceStart,
        | Alias(cow!("x")) => "flow delimiters end the alias name",
        | FlowEntry,
        | Scalar(cow!("2"), Plain),
        | FlowEnd,
        | StreamEnd,
    );
}
