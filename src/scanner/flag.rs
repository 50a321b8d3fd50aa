/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use bitflags::bitflags;

/// An empty, zeroed flag set. This is the default set, with
/// all other flags disabled.
pub const O_ZEROED: Flags = Flags::empty();
/// Keep comments in the produced token stream.
///
/// By default the Scanner silently drops comment lines and
/// trailing '#' spans; with this flag set each becomes a
/// Comment token instead. Comment tokens never affect the
/// shape of the parsed document.
pub const O_COMMENTS: Flags = Flags::COMMENTS;

bitflags! {
    /// Directives controlling various behaviors of the Scanner,
    /// see each O_ variant for an explanation of how each works
    #[derive(Default)]
    pub struct Flags: u32 {
        const COMMENTS      = 0b00000001;
    }
}
