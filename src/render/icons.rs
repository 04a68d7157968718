// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Unicode symbols for the TUI.
//!
//! All glyphs are plain code points, without variation selectors, and occupy
//! a single terminal cell.

use crate::player::PlayerState;

pub(crate) const ICON_PLAY: &str = "\u{25B6}";
pub(crate) const ICON_PAUSE: &str = "\u{23F8}";

/// Marks the song that is currently loaded.
pub(crate) const ICON_NOW_PLAYING: &str = "\u{266A}";

/// Marks the selected artist.
pub(crate) const ICON_SELECTED: &str = "\u{25CF}";

/// The transport glyph shows the action that is available: pause while
/// playing, play otherwise.
pub(crate) fn transport_icon(state: PlayerState) -> &'static str {
    match state {
        PlayerState::Playing => ICON_PAUSE,
        PlayerState::Paused | PlayerState::Stopped => ICON_PLAY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_icon_offers_the_opposite_action() {
        assert_eq!(transport_icon(PlayerState::Playing), ICON_PAUSE);
        assert_eq!(transport_icon(PlayerState::Paused), ICON_PLAY);
        assert_eq!(transport_icon(PlayerState::Stopped), ICON_PLAY);
    }
}
