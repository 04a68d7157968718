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

//! Visual styling and color configuration for the TUI.

use ratatui::style::Color;

#[derive(Clone, Copy, Debug)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) active_border_colour: Color,
    pub(crate) cursor_bg: Color,

    pub(crate) artist_fg: Color,
    pub(crate) selected_artist_fg: Color,

    pub(crate) song_position_fg: Color,
    pub(crate) song_title_fg: Color,
    pub(crate) playing_song_fg: Color,

    pub(crate) placeholder_fg: Color,
    pub(crate) alert_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(40, 20, 50),
            accent_colour: Color::Rgb(250, 189, 47),
            border_colour: Color::Rgb(102, 102, 102),
            active_border_colour: Color::Rgb(250, 189, 47),
            cursor_bg: Color::Rgb(70, 45, 90),

            artist_fg: Color::Rgb(179, 157, 219),
            selected_artist_fg: Color::Rgb(255, 215, 0),

            song_position_fg: Color::Rgb(162, 161, 166),
            song_title_fg: Color::Rgb(255, 255, 255),
            playing_song_fg: Color::Rgb(250, 189, 47),

            placeholder_fg: Color::Rgb(162, 161, 166),
            alert_fg: Color::Rgb(255, 110, 100),
        }
    }

    /// Converts an RGB [`Color`] into a CSS-style hexadecimal string, used to
    /// set the terminal emulator's background.
    ///
    /// Returns `None` for non-RGB colours.
    pub(crate) fn to_hex(colour: Color) -> Option<String> {
        match colour {
            Color::Rgb(r, g, b) => Some(format!("#{:02x}{:02x}{:02x}", r, g, b)),
            _ => None,
        }
    }
}
