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

//! Terminal background colour via OSC escape sequences.
//!
//! Most modern terminals (XTerm, iTerm2, Alacritty, Kitty) understand these;
//! others silently ignore them.

use std::io::{self, Write};

use ratatui::style::Color;

use crate::theme::Theme;

/// Paints the whole terminal window with `colour` (OSC 11).
///
/// Non-RGB colours are left to the terminal's own palette.
pub(crate) fn set_terminal_bg(colour: Color) -> io::Result<()> {
    match Theme::to_hex(colour) {
        Some(hex) => write_osc(&format!("11;{}", hex)),
        None => Ok(()),
    }
}

/// Restores the user's configured background (OSC 111).
pub(crate) fn reset_terminal_bg() -> io::Result<()> {
    write_osc("111")
}

fn write_osc(body: &str) -> io::Result<()> {
    let mut stdout = io::stdout();
    write!(stdout, "\x1b]{}\x07", body)?;
    stdout.flush()
}
