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

//! Screen rendering.
//!
//! Every frame is drawn from scratch out of the [`crate::session::Session`]
//! and the browser cursors; nothing is carried over from the previous frame.
//!
//! ```text
//! ┌ Artists ─┐┌ Songs ───────────────────┐
//! │          ││                          │
//! └──────────┘└──────────────────────────┘
//! ──────────────────────────────────────── now playing
//!  ▶ Select a song to play
//!
//!  Artwork
//! ──────────────────────────────────────
//!  key help
//! ```

mod alert;
mod browser;
mod footer;
mod icons;
mod player;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
};

use crate::App;

pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    f.render_widget(
        Block::default().style(Style::default().bg(app.theme.background_colour)),
        area,
    );

    // Outer layout: browser, player, footer
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(5),
            Constraint::Length(1),
        ])
        .split(area);

    browser::draw_browser(f, outer[0], &app.session, &mut app.media_browser, &app.theme);
    player::draw_player(f, outer[1], &app.session, &app.theme);
    footer::draw_footer(f, outer[2], &app.theme);

    if let Some(message) = app.session.alert() {
        alert::draw_alert(f, area, message, &app.theme);
    }
}
