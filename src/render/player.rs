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

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{render::icons::transport_icon, session::Session, theme::Theme, util::format};

/// Draws the now-playing panel: transport glyph, song label and artwork
/// source.
pub(crate) fn draw_player(f: &mut Frame, area: Rect, session: &Session, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::TOP | Borders::BOTTOM)
        .border_style(Style::default().fg(theme.border_colour))
        .padding(Padding::horizontal(1));

    let inner_area = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner_area);

    let song = session.current_song();

    let label_style = match song {
        Some(_) => Style::default()
            .fg(theme.accent_colour)
            .add_modifier(Modifier::BOLD),
        None => Style::default().fg(theme.placeholder_fg),
    };

    let track_line = Line::from(vec![
        Span::styled(
            format!("{} ", transport_icon(session.player_state())),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format::now_playing_label(song), label_style),
    ]);
    f.render_widget(Paragraph::new(track_line), chunks[0]);

    let artwork = song.and_then(|song| song.artwork.as_deref()).unwrap_or("");

    let artwork_line = Line::from(vec![
        Span::styled("Artwork ", Style::default().fg(theme.border_colour)),
        Span::styled(artwork, Style::default().fg(theme.placeholder_fg)),
    ]);
    f.render_widget(Paragraph::new(artwork_line), chunks[2]);
}
