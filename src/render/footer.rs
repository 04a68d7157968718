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
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::theme::Theme;

const KEY_HELP: [(&str, &str); 5] = [
    ("Tab", "pane"),
    ("j/k", "move"),
    ("Enter", "select"),
    ("Space", "play/pause"),
    ("q", "quit"),
];

pub(crate) fn draw_footer(f: &mut Frame, area: Rect, theme: &Theme) {
    let spans: Vec<Span> = KEY_HELP
        .iter()
        .flat_map(|(key, action)| {
            [
                Span::styled(format!(" {} ", key), Style::default().fg(theme.accent_colour)),
                Span::styled(format!("{}  ", action), Style::default().fg(theme.placeholder_fg)),
            ]
        })
        .collect();

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
