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
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
};

use crate::theme::Theme;

const MIN_WIDTH: u16 = 30;
const HEIGHT: u16 = 5;

/// Width that fits `message` plus borders and padding, within `max`.
fn popup_width(message: &str, max: u16) -> u16 {
    u16::try_from(message.chars().count())
        .unwrap_or(u16::MAX)
        .saturating_add(6)
        .max(MIN_WIDTH)
        .min(max)
}

/// Draws a modal error popup centred over `area`.
pub(crate) fn draw_alert(f: &mut Frame, area: Rect, message: &str, theme: &Theme) {
    let popup = centred(area, popup_width(message, area.width), HEIGHT);

    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Error ")
        .border_style(Style::default().fg(theme.alert_fg).add_modifier(Modifier::BOLD))
        .style(Style::default().bg(theme.background_colour))
        .padding(Padding::horizontal(1));

    let text = vec![
        Line::styled(message, Style::default().fg(theme.alert_fg)),
        Line::default(),
        Line::styled("Press Enter to dismiss", Style::default().fg(theme.placeholder_fg)),
    ];

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, popup);
}

fn centred(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
