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
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, List, ListItem, ListState, Paragraph, Row, Table, TableState},
};

use crate::{
    browser::{MediaBrowser, MediaBrowserPane},
    render::icons::{ICON_NOW_PLAYING, ICON_PLAY, ICON_SELECTED},
    session::{CatalogStatus, Session},
    theme::Theme,
    util::format,
};

pub(crate) fn draw_browser(
    f: &mut Frame,
    area: Rect,
    session: &Session,
    browser: &mut MediaBrowser,
    theme: &Theme,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(area);

    draw_artists(
        f,
        chunks[0],
        session,
        &mut browser.artists_state,
        browser.active_pane == MediaBrowserPane::Artist,
        theme,
    );

    draw_songs(
        f,
        chunks[1],
        session,
        &mut browser.songs_state,
        browser.active_pane == MediaBrowserPane::Song,
        theme,
    );
}

fn pane_block<'a>(title: String, is_active: bool, theme: &Theme) -> Block<'a> {
    let style = if is_active {
        Style::default()
            .fg(theme.active_border_colour)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.border_colour)
    };

    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(style)
}

fn draw_placeholder(f: &mut Frame, area: Rect, block: Block, text: &str, theme: &Theme) {
    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(theme.placeholder_fg))
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(paragraph, area);
}

fn draw_artists(
    f: &mut Frame,
    area: Rect,
    session: &Session,
    state: &mut ListState,
    is_active: bool,
    theme: &Theme,
) {
    let block = pane_block(" Artists ".to_string(), is_active, theme);

    if session.artists().is_empty() {
        let text = match session.catalog_status() {
            CatalogStatus::Loading => "Loading catalog\u{2026}",
            CatalogStatus::Loaded | CatalogStatus::Failed => "No artists",
        };
        draw_placeholder(f, area, block, text, theme);
        return;
    }

    let selected = session.selected_artist();

    let items: Vec<ListItem> = session
        .artists()
        .iter()
        .map(|artist| {
            if selected == Some(artist.as_str()) {
                ListItem::new(Line::from(vec![
                    Span::raw(format!("{} ", ICON_SELECTED)),
                    Span::raw(artist.as_str()),
                ]))
                .style(
                    Style::default()
                        .fg(theme.selected_artist_fg)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ListItem::new(format!("  {}", artist)).style(Style::default().fg(theme.artist_fg))
            }
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(theme.cursor_bg))
        .highlight_symbol("> ");

    f.render_stateful_widget(list, area, state);
}

fn draw_songs(
    f: &mut Frame,
    area: Rect,
    session: &Session,
    state: &mut TableState,
    is_active: bool,
    theme: &Theme,
) {
    let title = match session.selected_artist() {
        Some(artist) => format!(" {} ", artist),
        None => " Songs ".to_string(),
    };
    let block = pane_block(title, is_active, theme);

    let songs = session.filtered_songs();
    if songs.is_empty() {
        let text = match session.selected_artist() {
            Some(_) => "No songs",
            None => "Select an artist",
        };
        draw_placeholder(f, area, block, text, theme);
        return;
    }

    let current = session.current_song_index();
    let count = songs.len();
    let position_width = format::position(count - 1, count).len() as u16;

    let rows: Vec<Row> = songs
        .iter()
        .enumerate()
        .map(|(i, song)| {
            let is_playing = current == Some(i);

            let (marker, style) = if is_playing {
                (
                    ICON_NOW_PLAYING,
                    Style::default()
                        .fg(theme.playing_song_fg)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ("", Style::default().fg(theme.song_title_fg))
            };

            Row::new(vec![
                Cell::from(marker),
                Cell::from(format::position(i, count))
                    .style(Style::default().fg(theme.song_position_fg)),
                Cell::from(song.title.as_str()),
                Cell::from(ICON_PLAY),
            ])
            .style(style)
        })
        .collect();

    let header = Row::new(vec!["", "#", "Title", ""])
        .style(Style::default().fg(theme.song_position_fg).add_modifier(Modifier::BOLD));

    let table = Table::new(
        rows,
        [
            Constraint::Length(1),
            Constraint::Length(position_width),
            Constraint::Min(0),
            Constraint::Length(1),
        ],
    )
    .header(header)
    .block(block)
    .row_highlight_style(Style::default().bg(theme.cursor_bg))
    .highlight_symbol("> ");

    f.render_stateful_widget(table, area, state);
}
