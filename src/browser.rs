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

//! Media browser cursor state.
//!
//! The browser only tracks where the keyboard cursor is in the artist and
//! song panes. Which artist is selected and which song is playing belong to
//! the [`crate::session::Session`].

use ratatui::widgets::{ListState, TableState};

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub(crate) enum MediaBrowserPane {
    #[default]
    Artist,
    Song,
}

#[derive(Debug, Default)]
pub(crate) struct MediaBrowser {
    pub(crate) active_pane: MediaBrowserPane,

    pub(crate) artists_state: ListState,
    pub(crate) songs_state: TableState,
}

impl MediaBrowser {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn set_pane(&mut self, pane: MediaBrowserPane) {
        self.active_pane = pane;
    }

    pub(crate) fn toggle_pane(&mut self) {
        self.active_pane = match self.active_pane {
            MediaBrowserPane::Artist => MediaBrowserPane::Song,
            MediaBrowserPane::Song => MediaBrowserPane::Artist,
        };
    }

    pub(crate) fn artist_cursor(&self) -> Option<usize> {
        self.artists_state.selected()
    }

    pub(crate) fn song_cursor(&self) -> Option<usize> {
        self.songs_state.selected()
    }

    /// Places the artist cursor on the first of `len` artists.
    pub(crate) fn reset_artists(&mut self, len: usize) {
        self.artists_state.select((len > 0).then_some(0));
    }

    /// Places the song cursor on the first of `len` songs.
    pub(crate) fn reset_songs(&mut self, len: usize) {
        self.songs_state.select((len > 0).then_some(0));
    }

    /// Moves the song cursor onto the playing row, so the table scrolls with
    /// auto-advance.
    pub(crate) fn follow_song(&mut self, index: Option<usize>) {
        if index.is_some() {
            self.songs_state.select(index);
        }
    }

    pub(crate) fn next(&mut self, artists: usize, songs: usize) {
        match self.active_pane {
            MediaBrowserPane::Artist => {
                let i = next_index(self.artists_state.selected(), artists);
                self.artists_state.select(i);
            }
            MediaBrowserPane::Song => {
                let i = next_index(self.songs_state.selected(), songs);
                self.songs_state.select(i);
            }
        }
    }

    pub(crate) fn previous(&mut self, artists: usize, songs: usize) {
        match self.active_pane {
            MediaBrowserPane::Artist => {
                let i = previous_index(self.artists_state.selected(), artists);
                self.artists_state.select(i);
            }
            MediaBrowserPane::Song => {
                let i = previous_index(self.songs_state.selected(), songs);
                self.songs_state.select(i);
            }
        }
    }
}

fn next_index(selected: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(match selected {
        Some(i) if i + 1 < len => i + 1,
        _ => 0,
    })
}

fn previous_index(selected: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(match selected {
        Some(i) if i > 0 && i < len => i - 1,
        _ => len - 1,
    })
}
