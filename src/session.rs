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

//! Listening session state.
//!
//! The [`Session`] holds everything the player knows: the catalog, the
//! derived artist index, the selected artist and their songs, and what is
//! currently playing.
//!
//! State only changes through [`Session::update`], which applies a single
//! [`SessionEvent`] and returns the [`PlaybackCommand`]s needed to bring the
//! playback primitive in line with the new state. Rendering is derived from
//! the session afterwards.
//!
//! # Playback states
//!
//! ```text
//!             select song                 toggle
//!   Stopped ──────────────▶ Playing ◀──────────────▶ Paused
//!      ▲                     │  ▲
//!      │    end of list      │  │ track ended (next song)
//!      └─────────────────────┘──┘
//!
//!   any state ── select artist ──▶ Stopped (source unloaded)
//! ```

use crate::{
    model::{self, Song},
    player::{PlaybackCommand, PlayerState},
};

/// Progress of the one-off catalog retrieval.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum CatalogStatus {
    #[default]
    Loading,
    Loaded,
    Failed,
}

/// Inputs to the session.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum SessionEvent {
    CatalogLoaded(Vec<Song>),
    /// Catalog retrieval failed, with the message to show the user.
    CatalogFailed(String),
    SelectArtist(String),
    SelectSong(usize),
    TogglePause,
    /// The playback primitive reached the end of the source started by the
    /// load with this serial.
    TrackEnded(u64),
    DismissAlert,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Session {
    catalog_status: CatalogStatus,
    catalog: Vec<Song>,
    artists: Vec<String>,
    selected_artist: Option<String>,
    filtered_songs: Vec<Song>,
    current_song: Option<usize>,
    player_state: PlayerState,
    /// URL loaded in the playback primitive, kept after the list finishes.
    source: Option<String>,
    /// Serial of the most recent load, zero before the first one.
    load_serial: u64,
    alert: Option<String>,
}

impl Session {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn catalog_status(&self) -> CatalogStatus {
        self.catalog_status
    }

    pub(crate) fn artists(&self) -> &[String] {
        &self.artists
    }

    pub(crate) fn selected_artist(&self) -> Option<&str> {
        self.selected_artist.as_deref()
    }

    pub(crate) fn filtered_songs(&self) -> &[Song] {
        &self.filtered_songs
    }

    pub(crate) fn current_song_index(&self) -> Option<usize> {
        self.current_song
    }

    /// The song the transport is pointing at, if any.
    pub(crate) fn current_song(&self) -> Option<&Song> {
        self.current_song.and_then(|i| self.filtered_songs.get(i))
    }

    pub(crate) fn player_state(&self) -> PlayerState {
        self.player_state
    }

    /// Serial carried by the most recent [`PlaybackCommand::Load`].
    pub(crate) fn load_serial(&self) -> u64 {
        self.load_serial
    }

    pub(crate) fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    /// Applies an event and returns the playback commands it requires.
    pub(crate) fn update(&mut self, event: SessionEvent) -> Vec<PlaybackCommand> {
        match event {
            SessionEvent::CatalogLoaded(songs) => {
                self.catalog_loaded(songs);
                vec![]
            }
            SessionEvent::CatalogFailed(message) => {
                self.catalog_failed(message);
                vec![]
            }
            SessionEvent::SelectArtist(artist) => self.select_artist(artist),
            SessionEvent::SelectSong(index) => self.select_song(index),
            SessionEvent::TogglePause => self.toggle_pause(),
            SessionEvent::TrackEnded(serial) => self.track_ended(serial),
            SessionEvent::DismissAlert => {
                self.alert = None;
                vec![]
            }
        }
    }

    fn catalog_loaded(&mut self, songs: Vec<Song>) {
        if self.catalog_status != CatalogStatus::Loading {
            log::warn!("Ignoring catalog delivered after the first load attempt");
            return;
        }

        self.artists = model::artist_index(&songs);
        self.catalog = songs;
        self.catalog_status = CatalogStatus::Loaded;

        log::info!(
            "Catalog loaded: {} songs by {} artists",
            self.catalog.len(),
            self.artists.len()
        );
    }

    fn catalog_failed(&mut self, message: String) {
        if self.catalog_status != CatalogStatus::Loading {
            log::warn!("Ignoring catalog failure after the first load attempt");
            return;
        }

        self.catalog_status = CatalogStatus::Failed;
        self.alert = Some(message);
    }

    fn select_artist(&mut self, artist: String) -> Vec<PlaybackCommand> {
        self.filtered_songs = model::songs_by_artist(&self.catalog, &artist);
        self.selected_artist = Some(artist);

        // Changing the filtered list always invalidates the current song
        self.clear()
    }

    fn select_song(&mut self, index: usize) -> Vec<PlaybackCommand> {
        if index >= self.filtered_songs.len() {
            return vec![];
        }

        self.current_song = Some(index);
        self.play_current()
    }

    fn play_current(&mut self) -> Vec<PlaybackCommand> {
        let Some(song) = self.current_song() else {
            return vec![];
        };

        let url = song.url.clone();
        self.source = Some(url.clone());
        self.player_state = PlayerState::Playing;

        vec![self.load(url)]
    }

    fn load(&mut self, url: String) -> PlaybackCommand {
        self.load_serial += 1;
        PlaybackCommand::Load {
            url,
            serial: self.load_serial,
        }
    }

    fn toggle_pause(&mut self) -> Vec<PlaybackCommand> {
        let Some(source) = &self.source else {
            return vec![];
        };

        match self.player_state {
            PlayerState::Playing => {
                self.player_state = PlayerState::Paused;
                vec![PlaybackCommand::Pause]
            }
            PlayerState::Paused => {
                self.player_state = PlayerState::Playing;
                vec![PlaybackCommand::Resume]
            }
            // The list ran out but the last song is still loaded, play it again
            PlayerState::Stopped => {
                let url = source.clone();
                self.player_state = PlayerState::Playing;
                vec![self.load(url)]
            }
        }
    }

    fn track_ended(&mut self, serial: u64) -> Vec<PlaybackCommand> {
        let Some(index) = self.current_song else {
            return vec![];
        };

        // End of a source that has since been replaced
        if serial != self.load_serial {
            log::debug!(
                "Ignoring end of load {} while load {} is current",
                serial,
                self.load_serial
            );
            return vec![];
        }

        if index + 1 < self.filtered_songs.len() {
            self.current_song = Some(index + 1);
            self.play_current()
        } else {
            self.player_state = PlayerState::Stopped;
            vec![]
        }
    }

    fn clear(&mut self) -> Vec<PlaybackCommand> {
        self.current_song = None;
        self.source = None;
        self.player_state = PlayerState::Stopped;

        vec![PlaybackCommand::Pause, PlaybackCommand::Unload]
    }
}
