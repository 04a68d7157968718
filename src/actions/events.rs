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

use std::{io::Stdout, ops::ControlFlow};

use anyhow::{Result, anyhow};
use crossterm::event::KeyEvent;
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{App, actions::keys::process_key_event, model::Song, render::draw, session::SessionEvent};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),
    Resize,

    CatalogLoaded(Vec<Song>),
    CatalogFailed(String),

    /// The source started by the load with this serial played to its end.
    TrackFinished(u64),

    ExitApplication,

    FatalError(String),
}

/// Runs the application event loop until the user quits.
///
/// Every event is handled to completion and followed by a full redraw, so the
/// screen always reflects the latest state.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    while let Ok(event) = app.event_rx.recv() {
        if handle_event(app, event)?.is_break() {
            break;
        }

        // Render after every event processed
        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

/// Applies a single event to the application state.
///
/// # Errors
///
/// Returns an error for a fatal worker failure, or if a playback command
/// cannot be delivered.
pub(crate) fn handle_event(app: &mut App, event: AppEvent) -> Result<ControlFlow<()>> {
    match event {
        AppEvent::Key(key) => process_key_event(app, key)?,
        AppEvent::Resize => {}

        AppEvent::CatalogLoaded(songs) => {
            app.apply(SessionEvent::CatalogLoaded(songs))?;
            app.media_browser.reset_artists(app.session.artists().len());
        }
        AppEvent::CatalogFailed(message) => app.apply(SessionEvent::CatalogFailed(message))?,

        AppEvent::TrackFinished(serial) => {
            app.apply(SessionEvent::TrackEnded(serial))?;
            app.media_browser.follow_song(app.session.current_song_index());
        }

        AppEvent::ExitApplication => return Ok(ControlFlow::Break(())),
        AppEvent::FatalError(message) => return Err(anyhow!(message)),
    }

    Ok(ControlFlow::Continue(()))
}
