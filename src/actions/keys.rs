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

//! Keyboard bindings.
//!
//! | Key                    | Action                                    |
//! |------------------------|-------------------------------------------|
//! | `q`                    | quit                                      |
//! | `Tab`, `h`/`l`, arrows | switch between the artist and song panes  |
//! | `j`/`k`, arrows        | move the cursor                           |
//! | `Enter`                | select the artist / play the song         |
//! | `Space`                | play/pause                                |
//!
//! While an alert is showing, only `Enter` and `Esc` (dismiss) are accepted.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::{App, actions::events::AppEvent, browser::MediaBrowserPane, session::SessionEvent};

/// Maps a key press to application actions.
///
/// # Errors
///
/// Returns an error if an event or playback command cannot be delivered.
pub(crate) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind == KeyEventKind::Release {
        return Ok(());
    }

    if app.session.alert().is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            app.apply(SessionEvent::DismissAlert)?;
        }
        return Ok(());
    }

    let artists = app.session.artists().len();
    let songs = app.session.filtered_songs().len();

    match key.code {
        KeyCode::Char('q') => app.event_tx.send(AppEvent::ExitApplication)?,

        // Pane navigation
        KeyCode::Tab | KeyCode::BackTab => app.media_browser.toggle_pane(),
        KeyCode::Char('h') | KeyCode::Left => app.media_browser.set_pane(MediaBrowserPane::Artist),
        KeyCode::Char('l') | KeyCode::Right => app.media_browser.set_pane(MediaBrowserPane::Song),

        // Cursor navigation
        KeyCode::Char('j') | KeyCode::Down => app.media_browser.next(artists, songs),
        KeyCode::Char('k') | KeyCode::Up => app.media_browser.previous(artists, songs),

        KeyCode::Enter => activate_selection(app)?,
        KeyCode::Char(' ') => app.apply(SessionEvent::TogglePause)?,

        _ => {}
    }

    Ok(())
}

fn activate_selection(app: &mut App) -> Result<()> {
    match app.media_browser.active_pane {
        MediaBrowserPane::Artist => {
            let Some(artist) = app
                .media_browser
                .artist_cursor()
                .and_then(|i| app.session.artists().get(i))
                .cloned()
            else {
                return Ok(());
            };

            app.apply(SessionEvent::SelectArtist(artist))?;
            app.media_browser
                .reset_songs(app.session.filtered_songs().len());
            app.media_browser.set_pane(MediaBrowserPane::Song);
        }
        MediaBrowserPane::Song => {
            if let Some(index) = app.media_browser.song_cursor() {
                app.apply(SessionEvent::SelectSong(index))?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;
    use crate::{
        actions::events::{AppEvent, handle_event},
        model::song,
        player::PlayerState,
        testing::test_app,
    };

    fn press(app: &mut App, code: KeyCode) {
        process_key_event(app, KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
    }

    fn loaded_app() -> (App, std::rc::Rc<std::cell::RefCell<Vec<String>>>) {
        let (mut app, calls) = test_app();
        let loaded = handle_event(
            &mut app,
            AppEvent::CatalogLoaded(vec![
                song("A1", "X", "u1"),
                song("A2", "X", "u2"),
                song("B1", "Y", "u3"),
            ]),
        )
        .unwrap();
        assert!(loaded.is_continue());
        (app, calls)
    }

    #[test]
    fn enter_on_artist_selects_and_focuses_songs() {
        let (mut app, calls) = loaded_app();

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.session.selected_artist(), Some("Y"));
        assert_eq!(app.media_browser.active_pane, MediaBrowserPane::Song);
        assert_eq!(app.media_browser.song_cursor(), Some(0));
        assert_eq!(*calls.borrow(), vec!["pause", "unload"]);
    }

    #[test]
    fn enter_on_song_plays_it_and_space_toggles() {
        let (mut app, calls) = loaded_app();

        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.session.current_song_index(), Some(1));
        assert_eq!(app.session.player_state(), PlayerState::Playing);

        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.session.player_state(), PlayerState::Paused);

        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.session.player_state(), PlayerState::Playing);

        assert_eq!(
            *calls.borrow(),
            vec!["pause", "unload", "load u2", "pause", "resume"]
        );
    }

    #[test]
    fn space_with_nothing_loaded_does_nothing() {
        let (mut app, calls) = loaded_app();

        press(&mut app, KeyCode::Char(' '));

        assert_eq!(app.session.player_state(), PlayerState::Stopped);
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn alert_swallows_keys_until_dismissed() {
        let (mut app, _calls) = test_app();
        assert!(
            handle_event(&mut app, AppEvent::CatalogFailed("Failed to load songs.json".into()))
                .unwrap()
                .is_continue()
        );

        press(&mut app, KeyCode::Char('q'));
        press(&mut app, KeyCode::Tab);
        assert!(app.event_rx.try_recv().is_err());
        assert_eq!(app.media_browser.active_pane, MediaBrowserPane::Artist);
        assert!(app.session.alert().is_some());

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.session.alert(), None);

        press(&mut app, KeyCode::Char('q'));
        assert!(matches!(app.event_rx.try_recv(), Ok(AppEvent::ExitApplication)));
    }

    #[test]
    fn enter_with_no_artists_is_ignored() {
        let (mut app, calls) = test_app();

        press(&mut app, KeyCode::Enter);
        app.media_browser.set_pane(MediaBrowserPane::Song);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.session.selected_artist(), None);
        assert!(calls.borrow().is_empty());
    }
}
