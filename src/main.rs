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

//! # Artist-browsing music player TUI.
//!
//! Loads a catalog of songs once at startup, lists the artists it contains
//! and plays the chosen artist's songs one after another.
//!
//! The application coordinates a `ratatui` frontend with a few background
//! threads:
//!
//! * The **Main Thread** owns the [`session::Session`], manages the terminal
//!   lifecycle and renders the UI.
//! * A **Command Worker** retrieves the catalog.
//! * An **Audio Worker** drives MPV and reports the end of each track.
//! * An **Input Thread** forwards terminal events.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even when the event loop fails. Communication
//! between the UI and the workers is handled via `std::sync::mpsc` channels.

mod actions;
mod browser;
mod catalog;
mod config;
mod logging;
mod model;
mod player;
mod render;
mod session;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io,
    sync::mpsc::{self, Receiver, Sender},
    thread,
};

use crate::{
    actions::{
        commands::AppCommand,
        events::{AppEvent, process_events},
    },
    browser::MediaBrowser,
    config::AppConfig,
    player::{AudioPlayer, Playback},
    session::{Session, SessionEvent},
    theme::Theme,
};

/// Application state.
struct App {
    pub config: AppConfig,
    pub theme: Theme,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub command_tx: Sender<AppCommand>,

    pub player: Box<dyn Playback>,

    pub session: Session,
    pub media_browser: MediaBrowser,
}

impl App {
    /// Create a new instance of application state, backed by the MPV player.
    pub fn new(config: AppConfig, command_tx: Sender<AppCommand>) -> Result<Self> {
        let (event_tx, event_rx) = mpsc::channel();

        let audio_player = AudioPlayer::new(event_tx.clone())?;

        Ok(Self::with_player(
            config,
            (event_tx, event_rx),
            command_tx,
            Box::new(audio_player),
        ))
    }

    fn with_player(
        config: AppConfig,
        (event_tx, event_rx): (Sender<AppEvent>, Receiver<AppEvent>),
        command_tx: Sender<AppCommand>,
        player: Box<dyn Playback>,
    ) -> Self {
        Self {
            config,
            theme: Theme::default(),
            event_tx,
            event_rx,
            command_tx,
            player,
            session: Session::new(),
            media_browser: MediaBrowser::new(),
        }
    }

    /// Applies a session event and hands the resulting commands to the player.
    pub fn apply(&mut self, event: SessionEvent) -> Result<()> {
        let commands = self.session.update(event);
        player::dispatch(self.player.as_mut(), commands)
    }
}

/// The entry point of the application.
///
/// Sets up logging and the communication channels, initializes the application
/// state, manages the terminal lifecycle, and returns an error if any part of
/// the execution fails.
fn main() -> Result<()> {
    let config = config::load_config();

    let _logger = logging::init_logger(&config.logging).context("Failed to initialise logging")?;

    let (command_tx, command_rx) = mpsc::channel();

    let mut app = App::new(config, command_tx).context("Failed to initialise application")?;

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app, command_rx);
    restore_terminal(&mut terminal);

    if let Err(e) = &res {
        log::error!("Application error: {:?}", e);
    }

    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Set the background of the entire terminal window, without this we'd get
    // a thin black outline
    util::term::set_terminal_bg(app.theme.background_colour).ok();

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`]. It is best-effort and
/// does not return a result, as it runs during cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg().ok();
    terminal.show_cursor().ok();
}

/// Starts the application's background workers and enters the main event loop.
///
/// # Errors
///
/// Returns an error if the catalog request cannot be queued or if the event
/// processing loop encounters an unrecoverable application error.
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    command_rx: Receiver<AppCommand>,
) -> Result<()> {
    let command_event_tx = app.event_tx.clone();
    actions::commands::spawn_command_worker(&app.config, command_rx, command_event_tx);

    // Translate raw terminal events to application events.
    let tx_input = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            let app_event = match event::read() {
                Ok(Event::Key(key)) => AppEvent::Key(key),
                Ok(Event::Resize(_, _)) => AppEvent::Resize,
                Ok(_) => continue,
                Err(e) => {
                    log::error!("Failed to read terminal input: {}", e);
                    break;
                }
            };
            if tx_input.send(app_event).is_err() {
                break;
            }
        }
    });

    // The one and only catalog fetch
    app.command_tx
        .send(AppCommand::LoadCatalog)
        .context("Failed to request catalog")?;

    process_events(terminal, app)
}

#[cfg(test)]
mod testing {
    use std::{cell::RefCell, rc::Rc, sync::mpsc};

    use crate::{App, config::AppConfig, player::testing::RecordingPlayer};

    /// An application wired to a [`RecordingPlayer`] instead of MPV.
    ///
    /// Returns the app and the log of playback calls made through it.
    pub(crate) fn test_app() -> (App, Rc<RefCell<Vec<String>>>) {
        let (command_tx, _command_rx) = mpsc::channel();
        let (player, calls) = RecordingPlayer::new();

        let app = App::with_player(
            AppConfig::default(),
            mpsc::channel(),
            command_tx,
            Box::new(player),
        );

        (app, calls)
    }
}
