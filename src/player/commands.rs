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

//! MPV-backed audio playback worker.
//!
//! The worker owns the `libmpv` context. It drains [`AudioPlayerCommand`]s
//! sent by [`super::AudioPlayer`] and watches MPV for the end of the current
//! file, which is reported to the UI as [`AppEvent::TrackFinished`].
//!
//! Only a natural end of file counts as a finished track. Files that end
//! because they were replaced or stopped are not reported.
//!
//! Every load carries a serial. MPV events are read after newer commands may
//! already have been issued, so the serial reported with an end of file is
//! the one that was current when MPV announced the start of that file, not
//! the most recently requested one.

use anyhow::{Context, Result};
use std::{
    sync::mpsc::{Receiver, Sender},
    thread,
};

use crate::actions::events::AppEvent;

/// How long a single poll for MPV events may block, in seconds.
const EVENT_WAIT_SECS: f64 = 0.05;

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum AudioPlayerCommand {
    PlayFile { url: String, serial: u64 },
    Pause,
    Resume,
    Stop,
}

/// Load serials as seen by the worker.
#[derive(Debug, Default, PartialEq, Eq)]
struct LoadSerials {
    /// Serial of the most recent `loadfile` issued to MPV.
    requested: u64,
    /// Serial of the file MPV last reported as started.
    playing: Option<u64>,
}

impl LoadSerials {
    fn requested(&mut self, serial: u64) {
        self.requested = serial;
    }

    fn started(&mut self) {
        self.playing = Some(self.requested);
    }

    /// The serial a natural end of file belongs to, at most once per start.
    fn finished(&mut self) -> Option<u64> {
        self.playing.take()
    }
}

/// Spawns the audio worker thread to process playback commands.
///
/// If the internal worker returns an error, it is caught here and broadcast as
/// a fatal application event.
pub(crate) fn spawn_player_worker(
    command_rx: Receiver<AudioPlayerCommand>,
    event_tx: Sender<AppEvent>,
) {
    let error_tx = event_tx.clone();

    thread::spawn(move || {
        if let Err(e) = audio_player_worker(command_rx, event_tx) {
            log::error!("MPV worker failure: {:?}", e);
            let _ = error_tx.send(AppEvent::FatalError(format!("MPV worker failure: {:?}", e)));
        }
    });
}

/// The primary execution loop for the audio player backend.
///
/// Returns once the command channel is closed, i.e. when the owning
/// [`super::AudioPlayer`] has been dropped.
///
/// # Errors
///
/// Returns an error if the MPV context fails to initialize or if a command or
/// event cannot be processed.
fn audio_player_worker(
    command_rx: Receiver<AudioPlayerCommand>,
    event_tx: Sender<AppEvent>,
) -> Result<()> {
    let mut handler = (|| {
        let mut builder = mpv::MpvHandlerBuilder::new().context("Failed to create MPV builder")?;
        builder
            .set_option("vo", "null")
            .context("Failed to set no video output")?;
        builder.build().context("Failed to build MPV handler")
    })()?;

    log::info!("MPV audio worker started");

    let mut serials = LoadSerials::default();

    loop {
        if !process_commands(&mut handler, &command_rx, &mut serials)? {
            log::info!("MPV audio worker stopping");
            return Ok(());
        }
        process_mpv_events(&mut handler, &event_tx, &mut serials)?;
    }
}

/// Drains and executes all pending commands from the application channel.
///
/// Returns `false` once the channel has been disconnected.
fn process_commands(
    handler: &mut mpv::MpvHandler,
    command_rx: &Receiver<AudioPlayerCommand>,
    serials: &mut LoadSerials,
) -> Result<bool> {
    loop {
        let command = match command_rx.try_recv() {
            Ok(command) => command,
            Err(std::sync::mpsc::TryRecvError::Empty) => return Ok(true),
            Err(std::sync::mpsc::TryRecvError::Disconnected) => return Ok(false),
        };

        match command {
            AudioPlayerCommand::PlayFile { url, serial } => {
                serials.requested(serial);
                handler
                    .command(&["loadfile", &url, "replace"])
                    .context(format!("Failed to load file: {}", &url))?;
                handler
                    .set_property("pause", false)
                    .context("Failed to start playback")?;
            }
            AudioPlayerCommand::Pause => {
                handler
                    .set_property("pause", true)
                    .context("Failed to pause")?;
            }
            AudioPlayerCommand::Resume => {
                handler
                    .set_property("pause", false)
                    .context("Failed to resume")?;
            }
            AudioPlayerCommand::Stop => {
                handler.command(&["stop"]).context("Failed to stop")?;
            }
        }
    }
}

/// Polls for a single MPV event and forwards the end of a track to the UI.
fn process_mpv_events(
    handler: &mut mpv::MpvHandler,
    event_tx: &Sender<AppEvent>,
    serials: &mut LoadSerials,
) -> Result<()> {
    match handler.wait_event(EVENT_WAIT_SECS) {
        Some(mpv::Event::StartFile) => serials.started(),
        Some(mpv::Event::EndFile(result)) => {
            let serial = serials.finished();
            match (result, serial) {
                (Ok(mpv::EndFileReason::MPV_END_FILE_REASON_EOF), Some(serial)) => {
                    event_tx
                        .send(AppEvent::TrackFinished(serial))
                        .context("Failed to send track finished event")?;
                }
                (Ok(_), _) => {}
                (Err(e), _) => log::warn!("Playback ended with an error: {:?}", e),
            }
        }
        _ => {}
    }

    Ok(())
}
