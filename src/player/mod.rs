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

//! Audio playback control.
//!
//! This module provides the [`Playback`] capability the session drives, and
//! [`AudioPlayer`], its implementation on top of a background MPV worker
//! thread. Heavy audio operations never block the main application thread.
//!
//! The session never talks to a player directly. It produces
//! [`PlaybackCommand`]s which are then applied with [`dispatch`].

mod commands;

use std::sync::mpsc;

use anyhow::Result;

use crate::{actions::events::AppEvent, player::commands::AudioPlayerCommand};

/// Represents the current playback status of the audio engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum PlayerState {
    Playing,
    Paused,
    #[default]
    Stopped,
}

/// An instruction for the playback primitive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum PlaybackCommand {
    /// Replace the current source with `url` and start playing it.
    ///
    /// The end of this source is reported back with the same `serial`.
    Load { url: String, serial: u64 },
    Pause,
    Resume,
    /// Stop output and unload the current source.
    Unload,
}

/// The capabilities of a single playback primitive.
///
/// End of track is reported asynchronously as [`AppEvent::TrackFinished`],
/// tagged with the serial given to [`Playback::load_and_play`].
pub(crate) trait Playback {
    fn load_and_play(&mut self, url: &str, serial: u64) -> Result<()>;
    fn pause(&mut self) -> Result<()>;
    fn resume(&mut self) -> Result<()>;
    fn unload(&mut self) -> Result<()>;
}

/// Applies playback commands, in order, to a player.
///
/// # Errors
///
/// Stops at, and returns, the first command the player fails to accept.
pub(crate) fn dispatch<P: Playback + ?Sized>(
    player: &mut P,
    commands: Vec<PlaybackCommand>,
) -> Result<()> {
    for command in commands {
        log::debug!("Playback command: {:?}", command);
        match command {
            PlaybackCommand::Load { url, serial } => player.load_and_play(&url, serial)?,
            PlaybackCommand::Pause => player.pause()?,
            PlaybackCommand::Resume => player.resume()?,
            PlaybackCommand::Unload => player.unload()?,
        }
    }
    Ok(())
}

/// A handle to the audio playback engine.
///
/// This struct acts as a command proxy; it does not perform audio processing
/// itself but instead sends instructions to a background worker thread.
pub(crate) struct AudioPlayer {
    /// Channel for sending commands to the background worker thread.
    command_tx: mpsc::Sender<AudioPlayerCommand>,
}

impl AudioPlayer {
    /// Spawns the audio worker thread and returns a new player handle.
    ///
    /// # Arguments
    ///
    /// * `event_tx` - A channel to send application-level events (end of track
    ///   or fatal errors) back to the main event loop.
    pub(crate) fn new(event_tx: mpsc::Sender<AppEvent>) -> Result<Self> {
        let (command_tx, command_rx) = mpsc::channel::<AudioPlayerCommand>();

        commands::spawn_player_worker(command_rx, event_tx);

        Ok(Self { command_tx })
    }
}

impl Playback for AudioPlayer {
    fn load_and_play(&mut self, url: &str, serial: u64) -> Result<()> {
        self.command_tx.send(AudioPlayerCommand::PlayFile {
            url: url.to_string(),
            serial,
        })?;
        Ok(())
    }

    fn pause(&mut self) -> Result<()> {
        self.command_tx.send(AudioPlayerCommand::Pause)?;
        Ok(())
    }

    fn resume(&mut self) -> Result<()> {
        self.command_tx.send(AudioPlayerCommand::Resume)?;
        Ok(())
    }

    fn unload(&mut self) -> Result<()> {
        self.command_tx.send(AudioPlayerCommand::Stop)?;
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::{cell::RefCell, rc::Rc};

    use anyhow::Result;

    use super::Playback;

    /// Records every call made to it, in order, into a shared log.
    #[derive(Debug, Default)]
    pub(crate) struct RecordingPlayer {
        pub(crate) calls: Rc<RefCell<Vec<String>>>,
    }

    impl RecordingPlayer {
        pub(crate) fn new() -> (Self, Rc<RefCell<Vec<String>>>) {
            let player = Self::default();
            let calls = Rc::clone(&player.calls);
            (player, calls)
        }

        fn record(&self, call: String) -> Result<()> {
            self.calls.borrow_mut().push(call);
            Ok(())
        }
    }

    impl Playback for RecordingPlayer {
        fn load_and_play(&mut self, url: &str, _serial: u64) -> Result<()> {
            self.record(format!("load {}", url))
        }

        fn pause(&mut self) -> Result<()> {
            self.record("pause".into())
        }

        fn resume(&mut self) -> Result<()> {
            self.record("resume".into())
        }

        fn unload(&mut self) -> Result<()> {
            self.record("unload".into())
        }
    }
}

#[cfg(test)]
mod tests {
    use anyhow::bail;

    use super::{testing::RecordingPlayer, *};

    #[test]
    fn dispatch_applies_commands_in_order() {
        let (mut player, calls) = RecordingPlayer::new();

        dispatch(
            &mut player,
            vec![
                PlaybackCommand::Unload,
                PlaybackCommand::Load {
                    url: "u1".into(),
                    serial: 1,
                },
                PlaybackCommand::Pause,
                PlaybackCommand::Resume,
            ],
        )
        .unwrap();

        assert_eq!(*calls.borrow(), vec!["unload", "load u1", "pause", "resume"]);
    }

    struct BrokenPlayer {
        attempts: usize,
    }

    impl Playback for BrokenPlayer {
        fn load_and_play(&mut self, _url: &str, _serial: u64) -> Result<()> {
            self.attempts += 1;
            bail!("worker gone")
        }

        fn pause(&mut self) -> Result<()> {
            self.attempts += 1;
            Ok(())
        }

        fn resume(&mut self) -> Result<()> {
            self.attempts += 1;
            Ok(())
        }

        fn unload(&mut self) -> Result<()> {
            self.attempts += 1;
            Ok(())
        }
    }

    #[test]
    fn dispatch_stops_at_first_failure() {
        let mut player = BrokenPlayer { attempts: 0 };

        let result = dispatch(
            &mut player,
            vec![
                PlaybackCommand::Unload,
                PlaybackCommand::Load {
                    url: "u1".into(),
                    serial: 1,
                },
                PlaybackCommand::Pause,
            ],
        );

        assert!(result.is_err());
        assert_eq!(player.attempts, 2);
    }

    #[test]
    fn audio_player_forwards_to_worker_channel() {
        let (command_tx, command_rx) = mpsc::channel();
        let mut player = AudioPlayer { command_tx };

        player.load_and_play("u1", 7).unwrap();
        player.pause().unwrap();
        player.resume().unwrap();
        player.unload().unwrap();

        let received: Vec<_> = command_rx.try_iter().collect();
        assert_eq!(
            received,
            vec![
                AudioPlayerCommand::PlayFile {
                    url: "u1".into(),
                    serial: 7,
                },
                AudioPlayerCommand::Pause,
                AudioPlayerCommand::Resume,
                AudioPlayerCommand::Stop,
            ]
        );
    }
}
