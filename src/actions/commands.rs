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

//! Background command worker.
//!
//! Slow work, currently only retrieving the catalog, runs on a dedicated
//! thread so the UI stays responsive. Results come back to the main event
//! loop as [`AppEvent`]s.

use anyhow::Result;
use std::{
    sync::mpsc::{Receiver, Sender},
    thread,
};

use crate::{
    actions::events::AppEvent,
    catalog::{self, CatalogLocation},
    config::AppConfig,
};

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum AppCommand {
    LoadCatalog,
}

/// State owned by the command worker thread.
struct CommandWorker {
    location: CatalogLocation,
    catalog_requested: bool,
}

pub(crate) fn spawn_command_worker(
    config: &AppConfig,
    command_rx: Receiver<AppCommand>,
    event_tx: Sender<AppEvent>,
) {
    let mut worker = CommandWorker::new(config);

    thread::spawn(move || {
        while let Ok(command) = command_rx.recv() {
            if let Err(e) = worker.handle_command(command, &event_tx) {
                log::error!("Command failed: {:?}", e);
                let _ = event_tx.send(AppEvent::FatalError(e.to_string()));
            }
        }
    });
}

impl CommandWorker {
    fn new(config: &AppConfig) -> Self {
        Self {
            location: CatalogLocation::parse(&config.catalog),
            catalog_requested: false,
        }
    }

    fn handle_command(&mut self, command: AppCommand, event_tx: &Sender<AppEvent>) -> Result<()> {
        match command {
            AppCommand::LoadCatalog => {
                // The catalog is fetched once per run, there is no reload
                if self.catalog_requested {
                    log::warn!("Catalog already requested, ignoring");
                    return Ok(());
                }
                self.catalog_requested = true;

                log::info!("Loading catalog from {}", self.location);

                let event = match catalog::load_catalog(&self.location) {
                    Ok(songs) => AppEvent::CatalogLoaded(songs),
                    Err(e) => {
                        log::error!("Catalog load failed: {}", e);
                        AppEvent::CatalogFailed(format!(
                            "Failed to load {}",
                            self.location.file_name()
                        ))
                    }
                };
                event_tx.send(event)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, sync::mpsc};

    use super::*;

    fn worker_for(catalog: &str) -> CommandWorker {
        let config = AppConfig {
            catalog: catalog.to_string(),
            ..AppConfig::default()
        };
        CommandWorker::new(&config)
    }

    #[test]
    fn loads_catalog_into_event() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("songs.json");
        fs::write(
            &path,
            r#"[{"title": "A1", "artist": "X", "url": "https://example.com/a1.mp3"}]"#,
        )
        .unwrap();
        let mut worker = worker_for(path.to_str().unwrap());
        let (event_tx, event_rx) = mpsc::channel();

        worker.handle_command(AppCommand::LoadCatalog, &event_tx).unwrap();

        match event_rx.try_recv().unwrap() {
            AppEvent::CatalogLoaded(songs) => {
                assert_eq!(songs.len(), 1);
                assert_eq!(songs[0].title, "A1");
            }
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn failure_is_reported_with_document_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("songs.json");
        let mut worker = worker_for(path.to_str().unwrap());
        let (event_tx, event_rx) = mpsc::channel();

        worker.handle_command(AppCommand::LoadCatalog, &event_tx).unwrap();

        match event_rx.try_recv().unwrap() {
            AppEvent::CatalogFailed(message) => assert_eq!(message, "Failed to load songs.json"),
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn catalog_is_only_requested_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("songs.json");
        let mut worker = worker_for(path.to_str().unwrap());
        let (event_tx, event_rx) = mpsc::channel();

        worker.handle_command(AppCommand::LoadCatalog, &event_tx).unwrap();
        worker.handle_command(AppCommand::LoadCatalog, &event_tx).unwrap();

        assert_eq!(event_rx.try_iter().count(), 1);
    }
}
