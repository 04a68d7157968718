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

//! Catalog retrieval.
//!
//! The catalog is a JSON document holding an array of song records. It is
//! read from a local file or fetched over HTTP, depending on the configured
//! location.
//!
//! Song and artwork URLs inside the document may be relative, in which case
//! they are resolved against the location of the catalog itself.

use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use thiserror::Error;
use url::Url;

use crate::model::Song;

/// Failure to retrieve or parse the catalog.
#[derive(Debug, Error)]
pub(crate) enum CatalogError {
    #[error("failed to read {location}: {source}")]
    Io {
        location: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to fetch {location}: {source}")]
    Http {
        location: String,
        #[source]
        source: Box<ureq::Error>,
    },

    #[error("failed to parse {location}: {source}")]
    Parse {
        location: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Where the catalog document lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CatalogLocation {
    Local(PathBuf),
    Remote(Url),
}

impl CatalogLocation {
    pub(crate) fn parse(location: &str) -> Self {
        match Url::parse(location) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Self::Remote(url),
            _ => Self::Local(PathBuf::from(location)),
        }
    }

    /// Short name of the document, used in user-facing messages.
    pub(crate) fn file_name(&self) -> String {
        match self {
            Self::Local(path) => path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
            Self::Remote(url) => url
                .path_segments()
                .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
                .or(url.host_str())
                .unwrap_or(url.as_str())
                .to_string(),
        }
    }

    /// Resolves a reference found inside the catalog against this location.
    ///
    /// Remote catalogs follow the usual relative URL rules, so `../a.mp3`,
    /// `/a.mp3` and `//host/a.mp3` behave as they would on a web page.
    /// References with a scheme are returned unchanged, as are absolute
    /// paths when the catalog is local.
    pub(crate) fn resolve(&self, reference: &str) -> String {
        if reference.is_empty() {
            return reference.to_string();
        }

        match self {
            Self::Local(path) => {
                if has_scheme(reference) || Path::new(reference).is_absolute() {
                    return reference.to_string();
                }
                match path.parent() {
                    Some(dir) if !dir.as_os_str().is_empty() => {
                        dir.join(reference).to_string_lossy().into_owned()
                    }
                    _ => reference.to_string(),
                }
            }
            Self::Remote(url) => match url.join(reference) {
                Ok(resolved) => resolved.into(),
                Err(e) => {
                    log::warn!("Unable to resolve {} against {}: {}", reference, url, e);
                    reference.to_string()
                }
            },
        }
    }

    fn read(&self) -> Result<String, CatalogError> {
        match self {
            Self::Local(path) => fs::read_to_string(path).map_err(|source| CatalogError::Io {
                location: self.to_string(),
                source,
            }),
            Self::Remote(url) => {
                let response = ureq::get(url.as_str()).call().map_err(|source| CatalogError::Http {
                    location: self.to_string(),
                    source: Box::new(source),
                })?;
                response.into_string().map_err(|source| CatalogError::Io {
                    location: self.to_string(),
                    source,
                })
            }
        }
    }
}

impl fmt::Display for CatalogLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local(path) => write!(f, "{}", path.display()),
            Self::Remote(url) => write!(f, "{}", url),
        }
    }
}

/// Retrieves and parses the catalog at `location`.
///
/// Relative song and artwork URLs are resolved against the location, so the
/// returned songs can be handed straight to the audio player.
///
/// # Errors
///
/// Returns a [`CatalogError`] if the document cannot be read or fetched, or
/// if it is not a JSON array of song records.
pub(crate) fn load_catalog(location: &CatalogLocation) -> Result<Vec<Song>, CatalogError> {
    let body = location.read()?;
    parse_catalog(location, &body)
}

/// True for references such as `https://...` or `file:///...`.
fn has_scheme(reference: &str) -> bool {
    Url::parse(reference).is_ok_and(|url| url.scheme().len() > 1)
}

fn parse_catalog(location: &CatalogLocation, body: &str) -> Result<Vec<Song>, CatalogError> {
    let songs: Vec<Song> = serde_json::from_str(body).map_err(|source| CatalogError::Parse {
        location: location.to_string(),
        source,
    })?;

    Ok(songs
        .into_iter()
        .map(|song| Song {
            url: location.resolve(&song.url),
            artwork: song.artwork.map(|artwork| location.resolve(&artwork)),
            ..song
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const CATALOG: &str = r#"[
        {"title": "A1", "artist": "X", "url": "music/a1.mp3", "artwork": "art/x.jpg"},
        {"title": "A2", "artist": "X", "url": "https://cdn.example.com/a2.mp3"},
        {"title": "B1", "artist": "Y", "url": "/srv/music/b1.mp3"}
    ]"#;

    #[test]
    fn parses_http_locations_as_remote() {
        assert_eq!(
            CatalogLocation::parse("https://example.com/songs.json"),
            CatalogLocation::Remote(Url::parse("https://example.com/songs.json").unwrap())
        );
        assert_eq!(
            CatalogLocation::parse("songs.json"),
            CatalogLocation::Local(PathBuf::from("songs.json"))
        );
    }

    #[test]
    fn file_name_is_last_segment() {
        assert_eq!(CatalogLocation::parse("/data/songs.json").file_name(), "songs.json");
        assert_eq!(
            CatalogLocation::parse("https://example.com/lib/songs.json").file_name(),
            "songs.json"
        );
    }

    #[test]
    fn resolves_against_local_directory() {
        let location = CatalogLocation::parse("/data/library/songs.json");

        assert_eq!(location.resolve("a1.mp3"), "/data/library/a1.mp3");
        assert_eq!(location.resolve("/elsewhere/b.mp3"), "/elsewhere/b.mp3");
        assert_eq!(location.resolve("http://host/c.mp3"), "http://host/c.mp3");
    }

    #[test]
    fn bare_local_file_name_leaves_references_untouched() {
        let location = CatalogLocation::parse("songs.json");

        assert_eq!(location.resolve("music/a1.mp3"), "music/a1.mp3");
    }

    #[test]
    fn resolves_against_remote_directory() {
        let location = CatalogLocation::parse("https://example.com/lib/songs.json");

        assert_eq!(location.resolve("a1.mp3"), "https://example.com/lib/a1.mp3");
        assert_eq!(location.resolve("/root.mp3"), "https://example.com/root.mp3");
        assert_eq!(
            location.resolve("https://cdn.example.com/b.mp3"),
            "https://cdn.example.com/b.mp3"
        );
    }

    #[test]
    fn scheme_relative_reference_keeps_the_scheme_only() {
        let location = CatalogLocation::parse("https://example.com/lib/songs.json");

        assert_eq!(
            location.resolve("//cdn.example.com/a.mp3"),
            "https://cdn.example.com/a.mp3"
        );
    }

    #[test]
    fn query_of_catalog_url_is_not_part_of_the_base_path() {
        let location = CatalogLocation::parse("https://example.com/lib/songs.json?v=1/2");

        assert_eq!(location.resolve("a1.mp3"), "https://example.com/lib/a1.mp3");
    }

    #[test]
    fn dot_segments_are_removed() {
        let location = CatalogLocation::parse("https://example.com/lib/songs.json");

        assert_eq!(
            location.resolve("../music/a1.mp3"),
            "https://example.com/music/a1.mp3"
        );
        assert_eq!(location.resolve("./a1.mp3"), "https://example.com/lib/a1.mp3");
    }

    #[test]
    fn resolves_against_remote_host_without_path() {
        let location = CatalogLocation::parse("https://example.com");

        assert_eq!(location.resolve("a1.mp3"), "https://example.com/a1.mp3");
    }

    #[test]
    fn loads_local_catalog_and_resolves_urls() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("songs.json");
        fs::File::create(&path)
            .unwrap()
            .write_all(CATALOG.as_bytes())
            .unwrap();

        let location = CatalogLocation::Local(path);
        let songs = load_catalog(&location).unwrap();

        let url = dir.path().join("music/a1.mp3").to_string_lossy().into_owned();
        let artwork = dir.path().join("art/x.jpg").to_string_lossy().into_owned();

        assert_eq!(songs.len(), 3);
        assert_eq!(songs[0].url, url);
        assert_eq!(songs[0].artwork.as_deref(), Some(artwork.as_str()));
        assert_eq!(songs[1].url, "https://cdn.example.com/a2.mp3");
        assert_eq!(songs[1].artwork, None);
        assert_eq!(songs[2].url, "/srv/music/b1.mp3");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let location = CatalogLocation::Local(dir.path().join("songs.json"));

        let err = load_catalog(&location).unwrap_err();

        assert!(matches!(err, CatalogError::Io { .. }));
        assert!(err.to_string().contains("songs.json"));
    }

    #[test]
    fn malformed_document_is_a_parse_error() {
        let location = CatalogLocation::parse("songs.json");

        let err = parse_catalog(&location, r#"{"title": "not an array"}"#).unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));

        let err = parse_catalog(&location, r#"[{"title": "A1", "artist": "X"}]"#).unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
    }

    #[test]
    fn empty_array_is_an_empty_catalog() {
        let location = CatalogLocation::parse("songs.json");

        assert!(parse_catalog(&location, "[]").unwrap().is_empty());
    }
}
