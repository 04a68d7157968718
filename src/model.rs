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

use serde::Deserialize;

/// A single catalog entry.
///
/// Songs carry no identifier, a song is identified by its position in the
/// catalog or in the filtered list for an artist.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct Song {
    pub(crate) title: String,
    pub(crate) artist: String,
    pub(crate) url: String,
    #[serde(default)]
    pub(crate) artwork: Option<String>,
}

/// Returns the distinct artist names of a catalog, in order of first
/// occurrence.
pub(crate) fn artist_index(catalog: &[Song]) -> Vec<String> {
    let mut artists: Vec<String> = Vec::new();
    for song in catalog {
        if !artists.iter().any(|a| a == &song.artist) {
            artists.push(song.artist.clone());
        }
    }
    artists
}

/// Returns the songs by `artist`, preserving catalog order.
pub(crate) fn songs_by_artist(catalog: &[Song], artist: &str) -> Vec<Song> {
    catalog
        .iter()
        .filter(|song| song.artist == artist)
        .cloned()
        .collect()
}

#[cfg(test)]
pub(crate) fn song(title: &str, artist: &str, url: &str) -> Song {
    Song {
        title: title.to_string(),
        artist: artist.to_string(),
        url: url.to_string(),
        artwork: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artist_index_keeps_first_seen_order() {
        let catalog = vec![
            song("B1", "Y", "u1"),
            song("A1", "X", "u2"),
            song("B2", "Y", "u3"),
            song("C1", "Z", "u4"),
            song("A2", "X", "u5"),
        ];

        assert_eq!(artist_index(&catalog), vec!["Y", "X", "Z"]);
    }

    #[test]
    fn artist_index_of_empty_catalog_is_empty() {
        assert!(artist_index(&[]).is_empty());
    }

    #[test]
    fn artist_names_are_case_sensitive() {
        let catalog = vec![song("a", "abba", "u1"), song("b", "ABBA", "u2")];

        assert_eq!(artist_index(&catalog), vec!["abba", "ABBA"]);
    }

    #[test]
    fn songs_by_artist_keeps_catalog_order() {
        let catalog = vec![
            song("A1", "X", "u1"),
            song("B1", "Y", "u2"),
            song("A2", "X", "u3"),
        ];

        let titles: Vec<_> = songs_by_artist(&catalog, "X")
            .into_iter()
            .map(|s| s.title)
            .collect();

        assert_eq!(titles, vec!["A1", "A2"]);
        assert!(songs_by_artist(&catalog, "nobody").is_empty());
    }

    #[test]
    fn artwork_is_optional_in_json() {
        let songs: Vec<Song> = serde_json::from_str(
            r#"[
                {"title": "A1", "artist": "X", "url": "u1"},
                {"title": "A2", "artist": "X", "url": "u2", "artwork": "a2.jpg"}
            ]"#,
        )
        .unwrap();

        assert_eq!(songs[0].artwork, None);
        assert_eq!(songs[1].artwork.as_deref(), Some("a2.jpg"));
    }
}
