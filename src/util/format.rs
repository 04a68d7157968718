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

use crate::model::Song;

/// Shown in the now-playing panel while nothing is playing.
pub(crate) const NOTHING_PLAYING: &str = "Select a song to play";

/// Formats the now-playing label for a song.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(now_playing_label(None), "Select a song to play");
/// ```
pub(crate) fn now_playing_label(song: Option<&Song>) -> String {
    match song {
        Some(song) => format!("{} \u{2014} {}", song.title, song.artist),
        None => NOTHING_PLAYING.to_string(),
    }
}

/// Formats the 1-based position of a row in the song table.
pub(crate) fn position(index: usize, count: usize) -> String {
    let width = count.to_string().len().max(2);
    format!("{:0width$}", index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::song;

    #[test]
    fn label_joins_title_and_artist() {
        let song = song("A1", "X", "u1");

        assert_eq!(now_playing_label(Some(&song)), "A1 \u{2014} X");
    }

    #[test]
    fn label_without_song_is_placeholder() {
        assert_eq!(now_playing_label(None), "Select a song to play");
    }

    #[test]
    fn positions_are_one_based_and_padded() {
        assert_eq!(position(0, 3), "01");
        assert_eq!(position(9, 12), "10");
        assert_eq!(position(4, 120), "005");
    }
}
