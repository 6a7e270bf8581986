//! Track reconciliation
//!
//! iTunes playlist exports list every track's id, artist and name as
//! separate key/value lines. The reconciler groups them by kind and pairs
//! them back up positionally. The id list is authoritative for playlist
//! order; the Artist/Name block can be shorter than it, in which case the
//! trailing ids are resolved by id lookup or replaced with placeholders.

use super::classify::{classify, EntryKind};
use crate::error::PlaylistError;
use crate::model::{Playlist, Track};
use std::collections::HashMap;

/// Entry payloads grouped by kind, each in source order
#[derive(Debug, Default)]
struct Entries {
    ids: Vec<String>,
    artists: Vec<String>,
    names: Vec<String>,
}

impl Entries {
    fn collect<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries = Entries::default();

        for line in lines {
            let entry = classify(line.as_ref().trim());
            match entry.kind {
                EntryKind::Id => entries.ids.push(entry.value),
                EntryKind::Artist => entries.artists.push(entry.value),
                EntryKind::Name => entries.names.push(entry.value),
                EntryKind::Other => {}
            }
        }

        entries
    }

    fn ensure_complete(&self) -> Result<(), PlaylistError> {
        let lists = [
            (EntryKind::Id, &self.ids),
            (EntryKind::Artist, &self.artists),
            (EntryKind::Name, &self.names),
        ];

        match lists.iter().find(|(_, list)| list.is_empty()) {
            Some((kind, _)) => Err(PlaylistError::MalformedPlaylist(*kind)),
            None => Ok(()),
        }
    }
}

/// Rebuild a playlist from the lines of one export file
///
/// Lines may carry surrounding whitespace. Fails with
/// [`PlaylistError::MalformedPlaylist`] when the file has no Track ID,
/// Artist or Name entries at all.
pub fn reconcile<I, S>(lines: I) -> Result<Playlist, PlaylistError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let entries = Entries::collect(lines);
    entries.ensure_complete()?;

    let paired: Vec<Track> = entries
        .artists
        .iter()
        .zip(&entries.names)
        .zip(&entries.ids)
        .map(|((artist, name), id)| Track::new(id.as_str(), artist.as_str(), name.as_str()))
        .collect();

    // Last write wins on duplicate ids
    let by_id: HashMap<&str, &Track> = paired.iter().map(|t| (t.id.as_str(), t)).collect();

    let tracks: Vec<Track> = entries
        .ids
        .iter()
        .enumerate()
        .map(|(i, id)| match paired.get(i) {
            Some(track) => track.clone(),
            None => by_id
                .get(id.as_str())
                .map(|track| (*track).clone())
                .unwrap_or_else(|| Track::unknown(id.as_str())),
        })
        .collect();

    // The playlist's own Name key follows every track entry
    let name = entries.names.last().cloned().unwrap_or_default();

    log::debug!(
        "Reconciled '{}': {} ids, {} artists, {} names, {} paired",
        name,
        entries.ids.len(),
        entries.artists.len(),
        entries.names.len(),
        paired.len()
    );

    Ok(Playlist::new(name, tracks))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: u32) -> String {
        format!("<key>Track ID</key><integer>{}</integer>", n)
    }

    fn artist(a: &str) -> String {
        format!("<key>Artist</key><string>{}</string>", a)
    }

    fn name(n: &str) -> String {
        format!("<key>Name</key><string>{}</string>", n)
    }

    #[test]
    fn test_end_to_end_example() {
        let lines = vec![
            id(1),
            id(2),
            artist("Queen"),
            name("Bohemian Rhapsody"),
            name("My Playlist"),
        ];

        let playlist = reconcile(&lines).unwrap();

        assert_eq!(playlist.name, "My Playlist");
        assert_eq!(
            playlist.tracks,
            vec![
                Track::new("1", "Queen", "Bohemian Rhapsody"),
                Track::unknown("2"),
            ]
        );
    }

    #[test]
    fn test_equal_lengths_keep_id_order() {
        let lines = vec![
            "<dict>".to_string(),
            id(30),
            artist("A"),
            name("a"),
            id(10),
            artist("B"),
            name("b"),
            id(20),
            artist("C"),
            name("c"),
            "</dict>".to_string(),
        ];

        let playlist = reconcile(&lines).unwrap();

        let ids: Vec<&str> = playlist.tracks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["30", "10", "20"]);
        assert_eq!(playlist.tracks[1], Track::new("10", "B", "b"));
        // Last Name entry doubles as the playlist name
        assert_eq!(playlist.name, "c");
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        let lines = vec![
            format!("\t\t{}", id(1)),
            format!("    {}  ", artist("Queen")),
            format!("\t{}\r", name("Innuendo")),
            format!("  {}", name("Nineties")),
        ];

        let playlist = reconcile(&lines).unwrap();
        assert_eq!(playlist.name, "Nineties");
        assert_eq!(playlist.tracks, vec![Track::new("1", "Queen", "Innuendo")]);
    }

    #[test]
    fn test_other_lines_do_not_shift_pairing() {
        let lines = vec![
            id(1),
            "<key>Total Time</key><integer>500</integer>".to_string(),
            artist("Queen"),
            "<key>Album</key><string>A Night at the Opera</string>".to_string(),
            name("Love of My Life"),
            id(2),
            "<key>Total Time</key><integer>300</integer>".to_string(),
            artist("Bowie"),
            name("Heroes"),
            name("Mix"),
        ];

        let playlist = reconcile(&lines).unwrap();
        assert_eq!(
            playlist.tracks,
            vec![
                Track::new("1", "Queen", "Love of My Life"),
                Track::new("2", "Bowie", "Heroes"),
            ]
        );
    }

    #[test]
    fn test_short_artist_block_yields_placeholders() {
        let lines = vec![
            id(1),
            id(2),
            id(3),
            artist("A"),
            name("a"),
            name("b"),
            name("c"),
            name("Playlist"),
        ];

        let playlist = reconcile(&lines).unwrap();

        assert_eq!(playlist.len(), 3);
        assert_eq!(playlist.tracks[0], Track::new("1", "A", "a"));
        assert_eq!(playlist.tracks[1], Track::unknown("2"));
        assert_eq!(playlist.tracks[2], Track::unknown("3"));
        assert_eq!(playlist.unknown_count(), 2);
    }

    #[test]
    fn test_trailing_id_resolves_through_lookup() {
        // The playlist repeats track 1 after the paired block
        let lines = vec![
            id(1),
            id(2),
            id(1),
            artist("A"),
            name("a"),
            artist("B"),
            name("b"),
            name("Repeat"),
        ];

        let playlist = reconcile(&lines).unwrap();
        assert_eq!(
            playlist.tracks,
            vec![
                Track::new("1", "A", "a"),
                Track::new("2", "B", "b"),
                Track::new("1", "A", "a"),
            ]
        );
    }

    #[test]
    fn test_duplicate_ids_last_pair_wins() {
        let lines = vec![id(1), id(1), id(1), artist("A"), name("a"), artist("B"), name("b")];

        let playlist = reconcile(&lines).unwrap();
        assert_eq!(
            playlist.tracks,
            vec![
                Track::new("1", "A", "a"),
                Track::new("1", "B", "b"),
                Track::new("1", "B", "b"),
            ]
        );
    }

    #[test]
    fn test_more_pairs_than_ids() {
        let lines = vec![id(5), artist("A"), name("a"), artist("B"), name("b")];

        let playlist = reconcile(&lines).unwrap();
        assert_eq!(playlist.tracks, vec![Track::new("5", "A", "a")]);
        assert_eq!(playlist.name, "b");
    }

    #[test]
    fn test_only_ids_is_malformed() {
        let lines = vec![id(1), id(2)];
        assert_eq!(
            reconcile(&lines),
            Err(PlaylistError::MalformedPlaylist(EntryKind::Artist))
        );
    }

    #[test]
    fn test_missing_lists_reported_in_order() {
        let empty: Vec<String> = Vec::new();
        assert_eq!(
            reconcile(&empty),
            Err(PlaylistError::MalformedPlaylist(EntryKind::Id))
        );

        let lines = vec![id(1), artist("A")];
        assert_eq!(
            reconcile(&lines),
            Err(PlaylistError::MalformedPlaylist(EntryKind::Name))
        );

        let lines = vec![artist("A"), name("a")];
        assert_eq!(
            reconcile(&lines),
            Err(PlaylistError::MalformedPlaylist(EntryKind::Id))
        );
    }

    #[test]
    fn test_reconcile_is_idempotent() {
        let lines = vec![id(1), id(2), artist("Queen"), name("Bohemian Rhapsody"), name("P")];

        let first = reconcile(&lines).unwrap();
        let second = reconcile(&lines).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.report(), second.report());
    }
}
