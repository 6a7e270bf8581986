//! Line classifier for iTunes plist exports
//!
//! Each trimmed line is tagged as a Track ID, Artist, Name or "other"
//! entry. Only the first key on the line is considered and no nesting is
//! tracked; the reconciler works purely from the order of entries.

use std::fmt;

/// `<key>` opening for the per-track id
pub const TRACK_ID_MARKER: &str = "<key>Track ID</key>";

/// `<key>` opening for the artist field
pub const ARTIST_MARKER: &str = "<key>Artist</key>";

/// `<key>` opening for track and playlist names
pub const NAME_MARKER: &str = "<key>Name</key>";

/// Opening and closing tags of the elements a payload can be stored in
const VALUE_TAGS: [(&str, &str); 2] = [
    ("<integer>", "</integer>"),
    ("<string>", "</string>"),
];

/// Kind of a classified line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Id,
    Artist,
    Name,
    Other,
}

impl EntryKind {
    /// Marker prefix for this kind, `None` for `Other`
    pub fn marker(&self) -> Option<&'static str> {
        match self {
            EntryKind::Id => Some(TRACK_ID_MARKER),
            EntryKind::Artist => Some(ARTIST_MARKER),
            EntryKind::Name => Some(NAME_MARKER),
            EntryKind::Other => None,
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntryKind::Id => "Track ID",
            EntryKind::Artist => "Artist",
            EntryKind::Name => "Name",
            EntryKind::Other => "other",
        };
        f.write_str(name)
    }
}

/// One line decoded into its kind and payload
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassifiedEntry {
    pub kind: EntryKind,

    /// Decoded value, empty for `Other`
    pub value: String,
}

impl ClassifiedEntry {
    fn other() -> Self {
        Self {
            kind: EntryKind::Other,
            value: String::new(),
        }
    }
}

/// Classify a single trimmed line
///
/// Markers are tested in priority order Track ID, Artist, Name. Lines
/// matching none of them become `Other` with an empty payload.
pub fn classify(line: &str) -> ClassifiedEntry {
    [EntryKind::Id, EntryKind::Artist, EntryKind::Name]
        .into_iter()
        .find_map(|kind| {
            let marker = kind.marker()?;
            line.strip_prefix(marker).map(|rest| ClassifiedEntry {
                kind,
                value: extract_value(line, rest),
            })
        })
        .unwrap_or_else(ClassifiedEntry::other)
}

/// Pull the inner text of the first complete, non-empty `<integer>` or
/// `<string>` element out of `rest`, falling back to the whole `line` when
/// there is none.
fn extract_value(line: &str, rest: &str) -> String {
    let mut openings: Vec<(usize, &str)> = VALUE_TAGS
        .iter()
        .flat_map(|&(open, close)| {
            rest.match_indices(open)
                .map(move |(pos, _)| (pos + open.len(), close))
        })
        .collect();
    openings.sort_unstable_by_key(|(start, _)| *start);

    let inner = openings.into_iter().find_map(|(start, close)| {
        let body = &rest[start..];
        body.find(close)
            .map(|end| &body[..end])
            .filter(|inner| !inner.is_empty())
    });

    unescape(inner.unwrap_or(line))
}

/// iTunes writes `&` as the numeric entity `&#38;`
fn unescape(text: &str) -> String {
    text.replace("&#38;", "&")
}
