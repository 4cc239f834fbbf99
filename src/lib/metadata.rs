use crate::error::MetadataReadError;
use lofty::file::TaggedFileExt;
use lofty::tag::{ItemKey, Tag};
use std::path::Path;
use tracing::debug;

/// Placeholder for tag fields that are missing or blank.
pub const UNKNOWN: &str = "Unknown";

/// Tag fields that determine where a file lands in the library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackMetadata {
    pub artist: String,
    pub year: u32,
    pub album: String,
}

impl TrackMetadata {
    /// Metadata for a file that carries no usable tag at all.
    pub fn unknown() -> Self {
        Self {
            artist: UNKNOWN.to_string(),
            year: 0,
            album: UNKNOWN.to_string(),
        }
    }
}

/// Tag-reading capability consumed by the organize loop.
///
/// The loop never depends on a concrete tagging backend; tests inject a
/// stub returning fixed metadata.
pub trait MetadataProvider {
    fn read(&self, path: &Path) -> Result<TrackMetadata, MetadataReadError>;
}

/// Metadata provider backed by lofty.
pub struct LoftyMetadataProvider;

impl LoftyMetadataProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoftyMetadataProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MetadataProvider for LoftyMetadataProvider {
    fn read(&self, path: &Path) -> Result<TrackMetadata, MetadataReadError> {
        let tagged_file =
            lofty::read_from_path(path).map_err(|e| MetadataReadError::new(e.to_string()))?;

        // A readable file with no tag block still gets organized, under the
        // default Unknown/0/Unknown triple.
        let metadata = match tagged_file.primary_tag().or_else(|| tagged_file.first_tag()) {
            Some(tag) => metadata_from_tag(tag),
            None => TrackMetadata::unknown(),
        };

        debug!(
            path = %path.display(),
            artist = %metadata.artist,
            year = metadata.year,
            album = %metadata.album,
            "read tags"
        );

        Ok(metadata)
    }
}

fn metadata_from_tag(tag: &Tag) -> TrackMetadata {
    TrackMetadata {
        artist: resolve_artist(tag),
        year: resolve_year(tag),
        album: resolve_album(tag),
    }
}

/// Artist preference order: album artist, track artist, performer,
/// composer. Whitespace-only values count as absent.
fn resolve_artist(tag: &Tag) -> String {
    let preference = [
        ItemKey::AlbumArtist,
        ItemKey::TrackArtist,
        ItemKey::Performer,
        ItemKey::Composer,
    ];

    preference
        .iter()
        .filter_map(|key| tag.get_string(key))
        .map(str::trim)
        .find(|value| !value.is_empty())
        .map_or_else(|| UNKNOWN.to_string(), str::to_string)
}

fn resolve_album(tag: &Tag) -> String {
    tag.get_string(&ItemKey::AlbumTitle)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map_or_else(|| UNKNOWN.to_string(), str::to_string)
}

/// Year item when it parses, else the leading four digits of the recording
/// date, else 0.
fn resolve_year(tag: &Tag) -> u32 {
    tag.get_string(&ItemKey::Year)
        .and_then(|value| value.trim().parse().ok())
        .or_else(|| {
            tag.get_string(&ItemKey::RecordingDate)
                .and_then(|value| value.trim().get(..4))
                .and_then(|prefix| prefix.parse().ok())
        })
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lofty::tag::{ItemValue, TagItem, TagType};

    // Tag::push skips the per-format key mapping checks, so every ItemKey
    // used here lands in the tag regardless of tag type.
    fn tag_with(items: &[(ItemKey, &str)]) -> Tag {
        let mut tag = Tag::new(TagType::Id3v2);
        for (key, value) in items {
            tag.push_unchecked(TagItem::new(
                key.clone(),
                ItemValue::Text((*value).to_string()),
            ));
        }
        tag
    }

    #[test]
    fn test_artist_prefers_album_artist() {
        let tag = tag_with(&[
            (ItemKey::AlbumArtist, "The Band"),
            (ItemKey::TrackArtist, "Solo Guest"),
            (ItemKey::Composer, "Composer"),
        ]);
        assert_eq!(resolve_artist(&tag), "The Band");
    }

    #[test]
    fn test_artist_falls_back_to_track_artist() {
        let tag = tag_with(&[
            (ItemKey::TrackArtist, "Solo Guest"),
            (ItemKey::Composer, "Composer"),
        ]);
        assert_eq!(resolve_artist(&tag), "Solo Guest");
    }

    #[test]
    fn test_artist_falls_back_to_performer_then_composer() {
        let tag = tag_with(&[
            (ItemKey::Performer, "Orchestra"),
            (ItemKey::Composer, "Composer"),
        ]);
        assert_eq!(resolve_artist(&tag), "Orchestra");

        let tag = tag_with(&[(ItemKey::Composer, "Composer")]);
        assert_eq!(resolve_artist(&tag), "Composer");
    }

    #[test]
    fn test_artist_skips_blank_values() {
        let tag = tag_with(&[
            (ItemKey::AlbumArtist, "   "),
            (ItemKey::TrackArtist, "Solo Guest"),
        ]);
        assert_eq!(resolve_artist(&tag), "Solo Guest");
    }

    #[test]
    fn test_empty_tag_yields_unknown_defaults() {
        let tag = Tag::new(TagType::Id3v2);
        let metadata = metadata_from_tag(&tag);
        assert_eq!(metadata, TrackMetadata::unknown());
    }

    #[test]
    fn test_year_parses_year_item() {
        let tag = tag_with(&[(ItemKey::Year, "2006")]);
        assert_eq!(resolve_year(&tag), 2006);
    }

    #[test]
    fn test_year_falls_back_to_recording_date_prefix() {
        let tag = tag_with(&[
            (ItemKey::Year, "vinyl"),
            (ItemKey::RecordingDate, "1980-07-25"),
        ]);
        assert_eq!(resolve_year(&tag), 1980);
    }

    #[test]
    fn test_year_defaults_to_zero() {
        let tag = tag_with(&[(ItemKey::AlbumTitle, "Back in Black")]);
        assert_eq!(resolve_year(&tag), 0);
    }

    #[test]
    fn test_album_defaults_to_unknown_when_blank() {
        let tag = tag_with(&[(ItemKey::AlbumTitle, "  ")]);
        assert_eq!(resolve_album(&tag), UNKNOWN);
    }

    #[test]
    fn test_read_nonexistent_file_returns_error() {
        let provider = LoftyMetadataProvider::new();
        let result = provider.read(Path::new("/nonexistent/file.mp3"));
        assert!(result.is_err());
    }
}
