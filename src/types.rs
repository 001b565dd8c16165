use std::fmt;

use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// Client identifier and secret of a registered Spotify application.
///
/// Built once per authentication attempt, either from the environment via
/// [`crate::config::credentials`] or directly in tests. The secret never shows up
/// in `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// Opaque bearer token, valid for the rest of one lookup session.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
    pub popularity: u32,
}

/// A top track, shaped for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Track {
    pub name: String,
    pub popularity: u32,
    pub external_link: Option<String>,
    pub album_image_url: Option<String>,
}

impl Track {
    /// `[name](link)`, or the bare name when the service sent no link.
    pub fn markdown_link(&self) -> String {
        match &self.external_link {
            Some(link) => format!("[{}]({})", self.name, link),
            None => self.name.clone(),
        }
    }

    pub fn display_line(&self) -> String {
        format!("{}: (pop: {})", self.markdown_link(), self.popularity)
    }
}

impl From<TrackObject> for Track {
    fn from(track: TrackObject) -> Self {
        Self {
            name: track.name,
            popularity: track.popularity,
            external_link: track.external_urls.and_then(|urls| urls.spotify),
            album_image_url: track
                .album
                .and_then(|album| album.images.into_iter().next())
                .map(|image| image.url),
        }
    }
}

/// Two display slots for side-by-side rendering.
///
/// Only the last pair of a sequence may leave `second` empty and `first` is
/// always set, which is why it is not an `Option`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackPair {
    pub first: Track,
    pub second: Option<Track>,
}

/// Everything the presentation layer needs for one lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopTracksView {
    pub artist_name: String,
    pub artist_popularity: u32,
    pub pairs: Vec<TrackPair>,
}

#[derive(Tabled)]
pub struct TrackPairTableRow {
    #[tabled(rename = "Track")]
    pub first: String,
    #[tabled(rename = "Track")]
    pub second: String,
}

impl From<&TrackPair> for TrackPairTableRow {
    fn from(pair: &TrackPair) -> Self {
        Self {
            first: track_cell(Some(&pair.first)),
            second: track_cell(pair.second.as_ref()),
        }
    }
}

fn track_cell(track: Option<&Track>) -> String {
    match track {
        Some(t) => match &t.album_image_url {
            Some(image) => format!("{}\n{}", t.display_line(), image),
            None => t.display_line(),
        },
        None => String::new(),
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchArtistsResponse {
    pub artists: ArtistsContainer,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArtistsContainer {
    pub items: Vec<Artist>,
    pub total: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TopTracksResponse {
    pub tracks: Vec<TrackObject>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackObject {
    pub name: String,
    pub popularity: u32,
    pub external_urls: Option<ExternalUrls>,
    pub album: Option<AlbumObject>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExternalUrls {
    pub spotify: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AlbumObject {
    #[serde(default)]
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Image {
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(name: &str, link: Option<&str>, image: Option<&str>) -> Track {
        Track {
            name: name.to_string(),
            popularity: 70,
            external_link: link.map(str::to_string),
            album_image_url: image.map(str::to_string),
        }
    }

    #[test]
    fn markdown_link_uses_external_url() {
        let t = track("One More Time", Some("https://open.spotify.com/track/1"), None);
        assert_eq!(t.markdown_link(), "[One More Time](https://open.spotify.com/track/1)");
        assert_eq!(
            t.display_line(),
            "[One More Time](https://open.spotify.com/track/1): (pop: 70)"
        );
    }

    #[test]
    fn markdown_link_falls_back_to_name() {
        let t = track("Aerodynamic", None, None);
        assert_eq!(t.markdown_link(), "Aerodynamic");
    }

    #[test]
    fn track_from_wire_takes_first_album_image() {
        let wire: TrackObject = serde_json::from_value(serde_json::json!({
            "name": "Around the World",
            "popularity": 75,
            "external_urls": { "spotify": "https://open.spotify.com/track/2" },
            "album": { "images": [
                { "url": "https://i.scdn.co/image/large", "height": 640 },
                { "url": "https://i.scdn.co/image/small", "height": 64 }
            ] }
        }))
        .unwrap();

        let t = Track::from(wire);
        assert_eq!(t.external_link.as_deref(), Some("https://open.spotify.com/track/2"));
        assert_eq!(t.album_image_url.as_deref(), Some("https://i.scdn.co/image/large"));
    }

    #[test]
    fn track_from_wire_tolerates_missing_optional_fields() {
        let wire: TrackObject = serde_json::from_value(serde_json::json!({
            "name": "Da Funk",
            "popularity": 60,
            "album": { "images": [] }
        }))
        .unwrap();

        let t = Track::from(wire);
        assert_eq!(t.external_link, None);
        assert_eq!(t.album_image_url, None);
    }

    #[test]
    fn track_without_popularity_is_malformed() {
        let wire = serde_json::from_value::<TrackObject>(serde_json::json!({ "name": "Digital Love" }));
        assert!(wire.is_err());
    }

    #[test]
    fn table_row_leaves_absent_slot_empty() {
        let pair = TrackPair {
            first: track("Voyager", Some("https://x/1"), Some("https://img/1")),
            second: None,
        };
        let row = TrackPairTableRow::from(&pair);
        assert_eq!(row.first, "[Voyager](https://x/1): (pop: 70)\nhttps://img/1");
        assert_eq!(row.second, "");
    }

    #[test]
    fn debug_output_hides_secrets() {
        let creds = Credentials::new("client", "very-secret");
        let token = AccessToken::new("BQC-token");
        assert!(!format!("{:?}", creds).contains("very-secret"));
        assert!(!format!("{:?}", token).contains("BQC-token"));
    }
}
