use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    Res, config, error,
    error::PipelineError,
    pipeline::{self, Outcome, Stage},
    spotify::SpotifyClient,
    types::{TopTracksView, TrackPairTableRow},
    warning,
};

/// Looks up `artist` and prints their top tracks.
///
/// `timeout` (seconds) overrides `TOPTRACKS_HTTP_TIMEOUT_SECS`. With `json` the
/// view is printed as JSON instead of a table.
pub async fn top(artist: String, timeout: Option<u64>, json: bool) {
    let timeout = match timeout {
        Some(secs) => Some(Duration::from_secs(secs)),
        None => match config::http_timeout() {
            Ok(t) => t,
            Err(e) => error!("Invalid configuration. Err: {}", e),
        },
    };

    let credentials = match config::credentials() {
        Ok(c) => c,
        Err(e) => error!(
            "Missing Spotify credentials. Set them in {} or the environment.\n Error: {}",
            config::env_file_path().display(),
            e
        ),
    };

    let client = match SpotifyClient::with_timeout(config::endpoints(), timeout) {
        Ok(c) => c,
        Err(e) => error!("Failed to set up HTTP client. Err: {}", e),
    };

    let pb = ProgressBar::new_spinner();
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let result = pipeline::run_with(&client, &credentials, &artist, |stage| {
        if let Some(msg) = stage_message(stage) {
            pb.set_message(msg);
        }
    })
    .await;
    pb.finish_and_clear();

    match result {
        Ok(Outcome::Found(view)) => {
            if json {
                if let Err(e) = print_json(&view) {
                    error!("Failed to serialize result. Err: {}", e);
                }
            } else {
                println!("{}", render_view(&view));
            }
        }
        Ok(Outcome::NotFound { query }) => warning!("No data for artist {}!", query),
        Err(PipelineError::Auth(e)) => error!("Could not authenticate with Spotify. Err: {}", e),
        Err(e) => error!("Failed to fetch top tracks. Err: {}", e),
    }
}

/// Renders the heading and a two-column table, one row per track pair.
pub fn render_view(view: &TopTracksView) -> String {
    let heading = format!(
        "Artist: {} (pop: {})\nTop tracks:",
        view.artist_name, view.artist_popularity
    );

    if view.pairs.is_empty() {
        return format!("{}\n(none)", heading);
    }

    let rows: Vec<TrackPairTableRow> = view.pairs.iter().map(TrackPairTableRow::from).collect();
    format!("{}\n{}", heading, Table::new(rows))
}

fn print_json(view: &TopTracksView) -> Res<()> {
    println!("{}", serde_json::to_string_pretty(view)?);
    Ok(())
}

fn stage_message(stage: Stage) -> Option<&'static str> {
    match stage {
        Stage::Authenticating => Some("Authenticating with Spotify..."),
        Stage::Resolving => Some("Searching for artist..."),
        Stage::Fetching => Some("Fetching top tracks..."),
        Stage::Idle | Stage::Paired | Stage::Done => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{types::Track, utils::pair_up};

    fn track(name: &str) -> Track {
        Track {
            name: name.to_string(),
            popularity: 77,
            external_link: Some(format!("https://open.spotify.com/track/{}", name)),
            album_image_url: None,
        }
    }

    #[test]
    fn renders_heading_and_one_row_per_pair() {
        let view = TopTracksView {
            artist_name: "Daft Punk".to_string(),
            artist_popularity: 82,
            pairs: pair_up(&[track("a"), track("b"), track("c")]),
        };

        let out = render_view(&view);
        assert!(out.starts_with("Artist: Daft Punk (pop: 82)\nTop tracks:"));
        assert!(out.contains("[a](https://open.spotify.com/track/a): (pop: 77)"));
        assert!(out.contains("[c](https://open.spotify.com/track/c): (pop: 77)"));
    }

    #[test]
    fn renders_placeholder_without_tracks() {
        let view = TopTracksView {
            artist_name: "Nobody".to_string(),
            artist_popularity: 0,
            pairs: Vec::new(),
        };
        assert_eq!(render_view(&view), "Artist: Nobody (pop: 0)\nTop tracks:\n(none)");
    }

    #[test]
    fn spinner_messages_cover_network_stages() {
        assert!(stage_message(Stage::Authenticating).is_some());
        assert!(stage_message(Stage::Resolving).is_some());
        assert!(stage_message(Stage::Fetching).is_some());
        assert!(stage_message(Stage::Done).is_none());
    }
}
