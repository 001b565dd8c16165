//! The lookup pipeline: authenticate, resolve the artist, fetch top tracks and
//! lay them out in pairs.
//!
//! Stages run strictly one after another and the first failure ends the run.
//! Nothing is retried and no stage is re-entered:
//!
//! ```text
//! Idle → Authenticating → Resolving → Fetching → Paired → Done
//!             ↓               ↓
//!        Err(Auth)      Ok(NotFound)
//! ```

use crate::{
    error::PipelineError,
    spotify::SpotifyApi,
    types::{Credentials, TopTracksView},
    utils,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Idle,
    Authenticating,
    Resolving,
    Fetching,
    Paired,
    Done,
}

/// Result of a lookup that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Found(TopTracksView),
    /// The search came back empty. `query` is the name as the user typed it.
    NotFound { query: String },
}

/// Runs a full lookup for `query`.
///
/// # Errors
///
/// - [`PipelineError::EmptyQuery`] if `query` is blank; nothing is requested
/// - [`PipelineError::Auth`] if no token could be obtained
/// - [`PipelineError::Transport`] if the search or top-tracks call failed
pub async fn run<A>(
    api: &A,
    credentials: &Credentials,
    query: &str,
) -> Result<Outcome, PipelineError>
where
    A: SpotifyApi + ?Sized,
{
    run_with(api, credentials, query, |_| {}).await
}

/// Like [`run`], calling `on_stage` every time the pipeline enters a stage.
pub async fn run_with<A, F>(
    api: &A,
    credentials: &Credentials,
    query: &str,
    mut on_stage: F,
) -> Result<Outcome, PipelineError>
where
    A: SpotifyApi + ?Sized,
    F: FnMut(Stage),
{
    on_stage(Stage::Idle);
    if query.trim().is_empty() {
        return Err(PipelineError::EmptyQuery);
    }

    on_stage(Stage::Authenticating);
    let token = api.authenticate(credentials).await?;

    on_stage(Stage::Resolving);
    let artist = match api.resolve_artist(query, &token).await? {
        Some(artist) => artist,
        None => {
            log::debug!("no artist matches '{}'", query);
            return Ok(Outcome::NotFound {
                query: query.to_string(),
            });
        }
    };
    log::debug!("'{}' resolved to {} ({})", query, artist.name, artist.id);

    on_stage(Stage::Fetching);
    let tracks = api.fetch_top_tracks(&artist.id, &token).await?;

    on_stage(Stage::Paired);
    let view = TopTracksView {
        artist_name: artist.name,
        artist_popularity: artist.popularity,
        pairs: utils::pair_up(&tracks),
    };

    on_stage(Stage::Done);
    Ok(Outcome::Found(view))
}
