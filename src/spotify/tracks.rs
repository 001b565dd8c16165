use reqwest::Client;

use crate::{
    error::TransportError,
    spotify::get_json,
    types::{AccessToken, TopTracksResponse, Track},
};

/// Retrieves an artist's top tracks.
///
/// The tracks keep the order the service returns them in. An empty list is a
/// valid answer for artists without top tracks.
///
/// # API Endpoint
///
/// `GET {api}/artists/{id}/top-tracks`
pub async fn get_top_tracks(
    http: &Client,
    api_url: &str,
    artist_id: &str,
    token: &AccessToken,
) -> Result<Vec<Track>, TransportError> {
    let url = format!("{uri}/artists/{id}/top-tracks", uri = api_url, id = artist_id);
    let res: TopTracksResponse = get_json(http, &url, &[], token).await?;

    Ok(res.tracks.into_iter().map(Track::from).collect())
}
