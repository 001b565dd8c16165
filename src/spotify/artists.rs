use reqwest::Client;

use crate::{
    error::TransportError,
    spotify::get_json,
    types::{AccessToken, Artist, SearchArtistsResponse},
};

/// Searches the catalog for artists named `name` and returns the first hit.
///
/// The query string is passed through untouched and only the first page is
/// read. Ambiguous names resolve to whatever the service ranks first; there
/// is no local re-ranking.
///
/// # Returns
///
/// - `Ok(Some(artist))` - first entry of `artists.items`
/// - `Ok(None)` - the search returned no artists
/// - `Err(TransportError)` - network failure, non-2xx status or malformed body
///
/// # API Endpoint
///
/// `GET {api}/search?q={name}&type=artist`
pub async fn search_artist(
    http: &Client,
    api_url: &str,
    name: &str,
    token: &AccessToken,
) -> Result<Option<Artist>, TransportError> {
    let url = format!("{uri}/search", uri = api_url);
    let res: SearchArtistsResponse =
        get_json(http, &url, &[("q", name), ("type", "artist")], token).await?;

    log::debug!(
        "search '{}' matched {} artist(s)",
        name,
        res.artists.total.unwrap_or(res.artists.items.len() as u64)
    );

    Ok(first_artist(res))
}

pub(crate) fn first_artist(res: SearchArtistsResponse) -> Option<Artist> {
    res.artists.items.into_iter().next()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: serde_json::Value) -> SearchArtistsResponse {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn picks_first_of_many() {
        let res = parse(serde_json::json!({
            "artists": {
                "items": [
                    { "id": "a1", "name": "Daft Punk", "popularity": 82 },
                    { "id": "a2", "name": "Daft Punk Tribute", "popularity": 12 },
                    { "id": "a3", "name": "Daft", "popularity": 5 }
                ],
                "total": 3
            }
        }));

        let artist = first_artist(res).unwrap();
        assert_eq!(artist.id, "a1");
        assert_eq!(artist.name, "Daft Punk");
        assert_eq!(artist.popularity, 82);
    }

    #[test]
    fn empty_items_is_none() {
        let res = parse(serde_json::json!({ "artists": { "items": [], "total": 0 } }));
        assert_eq!(first_artist(res), None);
    }

    #[test]
    fn missing_items_is_malformed() {
        let res = serde_json::from_value::<SearchArtistsResponse>(serde_json::json!({
            "artists": { "total": 0 }
        }));
        assert!(res.is_err());
    }
}
