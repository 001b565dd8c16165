use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::{Client, header::AUTHORIZATION};

use crate::{
    error::AuthError,
    types::{AccessToken, Credentials, TokenResponse},
};

/// Builds the `Authorization` header value for the client-credentials grant.
pub fn basic_auth_header(credentials: &Credentials) -> String {
    let pair = format!("{}:{}", credentials.client_id, credentials.client_secret);
    format!("Basic {}", STANDARD.encode(pair))
}

/// Exchanges application credentials for a bearer token.
///
/// Posts `grant_type=client_credentials` form-encoded to `token_url` with an
/// HTTP Basic header. Anything other than a 2xx carrying a non-empty
/// `access_token` is an [`AuthError`]: transport faults have no status, HTTP
/// failures carry status and reason, and malformed bodies keep the 2xx status.
///
/// # Example
///
/// ```
/// let creds = Credentials::new("client-id", "client-secret");
/// let token = request_token(&Client::new(), config::DEFAULT_TOKEN_URL, &creds).await?;
/// ```
pub async fn request_token(
    http: &Client,
    token_url: &str,
    credentials: &Credentials,
) -> Result<AccessToken, AuthError> {
    let response = http
        .post(token_url)
        .header(AUTHORIZATION, basic_auth_header(credentials))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await?;

    let status = response.status();
    log::debug!("POST {} -> {}", token_url, status);
    if !status.is_success() {
        return Err(AuthError::from_status(status));
    }

    let body = response.json::<TokenResponse>().await.map_err(|e| {
        AuthError::new(
            Some(status.as_u16()),
            format!("malformed token response: {}", e),
        )
    })?;

    if body.access_token.trim().is_empty() {
        return Err(AuthError::new(Some(status.as_u16()), "empty access token"));
    }

    Ok(AccessToken::new(body.access_token))
}
