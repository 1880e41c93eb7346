//! Authenticated HTTP transport for the Strava API.

use anyhow::Context;
use reqwest::{
    Client,
    header::{AUTHORIZATION, HeaderMap, HeaderValue},
};

/// Build a [Client] sending `Authorization: Bearer <token>` on every request.
///
/// The header is flagged as sensitive so it never shows up in debug output.
///
/// # Errors
///
/// Fails when the token is empty or contains characters not allowed in an
/// HTTP header, or when the TLS backend cannot be initialized.
pub fn bearer_client(access_token: &str) -> anyhow::Result<Client> {
    if access_token.trim().is_empty() {
        anyhow::bail!("access token is empty");
    }

    let mut authorization = HeaderValue::from_str(&format!("Bearer {}", access_token))
        .context("access token is not a valid header value")?;
    authorization.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, authorization);

    Client::builder()
        .default_headers(headers)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("failed to build http client")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_client_rejects_empty_token() {
        assert!(bearer_client("").is_err());
        assert!(bearer_client("   ").is_err());
    }

    #[test]
    fn test_bearer_client_rejects_invalid_header_value() {
        assert!(bearer_client("abc\ndef").is_err());
    }

    #[tokio::test]
    async fn test_bearer_client_sends_token() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/athlete")
            .match_header("authorization", "Bearer secret-token")
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let client = bearer_client("secret-token").unwrap();
        let response = client
            .get(format!("{}/athlete", server.url()))
            .send()
            .await
            .unwrap();

        assert!(response.status().is_success());
        mock.assert_async().await;
    }
}
