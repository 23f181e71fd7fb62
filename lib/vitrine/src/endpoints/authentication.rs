//! OAuth token endpoints.
//!
//! The storefront issues bearer tokens through a standard OAuth password
//! grant. The grant endpoints live outside the `api/v2/storefront` prefix
//! and never take an existing token.

use http::Method;
use serde::{Deserialize, Serialize};
use vitrine_core::{HttpClient, Result, Token, to_json};

use crate::Storefront;
use crate::document::NoContent;
use crate::routes;

/// A granted OAuth token pair.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OauthToken {
    /// The bearer token to use with [`Token::bearer`].
    pub access_token: String,
    /// Token type, always `Bearer`.
    pub token_type: String,
    /// Seconds until `access_token` expires.
    pub expires_in: u64,
    /// Token accepted by [`Authentication::refresh_token`].
    pub refresh_token: String,
    /// Grant creation time, seconds since the epoch.
    pub created_at: u64,
}

#[derive(Serialize)]
struct PasswordGrant<'a> {
    grant_type: &'static str,
    username: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RefreshGrant<'a> {
    grant_type: &'static str,
    refresh_token: &'a str,
}

#[derive(Serialize)]
struct Revocation<'a> {
    token: &'a str,
}

/// OAuth token endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Authentication<'a, C> {
    pub(crate) storefront: &'a Storefront<C>,
}

impl<C: HttpClient> Authentication<'_, C> {
    /// Exchanges user credentials for a bearer token (password grant).
    pub async fn get_token(&self, username: &str, password: &str) -> Result<OauthToken> {
        let body = to_json(&PasswordGrant {
            grant_type: "password",
            username,
            password,
        })?;
        self.storefront
            .send_json(
                Method::POST,
                &routes::oauth_token_path(),
                &Token::default(),
                Some(body),
            )
            .await
    }

    /// Exchanges a refresh token for a fresh token pair.
    pub async fn refresh_token(&self, refresh_token: &str) -> Result<OauthToken> {
        let body = to_json(&RefreshGrant {
            grant_type: "refresh_token",
            refresh_token,
        })?;
        self.storefront
            .send_json(
                Method::POST,
                &routes::oauth_token_path(),
                &Token::default(),
                Some(body),
            )
            .await
    }

    /// Revokes an access token.
    pub async fn revoke_token(&self, token: &str) -> Result<NoContent> {
        let body = to_json(&Revocation { token })?;
        self.storefront
            .send_no_content(
                Method::POST,
                &routes::oauth_revoke_path(),
                &Token::default(),
                Some(body),
            )
            .await
    }
}
