//! Account endpoints.
//!
//! Registration, profile, password recovery, completed orders, stored
//! credit cards, and the address book.

use http::Method;
use serde::{Deserialize, Serialize};
use vitrine_core::query::Params;
use vitrine_core::{HttpClient, Result, Token, to_json};

use crate::Storefront;
use crate::document::{Document, ListDocument, NoContent};
use crate::routes;

/// Confirmation state returned by [`Account::confirm`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AccountConfirmation {
    /// Resulting account state.
    pub state: String,
}

/// Envelope around [`AccountConfirmation`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AccountConfirmationDocument {
    /// The confirmation outcome.
    pub data: AccountConfirmation,
}

/// Account endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Account<'a, C> {
    pub(crate) storefront: &'a Storefront<C>,
}

impl<C: HttpClient> Account<'_, C> {
    /// Shows the signed-in user's account.
    pub async fn info(&self, token: &Token, params: &Params) -> Result<Document> {
        self.storefront
            .get_json(&routes::account_path(), token, params)
            .await
    }

    /// Registers a new account (`user` payload with email and password).
    pub async fn create<B: Serialize + Sync>(&self, token: &Token, body: &B) -> Result<Document> {
        let body = to_json(body)?;
        self.storefront
            .send_json(Method::POST, &routes::account_path(), token, Some(body))
            .await
    }

    /// Updates the signed-in user's account.
    pub async fn update<B: Serialize + Sync>(&self, token: &Token, body: &B) -> Result<Document> {
        let body = to_json(body)?;
        self.storefront
            .send_json(Method::PATCH, &routes::account_path(), token, Some(body))
            .await
    }

    /// Confirms a freshly registered account from the emailed token.
    pub async fn confirm(&self, confirmation_token: &str) -> Result<AccountConfirmationDocument> {
        self.storefront
            .get_json(
                &routes::account_confirm_path(confirmation_token),
                &Token::default(),
                &Params::new(),
            )
            .await
    }

    /// Requests a password-reset email (`user` payload with email).
    pub async fn forgot_password<B: Serialize + Sync>(&self, body: &B) -> Result<NoContent> {
        let body = to_json(body)?;
        self.storefront
            .send_no_content(
                Method::POST,
                &routes::forgot_password_path(),
                &Token::default(),
                Some(body),
            )
            .await
    }

    /// Sets a new password from an emailed reset token.
    pub async fn reset_password<B: Serialize + Sync>(
        &self,
        reset_token: &str,
        body: &B,
    ) -> Result<NoContent> {
        let body = to_json(body)?;
        self.storefront
            .send_no_content(
                Method::PATCH,
                &routes::reset_password_path(reset_token),
                &Token::default(),
                Some(body),
            )
            .await
    }

    /// Lists the user's stored credit cards.
    pub async fn credit_cards(&self, token: &Token, params: &Params) -> Result<ListDocument> {
        self.storefront
            .get_json(&routes::account_credit_cards_path(), token, params)
            .await
    }

    /// Shows the user's default credit card.
    pub async fn default_credit_card(&self, token: &Token, params: &Params) -> Result<Document> {
        self.storefront
            .get_json(&routes::account_default_credit_card_path(), token, params)
            .await
    }

    /// Lists the user's completed orders.
    pub async fn completed_orders(&self, token: &Token, params: &Params) -> Result<ListDocument> {
        self.storefront
            .get_json(&routes::account_completed_orders_path(), token, params)
            .await
    }

    /// Shows one completed order by number.
    pub async fn completed_order(
        &self,
        token: &Token,
        order_number: &str,
        params: &Params,
    ) -> Result<Document> {
        self.storefront
            .get_json(
                &routes::account_completed_order_path(order_number),
                token,
                params,
            )
            .await
    }

    /// Lists the user's addresses.
    pub async fn addresses(&self, token: &Token, params: &Params) -> Result<ListDocument> {
        self.storefront
            .get_json(&routes::account_addresses_path(), token, params)
            .await
    }

    /// Adds an address to the address book.
    pub async fn create_address<B: Serialize + Sync>(
        &self,
        token: &Token,
        body: &B,
    ) -> Result<Document> {
        let body = to_json(body)?;
        self.storefront
            .send_json(
                Method::POST,
                &routes::account_addresses_path(),
                token,
                Some(body),
            )
            .await
    }

    /// Updates an address.
    pub async fn update_address<B: Serialize + Sync>(
        &self,
        token: &Token,
        address_id: &str,
        body: &B,
    ) -> Result<Document> {
        let body = to_json(body)?;
        self.storefront
            .send_json(
                Method::PATCH,
                &routes::account_address_path(address_id),
                token,
                Some(body),
            )
            .await
    }

    /// Removes an address.
    pub async fn remove_address(&self, token: &Token, address_id: &str) -> Result<NoContent> {
        self.storefront
            .send_no_content(
                Method::DELETE,
                &routes::account_address_path(address_id),
                token,
                None,
            )
            .await
    }
}
