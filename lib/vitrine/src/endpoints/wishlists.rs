//! Wishlist endpoints.
//!
//! Wishlists belong to signed-in users; every call here wants a bearer
//! token. Individual wishlists are addressed by their share token, not a
//! numeric id.

use http::Method;
use serde::Serialize;
use vitrine_core::query::Params;
use vitrine_core::{HttpClient, Result, Token, to_json};

use crate::Storefront;
use crate::document::{Document, ListDocument, NoContent};
use crate::routes;

/// Wishlist endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Wishlists<'a, C> {
    pub(crate) storefront: &'a Storefront<C>,
}

impl<C: HttpClient> Wishlists<'_, C> {
    /// Lists the user's wishlists.
    pub async fn list(&self, token: &Token, params: &Params) -> Result<ListDocument> {
        self.storefront
            .get_json(&routes::wishlists_path(), token, params)
            .await
    }

    /// Shows a wishlist by its share token.
    pub async fn show(
        &self,
        token: &Token,
        wishlist_token: &str,
        params: &Params,
    ) -> Result<Document> {
        self.storefront
            .get_json(&routes::wishlist_path(wishlist_token), token, params)
            .await
    }

    /// Shows the user's default wishlist, creating it on first access.
    pub async fn default(&self, token: &Token, params: &Params) -> Result<Document> {
        self.storefront
            .get_json(&routes::default_wishlist_path(), token, params)
            .await
    }

    /// Creates a wishlist (`name`, optional `is_private`/`is_default`).
    pub async fn create<B: Serialize + Sync>(&self, token: &Token, body: &B) -> Result<Document> {
        let body = to_json(body)?;
        self.storefront
            .send_json(Method::POST, &routes::wishlists_path(), token, Some(body))
            .await
    }

    /// Updates a wishlist's name or visibility.
    pub async fn update<B: Serialize + Sync>(
        &self,
        token: &Token,
        wishlist_token: &str,
        body: &B,
    ) -> Result<Document> {
        let body = to_json(body)?;
        self.storefront
            .send_json(
                Method::PATCH,
                &routes::wishlist_path(wishlist_token),
                token,
                Some(body),
            )
            .await
    }

    /// Deletes a wishlist.
    pub async fn remove(&self, token: &Token, wishlist_token: &str) -> Result<NoContent> {
        self.storefront
            .send_no_content(
                Method::DELETE,
                &routes::wishlist_path(wishlist_token),
                token,
                None,
            )
            .await
    }

    /// Adds a variant to a wishlist (`variant_id`, `quantity`).
    pub async fn add_wished_item<B: Serialize + Sync>(
        &self,
        token: &Token,
        wishlist_token: &str,
        body: &B,
    ) -> Result<Document> {
        let body = to_json(body)?;
        self.storefront
            .send_json(
                Method::POST,
                &routes::wishlist_add_item_path(wishlist_token),
                token,
                Some(body),
            )
            .await
    }

    /// Changes a wished item's quantity.
    pub async fn update_wished_item<B: Serialize + Sync>(
        &self,
        token: &Token,
        wishlist_token: &str,
        item_id: &str,
        body: &B,
    ) -> Result<Document> {
        let body = to_json(body)?;
        self.storefront
            .send_json(
                Method::PATCH,
                &routes::wishlist_set_item_quantity_path(wishlist_token, item_id),
                token,
                Some(body),
            )
            .await
    }

    /// Removes an item from a wishlist; returns the removed item.
    pub async fn remove_wished_item(
        &self,
        token: &Token,
        wishlist_token: &str,
        item_id: &str,
    ) -> Result<Document> {
        self.storefront
            .send_json(
                Method::DELETE,
                &routes::wishlist_remove_item_path(wishlist_token, item_id),
                token,
                None,
            )
            .await
    }
}
