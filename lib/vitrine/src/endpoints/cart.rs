//! Cart endpoints.
//!
//! A cart belongs either to a signed-in user (bearer token) or to a guest
//! (order token handed out by [`Cart::create`]); every method takes
//! whichever [`Token`] identifies the cart.

use http::Method;
use serde::Serialize;
use vitrine_core::query::Params;
use vitrine_core::{HttpClient, Result, Token, to_json};

use crate::Storefront;
use crate::document::{Document, ListDocument, NoContent};
use crate::routes;

/// Cart endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Cart<'a, C> {
    pub(crate) storefront: &'a Storefront<C>,
}

impl<C: HttpClient> Cart<'_, C> {
    /// Shows the current cart.
    pub async fn show(&self, token: &Token, params: &Params) -> Result<Document> {
        self.storefront
            .get_json(&routes::cart_path(), token, params)
            .await
    }

    /// Creates a cart.
    ///
    /// For anonymous callers the returned order's `token` attribute is the
    /// guest order token for all further cart calls.
    pub async fn create(&self, token: &Token) -> Result<Document> {
        self.storefront
            .send_json(Method::POST, &routes::cart_path(), token, None)
            .await
    }

    /// Adds a variant to the cart. The body carries `variant_id`,
    /// `quantity`, and optional `options`.
    pub async fn add_item<B: Serialize + Sync>(
        &self,
        token: &Token,
        body: &B,
    ) -> Result<Document> {
        let body = to_json(body)?;
        self.storefront
            .send_json(Method::POST, &routes::cart_add_item_path(), token, Some(body))
            .await
    }

    /// Sets a line item's quantity (`line_item_id`, `quantity`).
    pub async fn set_quantity<B: Serialize + Sync>(
        &self,
        token: &Token,
        body: &B,
    ) -> Result<Document> {
        let body = to_json(body)?;
        self.storefront
            .send_json(
                Method::PATCH,
                &routes::cart_set_quantity_path(),
                token,
                Some(body),
            )
            .await
    }

    /// Removes a line item; returns the updated cart.
    pub async fn remove_item(&self, token: &Token, line_item_id: &str) -> Result<Document> {
        self.storefront
            .send_json(
                Method::DELETE,
                &routes::cart_remove_item_path(line_item_id),
                token,
                None,
            )
            .await
    }

    /// Removes every line item; returns the emptied cart.
    pub async fn empty(&self, token: &Token) -> Result<Document> {
        self.storefront
            .send_json(Method::PATCH, &routes::cart_empty_path(), token, None)
            .await
    }

    /// Deletes the cart entirely.
    pub async fn remove(&self, token: &Token) -> Result<NoContent> {
        self.storefront
            .send_no_content(Method::DELETE, &routes::cart_path(), token, None)
            .await
    }

    /// Applies a coupon code (`coupon_code` in the body).
    pub async fn apply_coupon_code<B: Serialize + Sync>(
        &self,
        token: &Token,
        body: &B,
    ) -> Result<Document> {
        let body = to_json(body)?;
        self.storefront
            .send_json(
                Method::PATCH,
                &routes::cart_apply_coupon_code_path(),
                token,
                Some(body),
            )
            .await
    }

    /// Removes one coupon code.
    pub async fn remove_coupon_code(&self, token: &Token, coupon_code: &str) -> Result<Document> {
        self.storefront
            .send_json(
                Method::DELETE,
                &routes::cart_remove_coupon_code_path(coupon_code),
                token,
                None,
            )
            .await
    }

    /// Removes every applied coupon code.
    pub async fn remove_all_coupons(&self, token: &Token) -> Result<Document> {
        self.storefront
            .send_json(
                Method::DELETE,
                &routes::cart_remove_all_coupons_path(),
                token,
                None,
            )
            .await
    }

    /// Estimates shipping rates for the cart, e.g. with
    /// `country_iso` in `params`.
    pub async fn estimate_shipping_rates(
        &self,
        token: &Token,
        params: &Params,
    ) -> Result<ListDocument> {
        self.storefront
            .get_json(&routes::cart_estimate_shipping_rates_path(), token, params)
            .await
    }

    /// Associates a guest cart with the signed-in user.
    ///
    /// Takes the user's bearer token; the guest cart is named by
    /// `guest_order_token` in `params`.
    pub async fn associate_guest_cart(&self, token: &Token, params: &Params) -> Result<Document> {
        self.storefront
            .dispatch(
                Method::PATCH,
                &routes::cart_associate_path(),
                token,
                Some(params),
                None,
            )
            .await?
            .json()
    }

    /// Switches the cart to another supported currency
    /// (`new_currency` in the body).
    pub async fn change_currency<B: Serialize + Sync>(
        &self,
        token: &Token,
        body: &B,
    ) -> Result<Document> {
        let body = to_json(body)?;
        self.storefront
            .send_json(
                Method::PATCH,
                &routes::cart_change_currency_path(),
                token,
                Some(body),
            )
            .await
    }
}
