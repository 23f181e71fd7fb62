//! Checkout endpoints.
//!
//! Checkout walks the order through its state machine (`address` →
//! `delivery` → `payment` → `confirm` → `complete`). Update calls take a
//! serializable body shaped like the storefront's `order` payload.

use http::Method;
use serde::Serialize;
use vitrine_core::query::Params;
use vitrine_core::{HttpClient, Result, Token, to_json};

use crate::Storefront;
use crate::document::{Document, ListDocument};
use crate::routes;

/// Checkout endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Checkout<'a, C> {
    pub(crate) storefront: &'a Storefront<C>,
}

impl<C: HttpClient> Checkout<'_, C> {
    /// Advances the order to the next checkout state.
    pub async fn order_next(&self, token: &Token) -> Result<Document> {
        self.storefront
            .send_json(Method::PATCH, &routes::checkout_next_path(), token, None)
            .await
    }

    /// Updates checkout data (addresses, shipments, payments).
    pub async fn order_update<B: Serialize + Sync>(
        &self,
        token: &Token,
        body: &B,
    ) -> Result<Document> {
        let body = to_json(body)?;
        self.storefront
            .send_json(Method::PATCH, &routes::checkout_path(), token, Some(body))
            .await
    }

    /// Advances the order as far as it can go without further input.
    pub async fn advance(&self, token: &Token) -> Result<Document> {
        self.storefront
            .send_json(Method::PATCH, &routes::checkout_advance_path(), token, None)
            .await
    }

    /// Completes the checkout.
    pub async fn complete(&self, token: &Token) -> Result<Document> {
        self.storefront
            .send_json(Method::PATCH, &routes::checkout_complete_path(), token, None)
            .await
    }

    /// Applies store credit to the order (`amount` in the body).
    pub async fn add_store_credits<B: Serialize + Sync>(
        &self,
        token: &Token,
        body: &B,
    ) -> Result<Document> {
        let body = to_json(body)?;
        self.storefront
            .send_json(
                Method::POST,
                &routes::checkout_add_store_credit_path(),
                token,
                Some(body),
            )
            .await
    }

    /// Removes applied store credit.
    pub async fn remove_store_credits(&self, token: &Token) -> Result<Document> {
        self.storefront
            .send_json(
                Method::POST,
                &routes::checkout_remove_store_credit_path(),
                token,
                None,
            )
            .await
    }

    /// Lists payment methods available to the order.
    pub async fn payment_methods(&self, token: &Token) -> Result<ListDocument> {
        self.storefront
            .get_json(
                &routes::checkout_payment_methods_path(),
                token,
                &Params::new(),
            )
            .await
    }

    /// Lists shipping rates for the order's shipments.
    pub async fn shipping_rates(&self, token: &Token, params: &Params) -> Result<ListDocument> {
        self.storefront
            .get_json(&routes::checkout_shipping_rates_path(), token, params)
            .await
    }

    /// Selects a shipping method (`shipping_method_id` in the body).
    pub async fn select_shipping_method<B: Serialize + Sync>(
        &self,
        token: &Token,
        body: &B,
    ) -> Result<Document> {
        let body = to_json(body)?;
        self.storefront
            .send_json(
                Method::PATCH,
                &routes::checkout_select_shipping_method_path(),
                token,
                Some(body),
            )
            .await
    }

    /// Creates a payment for the order (`payment_method_id` plus
    /// source attributes in the body).
    pub async fn add_payment<B: Serialize + Sync>(
        &self,
        token: &Token,
        body: &B,
    ) -> Result<Document> {
        let body = to_json(body)?;
        self.storefront
            .send_json(
                Method::POST,
                &routes::checkout_add_payment_path(),
                token,
                Some(body),
            )
            .await
    }
}
