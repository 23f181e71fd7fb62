//! Guest order status endpoints.

use vitrine_core::query::Params;
use vitrine_core::{HttpClient, Result, Token};

use crate::Storefront;
use crate::document::Document;
use crate::routes;

/// Guest order status endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Order<'a, C> {
    pub(crate) storefront: &'a Storefront<C>,
}

impl<C: HttpClient> Order<'_, C> {
    /// Looks up an order by number.
    ///
    /// Requires the order token issued at completion
    /// ([`Token::order`]); a bearer token alone will not do for guest
    /// orders.
    pub async fn status(
        &self,
        token: &Token,
        order_number: &str,
        params: &Params,
    ) -> Result<Document> {
        self.storefront
            .get_json(&routes::order_status_path(order_number), token, params)
            .await
    }
}
