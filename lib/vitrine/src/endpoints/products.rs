//! Product catalog endpoints.

use vitrine_core::query::Params;
use vitrine_core::{HttpClient, Result, Token};

use crate::Storefront;
use crate::document::{Document, ListDocument};
use crate::routes;

/// Product catalog endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Products<'a, C> {
    pub(crate) storefront: &'a Storefront<C>,
}

impl<C: HttpClient> Products<'_, C> {
    /// Lists products visible in the current store.
    ///
    /// Supports `filter[...]`, `sort`, `page`/`per_page`, and `include`
    /// parameters; all of them travel through the bracket serializer.
    pub async fn list(&self, token: &Token, params: &Params) -> Result<ListDocument> {
        self.storefront
            .get_json(&routes::products_path(), token, params)
            .await
    }

    /// Shows a single product by id or slug.
    pub async fn show(&self, token: &Token, id: &str, params: &Params) -> Result<Document> {
        self.storefront
            .get_json(&routes::product_path(id), token, params)
            .await
    }
}
