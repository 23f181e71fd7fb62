//! Country endpoints.

use vitrine_core::query::Params;
use vitrine_core::{HttpClient, Result, Token};

use crate::Storefront;
use crate::document::{Document, ListDocument};
use crate::routes;

/// Country endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Countries<'a, C> {
    pub(crate) storefront: &'a Storefront<C>,
}

impl<C: HttpClient> Countries<'_, C> {
    /// Lists all countries the store ships to.
    pub async fn list(&self, token: &Token, params: &Params) -> Result<ListDocument> {
        self.storefront
            .get_json(&routes::countries_path(), token, params)
            .await
    }

    /// Shows a country by its ISO code.
    pub async fn show(&self, token: &Token, iso: &str, params: &Params) -> Result<Document> {
        self.storefront
            .get_json(&routes::country_path(iso), token, params)
            .await
    }

    /// Shows the store's default country.
    pub async fn default(&self, token: &Token, params: &Params) -> Result<Document> {
        self.storefront
            .get_json(&routes::default_country_path(), token, params)
            .await
    }
}
