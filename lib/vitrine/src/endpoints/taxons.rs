//! Taxonomy endpoints.

use vitrine_core::query::Params;
use vitrine_core::{HttpClient, Result, Token};

use crate::Storefront;
use crate::document::{Document, ListDocument};
use crate::routes;

/// Taxonomy endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Taxons<'a, C> {
    pub(crate) storefront: &'a Storefront<C>,
}

impl<C: HttpClient> Taxons<'_, C> {
    /// Lists taxons.
    pub async fn list(&self, token: &Token, params: &Params) -> Result<ListDocument> {
        self.storefront
            .get_json(&routes::taxons_path(), token, params)
            .await
    }

    /// Shows a single taxon by id or permalink.
    pub async fn show(&self, token: &Token, id: &str, params: &Params) -> Result<Document> {
        self.storefront
            .get_json(&routes::taxon_path(id), token, params)
            .await
    }
}
