//! CMS page endpoints.

use vitrine_core::query::Params;
use vitrine_core::{HttpClient, Result, Token};

use crate::Storefront;
use crate::document::{Document, ListDocument};
use crate::routes;

/// CMS page endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Pages<'a, C> {
    pub(crate) storefront: &'a Storefront<C>,
}

impl<C: HttpClient> Pages<'_, C> {
    /// Lists pages.
    pub async fn list(&self, token: &Token, params: &Params) -> Result<ListDocument> {
        self.storefront
            .get_json(&routes::pages_path(), token, params)
            .await
    }

    /// Shows a single page by slug.
    pub async fn show(&self, token: &Token, slug: &str, params: &Params) -> Result<Document> {
        self.storefront
            .get_json(&routes::page_path(slug), token, params)
            .await
    }
}
