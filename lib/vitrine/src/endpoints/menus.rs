//! Navigation menu endpoints.

use vitrine_core::query::Params;
use vitrine_core::{HttpClient, Result, Token};

use crate::Storefront;
use crate::document::{Document, ListDocument};
use crate::routes;

/// Navigation menu endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Menus<'a, C> {
    pub(crate) storefront: &'a Storefront<C>,
}

impl<C: HttpClient> Menus<'_, C> {
    /// Lists menus, filterable by `filter[location]` and `locale`.
    pub async fn list(&self, token: &Token, params: &Params) -> Result<ListDocument> {
        self.storefront
            .get_json(&routes::menus_path(), token, params)
            .await
    }

    /// Shows a single menu.
    pub async fn show(&self, token: &Token, id: &str, params: &Params) -> Result<Document> {
        self.storefront
            .get_json(&routes::menu_path(id), token, params)
            .await
    }
}
