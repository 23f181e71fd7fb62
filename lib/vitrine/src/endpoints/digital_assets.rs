//! Digital asset download endpoints.

use bytes::Bytes;
use vitrine_core::query::Params;
use vitrine_core::{HttpClient, Result, Token};

use crate::Storefront;
use crate::routes;

/// Digital asset download endpoints.
#[derive(Debug, Clone, Copy)]
pub struct DigitalAssets<'a, C> {
    pub(crate) storefront: &'a Storefront<C>,
}

impl<C: HttpClient> DigitalAssets<'_, C> {
    /// Downloads a purchased digital asset as raw bytes.
    ///
    /// The asset token comes from the digital link on a completed order's
    /// line items.
    pub async fn download(&self, token: &Token, asset_token: &str) -> Result<Bytes> {
        self.storefront
            .get_bytes(
                &routes::digital_asset_download_path(asset_token),
                token,
                &Params::new(),
            )
            .await
    }
}
