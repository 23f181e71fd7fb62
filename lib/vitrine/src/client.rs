//! The storefront client facade.
//!
//! [`Storefront`] combines a transport ([`HttpClient`]) with a [`Config`]
//! and exposes one accessor per endpoint group. All request assembly
//! funnels through a single dispatch path: route + parameters + token in,
//! decoded document (or typed error) out.

use bytes::Bytes;
use http::Method;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;
use vitrine_core::query::Params;
use vitrine_core::{Error, HttpClient, Request, Response, Result, Token};

use crate::config::Config;
use crate::document::NoContent;
use crate::endpoints::{
    Account, Authentication, Cart, Checkout, Countries, DigitalAssets, Menus, Order, Pages,
    Products, Taxons, Wishlists,
};

/// Entry point to the storefront API.
///
/// # Example
///
/// ```ignore
/// let storefront = Storefront::new(http, "https://shop.example.com")?;
/// let products = storefront
///     .products()
///     .list(&Token::default(), &Params::new().insert("page", 1))
///     .await?;
/// ```
#[derive(Debug, Clone)]
pub struct Storefront<C> {
    client: C,
    config: Config,
}

impl<C> Storefront<C> {
    /// Creates a client for the store at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed.
    pub fn new(client: C, base_url: impl AsRef<str>) -> Result<Self> {
        let base_url = Url::parse(base_url.as_ref()).map_err(Error::InvalidUrl)?;
        Ok(Self::with_config(client, Config::new(base_url)))
    }

    /// Creates a client from a full [`Config`].
    #[must_use]
    pub const fn with_config(client: C, config: Config) -> Self {
        Self { client, config }
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// The underlying transport.
    #[must_use]
    pub const fn inner(&self) -> &C {
        &self.client
    }

    /// Account profile, orders, and address book.
    #[must_use]
    pub const fn account(&self) -> Account<'_, C> {
        Account { storefront: self }
    }

    /// OAuth token endpoints.
    #[must_use]
    pub const fn authentication(&self) -> Authentication<'_, C> {
        Authentication { storefront: self }
    }

    /// The current cart.
    #[must_use]
    pub const fn cart(&self) -> Cart<'_, C> {
        Cart { storefront: self }
    }

    /// Checkout state machine.
    #[must_use]
    pub const fn checkout(&self) -> Checkout<'_, C> {
        Checkout { storefront: self }
    }

    /// Shippable countries.
    #[must_use]
    pub const fn countries(&self) -> Countries<'_, C> {
        Countries { storefront: self }
    }

    /// Purchased digital asset downloads.
    #[must_use]
    pub const fn digital_assets(&self) -> DigitalAssets<'_, C> {
        DigitalAssets { storefront: self }
    }

    /// Navigation menus.
    #[must_use]
    pub const fn menus(&self) -> Menus<'_, C> {
        Menus { storefront: self }
    }

    /// Guest order status lookup.
    #[must_use]
    pub const fn order(&self) -> Order<'_, C> {
        Order { storefront: self }
    }

    /// CMS pages.
    #[must_use]
    pub const fn pages(&self) -> Pages<'_, C> {
        Pages { storefront: self }
    }

    /// Product catalog.
    #[must_use]
    pub const fn products(&self) -> Products<'_, C> {
        Products { storefront: self }
    }

    /// Taxonomy tree.
    #[must_use]
    pub const fn taxons(&self) -> Taxons<'_, C> {
        Taxons { storefront: self }
    }

    /// Wishlists and wished items.
    #[must_use]
    pub const fn wishlists(&self) -> Wishlists<'_, C> {
        Wishlists { storefront: self }
    }
}

impl<C: HttpClient> Storefront<C> {
    fn url_for(&self, path: &str) -> Result<Url> {
        let base = self.config.base_url().as_str().trim_end_matches('/');
        Url::parse(&format!("{base}/{path}")).map_err(Error::InvalidUrl)
    }

    /// One dispatch path for every endpoint: builds the request, logs it,
    /// executes it, and turns non-2xx responses into [`Error::Http`] with
    /// the body preserved for [`Error::decode_body`].
    pub(crate) async fn dispatch(
        &self,
        method: Method,
        path: &str,
        token: &Token,
        params: Option<&Params>,
        body: Option<Bytes>,
    ) -> Result<Response<Bytes>> {
        let url = self.url_for(path)?;
        let mut builder = Request::builder(method, url).token(token);
        if let Some(params) = params {
            builder = builder.params(&self.config.merge_defaults(params));
        }
        if let Some(body) = body {
            builder = builder
                .header("Content-Type", "application/json")
                .body(body);
        }
        let request = builder.build();

        debug!(method = %request.method(), url = %request.url(), "storefront request");

        let response = self.client.execute(request).await?;
        if response.is_success() {
            debug!(status = %response.status(), "storefront response");
            return Ok(response);
        }

        let (status, _, body) = response.into_parts();
        warn!(status = %status, "storefront request failed");
        let message = status.canonical_reason().unwrap_or("unknown status");
        if body.is_empty() {
            Err(Error::http(status.as_u16(), message))
        } else {
            Err(Error::http_with_body(status.as_u16(), message, body))
        }
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        token: &Token,
        params: &Params,
    ) -> Result<T> {
        self.dispatch(Method::GET, path, token, Some(params), None)
            .await?
            .json()
    }

    pub(crate) async fn get_bytes(
        &self,
        path: &str,
        token: &Token,
        params: &Params,
    ) -> Result<Bytes> {
        self.dispatch(Method::GET, path, token, Some(params), None)
            .await
            .map(Response::into_body)
    }

    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        token: &Token,
        body: Option<Bytes>,
    ) -> Result<T> {
        self.dispatch(method, path, token, None, body).await?.json()
    }

    pub(crate) async fn send_no_content(
        &self,
        method: Method,
        path: &str,
        token: &Token,
        body: Option<Bytes>,
    ) -> Result<NoContent> {
        self.dispatch(method, path, token, None, body)
            .await
            .map(|_| NoContent)
    }
}
