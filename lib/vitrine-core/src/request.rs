//! HTTP request building.
//!
//! Use [`Request::builder`] to construct requests with headers, bracket-encoded
//! query parameters, and bodies.
//!
//! # Example
//!
//! ```
//! use bytes::Bytes;
//! use http::Method;
//! use vitrine_core::{Request, query::Params};
//!
//! let url = "https://shop.example.com/api/v2/storefront/products"
//!     .parse()
//!     .unwrap();
//! let request = Request::<Bytes>::builder(Method::GET, url)
//!     .header("Accept", "application/json")
//!     .params(&Params::new().insert("ids", vec![1, 2]))
//!     .build();
//!
//! assert!(request.url().as_str().ends_with("?ids%5B%5D=1&ids%5B%5D=2"));
//! ```

use std::collections::HashMap;

use bytes::Bytes;
use http::Method;

use crate::query::{self, Params};
use crate::token::{ORDER_TOKEN_HEADER, Token};

/// An HTTP request with method, URL, headers, and optional body.
#[derive(Debug, Clone)]
pub struct Request<B = Bytes> {
    method: Method,
    url: url::Url,
    headers: HashMap<String, String>,
    body: Option<B>,
}

impl<B> Request<B> {
    /// Creates a new [`RequestBuilder`].
    #[must_use]
    pub fn builder(method: Method, url: url::Url) -> RequestBuilder<B> {
        RequestBuilder::new(method, url)
    }

    /// HTTP method.
    #[must_use]
    pub const fn method(&self) -> &Method {
        &self.method
    }

    /// Request URL.
    #[must_use]
    pub fn url(&self) -> &url::Url {
        &self.url
    }

    /// Request headers.
    #[must_use]
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Mutable access to headers.
    #[must_use]
    pub fn headers_mut(&mut self) -> &mut HashMap<String, String> {
        &mut self.headers
    }

    /// Single header value by name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Request body.
    #[must_use]
    pub const fn body(&self) -> Option<&B> {
        self.body.as_ref()
    }

    /// Consume into (method, url, headers, body).
    #[must_use]
    pub fn into_parts(self) -> (Method, url::Url, HashMap<String, String>, Option<B>) {
        (self.method, self.url, self.headers, self.body)
    }
}

/// Builder for constructing [`Request`] instances.
#[derive(Debug, Clone)]
pub struct RequestBuilder<B = Bytes> {
    method: Method,
    url: url::Url,
    headers: HashMap<String, String>,
    body: Option<B>,
}

impl<B> RequestBuilder<B> {
    /// Creates a new builder.
    #[must_use]
    pub fn new(method: Method, url: url::Url) -> Self {
        Self {
            method,
            url,
            headers: HashMap::new(),
            body: None,
        }
    }

    /// Sets a header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Sets multiple headers.
    #[must_use]
    pub fn headers(mut self, headers: impl IntoIterator<Item = (String, String)>) -> Self {
        self.headers.extend(headers);
        self
    }

    /// Installs bracket-encoded query parameters on the URL.
    ///
    /// The parameter tree is flattened with [`query::to_query_string`]; an
    /// empty map leaves the URL untouched. The encoded string replaces any
    /// query already present.
    #[must_use]
    pub fn params(mut self, params: &Params) -> Self {
        let encoded = query::to_query_string(params);
        if !encoded.is_empty() {
            self.url.set_query(Some(&encoded));
        }
        self
    }

    /// Applies authentication headers from a [`Token`].
    ///
    /// A bearer token becomes `Authorization: Bearer <token>`; an order
    /// token is sent in the order-token header. Anonymous tokens add
    /// nothing.
    #[must_use]
    pub fn token(mut self, token: &Token) -> Self {
        if let Some(bearer) = token.bearer_token() {
            self.headers
                .insert("Authorization".to_string(), format!("Bearer {bearer}"));
        }
        if let Some(order) = token.order_token() {
            self.headers
                .insert(ORDER_TOKEN_HEADER.to_string(), order.to_string());
        }
        self
    }

    /// Sets the request body.
    #[must_use]
    pub fn body(mut self, body: B) -> Self {
        self.body = Some(body);
        self
    }

    /// Builds the [`Request`].
    #[must_use]
    pub fn build(self) -> Request<B> {
        Request {
            method: self.method,
            url: self.url,
            headers: self.headers,
            body: self.body,
        }
    }
}

impl RequestBuilder<Bytes> {
    /// Set a JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn json<T: serde::Serialize>(self, value: &T) -> crate::Result<Self> {
        let body = crate::to_json(value)?;
        Ok(self.header("Content-Type", "application/json").body(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn products_url() -> url::Url {
        url::Url::parse("https://shop.example.com/api/v2/storefront/products").expect("valid URL")
    }

    #[test]
    fn request_builder_basic() {
        let request = Request::<Bytes>::builder(Method::GET, products_url())
            .header("Accept", "application/json")
            .build();

        assert_eq!(request.method(), &Method::GET);
        assert_eq!(
            request.url().as_str(),
            "https://shop.example.com/api/v2/storefront/products"
        );
        assert_eq!(request.header("Accept"), Some("application/json"));
        assert!(request.body().is_none());
    }

    #[test]
    fn request_builder_with_params() {
        let params = Params::new()
            .insert("filter", Params::new().insert("name", "mug"))
            .insert("page", 2);
        let request = Request::<Bytes>::builder(Method::GET, products_url())
            .params(&params)
            .build();

        assert_eq!(
            request.url().as_str(),
            "https://shop.example.com/api/v2/storefront/products?filter%5Bname%5D=mug&page=2"
        );
    }

    #[test]
    fn empty_params_leave_url_untouched() {
        let request = Request::<Bytes>::builder(Method::GET, products_url())
            .params(&Params::new())
            .build();

        assert_eq!(request.url().query(), None);
    }

    #[test]
    fn request_builder_with_token() {
        let token = Token::bearer("abc123").with_order("xyz");
        let request = Request::<Bytes>::builder(Method::GET, products_url())
            .token(&token)
            .build();

        assert_eq!(request.header("Authorization"), Some("Bearer abc123"));
        assert_eq!(request.header(ORDER_TOKEN_HEADER), Some("xyz"));
    }

    #[test]
    fn anonymous_token_adds_no_headers() {
        let request = Request::<Bytes>::builder(Method::GET, products_url())
            .token(&Token::default())
            .build();

        assert!(request.headers().is_empty());
    }

    #[test]
    fn request_builder_with_body() {
        let body = Bytes::from(r#"{"quantity":2}"#);
        let request = Request::builder(Method::POST, products_url())
            .header("Content-Type", "application/json")
            .body(body.clone())
            .build();

        assert_eq!(request.method(), &Method::POST);
        assert_eq!(request.body(), Some(&body));
    }

    #[test]
    fn request_builder_json() {
        #[derive(serde::Serialize)]
        struct AddItem {
            variant_id: String,
        }

        let request = Request::builder(Method::POST, products_url())
            .json(&AddItem {
                variant_id: "42".to_string(),
            })
            .expect("json")
            .build();

        assert_eq!(request.header("Content-Type"), Some("application/json"));
        assert!(request.body().is_some());
    }
}
