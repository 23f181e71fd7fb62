//! Typed client for JSON:API commerce storefronts.
//!
//! The SDK builds requests — routes, bracket-encoded query strings
//! (`filter[name]=mug`, `ids[]=1&ids[]=2`), auth headers, JSON bodies —
//! and hands them to an [`HttpClient`] transport supplied by the
//! application. Responses come back as typed JSON:API documents.
//!
//! # Example
//!
//! ```ignore
//! use vitrine::prelude::*;
//!
//! let storefront = Storefront::new(http, "https://shop.example.com")?;
//!
//! let grant = storefront.authentication().get_token("a@example.com", "secret").await?;
//! let token = Token::bearer(grant.access_token);
//!
//! let mugs = storefront
//!     .products()
//!     .list(&token, &Params::new()
//!         .insert("filter", Params::new().insert("name", "mug"))
//!         .insert("include", "images"))
//!     .await?;
//! ```

mod client;
mod config;
pub mod document;
pub mod endpoints;
pub mod prelude;
mod routes;

pub use client::Storefront;
pub use config::Config;

// Re-export core types
pub use vitrine_core::{
    ContentType, Error, HttpClient, Method, ORDER_TOKEN_HEADER, Params, Request, RequestBuilder,
    Response, Result, StatusCode, Token, Value, from_json, header, query, to_json,
    to_query_string,
};

// Re-export url for downstream convenience
pub use url;
