//! Core types for the vitrine storefront API client.
//!
//! This crate provides the foundational pieces used by `vitrine`:
//! - [`query`] - Bracket-notation query-string serialization (the heart of
//!   the SDK: `filter[name]=x`, `ids[]=1&ids[]=2`)
//! - [`Request`] and [`RequestBuilder`] - HTTP request types
//! - [`Response`] - HTTP response type
//! - [`Error`] and [`Result`] - Error handling
//! - [`HttpClient`] - Transport trait the application implements
//! - [`Token`] - Bearer/order credentials
//! - [`Method`], [`StatusCode`], [`header`] - re-exported from the `http`
//!   crate

mod body;
mod client;
mod error;
pub mod prelude;
pub mod query;
mod request;
mod response;
mod token;

pub use body::{ContentType, from_json, to_json};
pub use client::HttpClient;
pub use error::{Error, Result};
pub use query::{Params, Value, to_query_string};
pub use request::{Request, RequestBuilder};
pub use response::Response;
pub use token::{ORDER_TOKEN_HEADER, Token};

// Re-export http crate types for methods, status codes, and headers
pub use http::{Method, StatusCode, header};
