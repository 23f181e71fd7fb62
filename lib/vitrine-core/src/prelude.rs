//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions
//! for easy glob importing:
//!
//! ```ignore
//! use vitrine_core::prelude::*;
//! ```

pub use crate::{
    ContentType, Error, HttpClient, Method, Params, Request, RequestBuilder, Response, Result,
    StatusCode, Token, Value, from_json, to_json, to_query_string,
};
