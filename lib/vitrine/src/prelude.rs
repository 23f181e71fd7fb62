//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions
//! for easy glob importing:
//!
//! ```ignore
//! use vitrine::prelude::*;
//! ```

pub use crate::document::{Document, ListDocument, NoContent, Resource};
pub use crate::{
    Config, Error, HttpClient, Method, Params, Request, Response, Result, StatusCode, Storefront,
    Token, Value, to_query_string,
};
pub use serde::{Deserialize, Serialize};
