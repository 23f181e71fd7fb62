//! HTTP transport trait.
//!
//! The SDK never talks to the network itself: every endpoint builds a
//! [`Request`](crate::Request) and hands it to an [`HttpClient`]
//! implementation supplied by the application (hyper, reqwest, a test
//! double, ...). Implementations own connection pooling, TLS, timeouts,
//! and proxies; the SDK owns URLs, query encoding, auth headers, and
//! bodies.

use std::future::Future;

use bytes::Bytes;

use crate::{Request, Response, Result};

/// Transport collaborator executing HTTP requests.
pub trait HttpClient: Send + Sync {
    /// Execute an HTTP request and return the response.
    ///
    /// Implementations must return `Ok` for any response the server
    /// produced, whatever its status code; `Err` is reserved for transport
    /// failures:
    /// - Network errors
    /// - TLS errors
    /// - Timeouts
    fn execute(
        &self,
        request: Request<Bytes>,
    ) -> impl Future<Output = Result<Response<Bytes>>> + Send;
}
