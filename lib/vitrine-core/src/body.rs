//! Body serialization utilities.

use bytes::Bytes;

use crate::Result;

/// Content type for request bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    /// JSON content type (`application/json`).
    Json,
    /// Binary content type (`application/octet-stream`).
    OctetStream,
}

impl ContentType {
    /// Get the MIME type string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::OctetStream => "application/octet-stream",
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Serialize a value to JSON bytes.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
///
/// # Example
///
/// ```
/// use vitrine_core::to_json;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct AddItem { variant_id: String, quantity: u32 }
///
/// let body = AddItem { variant_id: "142".to_string(), quantity: 2 };
/// let bytes = to_json(&body).expect("serialize");
/// assert_eq!(bytes.as_ref(), br#"{"variant_id":"142","quantity":2}"#);
/// ```
pub fn to_json<T: serde::Serialize>(value: &T) -> Result<Bytes> {
    serde_json::to_vec(value)
        .map(Bytes::from)
        .map_err(Into::into)
}

/// Deserialize JSON bytes to a value with path-aware error messages.
///
/// Uses `serde_path_to_error` so a failure names the exact field that did
/// not deserialize (e.g., "data.attributes.name").
///
/// # Errors
///
/// Returns an error if JSON deserialization fails.
///
/// # Example
///
/// ```
/// use vitrine_core::from_json;
/// use serde::Deserialize;
///
/// #[derive(Debug, PartialEq, Deserialize)]
/// struct Country { iso: String }
///
/// let bytes = br#"{"iso":"US"}"#;
/// let country: Country = from_json(bytes).expect("deserialize");
/// assert_eq!(country, Country { iso: "US".to_string() });
/// ```
pub fn from_json<T: serde::de::DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        crate::Error::json_deserialization(e.path().to_string(), e.inner().to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_type_as_str() {
        assert_eq!(ContentType::Json.as_str(), "application/json");
        assert_eq!(
            ContentType::OctetStream.as_str(),
            "application/octet-stream"
        );
    }

    #[test]
    fn content_type_display() {
        assert_eq!(ContentType::Json.to_string(), "application/json");
    }

    #[test]
    fn to_json_serialize() {
        #[derive(serde::Serialize)]
        struct Credentials {
            username: String,
            password: String,
        }

        let creds = Credentials {
            username: "alice@example.com".to_string(),
            password: "secret".to_string(),
        };

        let bytes = to_json(&creds).expect("serialize");
        assert_eq!(
            bytes.as_ref(),
            br#"{"username":"alice@example.com","password":"secret"}"#
        );
    }

    #[test]
    fn from_json_deserialize() {
        #[derive(Debug, PartialEq, serde::Deserialize)]
        struct OrderStatus {
            number: String,
            state: String,
        }

        let bytes = br#"{"number":"R123456789","state":"complete"}"#;
        let status: OrderStatus = from_json(bytes).expect("deserialize");

        assert_eq!(
            status,
            OrderStatus {
                number: "R123456789".to_string(),
                state: "complete".to_string(),
            }
        );
    }

    #[test]
    fn from_json_syntax_error() {
        #[derive(Debug, serde::Deserialize)]
        struct OrderStatus {
            #[allow(dead_code)]
            number: String,
        }

        let bytes = b"not json";
        let result: Result<OrderStatus> = from_json(bytes);

        assert!(result.is_err());
        let err = result.expect_err("should fail");
        assert!(err.to_string().contains("JSON deserialization error"));
    }

    #[test]
    fn from_json_missing_field_error_with_path() {
        #[derive(Debug, serde::Deserialize)]
        struct Attributes {
            #[allow(dead_code)]
            name: String,
        }

        #[derive(Debug, serde::Deserialize)]
        struct Data {
            #[allow(dead_code)]
            attributes: Attributes,
        }

        // Missing 'name' field inside 'attributes'
        let bytes = br#"{"attributes":{}}"#;
        let result: Result<Data> = from_json(bytes);

        assert!(result.is_err());
        let msg = result.expect_err("should fail").to_string();
        assert!(
            msg.contains("attributes"),
            "Expected path 'attributes' in error: {msg}"
        );
        assert!(
            msg.contains("name"),
            "Expected field 'name' mentioned in error: {msg}"
        );
    }
}
