//! Bracket-notation query-string serialization.
//!
//! The storefront API decodes nested parameters with the Rails-style
//! "brackets" convention: `filter[name]=x`, `ids[]=1&ids[]=2`. That
//! convention is not what `url::form_urlencoded` or serde-based form
//! encoders produce, so this module implements the flattening and the
//! RFC 3986 percent-encoding profile directly.
//!
//! # Example
//!
//! ```
//! use vitrine_core::query::{Params, to_query_string};
//!
//! let params = Params::new()
//!     .insert("filter", Params::new().insert("name", "mug"))
//!     .insert("page", 2);
//!
//! assert_eq!(to_query_string(&params), "filter%5Bname%5D=mug&page=2");
//! ```

use std::borrow::Cow;

use bytes::Bytes;
use chrono::{DateTime, SecondsFormat, Utc};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Everything outside the RFC 3986 "unreserved" set (`A-Z a-z 0-9 - . _ ~`)
/// gets percent-encoded. Non-ASCII input is always encoded per UTF-8 byte.
const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encode a string with the RFC 3986 profile used for query strings.
///
/// Unreserved characters pass through; every other byte of the UTF-8
/// encoding becomes an uppercase `%XX` escape.
///
/// ```
/// use vitrine_core::query::percent_encode;
///
/// assert_eq!(percent_encode("café"), "caf%C3%A9");
/// assert_eq!(percent_encode("a b"), "a%20b");
/// ```
#[must_use]
pub fn percent_encode(input: &str) -> String {
    utf8_percent_encode(input, QUERY_ENCODE_SET).to_string()
}

/// A value in a parameter tree.
///
/// Terminals serialize to a single `key=value` pair; [`Value::Array`] and
/// [`Value::Object`] recurse with `key[]` and `key[name]` prefixes.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Explicit null, serialized as an empty value (`key=`).
    Null,
    /// Boolean, serialized as `true`/`false`.
    Bool(bool),
    /// Number, serialized in its canonical decimal form.
    Number(serde_json::Number),
    /// Text.
    String(String),
    /// Timestamp, serialized as its ISO-8601 form (`2024-01-15T10:30:00.000Z`).
    DateTime(DateTime<Utc>),
    /// Raw bytes, serialized as their UTF-8 string form, never recursed into.
    Bytes(Bytes),
    /// Ordered sequence; each element keyed as `prefix[]`.
    Array(Vec<Value>),
    /// Nested mapping; each entry keyed as `prefix[name]`.
    Object(Params),
}

/// An insertion-ordered mapping of parameter names to [`Value`]s.
///
/// Key order is preserved as-is: the serialized output lists pairs in
/// exactly the order keys were inserted, never sorted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    entries: Vec<(String, Value)>,
}

impl Params {
    /// Creates an empty parameter map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Inserts a value, replacing an existing entry with the same key in
    /// place (the original position is kept).
    #[must_use]
    pub fn insert(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
        } else {
            self.entries.push((key, value));
        }
        self
    }

    /// Inserts a value when present; `None` leaves the map untouched, so
    /// the key (and its whole subtree) produces no output at all.
    #[must_use]
    pub fn insert_opt(self, key: impl Into<String>, value: Option<impl Into<Value>>) -> Self {
        match value {
            Some(value) => self.insert(key, value),
            None => self,
        }
    }

    /// Value for a key, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find_map(|(k, v)| (k == key).then_some(v))
    }

    /// Whether the key is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Number of top-level entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Builds a parameter map from any serializable type.
    ///
    /// The value must serialize to a map at the top level. Fields skipped
    /// by serde (e.g. `skip_serializing_if = "Option::is_none"`) are simply
    /// absent and contribute nothing to the query string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the top-level value is
    /// not a map.
    ///
    /// # Example
    ///
    /// ```
    /// use serde::Serialize;
    /// use vitrine_core::query::{Params, to_query_string};
    ///
    /// #[derive(Serialize)]
    /// struct ProductsList {
    ///     #[serde(skip_serializing_if = "Option::is_none")]
    ///     include: Option<String>,
    ///     page: u32,
    /// }
    ///
    /// let list = ProductsList { include: None, page: 3 };
    /// let params = Params::from_serialize(&list).expect("object");
    /// assert_eq!(to_query_string(&params), "page=3");
    /// ```
    pub fn from_serialize<T: serde::Serialize>(value: &T) -> crate::Result<Self> {
        match serde_json::to_value(value)? {
            serde_json::Value::Object(map) => Ok(map
                .into_iter()
                .map(|(k, v)| (k, Value::from(v)))
                .collect()),
            other => Err(crate::Error::invalid_request(format!(
                "query parameters must serialize to an object, got {}",
                json_kind(&other)
            ))),
        }
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

impl FromIterator<(String, Value)> for Params {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |params, (k, v)| params.insert(k, v))
    }
}

impl IntoIterator for Params {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Serializes a parameter map to a query string.
///
/// The tree is flattened depth-first in insertion order: nested maps use
/// `outer[inner]` keys, sequences use `outer[]`, and both key and value of
/// every emitted pair are percent-encoded with the RFC 3986 profile. An
/// empty map produces an empty string; no leading `?` is added.
///
/// This function is total: any representable tree serializes without error.
///
/// ```
/// use vitrine_core::query::{Params, Value, to_query_string};
///
/// let params = Params::new().insert("ids", vec![1, 2, 3]);
/// assert_eq!(to_query_string(&params), "ids%5B%5D=1&ids%5B%5D=2&ids%5B%5D=3");
///
/// let params = Params::new().insert("promo", Value::Null);
/// assert_eq!(to_query_string(&params), "promo=");
/// ```
#[must_use]
pub fn to_query_string(params: &Params) -> String {
    let mut pairs = Vec::new();
    for (key, value) in params.iter() {
        stringify(value, key, &mut pairs);
    }
    pairs.join("&")
}

/// Depth-first pre-order flattening; pushes one `key=value` pair per
/// terminal reached under `prefix`.
fn stringify(value: &Value, prefix: &str, pairs: &mut Vec<String>) {
    let text: Cow<'_, str> = match value {
        Value::Null => Cow::Borrowed(""),
        Value::Bool(flag) => Cow::Borrowed(if *flag { "true" } else { "false" }),
        Value::Number(number) => Cow::Owned(number.to_string()),
        Value::String(text) => Cow::Borrowed(text.as_str()),
        Value::DateTime(instant) => {
            Cow::Owned(instant.to_rfc3339_opts(SecondsFormat::Millis, true))
        }
        Value::Bytes(bytes) => String::from_utf8_lossy(bytes),
        Value::Array(items) => {
            let child = format!("{prefix}[]");
            for item in items {
                stringify(item, &child, pairs);
            }
            return;
        }
        Value::Object(entries) => {
            for (key, item) in entries.iter() {
                stringify(item, &format!("{prefix}[{key}]"), pairs);
            }
            return;
        }
    };
    pairs.push(format!("{}={}", percent_encode(prefix), percent_encode(&text)));
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Number(value.into())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::Number(value.into())
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Self::Number(value.into())
    }
}

impl From<f64> for Value {
    /// Non-finite floats have no query-string form and map to [`Value::Null`].
    fn from(value: f64) -> Self {
        serde_json::Number::from_f64(value).map_or(Self::Null, Self::Number)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Self::DateTime(value)
    }
}

impl From<Bytes> for Value {
    fn from(value: Bytes) -> Self {
        Self::Bytes(value)
    }
}

impl From<Params> for Value {
    fn from(value: Params) -> Self {
        Self::Object(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Self::Array(values.into_iter().map(Into::into).collect())
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(flag) => Self::Bool(flag),
            serde_json::Value::Number(number) => Self::Number(number),
            serde_json::Value::String(text) => Self::String(text),
            serde_json::Value::Array(items) => {
                Self::Array(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(map) => Self::Object(
                map.into_iter()
                    .map(|(k, v)| (k, Self::from(v)))
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use percent_encoding::percent_decode_str;

    use super::*;

    fn decode(segment: &str) -> String {
        percent_decode_str(segment)
            .decode_utf8()
            .expect("valid utf-8")
            .into_owned()
    }

    #[test]
    fn flat_primitives() {
        let params = Params::new().insert("a", 1).insert("b", "x");
        assert_eq!(to_query_string(&params), "a=1&b=x");
    }

    #[test]
    fn nested_object_uses_brackets() {
        let params = Params::new().insert("filter", Params::new().insert("name", "foo"));
        assert_eq!(to_query_string(&params), "filter%5Bname%5D=foo");
    }

    #[test]
    fn array_uses_empty_brackets() {
        let params = Params::new().insert("ids", vec![1, 2, 3]);
        assert_eq!(
            to_query_string(&params),
            "ids%5B%5D=1&ids%5B%5D=2&ids%5B%5D=3"
        );
    }

    #[test]
    fn empty_params() {
        assert_eq!(to_query_string(&Params::new()), "");
    }

    #[test]
    fn absent_value_emits_nothing() {
        let params = Params::new().insert_opt("a", None::<&str>);
        assert_eq!(to_query_string(&params), "");
        assert!(params.is_empty());
    }

    #[test]
    fn null_keeps_the_key() {
        let params = Params::new().insert("a", Value::Null);
        assert_eq!(to_query_string(&params), "a=");
    }

    #[test]
    fn insertion_order_is_preserved() {
        let params = Params::new().insert("b", 1).insert("a", 2);
        assert_eq!(to_query_string(&params), "b=1&a=2");
    }

    #[test]
    fn replacing_a_key_keeps_its_position() {
        let params = Params::new()
            .insert("b", 1)
            .insert("a", 2)
            .insert("b", 9);
        assert_eq!(to_query_string(&params), "b=9&a=2");
    }

    #[test]
    fn booleans_and_floats() {
        let params = Params::new()
            .insert("in_stock", true)
            .insert("min_price", 19.5);
        assert_eq!(to_query_string(&params), "in_stock=true&min_price=19.5");
    }

    #[test]
    fn non_finite_float_becomes_null() {
        let params = Params::new().insert("x", f64::NAN);
        assert_eq!(to_query_string(&params), "x=");
    }

    #[test]
    fn multibyte_value_round_trips() {
        let params = Params::new().insert("q", "café");
        let encoded = to_query_string(&params);
        assert_eq!(encoded, "q=caf%C3%A9");

        let value = encoded.split('=').nth(1).expect("value segment");
        assert_eq!(decode(value), "café");
    }

    #[test]
    fn supplementary_plane_character_is_four_bytes() {
        // U+1F600, a single code point outside the BMP
        let params = Params::new().insert("mood", "😀");
        assert_eq!(to_query_string(&params), "mood=%F0%9F%98%80");
    }

    #[test]
    fn date_serializes_as_iso_8601() {
        let when = Utc
            .with_ymd_and_hms(2024, 1, 15, 10, 30, 0)
            .single()
            .expect("valid timestamp");
        let params = Params::new().insert("since", when);
        assert_eq!(to_query_string(&params), "since=2024-01-15T10%3A30%3A00.000Z");
    }

    #[test]
    fn bytes_are_a_terminal_value() {
        let params = Params::new().insert("blob", Bytes::from_static(b"ab c"));
        assert_eq!(to_query_string(&params), "blob=ab%20c");
    }

    #[test]
    fn deep_mixed_tree() {
        let params = Params::new()
            .insert(
                "filter",
                Params::new()
                    .insert("taxons", vec![12, 13])
                    .insert("name", "mug"),
            )
            .insert(
                "page",
                Params::new().insert("number", 2).insert("size", 25),
            );
        insta::assert_snapshot!(
            to_query_string(&params),
            @"filter%5Btaxons%5D%5B%5D=12&filter%5Btaxons%5D%5B%5D=13&filter%5Bname%5D=mug&page%5Bnumber%5D=2&page%5Bsize%5D=25"
        );
    }

    #[test]
    fn array_of_objects() {
        let params = Params::new().insert(
            "line_items",
            vec![
                Value::Object(Params::new().insert("variant_id", 1).insert("quantity", 2)),
                Value::Object(Params::new().insert("variant_id", 7).insert("quantity", 1)),
            ],
        );
        insta::assert_snapshot!(
            to_query_string(&params),
            @"line_items%5B%5D%5Bvariant_id%5D=1&line_items%5B%5D%5Bquantity%5D=2&line_items%5B%5D%5Bvariant_id%5D=7&line_items%5B%5D%5Bquantity%5D=1"
        );
    }

    #[test]
    fn every_value_segment_decodes_back() {
        let when = Utc
            .with_ymd_and_hms(2023, 6, 1, 8, 0, 0)
            .single()
            .expect("valid timestamp");
        let params = Params::new()
            .insert("plain", "hello world")
            .insert("reserved", "a&b=c?d")
            .insert("unicode", "crème brûlée")
            .insert("since", when)
            .insert("n", 42);

        let expected = [
            "hello world",
            "a&b=c?d",
            "crème brûlée",
            "2023-06-01T08:00:00.000Z",
            "42",
        ];
        let qs = to_query_string(&params);
        for (pair, want) in qs.split('&').zip(expected) {
            let value = pair.split('=').nth(1).expect("value segment");
            assert_eq!(decode(value), want);
        }
    }

    #[test]
    fn from_serialize_keeps_field_order() {
        #[derive(serde::Serialize)]
        struct List {
            sort: String,
            include: String,
        }

        let params = Params::from_serialize(&List {
            sort: "-updated_at".to_string(),
            include: "images".to_string(),
        })
        .expect("object");
        assert_eq!(to_query_string(&params), "sort=-updated_at&include=images");
    }

    #[test]
    fn from_serialize_nested() {
        let params = Params::from_serialize(&serde_json::json!({
            "filter": { "skus": ["A-1", "B-2"] },
        }))
        .expect("object");
        assert_eq!(
            to_query_string(&params),
            "filter%5Bskus%5D%5B%5D=A-1&filter%5Bskus%5D%5B%5D=B-2"
        );
    }

    #[test]
    fn from_serialize_rejects_non_object() {
        let error = Params::from_serialize(&[1, 2, 3]).expect_err("not an object");
        assert!(error.to_string().contains("an array"), "{error}");
    }

    #[test]
    fn serde_null_maps_to_null_value() {
        let params = Params::from_serialize(&serde_json::json!({ "coupon": null }))
            .expect("object");
        assert_eq!(to_query_string(&params), "coupon=");
    }

    #[test]
    fn empty_string_values() {
        let params = Params::new().insert("q", "");
        assert_eq!(to_query_string(&params), "q=");
    }
}
