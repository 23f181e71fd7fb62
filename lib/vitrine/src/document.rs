//! JSON:API document types.
//!
//! The storefront wraps every resource in a JSON:API envelope. Attribute
//! payloads differ per resource and store configuration, so they stay as
//! raw [`serde_json::Value`]s; the envelope itself (data, included, meta,
//! links, relationships) is typed here.

use std::collections::HashMap;

use serde::Deserialize;

/// A single JSON:API resource object.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Resource {
    /// Resource identifier.
    pub id: String,
    /// Resource type (e.g. `product`, `cart`, `wishlist`).
    #[serde(rename = "type")]
    pub kind: String,
    /// Resource attributes, shape depends on the resource type.
    #[serde(default)]
    pub attributes: serde_json::Value,
    /// Named relationships to other resources.
    #[serde(default)]
    pub relationships: HashMap<String, Relationship>,
}

impl Resource {
    /// Attribute value by name, if present.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&serde_json::Value> {
        self.attributes.get(name)
    }
}

/// A relationship entry pointing at one or many resources.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Relationship {
    /// Linked resource identifier(s); absent when the relationship is empty.
    #[serde(default)]
    pub data: Option<RelationshipData>,
}

/// One-or-many resource linkage.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RelationshipData {
    /// To-one relationship.
    One(ResourceIdentifier),
    /// To-many relationship.
    Many(Vec<ResourceIdentifier>),
}

/// A bare resource identifier inside a relationship.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResourceIdentifier {
    /// Resource identifier.
    pub id: String,
    /// Resource type.
    #[serde(rename = "type")]
    pub kind: String,
}

/// A JSON:API document holding a single resource.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Document {
    /// The primary resource.
    pub data: Resource,
    /// Side-loaded resources requested via `include`.
    #[serde(default)]
    pub included: Vec<Resource>,
}

/// A JSON:API document holding a resource collection.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ListDocument {
    /// The primary resources, in server order.
    pub data: Vec<Resource>,
    /// Side-loaded resources requested via `include`.
    #[serde(default)]
    pub included: Vec<Resource>,
    /// Pagination counters.
    #[serde(default)]
    pub meta: Option<ListMeta>,
    /// Pagination links.
    #[serde(default)]
    pub links: Option<PageLinks>,
}

/// Pagination counters returned with list documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ListMeta {
    /// Number of resources on this page.
    pub count: u64,
    /// Total matching resources.
    pub total_count: u64,
    /// Total pages at the current page size.
    pub total_pages: u64,
}

/// Pagination links returned with list documents.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PageLinks {
    /// This page.
    #[serde(rename = "self", default)]
    pub this: Option<String>,
    /// Next page, absent on the last one.
    #[serde(default)]
    pub next: Option<String>,
    /// Previous page, absent on the first one.
    #[serde(default)]
    pub prev: Option<String>,
    /// First page.
    #[serde(default)]
    pub first: Option<String>,
    /// Last page.
    #[serde(default)]
    pub last: Option<String>,
}

/// Marker for endpoints that answer `204 No Content`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoContent;
