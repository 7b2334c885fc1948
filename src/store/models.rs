//! Inventory Models
//!
//! Serialized field names are camelCase to match the persisted JSON layout
//! (`imageUrl`, `lastUpdated`, ...).

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Category assigned when an import or manual entry leaves it blank.
pub const DEFAULT_CATEGORY: &str = "Uncategorized";

/// Product Record
///
/// `id` is opaque and immutable once created; `sku` is the business-facing
/// natural key and the de-duplication key for saves and bulk imports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Opaque unique identifier, generated at creation time.
    pub id: Uuid,

    /// Stock-Keeping Unit, the natural key.
    pub sku: String,

    /// Product name.
    pub name: String,

    /// Free-form description.
    #[serde(default)]
    pub description: String,

    /// Category label.
    #[serde(default = "default_category")]
    pub category: String,

    /// Units on hand.
    #[serde(default)]
    pub quantity: u32,

    /// Unit price.
    #[serde(default)]
    pub price: Decimal,

    /// Captured image, as a data URI or external URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// Names of the storage locations this product is associated with.
    #[serde(default)]
    pub locations: Vec<String>,

    /// Set to the current time on every create or update.
    pub last_updated: Timestamp,
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_owned()
}

impl Product {
    /// Create a product with a fresh id, the default category, zero
    /// quantity and price, and `last_updated` set to now.
    #[must_use]
    pub fn new(sku: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            sku: sku.into(),
            name: name.into(),
            description: String::new(),
            category: default_category(),
            quantity: 0,
            price: Decimal::ZERO,
            image_url: None,
            locations: Vec::new(),
            last_updated: Timestamp::now(),
        }
    }

    /// Mark the record as updated now.
    pub fn touch(&mut self) {
        self.last_updated = Timestamp::now();
    }
}

/// Kind of storage location.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationKind {
    /// Fixed warehouse or yard.
    Warehouse,

    /// Service vehicle.
    Vehicle,

    /// Active jobsite.
    Jobsite,

    /// Anything else.
    #[default]
    Other,
}

/// Storage Location
///
/// A named place a product can be associated with (warehouse, vehicle,
/// jobsite).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageLocation {
    /// Opaque unique identifier.
    pub id: Uuid,

    /// Display name, referenced by `Product::locations`.
    pub name: String,

    /// Kind of place.
    #[serde(default)]
    pub kind: LocationKind,
}

impl StorageLocation {
    /// Create a location with a fresh id.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: LocationKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind,
        }
    }
}

/// Team Member
///
/// Roster entry for a field technician. Authentication is out of scope;
/// this is display and assignment metadata only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    /// Opaque unique identifier.
    pub id: Uuid,

    /// Display name.
    pub name: String,

    /// Role label, e.g. "Technician" or "Foreman".
    pub role: String,

    /// Contact email, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl TeamMember {
    /// Create a roster entry with a fresh id.
    #[must_use]
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            role: role.into(),
            email: None,
        }
    }
}
