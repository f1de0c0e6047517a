//! Catalog record types.

use serde::{Deserialize, Serialize};

/// A single catalog entry.
///
/// Descriptive fields are optional because lax request handling stores
/// whatever the client sent, including nothing at all. Absent values
/// serialize as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Store-assigned identifier, unique for the process lifetime.
    pub id: u64,
    /// Display name.
    pub name: Option<String>,
    /// Price per kilogram.
    pub unit_price: Option<f64>,
    /// Free-text color descriptor.
    pub color: Option<String>,
    /// Relative path or URL of the display image.
    pub image_ref: Option<String>,
}

impl Item {
    /// Build an item from an id and a draft.
    pub fn from_draft(id: u64, draft: ItemDraft) -> Self {
        Self {
            id,
            name: draft.name,
            unit_price: draft.unit_price,
            color: draft.color,
            image_ref: draft.image_ref,
        }
    }

    /// Overwrite every descriptive field. The id never changes.
    pub fn replace_with(&mut self, draft: ItemDraft) {
        self.name = draft.name;
        self.unit_price = draft.unit_price;
        self.color = draft.color;
        self.image_ref = draft.image_ref;
    }
}

/// The descriptive part of an item, as sent on create and update.
///
/// Accepts the legacy `pricePerKilo` and `imageURL` field names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemDraft {
    pub name: Option<String>,
    #[serde(alias = "pricePerKilo")]
    pub unit_price: Option<f64>,
    pub color: Option<String>,
    #[serde(alias = "imageURL")]
    pub image_ref: Option<String>,
}

impl ItemDraft {
    /// Draft with every field present.
    pub fn new(
        name: impl Into<String>,
        unit_price: f64,
        color: impl Into<String>,
        image_ref: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            unit_price: Some(unit_price),
            color: Some(color.into()),
            image_ref: Some(image_ref.into()),
        }
    }

    /// Names of the fields that fail strict validation, in declaration order.
    ///
    /// `name` must be non-blank, `unitPrice` finite and non-negative, and
    /// `color` and `imageRef` present.
    pub fn invalid_fields(&self) -> Vec<&'static str> {
        let mut invalid = Vec::new();

        if self.name.as_deref().map_or(true, |n| n.trim().is_empty()) {
            invalid.push("name");
        }
        if !self.unit_price.is_some_and(|p| p.is_finite() && p >= 0.0) {
            invalid.push("unitPrice");
        }
        if self.color.is_none() {
            invalid.push("color");
        }
        if self.image_ref.is_none() {
            invalid.push("imageRef");
        }

        invalid
    }
}
