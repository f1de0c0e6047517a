//! Price calculator state.
//!
//! Mirrors the storefront form: a chosen item, a weight typed by the user
//! and the last total shown. Nothing here talks to the server.

use std::fmt;

use crate::types::Item;

/// The displayed total.
///
/// A computed total always shows two decimals, with exact halves rounded
/// away from zero. A reset shows a bare `0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Total {
    #[default]
    Reset,
    Computed(f64),
}

impl fmt::Display for Total {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Total::Reset => write!(f, "0"),
            Total::Computed(value) => write!(f, "{:.2}", round_half_away(*value)),
        }
    }
}

/// Settle exact half-cent ties away from zero before formatting.
///
/// Only multiples of 1/8 can sit exactly on a half cent, and for those the
/// scaled value is exact. Every other value is left for `{:.2}` to round
/// from its exact decimal expansion.
fn round_half_away(value: f64) -> f64 {
    let cents = value * 100.0;
    if (value * 8.0).fract() == 0.0 && cents.fract().abs() == 0.5 {
        cents.round() / 100.0
    } else {
        value
    }
}

#[derive(Debug, Clone, Default)]
pub struct Calculator {
    items: Vec<Item>,
    selected: Option<u64>,
    weight: String,
    total: Total,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the known catalog.
    pub fn load(&mut self, items: Vec<Item>) {
        self.items = items;
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Choose an item, or clear the choice with `None`.
    pub fn select(&mut self, id: Option<u64>) {
        self.selected = id;
    }

    pub fn selected_item(&self) -> Option<&Item> {
        let id = self.selected?;
        self.items.iter().find(|item| item.id == id)
    }

    /// Store the weight exactly as typed, in kilograms.
    pub fn set_weight(&mut self, weight: impl Into<String>) {
        self.weight = weight.into();
    }

    fn positive_weight(&self) -> Option<f64> {
        self.weight
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|w| w.is_finite() && *w > 0.0)
    }

    /// Recompute the total from the current selection and weight.
    ///
    /// Resets when nothing priced is selected or the weight is not a
    /// positive number.
    pub fn calculate(&mut self) -> Total {
        let price = self.selected_item().and_then(|item| item.unit_price);

        self.total = match (price, self.positive_weight()) {
            (Some(price), Some(weight)) => Total::Computed(price * weight),
            _ => Total::Reset,
        };
        self.total
    }

    /// The total as last calculated.
    pub fn total(&self) -> Total {
        self.total
    }
}
