//! The fixed set of items every store starts with.

use crate::catalog::{Item, ItemDraft};

/// The five startup items, ids 1 through 5.
pub fn seed_items() -> Vec<Item> {
    [
        ItemDraft::new("BLUE VEIN (AUSTRALIAN)", 20.0, "Blue", "/images/Roaring_Forties_Blue_Cheese.jpg"),
        ItemDraft::new("GOUDA", 22.0, "Light Yellow", "/images/gouda.jpg"),
        ItemDraft::new("CACIO DE ROMA", 16.5, "Brownish Yellow", "/images/Cacio_de_Roma.jpg"),
        ItemDraft::new("NEUFCHATEL", 39.99, "White", "/images/Neufchatel.jpg"),
        ItemDraft::new("RED WINDSOR", 45.0, "Pink and White", "/images/red_windsor.jpg"),
    ]
    .into_iter()
    .zip(1u64..)
    .map(|(draft, id)| Item::from_draft(id, draft))
    .collect()
}
