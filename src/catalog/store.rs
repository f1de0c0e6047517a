//! In-memory catalog store.
//!
//! # Responsibilities
//! - Own the item sequence and the id allocator
//! - Serialize every read and write behind one mutex
//! - Keep insertion order for listing
//!
//! # Design Decisions
//! - Ids come from a monotonic counter and are never handed out twice, even
//!   after deletes
//! - The lock is held only for the scan or mutation; items are cloned out
//! - Deleting an unknown id succeeds silently

use std::sync::Mutex;

use crate::catalog::error::{CatalogError, CatalogResult};
use crate::catalog::item::{Item, ItemDraft};
use crate::catalog::seed::seed_items;
use crate::observability::metrics;

struct Inventory {
    items: Vec<Item>,
    next_id: u64,
}

/// Authoritative holder of all catalog items for the process lifetime.
pub struct CatalogStore {
    inner: Mutex<Inventory>,
}

impl CatalogStore {
    /// Create a store holding `items` in the given order.
    ///
    /// The next assigned id is one past the largest id present.
    pub fn new(items: Vec<Item>) -> Self {
        let next_id = items.iter().map(|item| item.id).max().unwrap_or(0) + 1;
        metrics::record_catalog_size(items.len());

        Self {
            inner: Mutex::new(Inventory { items, next_id }),
        }
    }

    /// Create a store holding the startup seed set.
    pub fn seeded() -> Self {
        Self::new(seed_items())
    }

    /// All items in insertion order.
    pub fn list_all(&self) -> Vec<Item> {
        self.lock().items.clone()
    }

    /// Look up a single item.
    pub fn get_by_id(&self, id: u64) -> CatalogResult<Item> {
        self.lock()
            .items
            .iter()
            .find(|item| item.id == id)
            .cloned()
            .ok_or(CatalogError::NotFound(id))
    }

    /// Append a new item and return it with its assigned id.
    pub fn create(&self, draft: ItemDraft) -> Item {
        let mut inventory = self.lock();
        let id = inventory.next_id;
        inventory.next_id += 1;

        let item = Item::from_draft(id, draft);
        inventory.items.push(item.clone());
        metrics::record_catalog_size(inventory.items.len());

        tracing::debug!(item_id = id, items = inventory.items.len(), "Item created");
        item
    }

    /// Replace every descriptive field of an existing item.
    pub fn update(&self, id: u64, draft: ItemDraft) -> CatalogResult<Item> {
        let mut inventory = self.lock();
        let item = inventory
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(CatalogError::NotFound(id))?;

        item.replace_with(draft);
        tracing::debug!(item_id = id, "Item updated");
        Ok(item.clone())
    }

    /// Remove an item if present. Returns whether anything was removed.
    pub fn delete(&self, id: u64) -> bool {
        let mut inventory = self.lock();
        let before = inventory.items.len();
        inventory.items.retain(|item| item.id != id);

        let removed = inventory.items.len() < before;
        if removed {
            metrics::record_catalog_size(inventory.items.len());
            tracing::debug!(item_id = id, items = inventory.items.len(), "Item deleted");
        }
        removed
    }

    /// Number of items currently held.
    pub fn len(&self) -> usize {
        self.lock().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inventory> {
        self.inner.lock().expect("catalog mutex poisoned")
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn camembert() -> ItemDraft {
        ItemDraft::new("Camembert", 28.0, "Creamy", "/images/camembert.jpg")
    }

    #[test]
    fn test_seeded_listing() {
        let store = CatalogStore::seeded();
        let items = store.list_all();

        assert_eq!(items.len(), 5);
        let ids: Vec<u64> = items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_get_by_id() {
        let store = CatalogStore::seeded();
        for id in 1..=5 {
            assert_eq!(store.get_by_id(id).unwrap().id, id);
        }
        assert_eq!(store.get_by_id(99), Err(CatalogError::NotFound(99)));
    }

    #[test]
    fn test_create_appends() {
        let store = CatalogStore::seeded();
        let created = store.create(camembert());

        assert_eq!(created.id, 6);
        assert_eq!(created.name.as_deref(), Some("Camembert"));
        assert_eq!(store.len(), 6);
        assert_eq!(store.list_all().last(), Some(&created));
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let store = CatalogStore::seeded();
        assert!(store.delete(2));

        let created = store.create(camembert());
        assert_eq!(created.id, 6);

        let again = store.create(camembert());
        assert_eq!(again.id, 7);

        let ids: Vec<u64> = store.list_all().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_update_replaces_all_fields() {
        let store = CatalogStore::seeded();
        let draft = ItemDraft {
            name: Some("Updated Red Windsor".into()),
            unit_price: Some(47.0),
            color: None,
            image_ref: Some("/images/updated_red_windsor.jpg".into()),
        };

        let updated = store.update(5, draft).unwrap();
        assert_eq!(updated.id, 5);
        assert_eq!(updated.unit_price, Some(47.0));
        assert_eq!(updated.color, None);
        assert_eq!(store.get_by_id(5).unwrap(), updated);
    }

    #[test]
    fn test_update_missing() {
        let store = CatalogStore::seeded();
        assert_eq!(store.update(42, camembert()), Err(CatalogError::NotFound(42)));
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn test_delete_is_idempotent() {
        let store = CatalogStore::seeded();
        assert!(store.delete(5));
        assert!(!store.delete(5));
        assert_eq!(store.get_by_id(5), Err(CatalogError::NotFound(5)));
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn test_concurrent_creates_get_distinct_ids() {
        let store = Arc::new(CatalogStore::new(Vec::new()));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = store.clone();
                std::thread::spawn(move || {
                    (0..25).map(|_| store.create(camembert()).id).collect::<Vec<_>>()
                })
            })
            .collect();

        let mut ids: Vec<u64> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        ids.sort_unstable();
        ids.dedup();

        assert_eq!(ids.len(), 200);
        assert_eq!(store.len(), 200);
    }
}
