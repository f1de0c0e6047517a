//! Text rendering of the catalog.

use std::fmt::Write;

use crate::client::CatalogClient;
use crate::types::Item;

/// `"{color} - ${price}/kg"` caption shown under each item.
pub fn caption(item: &Item) -> String {
    let color = item.color.as_deref().unwrap_or("");
    match item.unit_price {
        Some(price) => format!("{color} - ${price}/kg"),
        None => format!("{color} - $?/kg"),
    }
}

/// Render every item as a card: name, caption and image URL.
pub fn render_gallery(items: &[Item], client: &CatalogClient) -> String {
    let mut out = String::from("Cheese Catalog\n");

    if items.is_empty() {
        out.push_str("  (no items)\n");
        return out;
    }

    for item in items {
        let _ = writeln!(out, "[{}] {}", item.id, item.name.as_deref().unwrap_or("(unnamed)"));
        let _ = writeln!(out, "    {}", caption(item));
        if let Some(url) = client.image_url(item) {
            let _ = writeln!(out, "    {url}");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gouda() -> Item {
        Item {
            id: 2,
            name: Some("GOUDA".into()),
            unit_price: Some(22.0),
            color: Some("Light Yellow".into()),
            image_ref: Some("/images/gouda.jpg".into()),
        }
    }

    #[test]
    fn test_caption() {
        assert_eq!(caption(&gouda()), "Light Yellow - $22/kg");

        let cacio = Item {
            unit_price: Some(16.5),
            color: Some("Brownish Yellow".into()),
            ..gouda()
        };
        assert_eq!(caption(&cacio), "Brownish Yellow - $16.5/kg");
    }

    #[test]
    fn test_render_gallery() {
        let client = CatalogClient::new("http://localhost:3000");
        let rendered = render_gallery(&[gouda()], &client);

        assert_eq!(
            rendered,
            "Cheese Catalog\n\
             [2] GOUDA\n    \
             Light Yellow - $22/kg\n    \
             http://localhost:3000/images/gouda.jpg\n"
        );
    }

    #[test]
    fn test_render_empty_gallery() {
        let client = CatalogClient::new("http://localhost:3000");
        assert!(render_gallery(&[], &client).contains("(no items)"));
    }
}
