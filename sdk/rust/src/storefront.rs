//! The client-side app: one catalog fetch, then local interaction.

use crate::calculator::Calculator;
use crate::client::CatalogClient;
use crate::gallery::render_gallery;

/// Catalog view plus price calculator.
pub struct Storefront {
    client: CatalogClient,
    pub calculator: Calculator,
}

impl Storefront {
    /// Fetch the catalog once.
    ///
    /// A failed fetch is logged and leaves the catalog empty; there is no
    /// retry.
    pub async fn bootstrap(client: CatalogClient) -> Self {
        let mut calculator = Calculator::new();

        match client.list_items().await {
            Ok(items) => {
                tracing::debug!(items = items.len(), "Catalog loaded");
                calculator.load(items);
            }
            Err(e) => tracing::error!(error = %e, "Error fetching catalog"),
        }

        Self { client, calculator }
    }

    /// Gallery followed by the current calculator state.
    pub fn render(&self) -> String {
        let mut out = String::from("PZ Cheeseria\n\n");
        out.push_str(&render_gallery(self.calculator.items(), &self.client));

        out.push_str("\nCheese Calculator\n");
        if let Some(item) = self.calculator.selected_item() {
            out.push_str(&format!(
                "Selected: {}\n",
                item.name.as_deref().unwrap_or("(unnamed)")
            ));
        }
        out.push_str(&format!("Total Price: ${}\n", self.calculator.total()));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bootstrap_failure_leaves_catalog_empty() {
        // Port 9 (discard) on loopback is not expected to run an HTTP server.
        let client = CatalogClient::new("http://127.0.0.1:9");
        let storefront = Storefront::bootstrap(client).await;

        assert!(storefront.calculator.items().is_empty());
        assert!(storefront.render().contains("Total Price: $0\n"));
    }
}
