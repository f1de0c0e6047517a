//! End-to-end tests over a real socket using the client SDK.

use cheeseria::CatalogConfig;
use cheeseria_sdk::{CatalogClient, ItemInput, Storefront};

mod common;

fn camembert() -> ItemInput {
    ItemInput {
        name: "Camembert".into(),
        unit_price: 28.0,
        color: "Creamy".into(),
        image_ref: "/images/camembert.jpg".into(),
    }
}

#[tokio::test]
async fn test_crud_round_trip_through_sdk() {
    let (addr, shutdown) = common::spawn_server(CatalogConfig::default()).await;
    let client = CatalogClient::new(&format!("http://{addr}"));

    let items = client.list_items().await.expect("server reachable");
    assert_eq!(items.len(), 5);

    let created = client.create_item(&camembert()).await.unwrap();
    assert_eq!(created.id, 6);
    assert_eq!(created.name.as_deref(), Some("Camembert"));
    assert_eq!(client.list_items().await.unwrap().len(), 6);

    let mut renamed = camembert();
    renamed.name = "Camembert de Normandie".into();
    let updated = client.update_item(6, &renamed).await.unwrap();
    assert_eq!(updated.name.as_deref(), Some("Camembert de Normandie"));
    assert_eq!(client.get_item(6).await.unwrap(), updated);

    client.delete_item(6).await.unwrap();
    client.delete_item(6).await.unwrap();

    let err = client.get_item(6).await.unwrap_err();
    assert!(err.is_not_found());

    let err = client.update_item(6, &camembert()).await.unwrap_err();
    assert!(err.is_not_found());

    shutdown.trigger();
}

#[tokio::test]
async fn test_storefront_calculates_from_live_catalog() {
    let (addr, shutdown) = common::spawn_server(CatalogConfig::default()).await;
    let client = CatalogClient::new(&format!("http://{addr}"));

    let mut storefront = Storefront::bootstrap(client).await;
    assert_eq!(storefront.calculator.items().len(), 5);

    storefront.calculator.select(Some(1));
    storefront.calculator.set_weight("2");
    assert_eq!(storefront.calculator.calculate().to_string(), "40.00");

    let rendered = storefront.render();
    assert!(rendered.contains("[1] BLUE VEIN (AUSTRALIAN)"));
    assert!(rendered.contains("Blue - $20/kg"));
    assert!(rendered.contains(&format!("http://{addr}/images/gouda.jpg")));
    assert!(rendered.contains("Total Price: $40.00"));

    storefront.calculator.select(None);
    assert_eq!(storefront.calculator.calculate().to_string(), "0");

    shutdown.trigger();
}

#[tokio::test]
async fn test_plain_text_not_found_over_http() {
    let (addr, shutdown) = common::spawn_server(CatalogConfig::default()).await;
    let client = reqwest::Client::builder().no_proxy().build().unwrap();

    let res = client
        .get(format!("http://{addr}/api/items/abc"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 404);
    assert_eq!(res.text().await.unwrap(), "Item not found");

    shutdown.trigger();
}
