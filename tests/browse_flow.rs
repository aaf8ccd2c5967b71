use axum::{Json, Router, routing::get};
use serde_json::json;
use tokio::net::TcpListener;

use storefront_catalog::{
    CatalogController,
    actions::Notice,
    api::{CatalogApi, HttpCatalogClient},
    config::ClientConfig,
    coordinator::FetchOutcome,
    filters::{FilterState, SortBy, SortOrder},
    query::build_query,
    routes,
    seed::seed_catalog,
    state::AppState,
};

async fn serve(app: Router) -> anyhow::Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move { axum::serve(listener, app).await });
    Ok(format!("http://{addr}"))
}

async fn reference_server() -> anyhow::Result<String> {
    serve(routes::app(AppState::new(seed_catalog()))).await
}

fn controller_for(base_url: &str) -> anyhow::Result<CatalogController> {
    let client = HttpCatalogClient::new(&ClientConfig::new(base_url).with_timeout(5))?;
    Ok(CatalogController::with_http_client(client))
}

// Storefront flow: land on all products, pick a category, page through it, re-sort.
#[tokio::test]
async fn browse_category_and_page_through() -> anyhow::Result<()> {
    let base_url = reference_server().await?;
    let mut controller = controller_for(&base_url)?;

    controller.mount();
    controller.settle().await;
    assert_eq!(controller.categories().len(), 4);
    assert_eq!(controller.page_result().products.len(), 12);
    assert_eq!(controller.page_result().pagination.total_products, 30);
    assert_eq!(controller.page_result().pagination.total_pages, 3);

    controller.set_category("Cameras");
    controller.settle().await;
    let page = controller.page_result();
    assert_eq!(page.pagination.total_products, 13);
    assert_eq!(page.pagination.total_pages, 2);
    assert!(page.products.iter().all(|p| p.category == "Cameras"));

    assert!(controller.next_page().is_some());
    controller.settle().await;
    assert_eq!(controller.page_result().pagination.current_page, 2);
    assert_eq!(controller.page_result().products.len(), 1);
    assert!(controller.next_page().is_none());

    controller.set_sort_by(SortBy::Price);
    controller.set_sort_order(SortOrder::Asc);
    controller.settle().await;
    assert_eq!(controller.filters().page(), 2);
    // Most expensive camera is the lone entry on page two when sorted ascending.
    assert_eq!(controller.page_result().products[0].name, "Thermal Bullet Camera");
    assert_eq!(controller.error(), None);
    Ok(())
}

#[tokio::test]
async fn search_and_price_filters_reach_the_server() -> anyhow::Result<()> {
    let base_url = reference_server().await?;
    let mut controller = controller_for(&base_url)?;

    controller.set_search_term("  dome ");
    controller.submit_search();
    controller.settle().await;
    let names: Vec<_> = controller
        .page_result()
        .products
        .iter()
        .map(|p| p.name.clone())
        .collect();
    assert_eq!(names.len(), 2);
    assert!(names.iter().all(|n| n.contains("Dome")));

    controller.set_search_term("");
    controller.set_price_range(Some(1000.0), Some(2000.0))?;
    controller.apply_price_filter();
    controller.settle().await;
    let page = controller.page_result();
    assert!(!page.products.is_empty());
    assert!(page.products.iter().all(|p| (1000.0..=2000.0).contains(&p.price)));

    controller.set_hide_out_of_stock(true);
    assert!(controller.view().products.iter().all(|p| p.stock > 0));
    Ok(())
}

#[tokio::test]
async fn cart_notices_follow_server_answer() -> anyhow::Result<()> {
    let base_url = reference_server().await?;
    let controller = controller_for(&base_url)?;

    // prod-001 has stock, prod-004 is sold out
    let ok = controller.add_to_cart("prod-001", 2).await;
    assert_eq!(ok, Notice::Success("Added to cart!".into()));

    let sold_out = controller.add_to_cart("prod-004", 1).await;
    assert!(sold_out.is_error());

    let unknown = controller.add_to_cart("missing", 1).await;
    assert!(unknown.is_error());
    Ok(())
}

#[tokio::test]
async fn unreachable_catalog_sets_inline_error() -> anyhow::Result<()> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);

    let mut controller = controller_for(&format!("http://{addr}"))?;
    controller.mount();
    let outcomes = controller.settle().await;

    assert!(matches!(outcomes.last(), Some(FetchOutcome::Failed { .. })));
    assert!(!controller.is_loading());
    assert_eq!(
        controller.error(),
        Some("Could not reach the catalog. Please try again.")
    );
    assert!(controller.categories().is_empty());
    Ok(())
}

#[tokio::test]
async fn legacy_and_malformed_payloads_are_tolerated() -> anyhow::Result<()> {
    let legacy = Router::new().route(
        "/api/products",
        get(|| async {
            Json(json!([
                { "_id": "x1", "name": "Legacy Cam", "price": 500, "stock": 1, "image": "/x1.jpg" }
            ]))
        }),
    );
    let malformed = Router::new().route(
        "/api/products",
        get(|| async { Json(json!({ "unexpected": true })) }),
    );
    let not_json = Router::new().route("/api/products", get(|| async { "<html>oops</html>" }));

    let query = build_query(&FilterState::default());

    let client = HttpCatalogClient::new(&ClientConfig::new(serve(legacy).await?))?;
    let page = client.fetch_products(&query).await?;
    assert_eq!(page.products.len(), 1);
    assert_eq!(page.products[0].name, "Legacy Cam");
    assert_eq!(page.pagination.total_pages, 0);

    let client = HttpCatalogClient::new(&ClientConfig::new(serve(malformed).await?))?;
    assert!(client.fetch_products(&query).await?.products.is_empty());

    let client = HttpCatalogClient::new(&ClientConfig::new(serve(not_json).await?))?;
    assert!(client.fetch_products(&query).await?.products.is_empty());
    Ok(())
}
