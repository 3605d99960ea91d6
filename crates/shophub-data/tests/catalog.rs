use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread;

use shophub_commerce::ProductId;
use shophub_data::{Catalog, CatalogClient, FetchError, StaticCatalog, TimeoutConfig};

/// Serve `routes` over plain HTTP/1.1, one connection per request.
fn serve(routes: Vec<(&'static str, u16, &'static str)>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(mut stream) = stream else { break };
            let mut reader = BufReader::new(stream.try_clone().unwrap());

            let mut request_line = String::new();
            reader.read_line(&mut request_line).unwrap();
            let path = request_line.split_whitespace().nth(1).unwrap_or("/").to_string();
            loop {
                let mut line = String::new();
                if reader.read_line(&mut line).unwrap() == 0 || line == "\r\n" {
                    break;
                }
            }

            let (status, body) = routes
                .iter()
                .find(|(p, _, _)| *p == path)
                .map(|(_, s, b)| (*s, *b))
                .unwrap_or((404, ""));
            let response = format!(
                "HTTP/1.1 {status} X\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).unwrap();
        }
    });

    format!("http://{addr}")
}

fn client(base_url: &str) -> CatalogClient {
    CatalogClient::new(base_url, TimeoutConfig::from_millis(500, 2000)).unwrap()
}

const PRODUCTS: &str = r#"[
    {"id": 1, "title": "Backpack", "price": 109.95, "description": "d", "category": "men's clothing", "image": "i", "rating": {"rate": 3.9, "count": 120}},
    {"id": 2, "title": "Ring", "price": 9.99, "category": "jewelery", "image": "i"}
]"#;

#[tokio::test]
async fn client_fetches_products_and_categories() {
    let base = serve(vec![
        ("/products", 200, PRODUCTS),
        ("/products/categories", 200, r#"["jewelery", "men's clothing"]"#),
    ]);
    let client = client(&base);

    let products = client.products().await.unwrap();
    assert_eq!(products.len(), 2);
    assert_eq!(products[0].title, "Backpack");
    assert_eq!(products[1].price.display_amount(), "9.99");

    let categories = client.categories().await.unwrap();
    assert_eq!(categories, vec!["jewelery", "men's clothing"]);
}

#[tokio::test]
async fn client_empty_body_is_not_found() {
    let base = serve(vec![("/products/999", 200, "")]);
    let err = client(&base).product(&ProductId::from(999)).await.unwrap_err();
    assert!(matches!(err, FetchError::NotFound(_)));
}

#[tokio::test]
async fn client_server_error_is_http_error() {
    let base = serve(vec![("/products", 500, "oops")]);
    let err = client(&base).products().await.unwrap_err();
    assert!(matches!(err, FetchError::Http { status: 500, .. }));
    assert_eq!(err.user_message(), "Failed to load products. Please try again later.");
}

#[tokio::test]
async fn client_malformed_json_is_deserialization_error() {
    let base = serve(vec![("/products", 200, "{not json")]);
    let err = client(&base).products().await.unwrap_err();
    assert!(matches!(err, FetchError::Deserialization(_)));
}

#[tokio::test]
async fn static_catalog_serves_featured_products() {
    let catalog = StaticCatalog::featured();

    let products = catalog.products().await.unwrap();
    assert_eq!(products.len(), 6);

    let categories = catalog.categories().await.unwrap();
    assert_eq!(categories, vec!["Electronics", "Fashion", "Sports", "Home"]);
}

#[tokio::test]
async fn static_catalog_lookup_accepts_numeric_text() {
    let catalog = StaticCatalog::featured();

    let by_number = catalog.product(&ProductId::from(3)).await.unwrap();
    let by_text = catalog.product(&"3".parse::<ProductId>().unwrap()).await.unwrap();
    assert_eq!(by_number, by_text);

    let err = catalog.product(&ProductId::from("nope")).await.unwrap_err();
    assert!(err.is_not_found());
}
