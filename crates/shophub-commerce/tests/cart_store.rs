use shophub_cache::{FileStore, KeyValueStore, MemoryStore};
use shophub_commerce::cart::{Cart, CartStatus, CartStore, CART_STORAGE_KEY};
use shophub_commerce::catalog::Product;
use shophub_commerce::{Money, ProductId};

fn money(s: &str) -> Money {
    s.parse().unwrap()
}

fn product_a() -> Product {
    Product::new(1, "Product A", money("10.00")).with_category("electronics")
}

fn product_b() -> Product {
    Product::new(2, "Product B", money("5.50")).with_category("jewelery")
}

fn assert_totals_consistent(cart: &Cart) {
    let quantity: i64 = cart.items().iter().map(|i| i.quantity).sum();
    let price: Money = cart
        .items()
        .iter()
        .map(|i| i.product.price * i.quantity)
        .sum::<Money>()
        .round_cents();
    assert_eq!(cart.total_quantity(), quantity);
    assert_eq!(cart.total_price(), price);
}

#[test]
fn repeated_add_produces_single_line_item() {
    let mut store = CartStore::open(MemoryStore::new());
    for _ in 0..7 {
        store.add(product_a());
    }

    assert_eq!(store.items().len(), 1);
    assert_eq!(store.items()[0].quantity, 7);
    assert_totals_consistent(store.cart());
}

#[test]
fn add_same_product_twice() {
    let mut store = CartStore::open(MemoryStore::new());
    store.add(product_a());
    store.add(product_a());

    assert_eq!(store.items().len(), 1);
    assert_eq!(store.items()[0].quantity, 2);
    assert_eq!(store.totals().total_price.display_amount(), "20.00");
}

#[test]
fn add_two_products() {
    let mut store = CartStore::open(MemoryStore::new());
    store.add(product_a());
    store.add(product_b());

    assert_eq!(store.items().len(), 2);
    assert_eq!(store.totals().total_quantity, 2);
    assert_eq!(store.totals().total_price.display_amount(), "15.50");
}

#[test]
fn set_quantity_then_zero_returns_to_empty() {
    let mut store = CartStore::open(MemoryStore::new());
    let a = ProductId::from(1);

    store.add(product_a());
    store.set_quantity(&a, 3);
    assert_eq!(store.totals().total_quantity, 3);
    assert_eq!(store.cart().status(), CartStatus::Populated);

    store.set_quantity(&a, 0);
    assert_eq!(store.cart().status(), CartStatus::Empty);
    assert_eq!(store.cart(), &Cart::new());
}

#[test]
fn set_quantity_zero_matches_remove() {
    let mut via_set = CartStore::open(MemoryStore::new());
    let mut via_remove = CartStore::open(MemoryStore::new());
    for store in [&mut via_set, &mut via_remove] {
        store.add(product_a());
        store.add(product_b());
        store.add(product_b());
    }

    via_set.set_quantity(&ProductId::from(2), 0);
    via_remove.remove(&ProductId::from(2));

    assert_eq!(via_set.cart(), via_remove.cart());
}

#[test]
fn remove_is_idempotent() {
    let mut store = CartStore::open(MemoryStore::new());
    store.add(product_a());
    store.add(product_b());

    store.remove(&ProductId::from(1));
    let after_first = store.cart().clone();
    assert!(!store.remove(&ProductId::from(1)));

    assert_eq!(store.cart(), &after_first);
}

#[test]
fn unknown_ids_are_noops() {
    let mut store = CartStore::open(MemoryStore::new());
    store.add(product_a());
    let before = store.cart().clone();

    assert!(!store.remove(&ProductId::from("missing")));
    assert!(!store.set_quantity(&ProductId::from(42), 3));

    assert_eq!(store.cart(), &before);
}

#[test]
fn clear_always_yields_canonical_empty_state() {
    let mut store = CartStore::open(MemoryStore::new());
    store.clear();
    assert_eq!(store.cart(), &Cart::new());

    store.add(product_a());
    store.add(product_b());
    store.set_quantity(&ProductId::from(1), 9);
    store.clear();

    assert_eq!(store.cart(), &Cart::new());
    assert_eq!(store.totals().total_quantity, 0);
    assert_eq!(store.totals().total_price.display_amount(), "0.00");
}

#[test]
fn totals_track_every_mutation() {
    let mut store = CartStore::open(MemoryStore::new());
    let odd = Product::new("odd", "Odd Price", money("0.335"));

    store.add(product_a());
    assert_totals_consistent(store.cart());
    store.add(odd.clone());
    assert_totals_consistent(store.cart());
    store.add(odd);
    assert_totals_consistent(store.cart());
    store.set_quantity(&ProductId::from("odd"), 5);
    assert_totals_consistent(store.cart());
    store.remove(&ProductId::from(1));
    assert_totals_consistent(store.cart());
    assert_eq!(store.totals().total_price, money("1.68"));
}

#[test]
fn persist_then_restore_round_trip() {
    let dir = tempfile::tempdir().unwrap();

    let original = {
        let mut store = CartStore::open(FileStore::open(dir.path()).unwrap());
        store.add(product_b());
        store.add(product_a());
        store.add(product_b());
        store.add(Product::new("sku-9", "Text Id", money("109.95")).with_rating(3.9, 120));
        store.cart().clone()
    };

    let restored = CartStore::open(FileStore::open(dir.path()).unwrap());
    assert_eq!(restored.cart(), &original);

    let order: Vec<String> = restored.items().iter().map(|i| i.id().to_string()).collect();
    assert_eq!(order, vec!["2", "1", "sku-9"]);
}

#[test]
fn restore_from_existing_snapshot_without_any_add() {
    let backing = MemoryStore::new();
    backing
        .set(
            CART_STORAGE_KEY,
            br#"{"items":[{"id":1,"title":"Product A","price":9.99,"category":"x","image":"","quantity":2}],"totalQuantity":2,"totalPrice":19.98}"#,
        )
        .unwrap();

    let store = CartStore::open(&backing);
    assert_eq!(store.totals().total_quantity, 2);
    assert_eq!(store.totals().total_price.display_amount(), "19.98");
}

#[test]
fn unparsable_snapshot_falls_back_to_empty_and_is_replaced() {
    let backing = MemoryStore::new();
    backing.set(CART_STORAGE_KEY, b"not json at all").unwrap();

    let mut store = CartStore::open(&backing);
    assert!(store.cart().is_empty());

    store.add(product_a());
    let reopened = CartStore::open(&backing);
    assert_eq!(reopened.totals().total_quantity, 1);
}
